//! Corpus files on disk.

use wordbridge::{Corpus, CorpusError, Error, GraphPoet};

use crate::test_utils::{corpus_file, PANGRAM};

#[test]
fn poet_from_file() {
    let file = corpus_file("This is a test of the\nMugar Omni Theater\nsound system.\n");
    let p = GraphPoet::from_path(file.path()).unwrap();
    assert_eq!(p.poem("Test the system."), "Test of the system.");
}

#[test]
fn line_breaks_join_words() {
    // "slow" ends one line and "brown" starts the next; they must be adjacent.
    let file = corpus_file("quick slow\nbrown");
    let p = GraphPoet::from_path(file.path()).unwrap();
    assert_eq!(
        p.poem(PANGRAM),
        "The quick slow brown fox jumped over the lazy dog"
    );
}

#[test]
fn empty_file_leaves_input_unchanged() {
    let file = corpus_file("");
    let p = GraphPoet::from_path(file.path()).unwrap();
    assert_eq!(p.poem(PANGRAM), PANGRAM);
}

#[test]
fn nonexistent_corpus_is_io_error() {
    let err = GraphPoet::from_path("does/not/exist").unwrap_err();
    assert!(matches!(err, Error::Corpus(CorpusError::Io { .. })));
}

#[test]
fn directory_corpus_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = GraphPoet::from_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Corpus(CorpusError::Io { .. })));
}

#[test]
fn corpus_tokens_are_case_folded() {
    let file = corpus_file("Hello, HELLO, hello, goodbye!");
    let corpus = Corpus::from_path(file.path()).unwrap();
    assert_eq!(corpus.len(), 4);
    assert!(corpus.tokens().iter().all(|t| t == &t.to_lowercase()));
}
