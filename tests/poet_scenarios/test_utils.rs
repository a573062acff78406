//! Shared helpers for the poet scenario suite.

use std::io::Write;

use tempfile::NamedTempFile;
use wordbridge::{Corpus, GraphPoet};

pub const PANGRAM: &str = "The quick brown fox jumped over the lazy dog";

/// Build a poet from in-memory corpus text.
pub fn poet(text: &str) -> GraphPoet {
    GraphPoet::from_corpus(&Corpus::from_text(text)).unwrap()
}

/// Write corpus text to a temporary file that lives as long as the handle.
pub fn corpus_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
