//! Documented corpus/input examples.

use std::collections::HashSet;

use wordbridge::{tokenize_corpus, AffinityGraphBuilder, PoetOptions, TieBreak};

use crate::test_utils::{poet, PANGRAM};

#[test]
fn empty_corpus_returns_input_unchanged() {
    assert_eq!(poet("").poem("The quick brown fox"), "The quick brown fox");
    assert_eq!(poet("").poem(PANGRAM), PANGRAM);
}

#[test]
fn mugar_omni_theater() {
    let p = poet("This is a test of the Mugar Omni Theater sound system.");
    assert_eq!(p.poem("Test the system."), "Test of the system.");
}

#[test]
fn hello_goodbye_graph() {
    let graph = AffinityGraphBuilder::build(tokenize_corpus("Hello, HELLO, hello, goodbye!")).unwrap();
    assert_eq!(
        graph.vertices(),
        HashSet::from(["hello,".to_string(), "goodbye!".to_string()])
    );
    // The repeated "hello," pairs would be self-loops and are not counted.
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.targets_of("hello,")["goodbye!"], 1);
    assert!(graph.sources_of("hello,").is_empty());
}

#[test]
fn heavier_two_hop_path_is_chosen() {
    // a -1-> light -1-> b scores 2, a -1-> heavy -2-> b scores 3
    let p = poet("a light b a heavy b heavy b");
    let bridge = p.bridge("a", "b").unwrap();
    assert_eq!(bridge.word, "heavy");
    assert_eq!(bridge.score, 3);
    assert_eq!(p.poem("a b"), "a heavy b");
}

#[test]
fn chosen_bridge_always_has_max_score() {
    let p = poet("x p y x q y q y x r y r y x s y");
    let graph = p.graph();
    let best = graph
        .two_hop_paths("x", "y")
        .iter()
        .map(|path| path.score())
        .max()
        .unwrap();
    for tie_break in [TieBreak::FirstSeen, TieBreak::Lexicographic] {
        let p = p.clone().with_options(PoetOptions::new().tie_break(tie_break));
        assert_eq!(p.bridge("x", "y").unwrap().score, best);
    }
}

#[test]
fn tie_break_is_documented_and_stable() {
    let p = poet("go west home go east home");
    for _ in 0..10 {
        assert_eq!(p.poem("Go home"), "Go west home");
    }
    let lex = p.with_options(PoetOptions::new().tie_break(TieBreak::Lexicographic));
    assert_eq!(lex.poem("Go home"), "Go east home");
}

#[test]
fn unseen_words_get_no_bridge() {
    let p = poet("alpha beta gamma");
    assert_eq!(p.poem("Delta Epsilon"), "Delta Epsilon");
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(poet("a b c").poem(""), "");
}

#[test]
fn output_has_single_spaces_and_no_padding() {
    let p = poet("alpha beta gamma");
    let out = p.poem("   alpha\t\tgamma   ");
    assert_eq!(out, "alpha beta gamma");
}
