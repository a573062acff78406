//! Graph-based poetry generator.
//!
//! A [`GraphPoet`] holds a word-affinity graph built from a corpus: vertices
//! are case-folded words and the weight of `w1 -> w2` counts how often `w1`
//! is directly followed by `w2`.
//!
//! Given an input, the poet tries to insert a bridge word between every
//! adjacent pair of input words. The bridge between `a` and `b` is the
//! middle vertex of the heaviest two-edge path `a -> x -> b`; if there is
//! no such path nothing is inserted. Input words keep their case, bridge
//! words are lowercase, and words are joined by a single space.
//!
//! For the corpus `This is a test of the Mugar Omni Theater sound system.`
//! the input `Test the system.` becomes `Test of the system.`.

pub mod affinity;
pub mod bridge;

use std::fmt;
use std::path::Path;

use wordbridge_core::Result;

use crate::graph::WeightedDirectedGraph;
use crate::text::{fold, split_words, Corpus};

pub use affinity::AffinityGraphBuilder;
pub use bridge::{Bridge, PoetOptions};

/// Inserts bridge words into text using a word-affinity graph.
#[derive(Debug, Clone, Default)]
pub struct GraphPoet {
    graph: WeightedDirectedGraph<String>,
    options: PoetOptions,
}

impl GraphPoet {
    /// Wrap an existing affinity graph. Labels are expected to be lowercase.
    pub fn new(graph: WeightedDirectedGraph<String>) -> Self {
        Self {
            graph,
            options: PoetOptions::default(),
        }
    }

    /// Build the affinity graph of a corpus.
    pub fn from_corpus(corpus: &Corpus) -> Result<Self> {
        let graph = AffinityGraphBuilder::build(corpus.tokens().iter().cloned())?;
        Ok(Self::new(graph))
    }

    /// Read a corpus file and build its affinity graph.
    ///
    /// # Errors
    ///
    /// A corpus error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let corpus = Corpus::from_path(path)?;
        Self::from_corpus(&corpus)
    }

    /// Replace the selection options.
    pub fn with_options(mut self, options: PoetOptions) -> Self {
        self.options = options;
        self
    }

    /// Current selection options.
    pub fn options(&self) -> PoetOptions {
        self.options
    }

    /// Read access to the affinity graph.
    pub fn graph(&self) -> &WeightedDirectedGraph<String> {
        &self.graph
    }

    /// Best bridge word between `a` and `b`, compared case-insensitively.
    pub fn bridge(&self, a: &str, b: &str) -> Option<Bridge> {
        let a = fold(a);
        let b = fold(b);
        let paths = self.graph.two_hop_paths(a.as_str(), b.as_str());
        let best = bridge::select(&paths, self.options.tie_break)?;

        tracing::trace!(
            target: "wordbridge::poet",
            from = %a,
            to = %b,
            bridge = %best.via,
            score = best.score(),
            candidates = paths.len(),
            "Selected bridge"
        );
        Some(Bridge {
            word: fold(&best.via),
            score: best.score(),
            candidates: paths.len(),
        })
    }

    /// Insert bridges between adjacent words of an already split input.
    ///
    /// Only original input pairs are bridged; an inserted word never takes
    /// part in another search.
    pub fn poem_tokens(&self, words: &[&str]) -> Vec<String> {
        let mut poem = Vec::with_capacity(words.len() * 2);
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                if let Some(bridge) = self.bridge(words[i - 1], word) {
                    poem.push(bridge.word);
                }
            }
            poem.push((*word).to_string());
        }
        poem
    }

    /// Generate a poem from `input`.
    ///
    /// # Example
    ///
    /// ```
    /// use wordbridge_engine::poet::GraphPoet;
    /// use wordbridge_engine::text::Corpus;
    ///
    /// let corpus = Corpus::from_text("This is a test of the Mugar Omni Theater sound system.");
    /// let poet = GraphPoet::from_corpus(&corpus).unwrap();
    /// assert_eq!(poet.poem("Test the system."), "Test of the system.");
    /// ```
    pub fn poem(&self, input: &str) -> String {
        self.poem_tokens(&split_words(input)).join(" ")
    }
}

impl fmt::Display for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "GraphPoet ({} words, {} affinities, tie-break {})",
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.options.tie_break
        )?;
        write!(f, "{}", self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordbridge_core::TieBreak;

    const PANGRAM: &str = "The quick brown fox jumped over the lazy dog";

    fn poet(corpus: &str) -> GraphPoet {
        GraphPoet::from_corpus(&Corpus::from_text(corpus)).unwrap()
    }

    #[test]
    fn empty_corpus_leaves_input_unchanged() {
        assert_eq!(poet("").poem(PANGRAM), PANGRAM);
        assert_eq!(poet("").poem("The quick brown fox"), "The quick brown fox");
    }

    #[test]
    fn case_variants_of_one_word_leave_input_unchanged() {
        assert_eq!(poet("the THE The tHe").poem(PANGRAM), PANGRAM);
    }

    #[test]
    fn unrelated_corpus_leaves_input_unchanged() {
        assert_eq!(poet("cats sleep all afternoon").poem(PANGRAM), PANGRAM);
    }

    #[test]
    fn mugar_example() {
        let p = poet("This is a test of the Mugar Omni Theater sound system.");
        assert_eq!(p.poem("Test the system."), "Test of the system.");
    }

    #[test]
    fn one_path_per_pair() {
        let p = poet("quick slow brown");
        assert_eq!(
            p.poem(PANGRAM),
            "The quick slow brown fox jumped over the lazy dog"
        );
    }

    #[test]
    fn several_bridges_in_one_input() {
        let p = poet("quick slow brown white fox lazy energetic dog");
        assert_eq!(
            p.poem(PANGRAM),
            "The quick slow brown white fox jumped over the lazy energetic dog"
        );
    }

    #[test]
    fn heaviest_path_wins() {
        // quick -> plain -> fox scores 2, quick -> esoteric -> fox scores 3
        let p = poet("quick plain fox quick esoteric fox esoteric fox");
        assert_eq!(p.poem("The quick fox"), "The quick esoteric fox");
        let bridge = p.bridge("quick", "fox").unwrap();
        assert_eq!(bridge.score, 3);
        assert_eq!(bridge.candidates, 2);
    }

    #[test]
    fn input_case_preserved_bridge_lowercased() {
        let p = poet("alpha BETA gamma");
        assert_eq!(p.poem("ALPHA Gamma"), "ALPHA beta Gamma");
    }

    #[test]
    fn bridges_are_not_chained() {
        // a -> x -> b and x -> y -> b exist, but only the input pair (a, b)
        // is searched.
        let p = poet("a x b x y b");
        assert_eq!(p.poem("a b"), "a x b");
    }

    #[test]
    fn empty_input_gives_empty_poem() {
        let p = poet("a b c");
        assert_eq!(p.poem(""), "");
        assert_eq!(p.poem("   \n "), "");
    }

    #[test]
    fn whitespace_is_normalised() {
        let p = poet("");
        assert_eq!(p.poem("  one \t two\nthree  "), "one two three");
    }

    #[test]
    fn single_word_input() {
        let p = poet("a b c");
        assert_eq!(p.poem("Solo"), "Solo");
    }

    #[test]
    fn tie_break_policies_are_deterministic() {
        // Both "zed" and "amy" score 2 between "start" and "end"; "zed" is
        // seen first in the corpus.
        let p = poet("start zed end start amy end");
        assert_eq!(p.poem("start end"), "start zed end");

        let lex = p
            .clone()
            .with_options(PoetOptions::new().tie_break(TieBreak::Lexicographic));
        assert_eq!(lex.poem("start end"), "start amy end");
    }

    #[test]
    fn uppercase_graph_labels_come_out_lowercase() {
        let mut graph = WeightedDirectedGraph::new();
        graph.set_edge("a".to_string(), "MID".to_string(), 1).unwrap();
        graph.set_edge("MID".to_string(), "b".to_string(), 1).unwrap();
        assert_eq!(GraphPoet::new(graph).poem("a b"), "a mid b");
    }

    #[test]
    fn display_summarises_graph() {
        let p = poet("a b");
        let text = p.to_string();
        assert!(text.starts_with("GraphPoet (2 words, 1 affinities, tie-break first_seen)"));
        assert!(text.contains("a -> b(1)"));
    }
}
