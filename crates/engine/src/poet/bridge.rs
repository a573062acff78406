//! Bridge-word selection.
//!
//! A bridge between words `a` and `b` is a vertex `x` with edges `a -> x`
//! and `x -> b`. Its score is the sum of both weights; the highest score
//! wins. Equal scores are settled by [`TieBreak`].

use wordbridge_core::{PoetConfig, TieBreak};

use crate::graph::TwoHopPath;

/// Options controlling bridge selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoetOptions {
    /// Policy for equal-scoring candidates.
    pub tie_break: TieBreak,
}

impl PoetOptions {
    /// Default options (first-seen tie-break).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break policy.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl From<&PoetConfig> for PoetOptions {
    fn from(config: &PoetConfig) -> Self {
        Self::new().tie_break(config.tie_break)
    }
}

/// The chosen bridge between two words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    /// The bridge word, lowercase.
    pub word: String,
    /// Combined weight of both hops.
    pub score: u64,
    /// How many candidates were considered.
    pub candidates: usize,
}

/// Pick the best-scoring path.
///
/// `paths` must be in graph handle order for [`TieBreak::FirstSeen`] to
/// mean "first inserted".
pub fn select<'a>(
    paths: &'a [TwoHopPath<String>],
    tie_break: TieBreak,
) -> Option<&'a TwoHopPath<String>> {
    let mut best: Option<&TwoHopPath<String>> = None;
    for path in paths {
        let better = match best {
            None => true,
            Some(current) => match path.score().cmp(&current.score()) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => {
                    tie_break == TieBreak::Lexicographic && path.via < current.via
                }
            },
        };
        if better {
            best = Some(path);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(via: &str, first: u32, second: u32) -> TwoHopPath<String> {
        TwoHopPath {
            via: via.to_string(),
            first,
            second,
        }
    }

    #[test]
    fn no_paths_no_bridge() {
        assert!(select(&[], TieBreak::FirstSeen).is_none());
    }

    #[test]
    fn highest_score_wins() {
        let paths = [path("weak", 1, 1), path("strong", 1, 2)];
        assert_eq!(select(&paths, TieBreak::FirstSeen).unwrap().via, "strong");
    }

    #[test]
    fn heavier_first_hop_counts_too() {
        let paths = [path("x", 5, 1), path("y", 1, 4)];
        assert_eq!(select(&paths, TieBreak::FirstSeen).unwrap().via, "x");
    }

    #[test]
    fn first_seen_keeps_earliest_max() {
        let paths = [path("zeta", 2, 2), path("alpha", 1, 3), path("mid", 1, 1)];
        assert_eq!(select(&paths, TieBreak::FirstSeen).unwrap().via, "zeta");
    }

    #[test]
    fn lexicographic_prefers_smallest_max() {
        let paths = [path("zeta", 2, 2), path("alpha", 1, 3), path("aaa", 1, 1)];
        assert_eq!(select(&paths, TieBreak::Lexicographic).unwrap().via, "alpha");
    }

    #[test]
    fn tie_break_never_beats_a_higher_score() {
        let paths = [path("zzz", 3, 3), path("aaa", 1, 1)];
        assert_eq!(select(&paths, TieBreak::Lexicographic).unwrap().via, "zzz");
    }

    #[test]
    fn options_from_config() {
        let config = PoetConfig {
            tie_break: TieBreak::Lexicographic,
        };
        assert_eq!(PoetOptions::from(&config).tie_break, TieBreak::Lexicographic);
        assert_eq!(PoetOptions::new().tie_break, TieBreak::FirstSeen);
    }
}
