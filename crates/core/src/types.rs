//! Shared value types.

use serde::{Deserialize, Serialize};

/// Edge weight.
///
/// Stored edges always carry a positive weight. A weight of 0 is the
/// "no edge" value: setting it removes the edge, and lookups of absent
/// edges return it.
pub type Weight = u32;

/// The weight that stands for "no edge".
pub const NO_EDGE: Weight = 0;

/// How the poet chooses among bridge words that share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The bridge word that entered the graph first wins (default).
    #[default]
    FirstSeen,
    /// The lexicographically smallest bridge word wins.
    Lexicographic,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::FirstSeen => write!(f, "first_seen"),
            TieBreak::Lexicographic => write!(f, "lexicographic"),
        }
    }
}
