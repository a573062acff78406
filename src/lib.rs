//! Wordbridge: weighted word-affinity graphs and bridge-word poetry.
//!
//! ```
//! use wordbridge::{Corpus, GraphPoet};
//!
//! let corpus = Corpus::from_text("This is a test of the Mugar Omni Theater sound system.");
//! let poet = GraphPoet::from_corpus(&corpus)?;
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! # Ok::<(), wordbridge::Error>(())
//! ```
//!
//! The graph itself is usable on its own with any hashable label:
//!
//! ```
//! use wordbridge::WeightedDirectedGraph;
//!
//! let mut g = WeightedDirectedGraph::new();
//! g.set_edge("a", "b", 3)?;
//! assert_eq!(g.targets_of("a")["b"], 3);
//! assert!(g.set_edge("a", "a", 1).is_err());
//! # Ok::<(), wordbridge::GraphError>(())
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;
pub use wordbridge_engine::text::{fold, split_words, tokenize_corpus};
pub use wordbridge_engine::{AffinityGraphBuilder, Corpus, GraphPoet, WeightedDirectedGraph};
