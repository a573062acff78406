//! Engine layer for wordbridge
//!
//! This crate implements:
//! - [`graph`]: a mutable weighted directed graph over any hashable label
//! - [`text`]: corpus loading and word tokenization
//! - [`poet`]: affinity-graph construction and bridge-word poems
//!
//! Everything is single-threaded and in memory. Callers sharing a graph
//! across threads must serialize access themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod poet;
pub mod text;

pub use graph::{Edge, GraphSnapshot, TwoHopPath, VertexId, WeightedDirectedGraph};
pub use poet::{AffinityGraphBuilder, Bridge, GraphPoet, PoetOptions};
pub use text::Corpus;
