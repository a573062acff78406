//! Value types returned by graph queries.

use serde::{Deserialize, Serialize};
use std::fmt;

use wordbridge_core::Weight;

/// Handle of a vertex inside one graph.
///
/// Handles are handed out in insertion order and never reused. Compaction
/// renumbers them without changing their relative order, so ordering by
/// handle is always ordering by first insertion of the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    /// Largest arena position a handle can address.
    pub const MAX_INDEX: usize = u32::MAX as usize;

    /// Handle for arena position `index`, or `None` past [`Self::MAX_INDEX`].
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(VertexId)
    }

    /// Position of this vertex in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Full edge representation including endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<L> {
    /// Source label.
    pub src: L,
    /// Target label.
    pub dst: L,
    /// Edge weight, always positive.
    pub weight: Weight,
}

/// A length-2 path `a -> via -> b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoHopPath<L> {
    /// The intermediate vertex.
    pub via: L,
    /// Weight of `a -> via`.
    pub first: Weight,
    /// Weight of `via -> b`.
    pub second: Weight,
}

impl<L> TwoHopPath<L> {
    /// Combined weight of both hops.
    pub fn score(&self) -> u64 {
        u64::from(self.first) + u64::from(self.second)
    }
}

/// A copy of a graph at a point in time.
///
/// Vertices and edges are listed in handle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<L> {
    /// All vertex labels.
    pub vertices: Vec<L>,
    /// All edges.
    pub edges: Vec<Edge<L>>,
}

impl<L> GraphSnapshot<L> {
    /// Number of vertices in the snapshot.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the snapshot.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: fmt::Display> GraphSnapshot<L> {
    /// Export edges to CSV format.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("src,dst,weight\n");
        for e in &self.edges {
            let src = csv_escape(&e.src.to_string());
            let dst = csv_escape(&e.dst.to_string());
            out.push_str(&format!("{},{},{}\n", src, dst, e.weight));
        }
        out
    }
}

/// Escape a CSV field value.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
