//! Per-vertex outgoing adjacency.
//!
//! Each vertex owns only its outgoing edges, keyed by the target's handle.
//! There is no reverse index: incoming edges are found by scanning every
//! vertex, which keeps edge mutation O(log out-degree) and leaves a single
//! place to update.

use std::collections::BTreeMap;

use wordbridge_core::{Weight, NO_EDGE};

use super::types::VertexId;

/// One arena slot: a label plus its outgoing edges.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<L> {
    pub(crate) label: L,
    /// Forward adjacency: target → weight, ordered by target handle.
    pub(crate) outgoing: BTreeMap<VertexId, Weight>,
}

impl<L> Vertex<L> {
    pub(crate) fn new(label: L) -> Self {
        Self {
            label,
            outgoing: BTreeMap::new(),
        }
    }

    /// Add, change or remove the edge to `target`.
    ///
    /// A weight of [`NO_EDGE`] removes the edge. Returns the previous weight,
    /// or [`NO_EDGE`] if there was no edge.
    pub(crate) fn set_edge_to(&mut self, target: VertexId, weight: Weight) -> Weight {
        let previous = if weight == NO_EDGE {
            self.outgoing.remove(&target)
        } else {
            self.outgoing.insert(target, weight)
        };
        previous.unwrap_or(NO_EDGE)
    }

    /// Weight of the edge to `target`, or [`NO_EDGE`].
    pub(crate) fn edge_to(&self, target: VertexId) -> Weight {
        self.outgoing.get(&target).copied().unwrap_or(NO_EDGE)
    }

    /// Drop the edge to `target`; true if one existed.
    pub(crate) fn detach(&mut self, target: VertexId) -> bool {
        self.outgoing.remove(&target).is_some()
    }

    pub(crate) fn out_degree(&self) -> usize {
        self.outgoing.len()
    }
}
