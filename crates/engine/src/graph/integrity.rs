//! Representation invariant checks.
//!
//! [`WeightedDirectedGraph::verify`] walks the whole arena and reports the
//! first broken invariant. Debug builds check the touched vertex after every
//! mutation and run the full walk after arena compaction.

use std::fmt::Debug;
use std::hash::Hash;

use wordbridge_core::{GraphError, GraphResult, NO_EDGE};

use super::types::VertexId;
use super::WeightedDirectedGraph;

impl<L> WeightedDirectedGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Check every representation invariant.
    ///
    /// - the label index and the live arena slots agree in both directions
    /// - every edge target is a live vertex other than the source
    /// - every stored weight is positive
    /// - the cached edge count matches the stored edges
    /// - |E| ≤ |V|·(|V|−1)
    pub fn verify(&self) -> GraphResult<()> {
        let mut live = 0usize;
        let mut stored_edges = 0usize;

        for (id, vertex) in self.live() {
            live += 1;
            match self.index.get(&vertex.label) {
                Some(&indexed) if indexed == id => {}
                _ => {
                    return Err(GraphError::corrupt(format!(
                        "vertex {:?} at {:?} is not indexed",
                        vertex.label, id
                    )))
                }
            }

            for (&dst, &weight) in &vertex.outgoing {
                if dst == id {
                    return Err(GraphError::corrupt(format!(
                        "self-loop on {:?}",
                        vertex.label
                    )));
                }
                if weight == NO_EDGE {
                    return Err(GraphError::corrupt(format!(
                        "zero-weight edge from {:?}",
                        vertex.label
                    )));
                }
                if self.vertex(dst).is_none() {
                    return Err(GraphError::corrupt(format!(
                        "dangling edge from {:?} to {:?}",
                        vertex.label, dst
                    )));
                }
                stored_edges += 1;
            }
        }

        if live != self.index.len() {
            return Err(GraphError::corrupt(format!(
                "{} live vertices but {} indexed labels",
                live,
                self.index.len()
            )));
        }
        if stored_edges != self.edge_count {
            return Err(GraphError::corrupt(format!(
                "{} stored edges but edge count is {}",
                stored_edges, self.edge_count
            )));
        }
        if stored_edges > live.saturating_mul(live.saturating_sub(1)) {
            return Err(GraphError::corrupt(format!(
                "{} edges exceed the bound for {} vertices",
                stored_edges, live
            )));
        }
        Ok(())
    }

    /// Check the invariants that involve one vertex and its outgoing edges.
    ///
    /// Costs O(out-degree), so it is cheap enough to run after every mutation.
    pub(crate) fn verify_vertex(&self, id: VertexId) -> GraphResult<()> {
        let Some(vertex) = self.vertex(id) else {
            return Err(GraphError::corrupt(format!("{:?} is not a live vertex", id)));
        };
        if self.index.get(&vertex.label) != Some(&id) {
            return Err(GraphError::corrupt(format!(
                "vertex {:?} at {:?} is not indexed",
                vertex.label, id
            )));
        }
        for (&dst, &weight) in &vertex.outgoing {
            if dst == id {
                return Err(GraphError::corrupt(format!("self-loop on {:?}", vertex.label)));
            }
            if weight == NO_EDGE {
                return Err(GraphError::corrupt(format!(
                    "zero-weight edge from {:?}",
                    vertex.label
                )));
            }
            if self.vertex(dst).is_none() {
                return Err(GraphError::corrupt(format!(
                    "dangling edge from {:?} to {:?}",
                    vertex.label, dst
                )));
            }
        }
        let live = self.index.len();
        if self.edge_count > live.saturating_mul(live.saturating_sub(1)) {
            return Err(GraphError::corrupt(format!(
                "{} edges exceed the bound for {} vertices",
                self.edge_count, live
            )));
        }
        Ok(())
    }

    /// Run [`verify`](Self::verify) in debug builds and fail loudly on a
    /// broken invariant.
    #[inline]
    pub(crate) fn debug_verify(&self) {
        if cfg!(debug_assertions) {
            report(self.verify());
        }
    }

    /// Run [`verify_vertex`](Self::verify_vertex) in debug builds and fail
    /// loudly on a broken invariant.
    #[inline]
    pub(crate) fn debug_verify_vertex(&self, id: VertexId) {
        if cfg!(debug_assertions) {
            report(self.verify_vertex(id));
        }
    }
}

fn report(result: GraphResult<()>) {
    if let Err(e) = &result {
        tracing::warn!(target: "wordbridge::graph", error = %e, "Graph integrity check failed");
    }
    debug_assert!(result.is_ok(), "graph invariant violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> VertexId {
        VertexId::from_index(i).unwrap()
    }

    fn sample() -> WeightedDirectedGraph<String> {
        let mut g = WeightedDirectedGraph::new();
        g.set_edge("a".to_string(), "b".to_string(), 1).unwrap();
        g.set_edge("b".to_string(), "c".to_string(), 2).unwrap();
        g
    }

    #[test]
    fn healthy_graph_verifies() {
        assert!(sample().verify().is_ok());
        assert!(WeightedDirectedGraph::<String>::new().verify().is_ok());
    }

    #[test]
    fn detects_dangling_edge() {
        let mut g = sample();
        if let Some(Some(vertex)) = g.slots.get_mut(0) {
            vertex.outgoing.insert(id(42), 1);
        }
        g.edge_count += 1;
        let err = g.verify().unwrap_err();
        assert!(err.to_string().contains("dangling"));
    }

    #[test]
    fn detects_self_loop() {
        let mut g = sample();
        if let Some(Some(vertex)) = g.slots.get_mut(0) {
            vertex.outgoing.insert(id(0), 1);
        }
        g.edge_count += 1;
        assert!(g.verify().unwrap_err().to_string().contains("self-loop"));
    }

    #[test]
    fn detects_zero_weight() {
        let mut g = sample();
        if let Some(Some(vertex)) = g.slots.get_mut(0) {
            vertex.outgoing.insert(id(1), 0);
        }
        assert!(g.verify().unwrap_err().to_string().contains("zero-weight"));
    }

    #[test]
    fn detects_stale_edge_count() {
        let mut g = sample();
        g.edge_count = 5;
        assert!(g.verify().unwrap_err().to_string().contains("edge count"));
    }

    #[test]
    fn detects_unindexed_vertex() {
        let mut g = sample();
        g.index.remove("c");
        assert!(g.verify().is_err());
    }

    #[test]
    fn vertex_check_passes_on_healthy_graph() {
        let g = sample();
        for i in 0..3 {
            assert!(g.verify_vertex(id(i)).is_ok());
        }
    }

    #[test]
    fn vertex_check_catches_local_corruption() {
        let mut g = sample();
        if let Some(Some(vertex)) = g.slots.get_mut(1) {
            vertex.outgoing.insert(id(1), 1);
        }
        assert!(g.verify_vertex(id(1)).unwrap_err().to_string().contains("self-loop"));
        assert!(g.verify_vertex(id(0)).is_ok());
    }

    #[test]
    fn vertex_check_rejects_unknown_handle() {
        assert!(sample().verify_vertex(id(9)).is_err());
    }
}
