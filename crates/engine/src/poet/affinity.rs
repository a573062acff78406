//! Word-affinity graph construction.
//!
//! Every distinct token becomes a vertex. Every adjacent pair of distinct
//! tokens `(t[i], t[i+1])` adds 1 to the edge `t[i] -> t[i+1]`. Pairs of
//! equal tokens are skipped, since the graph holds no self-loops.

use std::fmt::Debug;
use std::hash::Hash;

use wordbridge_core::GraphResult;

use crate::graph::WeightedDirectedGraph;

/// Builds affinity graphs from token streams in a single pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffinityGraphBuilder;

impl AffinityGraphBuilder {
    /// Build a new graph from `tokens`.
    ///
    /// # Example
    ///
    /// ```
    /// use wordbridge_engine::poet::AffinityGraphBuilder;
    ///
    /// let graph = AffinityGraphBuilder::build(["to", "be", "or", "not", "to", "be"]).unwrap();
    /// assert_eq!(graph.weight("to", "be"), 2);
    /// assert_eq!(graph.vertex_count(), 4);
    /// ```
    pub fn build<L, I>(tokens: I) -> GraphResult<WeightedDirectedGraph<L>>
    where
        L: Clone + Eq + Hash + Debug,
        I: IntoIterator<Item = L>,
    {
        let mut graph = WeightedDirectedGraph::new();
        Self::extend(&mut graph, tokens)?;
        Ok(graph)
    }

    /// Add the vertices and adjacency counts of `tokens` to an existing graph.
    ///
    /// The stream is counted on its own: the last token of an earlier call
    /// is not paired with the first token of this one.
    ///
    /// # Errors
    ///
    /// [`GraphError::WeightOverflow`](wordbridge_core::GraphError::WeightOverflow)
    /// if an adjacency count exceeds the weight range;
    /// [`GraphError::CapacityExceeded`](wordbridge_core::GraphError::CapacityExceeded)
    /// if the stream holds more distinct tokens than the graph can address.
    pub fn extend<L, I>(graph: &mut WeightedDirectedGraph<L>, tokens: I) -> GraphResult<()>
    where
        L: Clone + Eq + Hash + Debug,
        I: IntoIterator<Item = L>,
    {
        let mut previous: Option<L> = None;
        let mut pairs = 0usize;
        for token in tokens {
            graph.add_vertex(token.clone())?;
            if let Some(prev) = previous.take() {
                if prev != token {
                    graph.increment_edge(prev, token.clone())?;
                    pairs += 1;
                }
            }
            previous = Some(token);
        }

        tracing::debug!(
            target: "wordbridge::poet",
            pairs,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Built affinity graph"
        );
        Ok(())
    }
}
