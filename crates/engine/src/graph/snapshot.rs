//! Graph snapshots and text rendering.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use super::types::GraphSnapshot;
use super::WeightedDirectedGraph;

impl<L> WeightedDirectedGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Copy the whole graph, vertices and edges in handle order.
    pub fn snapshot(&self) -> GraphSnapshot<L> {
        GraphSnapshot {
            vertices: self.live().map(|(_, v)| v.label.clone()).collect(),
            edges: self.edges(),
        }
    }
}

/// One line per vertex: `label -> target(weight), ...`.
impl<L> fmt::Display for WeightedDirectedGraph<L>
where
    L: Clone + Eq + Hash + Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, vertex) in self.live() {
            write!(f, "{}", vertex.label)?;
            let mut sep = " -> ";
            for (&dst, &weight) in &vertex.outgoing {
                if let Some(target) = self.label_of(dst) {
                    write!(f, "{}{}({})", sep, target, weight)?;
                    sep = ", ";
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
