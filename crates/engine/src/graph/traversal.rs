//! Adjacency queries: sources, targets and two-hop paths.
//!
//! Every query returns owned data. Unknown labels produce empty results.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use wordbridge_core::Weight;

use super::types::TwoHopPath;
use super::WeightedDirectedGraph;

impl<L> WeightedDirectedGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Every vertex with an edge into `target`, mapped to that edge's weight.
    ///
    /// Scans all vertices; there is no reverse index.
    pub fn sources_of<Q>(&self, target: &Q) -> HashMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(dst) = self.id_of(target) else {
            return HashMap::new();
        };
        self.live()
            .filter_map(|(_, vertex)| {
                vertex
                    .outgoing
                    .get(&dst)
                    .map(|&weight| (vertex.label.clone(), weight))
            })
            .collect()
    }

    /// Every vertex `source` has an edge to, mapped to that edge's weight.
    pub fn targets_of<Q>(&self, source: &Q) -> HashMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(vertex) = self.vertex_of(source) else {
            return HashMap::new();
        };
        vertex
            .outgoing
            .iter()
            .filter_map(|(&dst, &weight)| self.label_of(dst).map(|l| (l.clone(), weight)))
            .collect()
    }

    /// All paths `a -> via -> b` of exactly two edges.
    ///
    /// Paths are listed in the handle order of `via`, i.e. the order in
    /// which the intermediate labels were first inserted.
    pub fn two_hop_paths<Q>(&self, a: &Q, b: &Q) -> Vec<TwoHopPath<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(start), Some(end)) = (self.vertex_of(a), self.id_of(b)) else {
            return Vec::new();
        };

        let mut paths = Vec::new();
        for (&via, &first) in &start.outgoing {
            let Some(middle) = self.vertex(via) else {
                continue;
            };
            if let Some(&second) = middle.outgoing.get(&end) {
                paths.push(TwoHopPath {
                    via: middle.label.clone(),
                    first,
                    second,
                });
            }
        }
        paths
    }
}
