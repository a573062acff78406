//! Weighted directed graph.
//!
//! A mutable graph over labels of any `Clone + Eq + Hash + Debug` type.
//! Vertices live in an arena and are addressed internally by a
//! [`VertexId`]; each vertex owns a map of its outgoing edges. Removal
//! leaves a tombstone slot, and the arena is compacted once tombstones
//! outnumber live vertices.
//!
//! Invariants, checked by [`WeightedDirectedGraph::verify`]:
//! - every edge endpoint is a live vertex
//! - every stored weight is positive
//! - no edge goes from a vertex to itself
//! - at most one edge per ordered (source, target) pair
//!
//! Setting an edge with a positive weight creates any missing endpoint.
//! Setting weight 0 removes the edge and never creates vertices.

mod adjacency;
pub mod integrity;
mod snapshot;
pub mod traversal;
pub mod types;

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use wordbridge_core::{GraphError, GraphResult, Weight, NO_EDGE};

use adjacency::Vertex;
pub use types::{Edge, GraphSnapshot, TwoHopPath, VertexId};

/// Mutable weighted directed graph without self-loops or parallel edges.
#[derive(Debug, Clone)]
pub struct WeightedDirectedGraph<L> {
    /// Vertex arena. Removed vertices leave a `None` until the next compaction.
    slots: Vec<Option<Vertex<L>>>,
    /// Label → handle of every live vertex.
    index: HashMap<L, VertexId>,
    /// Number of stored edges.
    edge_count: usize,
}

impl<L> Default for WeightedDirectedGraph<L> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<L> WeightedDirectedGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Vertices
    // =========================================================================

    /// Add a vertex. Returns false if it was already present.
    ///
    /// # Errors
    ///
    /// [`GraphError::CapacityExceeded`] if the arena has no handle left.
    pub fn add_vertex(&mut self, label: L) -> GraphResult<bool> {
        if self.index.contains_key(&label) {
            return Ok(false);
        }
        let id = self.intern(label)?;
        self.debug_verify_vertex(id);
        Ok(true)
    }

    /// Remove a vertex and every edge that touches it.
    ///
    /// Returns false, leaving the graph untouched, if the vertex is absent.
    pub fn remove_vertex<Q>(&mut self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(id) = self.index.remove(label) else {
            return false;
        };

        let mut cascaded = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .map_or(0, |vertex| vertex.out_degree());

        for vertex in self.slots.iter_mut().flatten() {
            if vertex.detach(id) {
                cascaded += 1;
            }
        }
        self.edge_count -= cascaded;

        tracing::debug!(
            target: "wordbridge::graph",
            vertex = ?id,
            cascaded_edges = cascaded,
            "Removed vertex"
        );
        self.compact_if_sparse();
        true
    }

    /// True if the label is a vertex of this graph.
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(label)
    }

    /// A copy of the vertex set.
    pub fn vertices(&self) -> HashSet<L> {
        self.index.keys().cloned().collect()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Add, change or remove the edge `source -> target`.
    ///
    /// With a positive weight the edge is created or overwritten and missing
    /// endpoints are added. With weight 0 any existing edge is removed and
    /// no vertex is created. Returns the previous weight, or 0 if there was
    /// no edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] if `source == target`, whatever the weight;
    /// [`GraphError::CapacityExceeded`] if a missing endpoint cannot be added.
    pub fn set_edge(&mut self, source: L, target: L, weight: Weight) -> GraphResult<Weight> {
        if source == target {
            return Err(GraphError::self_loop(&source));
        }

        if weight == NO_EDGE {
            let (Some(src), Some(dst)) = (self.id_of(&source), self.id_of(&target)) else {
                return Ok(NO_EDGE);
            };
            let previous = self.vertex_mut(src)?.set_edge_to(dst, NO_EDGE);
            if previous != NO_EDGE {
                self.edge_count -= 1;
            }
            self.debug_verify_vertex(src);
            return Ok(previous);
        }

        let src = self.intern(source)?;
        let dst = self.intern(target)?;
        let previous = self.vertex_mut(src)?.set_edge_to(dst, weight);
        if previous == NO_EDGE {
            self.edge_count += 1;
        }
        self.debug_verify_vertex(src);
        Ok(previous)
    }

    /// Add 1 to the weight of `source -> target`, creating the edge and its
    /// endpoints as needed. Returns the previous weight.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] if `source == target`;
    /// [`GraphError::WeightOverflow`] if the edge is already at the maximum.
    pub fn increment_edge(&mut self, source: L, target: L) -> GraphResult<Weight> {
        if source == target {
            return Err(GraphError::self_loop(&source));
        }
        let current = self.weight(&source, &target);
        let next = current
            .checked_add(1)
            .ok_or_else(|| GraphError::weight_overflow(&source, &target))?;
        self.set_edge(source, target, next)
    }

    /// Weight of `source -> target`, or 0 if there is no such edge.
    pub fn weight<Q>(&self, source: &Q, target: &Q) -> Weight
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.vertex_of(source), self.id_of(target)) {
            (Some(vertex), Some(dst)) => vertex.edge_to(dst),
            _ => NO_EDGE,
        }
    }

    /// A copy of every edge, ordered by (source handle, target handle).
    pub fn edges(&self) -> Vec<Edge<L>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for vertex in self.slots.iter().flatten() {
            for (&dst, &weight) in &vertex.outgoing {
                if let Some(target) = self.label_of(dst) {
                    edges.push(Edge {
                        src: vertex.label.clone(),
                        dst: target.clone(),
                        weight,
                    });
                }
            }
        }
        edges
    }

    // =========================================================================
    // Arena access
    // =========================================================================

    /// Handle of a live vertex.
    pub(crate) fn id_of<Q>(&self, label: &Q) -> Option<VertexId>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(label).copied()
    }

    pub(crate) fn vertex(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub(crate) fn vertex_of<Q>(&self, label: &Q) -> Option<&Vertex<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.id_of(label).and_then(|id| self.vertex(id))
    }

    pub(crate) fn label_of(&self, id: VertexId) -> Option<&L> {
        self.vertex(id).map(|v| &v.label)
    }

    /// Live vertices in handle order.
    pub(crate) fn live(&self) -> impl Iterator<Item = (VertexId, &Vertex<L>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((VertexId::from_index(i)?, slot.as_ref()?)))
    }

    fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex<L>> {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or_else(|| GraphError::corrupt(format!("index points at empty slot {:?}", id)))
    }

    /// Handle of `label`, allocating a new slot if it is not a vertex yet.
    fn intern(&mut self, label: L) -> GraphResult<VertexId> {
        if let Some(id) = self.index.get(&label) {
            return Ok(*id);
        }
        let id = VertexId::from_index(self.slots.len()).ok_or(GraphError::CapacityExceeded {
            limit: VertexId::MAX_INDEX,
        })?;
        self.index.insert(label.clone(), id);
        self.slots.push(Some(Vertex::new(label)));
        Ok(id)
    }

    /// Drop tombstones once they outnumber live vertices.
    ///
    /// Live vertices keep their relative order, so handle order is still
    /// first-insertion order afterwards.
    fn compact_if_sparse(&mut self) {
        let live = self.index.len();
        let tombstones = self.slots.len().saturating_sub(live);
        if tombstones <= live {
            return;
        }

        let mut remap = Vec::with_capacity(self.slots.len());
        let mut next = 0usize;
        for slot in &self.slots {
            if slot.is_some() {
                remap.push(VertexId::from_index(next));
                next += 1;
            } else {
                remap.push(None);
            }
        }

        let slots = std::mem::take(&mut self.slots);
        self.slots = slots
            .into_iter()
            .flatten()
            .map(|mut vertex| {
                vertex.outgoing = std::mem::take(&mut vertex.outgoing)
                    .into_iter()
                    .filter_map(|(dst, weight)| {
                        let dst = remap.get(dst.index()).copied().flatten()?;
                        Some((dst, weight))
                    })
                    .collect();
                Some(vertex)
            })
            .collect();
        for (i, slot) in self.slots.iter().enumerate() {
            if let (Some(vertex), Some(id)) = (slot, VertexId::from_index(i)) {
                if let Some(entry) = self.index.get_mut(&vertex.label) {
                    *entry = id;
                }
            }
        }

        tracing::debug!(
            target: "wordbridge::graph",
            reclaimed = tombstones,
            live,
            "Compacted vertex arena"
        );
        self.debug_verify();
    }
}
