//! Low-level graph storage behind [`Diagram`](super::Diagram).
//!
//! A small directed multigraph keyed by interned [`Id`]s:
//! - Nodes are kept in declaration order (`IndexMap`)
//! - Edges are kept in declaration order (`Vec`); parallel edges and
//!   self-loops are allowed
//! - Incoming and outgoing edge indices are tracked per node for root
//!   detection and neighbour queries
//!
//! This is an internal module; callers go through the builder, which turns a
//! [`MissingNode`] into a diagram-scoped error.

use std::collections::HashMap;

use indexmap::IndexMap;

use archiflow_core::identifier::Id;

/// Position of an edge in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct EdgeIndex(usize);

/// Endpoint referenced by an edge but absent from the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MissingNode(pub(super) Id);

#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    source: Id,
    target: Id,
    value: E,
}

/// Directed multigraph with node data `N` and edge data `E`.
#[derive(Debug, Clone)]
pub(super) struct GraphInternal<N, E> {
    nodes: IndexMap<Id, N>,
    edges: Vec<EdgeRecord<E>>,
    incoming_edges: HashMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex>>,
}

impl<N, E> Default for GraphInternal<N, E> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            incoming_edges: HashMap::new(),
            outgoing_edges: HashMap::new(),
        }
    }
}

impl<N, E> GraphInternal<N, E> {
    /// Creates a new empty graph.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Returns the node data for the given ID, if it exists.
    pub(super) fn node(&self, id: Id) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Iterates node data in declaration order.
    pub(super) fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    pub(super) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the edge data at `idx`.
    ///
    /// # Panics
    /// Panics if the index did not come from this graph.
    pub(super) fn edge(&self, idx: EdgeIndex) -> &E {
        &self.edges[idx.0].value
    }

    /// Iterates edge data in declaration order.
    pub(super) fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter().map(|edge| &edge.value)
    }

    pub(super) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates nodes with no incoming edges, in declaration order.
    pub(super) fn roots(&self) -> impl Iterator<Item = &N> {
        self.nodes
            .iter()
            .filter(|(id, _)| !self.incoming_edges.contains_key(*id))
            .map(|(_, node)| node)
    }

    /// Iterates the targets of edges leaving `source_id`, in edge order.
    ///
    /// A target reached by several parallel edges appears once per edge.
    pub(super) fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = &N> {
        self.outgoing_edges
            .get(&source_id)
            .into_iter()
            .flatten()
            .filter_map(|idx| self.nodes.get(&self.edges[idx.0].target))
    }

    /// Iterates the sources of edges entering `target_id`, in edge order.
    pub(super) fn incoming_nodes(&self, target_id: Id) -> impl Iterator<Item = &N> {
        self.incoming_edges
            .get(&target_id)
            .into_iter()
            .flatten()
            .filter_map(|idx| self.nodes.get(&self.edges[idx.0].source))
    }

    /// Adds a node. Returns `false`, leaving the graph untouched, if the ID
    /// is already present.
    pub(super) fn add_node(&mut self, id: Id, node: N) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, node);
        true
    }

    /// Adds a directed edge between two existing nodes.
    ///
    /// # Errors
    /// Returns [`MissingNode`] naming the first endpoint that is not in the
    /// graph; the graph is left untouched.
    pub(super) fn add_edge(
        &mut self,
        source_id: Id,
        target_id: Id,
        edge: E,
    ) -> Result<EdgeIndex, MissingNode> {
        for id in [source_id, target_id] {
            if !self.nodes.contains_key(&id) {
                return Err(MissingNode(id));
            }
        }

        self.edges.push(EdgeRecord {
            source: source_id,
            target: target_id,
            value: edge,
        });

        let idx = EdgeIndex(self.edges.len() - 1);
        self.outgoing_edges.entry(source_id).or_default().push(idx);
        self.incoming_edges.entry(target_id).or_default().push(idx);
        Ok(idx)
    }
}
