/*!
# Graph Operations

Capability traits implemented by all graph representations in [`repr`](crate::repr).

The traits come in two layers:
- **index-level** traits ([`GraphNodeOrder`], [`AdjacencyList`], [`DirectedAdjacencyList`],
  [`AdjacencyTest`], [`GraphEdgeEditing`], ...) operate on dense [`Node`] indices and panic
  on indices that are out of range,
- **labelled** traits ([`LabelledAdjacency`], [`LabelledDirectedAdjacency`],
  [`LabelledGraphEditing`]) are blanket-implemented on top and accept caller labels,
  reporting unknown labels as [`GraphError`].
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Marker types for the orientation of a graph
pub trait GraphDir {
    const DIRECTED: bool;
}

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Exposes whether a graph is directed or undirected at the type level
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if edges have an orientation
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if `(u, v)` and `(v, u)` denote the same edge
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all node indices.
    /// In contrast to `self.vertices()`, the returned range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `u` if it is a valid node index and [`GraphError::NodeOutOfRange`] otherwise
    fn check_node(&self, u: Node) -> Result<Node> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                len: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Translation between caller labels and dense node indices
pub trait LabelledGraph: GraphNodeOrder {
    type Label: Label;

    /// Returns the label of a node.
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &Self::Label;

    /// Returns the index of a label or `None` if the label is not part of the graph
    fn index_of(&self, label: &Self::Label) -> Option<Node>;

    /// Returns the index of a label or [`GraphError::UnknownNode`]
    fn try_index_of(&self, label: &Self::Label) -> Result<Node> {
        self.index_of(label)
            .ok_or_else(|| GraphError::unknown_node(label))
    }

    /// Returns *true* if the label is part of the graph
    fn contains_node(&self, label: &Self::Label) -> bool {
        self.index_of(label).is_some()
    }

    /// Returns an iterator over all labels in index order
    fn labels(&self) -> impl Iterator<Item = &Self::Label> + '_ {
        self.vertices().map(|u| self.label_of(u))
    }

    /// Translates the endpoints of an edge back to labels
    fn labelled<'a>(&'a self, edge: &WeightedEdge) -> LabelledEdge<'a, Self::Label> {
        LabelledEdge {
            source: self.label_of(edge.source()),
            target: self.label_of(edge.target()),
            weight: edge.weight(),
        }
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the edges leaving `u` in insertion order.
    /// For undirected graphs, these are all edges incident to `u`, oriented such that `u` is the source.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_;

    /// Returns the number of (outgoing) edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of edges incident to `u`, ie. in- plus out-degree for directed graphs
    /// ** Panics if `u >= n` **
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges_of(u).map(|e| e.target())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.edges_of(u)
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }

    /// Returns all edges in the graph sorted by their endpoints.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<WeightedEdge> {
        self.edges(only_normalized)
            .copied()
            .sorted_by_key(|e| e.edge())
            .collect_vec()
    }

    /// Returns the first edge (in node order) whose weight is negative
    fn first_negative_edge(&self) -> Option<&WeightedEdge> {
        self.edges(false).find(|e| e.weight() < 0.0)
    }

    /// Fails with [`GraphError::UndefinedWeight`] on the first edge (in node order) weighted NaN
    fn check_weights_defined(&self) -> Result<()> {
        match self.edges(false).find(|e| e.weight().is_nan()) {
            Some(e) => Err(GraphError::UndefinedWeight { edge: e.edge() }),
            None => Ok(()),
        }
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Additional getters for graphs that store incoming edges separately
pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_edges_of => edges_of(u : Node) -> impl Iterator<Item = &WeightedEdge> + '_);
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);

    /// Returns an iterator over the edges `(v, u)` entering `u` in insertion order
    /// ** Panics if `u >= n` **
    fn in_edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_;

    /// Returns the number of incoming edges of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_edges_of(u).map(|e| e.source())
    }

    node_iterator!(in_degrees, in_degree_of, NumNodes);

    /// Returns an iterator over all nodes without incoming edges
    fn sources(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.in_degree_of(u) == 0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the first stored edge `(u, v)` if it exists.
    /// ** Panics if `u >= n` **
    fn edge(&self, u: Node, v: Node) -> Option<&WeightedEdge>;

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes
    fn new() -> Self;
}

/// Provides functions to insert nodes
pub trait GraphNodeEditing: LabelledGraph {
    /// Adds a node with the given label and returns its index.
    /// If the label is already present, returns the existing index and leaves the graph untouched.
    fn add_node(&mut self, label: Self::Label) -> Node;

    /// Adds all labels of the collection
    fn add_nodes(&mut self, labels: impl IntoIterator<Item = Self::Label>) {
        for label in labels {
            self.add_node(label);
        }
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge `(u, v)` with the given weight to the graph.
    /// Returns *true* exactly if the edge was present previously; in this case the graph is
    /// left untouched (in particular, the stored weight is **not** replaced).
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(!self.try_add_edge(u, v, weight))
    }

    /// Adds all edges in the collection
    /// ** Panics if any edge was already present **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for e in edges.into_iter().map(|e| e.into()) {
            self.add_edge(e.source(), e.target(), e.weight());
        }
    }

    /// Removes the edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// Remaining edges keep their relative order.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes the directed edge *(u,v)* from the graph.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }

    /// Replaces the weight of the edge *(u,v)* in every adjacency list holding it.
    /// Returns *true* if the edge exists.
    /// ** Panics if u, v >= n **
    fn try_set_weight(&mut self, u: Node, v: Node, weight: Weight) -> bool;
}

/// A super trait for creating a graph from scratch
pub trait GraphFromScratch: LabelledGraph + Sized {
    /// Creates a graph containing the given labels (in order) and no edges
    fn from_nodes(labels: impl IntoIterator<Item = Self::Label>) -> Self;

    /// Creates a graph from `(source, target, weight)`-triples of labels.
    /// Nodes are indexed in the order of their first appearance; duplicate edges are ignored.
    fn from_edges(edges: impl IntoIterator<Item = (Self::Label, Self::Label, Weight)>) -> Self;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing,
{
    fn from_nodes(labels: impl IntoIterator<Item = Self::Label>) -> Self {
        let mut graph = Self::new();
        graph.add_nodes(labels);
        graph
    }

    fn from_edges(edges: impl IntoIterator<Item = (Self::Label, Self::Label, Weight)>) -> Self {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.connect_weighted(u, v, w);
        }
        graph
    }
}

/// Label-based queries, available on every labelled graph
pub trait LabelledAdjacency: LabelledGraph + AdjacencyList + AdjacencyTest + GraphType {
    /// Returns *true* if the edge `(u, v)` exists; *false* if it does not or if a label is unknown
    fn contains_edge(&self, u: &Self::Label, v: &Self::Label) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Returns the edge `(u, v)` if both labels and the edge exist
    fn find_edge(&self, u: &Self::Label, v: &Self::Label) -> Option<&WeightedEdge> {
        let (u, v) = (self.index_of(u)?, self.index_of(v)?);
        self.edge(u, v)
    }

    /// Returns the number of edges incident to `u` (in- plus out-degree for directed graphs)
    fn degree(&self, u: &Self::Label) -> Result<NumNodes> {
        Ok(self.total_degree_of(self.try_index_of(u)?))
    }

    /// Returns the edges leaving `u` (all incident edges for undirected graphs)
    fn edges_at(&self, u: &Self::Label) -> Result<impl Iterator<Item = &WeightedEdge> + '_> {
        Ok(self.edges_of(self.try_index_of(u)?))
    }

    /// Returns every edge of the graph exactly once
    fn edge_set(&self) -> impl Iterator<Item = LabelledEdge<'_, Self::Label>> + '_ {
        self.edges(Self::is_undirected())
            .map(move |e| self.labelled(e))
    }
}

impl<G> LabelledAdjacency for G where G: LabelledGraph + AdjacencyList + AdjacencyTest + GraphType {}

/// Label-based queries specific to directed graphs
pub trait LabelledDirectedAdjacency: LabelledAdjacency + DirectedAdjacencyList {
    /// Returns the number of edges entering `u`
    fn in_degree(&self, u: &Self::Label) -> Result<NumNodes> {
        Ok(self.in_degree_of(self.try_index_of(u)?))
    }

    /// Returns the number of edges leaving `u`
    fn out_degree(&self, u: &Self::Label) -> Result<NumNodes> {
        Ok(self.out_degree_of(self.try_index_of(u)?))
    }

    /// Returns the edges entering `u` in insertion order
    fn incoming_edges(&self, u: &Self::Label) -> Result<impl Iterator<Item = &WeightedEdge> + '_> {
        Ok(self.in_edges_of(self.try_index_of(u)?))
    }

    /// Returns the edges leaving `u` in insertion order
    fn outgoing_edges(&self, u: &Self::Label) -> Result<impl Iterator<Item = &WeightedEdge> + '_> {
        Ok(self.out_edges_of(self.try_index_of(u)?))
    }
}

impl<G> LabelledDirectedAdjacency for G where G: LabelledAdjacency + DirectedAdjacencyList {}

/// Label-based editing, available on every editable graph
pub trait LabelledGraphEditing: GraphNodeEditing + GraphEdgeEditing {
    /// Adds the edge `(u, v)` with weight [`DEFAULT_WEIGHT`], adding missing endpoints first.
    /// Returns *true* if the edge was inserted and *false* if it was already present.
    fn connect(&mut self, u: Self::Label, v: Self::Label) -> bool {
        self.connect_weighted(u, v, DEFAULT_WEIGHT)
    }

    /// Adds the edge `(u, v)` with the given weight, adding missing endpoints first.
    /// Returns *true* if the edge was inserted and *false* if it was already present,
    /// in which case the present edge keeps its weight.
    fn connect_weighted(&mut self, u: Self::Label, v: Self::Label, weight: Weight) -> bool {
        let u = self.add_node(u);
        let v = self.add_node(v);
        !self.try_add_edge(u, v, weight)
    }

    /// Removes the edge `(u, v)`. Returns *true* if it was present.
    fn disconnect(&mut self, u: &Self::Label, v: &Self::Label) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(u), Some(v)) => self.try_remove_edge(u, v),
            _ => false,
        }
    }

    /// Replaces the weight of the edge `(u, v)`
    fn set_weight(&mut self, u: &Self::Label, v: &Self::Label, weight: Weight) -> Result<()> {
        let (ui, vi) = (self.try_index_of(u)?, self.try_index_of(v)?);
        if self.try_set_weight(ui, vi, weight) {
            Ok(())
        } else {
            Err(GraphError::unknown_edge(u, v))
        }
    }
}

impl<G> LabelledGraphEditing for G where G: GraphNodeEditing + GraphEdgeEditing {}
