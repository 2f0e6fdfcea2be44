use std::fmt::{Debug, Display};

use crate::Node;

/// Edge weights are floating point numbers; negative and zero weights are allowed
/// unless an algorithm states otherwise.
pub type Weight = f64;

/// Weight of an edge that was inserted without an explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An unweighted edge defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
///
/// `Edge` is the identity key of an edge inside a graph: two edges between the same
/// (ordered) pair of nodes are the same edge, whatever their weights.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge::new(self.0, self.1, weight)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge carrying a weight that can be changed in place.
///
/// Value equality compares the weight as well; use [`WeightedEdge::edge`] to
/// compare edges by their endpoints only.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    source: Node,
    target: Node,
    weight: Weight,
}

impl WeightedEdge {
    /// Creates a new edge `source -> target` with the given weight
    pub const fn new(source: Node, target: Node, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Creates a new edge `source -> target` with weight [`DEFAULT_WEIGHT`]
    pub const fn unweighted(source: Node, target: Node) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }

    #[inline]
    pub fn source(&self) -> Node {
        self.source
    }

    #[inline]
    pub fn target(&self) -> Node {
        self.target
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Overwrites the weight of this edge
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// Returns the unweighted endpoint pair identifying this edge
    pub fn edge(&self) -> Edge {
        Edge(self.source, self.target)
    }

    /// Returns the endpoint that is not `u`.
    /// For self-loops this is `u` itself.
    pub fn opposite(&self, u: Node) -> Node {
        debug_assert!(u == self.source || u == self.target);
        if u == self.source {
            self.target
        } else {
            self.source
        }
    }

    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the same edge with switched endpoints and identical weight
    pub fn reverse(&self) -> Self {
        Self::new(self.target, self.source, self.weight)
    }

    /// Returns the same edge with the endpoint of smaller index as source
    pub fn normalized(&self) -> Self {
        if self.source <= self.target {
            *self
        } else {
            self.reverse()
        }
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.source <= self.target
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.source, self.target, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        Self::unweighted(value.0, value.1)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        Self::unweighted(value.0, value.1)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

/// Caller-facing view of a [`WeightedEdge`] with its endpoints translated back to labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelledEdge<'a, L> {
    pub source: &'a L,
    pub target: &'a L,
    pub weight: Weight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_edge_identity() {
        let a = WeightedEdge::new(1, 2, 3.5);
        let b = WeightedEdge::new(1, 2, -1.0);

        assert_ne!(a, b);
        assert_eq!(a.edge(), b.edge());
        assert_eq!(a.reverse().edge(), Edge(2, 1));
        assert_eq!(a.reverse().weight(), 3.5);
    }

    #[test]
    fn weighted_edge_mutation() {
        let mut e: WeightedEdge = (0, 4).into();
        assert_eq!(e.weight(), DEFAULT_WEIGHT);

        e.set_weight(-2.0);
        assert_eq!(e.weight(), -2.0);
        assert_eq!(e.edge(), Edge(0, 4));
    }

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 1).is_normalized());
        assert!(Edge(1, 1).is_loop());

        let e = WeightedEdge::new(5, 2, 7.0).normalized();
        assert_eq!((e.source(), e.target(), e.weight()), (2, 5, 7.0));
        assert_eq!(e.opposite(2), 5);
    }
}
