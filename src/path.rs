/*!
# Paths

A [`GraphPath`] is the result of a path query: an ordered sequence of nodes together with the
edges connecting them and their total weight. Paths keep a reference to the graph they were
computed on, so labels can be resolved without passing the graph around again.
*/

use std::fmt;

use itertools::Itertools;

use crate::{ops::*, *};

/// A walk `start = nodes[0] -> nodes[1] -> ... -> nodes[k] = end` through a graph.
///
/// Node and edge sequences are copies; the path stays valid (and unchanged) as long as the
/// graph it borrows lives. A path of a single node has no edges and weight `0`.
pub struct GraphPath<'a, G> {
    graph: &'a G,
    nodes: Vec<Node>,
    edges: Vec<WeightedEdge>,
    weight: Weight,
}

impl<'a, G> GraphPath<'a, G>
where
    G: LabelledGraph,
{
    /// Creates a path from its edge sequence starting at `start`.
    /// The weight is the sum of all edge weights.
    ///
    /// ** Panics if consecutive edges do not share an endpoint **
    pub fn from_edges(graph: &'a G, start: Node, edges: Vec<WeightedEdge>) -> Self {
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(start);
        for e in &edges {
            assert_eq!(nodes.last().copied(), Some(e.source()));
            nodes.push(e.target());
        }

        let weight = edges.iter().map(|e| e.weight()).sum();
        Self {
            graph,
            nodes,
            edges,
            weight,
        }
    }

    /// Creates a path from its edge sequence with an explicitly given weight.
    /// Used if the weight of the path is not the sum of its edges (eg. hop counts).
    pub fn with_weight(graph: &'a G, start: Node, edges: Vec<WeightedEdge>, weight: Weight) -> Self {
        let mut path = Self::from_edges(graph, start, edges);
        path.weight = weight;
        path
    }

    /// Returns the path consisting only of `u`
    pub fn single(graph: &'a G, u: Node) -> Self {
        Self::from_edges(graph, u, Vec::new())
    }

    /// Returns the graph the path was computed on
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns the index of the first node
    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    /// Returns the index of the last node
    pub fn end(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns the label of the first node
    pub fn start_label(&self) -> &'a G::Label {
        self.graph.label_of(self.start())
    }

    /// Returns the label of the last node
    pub fn end_label(&self) -> &'a G::Label {
        self.graph.label_of(self.end())
    }

    /// Returns the node indices in path order
    pub fn node_indices(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node labels in path order
    pub fn labels(&self) -> impl Iterator<Item = &'a G::Label> + '_ {
        self.nodes.iter().map(|&u| self.graph.label_of(u))
    }

    /// Returns the edges in path order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns the edges in path order with their endpoints translated to labels
    pub fn labelled_edges(&self) -> impl Iterator<Item = LabelledEdge<'a, G::Label>> + '_ {
        let graph = self.graph;
        self.edges.iter().map(move |e| graph.labelled(e))
    }

    /// Returns the total weight of the path
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the number of edges on the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the path consists of a single node
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns *true* if the path starts and ends at the same node and has at least one edge
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.start() == self.end()
    }
}

impl<G> Clone for GraphPath<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            weight: self.weight,
        }
    }
}

impl<G> fmt::Debug for GraphPath<'_, G>
where
    G: LabelledGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] (weight {})",
            self.labels().map(|l| format!("{l:?}")).join(" -> "),
            self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::DiGraph;

    #[test]
    fn path_from_edges() {
        let graph = DiGraph::from_edges([("a", "b", 2.5), ("b", "c", -1.0)]);
        let edges = graph.ordered_edges(false);
        let path = GraphPath::from_edges(&graph, 0, edges);

        assert_eq!(path.len(), 2);
        assert_eq!(path.weight(), 1.5);
        assert_eq!(path.node_indices(), &[0, 1, 2]);
        assert_eq!(path.labels().copied().collect_vec(), vec!["a", "b", "c"]);
        assert_eq!((*path.start_label(), *path.end_label()), ("a", "c"));
        assert!(!path.is_closed());
        assert_eq!(format!("{path:?}"), "[\"a\" -> \"b\" -> \"c\"] (weight 1.5)");
    }

    #[test]
    fn single_node_path() {
        let graph = DiGraph::from_nodes(["x"]);
        let path = GraphPath::single(&graph, 0);

        assert!(path.is_empty());
        assert_eq!(path.weight(), 0.0);
        assert_eq!(path.start(), path.end());
        assert!(!path.is_closed());
    }

    #[test]
    #[should_panic]
    fn disconnected_edges() {
        let graph = DiGraph::from_edges([(1, 2, 1.0), (3, 4, 1.0)]);
        GraphPath::from_edges(&graph, 0, graph.ordered_edges(false));
    }
}
