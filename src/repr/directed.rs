/*!
# Directed Graph Representations

A [`DirectedGraph`] stores **both outgoing and incoming edges** of every node:
each edge `(u, v)` lives in the outgoing list of `u` and in the incoming list of `v`.
This makes `in_edges_of` and `in_degree_of` as cheap as their outgoing counterparts,
at the price of storing every edge twice.

## Provided Representations

- [`DiGraph`] : adjacency arrays (`Vec<WeightedEdge>`).
- [`SparseDiGraph`] : inline small vectors (`SmallVec<[WeightedEdge; 4]>`).
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing outgoing and incoming edges of every node.
///
/// # Type parameters
/// - `L`: label type identifying nodes.
/// - `Nbs`: [`Neighborhood`] implementation used for both edge lists.
#[derive(Clone)]
pub struct DirectedGraph<L, Nbs = ArrNeighborhood>
where
    L: Label,
    Nbs: Neighborhood,
{
    indexer: NodeIndexer<L>,
    out_nbs: Vec<Nbs>,
    in_nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays.
pub type DiGraph<L> = DirectedGraph<L, ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays.
pub type SparseDiGraph<L> = DirectedGraph<L, SparseNeighborhood>;

impl_common_graph_ops!(DirectedGraph => out_nbs [out_nbs, in_nbs], Directed);

impl<L: Label, Nbs: Neighborhood> DirectedAdjacencyList for DirectedGraph<L, Nbs> {
    fn in_edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.in_nbs[u as usize].edges()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].num_of_edges()
    }
}

impl<L: Label, Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<L, Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if self.has_edge(u, v) {
            return true;
        }

        let edge = WeightedEdge::new(u, v, weight);
        self.out_nbs[u as usize].push(edge);
        self.in_nbs[v as usize].push(edge);
        self.num_edges += 1;
        false
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize]
            .try_remove_by(|e| e.target() == v)
            .is_some()
        {
            assert!(
                self.in_nbs[v as usize]
                    .try_remove_by(|e| e.source() == u)
                    .is_some()
            );
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    fn try_set_weight(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        match self.out_nbs[u as usize].find_by_mut(|e| e.target() == v) {
            Some(edge) => edge.set_weight(weight),
            None => return false,
        }

        self.in_nbs[v as usize]
            .find_by_mut(|e| e.source() == u)
            .expect("incoming list out of sync with outgoing list")
            .set_weight(weight);
        true
    }
}

impl<L: Label, Nbs: Neighborhood> DirectedGraph<L, Nbs> {
    /// Removes all edges `(v, u)` entering `u` and returns how many were removed.
    /// ** Panics if `u >= n` **
    pub fn remove_edges_into_node(&mut self, u: Node) -> NumEdges {
        let removed = std::mem::take(&mut self.in_nbs[u as usize]);
        for e in removed.edges() {
            self.out_nbs[e.source() as usize].try_remove_by(|x| x.target() == u);
        }
        self.num_edges -= removed.num_of_edges();
        removed.num_of_edges()
    }

    /// Removes all edges `(u, v)` leaving `u` and returns how many were removed.
    /// ** Panics if `u >= n` **
    pub fn remove_edges_out_of_node(&mut self, u: Node) -> NumEdges {
        let removed = std::mem::take(&mut self.out_nbs[u as usize]);
        for e in removed.edges() {
            self.in_nbs[e.target() as usize].try_remove_by(|x| x.source() == u);
        }
        self.num_edges -= removed.num_of_edges();
        removed.num_of_edges()
    }

    /// Returns a graph with the same nodes and all edges reversed
    pub fn reversed(&self) -> Self {
        Self {
            indexer: self.indexer.clone(),
            out_nbs: self.in_nbs.iter().map(|nbs| reverse_all(nbs)).collect(),
            in_nbs: self.out_nbs.iter().map(|nbs| reverse_all(nbs)).collect(),
            num_edges: self.num_edges,
        }
    }
}

fn reverse_all<Nbs: Neighborhood>(nbs: &Nbs) -> Nbs {
    let mut reversed = Nbs::default();
    for e in nbs.edges() {
        reversed.push(e.reverse());
    }
    reversed
}

// ---------- Testing ----------

test_graph_ops!(
    test_di_graph,
    DiGraph,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        LabelledGraphEditing
    )
);

test_graph_ops!(
    test_sparse_di_graph,
    SparseDiGraph,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        LabelledGraphEditing
    )
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn degree_is_in_plus_out() {
        let graph = DiGraph::from_edges([
            ("a", "b", 1.0),
            ("b", "c", 2.0),
            ("c", "a", 3.0),
            ("a", "c", 4.0),
            ("c", "c", 5.0),
        ]);

        for label in ["a", "b", "c"] {
            assert_eq!(
                graph.in_degree(&label).unwrap() + graph.out_degree(&label).unwrap(),
                graph.degree(&label).unwrap()
            );
        }
        assert_eq!(graph.degree(&"c").unwrap(), 5);
        assert!(matches!(
            graph.degree(&"x"),
            Err(GraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn connect_adds_endpoints() {
        let mut graph = DiGraph::new();
        assert!(graph.connect("x", "y"));
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.labels().copied().collect_vec(), vec!["x", "y"]);
        assert_eq!(graph.find_edge(&"x", &"y").unwrap().weight(), DEFAULT_WEIGHT);
        assert!(!graph.contains_edge(&"y", &"x"));
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let mut graph = DiGraph::new();
        assert!(graph.connect_weighted(1, 2, 5.0));
        assert!(!graph.connect_weighted(1, 2, 7.0));

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.find_edge(&1, &2).unwrap().weight(), 5.0);

        graph.set_weight(&1, &2, 7.0).unwrap();
        assert_eq!(graph.find_edge(&1, &2).unwrap().weight(), 7.0);
        assert_eq!(graph.incoming_edges(&2).unwrap().next().unwrap().weight(), 7.0);

        assert!(matches!(
            graph.set_weight(&2, &1, 0.0),
            Err(GraphError::UnknownEdge { .. })
        ));
    }

    #[test]
    fn removal_updates_both_lists() {
        let mut graph = DiGraph::from_edges([
            ('a', 'b', 1.0),
            ('a', 'c', 1.0),
            ('a', 'd', 1.0),
            ('c', 'b', 1.0),
        ]);

        assert!(graph.disconnect(&'a', &'c'));
        assert!(!graph.disconnect(&'a', &'c'));
        assert!(!graph.disconnect(&'a', &'z'));

        assert!(!graph.contains_edge(&'a', &'c'));
        assert_eq!(
            graph
                .outgoing_edges(&'a')
                .unwrap()
                .map(|e| *graph.label_of(e.target()))
                .collect_vec(),
            vec!['b', 'd']
        );
        assert_eq!(graph.incoming_edges(&'c').unwrap().count(), 0);
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn remove_edges_at_node() {
        let mut graph = DiGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0), (1, 1, 1.0)]);

        assert_eq!(graph.remove_edges_into_node(1), 3);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(1, 2));

        assert_eq!(graph.remove_edges_out_of_node(1), 1);
        assert!(graph.is_singleton_graph());
        assert!(graph.vertices().all(|u| graph.total_degree_of(u) == 0));
    }

    #[test]
    fn reversed() {
        let graph = DiGraph::from_edges([("a", "b", 2.0), ("b", "c", 3.0)]);
        let rev = graph.reversed();

        assert!(rev.contains_edge(&"b", &"a"));
        assert!(rev.contains_edge(&"c", &"b"));
        assert!(!rev.contains_edge(&"a", &"b"));
        assert_eq!(rev.find_edge(&"c", &"b").unwrap().weight(), 3.0);
        assert_eq!(rev.in_degree(&"a").unwrap(), 1);
    }
}
