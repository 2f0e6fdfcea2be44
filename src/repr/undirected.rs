use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation.
///
/// Every edge `{u, v}` is counted once but stored at both endpoints, each copy oriented
/// away from the node storing it (ie. `u` stores `(u, v)` and `v` stores `(v, u)`).
/// Self-loops are stored once.
#[derive(Clone)]
pub struct UndirectedGraph<L, Nbs = ArrNeighborhood>
where
    L: Label,
    Nbs: Neighborhood,
{
    indexer: NodeIndexer<L>,
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type UnGraph<L> = UndirectedGraph<L, ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseUnGraph<L> = UndirectedGraph<L, SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph => nbs [nbs], Undirected);

impl<L: Label, Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<L, Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if self.has_edge(u, v) {
            return true;
        }

        self.nbs[u as usize].push(WeightedEdge::new(u, v, weight));
        if u != v {
            self.nbs[v as usize].push(WeightedEdge::new(v, u, weight));
        }
        self.num_edges += 1;
        false
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize]
            .try_remove_by(|e| e.target() == v)
            .is_some()
        {
            if u != v {
                assert!(
                    self.nbs[v as usize]
                        .try_remove_by(|e| e.target() == u)
                        .is_some()
                );
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    fn try_set_weight(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        match self.nbs[u as usize].find_by_mut(|e| e.target() == v) {
            Some(edge) => edge.set_weight(weight),
            None => return false,
        }

        if u != v {
            self.nbs[v as usize]
                .find_by_mut(|e| e.target() == u)
                .expect("adjacency lists of endpoints out of sync")
                .set_weight(weight);
        }
        true
    }
}

impl<L: Label, Nbs: Neighborhood> UndirectedGraph<L, Nbs> {
    /// Removes all edges incident to `u` and returns how many were removed.
    /// ** Panics if `u >= n` **
    pub fn remove_edges_at_node(&mut self, u: Node) -> NumEdges {
        let removed = std::mem::take(&mut self.nbs[u as usize]);
        for e in removed.edges().filter(|e| !e.is_loop()) {
            self.nbs[e.target() as usize].try_remove_by(|x| x.target() == u);
        }
        self.num_edges -= removed.num_of_edges();
        removed.num_of_edges()
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_un_graph,
    UnGraph,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, LabelledGraphEditing)
);

test_graph_ops!(
    test_sparse_un_graph,
    SparseUnGraph,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, LabelledGraphEditing)
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edges_are_visible_from_both_endpoints() {
        let graph = UnGraph::from_edges([("a", "b", 2.0), ("b", "c", 3.0), ("c", "c", 1.0)]);

        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.contains_edge(&"a", &"b"));
        assert!(graph.contains_edge(&"b", &"a"));
        assert_eq!(graph.find_edge(&"c", &"b").unwrap().weight(), 3.0);

        assert_eq!(graph.degree(&"b").unwrap(), 2);
        assert_eq!(graph.degree(&"c").unwrap(), 2);
        assert_eq!(
            graph
                .edges_at(&"b")
                .unwrap()
                .map(|e| (e.source(), e.target()))
                .collect_vec(),
            vec![(1, 0), (1, 2)]
        );

        let edge_set = graph
            .edge_set()
            .map(|e| (*e.source, *e.target, e.weight))
            .collect_vec();
        assert_eq!(
            edge_set,
            vec![("a", "b", 2.0), ("b", "c", 3.0), ("c", "c", 1.0)]
        );
    }

    #[test]
    fn reverse_pair_is_the_same_edge() {
        let mut graph = UnGraph::new();
        assert!(graph.connect_weighted(1, 2, 4.0));
        assert!(!graph.connect_weighted(2, 1, 6.0));
        assert_eq!(graph.number_of_edges(), 1);

        graph.set_weight(&2, &1, 6.0).unwrap();
        assert_eq!(graph.find_edge(&1, &2).unwrap().weight(), 6.0);

        assert!(graph.disconnect(&2, &1));
        assert!(!graph.contains_edge(&1, &2));
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn remove_edges_at_node() {
        let mut graph = UnGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (1, 1, 1.0), (2, 3, 1.0)]);

        assert_eq!(graph.remove_edges_at_node(1), 3);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(0), 0);
        assert_eq!(graph.degree_of(2), 1);
    }
}
