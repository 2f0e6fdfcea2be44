use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::debug;

use super::*;

/// Priority queue entry ordered by tentative distance.
/// Wrapped in [`Reverse`] to turn the [`BinaryHeap`] into a min-heap.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: Weight,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.node.cmp(&other.node))
    }
}

/// Shortest paths for graphs with non-negative edge weights.
///
/// All edges are checked before the search starts: a single negative weight anywhere in the
/// graph, reachable from the source or not, fails construction with
/// [`GraphError::NegativeWeight`] (or [`GraphError::UndefinedWeight`] for NaN).
///
/// Improved distances are pushed into a binary heap without removing stale entries; a node is
/// settled when it is popped for the first time, later entries for it are skipped.
/// Runs in `O(m log n)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([("a", "b", 4.0), ("b", "c", 1.0), ("a", "c", 7.0)]);
/// let dijkstra = Dijkstra::new(&g, &"a").unwrap();
///
/// let path = dijkstra.path_to(&"c").unwrap().unwrap();
/// assert_eq!(path.weight(), 5.0);
/// assert_eq!(path.labels().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    tree: SearchTree,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: LabelledGraph + AdjacencyList,
{
    /// Runs the search from the node labelled `source`
    pub fn new(graph: &'a G, source: &G::Label) -> Result<Self> {
        Self::from_index(graph, graph.try_index_of(source)?)
    }

    /// Runs the search from node `source`
    pub fn from_index(graph: &'a G, source: Node) -> Result<Self> {
        let source = graph.check_node(source)?;
        graph.check_weights_defined()?;
        if let Some(e) = graph.first_negative_edge() {
            return Err(GraphError::NegativeWeight {
                edge: e.edge(),
                weight: e.weight(),
            });
        }

        let mut tree = SearchTree::new(graph.number_of_nodes(), source, Weight::INFINITY);
        let mut settled = vec![false; graph.len()];
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            distance: 0.0,
            node: source,
        }));

        let mut num_relaxed = 0usize;
        while let Some(Reverse(HeapEntry { distance, node: u })) = heap.pop() {
            if settled[u as usize] {
                continue;
            }
            settled[u as usize] = true;

            for e in graph.edges_of(u) {
                let v = e.target();
                let candidate = distance + e.weight();
                if !settled[v as usize] && candidate < tree.distance(v) {
                    tree.update(e, candidate);
                    heap.push(Reverse(HeapEntry {
                        distance: candidate,
                        node: v,
                    }));
                    num_relaxed += 1;
                }
            }
        }

        debug!(
            source,
            nodes = graph.number_of_nodes(),
            settled = settled.iter().filter(|&&s| s).count(),
            relaxed = num_relaxed,
            "dijkstra finished"
        );

        Ok(Self { graph, tree })
    }
}

impl<'a, G> PathFinder<'a, G> for Dijkstra<'a, G>
where
    G: LabelledGraph + AdjacencyList,
{
    fn graph(&self) -> &'a G {
        self.graph
    }

    fn source(&self) -> Node {
        self.tree.source()
    }

    fn search_tree(&self) -> Result<&SearchTree> {
        Ok(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn scenario() -> DiGraph<&'static str> {
        DiGraph::from_edges([
            ("A", "B", 10.0),
            ("A", "C", 15.0),
            ("B", "D", 12.0),
            ("B", "F", 15.0),
            ("C", "E", 10.0),
            ("D", "E", 2.0),
            ("D", "F", 1.0),
            ("F", "E", 5.0),
        ])
    }

    #[test]
    fn shortest_path_scenario() {
        let graph = scenario();
        let dijkstra = Dijkstra::new(&graph, &"A").unwrap();

        let path = dijkstra.path_to(&"E").unwrap().unwrap();
        assert_eq!(path.labels().copied().collect_vec(), vec!["A", "B", "D", "E"]);
        assert_eq!(path.weight(), 24.0);
        assert_eq!(path.edges().iter().map(|e| e.weight()).sum::<Weight>(), 24.0);

        assert_eq!(dijkstra.weight_to(&"F").unwrap(), 23.0);
        assert_eq!(dijkstra.weight_to(&"C").unwrap(), 15.0);
        assert_eq!(dijkstra.weight_to(&"A").unwrap(), 0.0);
    }

    #[test]
    fn unreachable_nodes() {
        let graph = scenario();
        let dijkstra = Dijkstra::new(&graph, &"D").unwrap();

        assert_eq!(dijkstra.weight_to(&"A").unwrap(), Weight::INFINITY);
        assert!(!dijkstra.has_path_to(&"B").unwrap());
        assert!(dijkstra.path_to(&"C").unwrap().is_none());
        assert!(dijkstra.has_path_to(&"E").unwrap());
    }

    #[test]
    fn rejects_negative_weights_anywhere() {
        let mut graph = scenario();
        graph.connect_weighted("X", "Y", -1.0);

        let err = Dijkstra::new(&graph, &"A").unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { weight, .. } if weight == -1.0));

        graph.set_weight(&"X", &"Y", Weight::NAN).unwrap();
        assert!(matches!(
            Dijkstra::new(&graph, &"A"),
            Err(GraphError::UndefinedWeight { .. })
        ));

        graph.set_weight(&"X", &"Y", 0.0).unwrap();
        assert!(Dijkstra::new(&graph, &"A").is_ok());
    }

    #[test]
    fn agrees_with_bfs_on_unit_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..20 {
            let graph: UnGraph<Node> = RandomWeighted::new()
                .nodes(40)
                .edges(80)
                .weights(1.0..=1.0)
                .generate(rng);

            let dijkstra = Dijkstra::from_index(&graph, 0).unwrap();
            let bfs = BfsShortestPath::from_index(&graph, 0).unwrap();

            for u in graph.vertices() {
                assert_eq!(dijkstra.weight_of(u).unwrap(), bfs.weight_of(u).unwrap());
            }
        }
    }

    #[test]
    fn path_weights_match_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for _ in 0..20 {
            let graph: DiGraph<Node> = RandomWeighted::new()
                .nodes(30)
                .edges(120)
                .weights(0.0..=10.0)
                .generate(rng);

            let dijkstra = Dijkstra::from_index(&graph, 0).unwrap();
            for u in graph.vertices() {
                match dijkstra.path_to_node(u).unwrap() {
                    Some(path) => {
                        assert_eq!(path.end(), u);
                        let sum: Weight = path.edges().iter().map(|e| e.weight()).sum();
                        assert!((sum - dijkstra.weight_of(u).unwrap()).abs() < 1e-9);
                        for e in graph.edges(false) {
                            let (du, dv) = (
                                dijkstra.weight_of(e.source()).unwrap(),
                                dijkstra.weight_of(e.target()).unwrap(),
                            );
                            assert!(dv <= du + e.weight() + 1e-9);
                        }
                    }
                    None => assert!(!dijkstra.has_path_to_node(u).unwrap()),
                }
            }
        }
    }
}
