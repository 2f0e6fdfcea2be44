/*!
Shortest and longest paths in directed acyclic graphs.

Nodes are processed in topological order (Kahn's algorithm, see
[`Traversal::topological_order`]); every edge leaving a reachable node is relaxed exactly
once, giving `O(n + m)` running time for arbitrary edge weights. Longest paths in a DAG are
the basis of critical path analysis: with activity durations as weights, the longest path
from the project start is the sequence of activities that cannot be delayed.

Both algorithms fail with [`GraphError::NotAcyclic`] if the graph has a cycle, even if the
cycle cannot be reached from the source, and with [`GraphError::UndefinedWeight`] if an edge
is weighted NaN.
*/

use tracing::debug;

use super::*;

/// Relaxes all edges in topological order, keeping the smaller (or larger if `longest`)
/// candidate distance
fn relax_topological<G>(graph: &G, source: Node, longest: bool) -> Result<(SearchTree, Vec<Node>)>
where
    G: DirectedAdjacencyList,
{
    let source = graph.check_node(source)?;
    graph.check_weights_defined()?;
    let order = graph.topological_order()?;
    let unreachable = if longest {
        Weight::NEG_INFINITY
    } else {
        Weight::INFINITY
    };

    let mut tree = SearchTree::new(graph.number_of_nodes(), source, unreachable);
    let mut num_relaxed = 0usize;
    for &u in &order {
        if !tree.is_reachable(u) {
            continue;
        }

        let distance = tree.distance(u);
        for e in graph.out_edges_of(u) {
            let candidate = distance + e.weight();
            let current = tree.distance(e.target());
            let improves = if longest {
                candidate > current
            } else {
                candidate < current
            };

            if improves {
                tree.update(e, candidate);
                num_relaxed += 1;
            }
        }
    }

    debug!(
        source,
        nodes = graph.number_of_nodes(),
        relaxed = num_relaxed,
        longest,
        "dag paths computed"
    );

    Ok((tree, order))
}

macro_rules! impl_dag_path_finder {
    ($name:ident, $longest:literal) => {
        impl<'a, G> $name<'a, G>
        where
            G: LabelledGraph + DirectedAdjacencyList,
        {
            /// Runs the search from the node labelled `source`
            pub fn new(graph: &'a G, source: &G::Label) -> Result<Self> {
                Self::from_index(graph, graph.try_index_of(source)?)
            }

            /// Runs the search from node `source`
            pub fn from_index(graph: &'a G, source: Node) -> Result<Self> {
                let (tree, order) = relax_topological(graph, source, $longest)?;
                Ok(Self { graph, tree, order })
            }

            /// Returns the topological order the edges were relaxed in
            pub fn topological_order(&self) -> &[Node] {
                &self.order
            }
        }

        impl<'a, G> PathFinder<'a, G> for $name<'a, G>
        where
            G: LabelledGraph + DirectedAdjacencyList,
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
    };
}

/// Shortest paths in a directed acyclic graph with arbitrary edge weights.
/// Unreachable nodes have weight `+inf`.
#[derive(Debug, Clone)]
pub struct DagShortestPath<'a, G> {
    graph: &'a G,
    tree: SearchTree,
    order: Vec<Node>,
}

/// Longest paths in a directed acyclic graph with arbitrary edge weights.
/// Unreachable nodes have weight `-inf`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([("a", "b", 3.0), ("b", "d", 2.0), ("a", "c", 1.0), ("c", "d", 1.0)]);
/// let longest = DagLongestPath::new(&g, &"a").unwrap();
///
/// assert_eq!(longest.weight_to(&"d").unwrap(), 5.0);
/// assert_eq!(longest.topological_order(), &[0, 1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct DagLongestPath<'a, G> {
    graph: &'a G,
    tree: SearchTree,
    order: Vec<Node>,
}

impl_dag_path_finder!(DagShortestPath, false);
impl_dag_path_finder!(DagLongestPath, true);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::graph_from_indices};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Ten activities with durations and precedences; each activity `j` is an edge
    /// `js -> je` weighted with its duration, everything else are zero-weight routing edges.
    fn schedule() -> DiGraph<String> {
        let durations = [41.0, 51.0, 50.0, 36.0, 38.0, 45.0, 21.0, 32.0, 32.0, 29.0];
        let precedences = [(0, 1), (0, 7), (0, 9), (1, 2), (6, 3), (6, 8), (7, 3), (7, 8), (8, 2), (9, 4), (9, 6)];

        let mut graph = DiGraph::new();
        for (j, duration) in durations.into_iter().enumerate() {
            graph.connect_weighted("start".to_string(), format!("{j}s"), 0.0);
            graph.connect_weighted(format!("{j}s"), format!("{j}e"), duration);
            graph.connect_weighted(format!("{j}e"), "finish".to_string(), 0.0);
        }
        for (before, after) in precedences {
            graph.connect_weighted(format!("{before}e"), format!("{after}s"), 0.0);
        }
        graph
    }

    #[test]
    fn critical_path() {
        let graph = schedule();
        let longest = DagLongestPath::new(&graph, &"start".to_string()).unwrap();

        let path = longest.path_to(&"finish".to_string()).unwrap().unwrap();
        assert_eq!(path.weight(), 173.0);
        assert_eq!(
            path.labels().map(String::as_str).collect_vec(),
            vec!["start", "0s", "0e", "9s", "9e", "6s", "6e", "8s", "8e", "2s", "2e", "finish"]
        );

        let activities = path
            .labelled_edges()
            .filter(|e| e.weight > 0.0)
            .map(|e| e.weight)
            .collect_vec();
        assert_eq!(activities, vec![41.0, 29.0, 21.0, 32.0, 50.0]);
        assert_eq!(activities.iter().sum::<Weight>(), path.weight());

        // latest start of activity 3 is bounded by its predecessors 6 and 7
        assert_eq!(longest.weight_to(&"3s".to_string()).unwrap(), 91.0);
        assert_eq!(longest.topological_order().len(), graph.len());
    }

    #[test]
    fn shortest_and_longest_with_negative_weights() {
        let graph: DiGraph<Node> = graph_from_indices(
            5,
            [(0, 1, 2.0), (0, 2, -1.0), (1, 3, -4.0), (2, 3, 3.0), (3, 4, 1.0)],
        );

        let shortest = DagShortestPath::from_index(&graph, 0).unwrap();
        let longest = DagLongestPath::from_index(&graph, 0).unwrap();

        assert_eq!(shortest.weight_of(3).unwrap(), -2.0);
        assert_eq!(longest.weight_of(3).unwrap(), 2.0);
        assert_eq!(shortest.path_to_node(4).unwrap().unwrap().node_indices(), &[0, 1, 3, 4]);
        assert_eq!(longest.path_to_node(4).unwrap().unwrap().node_indices(), &[0, 2, 3, 4]);
    }

    #[test]
    fn unreachable_sentinels() {
        let graph: DiGraph<Node> = graph_from_indices(3, [(1, 0, 1.0), (1, 2, 1.0)]);

        let shortest = DagShortestPath::from_index(&graph, 0).unwrap();
        let longest = DagLongestPath::from_index(&graph, 0).unwrap();

        assert_eq!(shortest.weight_of(2).unwrap(), Weight::INFINITY);
        assert_eq!(longest.weight_of(2).unwrap(), Weight::NEG_INFINITY);
        assert!(!longest.has_path_to_node(1).unwrap());
        assert_eq!(longest.path_to_node(0).unwrap().unwrap().weight(), 0.0);
    }

    #[test]
    fn cyclic_graphs_are_rejected() {
        let graph: DiGraph<Node> = graph_from_indices(4, [(0, 1), (2, 3), (3, 2)]);

        assert_eq!(
            DagShortestPath::from_index(&graph, 0).unwrap_err(),
            GraphError::NotAcyclic {
                visited: 2,
                total: 4
            }
        );
        assert!(matches!(
            DagLongestPath::from_index(&graph, 0),
            Err(GraphError::NotAcyclic { .. })
        ));
    }

    #[test]
    fn nan_weights_are_rejected() {
        let graph: DiGraph<Node> = graph_from_indices(3, [(0, 1, Weight::NAN), (1, 2, 1.0)]);

        assert_eq!(
            DagShortestPath::from_index(&graph, 0).unwrap_err(),
            GraphError::UndefinedWeight { edge: Edge(0, 1) }
        );
        assert!(matches!(
            DagLongestPath::from_index(&graph, 2),
            Err(GraphError::UndefinedWeight { .. })
        ));
    }

    #[test]
    fn path_weights_are_edge_sums() {
        let rng = &mut Pcg64Mcg::seed_from_u64(32);

        for _ in 0..20 {
            let graph: DiGraph<Node> = RandomWeighted::new()
                .nodes(30)
                .edges(120)
                .weights(-10.0..=10.0)
                .acyclic(true)
                .generate(rng);

            let shortest = DagShortestPath::from_index(&graph, 0).unwrap();
            let longest = DagLongestPath::from_index(&graph, 0).unwrap();

            for u in graph.vertices() {
                let (Some(short), Some(long)) = (
                    shortest.path_to_node(u).unwrap(),
                    longest.path_to_node(u).unwrap(),
                ) else {
                    assert!(!shortest.has_path_to_node(u).unwrap());
                    assert!(!longest.has_path_to_node(u).unwrap());
                    continue;
                };

                for (path, weight) in [
                    (short, shortest.weight_of(u).unwrap()),
                    (long, longest.weight_of(u).unwrap()),
                ] {
                    assert_eq!(path.node_indices()[0], 0);
                    assert_eq!(path.end(), u);
                    let sum: Weight = path.edges().iter().map(|e| e.weight()).sum();
                    assert!((sum - weight).abs() < 1e-9, "{sum} != {weight}");
                }
                assert!(shortest.weight_of(u).unwrap() <= longest.weight_of(u).unwrap());
            }
        }
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..20 {
            let graph: DiGraph<Node> = RandomWeighted::new()
                .nodes(40)
                .edges(200)
                .weights(0.0..=5.0)
                .acyclic(true)
                .generate(rng);

            let dag = DagShortestPath::from_index(&graph, 0).unwrap();
            let dijkstra = Dijkstra::from_index(&graph, 0).unwrap();

            for u in graph.vertices() {
                let (a, b) = (dag.weight_of(u).unwrap(), dijkstra.weight_of(u).unwrap());
                assert!(a == b || (a - b).abs() < 1e-9, "{a} != {b}");
            }
        }
    }
}
