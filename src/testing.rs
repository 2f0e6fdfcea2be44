/// Every graph representation should pass these randomized tests against a naive
/// adjacency-matrix reference. Nodes are labelled by their own index.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type G = $graph<Node>;

            /// Reference adjacency matrix holding the weight of each edge
            type Matrix = Vec<Vec<Option<Weight>>>;

            /// Creates a list of at most `m_ub` random weighted edges for nodes `0..n`
            /// without duplicate endpoint pairs
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<WeightedEdge> {
                let mut edges = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(-5..20) as Weight;

                    if $undirected {
                        WeightedEdge::new(u, v, w).normalized()
                    } else {
                        WeightedEdge::new(u, v, w)
                    }
                }).collect_vec();
                edges.sort_by_key(|e| e.edge());
                edges.dedup_by_key(|e| e.edge());

                edges
            }

            fn build<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> (G, Vec<WeightedEdge>, Matrix) {
                let edges = random_edges(rng, n, m_ub);
                let mut matrix: Matrix = vec![vec![None; n as usize]; n as usize];
                for e in &edges {
                    matrix[e.source() as usize][e.target() as usize] = Some(e.weight());
                    if $undirected {
                        matrix[e.target() as usize][e.source() as usize] = Some(e.weight());
                    }
                }

                let mut graph = G::new();
                graph.add_nodes(0..n);
                graph.add_edges(edges.iter());

                (graph, edges, matrix)
            }

            $(
                test_graph_ops!(@$trait, $undirected);
            )*
        }
    };
    (@GraphNew, $undirected:literal) => {
        #[test]
        fn graph_new() {
            let graph = G::new();
            assert!(graph.is_empty());
            assert!(graph.is_singleton_graph());
            assert_eq!(G::is_undirected(), $undirected);

            for n in 1..50 {
                let graph = G::from_nodes(0..n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| *graph.label_of(u) == u));
            }
        }
    };
    (@AdjacencyList, $undirected:literal) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let (graph, edges, matrix) = build(rng, n, m_ub);

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges($undirected));

                        for u in 0..n {
                            let row = &matrix[u as usize];
                            assert_eq!(
                                graph.neighbors_of(u).sorted().collect_vec(),
                                (0..n).filter(|&v| row[v as usize].is_some()).collect_vec()
                            );
                            assert_eq!(
                                graph.degree_of(u) as usize,
                                row.iter().flatten().count()
                            );
                            for e in graph.edges_of(u) {
                                assert_eq!(e.source(), u);
                                assert_eq!(row[e.target() as usize], Some(e.weight()));
                                assert!(graph.has_edge(u, e.target()));
                            }
                        }
                    }
                }
            }
        }
    };
    (@DirectedAdjacencyList, $undirected:literal) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let (graph, _, matrix) = build(rng, n, m_ub);

                        for u in 0..n {
                            let column = (0..n)
                                .filter(|&v| matrix[v as usize][u as usize].is_some())
                                .collect_vec();

                            assert_eq!(graph.in_neighbors_of(u).sorted().collect_vec(), column);
                            assert_eq!(graph.in_degree_of(u) as usize, column.len());
                            assert_eq!(
                                graph.total_degree_of(u),
                                graph.in_degree_of(u) + graph.out_degree_of(u)
                            );
                            assert!(graph.in_edges_of(u).all(|e| e.target() == u));
                        }

                        assert_eq!(
                            graph.in_degrees().map(|d| d as usize).sum::<usize>(),
                            graph.number_of_edges() as usize
                        );
                    }
                }
            }
        }
    };
    (@GraphEdgeEditing, $undirected:literal) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let (mut graph, edges, mut matrix) = build(rng, n, m_ub);

                        for e in &edges {
                            assert!(graph.try_add_edge(e.source(), e.target(), 100.0));
                            assert_eq!(graph.edge(e.source(), e.target()), Some(e));
                        }

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if matrix[u as usize][v as usize].take().is_some() {
                                assert!(graph.try_set_weight(u, v, 7.0));
                                assert_eq!(graph.edge(u, v).map(|e| e.weight()), Some(7.0));

                                assert!(graph.try_remove_edge(u, v));
                                m -= 1;

                                if $undirected && u != v {
                                    assert!(matrix[v as usize][u as usize].take().is_some());
                                }
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                                assert!(!graph.try_set_weight(u, v, 7.0));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for e in graph.ordered_edges($undirected) {
                            graph.remove_edge(e.source(), e.target());
                        }
                        assert!(graph.is_singleton_graph());
                        assert_eq!(graph.number_of_nodes(), n);
                    }
                }
            }
        }
    };
    (@LabelledGraphEditing, $undirected:literal) => {
        #[test]
        fn test_labelled_graph_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20, 50] {
                let mut graph = G::new();
                let mut matrix: Matrix = vec![vec![None; n as usize]; n as usize];

                for _ in 0..(n * 3) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let is_new = matrix[u as usize][v as usize].is_none();

                    assert_eq!(graph.connect_weighted(u, v, 2.0), is_new);
                    matrix[u as usize][v as usize] = Some(2.0);
                    if $undirected {
                        matrix[v as usize][u as usize] = Some(2.0);
                    }
                }

                for u in graph.labels().copied().collect_vec() {
                    for v in 0..n {
                        let expected = matrix[u as usize][v as usize].is_some();
                        assert_eq!(graph.contains_edge(&u, &v), expected && graph.contains_node(&v));
                    }
                }

                let missing = n + 1;
                assert!(!graph.contains_node(&missing));
                assert!(graph.degree(&missing).is_err());
                assert!(!graph.disconnect(&0, &missing));
                assert_eq!(
                    graph.set_weight(&missing, &0, 1.0),
                    Err(GraphError::unknown_node(&missing))
                );
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Creates a graph on nodes labelled `0..n` (so that labels and indices coincide)
/// containing the given edges
#[cfg(test)]
pub(crate) fn graph_from_indices<G>(
    n: crate::NumNodes,
    edges: impl IntoIterator<Item = impl Into<crate::WeightedEdge>>,
) -> G
where
    G: crate::ops::GraphFromScratch<Label = crate::Node> + crate::ops::GraphEdgeEditing,
{
    let mut graph = G::from_nodes(0..n);
    graph.add_edges(edges);
    graph
}
