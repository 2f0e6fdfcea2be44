/*!
Detection of directed cycles.

[`CycleDetection`] runs an iterative depth-first search with an explicit stack. Every node is
in one of three states: not visited yet, on the current DFS path, or finished. Reaching a node
that is still on the path closes a cycle, which is reconstructed by walking the DFS parent
edges back to that node.
*/

use tracing::debug;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnStack,
    Done,
}

/// Finds a directed cycle in a graph, if there is one.
///
/// Roots are tried in index order and outgoing edges in insertion order; the first cycle
/// found is reported. Self-loops are cycles of length one.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([("a", "b", 1.0), ("b", "c", 1.0), ("c", "a", 1.0)]);
/// let cycle = CycleDetection::new(&g).find_labelled_cycle().unwrap();
///
/// assert_eq!(cycle, vec![&"a", &"b", &"c", &"a"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CycleDetection<'a, G> {
    graph: &'a G,
}

impl<'a, G> CycleDetection<'a, G>
where
    G: DirectedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns the edges of the first cycle found, in cycle order
    pub fn find_cycle_edges(&self) -> Option<Vec<WeightedEdge>> {
        let graph = self.graph;
        let mut state = vec![VisitState::Unvisited; graph.len()];
        let mut parent: Vec<Option<WeightedEdge>> = vec![None; graph.len()];

        for root in graph.vertices_range() {
            if state[root as usize] != VisitState::Unvisited {
                continue;
            }

            state[root as usize] = VisitState::OnStack;
            let mut stack = vec![(root, graph.out_edges_of(root))];

            while let Some((u, edges)) = stack.last_mut() {
                let u = *u;
                let Some(e) = edges.next() else {
                    state[u as usize] = VisitState::Done;
                    stack.pop();
                    continue;
                };

                let v = e.target();
                match state[v as usize] {
                    VisitState::Unvisited => {
                        state[v as usize] = VisitState::OnStack;
                        parent[v as usize] = Some(*e);
                        stack.push((v, graph.out_edges_of(v)));
                    }
                    VisitState::OnStack => {
                        let mut cycle = vec![*e];
                        let mut w = u;
                        while w != v {
                            // every node on the stack except the root has a parent edge
                            let edge = parent[w as usize]?;
                            cycle.push(edge);
                            w = edge.source();
                        }
                        cycle.reverse();

                        debug!(length = cycle.len(), "found cycle");
                        return Some(cycle);
                    }
                    VisitState::Done => {}
                }
            }
        }

        debug!(nodes = graph.number_of_nodes(), "graph has no cycle");
        None
    }

    /// Returns the nodes of the first cycle found as a closed sequence,
    /// i.e. the first node is repeated at the end
    pub fn find_cycle(&self) -> Option<Vec<Node>> {
        let edges = self.find_cycle_edges()?;
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(edges[0].source());
        nodes.extend(edges.iter().map(|e| e.target()));
        Some(nodes)
    }

    /// Returns *true* if the graph has a directed cycle
    pub fn has_cycle(&self) -> bool {
        self.find_cycle_edges().is_some()
    }
}

impl<'a, G> CycleDetection<'a, G>
where
    G: DirectedAdjacencyList + LabelledGraph,
{
    /// Like [`CycleDetection::find_cycle`] but returns labels
    pub fn find_labelled_cycle(&self) -> Option<Vec<&'a G::Label>> {
        let graph = self.graph;
        Some(
            self.find_cycle()?
                .into_iter()
                .map(|u| graph.label_of(u))
                .collect(),
        )
    }

    /// Returns the first cycle found as a closed [`GraphPath`]
    pub fn find_cycle_path(&self) -> Option<GraphPath<'a, G>> {
        let edges = self.find_cycle_edges()?;
        Some(GraphPath::from_edges(self.graph, edges[0].source(), edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::graph_from_indices};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn cycle_scenario() {
        let graph = DiGraph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "E", 1.0),
            ("E", "B", 1.0),
            ("C", "D", 1.0),
            ("D", "E", 1.0),
        ]);

        let detection = CycleDetection::new(&graph);
        assert!(detection.has_cycle());
        assert_eq!(
            detection.find_labelled_cycle().unwrap(),
            vec![&"B", &"C", &"E", &"B"]
        );

        let path = detection.find_cycle_path().unwrap();
        assert!(path.is_closed());
        assert_eq!(path.weight(), 3.0);
    }

    #[test]
    fn acyclic_graphs() {
        let graph: DiGraph<Node> = graph_from_indices(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        assert!(!CycleDetection::new(&graph).has_cycle());
        assert!(CycleDetection::new(&DiGraph::<u8>::new()).find_cycle().is_none());
    }

    #[test]
    fn self_loop() {
        let graph: DiGraph<Node> = graph_from_indices(3, [(0, 1), (1, 1)]);
        assert_eq!(CycleDetection::new(&graph).find_cycle(), Some(vec![1, 1]));
    }

    #[test]
    fn cycle_closing_a_path() {
        let mut graph = DiGraph::new();
        graph.connect_path(["s", "a", "b"], 1.0);
        assert!(!CycleDetection::new(&graph).has_cycle());

        graph.connect_cycle(["b", "c", "d"], 2.0);
        assert_eq!(
            CycleDetection::new(&graph).find_labelled_cycle().unwrap(),
            vec![&"b", &"c", &"d", &"b"]
        );
    }

    #[test]
    fn cycle_in_later_component() {
        let graph: DiGraph<Node> = graph_from_indices(6, [(0, 1), (1, 2), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(
            CycleDetection::new(&graph).find_cycle(),
            Some(vec![3, 4, 5, 3])
        );
    }

    #[test]
    fn agrees_with_topological_sort() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for i in 0..50 {
            let graph: DiGraph<Node> = RandomWeighted::new()
                .nodes(15)
                .edges(12 + i % 10)
                .generate(rng);

            match CycleDetection::new(&graph).find_cycle() {
                Some(cycle) => {
                    assert!(!graph.is_acyclic());
                    assert_eq!(cycle.first(), cycle.last());
                    for (&u, &v) in cycle.iter().tuple_windows() {
                        assert!(graph.has_edge(u, v));
                    }
                    assert!(cycle[..cycle.len() - 1].iter().all_unique());
                }
                None => assert!(graph.is_acyclic()),
            }
        }
    }
}
