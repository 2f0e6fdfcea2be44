/*!
Shortest paths for arbitrary edge weights.

[`BellmanFord`] uses the queue-based variant of the Bellman-Ford algorithm: only nodes whose
distance improved are (re-)scanned. Negative cycles are detected by periodically extracting
the predecessor subgraph (every node with its current parent edge) and searching it for a
cycle; any such cycle has negative weight. The check interval (in relaxations) defaults to the
number of nodes and can be changed with [`BellmanFordBuilder::check_interval`].

Edges weighted NaN fail construction with [`GraphError::UndefinedWeight`]; a NaN distance
would be improved forever and end up reported as a negative cycle.
*/

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::*;

/// Configures and runs a [`BellmanFord`] search
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordBuilder {
    check_interval: Option<usize>,
}

impl BellmanFordBuilder {
    /// Runs the negative-cycle check after every `interval` successful relaxations.
    /// An interval of `0` is treated as `1`.
    pub fn check_interval(mut self, interval: usize) -> Self {
        self.check_interval = Some(interval.max(1));
        self
    }

    /// Runs the search from the node labelled `source`
    pub fn run<'a, G>(self, graph: &'a G, source: &G::Label) -> Result<BellmanFord<'a, G>>
    where
        G: LabelledGraph + AdjacencyList,
    {
        self.run_from_index(graph, graph.try_index_of(source)?)
    }

    /// Runs the search from node `source`
    pub fn run_from_index<'a, G>(self, graph: &'a G, source: Node) -> Result<BellmanFord<'a, G>>
    where
        G: LabelledGraph + AdjacencyList,
    {
        let source = graph.check_node(source)?;
        graph.check_weights_defined()?;
        let n = graph.number_of_nodes();
        let interval = self.check_interval.unwrap_or(n.max(1) as usize);

        let mut tree = SearchTree::new(n, source, Weight::INFINITY);
        let mut in_queue = vec![false; graph.len()];
        let mut queue = VecDeque::from([source]);
        in_queue[source as usize] = true;

        let mut num_relaxed = 0usize;
        let mut negative_cycle = None;

        'search: while let Some(u) = queue.pop_front() {
            in_queue[u as usize] = false;

            for e in graph.edges_of(u) {
                let v = e.target();
                let candidate = tree.distance(u) + e.weight();
                if candidate >= tree.distance(v) {
                    continue;
                }

                tree.update(e, candidate);
                num_relaxed += 1;

                if num_relaxed % interval == 0 {
                    negative_cycle = find_parent_cycle(&tree, n);
                    trace!(
                        relaxed = num_relaxed,
                        found = negative_cycle.is_some(),
                        "negative cycle check"
                    );
                    if negative_cycle.is_some() {
                        break 'search;
                    }
                }

                if !in_queue[v as usize] {
                    in_queue[v as usize] = true;
                    queue.push_back(v);
                }
            }
        }

        debug!(
            source,
            nodes = n,
            relaxed = num_relaxed,
            negative_cycle = negative_cycle.is_some(),
            "bellman-ford finished"
        );

        Ok(BellmanFord {
            graph,
            tree,
            negative_cycle,
        })
    }
}

/// Builds the predecessor subgraph of `tree` and returns a cycle in it, if any
fn find_parent_cycle(tree: &SearchTree, n: NumNodes) -> Option<Vec<WeightedEdge>> {
    let mut parents = DiGraph::from_nodes(0..n);
    for e in tree.parent_edges() {
        parents.add_edge(e.source(), e.target(), e.weight());
    }

    CycleDetection::new(&parents).find_cycle_edges()
}

/// Single-source shortest paths allowing negative edge weights.
///
/// If a negative cycle is reachable from the source, no distances are meaningful:
/// [`BellmanFord::has_negative_cycle`] is *true*, [`BellmanFord::negative_cycle`] returns the
/// cycle, and every distance or path query fails with [`GraphError::NegativeCycle`].
///
/// Worst case running time is `O(nm)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([("a", "b", 4.0), ("b", "c", -3.0), ("a", "c", 2.0)]);
/// let bf = BellmanFord::new(&g, &"a").unwrap();
/// assert_eq!(bf.weight_to(&"c").unwrap(), 1.0);
///
/// let g = DiGraph::from_edges([("a", "b", 1.0), ("b", "a", -2.0)]);
/// let bf = BellmanFord::builder().check_interval(1).run(&g, &"a").unwrap();
/// assert!(bf.has_negative_cycle());
/// assert_eq!(bf.weight_to(&"b"), Err(GraphError::NegativeCycle));
/// ```
#[derive(Debug, Clone)]
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    tree: SearchTree,
    negative_cycle: Option<Vec<WeightedEdge>>,
}

impl BellmanFord<'_, ()> {
    /// Returns a builder to configure the search
    pub fn builder() -> BellmanFordBuilder {
        BellmanFordBuilder::default()
    }
}

impl<'a, G> BellmanFord<'a, G>
where
    G: LabelledGraph + AdjacencyList,
{
    /// Runs the search with default configuration from the node labelled `source`
    pub fn new(graph: &'a G, source: &G::Label) -> Result<Self> {
        BellmanFordBuilder::default().run(graph, source)
    }

    /// Runs the search with default configuration from node `source`
    pub fn from_index(graph: &'a G, source: Node) -> Result<Self> {
        BellmanFordBuilder::default().run_from_index(graph, source)
    }

    /// Returns *true* if a negative cycle is reachable from the source
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Returns a negative cycle reachable from the source as a closed path
    pub fn negative_cycle(&self) -> Option<GraphPath<'a, G>> {
        let edges = self.negative_cycle.clone()?;
        Some(GraphPath::from_edges(self.graph, edges[0].source(), edges))
    }
}

impl<'a, G> PathFinder<'a, G> for BellmanFord<'a, G>
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
        if self.has_negative_cycle() {
            Err(GraphError::NegativeCycle)
        } else {
            Ok(&self.tree)
        }
    }
}
