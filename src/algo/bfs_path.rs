use tracing::debug;

use super::*;

/// Unweighted shortest paths: the weight of a path is its number of edges.
///
/// Nodes are explored in breadth-first order from the source; the first discovery of a node
/// fixes its parent edge, so every node is enqueued at most once. Edge weights are ignored.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([("a", "b", 5.0), ("b", "c", 5.0), ("a", "c", 50.0)]);
/// let bfs = BfsShortestPath::new(&g, &"a").unwrap();
///
/// assert_eq!(bfs.weight_to(&"c").unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct BfsShortestPath<'a, G> {
    graph: &'a G,
    tree: SearchTree,
}

impl<'a, G> BfsShortestPath<'a, G>
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
        let mut tree = SearchTree::new(graph.number_of_nodes(), source, Weight::INFINITY);

        let mut bfs = graph.bfs(source);
        while let Some(u) = bfs.next() {
            if let (Some(edge), Some(depth)) = (bfs.discovery_edge_of(u), bfs.depth_of(u)) {
                tree.update(edge, depth as Weight);
            }
        }

        debug!(
            source,
            nodes = graph.number_of_nodes(),
            reached = tree.distances().iter().filter(|d| d.is_finite()).count(),
            "bfs shortest paths computed"
        );

        Ok(Self { graph, tree })
    }
}

impl<'a, G> PathFinder<'a, G> for BfsShortestPath<'a, G>
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
    use crate::testing::graph_from_indices;

    #[test]
    fn hop_counts() {
        let graph = DiGraph::from_edges([
            ("a", "b", 10.0),
            ("a", "c", 1.0),
            ("c", "d", 1.0),
            ("d", "e", 1.0),
            ("b", "e", 100.0),
            ("x", "a", 1.0),
        ]);
        let bfs = BfsShortestPath::new(&graph, &"a").unwrap();

        assert_eq!(bfs.weight_to(&"a").unwrap(), 0.0);
        assert_eq!(bfs.weight_to(&"d").unwrap(), 2.0);
        assert_eq!(bfs.weight_to(&"e").unwrap(), 2.0);
        assert_eq!(bfs.weight_to(&"x").unwrap(), Weight::INFINITY);
        assert!(!bfs.has_path_to(&"x").unwrap());
        assert!(bfs.path_to(&"x").unwrap().is_none());

        let path = bfs.path_to(&"e").unwrap().unwrap();
        assert_eq!(path.labels().copied().collect_vec(), vec!["a", "b", "e"]);
        assert_eq!(path.weight(), path.len() as Weight);
    }

    #[test]
    fn path_to_source() {
        let graph = UnGraph::from_edges([(1, 2, 3.0)]);
        let bfs = BfsShortestPath::new(&graph, &2).unwrap();

        let path = bfs.path_to(&2).unwrap().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.weight(), 0.0);
        assert_eq!(*bfs.source_label(), 2);
        assert_eq!(bfs.weight_to(&1).unwrap(), 1.0);
    }

    #[test]
    fn invalid_sources_and_targets() {
        let graph: DiGraph<Node> = graph_from_indices(3, [(0, 1)]);

        assert_eq!(
            BfsShortestPath::new(&graph, &7).unwrap_err(),
            GraphError::unknown_node(&7)
        );
        assert_eq!(
            BfsShortestPath::from_index(&graph, 3).unwrap_err(),
            GraphError::NodeOutOfRange { node: 3, len: 3 }
        );

        let bfs = BfsShortestPath::from_index(&graph, 0).unwrap();
        assert!(bfs.weight_of(5).is_err());
        assert!(matches!(
            bfs.path_to(&9),
            Err(GraphError::UnknownNode(_))
        ));
    }
}
