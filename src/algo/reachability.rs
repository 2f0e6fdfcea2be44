use tracing::debug;

use super::*;

/// The set of nodes reachable from one or more source nodes.
///
/// Computed by a single depth-first search started at all sources simultaneously.
/// Sources are always reachable from themselves.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([("a", "b", 1.0), ("c", "d", 1.0), ("x", "a", 1.0)]);
/// let reach = Reachability::from_labels(&g, [&"a", &"c"]).unwrap();
///
/// assert_eq!(reach.count(), 4);
/// assert!(!reach.is_reachable(g.index_of(&"x").unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct Reachability {
    reached: Vec<bool>,
    count: NumNodes,
}

impl Reachability {
    /// Marks all nodes reachable from `sources`
    pub fn reachable_from<G>(graph: &G, sources: impl IntoIterator<Item = Node>) -> Result<Self>
    where
        G: AdjacencyList,
    {
        let sources = sources
            .into_iter()
            .map(|u| graph.check_node(u))
            .collect::<Result<Vec<_>>>()?;

        let mut reached = vec![false; graph.len()];
        let mut count = 0;
        for u in DFS::from_sources(graph, sources) {
            reached[u as usize] = true;
            count += 1;
        }

        debug!(nodes = graph.number_of_nodes(), reached = count, "reachability computed");
        Ok(Self { reached, count })
    }

    /// Marks all nodes reachable from the nodes labelled by `sources`
    pub fn from_labels<'l, G>(
        graph: &G,
        sources: impl IntoIterator<Item = &'l G::Label>,
    ) -> Result<Self>
    where
        G: AdjacencyList + LabelledGraph,
        G::Label: 'l,
    {
        let sources = sources
            .into_iter()
            .map(|label| graph.try_index_of(label))
            .collect::<Result<Vec<_>>>()?;
        Self::reachable_from(graph, sources)
    }

    /// Returns *true* if `u` is reachable from any source.
    /// Nodes outside the graph are never reachable.
    pub fn is_reachable(&self, u: Node) -> bool {
        self.reached.get(u as usize).copied().unwrap_or(false)
    }

    /// Returns the number of reachable nodes (including the sources)
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Returns all reachable nodes in increasing index order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.reached
            .iter()
            .enumerate()
            .filter_map(|(u, &r)| r.then_some(u as Node))
    }
}
