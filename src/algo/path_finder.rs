/*!
Shared result contract of all single-source path algorithms.

Every path finder computes a [`SearchTree`] once (in its constructor) and answers queries
from it through the [`PathFinder`] trait:
- unreachable targets have the finder's *unreachable* weight (`+inf` for shortest-path
  algorithms, `-inf` for longest-path algorithms) and no path,
- the path from the source to itself is the single-node path of weight `0`.
*/

use super::*;

/// Distances and parent edges of a single-source search
#[derive(Debug, Clone)]
pub struct SearchTree {
    source: Node,
    distances: Vec<Weight>,
    parents: Vec<Option<WeightedEdge>>,
    unreachable: Weight,
}

impl SearchTree {
    /// Creates a tree for `n` nodes where every node except `source` is unreachable
    /// ** Panics if `source >= n` **
    pub fn new(n: NumNodes, source: Node, unreachable: Weight) -> Self {
        let mut distances = vec![unreachable; n as usize];
        distances[source as usize] = 0.0;
        Self {
            source,
            distances,
            parents: vec![None; n as usize],
            unreachable,
        }
    }

    /// Returns the root of the tree
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the current distance of `u`
    /// ** Panics if `u >= n` **
    #[inline]
    pub fn distance(&self, u: Node) -> Weight {
        self.distances[u as usize]
    }

    /// Returns all distances indexed by node
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Returns the edge through which `u` was last improved
    /// ** Panics if `u >= n` **
    #[inline]
    pub fn parent_edge(&self, u: Node) -> Option<&WeightedEdge> {
        self.parents[u as usize].as_ref()
    }

    /// Returns *true* if `u` has a path from the source
    /// ** Panics if `u >= n` **
    pub fn is_reachable(&self, u: Node) -> bool {
        self.distance(u) != self.unreachable
    }

    /// Sets the distance of `edge.target()` to `distance` reached through `edge`
    #[inline]
    pub(crate) fn update(&mut self, edge: &WeightedEdge, distance: Weight) {
        let v = edge.target() as usize;
        self.distances[v] = distance;
        self.parents[v] = Some(*edge);
    }

    /// Returns the edges from the source to `u` by following parent edges backwards.
    /// Returns `None` if `u` is unreachable.
    ///
    /// ** Panics if the parent edges contain a cycle **
    pub fn edges_to(&self, u: Node) -> Option<Vec<WeightedEdge>> {
        if !self.is_reachable(u) {
            return None;
        }

        let mut edges = Vec::new();
        let mut v = u;
        while v != self.source {
            let edge = self.parents[v as usize]?;
            edges.push(edge);
            assert!(edges.len() <= self.distances.len(), "parent edges contain a cycle");
            v = edge.source();
        }

        edges.reverse();
        Some(edges)
    }

    /// Returns the predecessor subgraph: every node together with its parent edge
    pub fn parent_edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.parents.iter().flatten()
    }
}

/// Single-source path queries shared by all path algorithms.
///
/// Node-indexed queries report out-of-range nodes as [`GraphError::NodeOutOfRange`], labelled
/// queries report unknown labels as [`GraphError::UnknownNode`]. Algorithms that cannot
/// provide a meaningful result (eg. [`BellmanFord`] on a negative cycle) fail every query.
pub trait PathFinder<'a, G>
where
    G: LabelledGraph + 'a,
{
    /// Returns the graph the search was run on
    fn graph(&self) -> &'a G;

    /// Returns the index of the source node
    fn source(&self) -> Node;

    /// Returns the computed search tree
    fn search_tree(&self) -> Result<&SearchTree>;

    /// Returns the label of the source node
    fn source_label(&self) -> &'a G::Label {
        self.graph().label_of(self.source())
    }

    /// Returns the weight of the best path to `u` or the unreachable weight
    fn weight_of(&self, u: Node) -> Result<Weight> {
        let u = self.graph().check_node(u)?;
        Ok(self.search_tree()?.distance(u))
    }

    /// Returns *true* if `u` can be reached from the source
    fn has_path_to_node(&self, u: Node) -> Result<bool> {
        let u = self.graph().check_node(u)?;
        Ok(self.search_tree()?.is_reachable(u))
    }

    /// Returns the best path to `u` or `None` if `u` is unreachable
    fn path_to_node(&self, u: Node) -> Result<Option<GraphPath<'a, G>>> {
        let u = self.graph().check_node(u)?;
        let tree = self.search_tree()?;

        Ok(tree.edges_to(u).map(|edges| {
            GraphPath::with_weight(self.graph(), self.source(), edges, tree.distance(u))
        }))
    }

    /// Returns the weight of the best path to the node labelled `label`
    fn weight_to(&self, label: &G::Label) -> Result<Weight> {
        self.weight_of(self.graph().try_index_of(label)?)
    }

    /// Returns *true* if the node labelled `label` can be reached from the source
    fn has_path_to(&self, label: &G::Label) -> Result<bool> {
        self.has_path_to_node(self.graph().try_index_of(label)?)
    }

    /// Returns the best path to the node labelled `label`
    fn path_to(&self, label: &G::Label) -> Result<Option<GraphPath<'a, G>>> {
        self.path_to_node(self.graph().try_index_of(label)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_paths() {
        let mut tree = SearchTree::new(4, 1, Weight::INFINITY);
        assert!(tree.is_reachable(1));
        assert!(!tree.is_reachable(0));
        assert_eq!(tree.edges_to(1), Some(vec![]));
        assert_eq!(tree.edges_to(0), None);

        tree.update(&WeightedEdge::new(1, 2, 3.0), 3.0);
        tree.update(&WeightedEdge::new(2, 3, 1.5), 4.5);

        assert_eq!(tree.distance(3), 4.5);
        assert_eq!(
            tree.edges_to(3),
            Some(vec![WeightedEdge::new(1, 2, 3.0), WeightedEdge::new(2, 3, 1.5)])
        );
        assert_eq!(tree.parent_edges().count(), 2);
    }

    #[test]
    #[should_panic]
    fn cyclic_parents() {
        let mut tree = SearchTree::new(3, 0, Weight::INFINITY);
        tree.update(&WeightedEdge::new(2, 1, 1.0), 1.0);
        tree.update(&WeightedEdge::new(1, 2, 1.0), 2.0);
        tree.edges_to(2);
    }
}
