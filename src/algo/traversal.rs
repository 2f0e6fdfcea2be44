/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking) that record
  the discovery edge and depth of every node they reach.
- Abstractions (`TraversalTree`, `RankFromOrder`) that turn traversals into parent arrays,
  depth arrays or rankings.
- Topological ordering (Kahn's algorithm) for directed graphs, as an iterator or driving a
  [`NodeVisitor`].
- A high-level `Traversal` trait that exposes traversal algorithms directly as methods on
  graph data structures.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Gives access to the graph an algorithm operates on
pub trait WithGraphRef<G> {
    /// Returns the graph the search runs on
    fn graph_ref(&self) -> &G;
}

/// Item type of a [`TraversalSearch`]: the visited node and, depending on the
/// implementation, the node it was reached from.
///
/// - [`Node`] carries the visited node only,
/// - [`PredecessorOfNode`] carries `(predecessor, node)`.
pub trait SequencedItem: Clone + Copy {
    /// Item for `item` reached from `predecessor`
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Item for a start node
    fn new_without_predecessor(item: Node) -> Self;

    /// The visited node
    fn item(&self) -> Node;

    /// The node `item()` was reached from; `None` for start nodes or if not tracked
    fn predecessor(&self) -> Option<Node>;

    /// Returns `(self.predecessor(), self.item())`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; start nodes are stored as `(node, node)`.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a [`TraversalSearch`]. The container decides the visiting order:
/// a [`VecDeque`] is used as FIFO queue (**BFS**), a [`Vec`] as stack (**DFS**).
pub trait NodeSequencer<T>: Default {
    /// Adds an item to the frontier
    fn push(&mut self, item: T);

    /// Takes the next item to visit
    fn pop(&mut self) -> Option<T>;

    /// Number of items waiting in the frontier
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Lazy graph search; BFS or DFS depending on the [`NodeSequencer`].
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and marks nodes as
/// visited when they are first pushed, so every node is yielded at most once and the first
/// discovery wins. For every discovered node the search keeps the edge it was discovered by
/// and its depth in the traversal tree.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: Vec<bool>,
    depths: Vec<Node>,
    discovery: Vec<Option<WeightedEdge>>,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// Breadth-first search yielding nodes
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// Depth-first search yielding nodes
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// Breadth-first search yielding `(predecessor, node)` pairs
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// Depth-first search yielding `(predecessor, node)` pairs
pub type DFSWithPredecessor<'a, G> = TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> WithGraphRef<G> for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for e in self.graph.edges_of(u) {
                let v = e.target();
                if !self.visited[v as usize] {
                    self.visited[v as usize] = true;
                    self.depths[v as usize] = self.depths[u as usize] + 1;
                    self.discovery[v as usize] = Some(*e);
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Starts a search at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::from_sources(graph, [start])
    }

    /// Creates a new traversal iterator that starts at all given nodes simultaneously.
    /// Each start node has depth 0; duplicates are ignored.
    /// ** Panics if any `start >= n` **
    pub fn from_sources(graph: &'a G, starts: impl IntoIterator<Item = Node>) -> Self {
        let len = graph.len();
        let mut search = Self {
            graph,
            visited: vec![false; len],
            depths: vec![INVALID_NODE; len],
            discovery: vec![None; len],
            sequencer: S::default(),
            stop_at: None,
            _item: PhantomData,
        };

        for start in starts {
            if !search.visited[start as usize] {
                search.visited[start as usize] = true;
                search.depths[start as usize] = 0;
                search.sequencer.push(I::new_without_predecessor(start));
            }
        }

        search
    }

    /// Returns the edge through which `u` was discovered.
    /// Start nodes and nodes not discovered so far have none.
    pub fn discovery_edge_of(&self, u: Node) -> Option<&WeightedEdge> {
        self.discovery[u as usize].as_ref()
    }

    /// Returns the number of edges between the closest start node and `u` in the traversal
    /// tree, or `None` if `u` was not discovered so far
    pub fn depth_of(&self, u: Node) -> Option<Node> {
        let depth = self.depths[u as usize];
        (depth != INVALID_NODE).then_some(depth)
    }

    /// Continues an exhausted search at the unvisited node of smallest index.
    /// Returns *false* if every node was visited already.
    /// ** Panics if the frontier is not empty **
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let node = self.graph.vertices().find(|&u| !self.visited[u as usize]);
        match node {
            None => false,
            Some(x) => {
                self.visited[x as usize] = true;
                self.depths[x as usize] = 0;
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Once `stopper` is yielded, the search ends.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Builder-style variant of [`TraversalSearch::set_stop_at`].
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Marks `u` as visited so the search never enters it.
    /// Has no effect on nodes that are already in the frontier, so call it right after
    /// construction.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited[u as usize] = true;
    }

    /// Builder-style variant of [`TraversalSearch::exclude_node`].
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Calls [`TraversalSearch::exclude_node`] for every node of `us`.
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder-style variant of [`TraversalSearch::exclude_nodes`].
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the search and returns *true* if a path of at least one edge leads from the
    /// start node to `u`. For `u == start` this requires a cycle through `u`.
    ///
    /// ** Panics unless called on a fresh search with a single start node **
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 1);
        self.visited[u as usize] = false;
        self.next();
        self.any(|v| v.item() == u)
    }
}

/// Turns the visiting order of a search into ranks.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Returns `ranking` with `ranking[u]` the 0-based position at which `u` was yielded,
    /// or `None` if some node was never yielded.
    ///
    /// ** Panics if a node is yielded twice **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0)]);
    ///
    /// let ranking = g.bfs(0).ranking().unwrap();
    /// assert_eq!(ranking, vec![0, 1, 2]);
    /// ```
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<'a, G, S> RankFromOrder<'a, G> for TraversalSearch<'a, G, S, Node>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
}

/// Parent and depth arrays of the tree spanned by a search with predecessors.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Runs the search to completion writing `tree[v] = parent of v` for every reached `v`
    /// except the start nodes. Other entries are left untouched.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Parent array in which start nodes and unreached nodes are their own parent.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges([(0, 1, 1.0)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Runs the search to completion writing the tree depth of every reached node
    /// (start nodes have depth 0). Other entries are left untouched.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Depth array; unreached nodes get depth 0 as well.
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![0; self.graph_ref().len()];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Callback invoked for every node of a topological order
pub trait NodeVisitor<L> {
    fn visit(&mut self, u: Node, label: &L);
}

impl<L, F> NodeVisitor<L> for F
where
    F: FnMut(Node, &L),
{
    fn visit(&mut self, u: Node, label: &L) {
        self(u, label)
    }
}

/// Kahn's algorithm as an iterator.
///
/// Uses Kahn's algorithm:
/// - Initializes a FIFO queue with all nodes of in-degree 0 in index order.
/// - Every dequeued node is yielded and removed, successors that drop to in-degree 0
///   are enqueued.
/// - Stops once all nodes are output or no node of in-degree 0 remains,
///   in which case the graph has a cycle.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
    visited: NumNodes,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    /// Next node without remaining predecessors.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        self.visited += 1;

        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited as usize),
        )
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Constructs a new topological search on the given directed graph.
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees().collect_vec();
        let queue = graph.sources().collect();

        Self {
            graph,
            in_degs,
            queue,
            visited: 0,
        }
    }

    /// Returns `Ok` if every node of the graph has been output and
    /// [`GraphError::NotAcyclic`] if the search got stuck before.
    ///
    /// ** Must only be called after the iterator has been exhausted **
    pub fn finish(&self) -> Result<()> {
        debug_assert!(self.queue.is_empty());
        if self.visited == self.graph.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NotAcyclic {
                visited: self.visited,
                total: self.graph.number_of_nodes(),
            })
        }
    }

    /// Consumes the search and returns the complete topological order
    pub fn into_order(mut self) -> Result<Vec<Node>> {
        let order = self.by_ref().collect_vec();
        self.finish()?;
        Ok(order)
    }
}

impl<'a, G> RankFromOrder<'a, G> for TopoSearch<'a, G> where G: DirectedAdjacencyList {}

/// Traversals and topological sorting as methods on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Nodes reachable from `start` in **breadth-first** order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Nodes reachable from `start` in **depth-first** order.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Like [`Traversal::bfs`] but yields `(predecessor, node)`.
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Like [`Traversal::dfs`] but yields `(predecessor, node)`.
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Nodes in **topological order**; stops early on a cycle
    /// (see [`TopoSearch::finish`]).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0)]);
    /// let order: Vec<_> = g.topo_search().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        TopoSearch::new(self)
    }

    /// Returns all nodes in topological order or [`GraphError::NotAcyclic`]
    fn topological_order(&self) -> Result<Vec<Node>>
    where
        Self: DirectedAdjacencyList,
    {
        self.topo_search().into_order()
    }

    /// Calls `visitor` for every node in topological order.
    ///
    /// If the graph has a cycle, [`GraphError::NotAcyclic`] is returned after the visitor
    /// has seen every node that could be ordered.
    fn visit_topological<V>(&self, visitor: &mut V) -> Result<()>
    where
        Self: DirectedAdjacencyList + LabelledGraph,
        V: NodeVisitor<<Self as LabelledGraph>::Label>,
    {
        let mut topo = self.topo_search();
        for u in topo.by_ref() {
            visitor.visit(u, self.label_of(u));
        }
        topo.finish()
    }

    /// Returns *true* if a topological search orders every node.
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.topo_search().count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
