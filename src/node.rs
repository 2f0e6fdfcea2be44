/*!
# Node Representation

Callers identify nodes by arbitrary *labels* (any type implementing [`Label`]).
Internally, every label is assigned a dense index `Node = u32` in the range `0..n` when it is
first inserted. All algorithms work on these indices and only translate back to labels at the
API boundary.
*/

use std::{fmt::Debug, hash::Hash};

/// Dense node index in the range `0..n`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Values that can be used as node labels.
///
/// Node identity is the label's `Eq`/`Hash` contract; the graph never looks inside a label.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug {}
