/*!
# Node Indexer

Maps caller labels to dense node indices (`0..n`, in insertion order) and back.
Every graph representation owns one [`NodeIndexer`]; algorithms never see labels.
*/

use std::fmt;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::node::*;

/// Bidirectional mapping `label <-> index`.
///
/// Forward lookups (`label -> index`) go through an [`FxHashMap`], backward lookups
/// (`index -> label`) are plain slice accesses.
#[derive(Clone)]
pub struct NodeIndexer<L: Label> {
    labels: Vec<L>,
    index: FxHashMap<L, Node>,
}

impl<L: Label> Default for NodeIndexer<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<L: Label> NodeIndexer<L> {
    /// Creates an empty indexer
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty indexer with room for `n` labels
    pub fn with_capacity(n: usize) -> Self {
        Self {
            labels: Vec::with_capacity(n),
            index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Returns the index of `label`, assigning the next free index if it was unknown.
    /// The second entry of the returned pair is *true* exactly if the label was newly inserted.
    ///
    /// ** Panics if the indexer already holds `INVALID_NODE` labels **
    pub fn insert(&mut self, label: L) -> (Node, bool) {
        if let Some(&u) = self.index.get(&label) {
            return (u, false);
        }

        let u = self.labels.len() as Node;
        assert_ne!(u, INVALID_NODE, "too many nodes");

        self.index.insert(label.clone(), u);
        self.labels.push(label);
        (u, true)
    }

    /// Returns the index of `label` if it is known
    pub fn index_of(&self, label: &L) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Returns the label stored at index `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &L {
        &self.labels[u as usize]
    }

    /// Returns all labels in index order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the number of labels
    pub fn len(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns *true* if no label was inserted yet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<L: Label> fmt::Debug for NodeIndexer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.labels
                .iter()
                .enumerate()
                .map(|(u, l)| format!("{u}<->{l:?}"))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut indexer = NodeIndexer::new();

        assert_eq!(indexer.insert("b"), (0, true));
        assert_eq!(indexer.insert("a"), (1, true));
        assert_eq!(indexer.insert("b"), (0, false));

        assert_eq!(indexer.len(), 2);
        assert_eq!(indexer.index_of(&"a"), Some(1));
        assert_eq!(indexer.index_of(&"c"), None);
        assert_eq!(*indexer.label_of(0), "b");
        assert_eq!(indexer.labels(), &["b", "a"]);
    }

    #[test]
    fn debug_format() {
        let mut indexer = NodeIndexer::with_capacity(2);
        indexer.insert(7u64);
        indexer.insert(3u64);
        assert_eq!(format!("{indexer:?}"), "[0<->7, 1<->3]");
    }
}
