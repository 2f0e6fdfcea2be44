/*!
# Utilities

Helper structs shared by the graph representations, most importantly the
[`NodeIndexer`](self::node_indexer::NodeIndexer) translating caller labels into dense node indices.

You probably do not need to interact with this module directly.
*/

pub mod node_indexer;

pub use node_indexer::NodeIndexer;
