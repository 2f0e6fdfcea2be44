/*!
# Graph Algorithms

This module provides the **path and traversal algorithms** built on top of the graph
representations in this crate. All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use wgraphs::algo::*;
```

Single-source path algorithms ([`BfsShortestPath`], [`Dijkstra`], [`BellmanFord`],
[`DagShortestPath`], [`DagLongestPath`]) run completely in their constructor and implement the
common [`PathFinder`] query interface afterwards. Traversals are provided as lazy
**iterators** via the [`Traversal`] trait implemented on every graph.
*/

mod bellman_ford;
mod bfs_path;
mod cycle;
mod dag_path;
mod dijkstra;
mod path_finder;
mod reachability;
pub mod traversal;

use itertools::Itertools;

use crate::prelude::*;

pub use bellman_ford::*;
pub use bfs_path::*;
pub use cycle::*;
pub use dag_path::*;
pub use dijkstra::*;
pub use path_finder::*;
pub use reachability::*;
pub use traversal::*;
