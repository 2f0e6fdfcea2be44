/*!
`wgraphs` is a library of **weighted** graphs with caller-defined node labels and the classic
single-source path algorithms on top of them.

# Representation

Callers identify nodes by arbitrary *labels* (anything `Clone + Eq + Hash + Debug`). When a label
is first inserted, it is assigned a dense index `Node = u32` in the range `0..n`; all algorithms
work on these indices and translate back to labels at the API boundary.
Edges are [`WeightedEdge`]s: a source, a target and a mutable `f64` weight.
There are no parallel edges: inserting a second edge between the same pair of nodes is rejected.

### Directed vs Undirected

- In a **directed** graph ([`DiGraph`](crate::repr::DiGraph)), every node stores its outgoing
  *and* its incoming edges.
- In an **undirected** graph ([`UnGraph`](crate::repr::UnGraph)), `(u, v)` and `(v, u)` denote the
  same edge, which is stored at both endpoints.

Both come in a `Sparse`-variant storing small adjacency lists inline.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, paths, basic graph operations, and
  all graph representations,
- [`algo`] includes the path finders ([`Dijkstra`](crate::algo::Dijkstra),
  [`BellmanFord`](crate::algo::BellmanFord), ...), cycle detection, topological sorting and
  traversal iterators,
- [`gens`] includes a random weighted graph generator and helpers to add paths and cycles,
- [`error`] includes the [`GraphError`] reported by all fallible operations.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use wgraphs::{prelude::*, algo::*};

let mut graph = DiGraph::new();
graph.connect_weighted("home", "work", 8.0);
graph.connect_weighted("home", "gym", 3.0);
graph.connect_weighted("gym", "work", 4.0);

let dijkstra = Dijkstra::new(&graph, &"home").unwrap();
let path = dijkstra.path_to(&"work").unwrap().unwrap();

assert_eq!(path.weight(), 7.0);
assert_eq!(path.labels().copied().collect::<Vec<_>>(), vec!["home", "gym", "work"]);
```

# Logging

Algorithms emit [`tracing`] events (`debug` summaries when an algorithm finishes, `trace` for
internal checks). The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod path;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits, paths as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, Result},
        node::*,
        ops::*,
        path::*,
        repr::*,
    };
}
