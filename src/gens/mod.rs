/*!
# Graph Generators

Builders for random weighted graphs and helpers that add deterministic substructures
(paths, cycles) to an existing graph.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomWeighted::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).edges(m).weights(0.0..=1.0)`).
3. Generate edges via `edges_with()` or a whole graph via `generate()`.

Generated graphs label their nodes `0..n`, so labels and node indices coincide.
*/

use rand::Rng;

use crate::prelude::*;

mod random;
mod substructures;

pub use random::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Builder-style variant of [`NumNodesGen::set_nodes`].
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Builder-style variant of [`NumEdgesGen::set_edges`].
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}
