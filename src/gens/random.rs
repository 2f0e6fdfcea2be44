use std::ops::RangeInclusive;

use fxhash::FxHashSet;
use tracing::trace;

use super::*;

/// Generator for random weighted graphs with `n` nodes and (at most) `m` edges.
///
/// Endpoint pairs are drawn uniformly without replacement; self-loops are never generated.
/// Weights are drawn uniformly from the configured (inclusive) range.
/// If `acyclic` is set, only edges `(u, v)` with `u < v` are generated, so directed graphs
/// have `0..n` as a topological order.
///
/// If `m` exceeds the number of possible pairs, every possible pair is generated.
#[derive(Debug, Clone)]
pub struct RandomWeighted {
    n: NumNodes,
    m: NumEdges,
    weights: RangeInclusive<Weight>,
    acyclic: bool,
}

impl Default for RandomWeighted {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: DEFAULT_WEIGHT..=DEFAULT_WEIGHT,
            acyclic: false,
        }
    }
}

impl NumNodesGen for RandomWeighted {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomWeighted {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl RandomWeighted {
    /// Creates a generator for the empty graph with unit weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range edge weights are drawn from.
    /// ** Panics if the range is empty **
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        assert!(weights.start() <= weights.end());
        self.weights = weights;
        self
    }

    /// Only generates edges from smaller to larger node indices
    pub fn acyclic(mut self, acyclic: bool) -> Self {
        self.acyclic = acyclic;
        self
    }

    /// Generates the random edges. If `undirected`, `(u, v)` and `(v, u)` are treated as the
    /// same pair and only normalized edges are returned.
    pub fn edges_with<R: Rng>(&self, rng: &mut R, undirected: bool) -> Vec<WeightedEdge> {
        let n = self.n as u64;
        let max_pairs = if undirected || self.acyclic {
            n * n.saturating_sub(1) / 2
        } else {
            n * n.saturating_sub(1)
        };
        let m = (self.m as u64).min(max_pairs) as usize;

        let mut seen = FxHashSet::default();
        let mut edges = Vec::with_capacity(m);
        while edges.len() < m {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u == v {
                continue;
            }

            let edge = if undirected || self.acyclic {
                Edge(u, v).normalized()
            } else {
                Edge(u, v)
            };
            if seen.insert(edge) {
                edges.push(edge.with_weight(rng.random_range(self.weights.clone())));
            }
        }

        trace!(n = self.n, m = edges.len(), "generated random weighted edges");
        edges
    }

    /// Generates a graph on nodes labelled `0..n` containing the random edges
    pub fn generate<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromScratch<Label = Node> + GraphEdgeEditing + GraphType,
        R: Rng,
    {
        let mut graph = G::from_nodes(0..self.n);
        graph.add_edges(self.edges_with(rng, G::is_undirected()));
        graph
    }
}
