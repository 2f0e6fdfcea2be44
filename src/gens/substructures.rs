/*!
# Paths and Cycles

Adds chains of equally weighted edges between labels, inserting missing labels on the way.
Pairs that are already connected keep their stored edge (see
[`LabelledGraphEditing::connect_weighted`]).

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = DiGraph::new();
g.connect_path(["a", "b", "c"], 2.0);
g.connect_cycle(["c", "d"], 1.0);

assert_eq!(g.number_of_nodes(), 4);
assert_eq!(g.number_of_edges(), 4);
assert!(g.contains_edge(&"d", &"c"));
```
*/

use itertools::Itertools;

use super::*;

/// Label-level helpers connecting sequences of nodes
pub trait GeneratorSubstructures: LabelledGraphEditing {
    /// Adds `labels[i] -> labels[i + 1]` for every consecutive pair.
    /// Returns the number of edges that were new.
    fn connect_path<P>(&mut self, labels: P, weight: Weight) -> NumEdges
    where
        P: IntoIterator<Item = Self::Label>,
    {
        labels
            .into_iter()
            .tuple_windows()
            .filter(|(u, v)| self.connect_weighted(u.clone(), v.clone(), weight))
            .count() as NumEdges
    }

    /// Like [`GeneratorSubstructures::connect_path`] and additionally closes the sequence with
    /// `last -> first`. A single label becomes a self-loop.
    fn connect_cycle<C>(&mut self, labels: C, weight: Weight) -> NumEdges
    where
        C: IntoIterator<Item = Self::Label>,
    {
        let labels = labels.into_iter().collect_vec();
        let (Some(first), Some(last)) = (labels.first().cloned(), labels.last().cloned()) else {
            return 0;
        };

        let added = self.connect_path(labels, weight);
        added + self.connect_weighted(last, first, weight) as NumEdges
    }
}

impl<G> GeneratorSubstructures for G where G: LabelledGraphEditing {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_edges_in_order() {
        let mut g = DiGraph::new();
        assert_eq!(g.connect_path(["w", "x", "y", "z"], 2.5), 3);

        assert_eq!(
            g.edge_set().map(|e| (*e.source, *e.target, e.weight)).collect_vec(),
            vec![("w", "x", 2.5), ("x", "y", 2.5), ("y", "z", 2.5)]
        );
    }

    #[test]
    fn short_sequences() {
        let mut g = DiGraph::<u8>::new();
        assert_eq!(g.connect_path([], 1.0), 0);
        assert_eq!(g.connect_cycle([], 1.0), 0);
        assert_eq!(g.connect_path([7], 1.0), 0);
        assert_eq!(g.number_of_nodes(), 0);

        assert_eq!(g.connect_cycle([7], -1.0), 1);
        assert_eq!(g.find_edge(&7, &7).map(|e| e.weight()), Some(-1.0));
    }

    #[test]
    fn existing_edges_are_kept() {
        let mut g = UnGraph::new();
        g.connect_weighted(2, 1, 9.0);

        assert_eq!(g.connect_cycle([1, 2, 3], 1.0), 2);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.find_edge(&1, &2).unwrap().weight(), 9.0);
        assert!(g.contains_edge(&1, &3));
    }
}
