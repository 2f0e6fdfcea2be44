use smallvec::{Array, SmallVec};

use super::*;

/// Storage of the edges attached to a single node.
///
/// Implementations keep their edges in insertion order; removing an edge preserves the
/// relative order of the remaining ones.
pub trait Neighborhood: Clone + Default {
    /// Returns a slice-reference of the stored edges
    fn as_slice(&self) -> &[WeightedEdge];

    /// Returns a mutable slice-reference of the stored edges
    fn as_slice_mut(&mut self) -> &mut [WeightedEdge];

    /// Appends an edge without checking if an equivalent edge exists beforehand.
    fn push(&mut self, edge: WeightedEdge);

    /// Removes and returns the edge at position `pos`, shifting all later edges.
    /// ** Panics if `pos >= self.num_of_edges()` **
    fn remove_at(&mut self, pos: usize) -> WeightedEdge;

    /// Removes all edges in the Neighborhood
    fn clear(&mut self);

    /// Returns the number of edges in the Neighborhood
    fn num_of_edges(&self) -> NumNodes {
        self.as_slice().len() as NumNodes
    }

    /// Returns an iterator over all edges in the Neighborhood
    fn edges(&self) -> Iter<'_, WeightedEdge> {
        self.as_slice().iter()
    }

    /// Returns the position of the first edge matching the predicate
    fn position_by<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&WeightedEdge) -> bool,
    {
        self.as_slice().iter().position(predicate)
    }

    /// Returns the first edge matching the predicate
    fn find_by<F>(&self, mut predicate: F) -> Option<&WeightedEdge>
    where
        F: FnMut(&WeightedEdge) -> bool,
    {
        self.as_slice().iter().find(|e| predicate(e))
    }

    /// Returns the first edge matching the predicate as a mutable reference
    fn find_by_mut<F>(&mut self, mut predicate: F) -> Option<&mut WeightedEdge>
    where
        F: FnMut(&WeightedEdge) -> bool,
    {
        self.as_slice_mut().iter_mut().find(|e| predicate(e))
    }

    /// Removes the first edge matching the predicate and returns it
    fn try_remove_by<F>(&mut self, predicate: F) -> Option<WeightedEdge>
    where
        F: FnMut(&WeightedEdge) -> bool,
    {
        let pos = self.position_by(predicate)?;
        Some(self.remove_at(pos))
    }
}

/// Basic Neighborhood-Impl. using `Vec<WeightedEdge>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<WeightedEdge>);

impl Neighborhood for ArrNeighborhood {
    fn as_slice(&self) -> &[WeightedEdge] {
        &self.0
    }

    fn as_slice_mut(&mut self) -> &mut [WeightedEdge] {
        &mut self.0
    }

    fn push(&mut self, edge: WeightedEdge) {
        self.0.push(edge);
    }

    fn remove_at(&mut self, pos: usize) -> WeightedEdge {
        self.0.remove(pos)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[WeightedEdge; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 4>(pub SmallVec<[WeightedEdge; N]>)
where
    [WeightedEdge; N]: Array<Item = WeightedEdge>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [WeightedEdge; N]: Array<Item = WeightedEdge>,
{
    fn as_slice(&self) -> &[WeightedEdge] {
        &self.0
    }

    fn as_slice_mut(&mut self) -> &mut [WeightedEdge] {
        &mut self.0
    }

    fn push(&mut self, edge: WeightedEdge) {
        self.0.push(edge);
    }

    fn remove_at(&mut self, pos: usize) -> WeightedEdge {
        self.0.remove(pos)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn removal_keeps_order<Nbs: Neighborhood>() {
        let mut nbs = Nbs::default();
        for v in 0..6 {
            nbs.push(WeightedEdge::new(0, v, v as Weight));
        }
        assert_eq!(nbs.num_of_edges(), 6);

        assert_eq!(
            nbs.try_remove_by(|e| e.target() == 2),
            Some(WeightedEdge::new(0, 2, 2.0))
        );
        assert!(nbs.try_remove_by(|e| e.target() == 2).is_none());

        assert_eq!(
            nbs.edges().map(|e| e.target()).collect_vec(),
            vec![0, 1, 3, 4, 5]
        );

        nbs.find_by_mut(|e| e.target() == 4)
            .unwrap()
            .set_weight(-1.0);
        assert_eq!(nbs.find_by(|e| e.target() == 4).unwrap().weight(), -1.0);

        nbs.clear();
        assert_eq!(nbs.num_of_edges(), 0);
    }

    #[test]
    fn arr_neighborhood() {
        removal_keeps_order::<ArrNeighborhood>();
    }

    #[test]
    fn sparse_neighborhood() {
        removal_keeps_order::<SparseNeighborhood>();
        removal_keeps_order::<SparseNeighborhood<2>>();
    }
}
