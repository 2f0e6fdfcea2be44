/*!
# Graph Representations

Concrete graph containers. Every container owns
- a [`NodeIndexer`] mapping caller labels to dense node indices,
- one [`Neighborhood`] per node (two for directed graphs: outgoing and incoming),
- the number of edges.

Containers are generic over the [`Neighborhood`] storage:

- [`DiGraph`] / [`UnGraph`] : edges stored in `Vec`s,
- [`SparseDiGraph`] / [`SparseUnGraph`] : edges stored inline in `SmallVec`s; prefer these
  if most nodes have only a handful of edges.
*/

use std::{fmt, slice::Iter};

use crate::{ops::*, utils::NodeIndexer, *};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $nbs:ident [$($field:ident),+], $directed:ident) => {
            impl<L: Label, Nbs: Neighborhood> GraphType for $struct<L, Nbs> {
                type Dir = $directed;
            }

            impl<L: Label, Nbs: Neighborhood> GraphNodeOrder for $struct<L, Nbs> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.indexer.len()
                }
            }

            impl<L: Label, Nbs: Neighborhood> GraphEdgeOrder for $struct<L, Nbs> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<L: Label, Nbs: Neighborhood> LabelledGraph for $struct<L, Nbs> {
                type Label = L;

                fn label_of(&self, u: Node) -> &L {
                    self.indexer.label_of(u)
                }

                fn index_of(&self, label: &L) -> Option<Node> {
                    self.indexer.index_of(label)
                }

                fn labels(&self) -> impl Iterator<Item = &L> + '_ {
                    self.indexer.labels().iter()
                }
            }

            impl<L: Label, Nbs: Neighborhood> AdjacencyList for $struct<L, Nbs> {
                fn edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_ {
                    self.$nbs[u as usize].edges()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_edges()
                }

                fn total_degree_of(&self, u: Node) -> NumNodes {
                    0 $(+ self.$field[u as usize].num_of_edges())+
                }
            }

            impl<L: Label, Nbs: Neighborhood> AdjacencyTest for $struct<L, Nbs> {
                fn edge(&self, u: Node, v: Node) -> Option<&WeightedEdge> {
                    self.$nbs[u as usize].find_by(|e| e.target() == v)
                }
            }

            impl<L: Label, Nbs: Neighborhood> GraphNew for $struct<L, Nbs> {
                fn new() -> Self {
                    Self {
                        indexer: NodeIndexer::new(),
                        num_edges: 0,
                        $(
                            $field: Vec::new(),
                        )+
                    }
                }
            }

            impl<L: Label, Nbs: Neighborhood> Default for $struct<L, Nbs> {
                fn default() -> Self {
                    <Self as GraphNew>::new()
                }
            }

            impl<L: Label, Nbs: Neighborhood> GraphNodeEditing for $struct<L, Nbs> {
                fn add_node(&mut self, label: L) -> Node {
                    let (u, is_new) = self.indexer.insert(label);
                    if is_new {
                        $(
                            self.$field.push(Nbs::default());
                        )+
                    }
                    u
                }
            }

            impl<L: Label, Nbs: Neighborhood> fmt::Debug for $struct<L, Nbs> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($struct))
                        .field("nodes", &self.indexer)
                        .field("edges", &self.edges(Self::is_undirected()).collect::<Vec<_>>())
                        .finish()
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
