/*!
# Predicates & Filtered Views

A [`VertexPredicate`] decides whether a vertex is visible, an [`EdgePredicate`] decides
whether an edge is visible. Any `Fn(&V) -> bool` (resp. `Fn(&E) -> bool`) is a predicate,
so closures can be passed directly.

Predicates are expected to be pure: a view may call them any number of times per query
(including zero times) and in any order.

[`FilteredGraph`] combines a borrowed base graph with one predicate of each kind into a
lazy read-only view. Nothing is materialized: every query consults the base graph and
the predicates again.

```
use vgraphs::prelude::*;

let graph: AdjacencyGraph<u32, Edge<u32>> = AdjacencyGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
let view = graph.filtered(|v: &u32| *v != 3, |_: &Edge<u32>| true);

assert!(view.contains_edge_between(&1, &2));
assert!(!view.contains_vertex(&3));
assert!(view.out_edges(&2).unwrap().next().is_none());
```
*/

use crate::ops::GraphType;

mod filtered;

pub use filtered::*;

/// Decides whether a vertex of type `V` is visible.
pub trait VertexPredicate<V>: Fn(&V) -> bool {}

impl<V, F> VertexPredicate<V> for F where F: Fn(&V) -> bool {}

/// Decides whether an edge of type `E` is visible.
pub trait EdgePredicate<E>: Fn(&E) -> bool {}

impl<E, F> EdgePredicate<E> for F where F: Fn(&E) -> bool {}

/// Type-erased vertex predicate
pub type BoxedVertexPredicate<'a, V> = Box<dyn Fn(&V) -> bool + 'a>;

/// Type-erased edge predicate
pub type BoxedEdgePredicate<'a, E> = Box<dyn Fn(&E) -> bool + 'a>;

/// Predicate accepting everything
pub fn accept_all<T: ?Sized>(_: &T) -> bool {
    true
}

/// Predicate rejecting everything
pub fn reject_all<T: ?Sized>(_: &T) -> bool {
    false
}

/// Creates filtered views directly from a graph.
pub trait Filter: GraphType + Sized {
    /// Returns a view of all vertices fulfilling `vertex_predicate` and all edges that
    /// fulfill `edge_predicate` and connect two such vertices
    fn filtered<VP, EP>(&self, vertex_predicate: VP, edge_predicate: EP) -> FilteredGraph<'_, Self, VP, EP>
    where
        VP: VertexPredicate<Self::Vertex>,
        EP: EdgePredicate<Self::Edge>,
    {
        FilteredGraph::new(self, vertex_predicate, edge_predicate)
    }

    /// Returns a view that hides all vertices not fulfilling `vertex_predicate`
    #[allow(clippy::type_complexity)]
    fn vertex_filtered<VP>(
        &self,
        vertex_predicate: VP,
    ) -> FilteredGraph<'_, Self, VP, fn(&Self::Edge) -> bool>
    where
        VP: VertexPredicate<Self::Vertex>,
    {
        FilteredGraph::new(self, vertex_predicate, accept_all as fn(&Self::Edge) -> bool)
    }

    /// Returns a view that hides all edges not fulfilling `edge_predicate`
    #[allow(clippy::type_complexity)]
    fn edge_filtered<EP>(
        &self,
        edge_predicate: EP,
    ) -> FilteredGraph<'_, Self, fn(&Self::Vertex) -> bool, EP>
    where
        EP: EdgePredicate<Self::Edge>,
    {
        FilteredGraph::new(self, accept_all as fn(&Self::Vertex) -> bool, edge_predicate)
    }
}

impl<G: GraphType> Filter for G {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closures_are_predicates() {
        fn vertex_test<P: VertexPredicate<u32>>(p: P, v: u32) -> bool {
            p(&v)
        }

        let threshold = 4;
        assert!(vertex_test(|v: &u32| *v < threshold, 3));
        assert!(!vertex_test(|v: &u32| *v < threshold, 4));
        assert!(vertex_test(accept_all::<u32>, 4));
        assert!(!vertex_test(reject_all::<u32>, 4));

        let boxed: BoxedVertexPredicate<u32> = Box::new(move |v| v % 2 == 0);
        assert!(vertex_test(boxed, 2));
    }

    #[test]
    fn boxed_predicates_build_views() {
        use crate::{edge::Edge, ops::*, repr::AdjacencyGraph};

        let graph: AdjacencyGraph<u32, Edge<u32>> =
            AdjacencyGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);

        let limit = 3;
        let vertex_predicate: BoxedVertexPredicate<u32> = Box::new(move |v: &u32| *v < limit);
        let edge_predicate: BoxedEdgePredicate<Edge<u32>> = Box::new(|e: &Edge<u32>| e.0 != 1);
        let view = FilteredGraph::new(&graph, vertex_predicate, edge_predicate);

        assert!(view.contains_vertex(&2));
        assert!(!view.contains_vertex(&3));
        assert!(view.contains_edge_between(&0, &1));
        assert!(!view.contains_edge_between(&1, &2));
        assert!(!view.contains_edge_between(&2, &3));
        assert_eq!(view.out_degree(&2).unwrap(), 1);
        assert_eq!(view.edges().count(), 2);
    }
}
