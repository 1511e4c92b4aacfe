/*!
`vgraphs` is a generic graph library built around **capabilities** and **views**.

# Capabilities

A graph is anything implementing some of the traits in [`ops`]:

- [`GraphType`](crate::ops::GraphType) fixes the vertex and edge types as well as the
  directedness and parallel-edge policy,
- [`ImplicitVertexSet`](crate::ops::ImplicitVertexSet) answers membership queries,
- [`IncidenceGraph`](crate::ops::IncidenceGraph) enumerates the out-edges of a vertex,
- [`VertexListGraph`](crate::ops::VertexListGraph) and [`EdgeListGraph`](crate::ops::EdgeListGraph)
  enumerate all vertices and edges,
- [`MutableVertexGraph`](crate::ops::MutableVertexGraph) and
  [`MutableEdgeGraph`](crate::ops::MutableEdgeGraph) edit a graph.

Vertices are arbitrary caller-defined identities (see [`vertex`]), edges are anything that
knows its two endpoints (see [`edge`]).

### Available Representations

See the [`repr`] module for the graph storages:

- [`AdjacencyGraph`](crate::repr::AdjacencyGraph) (directed)
- [`UndirectedGraph`](crate::repr::UndirectedGraph)

# Views

A [`FilteredGraph`](crate::predicates::FilteredGraph) wraps a borrowed graph together with a
vertex predicate and an edge predicate. It exposes the same capabilities as the graph it wraps
but only shows vertices that fulfill the vertex predicate and edges that fulfill the edge
predicate and connect two such vertices. Nothing is copied or cached.

# Errors

All failures are typed (see [`error`]) and fall into three tiers: argument errors, lookup
errors (entity not found) and algorithm errors (a structural property such as the absence of
negative cycles or strong connectivity does not hold).

# Design

All algorithms are provided as configurable structs that one can alter to their needs using either
the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, the commonly used functionalities are implemented via traits on the graph itself,
making them usable without configuring the algorithm beforehand.

# Usage

In most use-cases, `use vgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use vgraphs::{prelude::*, algo::*};

let graph: AdjacencyGraph<&str, Edge<&str>> =
    AdjacencyGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
assert!(!graph.is_strongly_connected());

let view = graph.vertex_filtered(|v: &&str| *v != "d");
assert!(view.is_strongly_connected());
assert_eq!(
    view.out_edges(&"d").err(),
    Some(LookupError::vertex_not_found(&"d"))
);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod ops;
pub mod predicates;
pub mod repr;
pub(crate) mod testing;
pub mod vertex;

pub use error::{AlgorithmError, ArgumentError, ErrorKind, GraphError, LookupError};

/// `vgraphs::prelude` includes definitions for vertices and edges, all basic graph operation
/// traits, the filtered views as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, ops::*, predicates::*, repr::*, vertex::*};
    pub use super::{AlgorithmError, ArgumentError, ErrorKind, GraphError, LookupError};
}
