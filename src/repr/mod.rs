/*!
# Graph Representations

Concrete storages implementing the capability traits of [`crate::ops`]:

- [`AdjacencyGraph`]: directed, out-edge lists per vertex.
- [`UndirectedGraph`]: undirected, incidence lists per vertex.

Both keep vertices and edges in insertion order and take their parallel-edge
policy at construction time.
*/

use crate::{edge::*, error::*, ops::*, vertex::*};

mod adjacency;
mod undirected;

pub use adjacency::*;
pub use undirected::*;
