/*!
# Graph Algorithms

Algorithms written against the capability traits of [`ops`](crate::ops), so they run
unchanged on concrete storages and on [`FilteredGraph`](crate::predicates::FilteredGraph) views.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use vgraphs::algo::*;
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

Algorithms report structural failures of the input as [`AlgorithmError`]s: a reachable
negative cycle in [`BellmanFord`] and missing strong connectivity in
[`Connectivity::ensure_strongly_connected`].
*/

mod connectivity;
mod shortest_path;
mod traversal;

use crate::{error::*, prelude::*};

pub use connectivity::*;
pub use shortest_path::*;
pub use traversal::*;
