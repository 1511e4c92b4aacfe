/*!
# Vertex Representation

Vertices are opaque, caller-defined identities. We only require what the
storages need to index and report them: cloning, equality, hashing and a
`Debug` rendering for error messages. Equality semantics are entirely up to the
caller's `Eq` implementation.
*/

use std::{fmt::Debug, hash::Hash};

/// Any type usable as a vertex identity
pub trait VertexType: Clone + Eq + Hash + Debug {}

impl<T> VertexType for T where T: Clone + Eq + Hash + Debug {}
