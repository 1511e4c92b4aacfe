use std::fmt::{Debug, Display};

use crate::vertex::VertexType;

/// Any relation between a `source` and a `target` vertex.
///
/// Whether the edge is directed is decided by the graph storing it, not by the edge itself.
pub trait EdgeType: Clone + PartialEq + Debug {
    /// Identity type of the endpoints
    type Vertex: VertexType;

    /// Returns the source endpoint
    fn source(&self) -> &Self::Vertex;

    /// Returns the target endpoint
    fn target(&self) -> &Self::Vertex;

    /// Returns true if both endpoints are equal
    fn is_self_loop(&self) -> bool {
        self.source() == self.target()
    }

    /// Returns the endpoint opposite to `vertex` or `None` if `vertex` is not incident
    fn other_end(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex> {
        if self.source() == vertex {
            Some(self.target())
        } else if self.target() == vertex {
            Some(self.source())
        } else {
            None
        }
    }

    /// Returns true if `vertex` is one of the endpoints
    fn is_incident(&self, vertex: &Self::Vertex) -> bool {
        self.source() == vertex || self.target() == vertex
    }
}

/// An edge is defined by two vertices/endpoints.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

impl<V: VertexType> EdgeType for Edge<V> {
    type Vertex = V;

    fn source(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }
}

impl<V: Clone> Edge<V> {
    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

/// An edge carrying an additional `tag` such as a weight, a label or an id.
///
/// Two tagged edges between the same endpoints are distinct as soon as their tags
/// differ, which makes them the natural choice for graphs with parallel edges.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaggedEdge<V, T> {
    source: V,
    target: V,
    tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }

    /// Returns the tag of this edge
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Drops the tag
    pub fn into_untagged(self) -> Edge<V> {
        Edge(self.source, self.target)
    }
}

impl<V, T> EdgeType for TaggedEdge<V, T>
where
    V: VertexType,
    T: Clone + PartialEq + Debug,
{
    type Vertex = V;

    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: Debug, T: Debug> Debug for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})[{:?}]", self.source, self.target, self.tag)
    }
}

impl<V: Display, T: Display> Display for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})[{}]", self.source, self.target, self.tag)
    }
}

impl<V, T> From<(V, V, T)> for TaggedEdge<V, T> {
    fn from(value: (V, V, T)) -> Self {
        TaggedEdge::new(value.0, value.1, value.2)
    }
}
