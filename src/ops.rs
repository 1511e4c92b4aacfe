use crate::{
    edge::EdgeType,
    error::{ArgumentError, GraphError, LookupError},
    vertex::VertexType,
};

/// Structural policy of a graph.
///
/// Both flags are fixed when a graph is constructed and never change afterwards.
pub trait GraphType {
    /// Identity type of the vertices
    type Vertex: VertexType;

    /// Type of the edges; their endpoints are of type [`GraphType::Vertex`]
    type Edge: EdgeType<Vertex = Self::Vertex>;

    /// Returns *true* if edges are oriented from source to target
    fn is_directed(&self) -> bool;

    /// Returns *true* if multiple edges may share the same endpoints
    fn allow_parallel_edges(&self) -> bool;

    /// Returns *true* if edges have no orientation
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Membership test for vertices.
pub trait ImplicitVertexSet: GraphType {
    /// Returns *true* if `vertex` is a member of the graph
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;
}

/// Access to the out-edges of a vertex.
///
/// For undirected graphs the out-edges of a vertex are all edges incident to it.
pub trait IncidenceGraph: ImplicitVertexSet {
    /// Returns a lazy iterator over the out-edges of `vertex`.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    fn out_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<impl Iterator<Item = &Self::Edge>, LookupError>;

    /// Returns the number of out-edges of `vertex`
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    fn out_degree(&self, vertex: &Self::Vertex) -> Result<usize, LookupError> {
        Ok(self.out_edges(vertex)?.count())
    }

    /// Returns *true* if `vertex` has no out-edges
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    fn is_out_edges_empty(&self, vertex: &Self::Vertex) -> Result<bool, LookupError> {
        Ok(self.out_edges(vertex)?.next().is_none())
    }

    /// Returns the `index`-th (0-indexed) out-edge of `vertex`
    ///
    /// # Errors
    /// Fails with a lookup error if `vertex` is not a member and with
    /// [`ArgumentError::IndexOutOfRange`] if `vertex` has at most `index` out-edges.
    fn out_edge(&self, vertex: &Self::Vertex, index: usize) -> Result<&Self::Edge, GraphError> {
        if let Some(edge) = self.out_edges(vertex)?.nth(index) {
            return Ok(edge);
        }

        Err(ArgumentError::IndexOutOfRange {
            index,
            len: self.out_degree(vertex)?,
        }
        .into())
    }

    /// Returns *true* if at least one edge from `source` to `target` exists
    fn contains_edge_between(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.try_get_edge(source, target).is_some()
    }

    /// Returns the first edge from `source` to `target`, if any
    fn try_get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<&Self::Edge> {
        self.try_get_edges(source, target)?.next()
    }

    /// Returns all edges from `source` to `target`.
    /// Returns `None` if `source` is not a member of the graph.
    fn try_get_edges(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<impl Iterator<Item = &Self::Edge>> {
        let edges = self.try_get_out_edges(source)?;
        let (source, target) = (source.clone(), target.clone());
        Some(edges.filter(move |e| e.other_end(&source) == Some(&target)))
    }

    /// Returns the out-edges of `vertex` or `None` if `vertex` is not a member of the graph
    fn try_get_out_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Option<impl Iterator<Item = &Self::Edge>> {
        self.out_edges(vertex).ok()
    }
}

/// Enumeration of all vertices.
pub trait VertexListGraph: ImplicitVertexSet {
    /// Returns an iterator over all vertices.
    /// The order is stable as long as the graph is not mutated.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns the number of vertices
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_vertices_empty(&self) -> bool {
        self.vertices().next().is_none()
    }
}

/// Enumeration of all edges.
pub trait EdgeListGraph: GraphType {
    /// Returns an iterator over all edges.
    /// The order is stable as long as the graph is not mutated.
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Returns the number of edges
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns *true* if the graph has no edges
    fn is_edges_empty(&self) -> bool {
        self.edges().next().is_none()
    }

    /// Returns *true* if `edge` is a member of the graph
    fn contains_edge(&self, edge: &Self::Edge) -> bool {
        self.edges().any(|e| e == edge)
    }
}

/// Provides functions to insert/delete vertices
pub trait MutableVertexGraph: GraphType {
    /// Adds `vertex` to the graph.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds all vertices in the collection and returns the number of newly added ones
    fn add_vertex_range(&mut self, vertices: impl IntoIterator<Item = Self::Vertex>) -> usize {
        vertices
            .into_iter()
            .map(|v| self.add_vertex(v) as usize)
            .sum()
    }

    /// Removes `vertex` together with all edges incident to it.
    /// Returns *true* exactly if the vertex was present.
    fn try_remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;

    /// Removes `vertex` together with all edges incident to it.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> Result<(), LookupError> {
        if self.try_remove_vertex(vertex) {
            Ok(())
        } else {
            Err(LookupError::vertex_not_found(vertex))
        }
    }
}

/// Provides functions to insert/delete edges
pub trait MutableEdgeGraph: GraphType {
    /// Adds `edge` to the graph.
    /// Returns *false* if the edge was rejected as a parallel edge.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if an endpoint is not a member of the graph.
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool, LookupError>;

    /// Adds all edges in the collection and returns the number of added ones.
    ///
    /// # Errors
    /// Stops at the first edge with an endpoint that is not a member of the graph.
    fn add_edge_range(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Self::Edge>>,
    ) -> Result<usize, LookupError> {
        let mut added = 0;
        for edge in edges {
            added += self.add_edge(edge.into())? as usize;
        }
        Ok(added)
    }

    /// Removes one occurrence of `edge`.
    /// Returns *true* exactly if the edge was present.
    fn try_remove_edge(&mut self, edge: &Self::Edge) -> bool;

    /// Removes one occurrence of `edge`.
    ///
    /// # Errors
    /// Fails with [`LookupError::EdgeNotFound`] if `edge` is not a member of the graph.
    fn remove_edge(&mut self, edge: &Self::Edge) -> Result<(), LookupError> {
        if self.try_remove_edge(edge) {
            Ok(())
        } else {
            Err(LookupError::edge_not_found(edge))
        }
    }
}

/// Edge insertion that creates missing endpoints on the fly
pub trait MutableVertexAndEdgeGraph: MutableVertexGraph + MutableEdgeGraph {
    /// Adds both endpoints of `edge` (if missing) and then `edge` itself.
    /// Returns *true* if the edge was added.
    fn add_vertices_and_edge(&mut self, edge: Self::Edge) -> bool {
        self.add_vertex(edge.source().clone());
        self.add_vertex(edge.target().clone());
        matches!(self.add_edge(edge), Ok(true))
    }

    /// Applies [`MutableVertexAndEdgeGraph::add_vertices_and_edge`] to all edges and returns
    /// the number of added edges
    fn add_vertices_and_edge_range(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Self::Edge>>,
    ) -> usize {
        edges
            .into_iter()
            .map(|e| self.add_vertices_and_edge(e.into()) as usize)
            .sum()
    }
}

impl<G: MutableVertexGraph + MutableEdgeGraph> MutableVertexAndEdgeGraph for G {}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphType + Sized {
    /// Creates a graph containing exactly the given edges and their endpoints
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Self::Edge>>) -> Self;
}

impl<G: Default + MutableVertexAndEdgeGraph> GraphFromScratch for G {
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Self::Edge>>) -> Self {
        let mut graph = Self::default();
        graph.add_vertices_and_edge_range(edges);
        graph
    }
}
