use std::fmt::{self, Debug};

use crate::{edge::EdgeType, error::*, ops::*};

use super::{EdgePredicate, VertexPredicate};

/// A lazy, read-only view of a base graph restricted by a vertex and an edge predicate.
///
/// - A vertex is visible iff it is a member of the base graph and fulfills the vertex predicate.
/// - An edge is visible iff it is a member of the base graph, fulfills the edge predicate and
///   both of its endpoints fulfill the vertex predicate.
///
/// The view borrows the base graph. It caches nothing, so answers always reflect the current
/// state of the base graph and the current behaviour of the predicates. As the view is itself
/// an [`IncidenceGraph`], views can be nested.
pub struct FilteredGraph<'g, G, VP, EP> {
    base: &'g G,
    vertex_predicate: VP,
    edge_predicate: EP,
}

impl<'g, G, VP, EP> FilteredGraph<'g, G, VP, EP>
where
    G: GraphType,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    /// Creates a view of `base` restricted by both predicates
    pub fn new(base: &'g G, vertex_predicate: VP, edge_predicate: EP) -> Self {
        Self {
            base,
            vertex_predicate,
            edge_predicate,
        }
    }

    /// Creates a view from arguments that may be absent.
    ///
    /// # Errors
    /// Fails with [`ArgumentError::Missing`] naming the first absent argument in the order
    /// `base_graph`, `vertex_predicate`, `edge_predicate`.
    pub fn try_new(
        base: Option<&'g G>,
        vertex_predicate: Option<VP>,
        edge_predicate: Option<EP>,
    ) -> Result<Self, ArgumentError> {
        let base = base.ok_or(ArgumentError::Missing("base_graph"))?;
        let vertex_predicate = vertex_predicate.ok_or(ArgumentError::Missing("vertex_predicate"))?;
        let edge_predicate = edge_predicate.ok_or(ArgumentError::Missing("edge_predicate"))?;

        Ok(Self::new(base, vertex_predicate, edge_predicate))
    }

    /// Returns an empty builder
    pub fn builder() -> FilteredGraphBuilder<'g, G, VP, EP> {
        FilteredGraphBuilder::default()
    }

    /// Returns the wrapped graph
    pub fn base_graph(&self) -> &'g G {
        self.base
    }

    pub fn vertex_predicate(&self) -> &VP {
        &self.vertex_predicate
    }

    pub fn edge_predicate(&self) -> &EP {
        &self.edge_predicate
    }

    /// Returns *true* if `vertex` passes the vertex predicate (membership is not checked)
    fn passes_vertex(&self, vertex: &G::Vertex) -> bool {
        (self.vertex_predicate)(vertex)
    }

    /// Returns *true* if `edge` and both of its endpoints pass their predicates
    /// (membership is not checked)
    fn passes_edge(&self, edge: &G::Edge) -> bool {
        (self.edge_predicate)(edge)
            && self.passes_vertex(edge.source())
            && self.passes_vertex(edge.target())
    }
}

impl<G, VP: Clone, EP: Clone> Clone for FilteredGraph<'_, G, VP, EP> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            vertex_predicate: self.vertex_predicate.clone(),
            edge_predicate: self.edge_predicate.clone(),
        }
    }
}

impl<G: Debug, VP, EP> Debug for FilteredGraph<'_, G, VP, EP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredGraph")
            .field("base", self.base)
            .finish_non_exhaustive()
    }
}

impl<G, VP, EP> GraphType for FilteredGraph<'_, G, VP, EP>
where
    G: GraphType,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    fn allow_parallel_edges(&self) -> bool {
        self.base.allow_parallel_edges()
    }
}

impl<G, VP, EP> ImplicitVertexSet for FilteredGraph<'_, G, VP, EP>
where
    G: ImplicitVertexSet,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.base.contains_vertex(vertex) && self.passes_vertex(vertex)
    }
}

impl<G, VP, EP> IncidenceGraph for FilteredGraph<'_, G, VP, EP>
where
    G: IncidenceGraph,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    /// Returns the visible out-edges of a visible `vertex`.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is hidden by the vertex predicate.
    /// Lookup errors of the base graph are passed on unchanged.
    fn out_edges(&self, vertex: &G::Vertex) -> Result<impl Iterator<Item = &G::Edge>, LookupError> {
        if !self.passes_vertex(vertex) {
            return Err(LookupError::vertex_not_found(vertex));
        }

        Ok(self.base.out_edges(vertex)?.filter(move |e| self.passes_edge(e)))
    }

    fn try_get_out_edges(&self, vertex: &G::Vertex) -> Option<impl Iterator<Item = &G::Edge>> {
        if !self.passes_vertex(vertex) {
            return None;
        }

        Some(self.base.try_get_out_edges(vertex)?.filter(move |e| self.passes_edge(e)))
    }

    fn try_get_edges(
        &self,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Option<impl Iterator<Item = &G::Edge>> {
        if !self.passes_vertex(source) {
            return None;
        }

        Some(self.base.try_get_edges(source, target)?.filter(move |e| self.passes_edge(e)))
    }
}

impl<G, VP, EP> VertexListGraph for FilteredGraph<'_, G, VP, EP>
where
    G: VertexListGraph,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    fn vertices(&self) -> impl Iterator<Item = &G::Vertex> {
        self.base.vertices().filter(move |v| self.passes_vertex(v))
    }
}

impl<G, VP, EP> EdgeListGraph for FilteredGraph<'_, G, VP, EP>
where
    G: EdgeListGraph,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    fn edges(&self) -> impl Iterator<Item = &G::Edge> {
        self.base.edges().filter(move |e| self.passes_edge(e))
    }

    fn contains_edge(&self, edge: &G::Edge) -> bool {
        self.passes_edge(edge) && self.base.contains_edge(edge)
    }
}

/// Setter-style construction of a [`FilteredGraph`].
///
/// ```
/// use vgraphs::prelude::*;
///
/// let graph: AdjacencyGraph<u32, Edge<u32>> = AdjacencyGraph::from_edges([(1, 2)]);
///
/// let view = FilteredGraph::builder()
///     .base_graph(&graph)
///     .vertex_predicate(|v: &u32| *v != 2)
///     .edge_predicate(|_: &Edge<u32>| true)
///     .build()
///     .unwrap();
///
/// assert_eq!(view.vertex_count(), 1);
/// assert!(view.is_out_edges_empty(&1).unwrap());
/// ```
pub struct FilteredGraphBuilder<'g, G, VP, EP> {
    base: Option<&'g G>,
    vertex_predicate: Option<VP>,
    edge_predicate: Option<EP>,
}

impl<G, VP, EP> Default for FilteredGraphBuilder<'_, G, VP, EP> {
    fn default() -> Self {
        Self {
            base: None,
            vertex_predicate: None,
            edge_predicate: None,
        }
    }
}

impl<'g, G, VP, EP> FilteredGraphBuilder<'g, G, VP, EP>
where
    G: GraphType,
    VP: VertexPredicate<G::Vertex>,
    EP: EdgePredicate<G::Edge>,
{
    pub fn base_graph(mut self, base: &'g G) -> Self {
        self.base = Some(base);
        self
    }

    pub fn vertex_predicate(mut self, vertex_predicate: VP) -> Self {
        self.vertex_predicate = Some(vertex_predicate);
        self
    }

    pub fn edge_predicate(mut self, edge_predicate: EP) -> Self {
        self.edge_predicate = Some(edge_predicate);
        self
    }

    /// Builds the view.
    ///
    /// # Errors
    /// Fails like [`FilteredGraph::try_new`] if an argument was never set.
    pub fn build(self) -> Result<FilteredGraph<'g, G, VP, EP>, ArgumentError> {
        FilteredGraph::try_new(self.base, self.vertex_predicate, self.edge_predicate)
    }
}
