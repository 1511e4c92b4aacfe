use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// An undirected graph representation.
///
/// Every edge is stored once in insertion order and additionally in the incidence list of
/// both endpoints (a self-loop is listed once). The out-edges of a vertex are all edges
/// incident to it, irrespective of which endpoint is the edge's `source`.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<V, E> {
    vertices: Vec<V>,
    positions: FxHashMap<V, usize>,
    incident: Vec<SmallVec<[E; 4]>>,
    edges: Vec<E>,
    allow_parallel_edges: bool,
}

impl<V, E> UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    /// Creates an empty graph that allows parallel edges
    pub fn new() -> Self {
        Self::with_parallel_edges(true)
    }

    /// Creates an empty graph with the given parallel-edge policy
    pub fn with_parallel_edges(allow_parallel_edges: bool) -> Self {
        Self {
            vertices: Vec::new(),
            positions: FxHashMap::default(),
            incident: Vec::new(),
            edges: Vec::new(),
            allow_parallel_edges,
        }
    }

    /// Returns the number of edges incident to `vertex` where a self-loop counts twice
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    pub fn degree(&self, vertex: &V) -> Result<usize, LookupError> {
        Ok(self
            .out_edges(vertex)?
            .map(|e| if e.is_self_loop() { 2 } else { 1 })
            .sum())
    }

    fn remove_incidence(&mut self, vertex: &V, edge: &E) {
        if let Some(&pos) = self.positions.get(vertex)
            && let Some(i) = self.incident[pos].iter().position(|e| e == edge)
        {
            self.incident[pos].remove(i);
        }
    }
}

impl<V, E> Default for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> GraphType for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        false
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V, E> ImplicitVertexSet for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }
}

impl<V, E> IncidenceGraph for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn out_edges(&self, vertex: &V) -> Result<impl Iterator<Item = &E>, LookupError> {
        match self.positions.get(vertex) {
            Some(&pos) => Ok(self.incident[pos].iter()),
            None => Err(LookupError::vertex_not_found(vertex)),
        }
    }
}

impl<V, E> VertexListGraph for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E> EdgeListGraph for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V, E> MutableVertexGraph for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }

        self.positions.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.incident.push(SmallVec::new());
        true
    }

    fn try_remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(pos) = self.positions.remove(vertex) else {
            return false;
        };

        self.vertices.remove(pos);
        let incident = self.incident.remove(pos);
        for v in &self.vertices[pos..] {
            if let Some(p) = self.positions.get_mut(v) {
                *p -= 1;
            }
        }

        for edge in &incident {
            if let Some(other) = edge.other_end(vertex)
                && other != vertex
            {
                self.remove_incidence(other, edge);
            }
        }
        self.edges.retain(|e| !e.is_incident(vertex));

        trace!(vertex = ?vertex, removed_edges = incident.len(), "removed vertex");
        true
    }
}

impl<V, E> MutableEdgeGraph for UndirectedGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn add_edge(&mut self, edge: E) -> Result<bool, LookupError> {
        let (Some(&u), Some(&v)) = (
            self.positions.get(edge.source()),
            self.positions.get(edge.target()),
        ) else {
            let missing = if self.contains_vertex(edge.source()) {
                edge.target()
            } else {
                edge.source()
            };
            return Err(LookupError::vertex_not_found(missing));
        };

        if !self.allow_parallel_edges && self.contains_edge_between(edge.source(), edge.target()) {
            trace!(edge = ?edge, "rejected parallel edge");
            return Ok(false);
        }

        self.incident[u].push(edge.clone());
        if u != v {
            self.incident[v].push(edge.clone());
        }
        self.edges.push(edge);
        Ok(true)
    }

    fn try_remove_edge(&mut self, edge: &E) -> bool {
        let Some(i) = self.edges.iter().position(|e| e == edge) else {
            return false;
        };

        self.edges.remove(i);
        self.remove_incidence(edge.source(), edge);
        if !edge.is_self_loop() {
            self.remove_incidence(edge.target(), edge);
        }
        true
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_undirected_graph,
    UndirectedGraph,
    true,
    (
        GraphNew,
        IncidenceGraph,
        EdgeListGraph,
        MutableEdgeGraph,
        MutableVertexGraph,
        ParallelEdges
    )
);
