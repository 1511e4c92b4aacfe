/*!
# Directed Adjacency Graph

[`AdjacencyGraph`] stores, for every vertex, the list of its out-edges.

## Design
- Vertices are kept in insertion order in a `Vec` and are located through an
  `FxHashMap` from vertex to position.
- Out-edge lists are `SmallVec`s, since most vertices only have a handful of
  out-edges.
- In-edges are not stored; removing a vertex therefore scans all out-edge lists.
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph storing **only outgoing edges**.
///
/// # Type parameters
/// - `V`: vertex identity
/// - `E`: edge type with endpoints of type `V`
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V, E> {
    vertices: Vec<V>,
    positions: FxHashMap<V, usize>,
    out_edges: Vec<EdgeList<E>>,
    num_edges: usize,
    allow_parallel_edges: bool,
}

impl<V, E> AdjacencyGraph<V, E>
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
            out_edges: Vec::new(),
            num_edges: 0,
            allow_parallel_edges,
        }
    }

    fn position_of(&self, vertex: &V) -> Result<usize, LookupError> {
        self.positions
            .get(vertex)
            .copied()
            .ok_or_else(|| LookupError::vertex_not_found(vertex))
    }

    /// Removes all out-edges of `vertex` and returns their number
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    pub fn clear_out_edges(&mut self, vertex: &V) -> Result<usize, LookupError> {
        let pos = self.position_of(vertex)?;
        let removed = self.out_edges[pos].len();
        self.out_edges[pos].clear();
        self.num_edges -= removed;
        Ok(removed)
    }

    /// Removes all out-edges of `vertex` that fit a given predicate and returns their number
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `vertex` is not a member of the graph.
    pub fn remove_out_edges_if<F>(&mut self, vertex: &V, mut predicate: F) -> Result<usize, LookupError>
    where
        F: FnMut(&E) -> bool,
    {
        let pos = self.position_of(vertex)?;
        let before = self.out_edges[pos].len();
        self.out_edges[pos].retain(|e| !predicate(&*e));
        let removed = before - self.out_edges[pos].len();
        self.num_edges -= removed;
        Ok(removed)
    }

    /// Removes all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.positions.clear();
        self.out_edges.clear();
        self.num_edges = 0;
    }
}

impl<V, E> Default for AdjacencyGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> GraphType for AdjacencyGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V, E> ImplicitVertexSet for AdjacencyGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }
}

impl<V, E> IncidenceGraph for AdjacencyGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn out_edges(&self, vertex: &V) -> Result<impl Iterator<Item = &E>, LookupError> {
        let pos = self.position_of(vertex)?;
        Ok(self.out_edges[pos].iter())
    }

    fn out_degree(&self, vertex: &V) -> Result<usize, LookupError> {
        Ok(self.out_edges[self.position_of(vertex)?].len())
    }

    fn try_get_out_edges(&self, vertex: &V) -> Option<impl Iterator<Item = &E>> {
        let pos = *self.positions.get(vertex)?;
        Some(self.out_edges[pos].iter())
    }
}

impl<V, E> VertexListGraph for AdjacencyGraph<V, E>
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

impl<V, E> EdgeListGraph for AdjacencyGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn edges(&self) -> impl Iterator<Item = &E> {
        self.out_edges.iter().flat_map(|edges| edges.iter())
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.positions
            .get(edge.source())
            .is_some_and(|&pos| self.out_edges[pos].contains(edge))
    }
}

impl<V, E> MutableVertexGraph for AdjacencyGraph<V, E>
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
        self.out_edges.push(EdgeList::new());
        true
    }

    fn try_remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(pos) = self.positions.remove(vertex) else {
            return false;
        };

        self.vertices.remove(pos);
        let removed_out = self.out_edges.remove(pos).len();

        // Keep insertion order: every vertex behind `pos` moves one slot to the front
        for v in &self.vertices[pos..] {
            if let Some(p) = self.positions.get_mut(v) {
                *p -= 1;
            }
        }

        let mut removed_in = 0;
        for edges in &mut self.out_edges {
            let before = edges.len();
            edges.retain(|e| e.target() != vertex);
            removed_in += before - edges.len();
        }

        self.num_edges -= removed_out + removed_in;
        trace!(
            vertex = ?vertex,
            removed_edges = removed_out + removed_in,
            "removed vertex"
        );
        true
    }
}

impl<V, E> MutableEdgeGraph for AdjacencyGraph<V, E>
where
    V: VertexType,
    E: EdgeType<Vertex = V>,
{
    fn add_edge(&mut self, edge: E) -> Result<bool, LookupError> {
        let pos = self.position_of(edge.source())?;
        if !self.contains_vertex(edge.target()) {
            return Err(LookupError::vertex_not_found(edge.target()));
        }

        if !self.allow_parallel_edges
            && self.out_edges[pos]
                .iter()
                .any(|e| e.target() == edge.target())
        {
            trace!(edge = ?edge, "rejected parallel edge");
            return Ok(false);
        }

        self.out_edges[pos].push(edge);
        self.num_edges += 1;
        Ok(true)
    }

    fn try_remove_edge(&mut self, edge: &E) -> bool {
        let Some(&pos) = self.positions.get(edge.source()) else {
            return false;
        };

        match self.out_edges[pos].iter().position(|e| e == edge) {
            Some(i) => {
                self.out_edges[pos].remove(i);
                self.num_edges -= 1;
                true
            }
            None => false,
        }
    }
}

/// Storage of the out-edges of a single vertex
type EdgeList<E> = SmallVec<[E; 4]>;

// ---------- Testing ----------

test_graph_ops!(
    test_adjacency_graph,
    AdjacencyGraph,
    false,
    (
        GraphNew,
        IncidenceGraph,
        EdgeListGraph,
        MutableEdgeGraph,
        MutableVertexGraph,
        ParallelEdges
    )
);
