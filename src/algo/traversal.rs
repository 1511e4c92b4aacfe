/*!
Graph traversal iterators.

This module provides:
- A generic traversal iterator [`TraversalSearch`] that runs a BFS or a DFS depending on
  the frontier container ([`VecDeque`] or [`Vec`]).
- The [`Traversal`] trait exposing the searches directly as methods on graphs.

Traversals only follow edges reported by [`IncidenceGraph::out_edges`], so running them on a
[`FilteredGraph`](crate::predicates::FilteredGraph) never leaves the visible part of the base
graph. The root must be a member of the traversed graph.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;
use tracing::trace;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> VertexSequencer<T> for VecDeque<T> {
    fn init(item: T) -> Self {
        Self::from([item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> VertexSequencer<T> for Vec<T> {
    fn init(item: T) -> Self {
        vec![item]
    }
    fn push(&mut self, item: T) {
        self.push(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Every vertex reachable from the root is yielded exactly once, starting with the root.
pub struct TraversalSearch<'a, G, S>
where
    G: IncidenceGraph,
    S: VertexSequencer<G::Vertex>,
{
    graph: &'a G,
    visited: FxHashSet<G::Vertex>,
    sequencer: S,
    stop_at: Option<G::Vertex>,
}

/// A breadth-first search iterator
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<<G as GraphType>::Vertex>>;

/// A depth-first search iterator
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<<G as GraphType>::Vertex>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: IncidenceGraph,
    S: VertexSequencer<G::Vertex>,
{
    /// Creates a new traversal iterator starting at `root`.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `root` is not a member of `graph`.
    pub fn new(graph: &'a G, root: &G::Vertex) -> Result<Self, LookupError> {
        if !graph.contains_vertex(root) {
            return Err(LookupError::vertex_not_found(root));
        }

        let mut visited = FxHashSet::default();
        visited.insert(root.clone());

        Ok(Self {
            graph,
            visited,
            sequencer: S::init(root.clone()),
            stop_at: None,
        })
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: G::Vertex) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: G::Vertex) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited.
    /// Has no effect on vertices already in the frontier.
    pub fn exclude_vertex(&mut self, vertex: G::Vertex) {
        self.visited.insert(vertex);
    }

    pub fn with_vertex_excluded(mut self, vertex: G::Vertex) -> Self {
        self.exclude_vertex(vertex);
        self
    }

    /// Returns *true* if `vertex` was already discovered
    pub fn did_visit_vertex(&self, vertex: &G::Vertex) -> bool {
        self.visited.contains(vertex)
    }

    /// Consumes the search and returns *true* iff `target` is reachable from the remaining frontier.
    pub fn is_vertex_reachable(mut self, target: &G::Vertex) -> bool {
        self.any(|v| &v == target)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: IncidenceGraph,
    S: VertexSequencer<G::Vertex>,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        if self.stop_at.as_ref() == Some(&u) {
            while self.sequencer.pop().is_some() {} // drop all
            return Some(u);
        }

        let graph = self.graph;
        match graph.try_get_out_edges(&u) {
            Some(edges) => {
                for v in edges.filter_map(|e| e.other_end(&u)) {
                    if !self.visited.contains(v) {
                        self.visited.insert(v.clone());
                        self.sequencer.push(v.clone());
                    }
                }
            }
            None => trace!(vertex = ?u, "vertex vanished during traversal"),
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), None)
    }
}

/// Traversal algorithms as methods on graphs.
pub trait Traversal: IncidenceGraph + Sized {
    /// Returns a breadth-first search starting at `root`.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `root` is not a member of the graph.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let graph: AdjacencyGraph<u32, Edge<u32>> =
    ///     AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
    ///
    /// assert_eq!(graph.bfs(&1).unwrap().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// assert!(graph.bfs(&9).is_err());
    /// ```
    fn bfs(&self, root: &Self::Vertex) -> Result<Bfs<'_, Self>, LookupError> {
        TraversalSearch::new(self, root)
    }

    /// Returns a depth-first search starting at `root`.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `root` is not a member of the graph.
    fn dfs(&self, root: &Self::Vertex) -> Result<Dfs<'_, Self>, LookupError> {
        TraversalSearch::new(self, root)
    }

    /// Returns *true* if a path from `source` to `target` exists.
    ///
    /// # Errors
    /// Fails with [`LookupError::VertexNotFound`] if `source` is not a member of the graph.
    fn is_reachable(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<bool, LookupError> {
        Ok(self.bfs(source)?.is_vertex_reachable(target))
    }
}

impl<G: IncidenceGraph> Traversal for G {}
