/*!
Single-source shortest paths with arbitrary (including negative) edge weights.

[`BellmanFord`] is configured with a weight function and a root before it is run on a graph.
The result is a [`ShortestPathTree`] from which distances and paths can be read.

If a cycle of negative total weight is reachable from the root, shortest paths are not
defined and the run fails with [`AlgorithmError::NegativeCycle`]. On an undirected graph every
negative edge forms such a cycle with itself.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Bellman-Ford single-source shortest paths.
///
/// # Examples
/// ```
/// use vgraphs::{prelude::*, algo::*};
///
/// let graph: AdjacencyGraph<char, TaggedEdge<char, f64>> = AdjacencyGraph::from_edges([
///     ('a', 'b', 4.0),
///     ('a', 'c', 1.0),
///     ('c', 'b', 2.0),
/// ]);
///
/// let tree = BellmanFord::new(&graph, |e: &TaggedEdge<char, f64>| *e.tag())
///     .with_root('a')
///     .run()
///     .unwrap();
///
/// assert_eq!(tree.distance_to(&'b'), Some(3.0));
/// assert_eq!(tree.path_to(&'b').unwrap().len(), 2);
/// ```
pub struct BellmanFord<'a, G, W>
where
    G: VertexListGraph + IncidenceGraph,
    W: Fn(&G::Edge) -> f64,
{
    graph: &'a G,
    weight: W,
    root: Option<G::Vertex>,
}

impl<'a, G, W> BellmanFord<'a, G, W>
where
    G: VertexListGraph + IncidenceGraph,
    W: Fn(&G::Edge) -> f64,
{
    /// Creates an unconfigured search on `graph` where `weight` assigns each edge its length
    pub fn new(graph: &'a G, weight: W) -> Self {
        Self {
            graph,
            weight,
            root: None,
        }
    }

    /// Sets the vertex all distances are measured from
    pub fn set_root(&mut self, root: G::Vertex) {
        self.root = Some(root);
    }

    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root(root);
        self
    }

    /// Computes the shortest paths from the root to all reachable vertices.
    ///
    /// # Errors
    /// - [`ArgumentError::Missing`] if no root was configured
    /// - [`LookupError::VertexNotFound`] if the root is not a member of the graph
    /// - [`AlgorithmError::NegativeCycle`] if a negative cycle is reachable from the root
    pub fn run(&self) -> Result<ShortestPathTree<'a, G>> {
        let root = self.root.clone().ok_or(ArgumentError::Missing("root"))?;
        if !self.graph.contains_vertex(&root) {
            return Err(LookupError::vertex_not_found(&root).into());
        }

        let graph = self.graph;
        let vertices = graph.vertices().collect_vec();

        let mut tree = ShortestPathTree {
            distances: FxHashMap::default(),
            predecessors: FxHashMap::default(),
            root,
        };
        if let Some(&r) = vertices.iter().find(|&&v| *v == tree.root) {
            tree.distances.insert(r, 0.0);
        }

        for round in 0..vertices.len() {
            let mut relaxed = None;

            for &u in &vertices {
                let Some(&du) = tree.distances.get(u) else {
                    continue;
                };

                for edge in graph.out_edges(u)? {
                    let Some(v) = edge.other_end(u) else {
                        continue;
                    };

                    let dv = du + (self.weight)(edge);
                    if tree.distances.get(v).is_none_or(|&old| dv < old) {
                        tree.distances.insert(v, dv);
                        tree.predecessors.insert(v, edge);
                        relaxed = Some(edge);
                    }
                }
            }

            let Some(edge) = relaxed else {
                debug!(
                    vertices = vertices.len(),
                    rounds = round + 1,
                    reached = tree.distances.len(),
                    "shortest paths converged"
                );
                return Ok(tree);
            };

            trace!(round, last_relaxed = ?edge, "relaxation round finished");

            // In round |V| - 1 nothing may change anymore
            if round + 1 == vertices.len() {
                debug!(edge = ?edge, "edge can still be relaxed after |V| - 1 rounds");
                return Err(AlgorithmError::negative_cycle().into());
            }
        }

        Ok(tree)
    }
}

/// Distances and predecessor edges computed by [`BellmanFord`].
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'a, G>
where
    G: GraphType,
{
    root: G::Vertex,
    distances: FxHashMap<&'a G::Vertex, f64>,
    predecessors: FxHashMap<&'a G::Vertex, &'a G::Edge>,
}

impl<'a, G> ShortestPathTree<'a, G>
where
    G: GraphType,
{
    pub fn root(&self) -> &G::Vertex {
        &self.root
    }

    /// Returns the length of a shortest path from the root to `vertex`, or `None` if `vertex` is
    /// unreachable
    pub fn distance_to(&self, vertex: &G::Vertex) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Returns *true* if `vertex` is reachable from the root
    pub fn is_reachable(&self, vertex: &G::Vertex) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Returns the last edge of a shortest path to `vertex`
    pub fn predecessor(&self, vertex: &G::Vertex) -> Option<&'a G::Edge> {
        self.predecessors.get(vertex).copied()
    }

    /// Returns the edges of a shortest path from the root to `vertex` or `None` if `vertex` is
    /// unreachable. The path to the root itself is empty.
    pub fn path_to(&self, vertex: &G::Vertex) -> Option<Vec<&'a G::Edge>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = vertex;
        while *current != self.root {
            let edge = self.predecessor(current)?;
            path.push(edge);
            current = edge.other_end(current)?;
        }

        path.reverse();
        Some(path)
    }

    /// Returns all reachable vertices with their distances in arbitrary order
    pub fn distances(&self) -> impl Iterator<Item = (&'a G::Vertex, f64)> {
        self.distances.iter().map(|(&v, &d)| (v, d))
    }
}

/// Shortest path algorithms as methods on graphs.
pub trait ShortestPath: VertexListGraph + IncidenceGraph + Sized {
    /// Runs [`BellmanFord`] from `root` with the given edge weights.
    ///
    /// # Errors
    /// See [`BellmanFord::run`].
    fn bellman_ford<W>(&self, root: Self::Vertex, weight: W) -> Result<ShortestPathTree<'_, Self>>
    where
        W: Fn(&Self::Edge) -> f64,
    {
        BellmanFord::new(self, weight).with_root(root).run()
    }
}

impl<G: VertexListGraph + IncidenceGraph> ShortestPath for G {}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use super::*;

    type Weighted = TaggedEdge<u32, f64>;
    type Graph = AdjacencyGraph<u32, Weighted>;

    fn weight(e: &Weighted) -> f64 {
        *e.tag()
    }

    fn diamond() -> Graph {
        Graph::from_edges([
            (0, 1, 4.0),
            (0, 2, 1.0),
            (2, 1, 2.0),
            (1, 3, 1.0),
            (2, 3, 5.0),
        ])
    }

    #[test]
    fn distances_and_paths() {
        let graph = diamond();
        let tree = graph.bellman_ford(0, weight).unwrap();

        assert_eq!(tree.root(), &0);
        assert_eq!(tree.distance_to(&0), Some(0.0));
        assert_eq!(tree.distance_to(&1), Some(3.0));
        assert_eq!(tree.distance_to(&2), Some(1.0));
        assert_eq!(tree.distance_to(&3), Some(4.0));

        let path = tree.path_to(&3).unwrap();
        assert_eq!(
            path.iter().map(|e| (*e.source(), *e.target())).collect_vec(),
            [(0, 2), (2, 1), (1, 3)]
        );
        assert_eq!(path.iter().map(|e| weight(e)).sum::<f64>(), 4.0);
        assert!(tree.path_to(&0).unwrap().is_empty());
        assert_eq!(tree.distances().count(), 4);
    }

    #[test]
    fn unreachable_vertices() {
        let mut graph = diamond();
        graph.add_vertex(9);

        let tree = graph.bellman_ford(1, weight).unwrap();
        assert_eq!(tree.distance_to(&3), Some(1.0));
        assert!(!tree.is_reachable(&0));
        assert!(tree.path_to(&9).is_none());
        assert!(tree.predecessor(&9).is_none());
    }

    #[test]
    fn negative_edges_without_cycle() {
        let graph = Graph::from_edges([(0, 1, 2.0), (1, 2, -3.0), (0, 2, 0.0), (2, 3, 1.0)]);
        let tree = graph.bellman_ford(0, weight).unwrap();

        assert_eq!(tree.distance_to(&2), Some(-1.0));
        assert_eq!(tree.distance_to(&3), Some(0.0));
    }

    #[test]
    fn negative_cycle() {
        let graph = Graph::from_edges([(0, 1, 1.0), (1, 2, -2.0), (2, 1, 1.0), (2, 3, 1.0)]);

        let err = graph.bellman_ford(0, weight).unwrap_err();
        assert!(err.is_negative_cycle());
        assert_eq!(err.kind(), ErrorKind::Algorithm);
        assert_eq!(err.to_string(), "The graph contains at least one negative cycle.");
        assert!(err.source().is_none());

        // cycle is not reachable from 3
        assert!(graph.bellman_ford(3, weight).is_ok());

        // hiding a cycle edge removes the cycle
        let view = graph.edge_filtered(|e: &Weighted| (*e.source(), *e.target()) != (2, 1));
        let tree = view.bellman_ford(0, weight).unwrap();
        assert_eq!(tree.distance_to(&3), Some(0.0));

        // as does hiding a cycle vertex
        let view = graph.vertex_filtered(|v: &u32| *v != 2);
        assert_eq!(view.bellman_ford(0, weight).unwrap().distance_to(&1), Some(1.0));
    }

    #[test]
    fn root_errors() {
        let graph = diamond();

        let err = graph.bellman_ford(7, weight).unwrap_err();
        assert!(err.is_vertex_not_found());
        assert_eq!(err.kind(), ErrorKind::Lookup);

        let err = graph.vertex_filtered(|v: &u32| *v != 0).bellman_ford(0, weight).unwrap_err();
        assert!(err.is_vertex_not_found());

        let err = BellmanFord::new(&graph, weight).run().unwrap_err();
        assert!(matches!(
            err,
            GraphError::Argument(ArgumentError::Missing("root"))
        ));
    }

    #[test]
    fn undirected_negative_edge() {
        let graph: UndirectedGraph<u32, Weighted> =
            UndirectedGraph::from_edges([(0, 1, 1.0), (1, 2, 2.0)]);
        let tree = graph.bellman_ford(2, weight).unwrap();
        assert_eq!(tree.distance_to(&0), Some(3.0));
        assert_eq!(tree.path_to(&0).unwrap().len(), 2);

        let graph: UndirectedGraph<u32, Weighted> =
            UndirectedGraph::from_edges([(0, 1, 1.0), (1, 2, -2.0)]);
        assert!(graph.bellman_ford(0, weight).unwrap_err().is_negative_cycle());
    }
}
