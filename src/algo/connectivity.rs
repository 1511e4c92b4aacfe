use std::iter::FusedIterator;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Strong connectivity as methods on graphs.
pub trait Connectivity: VertexListGraph + IncidenceGraph + Sized {
    /// Returns an iterator over the strongly connected components of the graph
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// In contrast to [`Connectivity::strongly_connected_components`], this method includes
    /// SCCs of size 1 if and only if the vertex has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }

    /// Returns *true* if every vertex can reach every other vertex.
    /// The graph without vertices is strongly connected.
    fn is_strongly_connected(&self) -> bool {
        let mut sccs = self.strongly_connected_components();
        sccs.next().is_none() || sccs.next().is_none()
    }

    /// Returns an error if [`Connectivity::is_strongly_connected`] does not hold.
    ///
    /// # Errors
    /// Fails with [`AlgorithmError::NotStronglyConnected`] if there is more than one strongly
    /// connected component.
    fn ensure_strongly_connected(&self) -> Result<(), AlgorithmError> {
        if self.is_strongly_connected() {
            return Ok(());
        }

        debug!(
            components = self.strongly_connected_components().count(),
            "graph is not strongly connected"
        );
        Err(AlgorithmError::not_strongly_connected())
    }
}

impl<G: VertexListGraph + IncidenceGraph> Connectivity for G {}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the vertices of one strongly connected component at a
/// time. Observe that the order of vertices within a component is non-deterministic; the order of
/// the components themselves are in the reverse topological order of the SCCs (i.e. if each SCC
/// were contracted into a single vertex).
///
/// Vertices are only discovered through [`VertexListGraph::vertices`] and edges only through
/// [`IncidenceGraph::out_edges`], hence on a filtered view only the visible part is considered.
pub struct StronglyConnectedComponents<'a, G>
where
    G: VertexListGraph + IncidenceGraph,
{
    graph: &'a G,
    vertices: Vec<&'a G::Vertex>,
    positions: FxHashMap<&'a G::Vertex, usize>,
    idx: usize,

    states: Vec<VertexState>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<usize>,

    call_stack: Vec<StackFrame>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: VertexListGraph + IncidenceGraph,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        let vertices = graph.vertices().collect_vec();
        let positions = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        Self {
            graph,
            states: vec![Default::default(); vertices.len()],
            vertices,
            positions,
            idx: 0,
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Each vertex that is not part of a circle is returned as its own SCC.
    /// By setting `include = false`, those vertices are not returned
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Just like in a classic DFS where we want to compute a spanning-forest, we will need to
    /// visit each vertex at least once. We start with the first vertex, and cover all vertices
    /// reachable from there in `search`. Then, we search for an untouched vertex here, and start over.
    fn next_unvisited_vertex(&mut self) -> Option<usize> {
        while self.potentially_unvisited < self.vertices.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited;
                self.push_vertex(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this is the first step
    /// to a recursive call of search.
    fn push_vertex(&mut self, vertex: usize, parent: Option<usize>) {
        let u = self.vertices[vertex];
        let neighbors = self
            .graph
            .try_get_out_edges(u)
            .into_iter()
            .flatten()
            .filter_map(|e| e.other_end(u))
            .filter_map(|w| self.positions.get(w).copied())
            .collect_vec();

        self.call_stack.push(StackFrame {
            vertex,
            parent: parent.unwrap_or(vertex),
            initial_stack_len: 0,
            first_call: true,
            has_loop: false,
            neighbors: neighbors.into_iter(),
        });
    }

    fn search(&mut self) -> Option<Vec<G::Vertex>> {
        /*
        Tarjan's algorithm is typically described recursively. We simulate the recursion with
        the explicit call stack `self.call_stack`, which lets us pause after each component
        (to implement `Iterator`) and avoids stack overflows on deep graphs.

        On first visit a vertex v gets the next index and the same low_link. The low_link is the
        smallest index known to be reachable from v. Eventually all vertices of an SCC share the
        low_link of the unique vertex with this index, the root of the SCC.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.vertex;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len();

                self.states[v].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            for w in frame.neighbors.by_ref() {
                let w_state = self.states[w];
                frame.has_loop |= w == v;

                if !w_state.visited {
                    self.push_vertex(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[frame.vertex].try_lower_link(w_state.index);
                }
            }

            let Some(frame) = self.call_stack.pop() else {
                break;
            };
            let state = self.states[v];

            self.states[frame.parent].try_lower_link(state.low_link);

            if state.is_root() {
                if !self.include_singletons && self.path_stack.last() == Some(&v) && !frame.has_loop {
                    // skip producing component descriptor, since we have a singleton vertex
                    self.states[v].on_stack = false;
                    self.path_stack.pop();
                } else {
                    let component = self.path_stack.split_off(frame.initial_stack_len);
                    for &w in &component {
                        self.states[w].on_stack = false;
                    }

                    debug_assert_eq!(component.first(), Some(&v));

                    return Some(component.into_iter().map(|w| self.vertices[w].clone()).collect());
                }
            }
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: VertexListGraph + IncidenceGraph,
{
    type Item = Vec<G::Vertex>;

    /// Returns either the vertices that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_vertex()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: VertexListGraph + IncidenceGraph {}

#[derive(Debug, Clone)]
struct StackFrame {
    vertex: usize,
    parent: usize,
    initial_stack_len: usize,
    first_call: bool,
    has_loop: bool,
    neighbors: std::vec::IntoIter<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
struct VertexState {
    visited: bool,
    on_stack: bool,
    index: usize,
    low_link: usize,
}

impl VertexState {
    fn visit(&mut self, u: usize) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: usize) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the vertices in each component increasingly and then the components themselves lexicographically.
pub fn sort_components<V: Ord>(mut components: Vec<Vec<V>>) -> Vec<Vec<V>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_unstable();
    components
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    type Graph = AdjacencyGraph<u32, Edge<u32>>;

    fn graph_with_vertices(n: u32) -> Graph {
        let mut graph = Graph::new();
        graph.add_vertex_range(0..n);
        graph
    }

    #[test]
    fn scc() {
        let graph = Graph::from_edges([
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ]);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 3);
        assert!(sccs.iter().all(|scc| !scc.is_empty()));

        let sccs = sort_components(sccs);
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);

        assert!(!graph.is_strongly_connected());
    }

    #[test]
    fn scc_singletons() {
        // {0,1} and {4,5} are scc pairs, 2 is a loop, 3 is a singleton
        let mut graph = graph_with_vertices(6);
        graph
            .add_edge_range([(0, 1), (1, 0), (2, 2), (4, 5), (5, 4)])
            .unwrap();

        {
            let sccs = sort_components(graph.strongly_connected_components().collect_vec());
            assert_eq!(sccs, [vec![0, 1], vec![2], vec![3], vec![4, 5]]);
        }

        {
            let sccs = sort_components(
                graph
                    .strongly_connected_components_no_singletons()
                    .collect_vec(),
            );
            assert_eq!(sccs, [vec![0, 1], vec![2], vec![4, 5]]);
        }
    }

    #[test]
    fn scc_tree() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        // in a directed tree each vertex is a strongly connected component
        let sccs = sort_components(graph.strongly_connected_components().collect_vec());
        assert_eq!(sccs.len(), 7);
        for (i, scc) in sccs.iter().enumerate() {
            assert_eq!(scc, &[i as u32]);
        }
    }

    #[test]
    fn scc_random() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for i in 0..10 {
            let n = 1000;
            let mut graph = graph_with_vertices(n);
            for _ in 0..(n as usize * i / 4) {
                graph
                    .add_edge(Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .unwrap();
            }

            let sccs = graph.strongly_connected_components().collect_vec();
            assert_eq!(sccs.iter().map(|x| x.len()).sum::<usize>(), n as usize);
            assert!(sccs.iter().flatten().all_unique());
        }
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep stacks
        let n = 10_000u32;
        let graph = Graph::from_edges((0..n).map(|u| (u, (u + 1) % n)));

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize);
        assert!(graph.is_strongly_connected());
    }

    #[test]
    fn empty_and_single_vertex() {
        assert!(Graph::new().is_strongly_connected());
        assert!(Graph::new().ensure_strongly_connected().is_ok());
        assert!(graph_with_vertices(1).is_strongly_connected());
        assert!(!graph_with_vertices(2).is_strongly_connected());
    }

    #[test]
    fn filtered_views() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 2)]);
        assert!(graph.ensure_strongly_connected().is_ok());

        let err = graph
            .edge_filtered(|e: &Edge<u32>| *e != Edge(3, 2))
            .ensure_strongly_connected()
            .unwrap_err();
        assert!(err.is_not_strongly_connected());
        assert_eq!(err.to_string(), "The graph is not strongly connected.");

        // hiding 1 breaks the cycle 0 -> 1 -> 2 -> 0
        let view = graph.vertex_filtered(|v: &u32| *v != 1);
        assert!(!view.is_strongly_connected());
        assert_eq!(
            sort_components(view.strongly_connected_components().collect_vec()),
            [vec![0], vec![2, 3]]
        );

        // hiding 0 and 1 leaves only the cycle 2 <-> 3
        let view = graph.vertex_filtered(|v: &u32| *v != 0 && *v != 1);
        assert!(view.is_strongly_connected());

        let undirected: UndirectedGraph<u32, Edge<u32>> =
            UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        assert!(undirected.is_strongly_connected());
        assert!(!undirected.vertex_filtered(|v: &u32| *v != 1).is_strongly_connected());
    }
}
