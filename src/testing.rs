/// Every storage should honour the capability contracts of `ops`.
///
/// Instantiates the storage with `u32` vertices and plain `Edge<u32>` edges and runs the
/// listed contract tests against randomly generated edge sets.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, error::*, ops::*, repr::*, testing::test_graph_ops};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Graph = $graph<u32, Edge<u32>>;

            /// Creates a sorted list of at most `m_ub` distinct random edges for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: u32) -> Vec<Edge<u32>> {
                let mut edges = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u.min(v), u.max(v))
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Creates a graph with vertices `0..n` and no edges
            fn graph_with_vertices(n: u32) -> Graph {
                let mut graph = Graph::new();
                graph.add_vertex_range(0..n);
                graph
            }

            $(
                test_graph_ops!(Graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert_eq!(graph.vertex_count(), 0);
            assert_eq!(graph.edge_count(), 0);
            assert!(graph.is_vertices_empty());
            assert!(graph.allow_parallel_edges());
            assert_eq!(graph.is_directed(), !$undirected);

            for n in 1..50 {
                let graph = graph_with_vertices(n);

                assert_eq!(graph.vertex_count(), n as usize);
                assert_eq!(graph.vertices().copied().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.is_out_edges_empty(u).unwrap()));
            }
        }
    };
    ($graph:ident<$undirected:literal>: IncidenceGraph) => {
        #[test]
        fn test_incidence_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub);

                        let mut adj: Vec<Vec<u32>> = vec![Vec::new(); n as usize];
                        for Edge(u, v) in edges.iter().cloned() {
                            adj[u as usize].push(v);
                            if $undirected && u != v {
                                adj[v as usize].push(u);
                            }
                        }

                        let mut graph = graph_with_vertices(n);
                        assert_eq!(graph.add_edge_range(edges.iter().cloned()).unwrap(), edges.len());

                        for u in 0..n {
                            let expected = adj[u as usize].iter().copied().sorted_unstable().collect_vec();
                            let got = graph
                                .out_edges(&u)
                                .unwrap()
                                .map(|e| *e.other_end(&u).unwrap())
                                .sorted_unstable()
                                .collect_vec();

                            assert_eq!(got, expected);
                            assert_eq!(graph.out_degree(&u).unwrap(), expected.len());

                            for v in 0..n {
                                let multiplicity = expected.iter().filter(|&&w| w == v).count();
                                assert_eq!(graph.contains_edge_between(&u, &v), multiplicity > 0);
                                assert_eq!(graph.try_get_edge(&u, &v).is_some(), multiplicity > 0);
                                assert_eq!(graph.try_get_edges(&u, &v).unwrap().count(), multiplicity);
                            }
                        }

                        assert!(matches!(graph.out_edges(&n), Err(LookupError::VertexNotFound(_))));
                        assert!(graph.out_degree(&n).is_err());
                        assert!(graph.try_get_out_edges(&n).is_none());
                        assert!(graph.try_get_edges(&n, &0).is_none());
                        assert!(graph.try_get_edge(&n, &0).is_none());
                        assert_eq!(graph.try_get_edges(&0, &n).map(|e| e.count()), Some(0));
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: EdgeListGraph) => {
        #[test]
        fn test_edge_list_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    let edges = random_edges(rng, n, m_ub);
                    let mut graph = graph_with_vertices(n);
                    graph.add_edge_range(edges.iter().cloned()).unwrap();

                    assert_eq!(graph.edge_count(), edges.len());
                    assert_eq!(graph.edges().cloned().sorted().collect_vec(), edges);
                    assert!(edges.iter().all(|e| graph.contains_edge(e)));
                    assert!(!graph.contains_edge(&Edge(n, 0)));
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: MutableEdgeGraph) => {
        #[test]
        fn test_mutable_edge_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                let mut edges = random_edges(rng, n, n * 5);
                let mut graph = graph_with_vertices(n);
                graph.add_edge_range(edges.iter().cloned()).unwrap();

                let rng = &mut Pcg64Mcg::seed_from_u64(4);
                for _ in 0..edges.len() / 2 {
                    let e = edges.swap_remove(rng.random_range(0..edges.len()));

                    assert!(graph.try_remove_edge(&e));
                    assert!(!graph.contains_edge(&e));
                    assert_eq!(graph.edge_count(), edges.len());
                    assert_eq!(graph.remove_edge(&e), Err(LookupError::edge_not_found(&e)));
                }

                assert!(edges.iter().all(|e| graph.contains_edge(e)));
                for e in &edges {
                    graph.remove_edge(e).unwrap();
                }
                assert!(graph.is_edges_empty());

                assert_eq!(graph.add_edge(Edge(0, n)), Err(LookupError::vertex_not_found(&n)));
                assert_eq!(graph.add_edge(Edge(n, 0)), Err(LookupError::vertex_not_found(&n)));
            }
        }
    };
    ($graph:ident<$undirected:literal>: MutableVertexGraph) => {
        #[test]
        fn test_mutable_vertex_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10u32, 20, 50] {
                let edges = random_edges(rng, n, n * 3);
                let mut graph = graph_with_vertices(n);
                assert_eq!(graph.add_vertex_range(0..n), 0);
                graph.add_edge_range(edges.iter().cloned()).unwrap();

                let mut remaining = edges.clone();
                for u in (0..n).step_by(3) {
                    graph.remove_vertex(&u).unwrap();
                    remaining.retain(|e| !e.is_incident(&u));

                    assert!(!graph.contains_vertex(&u));
                    assert_eq!(graph.remove_vertex(&u), Err(LookupError::vertex_not_found(&u)));
                    assert!(graph.out_edges(&u).is_err());
                    assert_eq!(graph.edge_count(), remaining.len());
                    assert_eq!(graph.edges().cloned().sorted().collect_vec(), remaining);
                }

                assert_eq!(graph.vertex_count(), (n - n.div_ceil(3)) as usize);
                assert!(graph.vertices().all(|u| u % 3 != 0));
            }
        }
    };
    ($graph:ident<$undirected:literal>: ParallelEdges) => {
        #[test]
        fn test_parallel_edges() {
            let mut multi = graph_with_vertices(3);
            assert!(multi.add_edge(Edge(0, 1)).unwrap());
            assert!(multi.add_edge(Edge(0, 1)).unwrap());
            assert_eq!(multi.try_get_edges(&0, &1).unwrap().count(), 2);
            assert_eq!(multi.edge_count(), 2);

            let mut simple = <$graph>::with_parallel_edges(false);
            simple.add_vertex_range(0..3);
            assert!(!simple.allow_parallel_edges());
            assert!(simple.add_edge(Edge(0, 1)).unwrap());
            assert!(!simple.add_edge(Edge(0, 1)).unwrap());
            assert_eq!(simple.add_edge(Edge(1, 0)).unwrap(), !$undirected);
            assert_eq!(simple.edge_count(), if $undirected { 1 } else { 2 });
        }
    };
}

pub(crate) use test_graph_ops;
