use std::hash::{Hash, Hasher};

use itertools::Itertools;
use pretty_assertions::assert_eq;
use vgraphs::{algo::*, prelude::*};

type Graph = AdjacencyGraph<i32, Edge<i32>>;

fn graph_with_vertices(vertices: impl IntoIterator<Item = i32>) -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex_range(vertices);
    graph
}

#[test]
fn construction() {
    let vertex_predicate = |_: &i32| true;
    let edge_predicate = |_: &Edge<i32>| true;

    for allow_parallel_edges in [true, false] {
        let graph = Graph::with_parallel_edges(allow_parallel_edges);
        let view = FilteredGraph::new(&graph, vertex_predicate, edge_predicate);

        assert!(std::ptr::eq(view.base_graph(), &graph));
        assert!(view.is_directed());
        assert_eq!(view.allow_parallel_edges(), allow_parallel_edges);
        assert!((view.vertex_predicate())(&1));
        assert!((view.edge_predicate())(&Edge(1, 2)));
    }
}

#[test]
fn construction_fails_on_missing_arguments() {
    let graph = Graph::new();
    let vp: Option<fn(&i32) -> bool> = Some(|_| true);
    let ep: Option<fn(&Edge<i32>) -> bool> = Some(|_| true);

    let cases = [
        (Some(&graph), vp, None, "edge_predicate"),
        (Some(&graph), None, ep, "vertex_predicate"),
        (None, vp, ep, "base_graph"),
        (Some(&graph), None, None, "vertex_predicate"),
        (None, vp, None, "base_graph"),
        (None, None, ep, "base_graph"),
        (None, None, None, "base_graph"),
    ];

    for (base, vertex_predicate, edge_predicate, missing) in cases {
        let err = FilteredGraph::try_new(base, vertex_predicate, edge_predicate).unwrap_err();
        assert_eq!(err, ArgumentError::Missing(missing));
        assert_eq!(GraphError::from(err).kind(), ErrorKind::Argument);
    }
}

#[test]
fn contains_vertex() {
    let mut graph = Graph::new();

    let view = graph.vertex_filtered(|v: &i32| *v > 0 && *v < 4);
    assert!(!view.contains_vertex(&1));

    graph.add_vertex_range([0, 1, 2, 3, 4]);
    let view = graph.vertex_filtered(|v: &i32| *v > 0 && *v < 4);

    assert!(!view.contains_vertex(&0));
    assert!(view.contains_vertex(&1));
    assert!(view.contains_vertex(&3));
    assert!(!view.contains_vertex(&4));
    assert!(!view.contains_vertex(&10));
}

#[test]
fn contains_edge_between() {
    let mut graph = graph_with_vertices([1, 2, 3, 4]);
    graph
        .add_edge_range([(1, 2), (1, 3), (2, 2), (3, 4), (4, 1)])
        .unwrap();

    let view = graph.filtered(|v: &i32| *v <= 3, |e: &Edge<i32>| !e.is_self_loop());

    assert!(view.contains_edge_between(&1, &2));
    assert!(view.contains_edge_between(&1, &3));
    assert!(!view.contains_edge_between(&2, &1));
    assert!(!view.contains_edge_between(&2, &2));
    assert!(!view.contains_edge_between(&3, &4));
    assert!(!view.contains_edge_between(&4, &1));
    assert!(!view.contains_edge_between(&0, &1));
    assert!(!view.contains_edge_between(&1, &0));
}

#[test]
fn out_edge() {
    let mut graph = graph_with_vertices([1, 2, 3, 4]);
    graph
        .add_edge_range([(1, 1), (1, 2), (1, 3), (1, 4), (2, 3)])
        .unwrap();

    let view = graph.filtered(|v: &i32| *v < 4, |e: &Edge<i32>| e.1 != 2);

    assert_eq!(view.out_edge(&1, 0).unwrap(), &Edge(1, 1));
    assert_eq!(view.out_edge(&1, 1).unwrap(), &Edge(1, 3));
    assert_eq!(view.out_edge(&2, 0).unwrap(), &Edge(2, 3));

    let err = view.out_edge(&1, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(err.to_string().contains("out of range"));

    assert!(view.out_edge(&4, 0).unwrap_err().is_vertex_not_found());
    assert!(view.out_edge(&9, 0).unwrap_err().is_vertex_not_found());
}

#[test]
fn out_edges() {
    let mut graph = graph_with_vertices([1, 2, 3, 4, 5]);
    graph
        .add_edge_range([(1, 2), (1, 3), (1, 4), (2, 3), (3, 1), (4, 2), (5, 1)])
        .unwrap();

    let view = graph.filtered(|v: &i32| *v < 4, |e: &Edge<i32>| *e != Edge(1, 3));

    assert_eq!(view.out_edges(&1).unwrap().collect_vec(), [&Edge(1, 2)]);
    assert_eq!(view.out_edges(&2).unwrap().collect_vec(), [&Edge(2, 3)]);
    assert_eq!(view.out_edges(&3).unwrap().collect_vec(), [&Edge(3, 1)]);
    assert_eq!(view.out_degree(&1).unwrap(), 1);
    assert!(!view.is_out_edges_empty(&3).unwrap());

    assert_eq!(
        view.out_edges(&4).err(),
        Some(LookupError::vertex_not_found(&4))
    );
    assert_eq!(
        view.out_edges(&5).err(),
        Some(LookupError::vertex_not_found(&5))
    );
    assert_eq!(
        view.out_edges(&5).err().map(|e| e.to_string()),
        Some("Vertex 5 not found in graph".to_string())
    );
    assert!(view.out_degree(&6).is_err());
}

#[test]
fn try_get_edge_and_edges() {
    let mut graph = graph_with_vertices([1, 2, 3, 4]);
    graph
        .add_edge_range([(1, 2), (1, 2), (1, 3), (2, 4), (3, 3)])
        .unwrap();

    let view = graph.filtered(|v: &i32| *v != 4, |e: &Edge<i32>| !e.is_self_loop());

    assert_eq!(view.try_get_edge(&1, &2), Some(&Edge(1, 2)));
    assert_eq!(view.try_get_edges(&1, &2).unwrap().count(), 2);
    assert!(view.try_get_edge(&2, &1).is_none());
    assert!(view.try_get_edge(&3, &3).is_none());

    // visible source, hidden target
    assert!(view.try_get_edge(&2, &4).is_none());
    assert_eq!(view.try_get_edges(&2, &4).unwrap().count(), 0);

    // hidden or absent source
    assert!(view.try_get_edges(&4, &1).is_none());
    assert!(view.try_get_edges(&0, &1).is_none());
}

#[test]
fn try_get_out_edges() {
    let mut graph = graph_with_vertices([1, 2, 3, 4, 5]);
    graph
        .add_edge_range([(1, 2), (1, 2), (1, 3), (2, 2), (2, 4), (4, 1)])
        .unwrap();

    let view = graph.filtered(|v: &i32| *v < 4, |e: &Edge<i32>| !e.is_self_loop());

    assert_eq!(
        view.try_get_out_edges(&1).unwrap().cloned().collect_vec(),
        [Edge(1, 2), Edge(1, 2), Edge(1, 3)]
    );
    assert_eq!(view.try_get_out_edges(&2).unwrap().count(), 0);
    assert!(view.try_get_out_edges(&4).is_none());
    assert!(view.try_get_out_edges(&6).is_none());
}

#[test]
fn views_follow_base_mutations() {
    let mut graph = graph_with_vertices([1, 2, 3]);
    graph.add_edge_range([(1, 2), (2, 3)]).unwrap();

    let before = graph.vertex_filtered(|v: &i32| *v != 3).edges().count();
    assert_eq!(before, 1);

    graph.add_vertices_and_edge(Edge(1, 4));
    graph.remove_vertex(&2).unwrap();

    let view = graph.vertex_filtered(|v: &i32| *v != 3);
    assert_eq!(view.edges().cloned().collect_vec(), [Edge(1, 4)]);
    assert!(!view.contains_vertex(&2));
}

/// A vertex whose identity is only its `id`
#[derive(Clone, Debug)]
struct Labeled {
    id: u32,
    label: &'static str,
}

impl PartialEq for Labeled {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Labeled {}

impl Hash for Labeled {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[test]
fn caller_defined_vertex_equality() {
    let a = Labeled { id: 1, label: "a" };
    let b = Labeled { id: 2, label: "b" };
    let c = Labeled { id: 3, label: "c" };

    let graph: AdjacencyGraph<Labeled, Edge<Labeled>> =
        AdjacencyGraph::from_edges([(a.clone(), b.clone()), (b.clone(), c.clone())]);
    let view = graph.vertex_filtered(|v: &Labeled| v.label != "c");

    let other_b = Labeled { id: 2, label: "another b" };
    assert!(view.contains_vertex(&other_b));
    assert!(view.contains_edge_between(&a, &other_b));
    assert!(view.is_out_edges_empty(&other_b).unwrap());

    // the predicate sees the probe, not the stored vertex
    let hidden_a = Labeled { id: 1, label: "c" };
    assert!(!view.contains_vertex(&hidden_a));
    assert!(view.out_edges(&hidden_a).is_err());
}

#[test]
fn algorithms_on_views() {
    let graph: AdjacencyGraph<i32, TaggedEdge<i32, f64>> = AdjacencyGraph::from_edges([
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 0, -3.0),
        (2, 3, 1.0),
        (3, 0, 1.0),
    ]);
    let weight = |e: &TaggedEdge<i32, f64>| *e.tag();

    assert!(graph.bellman_ford(0, weight).unwrap_err().is_negative_cycle());
    assert!(graph.ensure_strongly_connected().is_ok());

    let view = graph.edge_filtered(|e: &TaggedEdge<i32, f64>| *e.tag() >= 0.0);
    let tree = view.bellman_ford(0, weight).unwrap();
    assert_eq!(tree.distance_to(&3), Some(3.0));
    assert_eq!(tree.path_to(&3).unwrap().len(), 3);

    assert!(view.ensure_strongly_connected().is_ok());

    let err = view
        .vertex_filtered(|v: &i32| *v != 3)
        .ensure_strongly_connected()
        .unwrap_err();
    assert!(err.is_not_strongly_connected());
    assert!(!err.is_negative_cycle());

    assert_eq!(view.bfs(&0).unwrap().collect_vec(), [0, 1, 2, 3]);
    assert!(view.bfs(&7).is_err());
}
