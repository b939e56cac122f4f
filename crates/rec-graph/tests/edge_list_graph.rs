//! Integration tests: raw edge list text -> graph store invariants.

use rec_graph::{parse_edge_list, InMemorySocialGraph, NodeId, SocialGraph};

const RAW: &str = "\
0 1
0 2
1 2
2 0
2 3
3
4 5 6
3 4
";

fn build() -> (InMemorySocialGraph, usize) {
    let parsed = parse_edge_list(RAW);
    (InMemorySocialGraph::from_edges(parsed.edges), parsed.skipped_lines)
}

#[test]
fn malformed_lines_skipped_and_duplicates_folded() {
    let (graph, skipped) = build();
    assert_eq!(skipped, 2);
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.degree(&NodeId::from("2")), 3);
}

#[test]
fn adjacency_is_symmetric() {
    let (graph, _) = build();
    let nodes: Vec<NodeId> = graph.nodes().cloned().collect();
    for u in &nodes {
        for v in &nodes {
            assert_eq!(graph.contains_edge(u, v), graph.contains_edge(v, u));
        }
    }
}

#[test]
fn hide_and_restore_every_edge() {
    let (mut graph, _) = build();
    let original = graph.clone();
    let edges: Vec<(NodeId, NodeId)> = graph
        .edges()
        .map(|(u, v)| (u.clone(), v.clone()))
        .collect();
    for (u, v) in edges {
        assert!(graph.remove_edge(&u, &v));
        assert!(!graph.contains_edge(&v, &u));
        assert!(graph.add_edge(&u, &v));
        assert_eq!(graph, original);
    }
}
