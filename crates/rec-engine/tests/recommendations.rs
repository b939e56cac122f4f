//! Integration tests: recommendation tables over the toy network for every heuristic.

use rec_engine::{CandidateScope, EngineConfig, NodeId, Recommender, ScorerKind};
use rec_graph::fixtures::toy_graph;

fn table(kind: ScorerKind) -> Vec<(String, Vec<String>)> {
    let mut engine = Recommender::new(toy_graph(), EngineConfig::default());
    let t = engine.find_all_recommendations(kind).unwrap();
    t.entries
        .iter()
        .map(|(node, list)| {
            (
                node.to_string(),
                list.iter().map(|c| c.node.to_string()).collect(),
            )
        })
        .collect()
}

fn expected(rows: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    rows.iter()
        .map(|(n, l)| (n.to_string(), l.iter().map(|s| s.to_string()).collect()))
        .collect()
}

#[test]
fn common_neighbors_and_adamic_adar_tables() {
    let want = expected(&[
        ("0", &["2", "4"]),
        ("1", &["4"]),
        ("2", &["0", "4"]),
        ("3", &["5", "6"]),
        ("4", &["0", "1", "2"]),
        ("5", &["3"]),
        ("6", &["3"]),
    ]);
    assert_eq!(table(ScorerKind::CommonNeighbors), want);
    assert_eq!(table(ScorerKind::AdamicAdar), want);
}

#[test]
fn jaccard_and_cosine_tables() {
    let want = expected(&[
        ("0", &["2", "4"]),
        ("1", &["4"]),
        ("2", &["0", "4"]),
        ("3", &["5", "6"]),
        ("4", &["0", "2", "1"]),
        ("5", &["3"]),
        ("6", &["3"]),
    ]);
    assert_eq!(table(ScorerKind::Jaccard), want);
    // cosine(4, 0) = 1/sqrt(6) > cosine(4, 1) = 1/3
    assert_eq!(table(ScorerKind::Cosine), want);
}

#[test]
fn baseline_in_all_node_scope_can_reach_strangers() {
    let mut engine = Recommender::new(
        toy_graph(),
        EngineConfig {
            scope: CandidateScope::AllNodes,
            top_k: 10,
            seed: 5,
        },
    );
    let mut seen_far = false;
    for _ in 0..20 {
        let ranked = engine.rank(&NodeId::from("0"), ScorerKind::Baseline).unwrap();
        seen_far |= ranked.iter().any(|c| c.node.as_str() == "6");
    }
    assert!(seen_far);
}
