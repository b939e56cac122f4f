//! Cross-scorer agreement: how much two heuristics' top-K sets overlap on a fixed probe set.

use crate::Evaluator;
use rec_engine::scorer::round_to;
use rec_engine::Recommender;
use rec_types::{AgreementEntry, EvalError, NodeId, ScorerKind, SocialGraph};
use std::collections::BTreeSet;

type TopSets = Vec<BTreeSet<NodeId>>;

impl Evaluator {
    /// Nodes whose numeric id is a multiple of `probe_stride`, ascending, at most `probe_limit`.
    /// A stride of 0 admits every numeric id.
    pub fn probe_nodes<G: SocialGraph>(&self, graph: &G) -> Vec<NodeId> {
        let stride = self.config.probe_stride;
        graph
            .nodes()
            .filter(|n| {
                n.as_number()
                    .is_some_and(|x| stride == 0 || x % stride == 0)
            })
            .take(self.config.probe_limit)
            .cloned()
            .collect()
    }

    /// Overlap percentage between scorers `a` and `b`:
    /// `100 · Σ|A ∩ B| / Σ max(|A|, |B|)` over the probe nodes, rounded to 2 decimals.
    pub fn agreement<G: SocialGraph>(
        &self,
        engine: &mut Recommender<G>,
        a: ScorerKind,
        b: ScorerKind,
    ) -> Result<f64, EvalError> {
        let probes = self.probe_nodes(engine.graph());
        let sets_a = self.top_sets(engine, a, &probes)?;
        let sets_b = self.top_sets(engine, b, &probes)?;
        Ok(overlap_percent(&sets_a, &sets_b))
    }

    /// Agreement for every unordered pair of configured scorers, in configuration order.
    pub fn agreement_matrix<G: SocialGraph>(
        &self,
        engine: &mut Recommender<G>,
    ) -> Result<Vec<AgreementEntry>, EvalError> {
        let probes = self.probe_nodes(engine.graph());
        tracing::info!(probes = probes.len(), "computing scorer agreement");
        let mut per_scorer: Vec<(ScorerKind, TopSets)> = Vec::new();
        for &kind in &self.config.scorers {
            per_scorer.push((kind, self.top_sets(engine, kind, &probes)?));
        }

        let mut out = Vec::new();
        for (i, (first, sets_a)) in per_scorer.iter().enumerate() {
            for (second, sets_b) in per_scorer.iter().skip(i + 1) {
                out.push(AgreementEntry {
                    first: *first,
                    second: *second,
                    percent: overlap_percent(sets_a, sets_b),
                });
            }
        }
        Ok(out)
    }

    fn top_sets<G: SocialGraph>(
        &self,
        engine: &mut Recommender<G>,
        kind: ScorerKind,
        probes: &[NodeId],
    ) -> Result<TopSets, EvalError> {
        let mut sets = Vec::with_capacity(probes.len());
        for node in probes {
            let ranked = engine.rank(node, kind)?;
            sets.push(
                ranked
                    .into_iter()
                    .take(self.config.depth)
                    .map(|c| c.node)
                    .collect(),
            );
        }
        Ok(sets)
    }
}

fn overlap_percent(a: &[BTreeSet<NodeId>], b: &[BTreeSet<NodeId>]) -> f64 {
    let mut shared = 0usize;
    let mut possible = 0usize;
    for (sa, sb) in a.iter().zip(b) {
        shared += sa.intersection(sb).count();
        possible += sa.len().max(sb.len());
    }
    if possible == 0 {
        return 0.0;
    }
    round_to(100.0 * shared as f64 / possible as f64, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rec_graph::fixtures::toy_graph;
    use rec_graph::InMemorySocialGraph;
    use rec_types::{EngineConfig, EvalConfig};

    fn set(raw: &[&str]) -> BTreeSet<NodeId> {
        raw.iter().map(|r| NodeId::from(*r)).collect()
    }

    fn every_node() -> EvalConfig {
        EvalConfig {
            probe_stride: 1,
            ..EvalConfig::default()
        }
    }

    #[test]
    fn overlap_sums_before_dividing() {
        let a = vec![set(&["1", "2"]), set(&["5"])];
        let b = vec![set(&["2", "3", "4"]), set(&["5"])];
        // (1 + 1) / (3 + 1)
        assert_eq!(overlap_percent(&a, &b), 50.0);
        assert_eq!(overlap_percent(&[set(&[])], &[set(&[])]), 0.0);
        assert_eq!(overlap_percent(&[set(&["1", "2", "3"])], &[set(&["1"])]), 33.33);
    }

    #[test]
    fn probe_nodes_follow_stride_and_limit() {
        let mut graph = InMemorySocialGraph::new();
        for i in 0..=1000u64 {
            graph.add_node(NodeId::from(i));
        }
        graph.add_node(NodeId::from("x100"));
        let evaluator = Evaluator::new(EvalConfig {
            probe_limit: 5,
            ..EvalConfig::default()
        });
        let probes: Vec<String> = evaluator
            .probe_nodes(&graph)
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(probes, vec!["0", "100", "200", "300", "400"]);

        let all = Evaluator::new(EvalConfig {
            probe_stride: 100,
            ..EvalConfig::default()
        });
        assert_eq!(all.probe_nodes(&graph).len(), 11);
    }

    #[test]
    fn identical_heuristics_agree_fully_on_toy_graph() {
        let mut engine = Recommender::new(toy_graph(), EngineConfig::default());
        let evaluator = Evaluator::new(every_node());
        let pct = evaluator
            .agreement(&mut engine, ScorerKind::CommonNeighbors, ScorerKind::AdamicAdar)
            .unwrap();
        assert_eq!(pct, 100.0);
        let pct = evaluator
            .agreement(&mut engine, ScorerKind::CommonNeighbors, ScorerKind::Jaccard)
            .unwrap();
        assert_eq!(pct, 100.0);
    }

    #[test]
    fn matrix_covers_each_pair_once() {
        let mut engine = Recommender::new(toy_graph(), EngineConfig::default());
        let evaluator = Evaluator::new(every_node());
        let matrix = evaluator.agreement_matrix(&mut engine).unwrap();
        assert_eq!(matrix.len(), 10);
        assert!(matrix.iter().all(|e| e.first != e.second));
        assert!(matrix.iter().all(|e| (0.0..=100.0).contains(&e.percent)));
    }

    #[test]
    fn no_probes_means_zero_agreement() {
        let graph = InMemorySocialGraph::from_edges([
            (NodeId::from("a"), NodeId::from("b")),
            (NodeId::from("b"), NodeId::from("c")),
        ]);
        let mut engine = Recommender::new(graph, EngineConfig::default());
        let evaluator = Evaluator::new(EvalConfig::default());
        let pct = evaluator
            .agreement(&mut engine, ScorerKind::Jaccard, ScorerKind::Cosine)
            .unwrap();
        assert_eq!(pct, 0.0);
    }
}
