//! Leave-one-edge-out validation: hide a real edge, re-rank both endpoints, record where the
//! hidden partner reappears, restore the edge.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rec_engine::scorer::round_to;
use rec_engine::Recommender;
use rec_types::{
    CandidateScope, EvalConfig, EvalError, NodeId, RankedCandidate, RecommendError, ScorerKind,
    ScorerRankSummary, SocialGraph, ValidationOutcome, ValidationReport,
};

/// Runs validation and agreement studies against a [`Recommender`].
pub struct Evaluator {
    pub(crate) config: EvalConfig,
    /// Edge sampling source; seeded so runs are reproducible.
    rng: StdRng,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Collects `config.trials` valid trials (bounded by `config.max_attempts` sampled edges) and
    /// reports the mean recovery rank per scorer. Lower is better.
    ///
    /// A trial samples a node with at least one friend and one of its friends, hides that edge,
    /// and ranks both endpoints over their two-hop neighborhoods. A scorer records the rounded
    /// average of both 1-based positions only when each endpoint finds the other within
    /// `config.depth`; the trial counts once at least one scorer recorded a rank.
    pub fn validate<G: SocialGraph>(
        &mut self,
        engine: &mut Recommender<G>,
    ) -> Result<ValidationReport, EvalError> {
        let sources: Vec<NodeId> = engine
            .graph()
            .nodes()
            .filter(|n| engine.graph().degree(n) > 0)
            .cloned()
            .collect();
        if sources.is_empty() {
            return Err(EvalError::EmptyGraph);
        }

        let scorers = self.config.scorers.clone();
        let depth = self.config.depth;
        let mut ranks: Vec<(ScorerKind, Vec<f64>)> =
            scorers.iter().map(|k| (*k, Vec::new())).collect();
        let mut trials = 0usize;
        let mut attempts = 0usize;

        while trials < self.config.trials && attempts < self.config.max_attempts {
            attempts += 1;
            let f1 = sources[self.rng.random_range(0..sources.len())].clone();
            let friends: Vec<NodeId> = engine
                .graph()
                .neighbors(&f1)
                .map(|n| n.iter().cloned().collect())
                .unwrap_or_default();
            if friends.is_empty() {
                continue;
            }
            let f2 = friends[self.rng.random_range(0..friends.len())].clone();

            let (removed, recorded) = engine.with_hidden_edge(&f1, &f2, |e| {
                recovery_ranks(e, &f1, &f2, &scorers, depth)
            });
            let recorded = recorded?;
            if !removed {
                tracing::warn!(u = %f1, v = %f2, "sampled edge was not present, skipping");
                continue;
            }
            if recorded.is_empty() {
                tracing::debug!(u = %f1, v = %f2, attempts, "no scorer recovered hidden edge, retrying");
                continue;
            }

            trials += 1;
            for (kind, rank) in recorded {
                if let Some((_, list)) = ranks.iter_mut().find(|(k, _)| *k == kind) {
                    list.push(rank);
                }
            }
        }

        let outcome = if trials >= self.config.trials {
            ValidationOutcome::Complete
        } else {
            tracing::warn!(
                trials,
                wanted = self.config.trials,
                attempts,
                "attempt budget exhausted before collecting enough trials"
            );
            ValidationOutcome::InsufficientData
        };

        let per_scorer = ranks
            .into_iter()
            .map(|(scorer, list)| ScorerRankSummary {
                scorer,
                samples: list.len(),
                mean_rank: mean(&list).map(|m| round_to(m, 2)),
            })
            .collect();

        tracing::info!(trials, attempts, ?outcome, "validation finished");
        Ok(ValidationReport {
            outcome,
            trials,
            attempts,
            per_scorer,
        })
    }
}

/// Per-scorer rounded average position of the hidden partner, for scorers that found it from
/// both endpoints.
fn recovery_ranks<G: SocialGraph>(
    engine: &mut Recommender<G>,
    f1: &NodeId,
    f2: &NodeId,
    scorers: &[ScorerKind],
    depth: usize,
) -> Result<Vec<(ScorerKind, f64)>, RecommendError> {
    let mut out = Vec::new();
    for &kind in scorers {
        let from_f1 = engine.rank_in_scope(f1, kind, CandidateScope::TwoHop)?;
        let from_f2 = engine.rank_in_scope(f2, kind, CandidateScope::TwoHop)?;
        if let (Some(a), Some(b)) = (
            position_within(&from_f1, f2, depth),
            position_within(&from_f2, f1, depth),
        ) {
            out.push((kind, round_to((a + b) as f64 / 2.0, 2)));
        }
    }
    Ok(out)
}

/// 1-based position of `target` among the first `depth` entries.
fn position_within(list: &[RankedCandidate], target: &NodeId, depth: usize) -> Option<usize> {
    list.iter()
        .take(depth)
        .position(|c| &c.node == target)
        .map(|i| i + 1)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rec_graph::fixtures::two_communities;
    use rec_graph::InMemorySocialGraph;
    use rec_types::EngineConfig;

    fn id(raw: &str) -> NodeId {
        NodeId::from(raw)
    }

    fn candidate(raw: &str) -> RankedCandidate {
        RankedCandidate {
            node: id(raw),
            score: 1.0,
        }
    }

    #[test]
    fn position_is_one_based_and_depth_limited() {
        let list: Vec<RankedCandidate> = ["a", "b", "c"].into_iter().map(candidate).collect();
        assert_eq!(position_within(&list, &id("a"), 10), Some(1));
        assert_eq!(position_within(&list, &id("c"), 10), Some(3));
        assert_eq!(position_within(&list, &id("c"), 2), None);
        assert_eq!(position_within(&list, &id("z"), 10), None);
    }

    #[test]
    fn triangle_recovers_at_rank_one() {
        let graph = InMemorySocialGraph::from_edges([
            (id("1"), id("2")),
            (id("2"), id("3")),
            (id("3"), id("1")),
        ]);
        let mut engine = Recommender::new(graph, EngineConfig::default());
        let mut evaluator = Evaluator::new(EvalConfig {
            trials: 10,
            ..EvalConfig::default()
        });
        let report = evaluator.validate(&mut engine).unwrap();
        assert_eq!(report.outcome, ValidationOutcome::Complete);
        assert_eq!(report.trials, 10);
        for kind in ScorerKind::HEURISTICS {
            let s = report.summary(kind).unwrap();
            assert_eq!(s.samples, 10);
            assert_eq!(s.mean_rank, Some(1.0));
        }
    }

    #[test]
    fn single_edge_exhausts_attempt_budget() {
        let graph = InMemorySocialGraph::from_edges([(id("a"), id("b"))]);
        let mut engine = Recommender::new(graph, EngineConfig::default());
        let mut evaluator = Evaluator::new(EvalConfig {
            max_attempts: 25,
            ..EvalConfig::default()
        });
        let report = evaluator.validate(&mut engine).unwrap();
        assert_eq!(report.outcome, ValidationOutcome::InsufficientData);
        assert_eq!(report.trials, 0);
        assert_eq!(report.attempts, 25);
        assert!(report.per_scorer.iter().all(|s| s.mean_rank.is_none() && s.samples == 0));
        assert_eq!(engine.graph().edge_count(), 1);
    }

    #[test]
    fn edgeless_graph_is_rejected() {
        let mut graph = InMemorySocialGraph::new();
        graph.add_node(id("lonely"));
        let mut engine = Recommender::new(graph, EngineConfig::default());
        let err = Evaluator::new(EvalConfig::default())
            .validate(&mut engine)
            .unwrap_err();
        assert!(matches!(err, EvalError::EmptyGraph));
    }

    #[test]
    fn graph_is_unchanged_after_validation() {
        let graph = two_communities(10);
        let before = graph.clone();
        let mut engine = Recommender::new(graph, EngineConfig::default());
        let mut evaluator = Evaluator::new(EvalConfig {
            trials: 30,
            ..EvalConfig::default()
        });
        evaluator.validate(&mut engine).unwrap();
        assert_eq!(engine.graph(), &before);
    }
}
