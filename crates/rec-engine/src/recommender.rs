//! Recommender: candidate enumeration, scoring, ranking, and per-node top-K tables.

use crate::scorer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rec_types::{
    CandidateScope, EngineConfig, NodeId, RankedCandidate, RecommendError, RecommendationTable,
    ScorerKind, SocialGraph,
};
use std::collections::BTreeMap;

/// Ranks non-adjacent nodes for a source node under a chosen scorer.
///
/// The recommender owns its graph. Mutation is only available through [`Recommender::with_hidden_edge`],
/// which restores the edge before returning.
pub struct Recommender<G> {
    graph: G,
    config: EngineConfig,
    /// Random source for the baseline scorer.
    rng: StdRng,
}

impl<G: SocialGraph> Recommender<G> {
    pub fn new(graph: G, config: EngineConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { graph, config, rng }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_graph(self) -> G {
        self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a single pair.
    pub fn score(&mut self, kind: ScorerKind, u: &NodeId, v: &NodeId) -> f64 {
        scorer::score_pair(kind, &self.graph, u, v, &mut self.rng)
    }

    /// Full ranked list for `node` using the configured candidate scope.
    pub fn rank(
        &mut self,
        node: &NodeId,
        kind: ScorerKind,
    ) -> Result<Vec<RankedCandidate>, RecommendError> {
        self.rank_in_scope(node, kind, self.config.scope)
    }

    /// Full ranked list for `node`: eligible candidates (not `node`, not already a friend) with a
    /// non-zero score, by descending score, ties broken by ascending node id.
    pub fn rank_in_scope(
        &mut self,
        node: &NodeId,
        kind: ScorerKind,
        scope: CandidateScope,
    ) -> Result<Vec<RankedCandidate>, RecommendError> {
        let friends = self
            .graph
            .neighbors(node)
            .ok_or_else(|| RecommendError::NodeNotFound(node.clone()))?;

        let candidates: Vec<NodeId> = match scope {
            CandidateScope::AllNodes => self
                .graph
                .nodes()
                .filter(|c| *c != node && !friends.contains(*c))
                .cloned()
                .collect(),
            CandidateScope::TwoHop => self.graph.two_hop(node).into_iter().collect(),
        };

        let mut ranked: Vec<RankedCandidate> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let score = scorer::score_pair(kind, &self.graph, node, &candidate, &mut self.rng);
            // Zero means no signal; such candidates are never recommended.
            if score != 0.0 {
                ranked.push(RankedCandidate {
                    node: candidate,
                    score,
                });
            }
        }
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.node.cmp(&b.node))
        });
        Ok(ranked)
    }

    /// Top-K recommendations for one node.
    pub fn recommend(
        &mut self,
        node: &NodeId,
        kind: ScorerKind,
    ) -> Result<Vec<RankedCandidate>, RecommendError> {
        let mut ranked = self.rank(node, kind)?;
        ranked.truncate(self.config.top_k);
        Ok(ranked)
    }

    /// Top-K recommendations for every node in the graph. Recomputed from scratch on each call.
    pub fn find_all_recommendations(
        &mut self,
        kind: ScorerKind,
    ) -> Result<RecommendationTable, RecommendError> {
        let nodes: Vec<NodeId> = self.graph.nodes().cloned().collect();
        let mut entries = BTreeMap::new();
        for node in nodes {
            let top = self.recommend(&node, kind)?;
            entries.insert(node, top);
        }
        tracing::info!(
            scorer = %kind,
            nodes = entries.len(),
            top_k = self.config.top_k,
            "recommendation table built"
        );
        Ok(RecommendationTable {
            scorer: kind,
            top_k: self.config.top_k,
            entries,
        })
    }

    /// Like [`Recommender::find_all_recommendations`], selecting the scorer by name.
    /// Unknown names fail before any scoring happens.
    pub fn find_all_recommendations_by_name(
        &mut self,
        name: &str,
    ) -> Result<RecommendationTable, RecommendError> {
        let kind: ScorerKind = name.parse()?;
        self.find_all_recommendations(kind)
    }

    /// Removes `u - v`, runs `f`, then restores the edge if it had existed.
    /// Returns whether the edge was removed together with `f`'s result.
    pub fn with_hidden_edge<T>(
        &mut self,
        u: &NodeId,
        v: &NodeId,
        f: impl FnOnce(&mut Self) -> T,
    ) -> (bool, T) {
        let removed = self.graph.remove_edge(u, v);
        let out = f(self);
        if removed {
            self.graph.add_edge(u, v);
        }
        (removed, out)
    }
}
