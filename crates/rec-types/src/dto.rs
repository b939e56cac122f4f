//! Scorer selection, ranked results, and evaluation reports.

use crate::{NodeId, RecommendError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Link-prediction heuristic used to score a (node, candidate) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    CommonNeighbors,
    Jaccard,
    AdamicAdar,
    Cosine,
    /// Uniform random control; not a similarity measure.
    Baseline,
}

impl ScorerKind {
    pub const ALL: [ScorerKind; 5] = [
        ScorerKind::CommonNeighbors,
        ScorerKind::Jaccard,
        ScorerKind::AdamicAdar,
        ScorerKind::Cosine,
        ScorerKind::Baseline,
    ];

    /// Real similarity measures (everything except the random baseline).
    pub const HEURISTICS: [ScorerKind; 4] = [
        ScorerKind::CommonNeighbors,
        ScorerKind::Jaccard,
        ScorerKind::AdamicAdar,
        ScorerKind::Cosine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerKind::CommonNeighbors => "common_neighbors",
            ScorerKind::Jaccard => "jaccard",
            ScorerKind::AdamicAdar => "adamic_adar",
            ScorerKind::Cosine => "cosine",
            ScorerKind::Baseline => "baseline",
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScorerKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| RecommendError::InvalidScorer(s.to_string()))
    }
}

/// Which nodes are enumerated as candidates for a source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateScope {
    /// Every node in the graph.
    AllNodes,
    /// Friends of friends only.
    #[default]
    TwoHop,
}

impl FromStr for CandidateScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all" | "all_nodes" => Ok(CandidateScope::AllNodes),
            "two_hop" | "twohop" | "fof" => Ok(CandidateScope::TwoHop),
            other => Err(format!("invalid candidate scope: {}", other)),
        }
    }
}

/// Similarity score. Common-neighbor counts and baseline draws are whole numbers.
pub type Score = f64;

/// One scored candidate in a ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub node: NodeId,
    pub score: Score,
}

/// Top-K recommendations for every node under one scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTable {
    pub scorer: ScorerKind,
    pub top_k: usize,
    pub entries: BTreeMap<NodeId, Vec<RankedCandidate>>,
}

impl RecommendationTable {
    /// Ordered candidate ids for `node` (empty when the node is unknown or has no candidates).
    pub fn candidates(&self, node: &NodeId) -> Vec<&NodeId> {
        self.entries
            .get(node)
            .map(|list| list.iter().map(|c| &c.node).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether validation collected every requested trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Complete,
    /// The attempt budget ran out before enough valid trials were found.
    InsufficientData,
}

/// Mean recovery rank for one scorer. `mean_rank` is `None` when no trial recorded a rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerRankSummary {
    pub scorer: ScorerKind,
    pub samples: usize,
    pub mean_rank: Option<f64>,
}

/// Result of leave-one-edge-out validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub outcome: ValidationOutcome,
    pub trials: usize,
    pub attempts: usize,
    pub per_scorer: Vec<ScorerRankSummary>,
}

impl ValidationReport {
    pub fn summary(&self, scorer: ScorerKind) -> Option<&ScorerRankSummary> {
        self.per_scorer.iter().find(|s| s.scorer == scorer)
    }
}

/// Overlap percentage between two scorers' top-K sets over the probe nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementEntry {
    pub first: ScorerKind,
    pub second: ScorerKind,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scorer_names_round_trip() {
        for kind in ScorerKind::ALL {
            assert_eq!(kind.as_str().parse::<ScorerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_scorer_is_rejected() {
        let err = "pagerank".parse::<ScorerKind>().unwrap_err();
        assert!(matches!(err, RecommendError::InvalidScorer(ref name) if name == "pagerank"));
        assert!("".parse::<ScorerKind>().is_err());
    }

    #[test]
    fn scorer_serializes_as_snake_case() {
        let json = serde_json::to_string(&ScorerKind::AdamicAdar).unwrap();
        assert_eq!(json, "\"adamic_adar\"");
    }

    #[test]
    fn scope_parses_aliases() {
        assert_eq!("all".parse::<CandidateScope>().unwrap(), CandidateScope::AllNodes);
        assert_eq!("two-hop".parse::<CandidateScope>().unwrap(), CandidateScope::TwoHop);
        assert!("three_hop".parse::<CandidateScope>().is_err());
    }
}
