//! Run configuration for the recommender and the evaluator, with environment overrides.

use crate::{CandidateScope, ScorerKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_SEED: u64 = 42;

/// Recommender settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of recommendations kept per node.
    pub top_k: usize,
    /// Candidate enumeration used by `rank` and `find_all_recommendations`.
    pub scope: CandidateScope,
    /// Seed for the baseline scorer's random source.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            scope: CandidateScope::TwoHop,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    /// Reads `FRIEND_REC_TOP_K`, `FRIEND_REC_SCOPE`, `FRIEND_REC_SEED`.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            top_k: env_or("FRIEND_REC_TOP_K", d.top_k),
            scope: env_or("FRIEND_REC_SCOPE", d.scope),
            seed: env_or("FRIEND_REC_SEED", d.seed),
        }
    }
}

/// Evaluator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Valid trials to collect.
    pub trials: usize,
    /// Upper bound on sampled edges, valid or not.
    pub max_attempts: usize,
    /// Ranked list depth searched for the hidden partner.
    pub depth: usize,
    /// Probe nodes are those whose numeric id is a multiple of this stride.
    pub probe_stride: u64,
    pub probe_limit: usize,
    /// Seed for edge sampling.
    pub seed: u64,
    pub scorers: Vec<ScorerKind>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            max_attempts: 10_000,
            depth: DEFAULT_TOP_K,
            probe_stride: 100,
            probe_limit: 40,
            seed: DEFAULT_SEED,
            scorers: ScorerKind::ALL.to_vec(),
        }
    }
}

impl EvalConfig {
    /// Reads `FRIEND_REC_TRIALS`, `FRIEND_REC_MAX_ATTEMPTS`, `FRIEND_REC_TOP_K` (depth),
    /// `FRIEND_REC_PROBE_STRIDE`, `FRIEND_REC_PROBE_LIMIT`, `FRIEND_REC_SEED`, `FRIEND_REC_SCORERS`.
    pub fn from_env() -> Self {
        let d = Self::default();
        let scorers = match std::env::var("FRIEND_REC_SCORERS") {
            Ok(raw) => parse_scorer_list(&raw).unwrap_or_else(|bad| {
                tracing::warn!(value = %bad, "invalid FRIEND_REC_SCORERS entry, using all scorers");
                d.scorers.clone()
            }),
            Err(_) => d.scorers.clone(),
        };
        Self {
            trials: env_or("FRIEND_REC_TRIALS", d.trials),
            max_attempts: env_or("FRIEND_REC_MAX_ATTEMPTS", d.max_attempts),
            depth: env_or("FRIEND_REC_TOP_K", d.depth),
            probe_stride: env_or("FRIEND_REC_PROBE_STRIDE", d.probe_stride),
            probe_limit: env_or("FRIEND_REC_PROBE_LIMIT", d.probe_limit),
            seed: env_or("FRIEND_REC_SEED", d.seed),
            scorers,
        }
    }
}

/// Parses a comma-separated scorer list. Returns the first bad entry on failure.
pub fn parse_scorer_list(raw: &str) -> Result<Vec<ScorerKind>, String> {
    let mut out = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let kind = part.parse::<ScorerKind>().map_err(|_| part.to_string())?;
        if !out.contains(&kind) {
            out.push(kind);
        }
    }
    if out.is_empty() {
        return Err(raw.to_string());
    }
    Ok(out)
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %v, "invalid config value, using default");
            default
        }),
    }
}
