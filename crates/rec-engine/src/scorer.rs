//! Pairwise link-prediction scores computed from two nodes' neighbor sets.
//!
//! Every scorer reads only `N(u)` and `N(v)` (Adamic-Adar also reads the degree of each shared
//! neighbor) from the current graph state; nothing is cached between calls.

use rand::Rng;
use rec_types::{NodeId, Score, ScorerKind, SocialGraph};
use std::collections::BTreeSet;

static EMPTY: BTreeSet<NodeId> = BTreeSet::new();

/// Decimal digits kept for fractional scores.
pub const SCORE_DIGITS: i32 = 4;

pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

fn neighbor_set<'a, G: SocialGraph + ?Sized>(graph: &'a G, node: &NodeId) -> &'a BTreeSet<NodeId> {
    graph.neighbors(node).unwrap_or(&EMPTY)
}

/// |N(u) ∩ N(v)|
pub fn common_neighbors<G: SocialGraph + ?Sized>(graph: &G, u: &NodeId, v: &NodeId) -> usize {
    neighbor_set(graph, u)
        .intersection(neighbor_set(graph, v))
        .count()
}

/// |N(u) ∩ N(v)| / |N(u) ∪ N(v)|, 0 when both sets are empty.
pub fn jaccard<G: SocialGraph + ?Sized>(graph: &G, u: &NodeId, v: &NodeId) -> f64 {
    let a = neighbor_set(graph, u);
    let b = neighbor_set(graph, v);
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    round_to(intersection as f64 / union as f64, SCORE_DIGITS)
}

/// Σ 1 / ln(|N(w)|) over shared neighbors w. Shared neighbors with degree <= 1 add nothing.
pub fn adamic_adar<G: SocialGraph + ?Sized>(graph: &G, u: &NodeId, v: &NodeId) -> f64 {
    let mut score = 0.0;
    for w in neighbor_set(graph, u).intersection(neighbor_set(graph, v)) {
        let Some(friends_of_w) = graph.neighbors(w) else {
            tracing::warn!(node = %w, "neighbor missing from graph, ignoring in adamic_adar");
            continue;
        };
        let degree = friends_of_w.len();
        if degree > 1 {
            score += 1.0 / (degree as f64).ln();
        }
    }
    round_to(score, SCORE_DIGITS)
}

/// |N(u) ∩ N(v)| / sqrt(|N(u)| · |N(v)|), 0 when either set is empty.
pub fn cosine<G: SocialGraph + ?Sized>(graph: &G, u: &NodeId, v: &NodeId) -> f64 {
    let a = neighbor_set(graph, u);
    let b = neighbor_set(graph, v);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    round_to(
        intersection / ((a.len() as f64) * (b.len() as f64)).sqrt(),
        SCORE_DIGITS,
    )
}

/// Uniform random integer in `[0, node_count]`. A control, not a similarity.
pub fn baseline<G: SocialGraph + ?Sized, R: Rng>(graph: &G, rng: &mut R) -> f64 {
    rng.random_range(0..=graph.node_count()) as f64
}

/// Score `(u, v)` with the scorer selected by `kind`.
pub fn score_pair<G, R>(kind: ScorerKind, graph: &G, u: &NodeId, v: &NodeId, rng: &mut R) -> Score
where
    G: SocialGraph + ?Sized,
    R: Rng,
{
    match kind {
        ScorerKind::CommonNeighbors => common_neighbors(graph, u, v) as f64,
        ScorerKind::Jaccard => jaccard(graph, u, v),
        ScorerKind::AdamicAdar => adamic_adar(graph, u, v),
        ScorerKind::Cosine => cosine(graph, u, v),
        ScorerKind::Baseline => baseline(graph, rng),
    }
}
