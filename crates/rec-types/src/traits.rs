//! Graph store trait and error types shared across the workspace.

use crate::NodeId;
use std::collections::BTreeSet;

/// Undirected social graph: node -> ordered set of neighbor nodes.
///
/// Implementations keep adjacency symmetric. `add_edge` and `remove_edge` are total: they
/// report whether the graph changed instead of failing on missing nodes or edges.
pub trait SocialGraph {
    /// Neighbor set of `node`, or `None` when the node is unknown.
    fn neighbors(&self, node: &NodeId) -> Option<&BTreeSet<NodeId>>;

    /// All nodes in ascending `NodeId` order.
    fn nodes(&self) -> impl Iterator<Item = &NodeId>;

    fn node_count(&self) -> usize;

    /// Add the undirected edge `u - v`. Returns true when the edge was not present before.
    fn add_edge(&mut self, u: &NodeId, v: &NodeId) -> bool;

    /// Remove the undirected edge `u - v`. Returns true when the edge existed.
    fn remove_edge(&mut self, u: &NodeId, v: &NodeId) -> bool;

    fn contains_node(&self, node: &NodeId) -> bool {
        self.neighbors(node).is_some()
    }

    fn degree(&self, node: &NodeId) -> usize {
        self.neighbors(node).map_or(0, BTreeSet::len)
    }

    fn contains_edge(&self, u: &NodeId, v: &NodeId) -> bool {
        self.neighbors(u).is_some_and(|n| n.contains(v))
    }

    /// Nodes at distance exactly two from `node`: friends of friends that are neither `node`
    /// nor already its friends.
    fn two_hop(&self, node: &NodeId) -> BTreeSet<NodeId> {
        let Some(direct) = self.neighbors(node) else {
            return BTreeSet::new();
        };
        let mut out = BTreeSet::new();
        for friend in direct {
            let Some(fof) = self.neighbors(friend) else {
                continue;
            };
            for candidate in fof {
                if candidate != node && !direct.contains(candidate) {
                    out.insert(candidate.clone());
                }
            }
        }
        out
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GraphStoreError {
    #[error("graph store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid graph snapshot: {0}")]
    Snapshot(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("invalid scorer name: {0} (expected one of common_neighbors, jaccard, adamic_adar, cosine, baseline)")]
    InvalidScorer(String),
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("graph has no edges to hide")]
    EmptyGraph,
    #[error("recommend: {0}")]
    Recommend(#[from] RecommendError),
}
