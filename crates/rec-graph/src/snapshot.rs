//! Serializable snapshot of the adjacency structure.

use crate::InMemorySocialGraph;
use rec_types::{GraphStoreError, NodeId, SocialGraph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a social graph for export. Each undirected edge appears once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
    pub timestamp: String,
}

impl GraphSnapshot {
    pub fn to_json(&self) -> Result<String, GraphStoreError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphStoreError::Snapshot(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, GraphStoreError> {
        serde_json::from_str(raw).map_err(|e| GraphStoreError::Snapshot(e.to_string()))
    }
}

impl InMemorySocialGraph {
    /// Create a snapshot for serialization.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().cloned().collect(),
            edges: self
                .edges()
                .map(|(u, v)| (u.clone(), v.clone()))
                .collect(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Rebuild a graph from a snapshot. Edges must reference listed nodes and must not be loops.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, GraphStoreError> {
        let known: BTreeSet<&NodeId> = snapshot.nodes.iter().collect();
        let mut graph = Self::new();
        for node in &snapshot.nodes {
            graph.add_node(node.clone());
        }
        for (u, v) in &snapshot.edges {
            if !known.contains(u) || !known.contains(v) {
                return Err(GraphStoreError::Snapshot(format!(
                    "edge {} - {} references unknown node",
                    u, v
                )));
            }
            if u == v {
                return Err(GraphStoreError::Snapshot(format!("self-loop on {}", u)));
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }
}
