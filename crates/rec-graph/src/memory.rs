//! In-memory undirected social graph backed by ordered adjacency sets.

use rec_types::{NodeId, SocialGraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

type Adjacency = BTreeMap<NodeId, BTreeSet<NodeId>>;

/// In-memory implementation of SocialGraph.
/// Nodes and neighbor sets are kept in `NodeId` order so every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySocialGraph {
    /// node -> neighbors. Symmetric; endpoints stay registered after their last edge is removed.
    adjacency: Adjacency,
}

/// Summary counts for a loaded graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

impl InMemorySocialGraph {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds the graph from directed pairs; each pair `(a, b)` yields both `a -> b` and `b -> a`.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        let mut self_loops = 0usize;
        for (a, b) in edges {
            if a == b {
                self_loops += 1;
                graph.add_node(a);
                continue;
            }
            graph.add_edge(&a, &b);
        }
        if self_loops > 0 {
            tracing::debug!(self_loops, "dropped self-loop edges while building graph");
        }
        graph
    }

    /// Registers an isolated node. No-op when it already exists.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, BTreeSet::new());
        true
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Undirected edges, each reported once with the smaller endpoint first.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.adjacency
            .iter()
            .flat_map(|(u, ns)| ns.iter().filter(move |v| u < *v).map(move |v| (u, v)))
    }

    pub fn stats(&self) -> GraphStats {
        let nodes = self.adjacency.len();
        let isolated_nodes = self.adjacency.values().filter(|n| n.is_empty()).count();
        let max_degree = self.adjacency.values().map(BTreeSet::len).max().unwrap_or(0);
        let degree_sum: usize = self.adjacency.values().map(BTreeSet::len).sum();
        let mean_degree = if nodes == 0 {
            0.0
        } else {
            degree_sum as f64 / nodes as f64
        };
        GraphStats {
            nodes,
            edges: degree_sum / 2,
            isolated_nodes,
            max_degree,
            mean_degree,
        }
    }
}

impl SocialGraph for InMemorySocialGraph {
    fn neighbors(&self, node: &NodeId) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(node)
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, u: &NodeId, v: &NodeId) -> bool {
        if u == v {
            self.add_node(u.clone());
            return false;
        }
        let inserted = self.adjacency.entry(u.clone()).or_default().insert(v.clone());
        self.adjacency.entry(v.clone()).or_default().insert(u.clone());
        inserted
    }

    fn remove_edge(&mut self, u: &NodeId, v: &NodeId) -> bool {
        let removed = self
            .adjacency
            .get_mut(u)
            .is_some_and(|ns| ns.remove(v));
        if let Some(ns) = self.adjacency.get_mut(v) {
            ns.remove(u);
        }
        removed
    }
}
