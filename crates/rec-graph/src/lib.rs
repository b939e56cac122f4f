//! Graph store for friend recommendation: undirected adjacency, edge-list loading, snapshots.

mod edge_list;
mod memory;
mod snapshot;

#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;

pub use edge_list::{parse_edge_list, read_edge_list, ParsedEdges};
pub use memory::{GraphStats, InMemorySocialGraph};
pub use rec_types::{GraphStoreError, NodeId, SocialGraph};
pub use snapshot::GraphSnapshot;
