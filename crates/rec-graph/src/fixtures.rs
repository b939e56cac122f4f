//! Shared graph fixtures for tests.

use crate::InMemorySocialGraph;
use rec_types::NodeId;

/// Directed pairs of the seven-node toy network; symmetrized it becomes
/// `{0:{1,3}, 1:{0,2,3}, 2:{1,3}, 3:{0,1,2,4}, 4:{3,5,6}, 5:{4,6}, 6:{4,5}}`.
pub const TOY_EDGES: [(&str, &str); 10] = [
    ("1", "0"),
    ("1", "2"),
    ("2", "3"),
    ("3", "1"),
    ("3", "0"),
    ("3", "4"),
    ("4", "5"),
    ("4", "6"),
    ("5", "4"),
    ("5", "6"),
];

pub fn toy_graph() -> InMemorySocialGraph {
    InMemorySocialGraph::from_edges(
        TOY_EDGES
            .iter()
            .map(|(a, b)| (NodeId::from(*a), NodeId::from(*b))),
    )
}

/// Two dense communities (ids `0..size` and `size..2*size`) joined by a single bridge edge.
/// Every node has plenty of friends-of-friends, which keeps validation trials productive.
pub fn two_communities(size: u64) -> InMemorySocialGraph {
    let mut edges = Vec::new();
    for base in [0, size] {
        for i in 0..size {
            for j in (i + 1)..size {
                if (i + j) % 3 != 0 {
                    edges.push((NodeId::from(base + i), NodeId::from(base + j)));
                }
            }
        }
    }
    edges.push((NodeId::from(0), NodeId::from(size)));
    InMemorySocialGraph::from_edges(edges)
}
