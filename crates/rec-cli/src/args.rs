use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "friend-rec", version, about = "Link-prediction friend recommendations")]
pub struct Cli {
    /// Edge list: one whitespace-separated pair of node ids per line
    pub edges: PathBuf,
    /// Recommendations kept per node (overrides FRIEND_REC_TOP_K)
    #[arg(long)]
    pub top_k: Option<usize>,
    /// Candidate scope: two_hop or all_nodes (overrides FRIEND_REC_SCOPE)
    #[arg(long)]
    pub scope: Option<String>,
    /// Seed for baseline scoring and edge sampling (overrides FRIEND_REC_SEED)
    #[arg(long)]
    pub seed: Option<u64>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Top-K recommendations for one node, or for every node
    Recommend {
        /// common_neighbors, jaccard, adamic_adar, cosine or baseline
        #[arg(long, default_value = "common_neighbors")]
        scorer: String,
        #[arg(long)]
        node: Option<String>,
    },
    /// Leave-one-edge-out validation across scorers
    Evaluate {
        #[arg(long)]
        trials: Option<usize>,
        /// Comma-separated scorer names
        #[arg(long)]
        scorers: Option<String>,
    },
    /// Pairwise overlap of scorers' top-K sets on the probe nodes
    Agreement {
        #[arg(long)]
        probe_stride: Option<u64>,
        #[arg(long)]
        probe_limit: Option<usize>,
    },
    /// Node, edge, and degree counts
    Stats,
    /// Export the loaded graph as JSON
    Snapshot,
}
