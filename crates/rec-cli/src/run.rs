//! Command execution: load the graph, build engine and evaluator configs, produce JSON output.

use crate::args::{Cli, Command};
use rec_engine::Recommender;
use rec_eval::Evaluator;
use rec_graph::{read_edge_list, InMemorySocialGraph};
use rec_types::{
    parse_scorer_list, CandidateScope, EngineConfig, EvalConfig, EvalError, GraphStoreError,
    NodeId, RecommendError, ScorerKind,
};
use serde_json::{json, Value};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("graph: {0}")]
    Graph(#[from] GraphStoreError),
    #[error("recommend: {0}")]
    Recommend(#[from] RecommendError),
    #[error("evaluate: {0}")]
    Eval(#[from] EvalError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("output: {0}")]
    Output(#[from] serde_json::Error),
}

pub fn load_graph(path: &Path) -> Result<InMemorySocialGraph, CliError> {
    let parsed = read_edge_list(path)?;
    if parsed.skipped_lines > 0 {
        tracing::warn!(skipped = parsed.skipped_lines, "malformed edge lines ignored");
    }
    Ok(InMemorySocialGraph::from_edges(parsed.edges))
}

/// Environment config with command-line overrides applied.
pub fn engine_config(cli: &Cli) -> Result<EngineConfig, CliError> {
    let mut config = EngineConfig::from_env();
    if let Some(k) = cli.top_k {
        config.top_k = k;
    }
    if let Some(ref raw) = cli.scope {
        config.scope = raw
            .parse::<CandidateScope>()
            .map_err(CliError::InvalidArgument)?;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn eval_config(cli: &Cli, engine: &EngineConfig) -> EvalConfig {
    let mut config = EvalConfig::from_env();
    config.depth = engine.top_k;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config
}

pub fn execute(cli: &Cli) -> Result<Value, CliError> {
    // Reject bad scorer names before touching the filesystem.
    if let Command::Recommend { ref scorer, .. } = cli.command {
        scorer.parse::<ScorerKind>()?;
    }

    let graph = load_graph(&cli.edges)?;
    let config = engine_config(cli)?;
    let stats = graph.stats();
    tracing::info!(nodes = stats.nodes, edges = stats.edges, ?config, "graph ready");

    match &cli.command {
        Command::Stats => Ok(serde_json::to_value(stats)?),
        Command::Snapshot => Ok(serde_json::to_value(graph.snapshot())?),
        Command::Recommend { scorer, node } => {
            let kind: ScorerKind = scorer.parse()?;
            let mut engine = Recommender::new(graph, config);
            match node {
                Some(raw) => {
                    let node = NodeId::from(raw.as_str());
                    let list = engine.recommend(&node, kind)?;
                    Ok(json!({ "scorer": kind, "node": node, "recommendations": list }))
                }
                None => Ok(serde_json::to_value(engine.find_all_recommendations(kind)?)?),
            }
        }
        Command::Evaluate { trials, scorers } => {
            let mut eval = eval_config(cli, &config);
            if let Some(t) = trials {
                eval.trials = *t;
            }
            if let Some(raw) = scorers {
                eval.scorers = parse_scorer_list(raw)
                    .map_err(|bad| CliError::InvalidArgument(format!("unknown scorer: {}", bad)))?;
            }
            let mut engine = Recommender::new(graph, config);
            let report = Evaluator::new(eval).validate(&mut engine)?;
            Ok(serde_json::to_value(report)?)
        }
        Command::Agreement {
            probe_stride,
            probe_limit,
        } => {
            let mut eval = eval_config(cli, &config);
            if let Some(s) = probe_stride {
                eval.probe_stride = *s;
            }
            if let Some(l) = probe_limit {
                eval.probe_limit = *l;
            }
            let mut engine = Recommender::new(graph, config);
            let evaluator = Evaluator::new(eval);
            let probes = evaluator.probe_nodes(engine.graph());
            let matrix = evaluator.agreement_matrix(&mut engine)?;
            Ok(json!({ "probes": probes, "agreement": matrix }))
        }
    }
}
