//! Whitespace-separated edge list parsing.

use rec_types::{GraphStoreError, NodeId};
use std::path::Path;

/// Edges parsed from an edge list, plus the number of malformed lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEdges {
    pub edges: Vec<(NodeId, NodeId)>,
    pub skipped_lines: usize,
}

/// Parses one directed edge per line. Blank and `#` lines are ignored; lines that do not split
/// into exactly two tokens are skipped and counted.
pub fn parse_edge_list(text: &str) -> ParsedEdges {
    let mut parsed = ParsedEdges::default();
    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => parsed.edges.push((NodeId::from(a), NodeId::from(b))),
            _ => {
                tracing::debug!(line = lineno + 1, content = trimmed, "skipping malformed edge line");
                parsed.skipped_lines += 1;
            }
        }
    }
    parsed
}

/// Reads and parses an edge list file.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<ParsedEdges, GraphStoreError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let parsed = parse_edge_list(&text);
    tracing::info!(
        path = %path.as_ref().display(),
        edges = parsed.edges.len(),
        skipped = parsed.skipped_lines,
        "edge list loaded"
    );
    Ok(parsed)
}
