//! Score Stats CLI Library
//!
//! Loads a JSON match corpus and renders engine output for the terminal:
//! leaderboards as two-column tables, navigation as an indented tree.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use score_core::{EngineConfig, FacetCount, InMemoryIndex, Leaderboard, NavigationNode};

/// Machine-readable output of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// RFC3339 timestamp
    pub generated_at: String,
    pub corpus_size: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leaderboards: Vec<Leaderboard>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavigationNode>,
}

impl Report {
    pub fn new(corpus_size: usize) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            corpus_size,
            leaderboards: Vec::new(),
            navigation: Vec::new(),
        }
    }
}

pub fn load_corpus(path: &Path) -> Result<InMemoryIndex> {
    InMemoryIndex::from_json_path(path)
        .with_context(|| format!("Failed to load match corpus: {}", path.display()))
}

/// Engine configuration from `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load engine config: {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Report each integrity warning of `board` through the logger.
pub fn log_warnings(board: &Leaderboard) {
    for warning in &board.warnings {
        log::warn!("[{}] {}", board.kind, warning);
    }
}

/// Two-column table, values with two decimals. `top` keeps only the first rows.
pub fn render_leaderboard(board: &Leaderboard, top: Option<usize>) -> String {
    let (label_header, value_header) = board.kind.headers();
    let entries = match top {
        Some(n) => board.top(n),
        None => board.entries.as_slice(),
    };
    let rows: Vec<(String, String)> = entries
        .iter()
        .map(|e| (e.label.clone(), format!("{:.2}", e.value)))
        .collect();

    let title = format!("{} ({})", board.kind.title(), board.scope);
    render_table(&title, (label_header, value_header), &rows)
}

/// Facet groups of one navigation level as a table.
pub fn render_counts(title: &str, label_header: &str, counts: &[FacetCount]) -> String {
    let rows: Vec<(String, String)> = counts
        .iter()
        .map(|c| (c.value.clone(), c.count.to_string()))
        .collect();
    render_table(title, (label_header, "Matches"), &rows)
}

fn render_table(title: &str, headers: (&str, &str), rows: &[(String, String)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(headers.0.chars().count()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain(std::iter::once(headers.1.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{:<lw$}  {:>vw$}", headers.0, headers.1, lw = label_width, vw = value_width);
    let _ = writeln!(out, "{}", "-".repeat(label_width + 2 + value_width));
    if rows.is_empty() {
        let _ = writeln!(out, "(no data)");
    }
    for (label, value) in rows {
        let _ = writeln!(out, "{:<lw$}  {:>vw$}", label, value, lw = label_width, vw = value_width);
    }
    out
}

/// Indented country → league → team listing with match counts.
pub fn render_tree(roots: &[NavigationNode]) -> String {
    let mut out = String::new();
    for root in roots {
        for (depth, node) in root.walk() {
            let _ = writeln!(out, "{}{} ({})", "  ".repeat(depth), node.label, node.count);
        }
    }
    out
}
