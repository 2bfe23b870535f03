use std::fmt;

use serde::{Deserialize, Serialize};

use super::match_record::Side;
use crate::source::Scope;
use crate::stat_kind::StatKind;

/// One ranked row: a team or player and its metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub label: String,
    pub value: f64,
}

impl LeaderboardEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Inconsistent data found while computing a leaderboard.
///
/// The offending entry is left out of the ranking; everything else is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
    /// Team has recorded wins but no host or visitor appearances.
    NoAppearances { team: String, wins: u64 },
    /// Team has more recorded wins than appearances.
    WinsExceedAppearances {
        team: String,
        wins: u64,
        appearances: u64,
    },
    /// Scorer and minute lists of one side differ in length.
    UnpairedGoalEvents {
        match_id: String,
        side: Side,
        scorers: usize,
        minutes: usize,
    },
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrityWarning::NoAppearances { team, wins } => write!(
                f,
                "Team '{}' has {} win(s) but no recorded appearances; skipped",
                team, wins
            ),
            IntegrityWarning::WinsExceedAppearances {
                team,
                wins,
                appearances,
            } => write!(
                f,
                "Team '{}' has {} win(s) for only {} appearance(s); skipped",
                team, wins, appearances
            ),
            IntegrityWarning::UnpairedGoalEvents {
                match_id,
                side,
                scorers,
                minutes,
            } => write!(
                f,
                "Match '{}' lists {} {} scorer(s) for {} goal minute(s); side skipped",
                match_id, scorers, side, minutes
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub kind: StatKind,
    pub scope: Scope,
    pub entries: Vec<LeaderboardEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IntegrityWarning>,
}

impl Leaderboard {
    pub fn new(kind: StatKind, scope: Scope, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            kind,
            scope,
            entries,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<IntegrityWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.value)
    }

    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}
