//! In-memory match index.
//!
//! Answers facet and scan queries the way the search backend does: facets
//! count documents (a multi-valued field counts once per distinct value in a
//! document), groups come back count descending with ties in value order,
//! and scans return projected records capped at the page size together with
//! the scope's total hit count.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use super::{DocumentSource, FacetCount, FacetQuery, FacetSource, Field, ScanPage, ScanQuery};
use crate::error::SourceError;
use crate::models::MatchRecord;

#[derive(Debug, Clone, Default)]
pub struct InMemoryIndex {
    records: Vec<MatchRecord>,
}

impl InMemoryIndex {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of match documents.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let records: Vec<MatchRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_json_path(path: &Path) -> Result<Self, SourceError> {
        let json = fs::read_to_string(path)?;
        let index = Self::from_json_str(&json)?;
        log::debug!("Loaded {} match documents from {:?}", index.len(), path);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty values `record` holds for `field`.
    fn field_values(record: &MatchRecord, field: Field) -> BTreeSet<String> {
        let mut values = BTreeSet::new();
        match field {
            Field::Id => {
                values.insert(record.id.clone());
            }
            Field::Country => {
                values.insert(record.country.clone());
            }
            Field::League => {
                values.insert(record.league.clone());
            }
            Field::Host => {
                values.insert(record.host.clone());
            }
            Field::Visitor => {
                values.insert(record.visitor.clone());
            }
            Field::Winner => {
                if let Some(winner) = record.winner_team() {
                    values.insert(winner.to_string());
                }
            }
            Field::ScoreHost => {
                values.insert(record.score_host.to_string());
            }
            Field::ScoreVisitor => {
                values.insert(record.score_visitor.to_string());
            }
            Field::GoalScorersHost => values.extend(record.goal_scorers_host.iter().cloned()),
            Field::GoalScorersVisitor => values.extend(record.goal_scorers_visitor.iter().cloned()),
            Field::GoalTimesHost => values.extend(record.goal_times_host.iter().map(|m| m.to_string())),
            Field::GoalTimesVisitor => {
                values.extend(record.goal_times_visitor.iter().map(|m| m.to_string()))
            }
            Field::OwnGoalTimesHost => {
                values.extend(record.own_goal_times_host.iter().map(|m| m.to_string()))
            }
            Field::OwnGoalTimesVisitor => {
                values.extend(record.own_goal_times_visitor.iter().map(|m| m.to_string()))
            }
        }
        values.remove("");
        values
    }

    /// Copy of `record` with only `fields` populated.
    fn project(record: &MatchRecord, fields: &[Field]) -> MatchRecord {
        let mut out = MatchRecord::default();
        for field in fields {
            match field {
                Field::Id => out.id = record.id.clone(),
                Field::Country => out.country = record.country.clone(),
                Field::League => out.league = record.league.clone(),
                Field::Host => out.host = record.host.clone(),
                Field::Visitor => out.visitor = record.visitor.clone(),
                Field::Winner => out.winner = record.winner_team().map(str::to_string),
                Field::ScoreHost => out.score_host = record.score_host,
                Field::ScoreVisitor => out.score_visitor = record.score_visitor,
                Field::GoalScorersHost => out.goal_scorers_host = record.goal_scorers_host.clone(),
                Field::GoalScorersVisitor => {
                    out.goal_scorers_visitor = record.goal_scorers_visitor.clone()
                }
                Field::GoalTimesHost => out.goal_times_host = record.goal_times_host.clone(),
                Field::GoalTimesVisitor => out.goal_times_visitor = record.goal_times_visitor.clone(),
                Field::OwnGoalTimesHost => {
                    out.own_goal_times_host = record.own_goal_times_host.clone()
                }
                Field::OwnGoalTimesVisitor => {
                    out.own_goal_times_visitor = record.own_goal_times_visitor.clone()
                }
            }
        }
        out
    }
}

impl FromIterator<MatchRecord> for InMemoryIndex {
    fn from_iter<I: IntoIterator<Item = MatchRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FacetSource for InMemoryIndex {
    fn facet_counts(&self, query: &FacetQuery) -> Result<Vec<FacetCount>, SourceError> {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for record in self.records.iter().filter(|r| query.scope.matches(r)) {
            for value in Self::field_values(record, query.field) {
                *counts.entry(value).or_insert(0) += 1;
            }
        }

        let mut groups: Vec<FacetCount> = counts
            .into_iter()
            .filter(|(_, count)| *count >= query.min_count)
            .map(|(value, count)| FacetCount { value, count })
            .collect();
        groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        groups.truncate(query.limit);
        Ok(groups)
    }
}

impl DocumentSource for InMemoryIndex {
    fn scan(&self, query: &ScanQuery) -> Result<ScanPage, SourceError> {
        let matching: Vec<&MatchRecord> =
            self.records.iter().filter(|r| query.scope.matches(r)).collect();

        Ok(ScanPage {
            total_hits: matching.len() as u64,
            records: matching
                .into_iter()
                .take(query.page_size)
                .map(|r| Self::project(r, &query.fields))
                .collect(),
        })
    }
}
