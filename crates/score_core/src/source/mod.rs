//! # Source Module
//!
//! Capabilities the engine needs from the search index, passed in explicitly.
//!
//! - [`FacetSource`] - grouped counts over one field
//! - [`DocumentSource`] - projected, page-capped document scans
//! - `memory` - [`InMemoryIndex`], both capabilities over a corpus held in memory

pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::models::MatchRecord;

pub use memory::InMemoryIndex;

/// Indexed fields of a match document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Country,
    League,
    Host,
    Visitor,
    Winner,
    #[serde(rename = "scorehost")]
    ScoreHost,
    #[serde(rename = "scorevisitor")]
    ScoreVisitor,
    #[serde(rename = "goalscorershost")]
    GoalScorersHost,
    #[serde(rename = "goalscorersvisitor")]
    GoalScorersVisitor,
    #[serde(rename = "goaltimeshost")]
    GoalTimesHost,
    #[serde(rename = "goaltimesvisitor")]
    GoalTimesVisitor,
    #[serde(rename = "ogtimeshost")]
    OwnGoalTimesHost,
    #[serde(rename = "ogtimesvisitor")]
    OwnGoalTimesVisitor,
}

impl Field {
    /// Fields a score-based scan needs.
    pub const SCORES: [Field; 4] = [Field::Host, Field::Visitor, Field::ScoreHost, Field::ScoreVisitor];

    /// Fields a goal-event scan needs.
    pub const GOAL_EVENTS: [Field; 7] = [
        Field::Id,
        Field::GoalScorersHost,
        Field::GoalScorersVisitor,
        Field::GoalTimesHost,
        Field::GoalTimesVisitor,
        Field::OwnGoalTimesHost,
        Field::OwnGoalTimesVisitor,
    ];

    /// Name of the field in the index schema.
    pub fn index_name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Country => "country",
            Field::League => "league",
            Field::Host => "host",
            Field::Visitor => "visitor",
            Field::Winner => "winner",
            Field::ScoreHost => "scorehost",
            Field::ScoreVisitor => "scorevisitor",
            Field::GoalScorersHost => "goalscorershost",
            Field::GoalScorersVisitor => "goalscorersvisitor",
            Field::GoalTimesHost => "goaltimeshost",
            Field::GoalTimesVisitor => "goaltimesvisitor",
            Field::OwnGoalTimesHost => "ogtimeshost",
            Field::OwnGoalTimesVisitor => "ogtimesvisitor",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.index_name())
    }
}

/// Filter an aggregation runs under.
///
/// League names are not unique across countries, so a league filter always
/// travels with its country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
}

impl Scope {
    /// Whole corpus.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn country(country: &str) -> Self {
        Self {
            country: Some(country.to_string()),
            league: None,
        }
    }

    pub fn league(country: &str, league: &str) -> Self {
        Self {
            country: Some(country.to_string()),
            league: Some(league.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.country.is_none() && self.league.is_none()
    }

    pub fn matches(&self, record: &MatchRecord) -> bool {
        self.country.as_deref().map_or(true, |c| record.country == c)
            && self.league.as_deref().map_or(true, |l| record.league == l)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.country, &self.league) {
            (None, None) => write!(f, "*"),
            (Some(c), None) => write!(f, "{}", c),
            (None, Some(l)) => write!(f, "*/{}", l),
            (Some(c), Some(l)) => write!(f, "{}/{}", c, l),
        }
    }
}

/// One group of a facet: a field value and the number of documents holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

impl FacetCount {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetQuery {
    pub field: Field,
    pub scope: Scope,
    /// Maximum number of groups returned
    pub limit: usize,
    /// Groups below this count are dropped
    pub min_count: u64,
}

impl FacetQuery {
    /// Limit asking for every group of the field.
    pub const UNLIMITED: usize = usize::MAX;

    pub fn new(field: Field, scope: Scope, limit: usize) -> Self {
        Self {
            field,
            scope,
            limit,
            min_count: 0,
        }
    }

    pub fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanQuery {
    pub scope: Scope,
    /// Fields to populate on returned records
    pub fields: Vec<Field>,
    pub page_size: usize,
}

impl ScanQuery {
    pub fn new(scope: Scope, fields: &[Field], page_size: usize) -> Self {
        Self {
            scope,
            fields: fields.to_vec(),
            page_size,
        }
    }
}

/// Result of a scan: at most `page_size` records and the scope's total hit count.
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    pub records: Vec<MatchRecord>,
    pub total_hits: u64,
}

pub trait FacetSource {
    /// Grouped document counts for `query.field`, count descending.
    fn facet_counts(&self, query: &FacetQuery) -> Result<Vec<FacetCount>, SourceError>;
}

pub trait DocumentSource {
    /// Records in `query.scope` with only `query.fields` populated.
    fn scan(&self, query: &ScanQuery) -> Result<ScanPage, SourceError>;
}

impl<T: FacetSource + ?Sized> FacetSource for &T {
    fn facet_counts(&self, query: &FacetQuery) -> Result<Vec<FacetCount>, SourceError> {
        (**self).facet_counts(query)
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn scan(&self, query: &ScanQuery) -> Result<ScanPage, SourceError> {
        (**self).scan(query)
    }
}

impl<T: FacetSource + ?Sized> FacetSource for Box<T> {
    fn facet_counts(&self, query: &FacetQuery) -> Result<Vec<FacetCount>, SourceError> {
        (**self).facet_counts(query)
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn scan(&self, query: &ScanQuery) -> Result<ScanPage, SourceError> {
        (**self).scan(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_matching() {
        let record = MatchRecord::fixture("Angleterre", "Premier League", "A", "B", 0, 0);

        assert!(Scope::all().matches(&record));
        assert!(Scope::country("Angleterre").matches(&record));
        assert!(Scope::league("Angleterre", "Premier League").matches(&record));
        assert!(!Scope::league("Angleterre", "Championship").matches(&record));
        assert!(!Scope::league("Ecosse", "Premier League").matches(&record));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::all().to_string(), "*");
        assert_eq!(Scope::country("Espagne").to_string(), "Espagne");
        assert_eq!(
            Scope::league("Espagne", "Liga").to_string(),
            "Espagne/Liga"
        );
    }

    #[test]
    fn test_field_names_match_serde() {
        for field in [Field::OwnGoalTimesHost, Field::ScoreVisitor, Field::Winner] {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.index_name()));
        }
    }
}
