//! # Aggregation Engine
//!
//! Reduces facet counts and scanned match records into ranked leaderboards
//! and the navigation tree. Every call is a full recomputation against the
//! injected source; nothing is kept between calls.
//!
//! ## Submodules
//!
//! - `tally` - default-zero counting map, label merge and ranking
//! - `win_ratio` - wins / (host + visitor appearances), from facets
//! - `goals` - goals scored and conceded per team, from a scan
//! - `scorers` - goals per player excluding own goals, from a scan
//! - `navigation` - country → league → team counts

mod goals;
mod navigation;
mod scorers;
mod tally;
mod win_ratio;

pub use goals::{attack_tally, defence_tally};
pub use navigation::merge_team_counts;
pub use scorers::scorer_tally;
pub use tally::{rank_by, Order, Ranked, Tally};
pub use win_ratio::win_ratio_entries;

use crate::config::EngineConfig;
use crate::error::{Result, StatsError};
use crate::models::{Leaderboard, MatchRecord};
use crate::source::{DocumentSource, FacetCount, FacetQuery, FacetSource, Field, ScanQuery, Scope};
use crate::stat_kind::StatKind;

pub struct StatsEngine<S> {
    source: S,
    config: EngineConfig,
}

impl<S> StatsEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(source: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: FacetSource> StatsEngine<S> {
    /// Top `facet_limit` groups of `field`.
    fn facet(&self, field: Field, scope: &Scope, min_count: u64) -> Result<Vec<FacetCount>> {
        self.facet_query(FacetQuery::new(field, scope.clone(), self.config.facet_limit).min_count(min_count))
    }

    /// Every group of `field`. Counts that get merged across facets must be complete.
    fn facet_all(&self, field: Field, scope: &Scope, min_count: u64) -> Result<Vec<FacetCount>> {
        self.facet_query(FacetQuery::new(field, scope.clone(), FacetQuery::UNLIMITED).min_count(min_count))
    }

    fn facet_query(&self, query: FacetQuery) -> Result<Vec<FacetCount>> {
        let (field, scope) = (query.field, &query.scope);
        if query.limit == FacetQuery::UNLIMITED {
            log::debug!("facet {} over {} (unlimited, min count {})", field, scope, query.min_count);
        } else {
            log::debug!(
                "facet {} over {} (limit {}, min count {})",
                field,
                scope,
                query.limit,
                query.min_count
            );
        }

        let groups = self
            .source
            .facet_counts(&query)
            .map_err(|e| StatsError::backend(format!("faceting '{}' over {}", field, scope), e))?;
        log::trace!("facet {} returned {} groups", field, groups.len());
        Ok(groups)
    }
}

impl<S: DocumentSource> StatsEngine<S> {
    /// Every record of `scope` in one page, or `ScopeOverflow`.
    fn scan_scope(&self, scope: &Scope, fields: &[Field]) -> Result<Vec<MatchRecord>> {
        let page_size = self.config.page_size;
        let query = ScanQuery::new(scope.clone(), fields, page_size);
        log::debug!("scan {} ({} fields, page size {})", scope, fields.len(), page_size);

        let page = self
            .source
            .scan(&query)
            .map_err(|e| StatsError::backend(format!("scanning matches of {}", scope), e))?;

        if page.records.len() >= page_size || page.total_hits >= page_size as u64 {
            return Err(StatsError::ScopeOverflow {
                scope: scope.clone(),
                returned: page.records.len(),
                total_hits: page.total_hits,
                page_size,
            });
        }
        Ok(page.records)
    }
}

impl<S: FacetSource + DocumentSource> StatsEngine<S> {
    pub fn leaderboard(&self, kind: StatKind, scope: &Scope) -> Result<Leaderboard> {
        match kind {
            StatKind::BestAttacks => self.best_attacks(scope),
            StatKind::BestDefences => self.best_defences(scope),
            StatKind::WinRatios => self.win_ratios(scope),
            StatKind::GoalScorers => self.goal_scorers(scope),
        }
    }

    /// Leaderboard over the configured default scope.
    pub fn default_leaderboard(&self, kind: StatKind) -> Result<Leaderboard> {
        self.leaderboard(kind, &self.config.default_scope)
    }

    /// All four leaderboards, in [`StatKind::ALL`] order. Stops at the first failure.
    pub fn all_leaderboards(&self, scope: &Scope) -> Result<Vec<Leaderboard>> {
        StatKind::ALL
            .into_iter()
            .map(|kind| self.leaderboard(kind, scope))
            .collect()
    }
}
