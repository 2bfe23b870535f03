//! # score_core - Football Match Statistics Engine
//!
//! Turns a corpus of indexed match records into ranked leaderboards and a
//! country → league → team navigation tree.
//!
//! ## Features
//! - Win ratio, best attack, best defence and goalscorer rankings
//! - Host + visitor facet merge for team activity counts
//! - Pluggable backends through [`FacetSource`] and [`DocumentSource`]
//! - Deterministic output (metric order, then label ascending)
//!
//! ```
//! use score_core::{InMemoryIndex, MatchRecord, Scope, StatsEngine};
//!
//! let index = InMemoryIndex::new(vec![
//!     MatchRecord::fixture("Angleterre", "Premier League", "Arsenal", "Chelsea", 2, 1),
//!     MatchRecord::fixture("Angleterre", "Premier League", "Chelsea", "Arsenal", 0, 3),
//! ]);
//! let engine = StatsEngine::new(index);
//! let board = engine
//!     .best_attacks(&Scope::league("Angleterre", "Premier League"))
//!     .unwrap();
//! assert_eq!(board.entries[0].label, "Arsenal");
//! assert_eq!(board.entries[0].value, 5.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod source;
pub mod stat_kind;

pub use config::EngineConfig;
pub use engine::{rank_by, Order, Ranked, StatsEngine, Tally};
pub use error::{Result, SourceError, StatsError};
pub use models::{
    IntegrityWarning, Leaderboard, LeaderboardEntry, MatchRecord, Minute, NavigationNode, Side,
    SideView,
};
pub use source::{
    DocumentSource, FacetCount, FacetQuery, FacetSource, Field, InMemoryIndex, ScanPage,
    ScanQuery, Scope,
};
pub use stat_kind::StatKind;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
