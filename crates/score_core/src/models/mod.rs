//! # Models
//!
//! - `match_record` - One played fixture as stored in the index
//! - `leaderboard` - Ranked (label, value) output and integrity warnings
//! - `navigation` - Country → league → team tree nodes

pub mod leaderboard;
pub mod match_record;
pub mod navigation;

pub use leaderboard::{IntegrityWarning, Leaderboard, LeaderboardEntry};
pub use match_record::{MatchRecord, Minute, Side, SideView};
pub use navigation::NavigationNode;
