use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Order;

/// The leaderboards the engine can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    #[serde(rename = "best-attacks")]
    BestAttacks,
    #[serde(rename = "best-defences")]
    BestDefences,
    #[serde(rename = "win-ratios")]
    WinRatios,
    #[serde(rename = "goalscorers")]
    GoalScorers,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::BestAttacks,
        StatKind::BestDefences,
        StatKind::WinRatios,
        StatKind::GoalScorers,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            StatKind::BestAttacks => "best-attacks",
            StatKind::BestDefences => "best-defences",
            StatKind::WinRatios => "win-ratios",
            StatKind::GoalScorers => "goalscorers",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StatKind::BestAttacks => "Best attacks",
            StatKind::BestDefences => "Best defences",
            StatKind::WinRatios => "Win ratios",
            StatKind::GoalScorers => "Top goalscorers",
        }
    }

    /// Column headers: (label column, value column)
    pub fn headers(self) -> (&'static str, &'static str) {
        match self {
            StatKind::BestAttacks => ("Team", "Goals scored"),
            StatKind::BestDefences => ("Team", "Goals conceded"),
            StatKind::WinRatios => ("Team", "Win ratio (%)"),
            StatKind::GoalScorers => ("Player", "Goals"),
        }
    }

    /// Defences rank fewest goals conceded first.
    pub fn order(self) -> Order {
        match self {
            StatKind::BestDefences => Order::Ascending,
            _ => Order::Descending,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = StatKind::ALL.iter().map(|k| k.slug()).collect();
                format!("Unknown stat type '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
