//! Match records as they come out of the search index.
//!
//! Field names on the wire follow the index schema (`scorehost`,
//! `goalscorershost`, `ogtimeshost`, ...). A record returned by a projected
//! scan only has the requested fields populated; everything else keeps its
//! default value.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minute marker of a goal event.
pub type Minute = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Host,
    Visitor,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Host, Side::Visitor];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Host => write!(f, "host"),
            Side::Visitor => write!(f, "visitor"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRecord {
    pub id: String,
    pub country: String,
    pub league: String,
    pub host: String,
    pub visitor: String,
    #[serde(rename = "scorehost")]
    pub score_host: u32,
    #[serde(rename = "scorevisitor")]
    pub score_visitor: u32,
    /// Stored winner, when the index carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(rename = "goalscorershost")]
    pub goal_scorers_host: Vec<String>,
    #[serde(rename = "goalscorersvisitor")]
    pub goal_scorers_visitor: Vec<String>,
    #[serde(rename = "goaltimeshost")]
    pub goal_times_host: Vec<Minute>,
    #[serde(rename = "goaltimesvisitor")]
    pub goal_times_visitor: Vec<Minute>,
    #[serde(rename = "ogtimeshost")]
    pub own_goal_times_host: BTreeSet<Minute>,
    #[serde(rename = "ogtimesvisitor")]
    pub own_goal_times_visitor: BTreeSet<Minute>,
}

impl MatchRecord {
    /// Bare result: competition, teams and final score.
    pub fn fixture(
        country: &str,
        league: &str,
        host: &str,
        visitor: &str,
        score_host: u32,
        score_visitor: u32,
    ) -> Self {
        Self {
            country: country.to_string(),
            league: league.to_string(),
            host: host.to_string(),
            visitor: visitor.to_string(),
            score_host,
            score_visitor,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_winner(mut self, winner: &str) -> Self {
        self.winner = Some(winner.to_string());
        self
    }

    /// Attach the goal events of one side.
    ///
    /// `events` are (scorer, minute) pairs in match order; `own_goal_minutes`
    /// marks which of those minutes were own goals.
    pub fn with_goals(
        mut self,
        side: Side,
        events: &[(&str, Minute)],
        own_goal_minutes: &[Minute],
    ) -> Self {
        let scorers = events.iter().map(|(p, _)| p.to_string()).collect();
        let minutes = events.iter().map(|(_, m)| *m).collect();
        let own_goals = own_goal_minutes.iter().copied().collect();
        match side {
            Side::Host => {
                self.goal_scorers_host = scorers;
                self.goal_times_host = minutes;
                self.own_goal_times_host = own_goals;
            }
            Side::Visitor => {
                self.goal_scorers_visitor = scorers;
                self.goal_times_visitor = minutes;
                self.own_goal_times_visitor = own_goals;
            }
        }
        self
    }

    /// Stored winner, or the side with more goals. `None` on a draw.
    pub fn winner_team(&self) -> Option<&str> {
        if let Some(winner) = self.winner.as_deref() {
            return Some(winner);
        }
        match self.score_host.cmp(&self.score_visitor) {
            std::cmp::Ordering::Greater => Some(self.host.as_str()),
            std::cmp::Ordering::Less => Some(self.visitor.as_str()),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn side(&self, side: Side) -> SideView<'_> {
        match side {
            Side::Host => SideView {
                side,
                team: &self.host,
                goals_for: self.score_host,
                goals_against: self.score_visitor,
                scorers: &self.goal_scorers_host,
                minutes: &self.goal_times_host,
                own_goal_minutes: &self.own_goal_times_host,
            },
            Side::Visitor => SideView {
                side,
                team: &self.visitor,
                goals_for: self.score_visitor,
                goals_against: self.score_host,
                scorers: &self.goal_scorers_visitor,
                minutes: &self.goal_times_visitor,
                own_goal_minutes: &self.own_goal_times_visitor,
            },
        }
    }

    pub fn sides(&self) -> impl Iterator<Item = SideView<'_>> {
        Side::ALL.into_iter().map(move |side| self.side(side))
    }
}

/// Borrowed view of one side of a match.
#[derive(Debug, Clone, Copy)]
pub struct SideView<'a> {
    pub side: Side,
    pub team: &'a str,
    pub goals_for: u32,
    pub goals_against: u32,
    pub scorers: &'a [String],
    pub minutes: &'a [Minute],
    pub own_goal_minutes: &'a BTreeSet<Minute>,
}

impl<'a> SideView<'a> {
    /// Scorer and minute sequences line up one-to-one.
    pub fn is_paired(&self) -> bool {
        self.scorers.len() == self.minutes.len()
    }

    /// (scorer, minute) pairs in lockstep.
    pub fn goal_events(self) -> impl Iterator<Item = (&'a str, Minute)> + 'a {
        self.scorers
            .iter()
            .map(String::as_str)
            .zip(self.minutes.iter().copied())
    }

    /// Scorers of the goals that were not own goals, one entry per goal.
    pub fn credited_scorers(self) -> impl Iterator<Item = &'a str> + 'a {
        let own_goals = self.own_goal_minutes;
        self.goal_events()
            .filter(move |(_, minute)| !own_goals.contains(minute))
            .map(|(scorer, _)| scorer)
    }
}
