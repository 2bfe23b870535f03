use super::tally::Tally;
use super::StatsEngine;
use crate::error::Result;
use crate::models::{Leaderboard, MatchRecord};
use crate::source::{DocumentSource, Field, Scope};
use crate::stat_kind::StatKind;

impl<S: DocumentSource> StatsEngine<S> {
    /// Teams by goals scored, most first.
    pub fn best_attacks(&self, scope: &Scope) -> Result<Leaderboard> {
        let records = self.scan_scope(scope, &Field::SCORES)?;
        let kind = StatKind::BestAttacks;
        Ok(Leaderboard::new(kind, scope.clone(), attack_tally(&records).into_entries(kind.order())))
    }

    /// Teams by goals conceded, fewest first.
    pub fn best_defences(&self, scope: &Scope) -> Result<Leaderboard> {
        let records = self.scan_scope(scope, &Field::SCORES)?;
        let kind = StatKind::BestDefences;
        Ok(Leaderboard::new(kind, scope.clone(), defence_tally(&records).into_entries(kind.order())))
    }
}

/// Goals scored per team, both sides of every match.
pub fn attack_tally(records: &[MatchRecord]) -> Tally {
    records
        .iter()
        .flat_map(|record| record.sides())
        .fold(Tally::new(), |tally, side| tally.with(side.team, side.goals_for.into()))
}

/// Goals conceded per team.
pub fn defence_tally(records: &[MatchRecord]) -> Tally {
    records
        .iter()
        .flat_map(|record| record.sides())
        .fold(Tally::new(), |tally, side| tally.with(side.team, side.goals_against.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{premier_league, premier_league_records};

    fn two_legs() -> Vec<MatchRecord> {
        vec![
            MatchRecord::fixture("Angleterre", "Premier League", "A", "B", 2, 1),
            MatchRecord::fixture("Angleterre", "Premier League", "B", "A", 0, 3),
        ]
    }

    #[test]
    fn test_attack_and_defence_totals() {
        let records = two_legs();
        let attack = attack_tally(&records);
        let defence = defence_tally(&records);

        assert_eq!(attack.get("A"), 5);
        assert_eq!(attack.get("B"), 1);
        assert_eq!(defence.get("A"), 1);
        assert_eq!(defence.get("B"), 5);
    }

    #[test]
    fn test_goals_scored_equal_goals_conceded() {
        let records = premier_league_records();
        assert_eq!(attack_tally(&records).total(), defence_tally(&records).total());
    }

    #[test]
    fn test_rankings_from_index() {
        let engine = StatsEngine::new(premier_league());
        let scope = Scope::league("Angleterre", "Premier League");

        let attacks = engine.best_attacks(&scope).unwrap();
        let labels: Vec<&str> = attacks.labels().collect();
        // A: 2+3+1, B: 1+0, C: 1
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(attacks.get("A"), Some(6.0));
        assert_eq!(attacks.get("B"), Some(1.0));

        let defences = engine.best_defences(&scope).unwrap();
        let labels: Vec<&str> = defences.labels().collect();
        // C: 1, A: 1+0+1, B: 2+3
        assert_eq!(labels, vec!["C", "A", "B"]);
        assert_eq!(defences.get("A"), Some(2.0));
        assert_eq!(defences.get("B"), Some(5.0));
    }

    #[test]
    fn test_goalless_team_still_listed() {
        let records = vec![MatchRecord::fixture("Ecosse", "Premiership", "A", "B", 0, 0)];
        let entries = attack_tally(&records).into_entries(StatKind::BestAttacks.order());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.value == 0.0));
        assert_eq!(entries[0].label, "A");
    }
}
