use super::tally::Tally;
use super::StatsEngine;
use crate::error::Result;
use crate::models::{IntegrityWarning, Leaderboard, MatchRecord};
use crate::source::{DocumentSource, Field, Scope};
use crate::stat_kind::StatKind;

impl<S: DocumentSource> StatsEngine<S> {
    /// Players by goals scored, own goals excluded.
    ///
    /// Needs a full scan: a facet counts matches, so a brace in one match
    /// would only count once.
    pub fn goal_scorers(&self, scope: &Scope) -> Result<Leaderboard> {
        let records = self.scan_scope(scope, &Field::GOAL_EVENTS)?;
        let (tally, warnings) = scorer_tally(&records);

        let kind = StatKind::GoalScorers;
        Ok(Leaderboard::new(kind, scope.clone(), tally.into_entries(kind.order())).with_warnings(warnings))
    }
}

/// One point per non-own goal, per scorer.
///
/// A side whose scorer and minute lists differ in length is skipped and
/// reported.
pub fn scorer_tally(records: &[MatchRecord]) -> (Tally, Vec<IntegrityWarning>) {
    records
        .iter()
        .flat_map(|record| record.sides().map(move |side| (record, side)))
        .fold((Tally::new(), Vec::new()), |(tally, mut warnings), (record, side)| {
            if !side.is_paired() {
                warnings.push(IntegrityWarning::UnpairedGoalEvents {
                    match_id: record.id.clone(),
                    side: side.side,
                    scorers: side.scorers.len(),
                    minutes: side.minutes.len(),
                });
                return (tally, warnings);
            }
            let tally = side
                .credited_scorers()
                .fold(tally, |tally, scorer| tally.with(scorer, 1));
            (tally, warnings)
        })
}
