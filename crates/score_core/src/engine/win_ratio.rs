use super::tally::{rank_by, Order, Tally};
use super::StatsEngine;
use crate::error::Result;
use crate::models::{IntegrityWarning, Leaderboard, LeaderboardEntry};
use crate::source::{FacetCount, FacetSource, Field, Scope};
use crate::stat_kind::StatKind;

impl<S: FacetSource> StatsEngine<S> {
    /// Teams with at least one win, by `wins / appearances * 100` descending.
    pub fn win_ratios(&self, scope: &Scope) -> Result<Leaderboard> {
        let hosts = self.facet_all(Field::Host, scope, 0)?;
        let visitors = self.facet_all(Field::Visitor, scope, 0)?;
        let winners = self.facet_all(Field::Winner, scope, self.config.min_count)?;

        let (entries, warnings) = win_ratio_entries(&hosts, &visitors, &winners);
        Ok(Leaderboard::new(StatKind::WinRatios, scope.clone(), entries).with_warnings(warnings))
    }
}

/// Win percentage of every team in `winners`.
///
/// Appearances are host + visitor counts merged by label. A winner with no
/// appearances is skipped with a warning instead of dividing by zero.
pub fn win_ratio_entries(
    hosts: &[FacetCount],
    visitors: &[FacetCount],
    winners: &[FacetCount],
) -> (Vec<LeaderboardEntry>, Vec<IntegrityWarning>) {
    let appearances = Tally::from_facets(hosts).merge(Tally::from_facets(visitors));

    let mut entries = Vec::with_capacity(winners.len());
    let mut warnings = Vec::new();
    for winner in winners.iter().filter(|w| w.count > 0) {
        let played = appearances.get(&winner.value);
        if played == 0 {
            warnings.push(IntegrityWarning::NoAppearances {
                team: winner.value.clone(),
                wins: winner.count,
            });
            continue;
        }
        if winner.count > played {
            warnings.push(IntegrityWarning::WinsExceedAppearances {
                team: winner.value.clone(),
                wins: winner.count,
                appearances: played,
            });
            continue;
        }
        let ratio = winner.count as f64 / played as f64 * 100.0;
        entries.push(LeaderboardEntry::new(winner.value.clone(), ratio));
    }

    rank_by(&mut entries, Order::Descending);
    (entries, warnings)
}
