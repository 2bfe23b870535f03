//! Counting map and ranking shared by every leaderboard.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::models::LeaderboardEntry;
use crate::source::FacetCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Anything that can be placed on a leaderboard.
pub trait Ranked {
    fn label(&self) -> &str;
    fn metric(&self) -> f64;
}

impl Ranked for LeaderboardEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn metric(&self) -> f64 {
        self.value
    }
}

impl Ranked for FacetCount {
    fn label(&self) -> &str {
        &self.value
    }

    fn metric(&self) -> f64 {
        self.count as f64
    }
}

/// Sort by metric in `order`, ties by label ascending.
pub fn rank_by<T: Ranked>(items: &mut [T], order: Order) {
    items.sort_by(|a, b| compare(a, b, order));
}

fn compare<T: Ranked>(a: &T, b: &T, order: Order) -> Ordering {
    let by_metric = a.metric().total_cmp(&b.metric());
    let by_metric = match order {
        Order::Ascending => by_metric,
        Order::Descending => by_metric.reverse(),
    };
    by_metric.then_with(|| a.label().cmp(b.label()))
}

/// Counts keyed by label; missing labels read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: FxHashMap<String, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str, amount: u64) {
        *self.counts.entry(label.to_string()).or_insert(0) += amount;
    }

    /// Fold-friendly form of [`Tally::add`].
    pub fn with(mut self, label: &str, amount: u64) -> Self {
        self.add(label, amount);
        self
    }

    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn from_facets(facets: &[FacetCount]) -> Self {
        facets
            .iter()
            .fold(Self::new(), |tally, facet| tally.with(&facet.value, facet.count))
    }

    /// Sum two tallies label by label.
    pub fn merge(self, other: Tally) -> Self {
        other
            .counts
            .into_iter()
            .fold(self, |tally, (label, count)| tally.with(&label, count))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn into_entries(self, order: Order) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .counts
            .into_iter()
            .map(|(label, count)| LeaderboardEntry::new(label, count as f64))
            .collect();
        rank_by(&mut entries, order);
        entries
    }

    /// Counts as facet groups, count descending.
    pub fn into_facets(self) -> Vec<FacetCount> {
        let mut facets: Vec<FacetCount> = self
            .counts
            .into_iter()
            .map(|(value, count)| FacetCount { value, count })
            .collect();
        rank_by(&mut facets, Order::Descending);
        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_label_reads_zero() {
        let tally = Tally::new().with("A", 2);
        assert_eq!(tally.get("A"), 2);
        assert_eq!(tally.get("B"), 0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut tally = Tally::new();
        tally.add("A", 2);
        tally.add("A", 3);
        tally.add("B", 0);
        assert_eq!(tally.get("A"), 5);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_merge_sums_shared_labels() {
        let hosts = Tally::from_facets(&[FacetCount::new("A", 3), FacetCount::new("B", 1)]);
        let visitors = Tally::from_facets(&[FacetCount::new("A", 2), FacetCount::new("C", 4)]);

        let merged = hosts.merge(visitors);
        assert_eq!(merged.get("A"), 5);
        assert_eq!(merged.get("B"), 1);
        assert_eq!(merged.get("C"), 4);
        assert_eq!(merged.total(), 10);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_ties_break_by_label() {
        let tally = Tally::new().with("Zeta", 3).with("Alpha", 3).with("Mid", 5);

        let desc: Vec<String> = tally
            .clone()
            .into_entries(Order::Descending)
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(desc, vec!["Mid", "Alpha", "Zeta"]);

        let asc: Vec<String> = tally
            .into_entries(Order::Ascending)
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(asc, vec!["Alpha", "Zeta", "Mid"]);
    }

    #[test]
    fn test_rank_by_floats() {
        let mut entries = vec![
            LeaderboardEntry::new("B", 50.0),
            LeaderboardEntry::new("A", 50.0),
            LeaderboardEntry::new("C", 75.5),
        ];
        rank_by(&mut entries, Order::Descending);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_into_facets_descending() {
        let facets = Tally::new().with("A", 1).with("B", 4).into_facets();
        assert_eq!(facets, vec![FacetCount::new("B", 4), FacetCount::new("A", 1)]);
    }
}
