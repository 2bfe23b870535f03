use super::tally::{rank_by, Order, Tally};
use super::StatsEngine;
use crate::error::Result;
use crate::models::NavigationNode;
use crate::source::{FacetCount, FacetSource, Field, Scope};

impl<S: FacetSource> StatsEngine<S> {
    /// Matches per country, whole corpus.
    pub fn countries(&self) -> Result<Vec<FacetCount>> {
        self.level(Field::Country, &Scope::all())
    }

    /// Matches per league of `country`.
    pub fn leagues(&self, country: &str) -> Result<Vec<FacetCount>> {
        self.level(Field::League, &Scope::country(country))
    }

    /// Matches per team of a league: host and visitor appearances merged.
    ///
    /// Both sides are fetched whole; the level limit and min count apply to
    /// the merged counts only.
    pub fn teams(&self, country: &str, league: &str) -> Result<Vec<FacetCount>> {
        let scope = Scope::league(country, league);
        let hosts = self.facet_all(Field::Host, &scope, 0)?;
        let visitors = self.facet_all(Field::Visitor, &scope, 0)?;

        let mut teams = merge_team_counts(&hosts, &visitors);
        teams.retain(|t| t.count >= self.config.min_count);
        teams.truncate(self.config.facet_limit);
        Ok(teams)
    }

    /// Country → league → team tree, one facet query per node, depth first.
    pub fn navigation_tree(&self) -> Result<Vec<NavigationNode>> {
        self.countries()?
            .into_iter()
            .map(|country| -> Result<NavigationNode> {
                let leagues = self
                    .leagues(&country.value)?
                    .into_iter()
                    .map(|league| -> Result<NavigationNode> {
                        let teams = self
                            .teams(&country.value, &league.value)?
                            .into_iter()
                            .map(|team| NavigationNode::leaf(team.value, team.count))
                            .collect();
                        Ok(NavigationNode::leaf(league.value, league.count).with_children(teams))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(NavigationNode::leaf(country.value, country.count).with_children(leagues))
            })
            .collect()
    }

    fn level(&self, field: Field, scope: &Scope) -> Result<Vec<FacetCount>> {
        let mut groups = self.facet(field, scope, self.config.min_count)?;
        groups.retain(|g| g.count >= self.config.min_count);
        rank_by(&mut groups, Order::Descending);
        Ok(groups)
    }
}

/// Team activity: hosted + visited matches, summed by team.
pub fn merge_team_counts(hosts: &[FacetCount], visitors: &[FacetCount]) -> Vec<FacetCount> {
    Tally::from_facets(hosts)
        .merge(Tally::from_facets(visitors))
        .into_facets()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::tests::{crowded_league, premier_league, premier_league_records};
    use crate::models::MatchRecord;
    use crate::source::InMemoryIndex;

    #[test]
    fn test_merge_host_and_visitor_counts() {
        let hosts = [FacetCount::new("A", 3), FacetCount::new("B", 1)];
        let visitors = [FacetCount::new("A", 2), FacetCount::new("C", 2)];

        let merged = merge_team_counts(&hosts, &visitors);
        assert_eq!(
            merged,
            vec![
                FacetCount::new("A", 5),
                FacetCount::new("C", 2),
                FacetCount::new("B", 1),
            ]
        );
    }

    #[test]
    fn test_teams_of_league() {
        let engine = StatsEngine::new(premier_league());
        let teams = engine.teams("Angleterre", "Premier League").unwrap();
        assert_eq!(
            teams,
            vec![
                FacetCount::new("A", 3),
                FacetCount::new("B", 2),
                FacetCount::new("C", 1),
            ]
        );
    }

    #[test]
    fn test_navigation_tree_levels() {
        let index: InMemoryIndex = premier_league_records()
            .into_iter()
            .chain([MatchRecord::fixture("Angleterre", "Championship", "X", "Y", 1, 0)])
            .collect();
        let engine = StatsEngine::new(index);

        let tree = engine.navigation_tree().unwrap();
        let countries: Vec<(&str, u64)> = tree.iter().map(|n| (n.label.as_str(), n.count)).collect();
        assert_eq!(countries, vec![("Angleterre", 4), ("France", 1)]);

        let england = &tree[0];
        let leagues: Vec<(&str, u64)> = england
            .children
            .iter()
            .map(|n| (n.label.as_str(), n.count))
            .collect();
        assert_eq!(leagues, vec![("Premier League", 3), ("Championship", 1)]);

        let championship = &england.children[1];
        assert_eq!(championship.children.len(), 2);
        assert!(championship.children.iter().all(|t| t.count == 1 && t.is_leaf()));
        assert!(tree.iter().all(|c| c.depth() == 3));
    }

    #[test]
    fn test_same_league_name_in_two_countries() {
        let index = InMemoryIndex::new(vec![
            MatchRecord::fixture("Angleterre", "Premier League", "A", "B", 1, 0),
            MatchRecord::fixture("Ecosse", "Premier League", "C", "D", 1, 0),
        ]);
        let engine = StatsEngine::new(index);

        let labels: Vec<String> = engine
            .teams("Ecosse", "Premier League")
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect();
        assert_eq!(labels, vec!["C", "D"]);
    }

    #[test]
    fn test_level_limit_applies_to_merged_teams() {
        let records = (0..6)
            .map(|i| MatchRecord::fixture("Portugal", "Liga", &format!("H{i}"), &format!("V{i}"), 1, 0))
            .collect();
        let config = EngineConfig {
            facet_limit: 4,
            ..EngineConfig::default()
        };
        let engine = StatsEngine::with_config(InMemoryIndex::new(records), config).unwrap();

        assert_eq!(engine.teams("Portugal", "Liga").unwrap().len(), 4);
    }

    #[test]
    fn test_team_counts_complete_past_facet_limit() {
        let engine = StatsEngine::new(crowded_league());
        let teams = engine.teams("Allemagne", "Bundesliga").unwrap();

        assert_eq!(teams.len(), 20);
        assert_eq!(teams[0], FacetCount::new("V", 43));
        assert_eq!(teams[1], FacetCount::new("H00", 4));
        // Outside the top 20 hosts, yet both sides counted
        assert_eq!(teams[2], FacetCount::new("Z", 3));

        let everyone = StatsEngine::with_config(crowded_league(), EngineConfig::exhaustive()).unwrap();
        let teams = everyone.teams("Allemagne", "Bundesliga").unwrap();
        assert_eq!(teams.len(), 24);
        assert_eq!(teams.last(), Some(&FacetCount::new("B2", 1)));
    }

    #[test]
    fn test_min_count_applies_to_merged_counts() {
        let config = EngineConfig {
            min_count: 3,
            ..EngineConfig::default()
        };
        let engine = StatsEngine::with_config(crowded_league(), config).unwrap();
        let labels: Vec<String> = engine
            .teams("Allemagne", "Bundesliga")
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect();
        // Z hosts once and visits twice
        assert_eq!(labels, vec!["V", "H00", "Z"]);
    }

    #[test]
    fn test_empty_corpus_has_empty_tree() {
        let engine = StatsEngine::new(InMemoryIndex::default());
        assert!(engine.navigation_tree().unwrap().is_empty());
        assert!(engine.countries().unwrap().is_empty());
    }
}
