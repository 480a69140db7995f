//! Pure filtering, ordering, and facet aggregation over the tournament
//! collection.
//!
//! Everything here is side-effect free: given the same records and criteria
//! the output is identical, so the listing pages can recompute on every
//! input change instead of caching.

use crate::models::tournament::{Tournament, TournamentStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional filter constraints applied to the tournament collection.
///
/// An empty string (or `None` for status) means "no constraint". Matching is
/// the conjunction of all non-empty constraints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub state: String,
    pub city: String,
    pub status: Option<TournamentStatus>,
    pub search: String,
}

impl FilterCriteria {
    /// Selects a state facet. Changing state always clears the selected
    /// city, since the city facet list is scoped to the state.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
        self.city.clear();
    }

    /// Number of active constraints, shown on the filter toggle.
    pub fn active_count(&self) -> u32 {
        let mut count = 0;
        if !self.state.is_empty() {
            count += 1;
        }
        if !self.city.is_empty() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if !self.search.is_empty() {
            count += 1;
        }
        count
    }

    /// Whether `tournament` satisfies every active constraint.
    pub fn matches(&self, tournament: &Tournament) -> bool {
        if !self.state.is_empty() && tournament.location.state != self.state {
            return false;
        }
        if !self.city.is_empty() && tournament.location.city != self.city {
            return false;
        }
        if let Some(status) = self.status {
            if tournament.status != status {
                return false;
            }
        }
        text_matches(
            &self.search,
            &[
                &tournament.name,
                &tournament.club,
                &tournament.location.city,
                &tournament.location.state,
            ],
        )
    }
}

/// Case-insensitive substring match against a set of fields. An empty search
/// matches everything. Shared with the marketplace search box.
pub fn text_matches(search: &str, fields: &[&str]) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Orders a listing in place: completed tournaments after all others, and
/// ascending by start date within each partition. The sort is stable, so
/// same-day records keep their stored order.
pub fn sort_listing(items: &mut [Tournament]) {
    items.sort_by(|a, b| {
        let a_completed = a.status == TournamentStatus::Completed;
        let b_completed = b.status == TournamentStatus::Completed;
        a_completed
            .cmp(&b_completed)
            .then(a.start_date.cmp(&b.start_date))
    });
}

/// Filters, orders, and optionally truncates the collection.
pub fn filter_tournaments(
    items: Vec<Tournament>,
    criteria: &FilterCriteria,
    limit: Option<usize>,
) -> Vec<Tournament> {
    let mut matched: Vec<Tournament> = items
        .into_iter()
        .filter(|t| criteria.matches(t))
        .collect();
    sort_listing(&mut matched);
    if let Some(limit) = limit {
        matched.truncate(limit);
    }
    matched
}

/// One entry of a derived facet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetEntry {
    pub value: String,
    pub count: usize,
}

fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetEntry> {
    // BTreeMap keeps the lexicographic key order the selects rely on.
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| FacetEntry {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Distinct states across the full collection, counted and sorted
/// lexicographically.
pub fn state_facets(items: &[Tournament]) -> Vec<FacetEntry> {
    count_values(items.iter().map(|t| t.location.state.as_str()))
}

/// Distinct cities within `state`, counted and sorted lexicographically.
/// With an empty `state`, counts cities across the whole collection.
pub fn city_facets(items: &[Tournament], state: &str) -> Vec<FacetEntry> {
    count_values(
        items
            .iter()
            .filter(|t| state.is_empty() || t.location.state == state)
            .map(|t| t.location.city.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tournament::Location;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_log::test;

    fn tournament(
        name: &str,
        status: TournamentStatus,
        date: &str,
        city: &str,
        state: &str,
    ) -> Tournament {
        Tournament {
            id: format!("t-{name}"),
            name: name.to_string(),
            club: format!("{name} FC"),
            location: Location {
                city: city.to_string(),
                state: state.to_string(),
            },
            start_date: date.parse().unwrap(),
            end_date: date.parse().unwrap(),
            status,
            participants_count: 16,
            schedule: Vec::new(),
            created_by: "user-1".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    fn copa_fixture() -> Vec<Tournament> {
        vec![
            tournament("Copa A", TournamentStatus::Completed, "2024-01-01", "SP", "SP"),
            tournament("Copa B", TournamentStatus::Open, "2024-02-01", "RJ", "RJ"),
        ]
    }

    fn names(items: &[Tournament]) -> Vec<&str> {
        items.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything_reordered() {
        let result = filter_tournaments(copa_fixture(), &FilterCriteria::default(), None);
        assert_eq!(names(&result), vec!["Copa B", "Copa A"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let criteria = FilterCriteria {
            search: "copa b".to_string(),
            ..Default::default()
        };
        let result = filter_tournaments(copa_fixture(), &criteria, None);
        assert_eq!(names(&result), vec!["Copa B"]);
    }

    #[test]
    fn test_search_covers_club_city_and_state() {
        let items = vec![tournament(
            "Torneio",
            TournamentStatus::Open,
            "2024-05-01",
            "Curitiba",
            "PR",
        )];
        for needle in ["torneio fc", "CURITIBA", "pr"] {
            let criteria = FilterCriteria {
                search: needle.to_string(),
                ..Default::default()
            };
            assert_eq!(
                filter_tournaments(items.clone(), &criteria, None).len(),
                1,
                "search {needle:?} should match"
            );
        }
    }

    #[test]
    fn test_constraints_are_conjunctive() {
        // State matches Copa A but status does not: conjunction drops it.
        let criteria = FilterCriteria {
            state: "SP".to_string(),
            status: Some(TournamentStatus::Open),
            ..Default::default()
        };
        assert!(filter_tournaments(copa_fixture(), &criteria, None).is_empty());
    }

    #[test]
    fn test_city_constraint_exact_match() {
        let mut criteria = FilterCriteria::default();
        criteria.city = "SP".to_string();
        let result = filter_tournaments(copa_fixture(), &criteria, None);
        assert_eq!(names(&result), vec!["Copa A"]);

        criteria.city = "sp".to_string();
        assert!(filter_tournaments(copa_fixture(), &criteria, None).is_empty());
    }

    #[test]
    fn test_completed_sorts_last_then_date_ascending() {
        let items = vec![
            tournament("C1", TournamentStatus::Completed, "2024-01-01", "SP", "SP"),
            tournament("O2", TournamentStatus::Open, "2024-06-01", "SP", "SP"),
            tournament("C2", TournamentStatus::Completed, "2024-03-01", "SP", "SP"),
            tournament("O1", TournamentStatus::Open, "2024-02-01", "SP", "SP"),
        ];
        let result = filter_tournaments(items, &FilterCriteria::default(), None);
        assert_eq!(names(&result), vec!["O1", "O2", "C1", "C2"]);
    }

    #[test]
    fn test_limit_truncates_after_sort() {
        let items = vec![
            tournament("C1", TournamentStatus::Completed, "2024-01-01", "SP", "SP"),
            tournament("O1", TournamentStatus::Open, "2024-02-01", "SP", "SP"),
            tournament("O2", TournamentStatus::Open, "2024-03-01", "SP", "SP"),
        ];
        let result = filter_tournaments(items, &FilterCriteria::default(), Some(2));
        assert_eq!(names(&result), vec!["O1", "O2"]);
    }

    #[test]
    fn test_set_state_resets_city() {
        let mut criteria = FilterCriteria {
            state: "SP".to_string(),
            city: "Santos".to_string(),
            ..Default::default()
        };
        criteria.set_state("RJ");
        assert_eq!(criteria.state, "RJ");
        assert!(criteria.city.is_empty());
    }

    #[test]
    fn test_active_count() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_count(), 0);
        criteria.state = "SP".to_string();
        criteria.status = Some(TournamentStatus::Open);
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn test_state_facets_counted_and_sorted() {
        let items = vec![
            tournament("A", TournamentStatus::Open, "2024-01-01", "Rio", "RJ"),
            tournament("B", TournamentStatus::Open, "2024-01-02", "Santos", "SP"),
            tournament("C", TournamentStatus::Open, "2024-01-03", "Sao Paulo", "SP"),
        ];
        let facets = state_facets(&items);
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].value, "RJ");
        assert_eq!(facets[0].count, 1);
        assert_eq!(facets[1].value, "SP");
        assert_eq!(facets[1].count, 2);
    }

    #[test]
    fn test_city_facets_scoped_to_state() {
        let items = vec![
            tournament("A", TournamentStatus::Open, "2024-01-01", "Rio", "RJ"),
            tournament("B", TournamentStatus::Open, "2024-01-02", "Santos", "SP"),
            tournament("C", TournamentStatus::Open, "2024-01-03", "Santos", "SP"),
        ];
        let facets = city_facets(&items, "SP");
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].value, "Santos");
        assert_eq!(facets[0].count, 2);

        // Empty state counts across the whole collection.
        assert_eq!(city_facets(&items, "").len(), 2);
    }

    fn arb_status() -> impl Strategy<Value = TournamentStatus> {
        prop_oneof![
            Just(TournamentStatus::Open),
            Just(TournamentStatus::Closed),
            Just(TournamentStatus::InProgress),
            Just(TournamentStatus::Completed),
        ]
    }

    fn arb_tournament() -> impl Strategy<Value = Tournament> {
        (
            "[a-z]{4,10}",
            arb_status(),
            0u32..730,
            prop_oneof![Just("SP"), Just("RJ"), Just("PR")],
        )
            .prop_map(|(name, status, day_offset, state)| {
                let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                let date = base + chrono::Days::new(u64::from(day_offset));
                tournament(
                    &name,
                    status,
                    &date.format("%Y-%m-%d").to_string(),
                    state,
                    state,
                )
            })
    }

    proptest! {
        #[test]
        fn prop_every_result_matches_all_constraints(
            items in prop::collection::vec(arb_tournament(), 0..20),
            state in prop_oneof![Just(""), Just("SP"), Just("RJ")],
            status in prop::option::of(arb_status()),
        ) {
            let criteria = FilterCriteria {
                state: state.to_string(),
                status,
                ..Default::default()
            };
            for t in filter_tournaments(items, &criteria, None) {
                prop_assert!(criteria.matches(&t));
            }
        }

        #[test]
        fn prop_non_completed_precede_completed(
            items in prop::collection::vec(arb_tournament(), 0..20),
        ) {
            let result = filter_tournaments(items, &FilterCriteria::default(), None);
            let first_completed = result
                .iter()
                .position(|t| t.status == TournamentStatus::Completed);
            if let Some(boundary) = first_completed {
                for t in &result[boundary..] {
                    prop_assert_eq!(t.status, TournamentStatus::Completed);
                }
            }
        }

        #[test]
        fn prop_limit_is_a_prefix_of_the_unlimited_result(
            items in prop::collection::vec(arb_tournament(), 0..20),
            limit in 0usize..10,
        ) {
            let criteria = FilterCriteria::default();
            let full = filter_tournaments(items.clone(), &criteria, None);
            let truncated = filter_tournaments(items, &criteria, Some(limit));
            prop_assert!(truncated.len() <= limit);
            prop_assert_eq!(&truncated[..], &full[..truncated.len()]);
        }
    }
}
