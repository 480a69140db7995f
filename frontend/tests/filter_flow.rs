//! Host-target tests for the listing-page data path: repository reads feeding
//! the shared filter evaluator, exactly as the tournaments page wires them.

#![cfg(not(target_arch = "wasm32"))]

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shared::{
    city_facets, filter_tournaments, state_facets, FilterCriteria, Location, MemoryStore,
    Tournament, TournamentStatus, TournamentStore,
};

fn tournament(id: &str, name: &str, city: &str, state: &str, start: &str, status: TournamentStatus) -> Tournament {
    Tournament {
        id: id.to_string(),
        name: name.to_string(),
        club: "EC Teste".to_string(),
        location: Location {
            city: city.to_string(),
            state: state.to_string(),
        },
        start_date: start.parse::<NaiveDate>().unwrap(),
        end_date: start.parse::<NaiveDate>().unwrap(),
        status,
        participants_count: 16,
        schedule: Vec::new(),
        created_by: "club-1".to_string(),
        created_at: "2024-01-10T10:00:00Z".parse().unwrap(),
    }
}

fn seeded_store() -> MemoryStore {
    MemoryStore::with_records(vec![
        tournament("t-1", "Copa Paulista", "Sao Paulo", "SP", "2024-05-10", TournamentStatus::Open),
        tournament("t-2", "Torneio do Litoral", "Santos", "SP", "2024-04-01", TournamentStatus::Closed),
        tournament("t-3", "Copa Carioca", "Rio de Janeiro", "RJ", "2024-03-15", TournamentStatus::Open),
        tournament("t-4", "Copa de Verao", "Santos", "SP", "2024-01-05", TournamentStatus::Completed),
    ])
    .unwrap()
}

#[test]
fn default_view_sorts_by_date_with_completed_last() {
    let store = seeded_store();
    let visible = filter_tournaments(store.list().unwrap(), &FilterCriteria::default(), None);

    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-3", "t-2", "t-1", "t-4"]);
}

#[test]
fn state_filter_narrows_results_and_city_facets() {
    let store = seeded_store();
    let items = store.list().unwrap();

    let mut criteria = FilterCriteria::default();
    criteria.set_state("SP");
    let visible = filter_tournaments(items.clone(), &criteria, None);
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|t| t.location.state == "SP"));

    let cities = city_facets(&items, "SP");
    let names: Vec<&str> = cities.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(names, vec!["Santos", "Sao Paulo"]);
    assert_eq!(cities[0].count, 2);
}

#[test]
fn state_facets_cover_whole_collection() {
    let store = seeded_store();
    let facets = state_facets(&store.list().unwrap());
    let pairs: Vec<(&str, usize)> = facets.iter().map(|f| (f.value.as_str(), f.count)).collect();
    assert_eq!(pairs, vec![("RJ", 1), ("SP", 3)]);
}

#[test]
fn search_and_status_combine_conjunctively() {
    let store = seeded_store();
    let criteria = FilterCriteria {
        search: "copa".to_string(),
        status: Some(TournamentStatus::Open),
        ..Default::default()
    };
    let visible = filter_tournaments(store.list().unwrap(), &criteria, None);
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-3", "t-1"]);
}

#[test]
fn featured_strip_is_a_prefix_of_the_full_listing() {
    let store = seeded_store();
    let items = store.list().unwrap();
    let all = filter_tournaments(items.clone(), &FilterCriteria::default(), None);
    let featured = filter_tournaments(items, &FilterCriteria::default(), Some(2));
    assert_eq!(featured.as_slice(), &all[..2]);
}

#[test]
fn deleting_a_record_removes_it_from_the_view() {
    let store = seeded_store();
    store.delete("t-2").unwrap();
    let visible = filter_tournaments(store.list().unwrap(), &FilterCriteria::default(), None);
    assert!(visible.iter().all(|t| t.id != "t-2"));
    assert_eq!(visible.len(), 3);
}
