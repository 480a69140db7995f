pub mod models {
    pub mod auth;
    pub mod listing;
    pub mod message;
    pub mod tournament;
}

pub mod dates;
pub mod error;
pub mod filter;
pub mod repository;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    auth::{LoginRequest, RegisterRequest, Session, User, UserRole},
    listing::{ListingCategory, ListingCondition, MarketListing},
    message::{Conversation, Message},
    tournament::{derive_schedule, Location, ScheduleDay, Tournament, TournamentStatus},
};

pub use filter::{
    city_facets, filter_tournaments, sort_listing, state_facets, text_matches, FacetEntry,
    FilterCriteria,
};
pub use repository::{MemoryStore, TournamentStore};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tournament_creation() {
        let tournament = Tournament {
            id: "t-1".to_string(),
            name: "Copa da Primavera".to_string(),
            club: "EC Pinheiros".to_string(),
            location: Location {
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
            },
            start_date: "2024-09-10".parse().unwrap(),
            end_date: "2024-09-12".parse().unwrap(),
            status: TournamentStatus::Open,
            participants_count: 32,
            schedule: Vec::new(),
            created_by: "user-1".to_string(),
            created_at: chrono::Utc::now(),
        };

        assert_eq!(tournament.name, "Copa da Primavera");
        assert_eq!(tournament.location.state, "SP");
        assert!(tournament.validate_fields().is_ok());
    }

    #[test]
    fn test_store_feeds_filter() {
        let tournament = Tournament {
            id: "t-1".to_string(),
            name: "Copa da Primavera".to_string(),
            club: "EC Pinheiros".to_string(),
            location: Location {
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
            },
            start_date: "2024-09-10".parse().unwrap(),
            end_date: "2024-09-12".parse().unwrap(),
            status: TournamentStatus::Open,
            participants_count: 32,
            schedule: Vec::new(),
            created_by: "user-1".to_string(),
            created_at: chrono::Utc::now(),
        };
        let store = MemoryStore::with_records(vec![tournament]).unwrap();

        let criteria = FilterCriteria {
            search: "primavera".to_string(),
            ..Default::default()
        };
        let result = filter_tournaments(store.list().unwrap(), &criteria, None);
        assert_eq!(result.len(), 1);
    }
}
