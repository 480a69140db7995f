//! Local-storage adapters.
//!
//! Collections live wholesale under the keys in [`crate::config`]. Records
//! pass through serde and then field validation on every read and write;
//! malformed stored data surfaces as `SharedError::DataIntegrity` instead of
//! being silently defaulted.

use crate::config;
use gloo::events::EventListener;
use gloo::utils::window;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Conversation, MarketListing, Message, Result, SharedError, Tournament, TournamentStore, User,
};

fn read_collection<T: DeserializeOwned>(key: &str) -> Result<Vec<T>> {
    LocalStorage::get::<Vec<T>>(key).or_else(|e| empty_or_error(key, e))
}

fn empty_or_error<T>(key: &str, err: StorageError) -> Result<Vec<T>> {
    match err {
        // An absent key is an empty collection, not an error.
        StorageError::KeyNotFound(_) => Ok(Vec::new()),
        StorageError::SerdeError(e) => Err(SharedError::DataIntegrity(format!("{key}: {e}"))),
        e => Err(SharedError::Storage(e.to_string())),
    }
}

fn write_collection<T: Serialize>(key: &str, items: &[T]) -> Result<()> {
    LocalStorage::set(key, items).map_err(|e| SharedError::Storage(e.to_string()))
}

/// Tournament store backed by browser local storage.
///
/// Whole-collection replace on every write; last writer wins across tabs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTournamentStore;

impl LocalTournamentStore {
    fn load(&self) -> Result<Vec<Tournament>> {
        check_integrity(read_collection(config::TOURNAMENTS_KEY)?)
    }
}

/// Rejects the whole collection when any stored record fails validation.
/// Reads never silently default malformed data.
fn check_integrity(records: Vec<Tournament>) -> Result<Vec<Tournament>> {
    for record in &records {
        record
            .validate_fields()
            .map_err(|e| SharedError::DataIntegrity(format!("tournament {}: {e}", record.id)))?;
    }
    Ok(records)
}

impl TournamentStore for LocalTournamentStore {
    fn list(&self) -> Result<Vec<Tournament>> {
        self.load()
    }

    fn get(&self, id: &str) -> Result<Option<Tournament>> {
        Ok(self.load()?.into_iter().find(|t| t.id == id))
    }

    fn put(&self, tournament: &Tournament) -> Result<()> {
        tournament.validate_fields()?;
        let mut records = self.load()?;
        match records.iter_mut().find(|t| t.id == tournament.id) {
            Some(existing) => *existing = tournament.clone(),
            None => records.push(tournament.clone()),
        }
        write_collection(config::TOURNAMENTS_KEY, &records)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|t| t.id != id);
        if records.len() == before {
            return Err(SharedError::NotFound(format!("tournament {id}")));
        }
        write_collection(config::TOURNAMENTS_KEY, &records)
    }
}

// --- users -----------------------------------------------------------------

pub fn load_users() -> Result<Vec<User>> {
    read_collection(config::USERS_KEY)
}

pub fn save_users(users: &[User]) -> Result<()> {
    write_collection(config::USERS_KEY, users)
}

pub fn find_user(id: &str) -> Result<Option<User>> {
    Ok(load_users()?.into_iter().find(|u| u.id == id))
}

// --- marketplace -----------------------------------------------------------

pub fn load_listings() -> Result<Vec<MarketListing>> {
    let listings: Vec<MarketListing> = read_collection(config::LISTINGS_KEY)?;
    for listing in &listings {
        listing
            .validate_fields()
            .map_err(|e| SharedError::DataIntegrity(format!("listing {}: {e}", listing.id)))?;
    }
    Ok(listings)
}

pub fn put_listing(listing: &MarketListing) -> Result<()> {
    listing.validate_fields()?;
    let mut listings = load_listings()?;
    listings.push(listing.clone());
    write_collection(config::LISTINGS_KEY, &listings)
}

// --- messaging -------------------------------------------------------------

pub fn conversations_for(user_id: &str) -> Result<Vec<Conversation>> {
    Ok(read_collection::<Conversation>(config::CONVERSATIONS_KEY)?
        .into_iter()
        .filter(|c| c.involves(user_id))
        .collect())
}

/// Finds the conversation between two users, creating it when absent.
pub fn find_or_create_conversation(user_a: &str, user_b: &str) -> Result<Conversation> {
    let mut all: Vec<Conversation> = read_collection(config::CONVERSATIONS_KEY)?;
    if let Some(existing) = all
        .iter()
        .find(|c| c.involves(user_a) && c.involves(user_b))
    {
        return Ok(existing.clone());
    }
    let conversation = Conversation {
        id: uuid::Uuid::new_v4().to_string(),
        participants: [user_a.to_string(), user_b.to_string()],
        messages: Vec::new(),
    };
    all.push(conversation.clone());
    write_collection(config::CONVERSATIONS_KEY, &all)?;
    Ok(conversation)
}

/// Appends a message and persists the whole conversation collection.
pub fn append_message(conversation_id: &str, message: Message) -> Result<Conversation> {
    let mut all: Vec<Conversation> = read_collection(config::CONVERSATIONS_KEY)?;
    let conversation = all
        .iter_mut()
        .find(|c| c.id == conversation_id)
        .ok_or_else(|| SharedError::NotFound(format!("conversation {conversation_id}")))?;
    conversation.push_message(message)?;
    let updated = conversation.clone();
    write_collection(config::CONVERSATIONS_KEY, &all)?;
    Ok(updated)
}

// --- cross-tab refresh -----------------------------------------------------

/// Subscribes to the browser `storage` event, which fires when another tab
/// writes local storage. The only cross-tab guarantee: derived read-only
/// state is refreshed; concurrent writes are last-writer-wins.
pub fn on_storage_change<F: Fn() + 'static>(callback: F) -> EventListener {
    EventListener::new(&window(), "storage", move |_| callback())
}

// --- demo seed -------------------------------------------------------------

/// Seeds demo tournaments and listings on first run so the listing pages are
/// not empty. Never overwrites existing collections.
pub fn ensure_seed_data() {
    if LocalStorage::get::<serde_json::Value>(config::TOURNAMENTS_KEY).is_err() {
        info!("Seeding demo tournaments");
        let _ = write_collection(config::TOURNAMENTS_KEY, &seed::demo_tournaments());
    }
    if LocalStorage::get::<serde_json::Value>(config::LISTINGS_KEY).is_err() {
        info!("Seeding demo listings");
        let _ = write_collection(config::LISTINGS_KEY, &seed::demo_listings());
    }
}

pub mod seed {
    use chrono::{Days, Utc};
    use shared::{
        derive_schedule, ListingCategory, ListingCondition, Location, MarketListing, Tournament,
        TournamentStatus,
    };

    fn tournament(
        id: &str,
        name: &str,
        club: &str,
        city: &str,
        state: &str,
        start_in_days: i64,
        duration_days: u64,
        status: TournamentStatus,
        participants_count: u32,
    ) -> Tournament {
        let today = shared::dates::today_utc();
        let start_date = if start_in_days >= 0 {
            today + Days::new(start_in_days as u64)
        } else {
            today - Days::new(start_in_days.unsigned_abs())
        };
        let end_date = start_date + Days::new(duration_days);
        Tournament {
            id: format!("seed-{id}"),
            name: name.to_string(),
            club: club.to_string(),
            location: Location {
                city: city.to_string(),
                state: state.to_string(),
            },
            start_date,
            end_date,
            status,
            participants_count,
            schedule: derive_schedule(start_date, end_date).unwrap_or_default(),
            created_by: "seed".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn demo_tournaments() -> Vec<Tournament> {
        vec![
            tournament(
                "copa-paulista",
                "Copa Paulista Sub-17",
                "AC Ipiranga",
                "Sao Paulo",
                "SP",
                14,
                2,
                TournamentStatus::Open,
                24,
            ),
            tournament(
                "torneio-litoral",
                "Torneio do Litoral",
                "EC Santos",
                "Santos",
                "SP",
                30,
                1,
                TournamentStatus::Open,
                16,
            ),
            tournament(
                "copa-carioca",
                "Copa Carioca de Base",
                "Flumar FC",
                "Rio de Janeiro",
                "RJ",
                7,
                2,
                TournamentStatus::Closed,
                32,
            ),
            tournament(
                "circuito-sul",
                "Circuito Sul de Futsal",
                "AA Curitibana",
                "Curitiba",
                "PR",
                0,
                3,
                TournamentStatus::InProgress,
                20,
            ),
            tournament(
                "copa-verao",
                "Copa de Verao",
                "EC Santos",
                "Santos",
                "SP",
                -45,
                2,
                TournamentStatus::Completed,
                28,
            ),
        ]
    }

    pub fn demo_listings() -> Vec<MarketListing> {
        vec![
            MarketListing {
                id: "seed-listing-1".to_string(),
                title: "Chuteira society tam 42".to_string(),
                category: ListingCategory::Footwear,
                condition: ListingCondition::Used,
                price_cents: 12000,
                seller: "Marina Costa".to_string(),
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
                created_at: Utc::now(),
            },
            MarketListing {
                id: "seed-listing-2".to_string(),
                title: "Kit uniforme completo (10 pecas)".to_string(),
                category: ListingCategory::Apparel,
                condition: ListingCondition::New,
                price_cents: 45000,
                seller: "AC Ipiranga".to_string(),
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
                created_at: Utc::now(),
            },
            MarketListing {
                id: "seed-listing-3".to_string(),
                title: "Bola oficial futsal".to_string(),
                category: ListingCategory::Equipment,
                condition: ListingCondition::New,
                price_cents: 8900,
                seller: "AA Curitibana".to_string(),
                city: "Curitiba".to_string(),
                state: "PR".to_string(),
                created_at: Utc::now(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{check_integrity, empty_or_error, seed};
    use gloo_storage::errors::StorageError;
    use pretty_assertions::assert_eq;
    use shared::{SharedError, Tournament, TournamentStatus};

    #[test]
    fn test_missing_key_reads_as_empty_collection() {
        let result: Vec<Tournament> =
            empty_or_error("k", StorageError::KeyNotFound("k".to_string())).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unparseable_stored_json_is_a_data_integrity_error() {
        let serde_err = serde_json::from_str::<Vec<Tournament>>("[{\"id\":42}]").unwrap_err();
        let result: Result<Vec<Tournament>, _> =
            empty_or_error("matchpoint.tournaments", StorageError::SerdeError(serde_err));
        match result {
            Err(SharedError::DataIntegrity(msg)) => {
                assert!(msg.starts_with("matchpoint.tournaments:"), "{msg}");
            }
            other => panic!("expected DataIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_stored_record_fails_the_read() {
        // Parses fine, but the empty name fails field validation.
        let raw = r#"[{
            "id": "t-bad",
            "name": "",
            "club": "AC Teste",
            "location": {"city": "Santos", "state": "SP"},
            "start_date": "2024-03-05",
            "end_date": "2024-03-07",
            "status": "open",
            "participants_count": 8,
            "created_by": "user-1",
            "created_at": "2024-01-01T00:00:00Z"
        }]"#;
        let records: Vec<Tournament> = serde_json::from_str(raw).unwrap();
        match check_integrity(records) {
            Err(SharedError::DataIntegrity(msg)) => {
                assert!(msg.contains("t-bad"), "{msg}");
            }
            other => panic!("expected DataIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_records_pass_the_integrity_check() {
        let records = check_integrity(seed::demo_tournaments()).unwrap();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_demo_tournaments_are_valid() {
        let tournaments = seed::demo_tournaments();
        assert_eq!(tournaments.len(), 5);
        for t in &tournaments {
            t.validate_fields().expect("seed tournament must validate");
            assert_eq!(t.schedule.is_empty(), false, "{} has no schedule", t.id);
        }
        assert!(tournaments
            .iter()
            .any(|t| t.status == TournamentStatus::Completed));
    }

    #[test]
    fn test_demo_listings_are_valid() {
        for listing in seed::demo_listings() {
            listing.validate_fields().expect("seed listing must validate");
        }
    }
}
