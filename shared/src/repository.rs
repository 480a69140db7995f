use crate::models::tournament::Tournament;
use crate::{Result, SharedError};
use std::cell::RefCell;

/// Storage contract for the tournament collection.
///
/// The collection is read and written wholesale: `put` replaces the record
/// with the same id or appends, `delete` removes by id. There are no partial
/// updates and no transactions; the backing store is single-writer browser
/// local storage (last-writer-wins across tabs).
///
/// Implementations must validate records at the boundary and surface
/// malformed data as `SharedError::DataIntegrity` rather than defaulting
/// fields silently.
pub trait TournamentStore {
    /// Reads the whole collection, in stored order.
    fn list(&self) -> Result<Vec<Tournament>>;

    fn get(&self, id: &str) -> Result<Option<Tournament>>;

    /// Inserts or replaces by id.
    fn put(&self, tournament: &Tournament) -> Result<()>;

    /// Removes by id; `NotFound` if no such record exists.
    fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory store used by unit tests, so filter and page logic can be
/// exercised without a browser storage emulation layer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Tournament>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Tournament>) -> Result<Self> {
        let store = Self::new();
        for record in &records {
            store.put(record)?;
        }
        Ok(store)
    }
}

impl TournamentStore for MemoryStore {
    fn list(&self) -> Result<Vec<Tournament>> {
        Ok(self.records.borrow().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Tournament>> {
        Ok(self.records.borrow().iter().find(|t| t.id == id).cloned())
    }

    fn put(&self, tournament: &Tournament) -> Result<()> {
        tournament.validate_fields()?;
        let mut records = self.records.borrow_mut();
        match records.iter_mut().find(|t| t.id == tournament.id) {
            Some(existing) => *existing = tournament.clone(),
            None => records.push(tournament.clone()),
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|t| t.id != id);
        if records.len() == before {
            return Err(SharedError::NotFound(format!("tournament {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tournament::{Location, TournamentStatus};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn tournament(id: &str) -> Tournament {
        Tournament {
            id: id.to_string(),
            name: "Copa Teste".to_string(),
            club: "AC Teste".to_string(),
            location: Location {
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
            },
            start_date: "2024-03-05".parse().unwrap(),
            end_date: "2024-03-07".parse().unwrap(),
            status: TournamentStatus::Open,
            participants_count: 8,
            schedule: Vec::new(),
            created_by: "user-1".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        store.put(&tournament("t-1")).unwrap();
        let fetched = store.get("t-1").unwrap().unwrap();
        assert_eq!(fetched.name, "Copa Teste");
        assert!(store.get("t-9").unwrap().is_none());
    }

    #[test]
    fn test_put_replaces_by_id() {
        let store = MemoryStore::new();
        store.put(&tournament("t-1")).unwrap();
        let mut updated = tournament("t-1");
        updated.status = TournamentStatus::Closed;
        store.put(&updated).unwrap();

        let records = store.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, TournamentStatus::Closed);
    }

    #[test]
    fn test_put_rejects_invalid_record() {
        let store = MemoryStore::new();
        let mut bad = tournament("t-1");
        bad.name = String::new();
        assert!(store.put(&bad).is_err());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        store.put(&tournament("t-1")).unwrap();
        store.delete("t-1").unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(
            store.delete("t-1"),
            Err(SharedError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store =
            MemoryStore::with_records(vec![tournament("t-1"), tournament("t-2")]).unwrap();
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t-1", "t-2"]);
    }
}
