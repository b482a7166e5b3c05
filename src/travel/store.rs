//! Travel Request Storage
//! Mission: Persist submitted travel requests for admin review

use crate::db::{Database, StoreError};
use crate::models::{NewTravelRequest, TravelRequest};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;
use uuid::Uuid;

const SELECT_COLUMNS: &str =
    "SELECT id, destination, interests, num_travelers, cost_per_person, email FROM travel_requests";

/// Travel request storage on the shared database
#[derive(Clone)]
pub struct TravelRequestStore {
    db: Database,
}

impl TravelRequestStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn row_to_request(row: &Row<'_>) -> rusqlite::Result<TravelRequest> {
        Ok(TravelRequest {
            id: row.get(0)?,
            destination: row.get(1)?,
            interests: row.get(2)?,
            num_travelers: row.get(3)?,
            cost_per_person: row.get(4)?,
            email: row.get(5)?,
        })
    }

    /// Store a new request, assigning it a fresh id
    pub fn insert(&self, request: NewTravelRequest) -> Result<TravelRequest, StoreError> {
        let record = request.into_record(Uuid::new_v4().to_string());
        let created_at = Utc::now().to_rfc3339();

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO travel_requests
                 (id, destination, interests, num_travelers, cost_per_person, email, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.destination,
                    record.interests,
                    record.num_travelers,
                    record.cost_per_person,
                    record.email,
                    created_at,
                ],
            )
        })?;

        info!("Saved travel request {}", record.id);
        Ok(record)
    }

    /// All requests, oldest first
    pub fn find_all(&self) -> Result<Vec<TravelRequest>, StoreError> {
        self.db.with_conn(|conn| -> Result<Vec<TravelRequest>, StoreError> {
            let mut stmt = conn.prepare(&format!("{} ORDER BY rowid ASC", SELECT_COLUMNS))?;
            let requests = stmt
                .query_map([], Self::row_to_request)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(requests)
        })
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<TravelRequest>, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                Self::row_to_request,
            )
            .optional()
            .map_err(StoreError::from)
        })
    }

    /// Delete by id, returning the removed record (None if it did not exist)
    pub fn delete_by_id(&self, id: &str) -> Result<Option<TravelRequest>, StoreError> {
        let deleted = self.db.with_conn(|conn| {
            conn.query_row(
                "DELETE FROM travel_requests WHERE id = ?1
                 RETURNING id, destination, interests, num_travelers, cost_per_person, email",
                params![id],
                Self::row_to_request,
            )
            .optional()
        })?;

        if deleted.is_some() {
            info!("Deleted travel request {}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> TravelRequestStore {
        TravelRequestStore::new(Database::open(":memory:").unwrap())
    }

    fn sample(destination: &str) -> NewTravelRequest {
        NewTravelRequest {
            destination: Some(destination.to_string()),
            interests: Some("hiking".to_string()),
            num_travelers: Some(3.0),
            cost_per_person: Some(1200.0),
            email: Some("traveler@example.com".to_string()),
        }
    }

    #[test]
    fn test_insert_and_find() {
        let store = create_test_store();
        let saved = store.insert(sample("Kyoto")).unwrap();

        let found = store.find_by_id(&saved.id).unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.destination.as_deref(), Some("Kyoto"));
    }

    #[test]
    fn test_find_all_in_insertion_order() {
        let store = create_test_store();
        assert!(store.find_all().unwrap().is_empty());

        store.insert(sample("Kyoto")).unwrap();
        store.insert(sample("Lima")).unwrap();
        store.insert(NewTravelRequest::default()).unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].destination.as_deref(), Some("Kyoto"));
        assert_eq!(all[1].destination.as_deref(), Some("Lima"));
        assert!(all[2].destination.is_none());
    }

    #[test]
    fn test_delete_returns_record_and_removes_it() {
        let store = create_test_store();
        let keep = store.insert(sample("Kyoto")).unwrap();
        let gone = store.insert(sample("Lima")).unwrap();

        let deleted = store.delete_by_id(&gone.id).unwrap().unwrap();
        assert_eq!(deleted, gone);

        let remaining = store.find_all().unwrap();
        assert_eq!(remaining, vec![keep]);
        assert!(store.find_by_id(&gone.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_is_none() {
        let store = create_test_store();
        assert!(store.delete_by_id("does-not-exist").unwrap().is_none());

        let saved = store.insert(sample("Kyoto")).unwrap();
        store.delete_by_id(&saved.id).unwrap();
        // Second delete of the same id finds nothing
        assert!(store.delete_by_id(&saved.id).unwrap().is_none());
    }
}
