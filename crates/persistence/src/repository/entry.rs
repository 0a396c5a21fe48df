//! Entry repository: CRUD for single leaderboard records

use crate::{DbError, DbResult};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

/// A persisted leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub country: String,
    /// Number of countries visited; the primary ranking score
    #[serde(rename = "countries")]
    #[sqlx(rename = "countries")]
    pub countries_visited: i64,
    /// Opaque, caller-encoded duration; ranked lexically
    pub time: String,
}

/// The mutable fields of an entry, as supplied on create and update.
///
/// An `id` in the request body is not part of this type and is dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub name: String,
    pub country: String,
    #[serde(rename = "countries")]
    pub countries_visited: i64,
    pub time: String,
}

impl EntryFields {
    pub fn into_entry(self, id: i64) -> Entry {
        Entry {
            id,
            name: self.name,
            country: self.country,
            countries_visited: self.countries_visited,
            time: self.time,
        }
    }
}

/// Repository for leaderboard entries, addressed by integer primary key
pub struct EntryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new entry; storage assigns the id
    pub async fn create(&self, fields: EntryFields) -> DbResult<Entry> {
        let result = sqlx::query(
            "INSERT INTO leaderboard (name, country, countries, time) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&fields.name)
        .bind(&fields.country)
        .bind(fields.countries_visited)
        .bind(&fields.time)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Entry created");
        Ok(fields.into_entry(id))
    }

    /// Fetch a single entry by id
    pub async fn get(&self, id: i64) -> DbResult<Entry> {
        sqlx::query_as::<_, Entry>(
            "SELECT id, name, country, countries, time FROM leaderboard WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound(id))
    }

    /// Check whether a row with this id exists
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM leaderboard WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Replace every mutable field of an existing entry
    pub async fn update(&self, id: i64, fields: EntryFields) -> DbResult<Entry> {
        if !self.exists(id).await? {
            return Err(DbError::NotFound(id));
        }

        let result = sqlx::query(
            "UPDATE leaderboard SET name = ?1, country = ?2, countries = ?3, time = ?4 WHERE id = ?5",
        )
        .bind(&fields.name)
        .bind(&fields.country)
        .bind(fields.countries_visited)
        .bind(&fields.time)
        .bind(id)
        .execute(self.pool)
        .await?;

        // Deleted between the existence check and the write
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(id));
        }

        debug!(id, "Entry updated");
        Ok(fields.into_entry(id))
    }

    /// Delete an entry, returning it as it was before removal
    pub async fn delete(&self, id: i64) -> DbResult<Entry> {
        let entry = self.get(id).await?;

        let result = sqlx::query("DELETE FROM leaderboard WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(id));
        }

        debug!(id, "Entry deleted");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn fields(name: &str, countries: i64, time: &str) -> EntryFields {
        EntryFields {
            name: name.to_string(),
            country: "Norway".to_string(),
            countries_visited: countries,
            time: time.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_entry() {
        let db = Database::in_memory().await.unwrap();
        let repo = EntryRepository::new(db.pool());

        let created = repo.create(fields("Ann", 42, "12:34:00")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Ann");
        assert_eq!(created.countries_visited, 42);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let db = Database::in_memory().await.unwrap();
        let repo = EntryRepository::new(db.pool());

        assert!(matches!(repo.get(999).await, Err(DbError::NotFound(999))));
        assert!(matches!(
            repo.update(999, fields("Bob", 1, "00:01:00")).await,
            Err(DbError::NotFound(999))
        ));
        assert!(matches!(repo.delete(999).await, Err(DbError::NotFound(999))));
        assert!(!repo.exists(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        let repo = EntryRepository::new(db.pool());

        let created = repo.create(fields("Ann", 42, "12:34:00")).await.unwrap();
        let replacement = EntryFields {
            name: "Annie".to_string(),
            country: "Sweden".to_string(),
            countries_visited: 50,
            time: "11:00:00".to_string(),
        };

        let first = repo.update(created.id, replacement.clone()).await.unwrap();
        let after_first = repo.get(created.id).await.unwrap();
        let second = repo.update(created.id, replacement).await.unwrap();
        let after_second = repo.get(created.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(after_first, after_second);
        assert_eq!(after_second.id, created.id);
        assert_eq!(after_second.country, "Sweden");
        assert_eq!(after_second.countries_visited, 50);
    }

    #[tokio::test]
    async fn test_delete_returns_row_and_only_once() {
        let db = Database::in_memory().await.unwrap();
        let repo = EntryRepository::new(db.pool());

        let created = repo.create(fields("Ann", 42, "12:34:00")).await.unwrap();
        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted, created);

        assert!(matches!(
            repo.delete(created.id).await,
            Err(DbError::NotFound(_))
        ));
        assert!(matches!(repo.get(created.id).await, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let db = Database::in_memory().await.unwrap();
        let repo = EntryRepository::new(db.pool());

        let first = repo.create(fields("Ann", 1, "a")).await.unwrap();
        let second = repo.create(fields("Bob", 2, "b")).await.unwrap();
        repo.delete(second.id).await.unwrap();

        let third = repo.create(fields("Cid", 3, "c")).await.unwrap();
        assert!(third.id > second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = fields("Ann", 42, "12:34:00").into_entry(7);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Ann",
                "country": "Norway",
                "countries": 42,
                "time": "12:34:00",
            })
        );
    }

    #[test]
    fn test_fields_ignore_body_id() {
        let parsed: EntryFields = serde_json::from_str(
            r#"{"id":99,"name":"Ann","country":"Norway","countries":42,"time":"12:34:00"}"#,
        )
        .unwrap();
        assert_eq!(parsed, fields("Ann", 42, "12:34:00"));
    }
}
