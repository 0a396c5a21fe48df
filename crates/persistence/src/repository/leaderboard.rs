//! Leaderboard query: ranked, paged listing of entries
//!
//! Ranking is `countries DESC, time ASC`, with `id ASC` as the final
//! tie-break so consecutive pages never overlap. `has_more` comes from a
//! single-row probe past the current page rather than a `COUNT(*)`.
//!
//! The page fetch and the probe are two separate reads; a write landing
//! between them can leave `has_more` stale for that response.

use crate::repository::Entry;
use crate::{DbError, DbResult};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Fixed number of entries per page
pub const PAGE_SIZE: i64 = 10;

/// One page of ranked entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPage {
    pub entries: Vec<Entry>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Read-only query service over the leaderboard table
pub struct LeaderboardQuery<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LeaderboardQuery<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch page `page` (zero-based) and whether another page follows it
    pub async fn list_page(&self, page: i64) -> DbResult<EntryPage> {
        let (offset, next_offset) = page_offsets(page)?;

        let entries = sqlx::query_as::<_, Entry>(
            r#"SELECT id, name, country, countries, time FROM leaderboard
               ORDER BY countries DESC, time ASC, id ASC
               LIMIT ?1 OFFSET ?2"#,
        )
        .bind(PAGE_SIZE)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        let probe: Option<(i64,)> = sqlx::query_as(
            r#"SELECT id FROM leaderboard
               ORDER BY countries DESC, time ASC, id ASC
               LIMIT 1 OFFSET ?1"#,
        )
        .bind(next_offset)
        .fetch_optional(self.pool)
        .await?;

        Ok(EntryPage {
            entries,
            has_more: probe.is_some(),
        })
    }
}

/// Row offsets of the requested page and of the first row after it
fn page_offsets(page: i64) -> DbResult<(i64, i64)> {
    if page < 0 {
        return Err(DbError::Validation(format!(
            "Page must be a non-negative integer, got {page}"
        )));
    }

    page.checked_add(1)
        .and_then(|next| next.checked_mul(PAGE_SIZE))
        .map(|next_offset| (next_offset - PAGE_SIZE, next_offset))
        .ok_or_else(|| DbError::Validation(format!("Page {page} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{EntryFields, EntryRepository};
    use crate::Database;

    async fn seed(db: &Database, rows: &[(&str, i64, &str)]) {
        let repo = EntryRepository::new(db.pool());
        for (name, countries, time) in rows {
            repo.create(EntryFields {
                name: name.to_string(),
                country: "Chile".to_string(),
                countries_visited: *countries,
                time: time.to_string(),
            })
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_fifteen_entries_span_two_pages() {
        let db = Database::in_memory().await.unwrap();
        let rows: Vec<(String, i64)> = (1..=15).map(|i| (format!("player{i}"), i)).collect();
        let rows: Vec<(&str, i64, &str)> = rows
            .iter()
            .map(|(name, c)| (name.as_str(), *c, "01:00:00"))
            .collect();
        seed(&db, &rows).await;

        let query = LeaderboardQuery::new(db.pool());

        let first = query.list_page(0).await.unwrap();
        let scores: Vec<i64> = first.entries.iter().map(|e| e.countries_visited).collect();
        assert_eq!(scores, (6..=15).rev().collect::<Vec<_>>());
        assert!(first.has_more);

        let second = query.list_page(1).await.unwrap();
        let scores: Vec<i64> = second.entries.iter().map(|e| e.countries_visited).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
        assert!(!second.has_more);

        let beyond = query.list_page(2).await.unwrap();
        assert!(beyond.entries.is_empty());
        assert!(!beyond.has_more);
    }

    #[tokio::test]
    async fn test_ties_broken_by_lower_time() {
        let db = Database::in_memory().await.unwrap();
        seed(
            &db,
            &[
                ("slow", 30, "02:00:00"),
                ("best", 40, "05:00:00"),
                ("fast", 30, "01:00:00"),
                ("mid", 30, "01:30:00"),
            ],
        )
        .await;

        let page = LeaderboardQuery::new(db.pool()).list_page(0).await.unwrap();
        let names: Vec<&str> = page.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["best", "fast", "mid", "slow"]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_exactly_one_full_page_has_no_more() {
        let db = Database::in_memory().await.unwrap();
        let rows: Vec<(&str, i64, &str)> = (0..10).map(|i| ("p", i, "00:00:01")).collect();
        seed(&db, &rows).await;

        let query = LeaderboardQuery::new(db.pool());
        let page = query.list_page(0).await.unwrap();
        assert_eq!(page.entries.len(), 10);
        assert!(!page.has_more);

        seed(&db, &[("late", 0, "00:00:02")]).await;
        let page = query.list_page(0).await.unwrap();
        assert!(page.has_more);
        assert_eq!(query.list_page(1).await.unwrap().entries[0].name, "late");
    }

    #[tokio::test]
    async fn test_negative_page_is_rejected() {
        let db = Database::in_memory().await.unwrap();
        let result = LeaderboardQuery::new(db.pool()).list_page(-1).await;
        assert!(matches!(result, Err(DbError::Validation(_))));
    }

    #[test]
    fn test_page_offsets() {
        assert_eq!(page_offsets(0).unwrap(), (0, 10));
        assert_eq!(page_offsets(3).unwrap(), (30, 40));
        assert!(matches!(page_offsets(i64::MAX), Err(DbError::Validation(_))));
    }

    #[test]
    fn test_page_wire_shape() {
        let page = EntryPage {
            entries: vec![],
            has_more: true,
        };
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            serde_json::json!({ "entries": [], "hasMore": true })
        );
    }
}
