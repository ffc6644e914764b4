//! Event queries

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use shared::Record;
use shared::models::Event;
use store_client::{OrderBy, Query, StoreResult, TableStore, TableStoreExt};

use super::timestamp;

/// Past events shown when no limit is given
pub const DEFAULT_PAST_LIMIT: usize = 10;

/// Optional filters accepted by the events list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventFilter {
    /// Only `Some(true)` narrows the list
    pub featured: Option<bool>,
    pub category: Option<String>,
}

impl EventFilter {
    fn apply(&self, mut query: Query) -> Query {
        if self.featured == Some(true) {
            query = query.eq("is_featured", true);
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            query = query.eq("category", category);
        }
        query
    }
}

/// Events on or after `now`, soonest first
pub async fn upcoming(store: &dyn TableStore, now: DateTime<Utc>) -> StoreResult<Vec<Event>> {
    let query = Query::of::<Event>()
        .gte("date", timestamp(now))
        .order("date", OrderBy::asc());
    store.fetch(&query).await
}

/// At most `limit` events before `now`, most recent first
pub async fn past(
    store: &dyn TableStore,
    now: DateTime<Utc>,
    limit: usize,
) -> StoreResult<Vec<Event>> {
    let query = Query::of::<Event>()
        .lt("date", timestamp(now))
        .order("date", OrderBy::desc())
        .limit(limit);
    store.fetch(&query).await
}

/// Featured events, latest first
pub async fn featured(store: &dyn TableStore) -> StoreResult<Vec<Event>> {
    let query = Query::of::<Event>()
        .eq("is_featured", true)
        .order("date", OrderBy::desc());
    store.fetch(&query).await
}

/// Rows exactly as stored, soonest first
pub async fn list(store: &dyn TableStore, filter: &EventFilter) -> StoreResult<Vec<Value>> {
    let query = filter
        .apply(Query::of::<Event>())
        .order("date", OrderBy::asc());
    store.select(&query).await
}

pub async fn count(store: &dyn TableStore, filter: &EventFilter) -> StoreResult<u64> {
    store.count_rows(&filter.apply(Query::of::<Event>())).await
}

/// Insert a row as given and return it as stored
pub async fn create(store: &dyn TableStore, row: Value) -> StoreResult<Value> {
    store.insert_returning(Event::TABLE, row).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures;
    use store_client::MemoryStore;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.seed_rows(
            Event::TABLE,
            vec![
                fixtures::event("pongal", "2025-01-14T10:00:00Z", true, Some("Festival")),
                fixtures::event("kolam", "2025-01-10T09:00:00Z", false, Some("Competition")),
                fixtures::event("drama", "2025-02-20T18:00:00Z", false, Some("Workshop")),
                fixtures::event("now", "2025-01-12T00:00:00Z", true, Some("Workshop")),
                fixtures::event("old", "2024-11-01T09:00:00Z", false, None),
            ],
        );
        store
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    fn row_ids(rows: &[Value]) -> Vec<&str> {
        rows.iter().filter_map(|r| r["id"].as_str()).collect()
    }

    #[tokio::test]
    async fn test_upcoming_includes_now_and_sorts_ascending() {
        let store = seeded();
        let now = at("2025-01-12T00:00:00Z");
        let events = upcoming(&store, now).await.unwrap();
        assert_eq!(ids(&events), vec!["now", "pongal", "drama"]);
        assert!(events.iter().all(|e| e.is_upcoming(now)));
    }

    #[tokio::test]
    async fn test_past_is_strict_descending_and_limited() {
        let store = seeded();
        let now = at("2025-01-12T00:00:00Z");
        let events = past(&store, now, 10).await.unwrap();
        assert_eq!(ids(&events), vec!["kolam", "old"]);

        let events = past(&store, now, 1).await.unwrap();
        assert_eq!(ids(&events), vec!["kolam"]);
    }

    #[tokio::test]
    async fn test_featured() {
        let store = seeded();
        let events = featured(&store).await.unwrap();
        assert_eq!(ids(&events), vec!["pongal", "now"]);
    }

    #[tokio::test]
    async fn test_list_filters_only_on_featured_true() {
        let store = seeded();
        let not_featured = EventFilter {
            featured: Some(false),
            category: None,
        };
        assert_eq!(list(&store, &not_featured).await.unwrap().len(), 5);

        let workshops = EventFilter {
            featured: Some(true),
            category: Some("Workshop".into()),
        };
        assert_eq!(row_ids(&list(&store, &workshops).await.unwrap()), vec!["now"]);
        assert_eq!(count(&store, &workshops).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_table_is_empty_list() {
        let store = MemoryStore::new();
        let now = at("2025-01-12T00:00:00Z");
        assert!(upcoming(&store, now).await.unwrap().is_empty());
        assert!(past(&store, now, DEFAULT_PAST_LIMIT).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let store = MemoryStore::new();
        let row = create(&store, serde_json::json!({"title": "Silambam Workshop"}))
            .await
            .unwrap();
        assert_eq!(row["title"], "Silambam Workshop");
        assert!(row["id"].is_string());
    }

    #[tokio::test]
    async fn test_list_keeps_rows_as_stored() {
        let store = MemoryStore::new();
        store.seed_rows(
            Event::TABLE,
            vec![serde_json::json!({
                "id": "thai",
                "title": "Thai Pongal",
                "date": "2025-01-14",
                "registration_link": "https://forms.example.org/pongal"
            })],
        );
        let rows = list(&store, &EventFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["date"], "2025-01-14");
        assert_eq!(rows[0]["registration_link"], "https://forms.example.org/pongal");
    }
}
