//! Keepalive ping
//!
//! Touches the store so the hosted backend does not idle out.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::Record;
use shared::models::{Event, KeepaliveMarker};
use store_client::{Query, StoreResult, TableStore, TableStoreExt};

/// What a ping does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepaliveMode {
    /// Write `{id: 1, last_ping: now}` to the marker table
    #[default]
    Upsert,
    /// Read one event id
    Read,
}

impl fmt::Display for KeepaliveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepaliveMode::Upsert => write!(f, "upsert"),
            KeepaliveMode::Read => write!(f, "read"),
        }
    }
}

impl FromStr for KeepaliveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" | "write" => Ok(KeepaliveMode::Upsert),
            "read" => Ok(KeepaliveMode::Read),
            other => Err(format!("unknown keepalive mode: {other}")),
        }
    }
}

/// Touch the store once
///
/// Returns what was written or read, for the endpoint's `data` field.
pub async fn ping(
    store: &dyn TableStore,
    mode: KeepaliveMode,
    now: DateTime<Utc>,
) -> StoreResult<Option<Value>> {
    match mode {
        KeepaliveMode::Upsert => {
            let marker = KeepaliveMarker::at(now);
            store.upsert_row(KeepaliveMarker::TABLE, &marker).await?;
            Ok(Some(serde_json::to_value(&marker)?))
        }
        KeepaliveMode::Read => {
            let query = Query::of::<Event>().select("id").limit(1);
            let rows = store.select(&query).await?;
            Ok(Some(Value::Array(rows)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_client::{MemoryStore, StoreError, UnconfiguredStore};

    #[tokio::test]
    async fn test_upsert_keeps_single_marker_row() {
        let store = MemoryStore::new();
        let first = Utc::now();
        ping(&store, KeepaliveMode::Upsert, first).await.unwrap();
        let data = ping(&store, KeepaliveMode::Upsert, first + chrono::Duration::days(1))
            .await
            .unwrap()
            .unwrap();

        let rows = store.rows(KeepaliveMarker::TABLE);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], 1);
        assert_eq!(rows[0]["last_ping"], data["last_ping"]);
    }

    #[tokio::test]
    async fn test_read_mode_writes_nothing() {
        let store = MemoryStore::new();
        store.seed_rows(Event::TABLE, vec![serde_json::json!({"id": "e1", "title": "x"})]);
        let data = ping(&store, KeepaliveMode::Read, Utc::now()).await.unwrap();
        assert_eq!(data, Some(serde_json::json!([{"id": "e1"}])));
        assert!(store.rows(KeepaliveMarker::TABLE).is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_store_fails() {
        let err = ping(&UnconfiguredStore, KeepaliveMode::Upsert, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("READ".parse::<KeepaliveMode>(), Ok(KeepaliveMode::Read));
        assert_eq!("upsert".parse::<KeepaliveMode>(), Ok(KeepaliveMode::Upsert));
        assert!("ping".parse::<KeepaliveMode>().is_err());
    }
}
