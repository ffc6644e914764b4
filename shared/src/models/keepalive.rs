//! Keepalive marker row

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Single-row table touched by the keepalive ping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeepaliveMarker {
    pub id: i64,
    pub last_ping: DateTime<Utc>,
}

impl KeepaliveMarker {
    /// The marker always lives in row 1
    pub const ROW_ID: i64 = 1;

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            id: Self::ROW_ID,
            last_ping: now,
        }
    }
}

impl Record for KeepaliveMarker {
    const TABLE: &'static str = "keepalive";
}
