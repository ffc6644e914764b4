//! In-memory table store
//!
//! Evaluates [`Query`] values against JSON rows held in process. Used by
//! tests and for running the server without a hosted backend.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};
use crate::query::{Direction, Filter, FilterOp, Nulls, OrderKey, Query};
use crate::store::TableStore;

#[derive(Debug, Default)]
struct Inner {
    tables: RwLock<HashMap<String, Vec<Value>>>,
    failure: RwLock<Option<String>>,
    latency: RwLock<Option<Duration>>,
    calls: AtomicUsize,
}

/// Shared in-memory store; clones see the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw rows to a table
    pub fn seed_rows(&self, table: &str, rows: impl IntoIterator<Item = Value>) {
        self.inner
            .tables
            .write()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    /// Append serializable rows to a table
    pub fn seed<T: serde::Serialize>(
        &self,
        table: &str,
        rows: impl IntoIterator<Item = T>,
    ) -> StoreResult<()> {
        let rows = rows
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.seed_rows(table, rows);
        Ok(())
    }

    /// Snapshot of a table's rows in insertion order
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.inner
            .tables
            .read()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.inner.failure.write() = Some(message.into());
    }

    /// Stop failing
    pub fn recover(&self) {
        *self.inner.failure.write() = None;
    }

    /// Delay every call by `latency`
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.inner.latency.write() = latency;
    }

    /// Number of calls made so far, including failed ones
    pub fn call_count(&self) -> usize {
        self.inner.calls.load(AtomicOrdering::SeqCst)
    }

    async fn enter(&self) -> StoreResult<()> {
        self.inner.calls.fetch_add(1, AtomicOrdering::SeqCst);
        let latency = *self.inner.latency.read();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        match self.inner.failure.read().as_ref() {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }

    fn matching(&self, query: &Query) -> Vec<Value> {
        let tables = self.inner.tables.read();
        let Some(rows) = tables.get(query.table_name()) else {
            return Vec::new();
        };
        rows.iter()
            .filter(|row| query.filters().iter().all(|f| matches_filter(row, f)))
            .cloned()
            .collect()
    }

    fn push_row(&self, table: &str, row: Value) -> StoreResult<Value> {
        let Value::Object(mut fields) = row else {
            return Err(StoreError::Api {
                status: 400,
                code: None,
                message: "row must be a JSON object".to_string(),
            });
        };
        apply_defaults(table, &mut fields);
        let row = Value::Object(fields);
        self.inner
            .tables
            .write()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }
}

/// Column defaults beyond `id`, per table
///
/// Unknown tables get `created_at` only.
fn table_defaults(table: &str) -> &'static [(&'static str, ColumnDefault)] {
    use ColumnDefault::{False, Now};
    match table {
        "events" | "kanaiyazhi_editions" => &[
            ("created_at", Now),
            ("updated_at", Now),
            ("is_featured", False),
        ],
        "team_members" => &[
            ("created_at", Now),
            ("updated_at", Now),
            ("is_office_bearer", False),
            ("is_faculty", False),
        ],
        "achievements" => &[("created_at", Now), ("updated_at", Now)],
        "registrations" => &[("registration_date", Now)],
        _ => &[("created_at", Now)],
    }
}

#[derive(Clone, Copy)]
enum ColumnDefault {
    Now,
    False,
}

/// Emulate the column defaults the hosted tables declare
fn apply_defaults(table: &str, fields: &mut Map<String, Value>) {
    if !fields.contains_key("id") {
        fields.insert(
            "id".to_string(),
            Value::String(uuid::Uuid::new_v4().to_string()),
        );
    }
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    for (column, default) in table_defaults(table) {
        if fields.contains_key(*column) {
            continue;
        }
        let value = match default {
            ColumnDefault::Now => Value::String(now.clone()),
            ColumnDefault::False => Value::Bool(false),
        };
        fields.insert(column.to_string(), value);
    }
}

fn field<'a>(row: &'a Value, column: &str) -> &'a Value {
    row.get(column).unwrap_or(&Value::Null)
}

fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// Ordering between two non-null scalars of compatible type
///
/// Strings that both parse as RFC 3339 compare as instants, so differently
/// formatted timestamps still order correctly.
fn compare_scalars(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => match (parse_timestamp(a), parse_timestamp(b)) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => Some(a.cmp(b)),
        },
        _ => None,
    }
}

fn matches_filter(row: &Value, filter: &Filter) -> bool {
    let value = field(row, &filter.column);

    if filter.value.is_null() {
        return match filter.op {
            FilterOp::Eq => value.is_null(),
            FilterOp::Neq => !value.is_null(),
            _ => false,
        };
    }
    if value.is_null() {
        return false;
    }

    let Some(ordering) = compare_scalars(value, &filter.value) else {
        return false;
    };
    match filter.op {
        FilterOp::Eq => ordering == Ordering::Equal,
        FilterOp::Neq => ordering != Ordering::Equal,
        FilterOp::Lt => ordering == Ordering::Less,
        FilterOp::Lte => ordering != Ordering::Greater,
        FilterOp::Gt => ordering == Ordering::Greater,
        FilterOp::Gte => ordering != Ordering::Less,
    }
}

fn compare_by_key(a: &Value, b: &Value, key: &OrderKey) -> Ordering {
    let (a, b) = (field(a, &key.column), field(b, &key.column));
    let null_first = key.order.nulls == Nulls::First;
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) if null_first => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, true) if null_first => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = compare_scalars(a, b).unwrap_or(Ordering::Equal);
            match key.order.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        }
    }
}

fn project(row: Value, columns: &str) -> Value {
    if columns.trim() == "*" {
        return row;
    }
    let Value::Object(fields) = row else {
        return row;
    };
    let wanted: Vec<&str> = columns.split(',').map(str::trim).collect();
    Value::Object(
        fields
            .into_iter()
            .filter(|(k, _)| wanted.contains(&k.as_str()))
            .collect(),
    )
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Value>> {
        self.enter().await?;
        let mut rows = self.matching(query);
        rows.sort_by(|a, b| {
            query
                .order_keys()
                .iter()
                .map(|key| compare_by_key(a, b, key))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        if let Some(limit) = query.limit_value() {
            rows.truncate(limit);
        }
        Ok(rows
            .into_iter()
            .map(|row| project(row, query.columns()))
            .collect())
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        self.enter().await?;
        Ok(self.matching(query).len() as u64)
    }

    async fn insert(&self, table: &str, row: Value) -> StoreResult<()> {
        self.enter().await?;
        self.push_row(table, row).map(|_| ())
    }

    async fn insert_returning(&self, table: &str, row: Value) -> StoreResult<Value> {
        self.enter().await?;
        self.push_row(table, row)
    }

    async fn upsert(&self, table: &str, row: Value) -> StoreResult<()> {
        self.enter().await?;
        let Value::Object(fields) = row else {
            return Err(StoreError::Api {
                status: 400,
                code: None,
                message: "row must be a JSON object".to_string(),
            });
        };

        if let Some(id) = fields.get("id") {
            let mut tables = self.inner.tables.write();
            let rows = tables.entry(table.to_string()).or_default();
            if let Some(Value::Object(existing)) =
                rows.iter_mut().find(|r| r.get("id") == Some(id))
            {
                existing.extend(fields);
                return Ok(());
            }
        }
        self.push_row(table, Value::Object(fields)).map(|_| ())
    }
}
