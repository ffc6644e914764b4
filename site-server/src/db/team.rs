//! Team member queries
//!
//! Every roster is ordered by `position_order`, unranked members last.

use serde::Deserialize;
use serde_json::Value;
use shared::Record;
use shared::models::TeamMember;
use store_client::{OrderBy, Query, StoreResult, TableStore, TableStoreExt};

fn roster() -> Query {
    Query::of::<TeamMember>().order("position_order", OrderBy::asc().nulls_last())
}

fn in_year(query: Query, year: Option<i32>) -> Query {
    match year {
        Some(year) => query.eq("year", year),
        None => query,
    }
}

/// Optional filters accepted by the team list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TeamFilter {
    pub office_bearers: Option<bool>,
    pub year: Option<i32>,
}

impl TeamFilter {
    fn apply(&self, mut query: Query) -> Query {
        if let Some(flag) = self.office_bearers {
            query = query.eq("is_office_bearer", flag);
        }
        in_year(query, self.year)
    }
}

pub async fn office_bearers(
    store: &dyn TableStore,
    year: Option<i32>,
) -> StoreResult<Vec<TeamMember>> {
    let query = in_year(roster().eq("is_office_bearer", true), year);
    store.fetch(&query).await
}

/// Members who are neither office bearers nor faculty
pub async fn core_committee(
    store: &dyn TableStore,
    year: Option<i32>,
) -> StoreResult<Vec<TeamMember>> {
    let query = in_year(
        roster()
            .eq("is_office_bearer", false)
            .eq("is_faculty", false),
        year,
    );
    store.fetch(&query).await
}

pub async fn faculty(store: &dyn TableStore) -> StoreResult<Vec<TeamMember>> {
    store.fetch(&roster().eq("is_faculty", true)).await
}

pub async fn all(store: &dyn TableStore) -> StoreResult<Vec<TeamMember>> {
    store.fetch(&roster()).await
}

/// Rows exactly as stored, in roster order
pub async fn list(store: &dyn TableStore, filter: &TeamFilter) -> StoreResult<Vec<Value>> {
    store.select(&filter.apply(roster())).await
}

pub async fn count(store: &dyn TableStore, filter: &TeamFilter) -> StoreResult<u64> {
    store
        .count_rows(&filter.apply(Query::of::<TeamMember>()))
        .await
}

pub async fn create(store: &dyn TableStore, row: Value) -> StoreResult<Value> {
    store.insert_returning(TeamMember::TABLE, row).await
}
