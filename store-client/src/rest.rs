//! REST table store
//!
//! Talks to the hosted backend's table API:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | select | `GET /rest/v1/<table>?select=*&col=op.value&order=..&limit=n` |
//! | count | `HEAD` with `Prefer: count=exact`, total read from `Content-Range` |
//! | insert | `POST` with `Prefer: return=minimal` |
//! | insert_returning | `POST` with `Prefer: return=representation` |
//! | upsert | `POST` with `Prefer: resolution=merge-duplicates` |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::query::Query;
use crate::store::TableStore;

const PREFER: &str = "Prefer";

/// Error body returned by the table API
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<String>,
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// REST table store
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| StoreError::InvalidConfig("access key is not a valid header".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| StoreError::InvalidConfig("access key is not a valid header".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client.request(method, self.table_url(table))
    }

    async fn handle_response(response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let err = match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(api_err) => StoreError::Api {
                status: status.as_u16(),
                code: api_err.code,
                message: match api_err.details {
                    Some(details) => format!("{} ({})", api_err.message, details),
                    None => api_err.message,
                },
            },
            Err(_) => StoreError::Api {
                status: status.as_u16(),
                code: None,
                message: if text.is_empty() {
                    status.to_string()
                } else {
                    text
                },
            },
        };
        tracing::warn!(status = %status, error = %err, "Store request rejected");
        Err(err)
    }

    async fn post(&self, table: &str, row: &Value, prefer: &str) -> StoreResult<Response> {
        let response = self
            .request(Method::POST, table)
            .header(PREFER, prefer)
            .json(row)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}

/// Total from a `Content-Range` header such as `0-24/573` or `*/0`
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}

#[async_trait]
impl TableStore for RestStore {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Value>> {
        tracing::debug!(table = query.table_name(), "Store select");
        let response = self
            .request(Method::GET, query.table_name())
            .query(&query.to_params())
            .send()
            .await?;
        let response = Self::handle_response(response).await?;
        match response.json::<Value>().await? {
            Value::Array(rows) => Ok(rows),
            other => Err(StoreError::InvalidResponse(format!(
                "expected an array of rows, got {}",
                other
            ))),
        }
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        let response = self
            .request(Method::HEAD, query.table_name())
            .header(PREFER, "count=exact")
            .query(&query.to_count_params())
            .send()
            .await?;
        let response = Self::handle_response(response).await?;
        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| StoreError::InvalidResponse("missing Content-Range total".into()))
    }

    async fn insert(&self, table: &str, row: Value) -> StoreResult<()> {
        self.post(table, &row, "return=minimal").await?;
        Ok(())
    }

    async fn insert_returning(&self, table: &str, row: Value) -> StoreResult<Value> {
        let response = self.post(table, &row, "return=representation").await?;
        match response.json::<Value>().await? {
            Value::Array(rows) => rows
                .into_iter()
                .next()
                .ok_or_else(|| StoreError::InvalidResponse("insert returned no rows".into())),
            row @ Value::Object(_) => Ok(row),
            other => Err(StoreError::InvalidResponse(format!(
                "unexpected insert response: {}",
                other
            ))),
        }
    }

    async fn upsert(&self, table: &str, row: Value) -> StoreResult<()> {
        self.post(table, &row, "resolution=merge-duplicates,return=minimal")
            .await?;
        Ok(())
    }
}
