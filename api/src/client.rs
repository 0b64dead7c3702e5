//! HTTP transport for the hosted row store (PostgREST flavoured REST API).

use std::future::Future;

use serde::Deserialize;
use time::Date;
use tracing::{debug, warn};

use crate::config::RowStoreConfig;
use crate::error::LoadError;
use crate::model::WeeklyJobRow;
use crate::query::RowQuery;

/// Anything that can answer a [`RowQuery`]. The dashboard only talks to this.
pub trait RowSource {
    fn fetch_rows(
        &self,
        query: &RowQuery,
    ) -> impl Future<Output = Result<Vec<WeeklyJobRow>, LoadError>>;
}

/// Reads weekly rows over HTTP using the project's anon key.
#[derive(Debug, Clone)]
pub struct RowStoreClient {
    http: reqwest::Client,
    config: RowStoreConfig,
}

impl RowStoreClient {
    pub fn new(config: RowStoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RowStoreConfig {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url, self.config.table)
    }

    /// The configured location and bound, resolved against `today`.
    pub fn query_for(&self, today: Date) -> RowQuery {
        RowQuery::new(self.config.location.clone(), self.config.bound, today)
    }
}

impl RowSource for RowStoreClient {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<WeeklyJobRow>, LoadError> {
        let endpoint = self.endpoint();
        let params = query.to_params();
        debug!(%endpoint, ?params, "requesting weekly rows");

        let response = self
            .http
            .get(&endpoint)
            .query(&params)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_response(status.as_u16(), status.canonical_reason(), &body)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    hint: Option<String>,
}

/// Turn a raw status + body into rows or a [`LoadError`].
pub fn decode_response(
    status: u16,
    reason: Option<&str>,
    body: &str,
) -> Result<Vec<WeeklyJobRow>, LoadError> {
    if status >= 400 {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|err| err.message.clone())
            .unwrap_or_else(|| reason.unwrap_or("request failed").to_string());
        if let Some(hint) = parsed.and_then(|err| err.hint) {
            warn!(status, %hint, "row store rejected the query");
        }
        return Err(LoadError::Status { status, message });
    }

    Ok(serde_json::from_str(body)?)
}
