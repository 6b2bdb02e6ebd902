//! HTTP-backed page fetcher

use super::{FetchOutcome, PageSource};
use crate::endpoint::EndpointDescriptor;
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{JsonValue, Record};
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Maximum attempts per page request
pub const MAX_ATTEMPTS: u32 = 5;

/// Fetches single registry pages over HTTP with bounded retry
///
/// An attempt fails on any transport error or non-2xx status. Failed attempts
/// are retried immediately, with no delay between them; that is the contract
/// inherited from the reference behavior, not a recommendation — a deployment
/// facing real outages would want backoff here.
pub struct PageFetcher {
    client: HttpClient,
    endpoint: EndpointDescriptor,
    max_attempts: u32,
}

impl PageFetcher {
    /// Create a fetcher for one endpoint
    pub fn new(client: HttpClient, endpoint: EndpointDescriptor) -> Self {
        Self {
            client,
            endpoint,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the attempt budget (minimum 1)
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// The endpoint this fetcher serves
    pub fn endpoint(&self) -> &EndpointDescriptor {
        &self.endpoint
    }

    /// One request attempt: GET, parse JSON, extract the `resultado` array
    async fn try_fetch(&self, query: &[(String, String)]) -> Result<Vec<Record>> {
        let response = self.client.get(self.endpoint.path(), query).await?;
        let body: JsonValue = response.json().await?;
        Ok(extract_resultado(&body))
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    fn name(&self) -> &str {
        self.endpoint.name()
    }

    async fn fetch_page(&self, key: Option<&str>, page: u32) -> FetchOutcome {
        let query = self.endpoint.query_params(key, page);

        // The attempt counter is scoped to this call; every page starts with
        // a fresh budget.
        for attempt in 1..=self.max_attempts {
            match self.try_fetch(&query).await {
                Ok(records) => {
                    info!(
                        registry = self.endpoint.name(),
                        key = key.unwrap_or("-"),
                        page,
                        records = records.len(),
                        "page loaded"
                    );
                    return FetchOutcome::Page(records);
                }
                Err(e) => {
                    warn!(
                        registry = self.endpoint.name(),
                        key = key.unwrap_or("-"),
                        page,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "page attempt failed"
                    );
                }
            }
        }

        error!(
            registry = self.endpoint.name(),
            key = key.unwrap_or("-"),
            page,
            attempts = self.max_attempts,
            "page unavailable, retries exhausted"
        );
        FetchOutcome::Failed
    }
}

/// Extract the record array from a response body
///
/// A missing or non-array `resultado` field is an empty page, never an error.
fn extract_resultado(body: &JsonValue) -> Vec<Record> {
    match body.get("resultado") {
        Some(JsonValue::Array(records)) => records.clone(),
        _ => Vec::new(),
    }
}
