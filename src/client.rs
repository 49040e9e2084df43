//! Typed client for the voting API
//!
//! Mirrors the request surface exposed by [`crate::router`]. Failed
//! requests carry the server's `error` message.

use reqwest::{Method, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::models::{CandidateCounts, Category, CategoryResults, VoteTable};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Non-success status, with the server's message when it sent one
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Body returned by a successful vote
#[derive(Debug, Clone, Deserialize)]
pub struct VoteReceipt {
    pub success: bool,
    pub message: String,
    pub votes: CandidateCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` includes the `/api` prefix, e.g. `http://localhost:3001/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL plus `segments`, each percent-encoded as one path segment
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
    ) -> ClientResult<T> {
        let url = self.url(segments)?;
        let mut request = self.http.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            tracing::warn!("API error from {}: {}", url, message);
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.request(Method::GET, &["categories"], None).await
    }

    pub async fn results(&self) -> ClientResult<Vec<CategoryResults>> {
        self.request(Method::GET, &["results"], None).await
    }

    pub async fn category_results(&self, category_id: &str) -> ClientResult<CategoryResults> {
        self.request(Method::GET, &["results", category_id], None)
            .await
    }

    pub async fn submit_vote(
        &self,
        category_id: &str,
        candidate_name: &str,
    ) -> ClientResult<VoteReceipt> {
        let body = json!({ "categoryId": category_id, "candidateName": candidate_name });
        self.request(Method::POST, &["vote"], Some(body)).await
    }

    pub async fn update_categories(&self, categories: &[Category]) -> ClientResult<()> {
        let _: Value = self
            .request(
                Method::PUT,
                &["categories"],
                Some(json!({ "categories": categories })),
            )
            .await?;
        Ok(())
    }

    pub async fn all_votes(&self) -> ClientResult<VoteTable> {
        self.request(Method::GET, &["votes"], None).await
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.request(Method::GET, &["health"], None).await
    }

    /// Poll all results every `interval` in a background task
    ///
    /// The first fetch happens immediately. A failed fetch publishes an
    /// empty list. The task ends once every receiver is dropped.
    pub fn poll_results(&self, interval: Duration) -> watch::Receiver<Vec<CategoryResults>> {
        let (tx, rx) = watch::channel(Vec::new());
        let client = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = tx.closed() => break,
                }

                let results = client.results().await.unwrap_or_else(|e| {
                    tracing::warn!("Failed to poll results: {}", e);
                    Vec::new()
                });
                if tx.send(results).is_err() {
                    break;
                }
            }
            tracing::debug!("Results poller stopped");
        });

        rx
    }
}
