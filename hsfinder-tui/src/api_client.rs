//! HTTP client for the search API.

use crate::config::{HsfinderConfig, TimeoutConfig};
use crate::types::{
    OrganizationRequest, OrganizationResult, SearchRequest, SearchResponse, SpellingCorrection,
    SpellingRequest,
};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use std::error::Error as StdError;
use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("request timed out.")]
    Timeout,
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl ApiClientError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(error_chain(&err))
        } else {
            Self::ConnectionFailed(error_chain(&err))
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Flatten an error and its sources into one line.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// JSON client bound to one API base URL.
///
/// Every call carries its own timeout and is attempted exactly once.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeouts: TimeoutConfig,
}

impl ApiClient {
    pub fn new(config: &HsfinderConfig) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiClientError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeouts: config.timeouts.clone(),
        })
    }

    pub async fn correct_spelling(&self, query: &str) -> Result<SpellingCorrection, ApiClientError> {
        self.post_json(
            "/spellingcorrection",
            &SpellingRequest { query },
            self.timeouts.spelling(),
        )
        .await
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiClientError> {
        let path = format!("/search/{}", request.language.code());
        self.post_json(&path, request, self.timeouts.search()).await
    }

    pub async fn search_organizations(
        &self,
        request: &OrganizationRequest,
    ) -> Result<OrganizationResult, ApiClientError> {
        self.post_json("/organizations", request, self.timeouts.organizations())
            .await
    }

    /// Liveness payload from `/deep-health`, passed through untyped.
    pub async fn check_health(&self) -> Result<serde_json::Value, ApiClientError> {
        self.get_json("/deep-health", self.timeouts.health()).await
    }

    /// POST `body` as JSON to `path` and decode the JSON answer.
    pub async fn post_json<T, B>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "POST", path, timeout_ms = timeout.as_millis() as u64, "dispatching request");
        let started = Instant::now();
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .timeout(timeout)
            .json(body)
            .send()
            .await?;
        self.parse_response(path, started, response).await
    }

    pub async fn get_json<T>(&self, path: &str, timeout: Duration) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "GET", path, timeout_ms = timeout.as_millis() as u64, "dispatching request");
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .timeout(timeout)
            .send()
            .await?;
        self.parse_response(path, started, response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        started: Instant,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if status.is_success() {
            tracing::debug!(path, status = status.as_u16(), elapsed_ms, "request completed");
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice::<T>(&bytes)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), elapsed_ms, "request rejected");
            Err(ApiClientError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}
