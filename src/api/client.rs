use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::types::{ApiErrorBody, HealthResponse, TradeRequest, TradeResponse};
use crate::config::{API, DF};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service error: {0}")]
    Service(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Abstract interface to the trade service. Lets the submission worker run
/// against a mock transport in tests.
#[async_trait]
pub trait TradeBackend: Send + Sync {
    /// Submit one trade order and return the service's answer.
    async fn submit_trade(&self, request: &TradeRequest) -> Result<TradeResponse, ApiError>;

    /// Probe the service identity/version, retrying per the client config.
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

pub struct HttpTradeClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTradeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pulse-trader/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(API.client.timeout_ms))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Non-2xx answers carry `{"error": "..."}` when the service itself
    /// rejected the request; anything else is reported by status line.
    async fn service_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiErrorBody>().await {
            Ok(body) => ApiError::Service(body.error),
            Err(_) => ApiError::Service(format!("HTTP {status}")),
        }
    }

    async fn health_once(&self) -> Result<HealthResponse, ApiError> {
        let response = self.http.get(self.url(API.routes.health_path)).send().await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TradeBackend for HttpTradeClient {
    async fn submit_trade(&self, request: &TradeRequest) -> Result<TradeResponse, ApiError> {
        let response = self
            .http
            .post(self.url(API.routes.trade_path))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let mut attempt = 0;
        loop {
            match self.health_once().await {
                Ok(health) => return Ok(health),
                Err(err) if attempt < API.client.retries => {
                    attempt += 1;
                    if DF.log_health {
                        log::warn!("Health probe attempt {} failed: {}", attempt, err);
                    }
                    tokio::time::sleep(Duration::from_millis(API.client.backoff_ms)).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
