//! Wire types for the QuantumPulse HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::TradeAction;

/// Body of `POST /api/v1/trade`.
#[derive(Debug, Clone, Serialize)]
pub struct TradeRequest {
    pub stock: String,
    pub action: TradeAction,
}

/// Labels/values pair for the trend line, Chart.js style.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Successful trade response. The service always sends `message`; chart data
/// is treated as optional since its schema is owned by the server side.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeResponse {
    pub message: String,
    #[serde(default)]
    pub chart: Option<ChartSeries>,
}

/// `GET /api/v1/health` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}
