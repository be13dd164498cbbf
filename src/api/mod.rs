mod client;
mod types;

pub use client::{ApiError, HttpTradeClient, TradeBackend};
pub use types::{ChartSeries, HealthResponse, TradeRequest, TradeResponse};
