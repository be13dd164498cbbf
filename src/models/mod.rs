mod chart;
mod trade;

pub use chart::ChartModel;
pub use trade::{TradeAction, TradeOutcome, TradeRecord};
