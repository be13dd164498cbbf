use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use uuid::Uuid;

/// The two legal order sides. Serialized lowercase on the wire
/// (`{"action": "buy"}`); displayed capitalized in the UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    #[default]
    Buy,
    Sell,
}

/// How a submission resolved: the service message on success, the
/// client-side error text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    Filled { message: String },
    Rejected { error: String },
}

impl TradeOutcome {
    pub fn is_filled(&self) -> bool {
        matches!(self, TradeOutcome::Filled { .. })
    }

    /// The one-line text shown in the history panel.
    pub fn summary(&self) -> &str {
        match self {
            TradeOutcome::Filled { message } => message,
            TradeOutcome::Rejected { error } => error,
        }
    }
}

/// A resolved submission, ready for the session trade log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    pub stock: String,
    pub action: TradeAction,
    pub outcome: TradeOutcome,
    pub submitted_at: DateTime<Utc>,
}

impl TradeRecord {
    pub fn new(stock: String, action: TradeAction, outcome: TradeOutcome) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            stock,
            action,
            outcome,
            submitted_at: Utc::now(),
        }
    }
}
