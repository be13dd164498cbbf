use serde::{Deserialize, Serialize};

use crate::api::{ApiError, TradeRequest, TradeResponse};
use crate::config::DF;
use crate::models::TradeAction;

/// Where the current submission cycle stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Done { message: String },
    Failed { error: String },
}

/// One outgoing request plus the token that ties the eventual response back
/// to the submission that asked for it.
#[derive(Debug)]
pub struct SubmitTicket {
    pub token: u64,
    pub request: TradeRequest,
}

/// What the worker thread reports back over the channel.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub token: u64,
    pub stock: String,
    pub action: TradeAction,
    pub result: Result<TradeResponse, ApiError>,
}

/// All trade-form state in one place, driven by explicit calls, so the whole
/// submission cycle can be exercised without a UI attached.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeFormState {
    pub stock: String,
    pub action: TradeAction,
    #[serde(skip)]
    pub status: SubmitStatus,
    /// Monotonic request token. Only the outcome carrying the latest token
    /// may touch the display; older in-flight responses become inert.
    #[serde(skip)]
    generation: u64,
}

impl Default for TradeFormState {
    fn default() -> Self {
        Self {
            stock: String::new(),
            action: TradeAction::default(),
            status: SubmitStatus::default(),
            generation: 0,
        }
    }
}

impl TradeFormState {
    /// Start a submission cycle. A blank stock field refuses to submit
    /// (the required-field rule) and leaves all state untouched.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        let stock = self.stock.trim();
        if stock.is_empty() {
            return None;
        }
        self.generation += 1;
        self.status = SubmitStatus::Submitting;
        Some(SubmitTicket {
            token: self.generation,
            request: TradeRequest {
                stock: stock.to_string(),
                action: self.action,
            },
        })
    }

    /// Fold a worker result back in. Outcomes with an older token than the
    /// latest submission are dropped whole. Returns the response only when
    /// it was accepted and successful, so the caller can rebuild the chart.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> Option<TradeResponse> {
        if outcome.token != self.generation {
            if DF.log_stale_drops {
                log::info!(
                    "Dropping stale response for {} (token {}, current {})",
                    outcome.stock,
                    outcome.token,
                    self.generation
                );
            }
            return None;
        }
        match outcome.result {
            Ok(response) => {
                self.status = SubmitStatus::Done {
                    message: response.message.clone(),
                };
                Some(response)
            }
            Err(err) => {
                self.status = SubmitStatus::Failed {
                    error: err.to_string(),
                };
                None
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(token: u64, result: Result<TradeResponse, ApiError>) -> SubmitOutcome {
        SubmitOutcome {
            token,
            stock: "AAPL".into(),
            action: TradeAction::Buy,
            result,
        }
    }

    fn ok_response(message: &str) -> TradeResponse {
        TradeResponse {
            message: message.into(),
            chart: None,
        }
    }

    #[test]
    fn blank_stock_never_starts_a_submission() {
        let mut form = TradeFormState::default();
        assert!(form.begin_submit().is_none());

        form.stock = "   ".into();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, SubmitStatus::Idle);

        // The next real submission still gets the first token.
        form.stock = "AAPL".into();
        let ticket = form.begin_submit().unwrap();
        assert_eq!(ticket.token, 1);
    }

    #[test]
    fn begin_submit_trims_and_marks_in_flight() {
        let mut form = TradeFormState::default();
        form.stock = " AAPL ".into();
        form.action = TradeAction::Sell;

        let ticket = form.begin_submit().unwrap();
        assert_eq!(ticket.request.stock, "AAPL");
        assert_eq!(ticket.request.action, TradeAction::Sell);
        assert!(form.in_flight());
    }

    #[test]
    fn success_sets_the_result_text_to_the_exact_message() {
        let mut form = TradeFormState::default();
        form.stock = "AAPL".into();
        let ticket = form.begin_submit().unwrap();

        let response = form.apply_outcome(outcome(ticket.token, Ok(ok_response("Bought 10 shares"))));
        assert!(response.is_some());
        assert_eq!(
            form.status,
            SubmitStatus::Done {
                message: "Bought 10 shares".into()
            }
        );
        assert!(!form.in_flight());
    }

    #[test]
    fn failure_surfaces_instead_of_sticking_on_loading() {
        let mut form = TradeFormState::default();
        form.stock = "AAPL".into();
        let ticket = form.begin_submit().unwrap();

        let response = form.apply_outcome(outcome(
            ticket.token,
            Err(ApiError::Service("market closed".into())),
        ));
        assert!(response.is_none());
        assert_eq!(
            form.status,
            SubmitStatus::Failed {
                error: "service error: market closed".into()
            }
        );
    }

    #[test]
    fn stale_outcome_is_discarded_entirely() {
        let mut form = TradeFormState::default();
        form.stock = "AAPL".into();
        let first = form.begin_submit().unwrap();
        let second = form.begin_submit().unwrap();
        assert!(second.token > first.token);

        // The older in-flight response resolves late; nothing may change.
        let stale = form.apply_outcome(outcome(first.token, Ok(ok_response("first"))));
        assert!(stale.is_none());
        assert!(form.in_flight());

        // The current one lands normally.
        let current = form.apply_outcome(outcome(second.token, Ok(ok_response("second"))));
        assert!(current.is_some());
        assert_eq!(
            form.status,
            SubmitStatus::Done {
                message: "second".into()
            }
        );
    }

    #[test]
    fn stale_error_cannot_clobber_a_newer_cycle() {
        let mut form = TradeFormState::default();
        form.stock = "AAPL".into();
        let first = form.begin_submit().unwrap();
        let _second = form.begin_submit().unwrap();

        form.apply_outcome(outcome(
            first.token,
            Err(ApiError::Service("timed out".into())),
        ));
        assert!(form.in_flight());
    }
}
