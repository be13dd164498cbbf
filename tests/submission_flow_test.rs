//! End-to-end regression for overlapping submissions: responses arriving out
//! of order must never let a stale request overwrite a newer result.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Runtime;

use pulse_trader::api::{
    ApiError, ChartSeries, HealthResponse, TradeBackend, TradeRequest, TradeResponse,
};
use pulse_trader::app::trade_form::{SubmitOutcome, SubmitStatus, SubmitTicket, TradeFormState};

/// Backend that answers after a configurable delay, tagging each message so
/// the test can tell the responses apart.
struct SlowBackend {
    delay: Duration,
    tag: &'static str,
}

#[async_trait]
impl TradeBackend for SlowBackend {
    async fn submit_trade(&self, request: &TradeRequest) -> Result<TradeResponse, ApiError> {
        tokio::time::sleep(self.delay).await;
        Ok(TradeResponse {
            message: format!("{} {}", self.tag, request.stock),
            chart: Some(ChartSeries {
                labels: vec![self.tag.to_string()],
                values: vec![1.0],
            }),
        })
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        Ok(HealthResponse {
            ok: true,
            service: "mock".into(),
            version: "0".into(),
        })
    }
}

/// Backend that always rejects.
struct FailingBackend;

#[async_trait]
impl TradeBackend for FailingBackend {
    async fn submit_trade(&self, _request: &TradeRequest) -> Result<TradeResponse, ApiError> {
        Err(ApiError::Service("market closed".into()))
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        Err(ApiError::Service("market closed".into()))
    }
}

/// The same worker shape the app spawns per submission.
fn spawn_worker(
    backend: Arc<dyn TradeBackend>,
    ticket: SubmitTicket,
    tx: mpsc::Sender<SubmitOutcome>,
) {
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create runtime");
        let stock = ticket.request.stock.clone();
        let action = ticket.request.action;
        let result = rt.block_on(async { backend.submit_trade(&ticket.request).await });
        let _ = tx.send(SubmitOutcome {
            token: ticket.token,
            stock,
            action,
            result,
        });
    });
}

#[test]
fn later_submission_wins_when_responses_arrive_out_of_order() {
    let mut form = TradeFormState::default();
    form.stock = "AAPL".into();

    let (tx, rx) = mpsc::channel();

    // First submission is slow; the resubmission races past it.
    let first = form.begin_submit().expect("first ticket");
    spawn_worker(
        Arc::new(SlowBackend {
            delay: Duration::from_millis(200),
            tag: "FIRST",
        }),
        first,
        tx.clone(),
    );

    let second = form.begin_submit().expect("second ticket");
    spawn_worker(
        Arc::new(SlowBackend {
            delay: Duration::from_millis(10),
            tag: "SECOND",
        }),
        second,
        tx.clone(),
    );

    let mut accepted = Vec::new();
    for _ in 0..2 {
        let outcome = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker answered");
        if let Some(response) = form.apply_outcome(outcome) {
            accepted.push(response);
        }
    }

    // Exactly one response survived the token check, and it is the later one.
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].message, "SECOND AAPL");
    assert_eq!(accepted[0].chart.as_ref().unwrap().labels, vec!["SECOND"]);
    assert_eq!(
        form.status,
        SubmitStatus::Done {
            message: "SECOND AAPL".into()
        }
    );
}

#[test]
fn failed_request_lands_in_failed_not_loading() {
    let mut form = TradeFormState::default();
    form.stock = "TSLA".into();

    let (tx, rx) = mpsc::channel();
    let ticket = form.begin_submit().expect("ticket");
    assert!(form.in_flight());

    spawn_worker(Arc::new(FailingBackend), ticket, tx);

    let outcome = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("worker answered");
    assert!(form.apply_outcome(outcome).is_none());

    assert!(!form.in_flight());
    assert_eq!(
        form.status,
        SubmitStatus::Failed {
            error: "service error: market closed".into()
        }
    );
}
