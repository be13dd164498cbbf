use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{
            Arc,
            mpsc,
            mpsc::{Receiver, Sender},
        },
        thread,
        time::Duration,
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    api::{ApiError, HealthResponse, HttpTradeClient, TradeBackend},
    app::{
        AppState, ConnectState, PhaseView, ReadyState, ServiceStatus,
        trade_form::{SubmitOutcome, SubmitTicket, TradeFormState},
    },
    config::{API, DF},
    data::{load_trade_log, save_trade_log},
    models::{ChartModel, TradeOutcome, TradeRecord},
    ui::{UI_CONFIG, render_connecting},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) menu_open: bool, // persists across sessions, like the rest of the form
    pub(crate) show_history: bool,
    pub(crate) trade_form: TradeFormState,
    #[serde(skip)]
    pub(crate) show_about: bool,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) service_status: ServiceStatus,
    #[serde(skip)]
    pub(crate) chart: Option<ChartModel>,
    #[serde(skip)]
    pub(crate) trade_log: Vec<TradeRecord>,
    #[serde(skip)]
    backend: Option<Arc<dyn TradeBackend>>,
    #[serde(skip)]
    submit_tx: Option<Sender<SubmitOutcome>>,
    #[serde(skip)]
    submit_rx: Option<Receiver<SubmitOutcome>>,
    #[serde(skip)]
    health_rx: Option<Receiver<Result<HealthResponse, ApiError>>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            menu_open: false,
            show_history: true,
            trade_form: TradeFormState::default(),
            show_about: false,
            state: AppState::default(),
            service_status: ServiceStatus::Unknown,
            chart: None,
            trade_log: Vec::new(),
            backend: None,
            submit_tx: None,
            submit_rx: None,
            health_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let base_url = args.api_url.unwrap_or_else(|| API.base_url.to_string());
        let backend: Arc<dyn TradeBackend> = Arc::new(
            HttpTradeClient::new(&base_url).expect("Failed to build HTTP client"),
        );

        app.trade_log = match load_trade_log() {
            Ok(records) => records,
            Err(err) => {
                log::error!("Failed to load trade log: {}", err);
                Vec::new()
            }
        };

        let (submit_tx, submit_rx) = mpsc::channel();
        let (health_tx, health_rx) = mpsc::channel();
        app.submit_tx = Some(submit_tx);
        app.submit_rx = Some(submit_rx);
        app.health_rx = Some(health_rx);
        app.backend = Some(backend.clone());
        app.state = AppState::Connecting(ConnectState);

        if DF.log_health {
            log::info!("Probing trade service at {}", base_url);
        }
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let result = rt.block_on(async move { backend.health().await });
            let _ = health_tx.send(result);
        });

        app
    }

    /// Invert the nav panel state. An even number of calls lands back where
    /// it started.
    pub(crate) fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Kick off a submission for whatever the form currently holds. A blank
    /// stock field is refused by the form and nothing happens.
    pub(crate) fn submit_trade_form(&mut self) {
        let Some(ticket) = self.trade_form.begin_submit() else {
            return;
        };
        if DF.log_submissions {
            log::info!(
                "Submitting {} {} (token {})",
                ticket.request.action,
                ticket.request.stock,
                ticket.token
            );
        }
        self.spawn_submission(ticket);
    }

    fn spawn_submission(&self, ticket: SubmitTicket) {
        let Some(tx) = self.submit_tx.clone() else {
            return;
        };
        let Some(backend) = self.backend.clone() else {
            return;
        };
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let result = rt.block_on(async { backend.submit_trade(&ticket.request).await });
            let _ = tx.send(SubmitOutcome {
                token: ticket.token,
                stock: ticket.request.stock,
                action: ticket.request.action,
                result,
            });
        });
    }

    /// Collect finished submissions. Every resolved request is logged to the
    /// session history; only the one matching the latest token may touch the
    /// result text and chart.
    pub(crate) fn drain_submission_results(&mut self) {
        let outcomes: Vec<SubmitOutcome> = match &self.submit_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };

        for outcome in outcomes {
            let resolved = match &outcome.result {
                Ok(response) => TradeOutcome::Filled {
                    message: response.message.clone(),
                },
                Err(err) => TradeOutcome::Rejected {
                    error: err.to_string(),
                },
            };
            self.trade_log
                .push(TradeRecord::new(outcome.stock.clone(), outcome.action, resolved));

            if let Some(response) = self.trade_form.apply_outcome(outcome) {
                // The swap: assigning here drops the previous chart model, so
                // at most one is ever alive.
                self.chart = response.chart.as_ref().map(ChartModel::from_series);
            }
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // User is typing in the stock box; don't steal keys.
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::M) {
                self.toggle_menu();
            }
            if i.key_pressed(Key::Escape) {
                self.show_about = false;
            }
        });
    }

    pub(crate) fn tick_connecting_state(
        &mut self,
        ctx: &Context,
        state: &mut ConnectState,
    ) -> AppState {
        if let Some(rx) = &self.health_rx {
            if let Ok(result) = rx.try_recv() {
                self.service_status = match result {
                    Ok(health) if health.ok => {
                        if DF.log_health {
                            log::info!("Connected to {} v{}", health.service, health.version);
                        }
                        ServiceStatus::Online {
                            service: health.service,
                            version: health.version,
                        }
                    }
                    Ok(health) => ServiceStatus::Offline {
                        error: format!("{} reports unhealthy", health.service),
                    },
                    Err(err) => {
                        log::warn!("Trade service unreachable: {}", err);
                        ServiceStatus::Offline {
                            error: err.to_string(),
                        }
                    }
                };
                return AppState::Ready(ReadyState);
            }
        }

        render_connecting(ctx);
        ctx.request_repaint();
        AppState::Connecting(state.clone())
    }

    /// READY PHASE MAIN LOOP
    pub(crate) fn tick_ready_state(&mut self, ctx: &Context) {
        self.drain_submission_results();
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        if self.menu_open {
            self.render_menu_panel(ctx);
        }
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_about_window(ctx);

        if self.trade_form.in_flight() {
            // Wake up to collect the worker's answer even with no input events.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Connecting(mut s) => s.tick(self, ctx),
            AppState::Ready(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if let Err(err) = save_trade_log(&self.trade_log) {
            log::error!("Failed to save trade log: {}", err);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_open_iff_toggled_an_odd_number_of_times() {
        let mut app = App::default();
        assert!(!app.menu_open);

        for n in 1..=10 {
            app.toggle_menu();
            assert_eq!(app.menu_open, n % 2 == 1);
        }
    }

    #[test]
    fn successful_outcome_replaces_the_chart_and_logs_the_trade() {
        use crate::api::{ChartSeries, TradeResponse};
        use crate::models::TradeAction;

        let mut app = App::default();
        let (tx, rx) = mpsc::channel();
        app.submit_tx = Some(tx);
        app.submit_rx = Some(rx);

        app.trade_form.stock = "AAPL".into();
        let ticket = app.trade_form.begin_submit().unwrap();

        app.submit_tx
            .as_ref()
            .unwrap()
            .send(SubmitOutcome {
                token: ticket.token,
                stock: "AAPL".into(),
                action: TradeAction::Buy,
                result: Ok(TradeResponse {
                    message: "Bought 10 shares".into(),
                    chart: Some(ChartSeries {
                        labels: vec!["Mon".into()],
                        values: vec![187.2],
                    }),
                }),
            })
            .unwrap();

        app.drain_submission_results();

        assert_eq!(app.trade_log.len(), 1);
        assert!(app.trade_log[0].outcome.is_filled());
        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn failed_outcome_is_logged_but_leaves_the_chart_alone() {
        use crate::models::TradeAction;

        let mut app = App::default();
        let (tx, rx) = mpsc::channel();
        app.submit_tx = Some(tx.clone());
        app.submit_rx = Some(rx);

        app.trade_form.stock = "AAPL".into();
        let ticket = app.trade_form.begin_submit().unwrap();

        tx.send(SubmitOutcome {
            token: ticket.token,
            stock: "AAPL".into(),
            action: TradeAction::Buy,
            result: Err(ApiError::Service("market closed".into())),
        })
        .unwrap();

        app.drain_submission_results();

        assert_eq!(app.trade_log.len(), 1);
        assert!(!app.trade_log[0].outcome.is_filled());
        assert!(app.chart.is_none());
        assert!(!app.trade_form.in_flight());
    }
}
