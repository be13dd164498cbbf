// src/app/state.rs

pub(crate) enum AppState {
    Connecting(ConnectState),
    Ready(ReadyState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Connecting(ConnectState)
    }
}

#[derive(Clone)]
pub(crate) struct ConnectState;

#[derive(Clone)]
pub(crate) struct ReadyState;

/// What we know about the trade service, per the startup health probe.
#[derive(Debug, Clone, Default)]
pub(crate) enum ServiceStatus {
    #[default]
    Unknown,
    Online {
        service: String,
        version: String,
    },
    Offline {
        error: String,
    },
}
