mod phases;
mod root;
mod state;
pub mod trade_form;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, ConnectState, ReadyState, ServiceStatus};

pub use root::App;
