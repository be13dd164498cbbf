//! Configuration module for the pulse-trader application.

mod api;
mod debug;
mod persistence;

pub use api::API;
pub use debug::DF;
pub use persistence::PERSISTENCE;
