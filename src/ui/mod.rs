mod chart_view;
mod screens;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use screens::render_connecting;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
