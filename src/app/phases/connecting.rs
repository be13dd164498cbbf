// app/phases/connecting.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::ConnectState};

impl PhaseView for ConnectState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_connecting_state(ctx, self)
    }
}
