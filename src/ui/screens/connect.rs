use eframe::egui::{CentralPanel, Context, RichText, Spinner};

use crate::ui::{UI_CONFIG, UI_TEXT};

/// Startup screen shown while the health probe is still out.
pub(crate) fn render_connecting(ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading(
                RichText::new(UI_TEXT.connect_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(UI_TEXT.connect_message)
                    .italics()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(20.0);
            ui.add(Spinner::new().size(32.0));
        });
    });
}
