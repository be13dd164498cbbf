use eframe::egui::{
    Align, CentralPanel, ComboBox, Context, Grid, Key, Layout, RichText, ScrollArea, SidePanel,
    Spinner, TextEdit, TopBottomPanel, Ui, Window,
};
use strum::IntoEnumIterator;

use crate::app::{App, ServiceStatus};
use crate::app::trade_form::SubmitStatus;
use crate::models::TradeAction;
use crate::ui::chart_view::render_trend_chart;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::history_time_string;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button(UI_TEXT.menu_button)
                        .on_hover_text(UI_TEXT.menu_hint)
                        .clicked()
                    {
                        self.toggle_menu();
                    }
                    ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.about_button).clicked() {
                            self.show_about = !self.show_about;
                        }
                    });
                });
            });
    }

    pub(crate) fn render_menu_panel(&mut self, ctx: &Context) {
        SidePanel::left("menu_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(UI_TEXT.nav_heading)
                        .color(UI_CONFIG.colors.subsection_heading),
                );
                ui.separator();
                ui.checkbox(&mut self.show_history, UI_TEXT.nav_show_history);
                ui.add_space(5.0);
                if ui.button(UI_TEXT.about_button).clicked() {
                    self.show_about = true;
                }
            });
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match &self.service_status {
                        ServiceStatus::Unknown => {
                            ui.label(UI_TEXT.status_probing);
                        }
                        ServiceStatus::Online { service, version } => {
                            ui.colored_label(
                                UI_CONFIG.colors.positive,
                                format!("{} {} v{}", UI_TEXT.status_online_prefix, service, version),
                            );
                        }
                        ServiceStatus::Offline { error } => {
                            ui.colored_label(
                                UI_CONFIG.colors.negative,
                                format!("{} {}", UI_TEXT.status_offline_prefix, error),
                            );
                        }
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "{} {}",
                            self.trade_log.len(),
                            UI_TEXT.status_trades_suffix
                        ));
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.render_trade_form(ui);
                    ui.add_space(12.0);
                    self.render_result_area(ui);
                    ui.add_space(12.0);
                    self.render_chart_section(ui);
                    if self.show_history {
                        ui.add_space(12.0);
                        self.render_history(ui);
                    }
                });
            });
    }

    fn render_trade_form(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new(UI_TEXT.trade_heading).color(UI_CONFIG.colors.subsection_heading),
        );
        ui.add_space(5.0);

        let mut enter_submit = false;
        Grid::new("trade_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.stock_label);
                let response = ui.add(
                    TextEdit::singleline(&mut self.trade_form.stock)
                        .desired_width(140.0)
                        .hint_text(UI_TEXT.stock_hint),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    enter_submit = true;
                }
                ui.end_row();

                ui.label(UI_TEXT.action_label);
                ComboBox::from_id_salt("trade_action")
                    .selected_text(self.trade_form.action.to_string())
                    .show_ui(ui, |ui| {
                        for action in TradeAction::iter() {
                            ui.selectable_value(
                                &mut self.trade_form.action,
                                action,
                                action.to_string(),
                            );
                        }
                    });
                ui.end_row();
            });

        ui.add_space(5.0);
        if ui.button(UI_TEXT.submit_button).clicked() || enter_submit {
            self.submit_trade_form();
        }
    }

    fn render_result_area(&self, ui: &mut Ui) {
        ui.label(RichText::new(UI_TEXT.result_heading).color(UI_CONFIG.colors.subsection_heading));
        match &self.trade_form.status {
            SubmitStatus::Idle => {
                ui.label(RichText::new(UI_TEXT.idle_hint).italics());
            }
            SubmitStatus::Submitting => {
                ui.horizontal(|ui| {
                    ui.add(Spinner::new());
                    ui.label(UI_TEXT.loading_text);
                });
            }
            SubmitStatus::Done { message } => {
                ui.colored_label(UI_CONFIG.colors.positive, message);
            }
            SubmitStatus::Failed { error } => {
                ui.colored_label(UI_CONFIG.colors.negative, error);
            }
        }
    }

    fn render_chart_section(&self, ui: &mut Ui) {
        ui.label(RichText::new(UI_TEXT.chart_heading).color(UI_CONFIG.colors.subsection_heading));
        match &self.chart {
            Some(model) if !model.is_empty() => render_trend_chart(ui, model),
            _ => {
                ui.label(RichText::new(UI_TEXT.chart_empty).italics());
            }
        }
    }

    fn render_history(&self, ui: &mut Ui) {
        ui.label(
            RichText::new(UI_TEXT.history_heading).color(UI_CONFIG.colors.subsection_heading),
        );
        if self.trade_log.is_empty() {
            ui.label(RichText::new(UI_TEXT.history_empty).italics());
            return;
        }

        Grid::new("history_grid")
            .striped(true)
            .spacing([15.0, 4.0])
            .show(ui, |ui| {
                // Newest first
                for record in self.trade_log.iter().rev() {
                    ui.label(history_time_string(&record.submitted_at));
                    ui.label(&record.stock);
                    let side_color = match record.action {
                        TradeAction::Buy => UI_CONFIG.colors.positive,
                        TradeAction::Sell => UI_CONFIG.colors.negative,
                    };
                    ui.colored_label(side_color, record.action.to_string());
                    ui.label(record.outcome.summary());
                    ui.end_row();
                }
            });
    }

    pub(crate) fn render_about_window(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        let mut open = self.show_about;
        Window::new(UI_TEXT.about_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} v{}",
                    UI_TEXT.app_title,
                    env!("CARGO_PKG_VERSION")
                ));
                match &self.service_status {
                    ServiceStatus::Online { service, version } => {
                        ui.label(format!("Connected to {} v{}", service, version));
                    }
                    _ => {
                        ui.label(UI_TEXT.about_offline);
                    }
                }
            });
        self.show_about = open;
    }
}
