use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, Line, Plot, PlotPoints};

use crate::models::ChartModel;
use crate::ui::UI_CONFIG;

/// Line chart of the last response series. The line is rebuilt from the
/// model every frame; the model itself only changes when a submission
/// succeeds.
pub(crate) fn render_trend_chart(ui: &mut Ui, model: &ChartModel) {
    // The axis formatter outlives this frame, so it gets its own copy.
    let axis_model = model.clone();
    let x_axis = AxisHints::new(Axis::X)
        .formatter(move |mark, _range| axis_model.axis_label(mark.value));

    Plot::new("trend_chart")
        .height(240.0)
        .custom_x_axes(vec![x_axis])
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            let points = PlotPoints::new(model.points().to_vec());
            plot_ui.line(
                Line::new("trend", points)
                    .color(UI_CONFIG.colors.trend_line)
                    .width(2.0),
            );
        });
}
