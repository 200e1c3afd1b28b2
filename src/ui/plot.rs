use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Frequency history (central panel)
// ---------------------------------------------------------------------------

/// Two-line history chart: the undamaged prefix in green, the damaged
/// tail in red.
pub fn history_plot(ui: &mut Ui, state: &DashboardState) {
    let Some(signal) = &state.signal else {
        ui.label("No dataset loaded; history chart unavailable.");
        return;
    };

    let undamaged: PlotPoints = signal
        .undamaged()
        .iter()
        .enumerate()
        .map(|(i, &y)| [i as f64, y])
        .collect();

    let offset = signal.undamaged().len();
    let damaged: PlotPoints = signal
        .damaged()
        .iter()
        .enumerate()
        .map(|(i, &y)| [(offset + i) as f64, y])
        .collect();

    Plot::new("history_plot")
        .legend(Legend::default())
        .x_axis_label("Sample")
        .y_axis_label("Frequency (Hz)")
        .height(260.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(undamaged)
                    .name("Undamaged")
                    .color(Color32::GREEN)
                    .width(1.5),
            );
            plot_ui.line(
                Line::new(damaged)
                    .name("Damaged")
                    .color(Color32::RED)
                    .width(1.5),
            );
        });
}
