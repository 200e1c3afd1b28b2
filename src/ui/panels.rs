use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::client::PredictionClient;
use crate::state::DashboardState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Left side panel – live data inputs
// ---------------------------------------------------------------------------

/// Render the sliders and the predict button.
pub fn input_panel(ui: &mut Ui, state: &mut DashboardState, client: &PredictionClient) {
    ui.heading("Input Live Data");
    ui.separator();

    ui.label("Simulated cable frequency (Hz)");
    ui.add(
        egui::Slider::new(&mut state.frequency, 0.8..=1.2)
            .step_by(0.01)
            .fixed_decimals(2),
    );
    ui.add_space(4.0);

    ui.label("Simulated wind strength");
    ui.add(
        egui::Slider::new(&mut state.wind_strength, 0.0..=10.0)
            .step_by(1.0)
            .fixed_decimals(0),
    );
    ui.add_space(8.0);

    if ui.button("Predict Anomaly").clicked() {
        // One blocking round-trip per click; the result lands in the
        // session log, failures in the inline warning.
        match client.predict(state.frequency, state.wind_strength) {
            Ok(response) => {
                log::info!(
                    "prediction {} for frequency {:.2}",
                    response.prediction,
                    response.frequency
                );
                state.record(&response);
            }
            Err(e) => {
                log::error!("prediction request failed: {e:#}");
                state.status_message =
                    Some(format!("Error communicating with the server: {e:#}"));
            }
        }
    }

    if let Some(msg) = &state.status_message {
        ui.add_space(8.0);
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

// ---------------------------------------------------------------------------
// Central panel – status, readouts, chart, session log
// ---------------------------------------------------------------------------

pub fn detection_panel(ui: &mut Ui, state: &DashboardState) {
    ui.heading("Live Anomaly Detection");
    ui.separator();

    ui.columns(2, |columns| {
        status_box(&mut columns[0], state);
        readouts(&mut columns[1], state);
    });
    ui.add_space(8.0);

    let title = state
        .signal
        .as_ref()
        .map(|signal| format!("{} frequency history", signal.label))
        .unwrap_or_else(|| "Frequency history".to_string());
    ui.strong(title);
    plot::history_plot(ui, state);
    ui.add_space(8.0);

    ui.strong("Live data log");
    prediction_table(ui, state);
}

fn status_box(ui: &mut Ui, state: &DashboardState) {
    match state.last_prediction() {
        Some(-1) => {
            ui.colored_label(
                Color32::RED,
                "Anomaly detected! High risk of structural failure.",
            );
        }
        Some(_) => {
            ui.colored_label(
                Color32::GREEN,
                "Structure is stable. No anomalies detected.",
            );
        }
        None => {
            ui.label("No predictions yet.");
        }
    }
}

fn readouts(ui: &mut Ui, state: &DashboardState) {
    ui.label(format!("Current frequency: {:.2} Hz", state.frequency));
    ui.label(format!("Wind strength: {:.0}", state.wind_strength));
}

fn prediction_table(ui: &mut Ui, state: &DashboardState) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Frequency (Hz)");
            });
            header.col(|ui| {
                ui.strong("Wind strength");
            });
            header.col(|ui| {
                ui.strong("Anomaly (1 = normal, -1 = fault)");
            });
        })
        .body(|mut body| {
            for record in &state.predictions {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{:.2}", record.frequency));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", record.wind_strength));
                    });
                    row.col(|ui| {
                        let color = if record.prediction == -1 {
                            Color32::RED
                        } else {
                            Color32::GREEN
                        };
                        ui.colored_label(color, record.prediction.to_string());
                    });
                });
            }
        });
}
