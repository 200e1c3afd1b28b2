use eframe::egui;

use crate::client::PredictionClient;
use crate::state::DashboardState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BridgewatchApp {
    pub state: DashboardState,
    client: PredictionClient,
}

impl BridgewatchApp {
    pub fn new(state: DashboardState, client: PredictionClient) -> Self {
        BridgewatchApp { state, client }
    }
}

impl eframe::App for BridgewatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: live data inputs ----
        egui::SidePanel::left("input_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::input_panel(ui, &mut self.state, &self.client);
            });

        // ---- Central panel: status, history chart, session log ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::detection_panel(ui, &self.state);
        });
    }
}
