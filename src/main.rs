use bridgewatch::app::BridgewatchApp;
use bridgewatch::client::PredictionClient;
use bridgewatch::config;
use bridgewatch::data::loader;
use bridgewatch::state::DashboardState;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = DashboardState::default();
    let data_path = config::data_path();
    match loader::load_modal_csv(&data_path, loader::ACTIVE_MODE_ROW) {
        Ok(signal) => {
            log::info!("loaded {} samples for {}", signal.len(), signal.label);
            state.signal = Some(signal);
        }
        Err(e) => {
            // The dashboard still runs; only the history chart is lost.
            log::error!("failed to load {}: {e:#}", data_path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }

    let client = PredictionClient::new(config::api_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bridgewatch – Structural Health Monitoring",
        options,
        Box::new(|_cc| Ok(Box::new(BridgewatchApp::new(state, client)))),
    )
}
