use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use bridgewatch::config;
use bridgewatch::data::loader;
use bridgewatch::detect::{Detector, ForestParams};
use bridgewatch::server;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let data_path = config::data_path();
    let signal = loader::load_modal_csv(&data_path, loader::ACTIVE_MODE_ROW)
        .with_context(|| format!("loading calibration data from {}", data_path.display()))?;
    log::info!(
        "calibration sample: {} values from {}",
        signal.len(),
        signal.label
    );

    // Fit once, before the listener binds. Requests never refit.
    let detector = Detector::fit(&signal.values, ForestParams::default())
        .context("fitting the outlier detector")?;
    let app = server::app(Arc::new(detector));

    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("detection service listening on {addr}");

    axum::serve(listener, app)
        .await
        .context("serving the detection API")?;
    Ok(())
}
