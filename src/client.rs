use anyhow::{Context, Result, anyhow};

use crate::server::PredictionResponse;

// ---------------------------------------------------------------------------
// Blocking client for the detection service
// ---------------------------------------------------------------------------

/// Where the detection service listens by default.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/predict";

/// Blocking HTTP client used by the dashboard. One call per button
/// press; no retries.
pub struct PredictionClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl PredictionClient {
    pub fn new(url: impl Into<String>) -> Self {
        PredictionClient {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// POST one reading as form data and decode the service response.
    pub fn predict(&self, frequency: f64, wind_strength: f64) -> Result<PredictionResponse> {
        let response = self
            .client
            .post(&self.url)
            .form(&[
                ("frequency", frequency.to_string()),
                ("wind_strength", wind_strength.to_string()),
            ])
            .send()
            .context("sending prediction request")?;

        let status = response.status();
        let text = response.text().context("reading prediction response")?;

        if !status.is_success() {
            // The service reports failures as {"error": "..."}.
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v["error"].as_str().map(String::from))
                .unwrap_or(text);
            return Err(anyhow!("service returned {status}: {message}"));
        }

        serde_json::from_str(&text).context("decoding prediction response")
    }
}
