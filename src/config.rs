//! Environment-variable configuration with demo-friendly defaults.

use std::env;
use std::path::PathBuf;

/// Path of the modal CSV read at startup.
pub const DATA_ENV: &str = "BRIDGEWATCH_DATA";
/// Scoring endpoint the dashboard posts to.
pub const API_URL_ENV: &str = "BRIDGEWATCH_API_URL";
/// Address the detection service binds.
pub const BIND_ENV: &str = "BRIDGEWATCH_BIND";

pub fn data_path() -> PathBuf {
    env::var(DATA_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/yonghe_modal_fdd.csv"))
}

pub fn api_url() -> String {
    env::var(API_URL_ENV).unwrap_or_else(|_| crate::client::DEFAULT_API_URL.to_string())
}

pub fn bind_addr() -> String {
    env::var(BIND_ENV).unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        // Env vars are process-global; only exercise the defaults here.
        if env::var(DATA_ENV).is_err() {
            assert!(data_path().to_string_lossy().ends_with(".csv"));
        }
        if env::var(API_URL_ENV).is_err() {
            assert!(api_url().ends_with("/predict"));
        }
        if env::var(BIND_ENV).is_err() {
            assert!(bind_addr().contains(':'));
        }
    }
}
