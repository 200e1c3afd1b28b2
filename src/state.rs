use crate::data::model::ModalRecord;
use crate::server::PredictionResponse;

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// One row of the session log: the inputs plus the service verdict.
#[derive(Debug, Clone)]
pub struct PredictionRecord {
    pub frequency: f64,
    pub wind_strength: f64,
    /// -1 = anomaly, 1 = normal.
    pub prediction: i32,
}

/// The full UI state, independent of rendering.
pub struct DashboardState {
    /// Active signal for the history chart (None if the CSV failed to load).
    pub signal: Option<ModalRecord>,

    /// Slider: simulated cable frequency (Hz).
    pub frequency: f64,

    /// Slider: simulated wind strength.
    pub wind_strength: f64,

    /// Append-only session log, one entry per successful call. Never
    /// trimmed or persisted; it dies with the process.
    pub predictions: Vec<PredictionRecord>,

    /// Inline warning shown when a service call fails.
    pub status_message: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            signal: None,
            frequency: 1.0,
            wind_strength: 2.0,
            predictions: Vec::new(),
            status_message: None,
        }
    }
}

impl DashboardState {
    /// Append one service response to the session log.
    pub fn record(&mut self, response: &PredictionResponse) {
        self.predictions.push(PredictionRecord {
            frequency: response.frequency,
            wind_strength: response.wind_strength,
            prediction: response.prediction,
        });
        self.status_message = None;
    }

    /// Verdict of the most recent call, if any.
    pub fn last_prediction(&self) -> Option<i32> {
        self.predictions.last().map(|record| record.prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(frequency: f64, prediction: i32) -> PredictionResponse {
        PredictionResponse {
            prediction,
            frequency,
            wind_strength: 2.0,
        }
    }

    #[test]
    fn log_grows_by_one_entry_per_call_in_order() {
        let mut state = DashboardState::default();
        for i in 0..5 {
            state.record(&response(1.0 + i as f64 * 0.01, 1));
        }
        assert_eq!(state.predictions.len(), 5);
        for (i, record) in state.predictions.iter().enumerate() {
            assert_eq!(record.frequency, 1.0 + i as f64 * 0.01);
        }
    }

    #[test]
    fn last_prediction_tracks_the_newest_entry() {
        let mut state = DashboardState::default();
        assert_eq!(state.last_prediction(), None);
        state.record(&response(1.0, 1));
        state.record(&response(0.85, -1));
        assert_eq!(state.last_prediction(), Some(-1));
    }

    #[test]
    fn a_successful_call_clears_the_warning() {
        let mut state = DashboardState {
            status_message: Some("Error communicating with the server".to_string()),
            ..DashboardState::default()
        };
        state.record(&response(1.0, 1));
        assert_eq!(state.status_message, None);
    }
}
