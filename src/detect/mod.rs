//! Outlier detection: a fixed linear normalizer feeding an isolation
//! forest. Both are fit exactly once from the calibration sample
//! before any request is served and are never refit, so every request
//! sees the same transform and decision boundary.

pub mod forest;
pub mod scaler;

pub use forest::{ForestParams, IsolationForest};
pub use scaler::StandardScaler;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("calibration sample is empty")]
    EmptyCalibration,
    #[error("calibration sample needs at least 2 values, got {0}")]
    CalibrationTooSmall(usize),
    #[error("forest needs at least one tree")]
    NoTrees,
    #[error("contamination must be in (0, 1), got {0}")]
    InvalidContamination(f64),
}

// ---------------------------------------------------------------------------
// Detector – scaler + forest, fit once
// ---------------------------------------------------------------------------

/// The fixed scaler/forest pair behind the scoring endpoint.
#[derive(Debug, Clone)]
pub struct Detector {
    scaler: StandardScaler,
    forest: IsolationForest,
}

impl Detector {
    /// Fit both stages from the calibration sample.
    pub fn fit(calibration: &[f64], params: ForestParams) -> Result<Self, DetectError> {
        let scaler = StandardScaler::fit(calibration)?;
        let scaled = scaler.transform_all(calibration);
        let forest = IsolationForest::fit(&scaled, params)?;
        Ok(Detector { scaler, forest })
    }

    /// Scale one frequency reading and classify it.
    /// Returns -1 for an anomaly, +1 for a normal reading.
    pub fn score(&self, frequency: f64) -> i32 {
        self.forest.predict(self.scaler.transform(frequency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 192 undamaged samples ramping over [0.99, 1.01] followed by a
    /// 48-sample damaged tail ramping over [0.945, 0.955].
    fn calibration_signal() -> Vec<f64> {
        let mut values: Vec<f64> = (0..192)
            .map(|i| 0.99 + 0.02 * i as f64 / 191.0)
            .collect();
        values.extend((0..48).map(|i| 0.945 + 0.01 * i as f64 / 47.0));
        values
    }

    #[test]
    fn empty_calibration_is_rejected() {
        let err = Detector::fit(&[], ForestParams::default()).unwrap_err();
        assert!(matches!(err, DetectError::EmptyCalibration));
    }

    #[test]
    fn repeated_inputs_get_the_same_label() {
        let detector = Detector::fit(&calibration_signal(), ForestParams::default())
            .expect("fit detector");
        let first = detector.score(0.97);
        for _ in 0..10 {
            assert_eq!(detector.score(0.97), first);
        }
    }

    #[test]
    fn refitting_with_the_same_seed_reproduces_the_boundary() {
        let signal = calibration_signal();
        let a = Detector::fit(&signal, ForestParams::default()).expect("fit a");
        let b = Detector::fit(&signal, ForestParams::default()).expect("fit b");
        for step in 0..=40 {
            let frequency = 0.8 + step as f64 * 0.01;
            assert_eq!(a.score(frequency), b.score(frequency));
        }
    }

    #[test]
    fn a_typical_undamaged_frequency_is_normal() {
        let detector = Detector::fit(&calibration_signal(), ForestParams::default())
            .expect("fit detector");
        assert_eq!(detector.score(1.0), 1);
    }

    #[test]
    fn a_far_off_frequency_is_anomalous() {
        let detector = Detector::fit(&calibration_signal(), ForestParams::default())
            .expect("fit detector");
        assert_eq!(detector.score(0.5), -1);
    }

    #[test]
    fn undamaged_prefix_is_not_systematically_flagged() {
        let signal = calibration_signal();
        let detector =
            Detector::fit(&signal, ForestParams::default()).expect("fit detector");

        let flagged = signal[..192]
            .iter()
            .filter(|&&frequency| detector.score(frequency) == -1)
            .count();

        // Bounded by a small multiple of the 5% contamination rate.
        assert!(
            flagged <= 192 * 15 / 100,
            "{flagged} of 192 undamaged samples flagged"
        );
    }
}
