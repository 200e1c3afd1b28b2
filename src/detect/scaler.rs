use super::DetectError;

// ---------------------------------------------------------------------------
// StandardScaler – fixed linear transform
// ---------------------------------------------------------------------------

/// Subtract mean, divide by standard deviation. Fit once from the
/// calibration sample, then applied identically to every input.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: f64,
    std_dev: f64,
}

impl StandardScaler {
    /// Fit the mean and population standard deviation of `data`.
    pub fn fit(data: &[f64]) -> Result<Self, DetectError> {
        if data.is_empty() {
            return Err(DetectError::EmptyCalibration);
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let var = data.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
        // A constant calibration sample would otherwise divide by zero.
        let std_dev = var.sqrt().max(1e-12);
        Ok(StandardScaler { mean, std_dev })
    }

    /// Transform one value.
    pub fn transform(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }

    /// Transform a whole slice.
    pub fn transform_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.transform(v)).collect()
    }
}
