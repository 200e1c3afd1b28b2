// ---------------------------------------------------------------------------
// ModalRecord – one mode row of the dataset
// ---------------------------------------------------------------------------

/// One vibration mode from the modal dataset: a label and the
/// identified frequency of every measured sample, in file order.
#[derive(Debug, Clone)]
pub struct ModalRecord {
    /// Mode label from the first CSV column (e.g. "Mode 3").
    pub label: String,
    /// Identified frequency (Hz) per sample.
    pub values: Vec<f64>,
    /// Number of leading samples recorded before the damage event.
    /// Display-only split; the detector is fit on the full row.
    pub undamaged_len: usize,
}

impl ModalRecord {
    /// Samples recorded before the damage event.
    pub fn undamaged(&self) -> &[f64] {
        &self.values[..self.undamaged_len.min(self.values.len())]
    }

    /// Samples recorded after the damage event.
    pub fn damaged(&self) -> &[f64] {
        &self.values[self.undamaged_len.min(self.values.len())..]
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
