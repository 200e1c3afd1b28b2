use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::ModalRecord;

// ---------------------------------------------------------------------------
// Fixed-format modal CSV
// ---------------------------------------------------------------------------

/// Row index of the mode used as the active signal (Mode 3 in the
/// Yonghe bridge dataset).
pub const ACTIVE_MODE_ROW: usize = 2;

/// Samples recorded before the damage event; everything after is the
/// damaged tail.
pub const UNDAMAGED_SAMPLES: usize = 192;

/// Load one mode row from a fixed-format modal CSV.
///
/// Layout: the header row names the samples; each data row is one
/// vibration mode with the mode label in column 0 and one numeric
/// frequency per remaining column.
pub fn load_modal_csv(path: &Path, mode_row: usize) -> Result<ModalRecord> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening modal CSV {}", path.display()))?;

    let record = reader
        .records()
        .nth(mode_row)
        .with_context(|| format!("CSV has no data row {mode_row}"))?
        .with_context(|| format!("reading CSV row {mode_row}"))?;

    if record.len() < 2 {
        bail!("CSV row {mode_row} has no sample columns");
    }

    let label = record.get(0).unwrap_or("").to_string();

    let values = record
        .iter()
        .skip(1)
        .enumerate()
        .map(|(col, cell)| {
            cell.trim()
                .parse::<f64>()
                .with_context(|| format!("row {mode_row}, sample {col}: '{cell}' is not a number"))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(ModalRecord {
        label,
        values,
        undamaged_len: UNDAMAGED_SAMPLES,
    })
}
