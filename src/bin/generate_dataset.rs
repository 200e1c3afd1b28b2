//! Writes the synthetic modal dataset used by the demo when the real
//! bridge measurements are not at hand. Deterministic: a fixed seed
//! produces the same CSV every run.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 240;
const UNDAMAGED: usize = 192;

/// Box-Muller transform for normally distributed noise.
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    let path = "data/yonghe_modal_fdd.csv";
    std::fs::create_dir_all("data").context("creating data directory")?;
    let mut writer = csv::Writer::from_path(path).context("creating output CSV")?;

    // Header: mode label column, then one column per sample.
    let mut header = vec!["Mode".to_string()];
    header.extend((1..=SAMPLES).map(|i| format!("Sample_{i}")));
    writer.write_record(&header).context("writing header")?;

    // (label, undamaged frequency, damaged frequency, noise level)
    let modes = [
        ("Mode 1", 0.37, 0.36, 0.004),
        ("Mode 2", 0.71, 0.69, 0.005),
        ("Mode 3", 1.00, 0.95, 0.006),
        ("Mode 4", 1.32, 1.28, 0.008),
    ];

    for (label, undamaged, damaged, noise) in modes {
        let mut row = vec![label.to_string()];
        for i in 0..SAMPLES {
            let base = if i < UNDAMAGED { undamaged } else { damaged };
            row.push(format!("{:.6}", gauss(&mut rng, base, noise)));
        }
        writer.write_record(&row).context("writing mode row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} modes x {SAMPLES} samples to {path}",
        modes.len()
    );
    Ok(())
}
