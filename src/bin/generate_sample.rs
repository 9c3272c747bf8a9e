use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bc03_json::config::DEFAULT_INPUT;
use bc03_json::data::model::AgeLabel;

/// Planck constant × c / k_B, in Å·K.
const HC_OVER_K: f64 = 1.438_776_9e8;

/// Blackbody spectral shape at wavelength `lambda` (Å), unnormalised.
fn planck(lambda: f64, temperature: f64) -> f64 {
    let x = HC_OVER_K / (lambda * temperature);
    if x > 700.0 {
        return 0.0;
    }
    lambda.powi(-5) / x.exp_m1()
}

/// Effective temperature and luminosity scale of a population of the given
/// age. Young populations are hot and bright, old ones cool and faint.
fn population(age_myr: f64) -> (f64, f64) {
    let temperature = 30_000.0 * age_myr.powf(-0.25) + 3_500.0;
    let luminosity = age_myr.powf(-0.8);
    (temperature, luminosity)
}

/// Wavelength grid: `n` points log-spaced from 91 Å to 160 µm.
fn wavelength_grid(n: usize) -> Vec<f64> {
    let (lo, hi) = (91.0_f64.ln(), 1.6e6_f64.ln());
    (0..n)
        .map(|i| (lo + (hi - lo) * i as f64 / (n - 1) as f64).exp())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let wavelengths = wavelength_grid(1221);
    let populations: Vec<(f64, f64)> = AgeLabel::ALL
        .iter()
        .map(|age| population(age.myr() as f64))
        .collect();

    // Normalise each population so its peak flux equals its luminosity.
    let peaks: Vec<f64> = populations
        .iter()
        .map(|&(t, _)| {
            wavelengths
                .iter()
                .map(|&w| planck(w, t))
                .fold(f64::MIN_POSITIVE, f64::max)
        })
        .collect();

    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    for &w in &wavelengths {
        write!(out, "{w:.4}")?;
        for (&(t, lum), &peak) in populations.iter().zip(&peaks) {
            write!(out, "  {:.6e}", lum * planck(w, t) / peak)?;
        }
        writeln!(out)?;
    }
    out.flush()
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {} wavelengths × {} ages to {}",
        wavelengths.len(),
        AgeLabel::ALL.len(),
        output_path.display()
    );
    Ok(())
}
