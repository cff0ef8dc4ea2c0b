//! Export formats for analysis results.
//!
//! - JSON with the full bundle, for an external renderer
//! - CSV with one row per frequency point
//! - FRD format (frequency response data, compatible with REW)
//!
//! JSON writes non-finite numbers as `null`; CSV and FRD write them literally
//! (`NaN`, `inf`, `-inf`).

use rustfft::num_complex::Complex;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::analyzer::AnalysisResult;

#[derive(Serialize)]
struct JsonDocument<'a> {
    numerator: &'a [f64],
    denominator: &'a [f64],
    sample_count: usize,
    sample_rate_hz: f64,
    frequencies_hz: &'a [f64],
    response: Vec<[f64; 2]>,
    magnitude_db: Vec<f64>,
    phase_rad: Vec<f64>,
    group_delay: &'a [f64],
    zeros: Vec<[f64; 2]>,
    poles: Vec<[f64; 2]>,
    gain: f64,
    stable: bool,
}

fn pairs(values: &[Complex<f64>]) -> Vec<[f64; 2]> {
    values.iter().map(|c| [c.re, c.im]).collect()
}

/// Serialize an analysis result to pretty-printed JSON.
///
/// Complex numbers are written as `[re, im]` pairs.
pub fn to_json(result: &AnalysisResult) -> serde_json::Result<String> {
    let doc = JsonDocument {
        numerator: result.model.numerator(),
        denominator: result.model.denominator(),
        sample_count: result.grid.sample_count(),
        sample_rate_hz: result.grid.sample_rate_hz(),
        frequencies_hz: &result.response.frequencies_hz,
        response: pairs(&result.response.values),
        magnitude_db: result.response.magnitude_db(),
        phase_rad: result.response.phase_rad(),
        group_delay: &result.group_delay,
        zeros: pairs(&result.zpk.zeros),
        poles: pairs(&result.zpk.poles),
        gain: result.zpk.gain,
        stable: result.zpk.is_stable(),
    };
    serde_json::to_string_pretty(&doc)
}

/// Write an analysis result as JSON.
pub fn export_json(result: &AnalysisResult, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = to_json(result).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Write CSV rows of `frequency_hz,magnitude_db,phase_rad,group_delay`.
pub fn write_csv(result: &AnalysisResult, mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "frequency_hz,magnitude_db,phase_rad,group_delay")?;

    let magnitude_db = result.response.magnitude_db();
    let phase_rad = result.response.phase_rad();
    for i in 0..result.response.len() {
        writeln!(
            out,
            "{:.6},{:.6},{:.6},{:.6}",
            result.response.frequencies_hz[i], magnitude_db[i], phase_rad[i], result.group_delay[i]
        )?;
    }

    Ok(())
}

/// Export an analysis result to a CSV file.
pub fn export_csv(result: &AnalysisResult, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(result, &mut out)?;
    out.flush()
}

/// Write FRD lines: `frequency_hz magnitude_db phase_deg`.
pub fn write_frd(result: &AnalysisResult, mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "* Frequency Response Data exported by zplane-analysis")?;

    let magnitude_db = result.response.magnitude_db();
    for (i, h) in result.response.values.iter().enumerate() {
        writeln!(
            out,
            "{:.6} {:.6} {:.6}",
            result.response.frequencies_hz[i],
            magnitude_db[i],
            h.arg().to_degrees()
        )?;
    }

    Ok(())
}

/// Export an analysis result to an FRD file (REW compatible).
pub fn export_frd(result: &AnalysisResult, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_frd(result, &mut out)?;
    out.flush()
}
