//! Filter analysis command.

use clap::Args;
use std::path::PathBuf;
use zplane_analysis::{AnalysisRequest, AnalysisResult, FrequencyGrid, export};
use zplane_config::ExportFormat;

use super::common::{format_complex, load_settings, read_input};

/// Analyze a transfer function.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input file ('-' or omitted for stdin)
    ///
    /// Line 1: "<sample_count> <sample_rate_hz>" (optional, falls back to
    /// settings); then the numerator and denominator as comma separated lists.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Number of frequency points (overrides the input header)
    #[arg(short = 'n', long)]
    sample_count: Option<usize>,

    /// Sample rate in Hz (overrides the input header)
    #[arg(short = 'r', long)]
    sample_rate: Option<f64>,

    /// Settings file (defaults to the user settings file)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export the full result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format: json, csv or frd (defaults to settings)
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Print the full result as JSON instead of the report
    #[arg(long)]
    json: bool,
}

/// Run the analyze command.
pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let text = read_input(args.input.as_deref())?;

    let parsed = AnalysisRequest::parse_document(&text, Some(settings.grid_defaults()))?;
    let request = AnalysisRequest {
        grid: FrequencyGrid::new(
            args.sample_count.unwrap_or(parsed.grid.sample_count()),
            args.sample_rate.unwrap_or(parsed.grid.sample_rate_hz()),
        )?,
        model: parsed.model,
    };

    tracing::info!(
        order = request.model.order(),
        sample_count = request.grid.sample_count(),
        sample_rate_hz = request.grid.sample_rate_hz(),
        "analyzing filter"
    );
    let result = request.analyze()?;

    if args.json {
        println!("{}", export::to_json(&result)?);
    } else {
        print_report(&result);
    }

    if let Some(output) = args.output {
        let format = args.format.unwrap_or(settings.export.format);
        match format {
            ExportFormat::Json => export::export_json(&result, &output)?,
            ExportFormat::Csv => export::export_csv(&result, &output)?,
            ExportFormat::Frd => export::export_frd(&result, &output)?,
        }
        tracing::info!(path = %output.display(), %format, "result exported");
        if !args.json {
            println!("\nSaved {} to {}", format, output.display());
        }
    }

    Ok(())
}

fn print_report(result: &AnalysisResult) {
    let model = &result.model;
    let zpk = &result.zpk;

    println!("Filter analysis");
    println!("  Order:       {}", model.order());
    println!("  Numerator:   {:?}", model.numerator());
    println!("  Denominator: {:?}", model.denominator());
    println!(
        "  Grid:        {} points, {} Hz",
        result.grid.sample_count(),
        result.grid.sample_rate_hz()
    );

    println!("\nZero/pole/gain:");
    println!("  Gain: {}", zpk.gain);
    println!("  Zeros ({}):", zpk.zeros.len());
    for z in &zpk.zeros {
        println!("    {}  |z| = {:.6}", format_complex(*z), z.norm());
    }
    println!("  Poles ({}):", zpk.poles.len());
    for p in &zpk.poles {
        println!("    {}  |p| = {:.6}", format_complex(*p), p.norm());
    }
    println!(
        "  Stable: {}  Minimum phase: {}",
        if zpk.is_stable() { "yes" } else { "no" },
        if zpk.is_minimum_phase() { "yes" } else { "no" }
    );

    let freqs = &result.response.frequencies_hz;
    let db = result.response.magnitude_db();
    println!("\nResponse:");
    println!("  {:>12}  {:>12}  {:>10}  {:>10}", "Freq (Hz)", "Level (dB)", "Phase", "Delay");
    for i in summary_indices(freqs.len()) {
        println!(
            "  {:>12.2}  {:>12.3}  {:>10.4}  {:>10.4}",
            freqs[i],
            db[i],
            result.response.values[i].arg(),
            result.group_delay[i]
        );
    }

    let finite: Vec<f64> = result
        .group_delay
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .collect();
    if let (Some(min), Some(max)) = (
        finite.iter().copied().reduce(f64::min),
        finite.iter().copied().reduce(f64::max),
    ) {
        println!("\nGroup delay range: {:.4} .. {:.4} samples", min, max);
    }
    let undefined = result.undefined_group_delay_count();
    if undefined > 0 {
        println!("Undefined group delay at {} point(s)", undefined);
    }
}

/// Up to five evenly spread indices including the first and last point.
fn summary_indices(len: usize) -> Vec<usize> {
    if len <= 5 {
        return (0..len).collect();
    }
    let mut indices: Vec<usize> = (0..5).map(|i| i * (len - 1) / 4).collect();
    indices.dedup();
    indices
}
