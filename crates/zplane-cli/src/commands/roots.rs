//! Polynomial root command.

use clap::Args;
use zplane_analysis::{input::parse_coefficients, roots, zpk::sort_roots};

use super::common::format_complex;

/// Print polynomial roots.
#[derive(Args)]
pub struct RootsArgs {
    /// Coefficients, highest power first, comma separated (e.g. "1,-3,2")
    #[arg(value_name = "COEFFS", allow_hyphen_values = true)]
    coefficients: String,
}

/// Run the roots command.
pub fn run(args: RootsArgs) -> anyhow::Result<()> {
    let coeffs = parse_coefficients("coefficients", &args.coefficients)?;
    let found = sort_roots(roots(&coeffs)?);

    tracing::info!(degree = coeffs.len() - 1, roots = found.len(), "roots found");

    if found.is_empty() {
        println!("No roots (constant polynomial)");
        return Ok(());
    }

    println!("  {:>28}  {:>10}  {:>10}", "Root", "Radius", "Angle");
    for z in &found {
        println!(
            "  {:>28}  {:>10.6}  {:>10.6}",
            format_complex(*z),
            z.norm(),
            z.arg()
        );
    }

    Ok(())
}
