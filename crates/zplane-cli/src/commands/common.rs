//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use std::io::Read;
use std::path::Path;
use zplane_analysis::Complex;
use zplane_config::Settings;

/// Load settings from `--config`, else the user settings file, else defaults.
pub fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default()?,
    };
    tracing::debug!(
        sample_count = settings.sample_count,
        sample_rate_hz = settings.sample_rate_hz,
        "settings loaded"
    );
    Ok(settings)
}

/// Read a whole input file, or stdin when the path is absent or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read input '{}'", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Format a complex number as `re+imj` with six decimals.
///
/// Parts that round to zero print unsigned.
pub fn format_complex(z: Complex<f64>) -> String {
    let re = if z.re.abs() < 5e-7 { 0.0 } else { z.re };
    let im = if z.im.abs() < 5e-7 { 0.0 } else { z.im };
    let sign = if im < 0.0 { '-' } else { '+' };
    format!("{:.6}{}{:.6}j", re, sign, im.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(Complex::new(0.5, 0.0)), "0.500000+0.000000j");
        assert_eq!(format_complex(Complex::new(-1.0, -0.25)), "-1.000000-0.250000j");
        assert_eq!(format_complex(Complex::new(-1e-12, -1e-17)), "0.000000+0.000000j");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.txt");
        std::fs::write(&path, "8 100\n1\n1, -0.5\n").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "8 100\n1\n1, -0.5\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/filter.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to read input"));
    }
}
