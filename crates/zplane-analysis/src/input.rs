//! Text input format for an analysis request
//!
//! A request is a header line plus a two-line body:
//!
//! ```text
//! 512 48000
//! 0.2, 0.4, 0.2
//! 1, -0.6, 0.3
//! ```
//!
//! The header holds `<sample_count> <sample_rate_hz>`, whitespace separated.
//! The body holds the numerator, then the denominator, as comma separated
//! numbers. Blank lines are skipped and lines after the denominator are
//! ignored.

use crate::analyzer::{AnalysisResult, Analyzer};
use crate::error::{AnalysisError, Result};
use crate::model::TransferFunction;
use crate::response::FrequencyGrid;

/// A parsed request: model plus grid.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Transfer function to analyze
    pub model: TransferFunction,
    /// Frequency grid
    pub grid: FrequencyGrid,
}

impl AnalysisRequest {
    /// Parse a header line and a coefficient body.
    pub fn parse(header: &str, body: &str) -> Result<Self> {
        let grid = parse_header(header)?;
        let model = parse_body(body)?;
        Ok(Self { model, grid })
    }

    /// Parse a whole document.
    ///
    /// With three or more non-blank lines the first one is the header. With
    /// exactly two, the document is a body only and `fallback` supplies
    /// `(sample_count, sample_rate_hz)`.
    pub fn parse_document(text: &str, fallback: Option<(usize, f64)>) -> Result<Self> {
        let lines: Vec<&str> = non_blank_lines(text).collect();

        if lines.len() >= 3 {
            let grid = parse_header(lines[0])?;
            let model = parse_coefficient_lines(lines[1], lines[2])?;
            return Ok(Self { model, grid });
        }

        let model = parse_body(text)?;
        match fallback {
            Some((sample_count, sample_rate_hz)) => Ok(Self {
                model,
                grid: FrequencyGrid::new(sample_count, sample_rate_hz)?,
            }),
            None => Err(AnalysisError::invalid_parameter(
                "header",
                "missing '<sample_count> <sample_rate_hz>' line",
            )),
        }
    }

    /// Run the analysis for this request.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        Analyzer::with_grid(self.grid).analyze(&self.model)
    }
}

/// Parse `<sample_count> <sample_rate_hz>`.
///
/// The count may be written as a float (`512.0`) but must be a positive
/// whole number.
pub fn parse_header(line: &str) -> Result<FrequencyGrid> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(AnalysisError::invalid_parameter(
            "header",
            format!("expected '<sample_count> <sample_rate_hz>', got '{}'", line.trim()),
        ));
    }

    let count = parse_number("sample_count", fields[0])?;
    if count.fract() != 0.0 || count < 1.0 || count > u32::MAX as f64 {
        return Err(AnalysisError::invalid_parameter(
            "sample_count",
            format!("must be a positive whole number, got '{}'", fields[0]),
        ));
    }
    let rate = parse_number("sample_rate_hz", fields[1])?;

    FrequencyGrid::new(count as usize, rate)
}

/// Parse a two-line coefficient body into a transfer function.
pub fn parse_body(body: &str) -> Result<TransferFunction> {
    let mut lines = non_blank_lines(body);
    let numerator = lines.next().ok_or_else(|| {
        AnalysisError::degenerate_input("numerator", "missing numerator line")
    })?;
    let denominator = lines.next().ok_or_else(|| {
        AnalysisError::degenerate_input("denominator", "missing denominator line")
    })?;
    parse_coefficient_lines(numerator, denominator)
}

/// Parse a comma separated list of coefficients.
pub fn parse_coefficients(what: &'static str, line: &str) -> Result<Vec<f64>> {
    if line.trim().is_empty() {
        return Err(AnalysisError::degenerate_input(
            what,
            "coefficient list is empty",
        ));
    }
    line.split(',').map(|v| parse_number(what, v)).collect()
}

fn parse_coefficient_lines(numerator: &str, denominator: &str) -> Result<TransferFunction> {
    TransferFunction::new(
        parse_coefficients("numerator", numerator)?,
        parse_coefficients("denominator", denominator)?,
    )
}

fn parse_number(what: &'static str, field: &str) -> Result<f64> {
    let field = field.trim();
    field.parse::<f64>().map_err(|_| {
        AnalysisError::invalid_parameter(what, format!("'{field}' is not a number"))
    })
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|l| !l.trim().is_empty())
}
