//! Transfer function model

use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// Rational transfer function `B(z) / A(z)` of a discrete-time filter.
///
/// Both coefficient sequences are stored highest power first, i.e.
/// `H(z) = (b[0] + b[1] z^-1 + ...) / (a[0] + a[1] z^-1 + ...)`.
///
/// The model is validated once at construction and immutable afterwards:
///
/// - both sequences are non-empty
/// - every coefficient is finite
/// - the denominator is not identically zero and `a[0] != 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferFunction {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
}

impl TransferFunction {
    /// Create a validated transfer function from `b` and `a` coefficients.
    pub fn new(numerator: impl Into<Vec<f64>>, denominator: impl Into<Vec<f64>>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();

        check_coefficients("numerator", &numerator)?;
        check_coefficients("denominator", &denominator)?;

        if denominator.iter().all(|&a| a == 0.0) {
            return Err(AnalysisError::degenerate_input(
                "denominator",
                "denominator is identically zero",
            ));
        }
        if denominator[0] == 0.0 {
            return Err(AnalysisError::invalid_parameter(
                "denominator",
                "leading denominator coefficient must be non-zero",
            ));
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// FIR filter with the given taps (`a = [1]`).
    pub fn fir(taps: impl Into<Vec<f64>>) -> Result<Self> {
        Self::new(taps, vec![1.0])
    }

    /// Pure gain `H(z) = k`.
    pub fn gain(k: f64) -> Result<Self> {
        Self::new(vec![k], vec![1.0])
    }

    /// Numerator coefficients `b`.
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// Denominator coefficients `a`.
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Filter order: the larger of the two polynomial degrees.
    pub fn order(&self) -> usize {
        self.numerator.len().max(self.denominator.len()) - 1
    }

    /// True if the denominator is a single coefficient.
    pub fn is_fir(&self) -> bool {
        self.denominator.len() == 1
    }

    /// True if every numerator coefficient is zero.
    pub fn is_null(&self) -> bool {
        self.numerator.iter().all(|&b| b == 0.0)
    }
}

fn check_coefficients(what: &'static str, coeffs: &[f64]) -> Result<()> {
    if coeffs.is_empty() {
        return Err(AnalysisError::degenerate_input(
            what,
            "coefficient sequence is empty",
        ));
    }
    if let Some(i) = coeffs.iter().position(|c| !c.is_finite()) {
        return Err(AnalysisError::invalid_parameter(
            what,
            format!("coefficient {i} is not finite ({})", coeffs[i]),
        ));
    }
    Ok(())
}
