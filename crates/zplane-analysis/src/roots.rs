//! Polynomial root finding via companion-matrix eigenvalues
//!
//! The roots of `c[0] x^n + c[1] x^(n-1) + ... + c[n]` are the eigenvalues of
//! its companion matrix. The eigenvalues come from a real Schur decomposition,
//! which stays well behaved for the moderate degrees (a few tens) that filter
//! polynomials reach.
//!
//! Real-coefficient input yields roots in conjugate pairs. The pairing is not
//! enforced structurally; it holds to roughly 1e-9 relative for well-scaled
//! polynomials of filter order.

use nalgebra::DMatrix;
use rustfft::num_complex::Complex;

use crate::error::{AnalysisError, Result};
use crate::poly::trim_zeros;

/// Build the companion matrix of a polynomial (highest power first).
///
/// For `n` coefficients the matrix is `(n-1) x (n-1)`: the first row holds
/// `-c[1..] / c[0]` and the sub-diagonal is all ones.
///
/// # Example
///
/// ```rust
/// use zplane_analysis::roots::companion;
///
/// let m = companion(&[1.0, -10.0, 31.0, -30.0]).unwrap();
/// assert_eq!(m[(0, 0)], 10.0);
/// assert_eq!(m[(1, 0)], 1.0);
/// ```
pub fn companion(coeffs: &[f64]) -> Result<DMatrix<f64>> {
    if coeffs.len() < 2 {
        return Err(AnalysisError::degenerate_input(
            "coefficients",
            "companion matrix requires at least 2 coefficients",
        ));
    }
    let c0 = coeffs[0];
    if c0 == 0.0 {
        return Err(AnalysisError::degenerate_input(
            "coefficients",
            "leading coefficient must be non-zero",
        ));
    }

    let n = coeffs.len() - 1;
    let mut matrix = DMatrix::zeros(n, n);
    for (j, &c) in coeffs.iter().skip(1).enumerate() {
        matrix[(0, j)] = -c / c0;
    }
    for i in 1..n {
        matrix[(i, i - 1)] = 1.0;
    }
    Ok(matrix)
}

/// Find the roots of a polynomial given highest-power-first coefficients.
///
/// - Leading exact zeros are dropped; they do not change the polynomial.
/// - Trailing exact zeros are factored out as roots at the origin and
///   re-added after solving the reduced polynomial.
/// - A constant (or identically zero) polynomial has no roots.
///
/// Root order follows the eigen-solver; callers that need a stable order
/// sort the result themselves (see [`crate::zpk::sort_roots`]).
///
/// # Errors
///
/// `DegenerateInput` for an empty sequence, `InvalidParameter` for
/// non-finite coefficients.
pub fn roots(coeffs: &[f64]) -> Result<Vec<Complex<f64>>> {
    if coeffs.is_empty() {
        return Err(AnalysisError::degenerate_input(
            "coefficients",
            "coefficient sequence is empty",
        ));
    }
    if let Some(i) = coeffs.iter().position(|c| !c.is_finite()) {
        return Err(AnalysisError::invalid_parameter(
            "coefficients",
            format!("coefficient {i} is not finite ({})", coeffs[i]),
        ));
    }

    let (core, at_origin) = trim_zeros(coeffs);
    let mut out = Vec::with_capacity(core.len().saturating_sub(1) + at_origin);

    if core.len() >= 2 {
        let matrix = companion(core)?;
        out.extend(
            matrix
                .complex_eigenvalues()
                .iter()
                .map(|ev| Complex::new(ev.re, ev.im)),
        );
    }
    out.extend(std::iter::repeat_n(Complex::new(0.0, 0.0), at_origin));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        degree = coeffs.len() - 1,
        roots = out.len(),
        at_origin,
        "roots: companion eigen-solve"
    );

    Ok(out)
}
