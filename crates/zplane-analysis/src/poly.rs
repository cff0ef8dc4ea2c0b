//! Polynomial helpers for coefficient sequences
//!
//! Coefficients are stored highest power first, matching the transfer
//! function convention `b[0] + b[1] z^-1 + ... + b[n] z^-n`.

use rustfft::num_complex::Complex;

/// Strip exact-zero coefficients from the front of a sequence.
pub fn trim_leading_zeros(coeffs: &[f64]) -> &[f64] {
    let start = coeffs
        .iter()
        .position(|&c| c != 0.0)
        .unwrap_or(coeffs.len());
    &coeffs[start..]
}

/// Strip exact-zero coefficients from both ends of a sequence.
///
/// Returns the trimmed slice and the number of trailing zeros removed. Each
/// trailing zero is a root at the origin of the polynomial in `z`.
pub fn trim_zeros(coeffs: &[f64]) -> (&[f64], usize) {
    let leading = trim_leading_zeros(coeffs);
    let end = leading
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(0, |i| i + 1);
    (&leading[..end], leading.len() - end)
}

/// Full linear convolution of two coefficient sequences.
///
/// Empty input yields an empty output.
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Expand `prod(x - r)` over `roots` into real coefficients, highest power first.
///
/// The imaginary residue left over from conjugate pairs is discarded.
pub fn poly_from_roots(roots: &[Complex<f64>]) -> Vec<f64> {
    let mut acc = vec![Complex::new(1.0, 0.0)];
    for &r in roots {
        let mut next = vec![Complex::new(0.0, 0.0); acc.len() + 1];
        for (i, &c) in acc.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        acc = next;
    }
    acc.into_iter().map(|c| c.re).collect()
}

/// Quotient of `coeffs` divided by a monic `divisor`, both highest power first.
///
/// The remainder is dropped, so the divisor should hold actual roots of
/// `coeffs`. A dividend shorter than the divisor yields an empty quotient.
pub fn deflate(coeffs: &[f64], divisor: &[f64]) -> Vec<f64> {
    let degree = divisor.len().saturating_sub(1);
    if coeffs.len() <= degree {
        return Vec::new();
    }

    let mut rem = coeffs.to_vec();
    let quotient_len = coeffs.len() - degree;
    let mut quotient = Vec::with_capacity(quotient_len);
    for i in 0..quotient_len {
        let lead = rem[i];
        quotient.push(lead);
        for (j, &d) in divisor.iter().enumerate().skip(1) {
            rem[i + j] -= lead * d;
        }
    }
    quotient
}

/// Evaluate `sum_i c[i] e^{-j omega i}`.
///
/// This is the polynomial in `z^-1` sampled on the unit circle at angle `omega`.
pub fn eval_unit_circle(coeffs: &[f64], omega: f64) -> Complex<f64> {
    let z_inv = Complex::from_polar(1.0, -omega);
    // Horner in z^-1, starting from the highest delay.
    coeffs
        .iter()
        .rev()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
}

/// Evaluate a real polynomial (highest power first) at a complex point.
pub fn polyval(coeffs: &[f64], x: Complex<f64>) -> Complex<f64> {
    coeffs
        .iter()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn test_trim_leading_zeros() {
        assert_eq!(trim_leading_zeros(&[0.0, 0.0, 1.0, 0.0]), &[1.0, 0.0]);
        assert!(trim_leading_zeros(&[0.0, 0.0]).is_empty());
        assert!(trim_leading_zeros(&[]).is_empty());
    }

    #[test]
    fn test_trim_zeros_counts_trailing() {
        let (core, trailing) = trim_zeros(&[0.0, 2.0, -1.0, 0.0, 0.0]);
        assert_eq!(core, &[2.0, -1.0]);
        assert_eq!(trailing, 2);

        let (core, trailing) = trim_zeros(&[0.0, 0.0]);
        assert!(core.is_empty());
        assert_eq!(trailing, 0);
    }

    #[test]
    fn test_convolve() {
        assert_eq!(convolve(&[1.0, 1.0], &[1.0, -1.0]), vec![1.0, 0.0, -1.0]);
        assert_eq!(convolve(&[2.0], &[1.0, 2.0, 3.0]), vec![2.0, 4.0, 6.0]);
        assert!(convolve(&[], &[1.0]).is_empty());
    }

    #[test]
    fn test_deflate() {
        // (x^2 - 1) / (x - 1) = x + 1
        assert_eq!(deflate(&[1.0, 0.0, -1.0], &[1.0, -1.0]), vec![1.0, 1.0]);
        // (x^3 + x^2 + x + 1) / (x^2 + 1) = x + 1
        assert_eq!(deflate(&[1.0, 1.0, 1.0, 1.0], &[1.0, 0.0, 1.0]), vec![1.0, 1.0]);
        // Leading zeros carry through to the quotient.
        assert_eq!(deflate(&[0.0, 1.0, 1.0], &[1.0, 1.0]), vec![0.0, 1.0]);
        assert!(deflate(&[2.0], &[1.0, 1.0]).is_empty());
    }

    #[test]
    fn test_poly_from_roots() {
        let coeffs = poly_from_roots(&[Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)]);
        assert_eq!(coeffs, vec![1.0, 0.0, -1.0]);

        // Conjugate pair e^{+-j pi/2} -> x^2 + 1
        let coeffs = poly_from_roots(&[Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]);
        assert!((coeffs[0] - 1.0).abs() < 1e-12);
        assert!(coeffs[1].abs() < 1e-12);
        assert!((coeffs[2] - 1.0).abs() < 1e-12);

        assert_eq!(poly_from_roots(&[]), vec![1.0]);
    }

    #[test]
    fn test_eval_unit_circle() {
        // 1 - z^-1 vanishes at DC and equals 2 at Nyquist.
        assert!(close(eval_unit_circle(&[1.0, -1.0], 0.0), Complex::new(0.0, 0.0)));
        assert!(close(eval_unit_circle(&[1.0, -1.0], PI), Complex::new(2.0, 0.0)));

        // z^-1 at pi/2 is -j
        assert!(close(eval_unit_circle(&[0.0, 1.0], PI / 2.0), Complex::new(0.0, -1.0)));
    }

    #[test]
    fn test_polyval() {
        // x^2 - 1 at x = 2
        assert!(close(polyval(&[1.0, 0.0, -1.0], Complex::new(2.0, 0.0)), Complex::new(3.0, 0.0)));
        // x^2 + 1 at x = j
        assert!(close(polyval(&[1.0, 0.0, 1.0], Complex::new(0.0, 1.0)), Complex::new(0.0, 0.0)));
    }
}
