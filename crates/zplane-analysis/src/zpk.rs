//! Zero/pole/gain decomposition

use rustfft::num_complex::Complex;
use std::cmp::Ordering;

use crate::error::Result;
use crate::model::TransferFunction;
use crate::poly::{poly_from_roots, trim_zeros};
use crate::roots::roots;

/// Magnitudes closer than this sort as equal, so that conjugate pairs whose
/// radii differ only by rounding still order by angle.
const MAGNITUDE_QUANTUM: f64 = 1e-9;

/// Zeros, poles and gain of a transfer function.
///
/// Zeros and poles are sorted by descending magnitude, then ascending angle.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroPoleGain {
    /// Roots of the numerator
    pub zeros: Vec<Complex<f64>>,
    /// Roots of the denominator
    pub poles: Vec<Complex<f64>>,
    /// `b[0] / a[0]` after trimming exact zeros from both ends
    pub gain: f64,
}

impl ZeroPoleGain {
    /// Rebuild `(b, a)` as `(k * poly(zeros), poly(poles))`.
    pub fn to_transfer_function(&self) -> Result<TransferFunction> {
        let numerator: Vec<f64> = poly_from_roots(&self.zeros)
            .into_iter()
            .map(|c| c * self.gain)
            .collect();
        TransferFunction::new(numerator, poly_from_roots(&self.poles))
    }

    /// Largest pole radius, `0.0` when there are no poles.
    pub fn max_pole_radius(&self) -> f64 {
        self.poles.iter().map(|p| p.norm()).fold(0.0, f64::max)
    }

    /// True if every pole lies strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|p| p.norm() < 1.0)
    }

    /// True if the filter is stable and no zero lies outside the unit circle.
    pub fn is_minimum_phase(&self) -> bool {
        self.is_stable() && self.zeros.iter().all(|z| z.norm() <= 1.0)
    }
}

/// Decompose a transfer function into zeros, poles and gain.
///
/// An all-zero numerator has gain `0` and no zeros.
pub fn tf2zpk(model: &TransferFunction) -> Result<ZeroPoleGain> {
    let (den, _) = trim_zeros(model.denominator());
    let poles = sort_roots(roots(model.denominator())?);

    if model.is_null() {
        return Ok(ZeroPoleGain {
            zeros: Vec::new(),
            poles,
            gain: 0.0,
        });
    }

    let (num, _) = trim_zeros(model.numerator());
    let zeros = sort_roots(roots(model.numerator())?);
    let gain = num[0] / den[0];

    #[cfg(feature = "tracing")]
    tracing::debug!(zeros = zeros.len(), poles = poles.len(), gain, "tf2zpk");

    Ok(ZeroPoleGain { zeros, poles, gain })
}

/// Sort roots by descending magnitude, then ascending angle.
pub fn sort_roots(mut roots: Vec<Complex<f64>>) -> Vec<Complex<f64>> {
    roots.sort_by(compare_roots);
    roots
}

fn compare_roots(a: &Complex<f64>, b: &Complex<f64>) -> Ordering {
    let radius = |z: &Complex<f64>| (z.norm() / MAGNITUDE_QUANTUM).round();
    // `+ 0.0` folds a negative-zero imaginary part onto the positive real axis.
    let angle = |z: &Complex<f64>| (z.im + 0.0).atan2(z.re);
    radius(b)
        .total_cmp(&radius(a))
        .then_with(|| angle(a).total_cmp(&angle(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn test_one_pole_lowpass() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, -0.5]).unwrap();
        let zpk = tf2zpk(&tf).unwrap();
        assert!(zpk.zeros.is_empty());
        assert_eq!(zpk.poles.len(), 1);
        assert!((zpk.poles[0] - c(0.5, 0.0)).norm() < 1e-12);
        assert_eq!(zpk.gain, 1.0);
        assert!(zpk.is_stable());
    }

    #[test]
    fn test_fir_notch() {
        let tf = TransferFunction::fir(vec![1.0, 0.0, -1.0]).unwrap();
        let zpk = tf2zpk(&tf).unwrap();
        assert!(zpk.poles.is_empty());
        assert_eq!(zpk.gain, 1.0);
        assert_eq!(zpk.zeros.len(), 2);
        assert!(zpk.zeros.iter().any(|z| (z - c(1.0, 0.0)).norm() < 1e-12));
        assert!(zpk.zeros.iter().any(|z| (z - c(-1.0, 0.0)).norm() < 1e-12));
    }

    #[test]
    fn test_gain_normalizes_leading_coefficients() {
        let tf = TransferFunction::new(vec![0.0, 3.0, 1.5], vec![2.0, -1.0]).unwrap();
        let zpk = tf2zpk(&tf).unwrap();
        assert_eq!(zpk.gain, 1.5);
        assert_eq!(zpk.zeros.len(), 1);
        assert!((zpk.zeros[0] - c(-0.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_null_numerator() {
        let tf = TransferFunction::new(vec![0.0, 0.0], vec![1.0, 0.25]).unwrap();
        let zpk = tf2zpk(&tf).unwrap();
        assert_eq!(zpk.gain, 0.0);
        assert!(zpk.zeros.is_empty());
        assert_eq!(zpk.poles.len(), 1);
    }

    #[test]
    fn test_sort_descending_magnitude_then_angle() {
        let sorted = sort_roots(vec![c(0.1, 0.0), c(0.0, -0.9), c(-0.9, 0.0), c(0.0, 0.9)]);
        assert_eq!(sorted, vec![c(0.0, -0.9), c(0.0, 0.9), c(-0.9, 0.0), c(0.1, 0.0)]);
    }

    #[test]
    fn test_sort_treats_negative_zero_as_real_axis() {
        let sorted = sort_roots(vec![c(-1.0, -0.0), c(1.0, 0.0)]);
        assert_eq!(sorted[0], c(1.0, 0.0));
    }

    #[test]
    fn test_sort_tolerates_rounding_in_radius() {
        let sorted = sort_roots(vec![c(0.6, 0.8 + 1e-13), c(0.6, -0.8)]);
        assert!(sorted[0].im < 0.0, "lower half-plane root sorts first");
    }

    #[test]
    fn test_round_trip_to_transfer_function() {
        let tf = TransferFunction::new(vec![2.0, -1.0, 0.5], vec![1.0, -0.9, 0.2]).unwrap();
        let rebuilt = tf2zpk(&tf).unwrap().to_transfer_function().unwrap();
        for (got, want) in rebuilt.numerator().iter().zip(tf.numerator()) {
            assert!((got - want).abs() < 1e-9);
        }
        for (got, want) in rebuilt.denominator().iter().zip(tf.denominator()) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_stability_queries() {
        let zpk = ZeroPoleGain {
            zeros: vec![c(2.0, 0.0)],
            poles: vec![c(0.5, 0.5), c(0.5, -0.5)],
            gain: 1.0,
        };
        assert!(zpk.is_stable());
        assert!(!zpk.is_minimum_phase());
        assert!((zpk.max_pole_radius() - 0.5f64.hypot(0.5)).abs() < 1e-12);

        let unstable = ZeroPoleGain {
            zeros: Vec::new(),
            poles: vec![c(1.0, 0.0)],
            gain: 1.0,
        };
        assert!(!unstable.is_stable());
        assert_eq!(ZeroPoleGain { poles: vec![], ..unstable }.max_pole_radius(), 0.0);
    }
}
