//! Property-based tests for zplane-analysis.
//!
//! Tests grid shape, conjugate symmetry of roots, zero/pole/gain round trips
//! and robustness near the unit circle using proptest for randomized filters.

use proptest::prelude::*;
use std::f64::consts::PI;
use zplane_analysis::{
    Complex, TransferFunction, analyze, freqz, freqz_at, poly::poly_from_roots, roots, tf2zpk,
};

/// Real polynomial roots from `(radius, angle)` pairs: a conjugate pair when
/// the angle is off the real axis, a single real root otherwise.
fn conjugate_roots(pairs: &[(f64, f64)]) -> Vec<Complex<f64>> {
    let mut out = Vec::new();
    for &(r, theta) in pairs {
        if theta.abs() < 0.05 || (PI - theta).abs() < 0.05 {
            out.push(Complex::new(r * theta.cos().signum(), 0.0));
        } else {
            let z = Complex::from_polar(r, theta);
            out.push(z);
            out.push(z.conj());
        }
    }
    out
}

fn coefficient_vec(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    (0.5f64..2.0, prop::collection::vec(-1.0f64..1.0, len)).prop_map(|(lead, rest)| {
        let mut coeffs = vec![lead];
        coeffs.extend(rest);
        coeffs
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Response, frequencies and group delay all have `sample_count` points,
    /// strictly increasing over [0, fs/2).
    #[test]
    fn grid_shape(
        b in coefficient_vec(0..6),
        a in coefficient_vec(0..6),
        sample_count in 1usize..300,
        sample_rate in 1.0f64..192000.0,
    ) {
        let tf = TransferFunction::new(b, a).unwrap();
        let result = analyze(&tf, sample_count, sample_rate).unwrap();
        let f = &result.response.frequencies_hz;

        prop_assert_eq!(f.len(), sample_count);
        prop_assert_eq!(result.response.values.len(), sample_count);
        prop_assert_eq!(result.group_delay.len(), sample_count);
        prop_assert_eq!(f[0], 0.0);
        prop_assert!(f.windows(2).all(|w| w[1] > w[0]));
        prop_assert!(*f.last().unwrap() < sample_rate / 2.0);
    }

    /// Roots of a real polynomial come in conjugate pairs.
    #[test]
    fn roots_are_conjugate_symmetric(coeffs in coefficient_vec(1..12)) {
        let r = roots(&coeffs).unwrap();
        prop_assert_eq!(r.len(), coeffs.len() - 1);

        for z in &r {
            let tol = 1e-9 * z.norm().max(1.0);
            if z.im.abs() > tol {
                prop_assert!(
                    r.iter().any(|w| (w - z.conj()).norm() <= tol),
                    "root {} has no conjugate in {:?}", z, r
                );
            }
        }
    }

    /// A pure gain has a flat response and no roots.
    #[test]
    fn pure_gain_invariance(k in -100.0f64..100.0, sample_count in 1usize..64) {
        prop_assume!(k != 0.0);
        let tf = TransferFunction::new(vec![k], vec![1.0]).unwrap();
        let result = analyze(&tf, sample_count, 48000.0).unwrap();

        for h in &result.response.values {
            prop_assert!((h - Complex::new(k, 0.0)).norm() <= 1e-12 * k.abs());
        }
        prop_assert!(result.zpk.zeros.is_empty());
        prop_assert!(result.zpk.poles.is_empty());
        prop_assert_eq!(result.zpk.gain, k);
    }

    /// Rebuilding (b, a) from zeros, poles and gain reproduces the response.
    #[test]
    fn zpk_round_trip(
        zeros in prop::collection::vec((0.1f64..1.5, 0.0f64..PI), 1..4),
        poles in prop::collection::vec((0.05f64..0.9, 0.0f64..PI), 1..4),
        gain in 0.1f64..10.0,
    ) {
        let b: Vec<f64> = poly_from_roots(&conjugate_roots(&zeros))
            .into_iter()
            .map(|c| c * gain)
            .collect();
        let a = poly_from_roots(&conjugate_roots(&poles));
        let tf = TransferFunction::new(b, a).unwrap();

        let rebuilt = tf2zpk(&tf).unwrap().to_transfer_function().unwrap();
        let (omegas, direct) = freqz(&tf, 128);
        let round_trip = freqz_at(&rebuilt, &omegas);

        let peak = direct.iter().map(|h| h.norm()).fold(0.0, f64::max);
        for (x, y) in round_trip.iter().zip(direct.iter()) {
            prop_assert!((x - y).norm() <= 1e-6 * peak.max(1e-12));
        }
    }

    /// Poles on or next to the unit circle never make the analysis fail.
    #[test]
    fn near_unit_circle_never_fails(
        radius in 0.999f64..=1.0,
        theta in 0.0f64..PI,
        sample_count in 1usize..128,
    ) {
        let a = poly_from_roots(&conjugate_roots(&[(radius, theta)]));
        let tf = TransferFunction::new(vec![1.0], a).unwrap();
        let result = analyze(&tf, sample_count, 1000.0).unwrap();

        prop_assert_eq!(result.response.len(), sample_count);
        prop_assert_eq!(result.group_delay.len(), sample_count);
        prop_assert!(result.group_delay.iter().all(|d| d.is_nan() || d.is_finite()));
    }
}
