//! Group delay from filter coefficients
//!
//! Group delay is `-d(arg H)/dw`. Differentiating the sampled phase needs
//! unwrapping and breaks at every discontinuity, so this module uses the
//! closed form instead. With `c = b * reverse(a)` (full convolution) and
//! `cr[k] = k c[k]`,
//!
//! ```text
//! tau(w) = Re{ CR(e^{jw}) / C(e^{jw}) } - (len(a) - 1)
//! ```
//!
//! where `C` and `CR` are `c` and `cr` evaluated as polynomials in `z^-1`.
//! `C(e^{jw})` is `B(e^{jw})` times a unit-modulus rotation of `conj A(e^{jw})`,
//! so it vanishes wherever the numerator or the denominator response does.
//!
//! - Where the denominator response vanishes the filter has a pole on the
//!   unit circle. Group delay is undefined there and the output holds `NaN`.
//!   That is an expected value, not an error.
//! - Where only the numerator vanishes the delay is still defined. Each zero
//!   `e^{j theta}` on the unit circle contributes exactly half a sample at
//!   every frequency, so those zeros are divided out of `b` and the closed
//!   form is evaluated on the remaining factor.
//!
//! A null numerator has no phase at all and yields `NaN` everywhere.

use rustfft::num_complex::Complex;

use crate::model::TransferFunction;
use crate::poly::{convolve, deflate, eval_unit_circle};
use crate::roots::roots;

/// `|C(e^{jw})|` below this fraction of `sum |c|` counts as zero.
pub const SINGULAR_TOLERANCE: f64 = 10.0 * f64::EPSILON;

/// Numerator roots with `| |z| - 1 |` at or below this lie on the unit circle.
pub const UNIT_CIRCLE_TOLERANCE: f64 = 1e-6;

/// Imaginary parts at or below this mark a real root.
const REAL_ROOT_TOLERANCE: f64 = 1e-12;

/// Group delay in samples at each angular frequency (rad/sample).
///
/// The output is index-aligned with `omegas`. Points where the denominator
/// response vanishes hold `f64::NAN`.
///
/// ```rust
/// use zplane_analysis::{TransferFunction, group_delay, response::omega_grid};
///
/// // Moving average: zeros at +-pi/2 and pi, delay 1.5 everywhere
/// let tf = TransferFunction::fir(vec![1.0, 1.0, 1.0, 1.0]).unwrap();
/// for d in group_delay(&tf, &omega_grid(8)) {
///     assert!((d - 1.5).abs() < 1e-9);
/// }
/// ```
pub fn group_delay(model: &TransferFunction, omegas: &[f64]) -> Vec<f64> {
    let b = model.numerator();
    let a = model.denominator();

    let pole_threshold = SINGULAR_TOLERANCE * a.iter().map(|x| x.abs()).sum::<f64>();
    let full = ClosedForm::new(b, a, 0.0);
    // Built on the first numerator singularity only.
    let mut reduced: Option<ClosedForm> = None;

    let delays: Vec<f64> = omegas
        .iter()
        .map(|&w| {
            if eval_unit_circle(a, w).norm() <= pole_threshold {
                return f64::NAN;
            }
            full.eval(w)
                .or_else(|| {
                    reduced
                        .get_or_insert_with(|| ClosedForm::without_unit_zeros(b, a))
                        .eval(w)
                })
                .unwrap_or(f64::NAN)
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        points = delays.len(),
        singular = delays.iter().filter(|d| d.is_nan()).count(),
        deflated = reduced.is_some(),
        "group_delay"
    );

    delays
}

/// `c`, `cr` and the constant terms of the closed form for one numerator.
struct ClosedForm {
    c: Vec<f64>,
    cr: Vec<f64>,
    threshold: f64,
    /// Denominator length correction minus the delay of removed zeros.
    offset: f64,
}

impl ClosedForm {
    fn new(b: &[f64], a: &[f64], removed_delay: f64) -> Self {
        let a_rev: Vec<f64> = a.iter().rev().copied().collect();
        let c = convolve(b, &a_rev);
        let cr = c.iter().enumerate().map(|(k, &ck)| k as f64 * ck).collect();
        let threshold = SINGULAR_TOLERANCE * c.iter().map(|x| x.abs()).sum::<f64>();
        Self {
            c,
            cr,
            threshold,
            offset: (a.len() - 1) as f64 - removed_delay,
        }
    }

    /// Closed form with every unit-circle zero of `b` divided out.
    fn without_unit_zeros(b: &[f64], a: &[f64]) -> Self {
        let mut reduced = b.to_vec();
        let mut removed_delay = 0.0;

        for z in roots(b).unwrap_or_default() {
            if (z.norm() - 1.0).abs() > UNIT_CIRCLE_TOLERANCE || z.im < -REAL_ROOT_TOLERANCE {
                continue;
            }
            if z.im > REAL_ROOT_TOLERANCE {
                // The conjugate goes with it as one real quadratic.
                reduced = deflate(&reduced, &[1.0, -2.0 * z.re, z.norm_sqr()]);
                removed_delay += 1.0;
            } else {
                reduced = deflate(&reduced, &[1.0, -z.re]);
                removed_delay += 0.5;
            }
        }

        Self::new(&reduced, a, removed_delay)
    }

    fn eval(&self, w: f64) -> Option<f64> {
        let den: Complex<f64> = eval_unit_circle(&self.c, w);
        if den.norm() <= self.threshold {
            return None;
        }
        Some((eval_unit_circle(&self.cr, w) / den).re - self.offset)
    }
}
