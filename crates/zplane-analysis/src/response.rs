//! Frequency response on the unit circle
//!
//! `H(e^{jw}) = B(e^{jw}) / A(e^{jw})` sampled at `N` equally spaced angular
//! frequencies `w_k = k pi / N`, `k = 0..N`, i.e. the half-open interval
//! `[0, pi)`.
//!
//! The evaluator returns the raw complex ratio. Where `A(e^{jw})` vanishes the
//! value is non-finite; nothing here clips or sanitizes it, so log-magnitude
//! consumers must handle `inf`/`NaN` themselves.

use rustfft::num_complex::Complex;
use serde::Serialize;
use std::f64::consts::{PI, TAU};

use crate::error::{AnalysisError, Result};
use crate::fft::Fft;
use crate::model::TransferFunction;
use crate::poly::eval_unit_circle;

/// Sampling grid for one analysis: `sample_count` points below Nyquist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyGrid {
    sample_count: usize,
    sample_rate_hz: f64,
}

impl FrequencyGrid {
    /// Create a grid, validating `sample_count >= 1` and a positive finite rate.
    pub fn new(sample_count: usize, sample_rate_hz: f64) -> Result<Self> {
        if sample_count == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sample_count",
                "must be at least 1",
            ));
        }
        if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "sample_rate_hz",
                format!("must be positive and finite, got {sample_rate_hz}"),
            ));
        }
        Ok(Self {
            sample_count,
            sample_rate_hz,
        })
    }

    /// Number of frequency points.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Sample rate in Hz.
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Angular frequencies `k pi / N` in rad/sample.
    pub fn omegas(&self) -> Vec<f64> {
        omega_grid(self.sample_count)
    }

    /// Map an angular frequency (rad/sample) to Hz.
    pub fn to_hz(&self, omega: f64) -> f64 {
        omega * self.sample_rate_hz / (2.0 * PI)
    }

    /// Grid frequencies in Hz, spanning `[0, fs/2)`.
    pub fn frequencies_hz(&self) -> Vec<f64> {
        self.omegas().into_iter().map(|w| self.to_hz(w)).collect()
    }
}

/// Complex frequency response, index-aligned with its frequency vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Frequencies in Hz
    pub frequencies_hz: Vec<f64>,
    /// `H(e^{jw})` at each frequency
    pub values: Vec<Complex<f64>>,
}

impl FrequencyResponse {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Magnitude `|H|`.
    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|h| h.norm()).collect()
    }

    /// Magnitude in dB, `20 log10 |H|`.
    ///
    /// Not clipped: `|H| = 0` gives `-inf`, a non-finite `H` gives `inf` or `NaN`.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.values.iter().map(|h| 20.0 * h.norm().log10()).collect()
    }

    /// Principal phase `arg H` in `(-pi, pi]`.
    pub fn phase_rad(&self) -> Vec<f64> {
        self.values.iter().map(|h| h.arg()).collect()
    }

    /// Phase with 2 pi jumps removed.
    pub fn unwrapped_phase_rad(&self) -> Vec<f64> {
        unwrap_phase(&self.phase_rad())
    }
}

/// `N` equally spaced angular frequencies on `[0, pi)`.
pub fn omega_grid(sample_count: usize) -> Vec<f64> {
    (0..sample_count)
        .map(|k| k as f64 * PI / sample_count as f64)
        .collect()
}

/// Evaluate the frequency response at `sample_count` points on `[0, pi)`.
///
/// Returns `(omegas, response)`. FIR models whose tap count fits in a
/// `2 * sample_count` point FFT take the FFT path; everything else is summed
/// directly. `sample_count == 0` yields empty vectors.
pub fn freqz(model: &TransferFunction, sample_count: usize) -> (Vec<f64>, Vec<Complex<f64>>) {
    let omegas = omega_grid(sample_count);
    let b = model.numerator();

    let use_fft = sample_count > 0 && model.is_fir() && 2 * sample_count >= b.len();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        sample_count,
        order = model.order(),
        path = if use_fft { "fft" } else { "direct" },
        "freqz"
    );

    if use_fft {
        let a0 = model.denominator()[0];
        let spectrum = Fft::new(2 * sample_count).forward(b);
        let values = spectrum
            .into_iter()
            .take(sample_count)
            .map(|h| h / a0)
            .collect();
        (omegas, values)
    } else {
        let values = freqz_at(model, &omegas);
        (omegas, values)
    }
}

/// Evaluate the frequency response at arbitrary angular frequencies (rad/sample).
pub fn freqz_at(model: &TransferFunction, omegas: &[f64]) -> Vec<Complex<f64>> {
    omegas
        .iter()
        .map(|&w| eval_unit_circle(model.numerator(), w) / eval_unit_circle(model.denominator(), w))
        .collect()
}

/// Remove `2 pi` jumps from a principal-phase sequence.
///
/// Each step between neighbours is folded into `[-pi, pi]`, so a jump of any
/// multiple of `2 pi` is removed. Non-finite samples (a pole on the unit
/// circle) pass through unchanged, and the next finite sample continues from
/// the last finite one.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    // (wrapped, unwrapped) of the last finite sample
    let mut last: Option<(f64, f64)> = None;

    phase
        .iter()
        .map(|&p| {
            if !p.is_finite() {
                return p;
            }
            let out = match last {
                None => p,
                Some((prev, prev_unwrapped)) => {
                    let diff = p - prev;
                    let mut step = (diff + PI).rem_euclid(TAU) - PI;
                    if step == -PI && diff > 0.0 {
                        step = PI;
                    }
                    prev_unwrapped + step
                }
            };
            last = Some((p, out));
            out
        })
        .collect()
}
