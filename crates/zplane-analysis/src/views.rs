//! Display-ready data for the standard filter views
//!
//! A renderer shows five panels for one [`AnalysisResult`]:
//!
//! 1. raw coefficients (stems over coefficient index)
//! 2. log-magnitude vs. frequency on a log-scaled axis
//! 3. phase vs. frequency
//! 4. group delay vs. frequency
//! 5. zeros and poles against the unit circle
//!
//! This module only prepares the numbers. The frequency panels are restricted
//! to `[min_frequency_hz, fs/2]`, which drops DC (a log axis cannot show it).
//! Non-finite points are omitted and finite points are clipped to the panel's
//! y-range, so a renderer never receives `inf`/`NaN`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::analyzer::AnalysisResult;

/// Axis limits for the frequency and z-plane views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewLimits {
    /// Lower edge of the log frequency axis in Hz
    pub min_frequency_hz: f64,
    /// Magnitude y-range in dB
    pub magnitude_db: [f64; 2],
    /// Phase y-range in radians
    pub phase_rad: [f64; 2],
    /// Group delay y-range in samples
    pub group_delay: [f64; 2],
    /// Half-width of the square z-plane view
    pub zplane_extent: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_frequency_hz: 10.0,
            magnitude_db: [-40.0, 10.0],
            phase_rad: [-PI, PI],
            group_delay: [-40.0, 40.0],
            zplane_extent: 1.5,
        }
    }
}

/// One x/y series with equal-length vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    /// X values
    pub x: Vec<f64>,
    /// Y values
    pub y: Vec<f64>,
}

impl Series {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if there are no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A zero or pole position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
    /// Distance from the origin
    pub radius: f64,
}

/// Zero/pole plot data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZPlaneView {
    /// Zero markers
    pub zeros: Vec<Marker>,
    /// Pole markers
    pub poles: Vec<Marker>,
    /// Half-width of the square view
    pub extent: f64,
}

/// Data for all five views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Views {
    /// Numerator stems over coefficient index
    pub numerator: Series,
    /// Denominator stems over coefficient index
    pub denominator: Series,
    /// Magnitude in dB over frequency
    pub magnitude_db: Series,
    /// Phase in radians over frequency
    pub phase_rad: Series,
    /// Group delay in samples over frequency
    pub group_delay: Series,
    /// Zero/pole positions
    pub zplane: ZPlaneView,
}

impl Views {
    /// Derive view data from an analysis result.
    pub fn from_result(result: &AnalysisResult, limits: &ViewLimits) -> Self {
        let freqs = &result.response.frequencies_hz;
        let nyquist = result.grid.sample_rate_hz() / 2.0;
        let in_band = |f: f64| f >= limits.min_frequency_hz && f <= nyquist;

        let band_series = |values: &[f64], range: [f64; 2]| {
            let mut series = Series::default();
            for (&f, &v) in freqs.iter().zip(values) {
                if in_band(f) && v.is_finite() {
                    series.x.push(f);
                    series.y.push(v.clamp(range[0], range[1]));
                }
            }
            series
        };

        Self {
            numerator: stems(result.model.numerator()),
            denominator: stems(result.model.denominator()),
            magnitude_db: band_series(&result.response.magnitude_db(), limits.magnitude_db),
            phase_rad: band_series(&result.response.phase_rad(), limits.phase_rad),
            group_delay: band_series(&result.group_delay, limits.group_delay),
            zplane: ZPlaneView {
                zeros: result.zpk.zeros.iter().map(|z| marker(z.re, z.im)).collect(),
                poles: result.zpk.poles.iter().map(|p| marker(p.re, p.im)).collect(),
                extent: limits.zplane_extent,
            },
        }
    }
}

fn stems(coeffs: &[f64]) -> Series {
    Series {
        x: (0..coeffs.len()).map(|i| i as f64).collect(),
        y: coeffs.to_vec(),
    }
}

fn marker(re: f64, im: f64) -> Marker {
    Marker {
        re,
        im,
        radius: re.hypot(im),
    }
}
