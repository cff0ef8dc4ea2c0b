//! zplane Analysis - Frequency response tools for digital filters
//!
//! Given the numerator `b` and denominator `a` of a transfer function
//! `H(z) = B(z) / A(z)`, this crate computes everything needed to inspect the
//! filter visually:
//!
//! - [`model`] - Validated transfer function coefficients
//! - [`poly`] - Polynomial helpers (trim, convolve, evaluate, expand roots)
//! - [`roots`] - Polynomial roots via companion-matrix eigenvalues
//! - [`response`] - Frequency response on the unit circle (`freqz`)
//! - [`zpk`] - Zero/pole/gain decomposition (`tf2zpk`)
//! - [`group_delay`] - Closed-form group delay
//! - [`analyzer`] - One call producing the whole bundle
//! - [`views`] - Display-ready data for the standard plots
//! - [`export`] - JSON, CSV and FRD output
//! - [`input`] - Text request format
//!
//! Everything is pure and synchronous. Independent analyses share no state
//! and can run on separate threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use zplane_analysis::{TransferFunction, analyze};
//!
//! // One-pole lowpass y[n] = x[n] + 0.5 y[n-1]
//! let tf = TransferFunction::new(vec![1.0], vec![1.0, -0.5]).unwrap();
//! let result = analyze(&tf, 512, 48000.0).unwrap();
//!
//! assert_eq!(result.response.len(), 512);
//! assert!(result.zpk.is_stable());
//! ```
//!
//! ## Singular points
//!
//! Poles on the unit circle make the response non-finite and leave the group
//! delay undefined (`NaN`). Zeros on the unit circle do not: the group delay
//! stays finite there.
//! These are valid results, not errors. [`views`] strips them before
//! anything is drawn.

pub mod error;
pub mod model;
pub mod poly;
pub mod roots;
pub mod fft;
pub mod response;
pub mod zpk;
pub mod group_delay;
pub mod analyzer;
pub mod views;
pub mod export;
pub mod input;

// Re-export main types
pub use error::{AnalysisError, Result};
pub use model::TransferFunction;
pub use roots::{companion, roots};
pub use response::{FrequencyGrid, FrequencyResponse, freqz, freqz_at, unwrap_phase};
pub use zpk::{ZeroPoleGain, tf2zpk};
pub use group_delay::group_delay;
pub use analyzer::{AnalysisResult, Analyzer, analyze};
pub use views::{ViewLimits, Views};
pub use input::AnalysisRequest;
pub use rustfft::num_complex::Complex;
