//! Full filter analysis: response, zeros/poles and group delay in one bundle

use crate::error::Result;
use crate::group_delay::group_delay;
use crate::model::TransferFunction;
use crate::response::{FrequencyGrid, FrequencyResponse, freqz};
use crate::views::{ViewLimits, Views};
use crate::zpk::{ZeroPoleGain, tf2zpk};

/// Everything computed for one transfer function on one grid.
///
/// All vectors in [`FrequencyResponse`] and `group_delay` share the same
/// length and index. Non-finite response values and `NaN` group delay are
/// valid entries marking points where the filter is singular.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Input model
    pub model: TransferFunction,
    /// Sampling grid used
    pub grid: FrequencyGrid,
    /// Complex frequency response
    pub response: FrequencyResponse,
    /// Zeros, poles and gain
    pub zpk: ZeroPoleGain,
    /// Group delay in samples, `NaN` where undefined
    pub group_delay: Vec<f64>,
}

impl AnalysisResult {
    /// Number of undefined group delay points.
    pub fn undefined_group_delay_count(&self) -> usize {
        self.group_delay.iter().filter(|d| d.is_nan()).count()
    }

    /// Derive display-ready data for the five standard views.
    pub fn views(&self, limits: &ViewLimits) -> Views {
        Views::from_result(self, limits)
    }
}

/// Filter analyzer bound to a frequency grid
///
/// # Example
///
/// ```rust
/// use zplane_analysis::{Analyzer, TransferFunction};
///
/// let analyzer = Analyzer::new(8, 100.0).unwrap();
/// let tf = TransferFunction::new(vec![1.0], vec![1.0, -0.5]).unwrap();
/// let result = analyzer.analyze(&tf).unwrap();
///
/// assert!((result.response.values[0].re - 2.0).abs() < 1e-12);
/// assert_eq!(result.zpk.poles.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
    grid: FrequencyGrid,
}

impl Analyzer {
    /// Create an analyzer for `sample_count` points at `sample_rate_hz`.
    ///
    /// Fails with `InvalidParameter` for a zero count or a non-positive or
    /// non-finite rate.
    pub fn new(sample_count: usize, sample_rate_hz: f64) -> Result<Self> {
        Ok(Self {
            grid: FrequencyGrid::new(sample_count, sample_rate_hz)?,
        })
    }

    /// Create an analyzer from an existing grid.
    pub fn with_grid(grid: FrequencyGrid) -> Self {
        Self { grid }
    }

    /// The grid this analyzer samples on.
    pub fn grid(&self) -> FrequencyGrid {
        self.grid
    }

    /// Analyze a transfer function.
    ///
    /// Pure and deterministic; independent calls may run concurrently.
    pub fn analyze(&self, model: &TransferFunction) -> Result<AnalysisResult> {
        let (omegas, values) = freqz(model, self.grid.sample_count());
        let frequencies_hz = omegas.iter().map(|&w| self.grid.to_hz(w)).collect();
        let zpk = tf2zpk(model)?;
        let group_delay = group_delay(model, &omegas);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            order = model.order(),
            sample_count = self.grid.sample_count(),
            sample_rate_hz = self.grid.sample_rate_hz(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            model: model.clone(),
            grid: self.grid,
            response: FrequencyResponse {
                frequencies_hz,
                values,
            },
            zpk,
            group_delay,
        })
    }
}

/// One-shot analysis of `model` on `sample_count` points at `sample_rate_hz`.
pub fn analyze(
    model: &TransferFunction,
    sample_count: usize,
    sample_rate_hz: f64,
) -> Result<AnalysisResult> {
    Analyzer::new(sample_count, sample_rate_hz)?.analyze(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use rustfft::num_complex::Complex;

    #[test]
    fn test_one_pole_scenario() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, -0.5]).unwrap();
        let result = analyze(&tf, 8, 100.0).unwrap();

        assert_eq!(result.response.len(), 8);
        assert_eq!(result.group_delay.len(), 8);
        assert!((result.response.values[0] - Complex::new(2.0, 0.0)).norm() < 1e-12);
        assert!(result.zpk.zeros.is_empty());
        assert_eq!(result.zpk.poles.len(), 1);
        assert!((result.zpk.poles[0].re - 0.5).abs() < 1e-12);
        assert_eq!(result.zpk.gain, 1.0);
        assert_eq!(result.undefined_group_delay_count(), 0);
    }

    #[test]
    fn test_pure_gain() {
        let tf = TransferFunction::gain(3.0).unwrap();
        let result = analyze(&tf, 16, 48000.0).unwrap();
        assert!(result.response.values.iter().all(|h| (h - Complex::new(3.0, 0.0)).norm() < 1e-12));
        assert!(result.zpk.zeros.is_empty());
        assert!(result.zpk.poles.is_empty());
        assert_eq!(result.zpk.gain, 3.0);
        assert!(result.group_delay.iter().all(|d| d.abs() < 1e-12));
    }

    #[test]
    fn test_frequencies_scale_to_sample_rate() {
        let tf = TransferFunction::gain(1.0).unwrap();
        let result = analyze(&tf, 4, 1000.0).unwrap();
        let expected = [0.0, 125.0, 250.0, 375.0];
        for (got, want) in result.response.frequencies_hz.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let tf = TransferFunction::gain(1.0).unwrap();
        assert!(matches!(
            analyze(&tf, 0, 100.0),
            Err(AnalysisError::InvalidParameter { param: "sample_count", .. })
        ));
        assert!(matches!(
            analyze(&tf, 8, 0.0),
            Err(AnalysisError::InvalidParameter { param: "sample_rate_hz", .. })
        ));
    }

    #[test]
    fn test_analyzer_is_deterministic() {
        let tf = TransferFunction::new(vec![0.2, 0.4, 0.2], vec![1.0, -0.6, 0.3]).unwrap();
        let analyzer = Analyzer::new(64, 8000.0).unwrap();
        assert_eq!(analyzer.analyze(&tf).unwrap(), analyzer.analyze(&tf).unwrap());
        assert_eq!(analyzer.grid().sample_count(), 64);
    }
}
