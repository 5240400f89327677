//! Normal fit and density grid.
//!
//! Mean and Bessel-corrected standard deviation come from `statrs`; the curve
//! is the normal PDF evaluated on an evenly spaced grid around the mean.

use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

use crate::error::StatsError;

/// Count, mean and sample standard deviation (divisor n−1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Whether a normal fit is meaningful for these samples.
    pub fn has_spread(&self) -> bool {
        self.count >= 2 && self.std_dev.is_finite() && self.std_dev > 0.0
    }
}

/// Summarize `samples`.
///
/// A single sample, identical samples, or a spread that under- or overflows
/// `f64` all report a standard deviation of exactly `0.0`, never NaN or
/// infinity.
pub fn summarize(samples: &[f64]) -> Result<Summary, StatsError> {
    let first = *samples.first().ok_or(StatsError::Empty)?;
    let count = samples.len();

    if count < 2 || samples.iter().all(|&v| v == first) {
        return Ok(Summary {
            count,
            mean: first,
            std_dev: 0.0,
        });
    }

    let mut mean = Statistics::mean(samples);
    if !mean.is_finite() {
        // Running mean overflowed; dividing first keeps the sum in range.
        mean = samples.iter().map(|v| v / count as f64).sum();
    }
    let std_dev = Statistics::std_dev(samples);

    Ok(Summary {
        count,
        mean,
        std_dev: if std_dev.is_finite() { std_dev } else { 0.0 },
    })
}

// ---------------------------------------------------------------------------
// Density curve
// ---------------------------------------------------------------------------

/// `(x, density)` pairs of a fitted normal PDF, ordered by x.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub points: Vec<[f64; 2]>,
}

impl DensityCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Trapezoid-rule area under the curve.
    pub fn integral(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
            .sum()
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Evaluate the fitted normal PDF on `grid_points` points spanning
/// `sigma_span` standard deviations on each side of the mean.
pub fn density_curve(
    summary: &Summary,
    grid_points: usize,
    sigma_span: f64,
) -> Result<DensityCurve, StatsError> {
    let insufficient = || StatsError::InsufficientVariance {
        count: summary.count,
        mean: summary.mean,
    };

    if !summary.has_spread() {
        return Err(insufficient());
    }
    let normal = Normal::new(summary.mean, summary.std_dev).map_err(|_| insufficient())?;

    let half_width = sigma_span * summary.std_dev;
    let points = linspace(summary.mean - half_width, summary.mean + half_width, grid_points)
        .into_iter()
        .map(|x| [x, normal.pdf(x)])
        .collect();

    Ok(DensityCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn summary_uses_bessel_correction() {
        let s = summarize(&[0.5, 0.7]).unwrap();
        assert_eq!(s.count, 2);
        assert!((s.mean - 0.6).abs() < EPS);
        assert!((s.std_dev - 0.141_421_356_237).abs() < 1e-9);
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert_eq!(summarize(&[]), Err(StatsError::Empty));
    }

    #[test]
    fn single_sample_has_zero_spread() {
        let s = summarize(&[0.42]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 0.42);
        assert_eq!(s.std_dev, 0.0);
        assert!(!s.has_spread());
        assert_eq!(
            density_curve(&s, 200, 4.0),
            Err(StatsError::InsufficientVariance { count: 1, mean: 0.42 })
        );
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let s = summarize(&[0.1, 0.1, 0.1]).unwrap();
        assert_eq!(s.std_dev, 0.0);
        assert!(density_curve(&s, 200, 4.0).is_err());
    }

    #[test]
    fn underflowing_spread_is_not_plotted() {
        let s = summarize(&[0.0, 1e-310]).unwrap();
        assert_eq!(s.std_dev, 0.0);
        let err = density_curve(&s, 200, 4.0).unwrap_err();
        assert!(err.to_string().contains("no measurable spread"));
        assert!(!err.to_string().contains("all equal"));
    }

    #[test]
    fn overflowing_spread_stays_finite() {
        let s = summarize(&[1e308, -1e308]).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.std_dev, 0.0);
        assert!(s.mean.is_finite());
        assert_eq!(format!("{:.4}", s.std_dev), "0.0000");
        assert!(matches!(
            density_curve(&s, 200, 4.0),
            Err(StatsError::InsufficientVariance { count: 2, .. })
        ));
    }

    #[test]
    fn linspace_is_inclusive() {
        let xs = linspace(-1.0, 1.0, 5);
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn curve_spans_four_sigma_and_integrates_to_one() {
        let s = summarize(&[0.2, 0.4, 0.35, 0.9, 0.55]).unwrap();
        let curve = density_curve(&s, 200, 4.0).unwrap();

        assert_eq!(curve.len(), 200);
        let first = curve.points[0][0];
        let last = curve.points[199][0];
        assert!((first - (s.mean - 4.0 * s.std_dev)).abs() < EPS);
        assert!((last - (s.mean + 4.0 * s.std_dev)).abs() < EPS);
        assert!((curve.integral() - 1.0).abs() < 1e-3);
        assert!(curve.points.iter().all(|p| p[1].is_finite() && p[1] > 0.0));
    }

    #[test]
    fn peak_matches_closed_form() {
        let s = Summary { count: 3, mean: 0.0, std_dev: 2.0 };
        // Odd grid so the mean sits on a grid point.
        let curve = density_curve(&s, 201, 4.0).unwrap();
        let peak = curve.points[100];
        let expected = 1.0 / (2.0 * (2.0 * std::f64::consts::PI).sqrt());
        assert!(peak[0].abs() < EPS);
        assert!((peak[1] - expected).abs() < 1e-12);
    }
}
