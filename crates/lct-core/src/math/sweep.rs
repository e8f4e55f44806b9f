//! Sample sweeps
//!
//! Evenly spaced (time axis) and log-spaced (frequency axis) grids on which
//! the response models are evaluated.

use ndarray::Array1;

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    #[default]
    Linear,
    Log,
}

/// An ordered, strictly increasing grid of domain values
#[derive(Debug, Clone)]
pub struct Sweep {
    points: Array1<f64>,
    sweep_type: SweepType,
}

impl Sweep {
    /// Evenly spaced grid of `intervals + 1` points over `[start, stop]`
    ///
    /// Point `i` is `start + (i / intervals) * (stop - start)`, so both ends
    /// are hit exactly.
    ///
    /// # Example
    /// ```
    /// use lct_core::math::Sweep;
    /// let sweep = Sweep::linear(0.0, 8.0, 4);
    /// assert_eq!(sweep.points().to_vec(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    /// ```
    pub fn linear(start: f64, stop: f64, intervals: usize) -> Self {
        let points = if intervals == 0 {
            Array1::from_elem(1, start)
        } else {
            let span = stop - start;
            Array1::from_shape_fn(intervals + 1, |i| {
                start + (i as f64 / intervals as f64) * span
            })
        };
        Self {
            points,
            sweep_type: SweepType::Linear,
        }
    }

    /// `npoints` values log-spaced between `10^start_exp` and `10^end_exp`
    ///
    /// A single-point sweep holds only `10^start_exp`.
    pub fn log10(start_exp: f64, end_exp: f64, npoints: usize) -> Self {
        let points = if npoints < 2 {
            Array1::from_elem(1, 10.0_f64.powf(start_exp))
        } else {
            let span = end_exp - start_exp;
            Array1::from_shape_fn(npoints, |i| {
                let alpha = i as f64 / (npoints - 1) as f64;
                10.0_f64.powf(start_exp + alpha * span)
            })
        };
        Self {
            points,
            sweep_type: SweepType::Log,
        }
    }

    #[inline]
    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// First point of the sweep
    #[inline]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Last point of the sweep
    #[inline]
    pub fn stop(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn into_points(self) -> Array1<f64> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_sweep_hits_both_ends() {
        let sweep = Sweep::linear(0.0, 7.5, 260);
        assert_eq!(sweep.npoints(), 261);
        assert_eq!(sweep.start(), 0.0);
        assert_eq!(sweep.stop(), 7.5);
        assert_eq!(sweep.sweep_type(), SweepType::Linear);
    }

    #[test]
    fn test_linear_sweep_strictly_increasing() {
        let sweep = Sweep::linear(0.0, 3.0, 50);
        for w in sweep.points().to_vec().windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_log_sweep_constant_ratio() {
        let sweep = Sweep::log10(-1.0, 2.0, 240);
        assert_eq!(sweep.npoints(), 240);
        assert_relative_eq!(sweep.start(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(sweep.stop(), 100.0, epsilon = 1e-9);

        let f = sweep.points().to_vec();
        let ratios: Vec<f64> = f.windows(2).map(|w| w[1] / w[0]).collect();
        for r in &ratios[1..] {
            assert_relative_eq!(*r, ratios[0], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_degenerate_sweeps() {
        assert_eq!(Sweep::linear(2.0, 5.0, 0).points().to_vec(), vec![2.0]);
        let single = Sweep::log10(1.0, 2.0, 1);
        assert_eq!(single.npoints(), 1);
        assert_relative_eq!(single.start(), 10.0, epsilon = 1e-12);
    }
}
