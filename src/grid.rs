//! An evenly spaced set of candidate values for the unknown parameter.

use crate::error::{Error, Result};

/// The support of every PMF in one analysis. The values are strictly
/// increasing and include both endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Vec<f64>,
}

impl Grid {
    /// Build a grid of 'count' evenly spaced points over [low, high].
    pub fn new(low: f64, high: f64, count: usize) -> Result<Self> {
        if count < 2 || !low.is_finite() || !high.is_finite() || low >= high {
            return Err(Error::InvalidRange { low, high, count });
        }

        let step = (high - low) / (count - 1) as f64;
        if !step.is_finite() {
            return Err(Error::InvalidRange { low, high, count });
        }
        let mut values: Vec<f64> = (0..count).map(|i| low + step * i as f64).collect();
        // Pin the last point so rounding never pushes it past 'high'.
        values[count - 1] = high;

        // Intervals narrower than count-1 ulps collapse neighboring points.
        if values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidRange { low, high, count });
        }

        Ok(Self { values })
    }

    /// A grid over the closed unit interval, the domain of a probability.
    pub fn unit(count: usize) -> Result<Self> {
        Self::new(0.0, 1.0, count)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    pub fn low(&self) -> f64 {
        self.values[0]
    }

    pub fn high(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// The distance between two neighboring points.
    pub fn step(&self) -> f64 {
        (self.high() - self.low()) / (self.len() - 1) as f64
    }
}
