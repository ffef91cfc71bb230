//! A probability mass function over the points of a grid.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::utils::{approx_eq, cumulative_sum, NORMALIZED_TOLERANCE};
use std::sync::Arc;

/// Non-negative masses, one per grid point. A PMF is not normalized on
/// construction; callers build weights and then call `normalize`. Every
/// transformation returns a new PMF and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
    grid: Arc<Grid>,
    masses: Vec<f64>,
}

impl Pmf {
    /// Equal mass 1/N at every grid point.
    pub fn from_uniform(grid: &Arc<Grid>) -> Self {
        let mass = 1.0 / grid.len() as f64;
        Self {
            grid: grid.clone(),
            masses: vec![mass; grid.len()],
        }
    }

    /// Use 'weights' as the masses. The weights must line up with the grid
    /// and must all be non-negative.
    pub fn from_weights(grid: &Arc<Grid>, weights: &[f64]) -> Result<Self> {
        if weights.len() != grid.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} weights", grid.len()),
                actual: format!("{} weights", weights.len()),
            });
        }
        if let Some((idx, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| w.is_nan() || **w < 0.0)
        {
            return Err(Error::DimensionMismatch {
                expected: format!("a non-negative weight at index {}", idx),
                actual: format!("{}", w),
            });
        }

        Ok(Self {
            grid: grid.clone(),
            masses: weights.to_vec(),
        })
    }

    /// Weights that ramp up linearly to the middle of the grid and back down
    /// to zero at both ends.
    pub fn from_triangle(grid: &Arc<Grid>) -> Self {
        let n = grid.len();
        let masses = (0..n).map(|i| i.min(n - 1 - i) as f64).collect();
        Self {
            grid: grid.clone(),
            masses,
        }
    }

    /// Weights computed from each grid value by 'f'.
    pub fn from_fn<F: Fn(f64) -> f64>(grid: &Arc<Grid>, f: F) -> Result<Self> {
        let weights: Vec<f64> = grid.values().iter().map(|&x| f(x)).collect();
        Self::from_weights(grid, &weights)
    }

    /// Return a copy of this PMF scaled so that the masses sum to one.
    pub fn normalize(&self) -> Result<Self> {
        let total = self.total();
        if total == 0.0 || !total.is_finite() {
            return Err(Error::DegenerateDistribution { total });
        }
        log::trace!("Normalizing {} points, total mass {:e}", self.len(), total);

        Ok(Self {
            grid: self.grid.clone(),
            masses: self.masses.iter().map(|m| m / total).collect(),
        })
    }

    /// Multiply every mass by the matching entry of 'likelihood'. The result
    /// is not normalized.
    pub fn mul_likelihood(&self, likelihood: &[f64]) -> Result<Self> {
        if likelihood.len() != self.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} likelihood values", self.len()),
                actual: format!("{} likelihood values", likelihood.len()),
            });
        }
        let masses = self
            .masses
            .iter()
            .zip(likelihood)
            .map(|(m, l)| m * l)
            .collect();
        Ok(Self {
            grid: self.grid.clone(),
            masses,
        })
    }

    pub fn total(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Return True if the masses sum to one within the default tolerance.
    pub fn is_normalized(&self) -> bool {
        approx_eq(self.total(), 1.0, NORMALIZED_TOLERANCE)
    }

    /// Fail with NotNormalized unless the masses sum to one.
    pub(crate) fn check_normalized(&self) -> Result<()> {
        if self.is_normalized() {
            Ok(())
        } else {
            Err(Error::NotNormalized {
                total: self.total(),
            })
        }
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    pub fn values(&self) -> &[f64] {
        self.grid.values()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// The mass at grid index 'idx'.
    pub fn prob(&self, idx: usize) -> Option<f64> {
        self.masses.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Iterate over (value, mass) pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.values().iter().copied().zip(self.masses.iter().copied())
    }

    /// The running sum of the masses in grid order.
    pub fn cdf(&self) -> Vec<f64> {
        cumulative_sum(&self.masses)
    }

    /// Print the masses as a bar chart, skipping the zero-mass tails.
    pub fn dump(&self) {
        let mut first_non_zero = self.len();
        let mut last_non_zero = 0;
        let mut max = 0.0f64;

        // Find the max value and the non-zero range.
        for (i, mass) in self.masses.iter().enumerate() {
            if *mass > 0.0 {
                first_non_zero = first_non_zero.min(i);
                last_non_zero = last_non_zero.max(i);
                max = max.max(*mass);
            }
        }

        if max == 0.0 {
            println!("-- empty --");
            return;
        }

        for i in first_non_zero..last_non_zero + 1 {
            let len = (40.0 * self.masses[i] / max).round() as usize;
            println!(
                "{:>8.4}) {} - {:.6}",
                self.grid.values()[i],
                "#".repeat(len),
                self.masses[i]
            );
        }
    }
}
