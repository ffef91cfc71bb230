//! The error type shared by every fallible operation in the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A grid was requested with too few points or an empty interval.
    #[error("invalid grid range: [{low}, {high}] with {count} points")]
    InvalidRange { low: f64, high: f64, count: usize },

    /// Weights do not line up with the grid they are attached to.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// The total mass is zero or not finite, so it can't be normalized.
    #[error("degenerate distribution: total mass is {total}")]
    DegenerateDistribution { total: f64 },

    /// A statistic that needs a probability distribution got raw weights.
    #[error("distribution is not normalized: total mass is {total}")]
    NotNormalized { total: f64 },

    /// An argument is outside of its domain, such as a credible interval
    /// mass that is not strictly between 0 and 1.
    #[error("invalid argument '{name}' = {value}: {constraint}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        constraint: &'static str,
    },
}
