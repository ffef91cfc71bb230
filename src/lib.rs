//! Discrete Bayesian inference over a single parameter using a grid
//! approximation: build a prior over a grid, update it with binary outcomes
//! and summarize the posterior.

pub mod error;
pub mod grid;
pub mod likelihood;
pub mod pmf;
pub mod stats;
pub mod update;
pub mod utils;

pub use error::{Error, Result};
pub use grid::Grid;
pub use likelihood::{
    observations_from_sequence, CoinLikelihood, Likelihood, Observation,
    Outcome,
};
pub use pmf::Pmf;
pub use stats::{
    cdf_at, credible_interval, map_estimate, mean, quantile, std_dev,
    summarize, variance, Summary,
};
pub use update::{log_likelihood_vector, update};
