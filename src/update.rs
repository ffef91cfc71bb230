//! The Bayesian update: prior times likelihood, renormalized.

use crate::error::{Error, Result};
use crate::likelihood::{Likelihood, Observation};
use crate::pmf::Pmf;

/// Compute the log-likelihood of all of 'observations' at each grid point of
/// 'prior' under 'model'. Points where an observation is impossible get
/// negative infinity.
pub fn log_likelihood_vector<L: Likelihood + ?Sized>(
    prior: &Pmf,
    observations: &[Observation],
    model: &L,
) -> Result<Vec<f64>> {
    let mut res = vec![0.0; prior.len()];
    for obs in observations {
        if obs.count == 0 {
            continue;
        }
        log::trace!("Applying {} x {}", obs.count, obs.outcome);
        for (acc, &x) in res.iter_mut().zip(prior.values()) {
            let p = model.likelihood(obs.outcome, x);
            if !p.is_finite() || p < 0.0 {
                return Err(Error::InvalidArgument {
                    name: "likelihood",
                    value: format!("{} at x={}", p, x),
                    constraint: "a likelihood must be a finite non-negative number",
                });
            }
            *acc += obs.count as f64 * p.ln();
        }
    }
    Ok(res)
}

/// Combine 'prior' with 'observations' and return the normalized posterior.
/// The prior is left untouched, and the order of the observations does not
/// matter. The product is formed in log space and scaled so that the most
/// likely point has weight one; points that still round to zero are dropped
/// from the support. Only a posterior with no mass left anywhere is an error.
pub fn update<L: Likelihood + ?Sized>(
    prior: &Pmf,
    observations: &[Observation],
    model: &L,
) -> Result<Pmf> {
    let total = prior.total();
    if total == 0.0 || !total.is_finite() {
        return Err(Error::DegenerateDistribution { total });
    }

    let log_lik = log_likelihood_vector(prior, observations, model)?;
    let log_post: Vec<f64> = prior
        .masses()
        .iter()
        .zip(&log_lik)
        .map(|(m, l)| if *m > 0.0 { m.ln() + l } else { f64::NEG_INFINITY })
        .collect();

    let max = log_post
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return Err(Error::DegenerateDistribution { total: 0.0 });
    }
    let weights: Vec<f64> = log_post.iter().map(|v| (v - max).exp()).collect();

    let before = prior.masses().iter().filter(|m| **m > 0.0).count();
    let after = weights.iter().filter(|w| **w > 0.0).count();
    log::debug!(
        "Updated {} points with {} observation batches, peak log mass {:.3}",
        prior.len(),
        observations.len(),
        max
    );
    if after * 2 < before {
        log::warn!(
            "Update left only {} of {} supported points with non-zero mass",
            after,
            before
        );
    }

    Pmf::from_weights(prior.grid(), &weights)?.normalize()
}

impl Pmf {
    /// Return the posterior of this PMF after seeing 'observations'.
    /// Applying several updates one after the other gives the same
    /// posterior as one batched update with all of the observations.
    pub fn update<L: Likelihood + ?Sized>(
        &self,
        observations: &[Observation],
        model: &L,
    ) -> Result<Pmf> {
        update(self, observations, model)
    }
}
