//! Point estimates and intervals computed from a PMF.

use crate::error::{Error, Result};
use crate::pmf::Pmf;
use crate::utils::{interpolate, inverse_interpolate};

/// Return the grid value with the highest mass (the MAP estimate when the
/// PMF is a posterior). Ties go to the lowest value. Works on unnormalized
/// weights because the mode does not depend on scale. A PMF always has at
/// least two points, so there is always a mode.
pub fn map_estimate(pmf: &Pmf) -> f64 {
    let mut best = 0;
    for (i, &mass) in pmf.masses().iter().enumerate() {
        if mass > pmf.masses()[best] {
            best = i;
        }
    }
    pmf.values()[best]
}

/// The expected value of the grid under 'pmf'.
pub fn mean(pmf: &Pmf) -> Result<f64> {
    pmf.check_normalized()?;
    Ok(pmf.iter().map(|(x, mass)| x * mass).sum())
}

pub fn variance(pmf: &Pmf) -> Result<f64> {
    let mu = mean(pmf)?;
    Ok(pmf
        .iter()
        .map(|(x, mass)| {
            let d = x - mu;
            d * d * mass
        })
        .sum())
}

pub fn std_dev(pmf: &Pmf) -> Result<f64> {
    Ok(variance(pmf)?.sqrt())
}

/// Evaluate the piecewise-linear CDF of 'pmf' at 'x'. Values below the grid
/// get the mass of the first point, values above it get the full mass.
pub fn cdf_at(pmf: &Pmf, x: f64) -> Result<f64> {
    pmf.check_normalized()?;
    Ok(interpolate(x, pmf.values(), &pmf.cdf()))
}

/// Return the smallest 'x' where the piecewise-linear CDF reaches 'p'.
fn invert_cdf(pmf: &Pmf, cdf: &[f64], p: f64) -> f64 {
    inverse_interpolate(p, pmf.values(), cdf)
}

fn check_probability(name: &'static str, p: f64, closed: bool) -> Result<()> {
    let ok = if closed {
        (0.0..=1.0).contains(&p)
    } else {
        p > 0.0 && p < 1.0
    };
    if ok {
        return Ok(());
    }
    Err(Error::InvalidArgument {
        name,
        value: p.to_string(),
        constraint: if closed {
            "must be in [0, 1]"
        } else {
            "must be strictly between 0 and 1"
        },
    })
}

/// The value below which 'p' of the mass lies.
pub fn quantile(pmf: &Pmf, p: f64) -> Result<f64> {
    check_probability("p", p, true)?;
    pmf.check_normalized()?;
    Ok(invert_cdf(pmf, &pmf.cdf(), p))
}

/// Return the central interval (low, high) that holds 'prob' of the mass,
/// leaving (1 - prob) / 2 in each tail. Bounds that fall outside the CDF
/// clamp to the ends of the grid.
pub fn credible_interval(pmf: &Pmf, prob: f64) -> Result<(f64, f64)> {
    check_probability("prob", prob, false)?;
    pmf.check_normalized()?;

    let cdf = pmf.cdf();
    let p_lo = (1.0 - prob) / 2.0;
    let p_hi = 1.0 - p_lo;
    let low = invert_cdf(pmf, &cdf, p_lo);
    let high = invert_cdf(pmf, &cdf, p_hi);
    log::debug!(
        "{:.1}% credible interval: [{:.6}, {:.6}]",
        prob * 100.0,
        low,
        high
    );
    Ok((low, high))
}

/// The usual set of statistics for one posterior.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Summary {
    pub map: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub prob: f64,
    pub interval: (f64, f64),
}

pub fn summarize(pmf: &Pmf, prob: f64) -> Result<Summary> {
    Ok(Summary {
        map: map_estimate(pmf),
        mean: mean(pmf)?,
        std_dev: std_dev(pmf)?,
        prob,
        interval: credible_interval(pmf, prob)?,
    })
}
