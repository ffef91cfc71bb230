//! Binary outcomes and the models that assign them a probability.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The label of a single binary observation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Heads,
    Tails,
}

impl Outcome {
    pub fn symbol(&self) -> char {
        match self {
            Outcome::Heads => 'H',
            Outcome::Tails => 'T',
        }
    }

    /// Map a single flip character to an outcome.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'H' => Some(Outcome::Heads),
            'T' => Some(Outcome::Tails),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Heads => write!(f, "heads"),
            Outcome::Tails => write!(f, "tails"),
        }
    }
}

impl FromStr for Outcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "head" | "heads" => Ok(Outcome::Heads),
            "t" | "tail" | "tails" => Ok(Outcome::Tails),
            _ => Err(Error::InvalidArgument {
                name: "outcome",
                value: s.to_string(),
                constraint: "expected heads/tails (or H/T)",
            }),
        }
    }
}

/// A batch of identical observations, e.g. "140 heads".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Observation {
    pub outcome: Outcome,
    pub count: u32,
}

impl Observation {
    pub fn new(outcome: Outcome, count: u32) -> Self {
        Self { outcome, count }
    }

    pub fn heads(count: u32) -> Self {
        Self::new(Outcome::Heads, count)
    }

    pub fn tails(count: u32) -> Self {
        Self::new(Outcome::Tails, count)
    }
}

/// Collapse a flip string such as "HHTH" into one observation per outcome.
/// Whitespace and commas are ignored.
pub fn observations_from_sequence(seq: &str) -> Result<Vec<Observation>> {
    let mut heads = 0u32;
    let mut tails = 0u32;
    for ch in seq.chars() {
        if ch.is_whitespace() || ch == ',' {
            continue;
        }
        match Outcome::from_char(ch) {
            Some(Outcome::Heads) => heads += 1,
            Some(Outcome::Tails) => tails += 1,
            None => {
                return Err(Error::InvalidArgument {
                    name: "sequence",
                    value: ch.to_string(),
                    constraint: "flips must be 'H' or 'T'",
                })
            }
        }
    }

    let mut res = Vec::new();
    if heads > 0 {
        res.push(Observation::heads(heads));
    }
    if tails > 0 {
        res.push(Observation::tails(tails));
    }
    Ok(res)
}

/// A trait that defines the interface for likelihood models.
pub trait Likelihood {
    /// Return the probability of observing 'outcome' when the unknown
    /// parameter has the value 'x'. The result must be in [0, 1] for every
    /// 'x' in the model's domain.
    #[must_use]
    fn likelihood(&self, outcome: Outcome, x: f64) -> f64;
}

impl<F> Likelihood for F
where
    F: Fn(Outcome, f64) -> f64,
{
    fn likelihood(&self, outcome: Outcome, x: f64) -> f64 {
        self(outcome, x)
    }
}

/// The biased coin: 'x' is the probability of heads.
#[derive(Debug, Default, Copy, Clone)]
pub struct CoinLikelihood;

impl Likelihood for CoinLikelihood {
    fn likelihood(&self, outcome: Outcome, x: f64) -> f64 {
        match outcome {
            Outcome::Heads => x,
            Outcome::Tails => 1.0 - x,
        }
    }
}
