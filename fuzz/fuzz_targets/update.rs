#![no_main]

use gridbayes::{CoinLikelihood, Grid, Observation, Pmf};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let grid = Arc::new(Grid::unit(33).unwrap());
    let prior = Pmf::from_triangle(&grid).normalize().unwrap();

    // Every pair of bytes is a batch of heads followed by a batch of tails.
    let data: Vec<Observation> = data
        .chunks(2)
        .flat_map(|c| {
            let tails = c.get(1).copied().unwrap_or(0);
            [Observation::heads(c[0] as u32), Observation::tails(tails as u32)]
        })
        .collect();

    if let Ok(posterior) = prior.update(&data, &CoinLikelihood) {
        assert!((posterior.total() - 1.0).abs() < 1e-9);
        assert!(posterior.masses().iter().all(|m| m.is_finite() && *m >= 0.0));
    }
});
