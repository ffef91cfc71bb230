#![no_main]

use gridbayes::{credible_interval, map_estimate, Grid, Pmf};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let prob = data[0] as f64 / 256.0;
    let weights: Vec<f64> = data[1..].iter().map(|b| *b as f64).collect();
    let grid = Arc::new(Grid::unit(weights.len()).unwrap());
    let pmf = Pmf::from_weights(&grid, &weights).unwrap();
    let mode = map_estimate(&pmf);
    assert!((0.0..=1.0).contains(&mode));

    let pmf = match pmf.normalize() {
        Ok(pmf) => pmf,
        Err(_) => return,
    };
    match credible_interval(&pmf, prob) {
        Ok((low, high)) => {
            assert!(prob > 0.0);
            assert!(0.0 <= low && low <= high && high <= 1.0);
        }
        Err(_) => assert_eq!(prob, 0.0),
    }
});
