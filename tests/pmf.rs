use gridbayes::{Error, Grid, Pmf};
use std::sync::Arc;

fn unit_grid(n: usize) -> Arc<Grid> {
    Arc::new(Grid::unit(n).unwrap())
}

#[test]
fn test_uniform() {
    let grid = unit_grid(101);
    let pmf = Pmf::from_uniform(&grid);
    assert_eq!(pmf.len(), 101);
    assert!((pmf.prob(0).unwrap() - 1.0 / 101.0).abs() < 1e-15);
    assert!((pmf.total() - 1.0).abs() < 1e-9);
    assert!(pmf.is_normalized());
}

#[test]
fn test_from_weights_checks_shape() {
    let grid = unit_grid(4);
    assert!(Pmf::from_weights(&grid, &[1.0, 2.0, 3.0, 4.0]).is_ok());

    let res = Pmf::from_weights(&grid, &[1.0, 2.0, 3.0]);
    assert!(matches!(res, Err(Error::DimensionMismatch { .. })));

    let res = Pmf::from_weights(&grid, &[1.0, -2.0, 3.0, 4.0]);
    assert!(matches!(res, Err(Error::DimensionMismatch { .. })));

    let res = Pmf::from_weights(&grid, &[1.0, f64::NAN, 3.0, 4.0]);
    assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
}

#[test]
fn test_normalize_returns_new_value() {
    let grid = unit_grid(4);
    let weights = Pmf::from_weights(&grid, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(!weights.is_normalized());
    assert_eq!(weights.total(), 10.0);

    let pmf = weights.normalize().unwrap();
    assert!((pmf.total() - 1.0).abs() < 1e-9);
    assert_eq!(pmf.masses(), &[0.1, 0.2, 0.3, 0.4]);

    // The input is untouched.
    assert_eq!(weights.masses(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_normalize_degenerate() {
    let grid = unit_grid(3);
    let zeros = Pmf::from_weights(&grid, &[0.0, 0.0, 0.0]).unwrap();
    assert!(matches!(
        zeros.normalize(),
        Err(Error::DegenerateDistribution { .. })
    ));

    let inf = Pmf::from_weights(&grid, &[1.0, f64::INFINITY, 0.0]).unwrap();
    assert!(matches!(
        inf.normalize(),
        Err(Error::DegenerateDistribution { .. })
    ));
}

#[test]
fn test_random_weights_normalize_to_one() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    for n in [2, 10, 101, 1000] {
        let grid = unit_grid(n);
        let weights: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1e6)).collect();
        let pmf = Pmf::from_weights(&grid, &weights)
            .unwrap()
            .normalize()
            .unwrap();
        assert!((pmf.total() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_triangle() {
    let grid = unit_grid(101);
    let tri = Pmf::from_triangle(&grid);
    assert_eq!(tri.prob(0), Some(0.0));
    assert_eq!(tri.prob(50), Some(50.0));
    assert_eq!(tri.prob(49), Some(49.0));
    assert_eq!(tri.prob(51), Some(49.0));
    assert_eq!(tri.prob(100), Some(0.0));

    let tri = tri.normalize().unwrap();
    for i in 0..101 {
        assert_eq!(tri.masses()[i], tri.masses()[100 - i]);
    }
}

#[test]
fn test_from_fn_and_iter() {
    let grid = unit_grid(5);
    let pmf = Pmf::from_fn(&grid, |x| x * x).unwrap();
    let pairs: Vec<(f64, f64)> = pmf.iter().collect();
    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[2], (0.5, 0.25));
    assert_eq!(pairs[4], (1.0, 1.0));

    assert!(Pmf::from_fn(&grid, |x| x - 0.5).is_err());
}

#[test]
fn test_mul_likelihood_and_cdf() {
    let grid = unit_grid(3);
    let pmf = Pmf::from_weights(&grid, &[1.0, 1.0, 2.0]).unwrap();
    let res = pmf.mul_likelihood(&[0.5, 2.0, 1.0]).unwrap();
    assert_eq!(res.masses(), &[0.5, 2.0, 2.0]);
    assert_eq!(res.cdf(), vec![0.5, 2.5, 4.5]);
    assert!(pmf.mul_likelihood(&[1.0]).is_err());
}

#[test]
fn test_dump() {
    let grid = unit_grid(11);
    Pmf::from_triangle(&grid).normalize().unwrap().dump();
    Pmf::from_weights(&grid, &[0.0; 11]).unwrap().dump();
}
