//! A collection of utilities for running sums and one-dimensional
//! piecewise-linear interpolation.

/// The default relative tolerance for "sums to one" checks.
pub const NORMALIZED_TOLERANCE: f64 = 1e-9;

/// Return True if 'a' and 'b' are equal within the relative tolerance 'tol'.
/// Values close to zero are compared with 'tol' as an absolute bound.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tol * scale
}

/// Return the running sum of 'values'. The i-th output is the sum of the
/// first i+1 inputs.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            acc += v;
            acc
        })
        .collect()
}

/// Evaluate the piecewise-linear function through the points (xs[i], ys[i])
/// at 'x'. The 'xs' must be strictly increasing. Inputs outside of the
/// domain take the value of the nearest endpoint.
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());
    let last = xs.len() - 1;

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    // The first point strictly to the right of 'x'. Always in 1..=last here.
    let hi = xs.partition_point(|&v| v <= x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}

/// Invert the non-decreasing piecewise-linear function through the points
/// (xs[i], ys[i]): find the smallest 'x' where the function reaches 'y'.
///
/// Flat runs in 'ys' are resolved to their left edge, so a run of zero-mass
/// points before the bulk of a distribution maps to the last point before
/// the mass starts rising. Targets below ys[0] clamp to xs[0] and targets
/// above the last value clamp to the last 'x'.
pub fn inverse_interpolate(y: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());
    let last = xs.len() - 1;

    if y <= ys[0] {
        return xs[0];
    }
    if y > ys[last] {
        return xs[last];
    }

    // The first point that reaches 'y'. Here ys[0] < y <= ys[last], so the
    // index is in 1..=last and the segment below it has a positive rise.
    let hi = ys.partition_point(|&v| v < y);
    let lo = hi - 1;
    let rise = ys[hi] - ys[lo];
    let t = (y - ys[lo]) / rise;
    xs[lo] + t * (xs[hi] - xs[lo])
}

#[test]
fn test_cumulative_sum() {
    assert_eq!(cumulative_sum(&[]), Vec::<f64>::new());
    assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
    assert_eq!(cumulative_sum(&[0.0, 0.0, 1.0]), vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_interpolate() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0, 30.0];
    assert_eq!(interpolate(-1.0, &xs, &ys), 0.0);
    assert_eq!(interpolate(0.5, &xs, &ys), 5.0);
    assert_eq!(interpolate(1.0, &xs, &ys), 10.0);
    assert_eq!(interpolate(1.5, &xs, &ys), 20.0);
    assert_eq!(interpolate(3.0, &xs, &ys), 30.0);
}

#[test]
fn test_inverse_interpolate() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [0.0, 0.5, 0.5, 1.0];
    assert_eq!(inverse_interpolate(-0.1, &xs, &ys), 0.0);
    assert_eq!(inverse_interpolate(0.25, &xs, &ys), 0.5);
    // The flat run between x=1 and x=2 resolves to its left edge.
    assert_eq!(inverse_interpolate(0.5, &xs, &ys), 1.0);
    assert_eq!(inverse_interpolate(0.75, &xs, &ys), 2.5);
    assert_eq!(inverse_interpolate(1.0, &xs, &ys), 3.0);
    assert_eq!(inverse_interpolate(1.5, &xs, &ys), 3.0);

    // A leading run of zeros.
    let ys = [0.0, 0.0, 0.0, 1.0];
    assert_eq!(inverse_interpolate(0.0, &xs, &ys), 0.0);
    assert_eq!(inverse_interpolate(0.5, &xs, &ys), 2.5);
}

#[test]
fn test_approx_eq() {
    assert!(approx_eq(1.0, 1.0 + 1e-12, 1e-9));
    assert!(!approx_eq(1.0, 1.001, 1e-9));
    assert!(approx_eq(0.0, 1e-12, 1e-9));
    assert!(approx_eq(1e6, 1e6 + 1e-4, 1e-9));
}
