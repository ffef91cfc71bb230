use gridbayes::{Error, Grid};

#[test]
fn test_grid_endpoints() {
    let grid = Grid::new(0.0, 1.0, 101).unwrap();
    assert_eq!(grid.len(), 101);
    assert_eq!(grid.low(), 0.0);
    assert_eq!(grid.high(), 1.0);
    assert!((grid.step() - 0.01).abs() < 1e-12);
    assert!((grid.get(50).unwrap() - 0.5).abs() < 1e-12);
    assert!((grid.get(56).unwrap() - 0.56).abs() < 1e-12);
    assert_eq!(grid.get(101), None);
}

#[test]
fn test_grid_is_strictly_increasing() {
    for count in [2, 3, 7, 101, 1001] {
        let grid = Grid::new(-3.5, 12.25, count).unwrap();
        assert_eq!(grid.len(), count);
        assert_eq!(grid.low(), -3.5);
        assert_eq!(grid.high(), 12.25);
        for w in grid.values().windows(2) {
            assert!(w[0] < w[1]);
        }
    }
}

#[test]
fn test_grid_rejects_bad_ranges() {
    let bad = [
        (0.0, 1.0, 0),
        (0.0, 1.0, 1),
        (1.0, 1.0, 10),
        (1.0, 0.0, 10),
        (f64::NAN, 1.0, 10),
        (0.0, f64::INFINITY, 10),
        // The width of the interval overflows.
        (-1e308, 1e308, 3),
        // Too narrow to hold distinct points.
        (1.0, 1.0 + f64::EPSILON, 4),
    ];
    for (low, high, count) in bad {
        match Grid::new(low, high, count) {
            Err(Error::InvalidRange { count: c, .. }) => assert_eq!(c, count),
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }
}

#[test]
fn test_unit_grid() {
    let grid = Grid::unit(2).unwrap();
    assert_eq!(grid.values(), &[0.0, 1.0]);
    assert!(!grid.is_empty());
}

#[test]
fn test_narrow_grid_keeps_distinct_points() {
    let grid = Grid::new(1.0, 1.0 + 4.0 * f64::EPSILON, 5).unwrap();
    for w in grid.values().windows(2) {
        assert!(w[0] < w[1]);
    }

    let grid = Grid::new(-1e307, 1e307, 3).unwrap();
    assert!(grid.values().iter().all(|v| v.is_finite()));
    assert_eq!(grid.get(1), Some(0.0));
}
