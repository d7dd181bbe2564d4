//! End-to-end properties of the spectral transform engine

use chebspec_rust::*;
use std::f64::consts::PI;

/// Spectral convergence: trailing Chebyshev coefficients of a smooth sample
/// decay toward machine epsilon as the order grows.
#[test]
fn coefficient_decay_tracks_order() {
    let mut previous_tail = f64::INFINITY;
    for n in [6, 10, 14, 18] {
        let grid = Grid::chebyshev_lobatto(-1.0, 1.0, n).unwrap();
        let values: Vec<f64> = grid.x.iter().map(|&x| x.exp()).collect();
        let coeffs = forward_transform(&values).unwrap();
        let tail = coeffs[n - 1].abs().max(1e-18);
        assert!(
            tail < previous_tail,
            "tail did not shrink at n={}: {:e} vs {:e}",
            n,
            tail,
            previous_tail
        );
        previous_tail = tail;
    }
    // By n = 18 the tail sits at the rounding floor.
    assert!(previous_tail < 1e-14);
}

/// Full pipeline: grid -> sample -> transform -> evaluate reproduces the
/// sampled values at every node, on a physical interval.
#[test]
fn round_trip_on_physical_interval() {
    let (a, b) = (0.5, 3.0);
    let n = 21;
    let grid = Grid::chebyshev_lobatto(a, b, n).unwrap();
    let values: Vec<f64> = grid.x.iter().map(|&x| (x * x).ln()).collect();
    let coeffs = forward_transform(&values).unwrap();
    for (i, &x) in grid.x.iter().enumerate() {
        let u = grid.canonical_coordinate(x);
        assert!((evaluate(&coeffs, u) - values[i]).abs() < 1e-12);
    }
}

/// The order-101 Clenshaw-Curtis composition hits the analytic value of
/// a classic oscillatory-exponential integral to ten digits.
#[test]
fn quadrature_matches_analytic_integral() {
    let exact = (PI.exp() + 1.0) / 2.0;
    let got = spectral_integrate(|x: f64| x.exp() * x.sin(), 0.0, PI, 101).unwrap();
    assert!((got - exact).abs() < 1e-10);
}

/// Differentiating exp on 25 canonical points stays below 1e-10 everywhere.
#[test]
fn differentiation_accuracy_scenario() {
    let n = 25;
    let grid = Grid::chebyshev_lobatto(-1.0, 1.0, n).unwrap();
    let d = spectral_derivative(|x: f64| x.exp(), -1.0, 1.0, n, 1).unwrap();
    for (&x, &v) in grid.x.iter().zip(d.iter()) {
        assert!((v - x.exp()).abs() < 1e-10);
    }
}

/// A rejected reciprocal-condition threshold surfaces as the named
/// ill-conditioning error, never as a silently corrupt matrix.
#[test]
fn ill_conditioned_construction_is_rejected() {
    let config = TrigDiffConfig { rcond_min: 1.0 };
    match trig_diff_matrices_with(10, &config) {
        Err(TrigDiffError::IllConditioned { rcond, .. }) => assert!(rcond.is_finite()),
        other => panic!("expected IllConditioned, got {:?}", other),
    }

    // The default threshold accepts the same build and yields finite entries.
    let (d1, d2) = trig_diff_matrices(10).unwrap();
    assert!(d1.iter().all(|v| v.is_finite()));
    assert!(d2.iter().all(|v| v.is_finite()));
}

/// Every operation is a pure function: identical inputs give bit-identical
/// outputs across calls.
#[test]
fn idempotence_across_operations() {
    let g1 = Grid::chebyshev_lobatto(-2.0, 7.0, 31).unwrap();
    let g2 = Grid::chebyshev_lobatto(-2.0, 7.0, 31).unwrap();
    assert_eq!(g1.x, g2.x);

    let values: Vec<f64> = g1.x.iter().map(|&x| (0.3 * x).cos()).collect();
    assert_eq!(
        forward_transform(&values).unwrap(),
        forward_transform(&values).unwrap()
    );

    let m1 = DiffMatrices::build(&g1).unwrap();
    let m2 = DiffMatrices::build(&g2).unwrap();
    assert_eq!(m1.m1, m2.m1);
    assert_eq!(m1.m2, m2.m2);

    assert_eq!(
        quadrature_weights(9.0, 31).unwrap(),
        quadrature_weights(9.0, 31).unwrap()
    );

    let (t1a, t1b) = trig_diff_matrices(9).unwrap();
    let (t2a, t2b) = trig_diff_matrices(9).unwrap();
    assert_eq!(t1a, t2a);
    assert_eq!(t1b, t2b);
}

/// Interpolant closures from the composition layer agree with the function
/// they sampled, well inside the interval and at its ends.
#[test]
fn interpolant_closure_end_to_end() {
    let f = |x: f64| 1.0 / (1.0 + x * x);
    let interp = spectral_interpolant(f, -4.0, 4.0, 120).unwrap();
    for &x in &[-4.0, -3.2, -1.0, 0.0, 0.7, 2.5, 4.0] {
        assert!((interp(x) - f(x)).abs() < 1e-9, "at x={}", x);
    }
}

/// Extended-precision grids feed the same generic pipeline.
#[test]
fn twofloat_grid_through_basis_evaluation() {
    let a = TwoFloat::from(-1.0);
    let b = TwoFloat::from(1.0);
    let grid = Grid::chebyshev_lobatto(a, b, 9).unwrap();
    assert!(grid.validate());

    // T_2 evaluated in double-double agrees with f64 to f64 precision.
    for &x in grid.x.iter() {
        let basis = chebyshev_basis(x, 3);
        let xf = CustomNumeric::to_f64(x);
        assert!((CustomNumeric::to_f64(basis[2]) - (2.0 * xf * xf - 1.0)).abs() < 1e-14);
    }
}
