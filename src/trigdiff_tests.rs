use super::*;
use std::f64::consts::PI;

fn angular_grid(n: usize) -> Vec<f64> {
    (0..=n).map(|j| j as f64 * PI / n as f64).collect()
}

fn apply(m: &Array2<f64>, v: &[f64]) -> Vec<f64> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[[i, j]] * v[j]).sum())
        .collect()
}

#[test]
fn test_first_derivative_of_harmonic() {
    let n = 8;
    let theta = angular_grid(n);
    let (d1, _) = trig_diff_matrices(n).unwrap();

    // cos(2*theta) lies exactly in the harmonic basis for n >= 2.
    let f: Vec<f64> = theta.iter().map(|&t| (2.0 * t).cos()).collect();
    let df = apply(&d1, &f);
    for (j, &t) in theta.iter().enumerate() {
        let exact = -2.0 * (2.0 * t).sin();
        assert!((df[j] - exact).abs() < 1e-8, "df[{}] = {}, want {}", j, df[j], exact);
    }
}

#[test]
fn test_second_derivative_of_harmonic() {
    let n = 10;
    let theta = angular_grid(n);
    let (_, d2) = trig_diff_matrices(n).unwrap();

    let f: Vec<f64> = theta.iter().map(|&t| (3.0 * t).cos()).collect();
    let ddf = apply(&d2, &f);
    for (j, &t) in theta.iter().enumerate() {
        let exact = -9.0 * (3.0 * t).cos();
        assert!((ddf[j] - exact).abs() < 1e-7);
    }
}

#[test]
fn test_constant_maps_to_zero() {
    let n = 6;
    let (d1, d2) = trig_diff_matrices(n).unwrap();
    let ones = vec![1.0; n + 1];
    for v in apply(&d1, &ones) {
        assert!(v.abs() < 1e-10);
    }
    for v in apply(&d2, &ones) {
        assert!(v.abs() < 1e-9);
    }
}

#[test]
fn test_entries_are_finite() {
    for n in 1..=12 {
        let (d1, d2) = trig_diff_matrices(n).unwrap();
        assert_eq!(d1.nrows(), n + 1);
        assert_eq!(d2.ncols(), n + 1);
        for &v in d1.iter().chain(d2.iter()) {
            assert!(v.is_finite());
        }
    }
}

#[test]
fn test_ill_conditioning_threshold_is_enforced() {
    // The reciprocal condition number of the collocation matrix is well
    // below 1, so a threshold of 1.0 must reject the build instead of
    // handing back a matrix built from a rejected inverse.
    let config = TrigDiffConfig { rcond_min: 1.0 };
    let err = trig_diff_matrices_with(8, &config).unwrap_err();
    match err {
        TrigDiffError::IllConditioned { rcond, rcond_min } => {
            assert!(rcond < 1.0);
            assert_eq!(rcond_min, 1.0);
        }
        other => panic!("expected IllConditioned, got {:?}", other),
    }
}

#[test]
fn test_invalid_order() {
    assert_eq!(trig_diff_matrices(0).unwrap_err(), TrigDiffError::InvalidOrder(0));
}

#[test]
fn test_harmonic_amplitudes_recovers_coefficients() {
    let n = 6;
    let theta = angular_grid(n);
    // f(theta) = 1.5 + 0.5*cos(theta) - 2*cos(4*theta)
    let values = Array2::from_shape_fn((n + 1, 1), |(j, _)| {
        1.5 + 0.5 * theta[j].cos() - 2.0 * (4.0 * theta[j]).cos()
    });
    let a = harmonic_amplitudes(&values, &TrigDiffConfig::default()).unwrap();
    let expected = [1.5, 0.5, 0.0, 0.0, -2.0, 0.0, 0.0];
    for (k, &e) in expected.iter().enumerate() {
        assert!((a[[k, 0]] - e).abs() < 1e-10, "a[{}] = {}, want {}", k, a[[k, 0]], e);
    }
}

#[test]
fn test_deterministic() {
    let (a1, b1) = trig_diff_matrices(7).unwrap();
    let (a2, b2) = trig_diff_matrices(7).unwrap();
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}
