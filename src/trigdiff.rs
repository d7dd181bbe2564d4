//! Differentiation matrices for the trigonometric (periodic) basis
//!
//! Operators are built on the angular grid `theta_j = j*pi/n`, j = 0..n, by
//! expanding in cosine harmonics and inverting the collocation matrix of the
//! basis. The inversion is a deliberate construction choice (closed forms
//! exist without it) and introduces a failure mode closed forms do not have:
//! a singular or near-singular collocation matrix. Every build therefore
//! carries a reciprocal-condition estimate, and results below the configured
//! threshold surface as an error instead of a matrix of amplified noise.

use nalgebra::DMatrix;
use ndarray::Array2;
use thiserror::Error;

/// Errors from trigonometric differentiation-matrix construction.
#[derive(Debug, Error, PartialEq)]
pub enum TrigDiffError {
    #[error("harmonic order must be at least 1, got {0}")]
    InvalidOrder(usize),
    #[error("cosine collocation matrix is singular")]
    Singular,
    #[error("ill-conditioned construction: rcond {rcond:e} below threshold {rcond_min:e}")]
    IllConditioned { rcond: f64, rcond_min: f64 },
}

/// Configuration for the inversion-based construction.
#[derive(Debug, Clone)]
pub struct TrigDiffConfig {
    /// Reject builds whose 1-norm reciprocal condition number falls below
    /// this value.
    pub rcond_min: f64,
}

impl Default for TrigDiffConfig {
    fn default() -> Self {
        Self { rcond_min: 1e-12 }
    }
}

/// Build first- and second-derivative operators on the angular grid of
/// n+1 points with the default conditioning threshold.
pub fn trig_diff_matrices(n: usize) -> Result<(Array2<f64>, Array2<f64>), TrigDiffError> {
    trig_diff_matrices_with(n, &TrigDiffConfig::default())
}

/// Build first- and second-derivative operators on `theta_j = j*pi/n`,
/// j = 0..n, for functions expanded in cosine harmonics of index 0..n.
///
/// Entry [j, k] of the harmonic matrices is cos/sin of `theta_j * k`; the
/// derivative operators combine them, scaled by the harmonic index to the
/// power of the derivative order, through the inverse of the negated cosine
/// matrix:
///
/// D1 = (S . diag(k)) (-C)^-1,   D2 = (C . diag(k^2)) (-C)^-1
///
/// # Errors
/// `InvalidOrder` for n < 1; `Singular` when the inversion fails outright;
/// `IllConditioned` when the reciprocal condition estimate drops below
/// `config.rcond_min`.
pub fn trig_diff_matrices_with(
    n: usize,
    config: &TrigDiffConfig,
) -> Result<(Array2<f64>, Array2<f64>), TrigDiffError> {
    if n < 1 {
        return Err(TrigDiffError::InvalidOrder(n));
    }
    let dim = n + 1;
    let theta: Vec<f64> = (0..dim)
        .map(|j| j as f64 * std::f64::consts::PI / n as f64)
        .collect();

    let cos_m = DMatrix::from_fn(dim, dim, |j, k| (theta[j] * k as f64).cos());
    let sin_m = DMatrix::from_fn(dim, dim, |j, k| (theta[j] * k as f64).sin());

    let neg_cos = -cos_m.clone();
    let inv = checked_inverse(&neg_cos, config)?;

    // Harmonic matrices scaled columnwise by k and k^2.
    let s_k = DMatrix::from_fn(dim, dim, |j, k| k as f64 * sin_m[(j, k)]);
    let c_k2 = DMatrix::from_fn(dim, dim, |j, k| (k * k) as f64 * cos_m[(j, k)]);

    let d1 = &s_k * &inv;
    let d2 = &c_k2 * &inv;

    Ok((to_array2(&d1), to_array2(&d2)))
}

/// Cosine-harmonic amplitudes of sampled columns: solves C * A = V on the
/// angular grid, with the same conditioning guard as the derivative build.
///
/// `values` has one row per angular node (n+1 rows); column l of the result
/// holds the amplitudes a_k of `values[., l] = sum_k a_k cos(k*theta)`.
pub fn harmonic_amplitudes(
    values: &Array2<f64>,
    config: &TrigDiffConfig,
) -> Result<Array2<f64>, TrigDiffError> {
    let dim = values.nrows();
    if dim < 2 {
        return Err(TrigDiffError::InvalidOrder(dim.saturating_sub(1)));
    }
    let n = dim - 1;
    let theta: Vec<f64> = (0..dim)
        .map(|j| j as f64 * std::f64::consts::PI / n as f64)
        .collect();
    let cos_m = DMatrix::from_fn(dim, dim, |j, k| (theta[j] * k as f64).cos());
    let inv = checked_inverse(&cos_m, config)?;

    let v = DMatrix::from_fn(dim, values.ncols(), |i, j| values[[i, j]]);
    let a = &inv * &v;
    Ok(Array2::from_shape_fn((dim, values.ncols()), |(i, j)| a[(i, j)]))
}

/// Invert with a 1-norm reciprocal-condition estimate.
fn checked_inverse(m: &DMatrix<f64>, config: &TrigDiffConfig) -> Result<DMatrix<f64>, TrigDiffError> {
    let inv = m.clone().try_inverse().ok_or(TrigDiffError::Singular)?;
    let rcond = 1.0 / (one_norm(m) * one_norm(&inv));
    if !rcond.is_finite() || rcond < config.rcond_min {
        return Err(TrigDiffError::IllConditioned {
            rcond,
            rcond_min: config.rcond_min,
        });
    }
    Ok(inv)
}

fn one_norm(m: &DMatrix<f64>) -> f64 {
    let mut norm: f64 = 0.0;
    for k in 0..m.ncols() {
        let mut col_sum = 0.0;
        for j in 0..m.nrows() {
            col_sum += m[(j, k)].abs();
        }
        norm = norm.max(col_sum);
    }
    norm
}

fn to_array2(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

#[cfg(test)]
#[path = "trigdiff_tests.rs"]
mod tests;
