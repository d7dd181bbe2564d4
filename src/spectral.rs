//! Composition layer: sample, transform, package
//!
//! Thin wrappers that sample a caller-supplied closure on a grid, drive the
//! transform/differentiation/quadrature core, and hand back a derivative
//! vector, a scalar integral, or a continuous interpolant closure. Also the
//! 2D mixed-basis reconstruction combining the cosine-harmonic angular basis
//! with the Chebyshev polynomial basis.

use crate::diffmat::{DiffMatrices, DiffMatrixError};
use crate::grid::{Grid, GridError};
use crate::numeric::CustomNumeric;
use crate::quadrature::{clenshaw_curtis, QuadratureError};
use crate::transform::{chebyshev_basis, evaluate, forward_transform, TransformError};
use crate::trigdiff::{harmonic_amplitudes, TrigDiffConfig, TrigDiffError};
use ndarray::Array2;
use thiserror::Error;

/// Errors surfaced by the composition layer; each wraps the core error it
/// propagates from.
#[derive(Debug, Error, PartialEq)]
pub enum SpectralError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    DiffMatrix(#[from] DiffMatrixError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
    #[error(transparent)]
    TrigDiff(#[from] TrigDiffError),
    #[error("derivative order {0} is not available, use 1 or 2")]
    UnsupportedOrder(usize),
}

/// Sample a function at every grid point.
pub fn sample<T: CustomNumeric, F: Fn(T) -> T>(f: F, grid: &Grid<T>) -> Vec<T> {
    grid.x.iter().map(|&x| f(x)).collect()
}

/// Derivative of order 1 or 2 of `f` at the n Chebyshev-Gauss-Lobatto nodes
/// of [a, b].
///
/// The differentiation matrices are built directly from the physical-domain
/// nodes, so the result needs no interval rescaling.
pub fn spectral_derivative<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    n: usize,
    order: usize,
) -> Result<Vec<f64>, SpectralError> {
    if order == 0 || order > 2 {
        return Err(SpectralError::UnsupportedOrder(order));
    }
    let grid = Grid::chebyshev_lobatto(a, b, n)?;
    let matrices = DiffMatrices::build(&grid)?;
    let values = sample(&f, &grid);
    Ok(matrices.apply(order, &values)?)
}

/// Definite integral of `f` over [a, b] by Clenshaw-Curtis quadrature at
/// order n.
///
/// An even n has no weight vector under the quadrature formula, so it is
/// bumped up by one before sampling; this is the standard retry for the
/// `EvenLength` failure and costs one extra sample.
pub fn spectral_integrate<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    n: usize,
) -> Result<f64, SpectralError> {
    let n = if n % 2 == 0 { n + 1 } else { n };
    let grid = Grid::chebyshev_lobatto(a, b, n)?;
    let values = sample(&f, &grid);
    let coeffs = forward_transform(&values)?;
    Ok(clenshaw_curtis(&coeffs, b - a)?)
}

/// Continuous interpolant of `f` on [a, b] from an n-point expansion.
///
/// The returned closure owns the coefficient vector and maps its argument
/// into the canonical domain before evaluating the expansion; arguments
/// outside [a, b] extrapolate the polynomial.
pub fn spectral_interpolant<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    n: usize,
) -> Result<impl Fn(f64) -> f64, SpectralError> {
    let grid = Grid::chebyshev_lobatto(a, b, n)?;
    let values = sample(&f, &grid);
    let coeffs = forward_transform(&values)?;
    Ok(move |x: f64| {
        let u = (2.0 * x - (a + b)) / (b - a);
        evaluate(&coeffs, u)
    })
}

/// 2D mixed-basis interpolant: cosine harmonics along an angular axis,
/// Chebyshev polynomials along an interval axis.
///
/// Built from values on the tensor grid `theta_i = i*pi/n_theta` (rows)
/// by `x_j` Chebyshev-Gauss-Lobatto on [a, b] (columns). The angular
/// decomposition goes through the rcond-checked cosine-matrix inversion;
/// each harmonic's profile is then transformed into Chebyshev coefficients.
#[derive(Debug, Clone)]
pub struct MixedInterpolant {
    /// coeffs[[k, l]] multiplies cos(k*theta) * T_l(u(x))
    coeffs: Array2<f64>,
    x_a: f64,
    x_b: f64,
}

impl MixedInterpolant {
    /// Build from sampled values.
    ///
    /// `values` must have `x_grid.len()` columns and one row per angular
    /// node; the row count fixes the harmonic order.
    pub fn new(
        values: &Array2<f64>,
        x_grid: &Grid<f64>,
        config: &TrigDiffConfig,
    ) -> Result<Self, SpectralError> {
        let n_x = x_grid.len();
        if values.ncols() != n_x {
            return Err(SpectralError::DiffMatrix(DiffMatrixError::DimensionMismatch {
                expected: n_x,
                got: values.ncols(),
            }));
        }

        // Harmonic amplitudes per x column, then a Chebyshev transform of
        // each harmonic's profile across the interval axis.
        let amplitudes = harmonic_amplitudes(values, config)?;
        let n_harm = amplitudes.nrows();
        let mut coeffs = Array2::zeros((n_harm, n_x));
        for k in 0..n_harm {
            let row: Vec<f64> = (0..n_x).map(|l| amplitudes[[k, l]]).collect();
            let c = forward_transform(&row)?;
            for (l, cl) in c.into_iter().enumerate() {
                coeffs[[k, l]] = cl;
            }
        }

        Ok(Self {
            coeffs,
            x_a: x_grid.a,
            x_b: x_grid.b,
        })
    }

    /// Evaluate the reconstruction at (theta, x).
    pub fn evaluate(&self, theta: f64, x: f64) -> f64 {
        let u = (2.0 * x - (self.x_a + self.x_b)) / (self.x_b - self.x_a);
        let basis = chebyshev_basis(u, self.coeffs.ncols());
        let mut acc = 0.0;
        for k in 0..self.coeffs.nrows() {
            let ck = (k as f64 * theta).cos();
            let mut inner = 0.0;
            for (l, t) in basis.iter().enumerate() {
                inner += self.coeffs[[k, l]] * t;
            }
            acc += ck * inner;
        }
        acc
    }

    /// The mixed coefficient matrix (harmonics by Chebyshev degree).
    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coeffs
    }
}

#[cfg(test)]
#[path = "spectral_tests.rs"]
mod tests;
