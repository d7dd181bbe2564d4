//! Differentiation matrices for the polynomial (non-periodic) basis
//!
//! Builds collocation differentiation operators for an arbitrary node set
//! from barycentric weights. Off-diagonal entries are weight ratios divided
//! by node differences; every diagonal entry is the negated sum of the
//! off-diagonal entries in its row. The closed-form diagonal expression
//! suffers catastrophic cancellation for nodes clustered near the boundary
//! and breaks the zero-row-sum invariant once n grows past roughly 30, so it
//! is never used here.

use crate::grid::Grid;
use crate::numeric::CustomNumeric;
use ndarray::Array2;
use thiserror::Error;

/// Errors from differentiation-matrix construction and application.
#[derive(Debug, Error, PartialEq)]
pub enum DiffMatrixError {
    #[error("differentiation needs at least 2 nodes, got {0}")]
    TooFewPoints(usize),
    #[error("duplicate nodes at indices {0} and {1}")]
    DuplicateNodes(usize, usize),
    #[error("dimension mismatch: matrix is {expected}x{expected}, values have length {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("unsupported derivative order {0}, only 0, 1, 2 are built")]
    UnsupportedOrder(usize),
}

/// Differentiation matrices of orders 0, 1 and 2 on a fixed node set.
///
/// Matrix k maps a vector of function values at the nodes to the k-th
/// derivative at the same nodes. Order 0 is the identity. The matrices are
/// exact (up to rounding) on polynomials of degree below the node count.
#[derive(Debug, Clone)]
pub struct DiffMatrices<T> {
    /// Order-0 operator (identity)
    pub m0: Array2<T>,
    /// First-derivative operator
    pub m1: Array2<T>,
    /// Second-derivative operator
    pub m2: Array2<T>,
}

impl<T: CustomNumeric> DiffMatrices<T> {
    /// Build the matrix set for a grid.
    pub fn build(grid: &Grid<T>) -> Result<Self, DiffMatrixError> {
        diff_matrices(&grid.x)
    }

    /// Node count (the matrices are n x n).
    pub fn len(&self) -> usize {
        self.m1.nrows()
    }

    /// True for an empty node set (never produced by `build`).
    pub fn is_empty(&self) -> bool {
        self.m1.nrows() == 0
    }

    /// Apply the order-k operator to a vector of nodal values.
    ///
    /// # Errors
    /// `DimensionMismatch` when the value vector length differs from the
    /// node count, `UnsupportedOrder` for k > 2.
    pub fn apply(&self, order: usize, values: &[T]) -> Result<Vec<T>, DiffMatrixError> {
        let n = self.len();
        if values.len() != n {
            return Err(DiffMatrixError::DimensionMismatch {
                expected: n,
                got: values.len(),
            });
        }
        let m = match order {
            0 => &self.m0,
            1 => &self.m1,
            2 => &self.m2,
            k => return Err(DiffMatrixError::UnsupportedOrder(k)),
        };
        let mut out = vec![T::zero(); n];
        for i in 0..n {
            let mut acc = T::zero();
            for j in 0..n {
                acc = acc + m[[i, j]] * values[j];
            }
            out[i] = acc;
        }
        Ok(out)
    }
}

/// Build order-0/1/2 differentiation matrices for an arbitrary node set.
///
/// Accepts any pairwise-distinct placement, not only the canonical
/// Chebyshev-Gauss-Lobatto grid, though accuracy degrades away from
/// cosine-spaced nodes. Matrices built from physical-domain nodes are
/// physical-domain operators; no separate interval rescaling is applied or
/// expected by the callers in this crate.
pub fn diff_matrices<T: CustomNumeric>(nodes: &[T]) -> Result<DiffMatrices<T>, DiffMatrixError> {
    let n = nodes.len();
    if n < 2 {
        return Err(DiffMatrixError::TooFewPoints(n));
    }

    // Barycentric denominators c_i = prod_{j != i} (x_i - x_j). A vanishing
    // factor means duplicate nodes, which is fatal for any construction.
    let mut c = vec![T::one(); n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = nodes[i] - nodes[j];
            if d == T::zero() {
                return Err(DiffMatrixError::DuplicateNodes(j.min(i), j.max(i)));
            }
            c[i] = c[i] * d;
        }
    }

    let m0 = Array2::from_shape_fn((n, n), |(i, j)| if i == j { T::one() } else { T::zero() });

    // First derivative: off-diagonals from weight ratios, diagonal from the
    // negative-sum trick.
    let mut m1 = Array2::from_elem((n, n), T::zero());
    for i in 0..n {
        let mut row_sum = T::zero();
        for j in 0..n {
            if i == j {
                continue;
            }
            let entry = c[i] / c[j] / (nodes[i] - nodes[j]);
            m1[[i, j]] = entry;
            row_sum = row_sum + entry;
        }
        m1[[i, i]] = -row_sum;
    }

    // Second derivative by the analogous one-step recursion on the order-1
    // matrix. Squaring m1 instead would amplify rounding by the condition
    // number of m1.
    let two = T::from_f64(2.0);
    let mut m2 = Array2::from_elem((n, n), T::zero());
    for i in 0..n {
        let mut row_sum = T::zero();
        for j in 0..n {
            if i == j {
                continue;
            }
            let entry = two * (c[i] / c[j] * m1[[i, i]] - m1[[i, j]]) / (nodes[i] - nodes[j]);
            m2[[i, j]] = entry;
            row_sum = row_sum + entry;
        }
        m2[[i, i]] = -row_sum;
    }

    Ok(DiffMatrices { m0, m1, m2 })
}

#[cfg(test)]
#[path = "diffmat_tests.rs"]
mod tests;
