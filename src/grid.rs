//! Chebyshev-Gauss-Lobatto grids
//!
//! A grid maps an abstract interval [a, b] onto the cosine-spaced
//! Gauss-Lobatto point set. Nodes cluster quadratically near both endpoints,
//! which is what suppresses Runge-phenomenon error growth in polynomial
//! interpolation and differentiation.

use crate::numeric::CustomNumeric;
use thiserror::Error;

/// Errors from grid construction.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("interval endpoints must differ")]
    DegenerateInterval,
}

/// Point set for pseudospectral collocation on an interval.
///
/// The nodes are ordered so that `x[0] == a` and `x[n-1] == b` regardless of
/// which endpoint is larger; the sequence is strictly monotonic in between.
/// Immutable once produced.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    /// Collocation points
    pub x: Vec<T>,
    /// First endpoint of the interval
    pub a: T,
    /// Second endpoint of the interval
    pub b: T,
}

impl<T: CustomNumeric> Grid<T> {
    /// Build the n-point Chebyshev-Gauss-Lobatto grid on [a, b].
    ///
    /// Points follow `x_j = ((a-b)*cos(j*pi/(n-1)) + (a+b)) / 2` for
    /// j = 0..n-1, an affine rescaling of the canonical Lobatto distribution
    /// on [-1, 1].
    ///
    /// # Errors
    /// `TooFewPoints` for n < 2, `DegenerateInterval` for a == b.
    pub fn chebyshev_lobatto(a: T, b: T, n: usize) -> Result<Self, GridError> {
        if n < 2 {
            return Err(GridError::TooFewPoints(n));
        }
        if a == b {
            return Err(GridError::DegenerateInterval);
        }

        let half = T::from_f64(0.5);
        let diff = a - b;
        let sum = a + b;
        let nm1 = T::from_f64((n - 1) as f64);

        let mut x: Vec<T> = (0..n)
            .map(|j| {
                let angle = T::pi() * T::from_f64(j as f64) / nm1;
                (diff * angle.cos() + sum) * half
            })
            .collect();

        // cos(0) and cos(pi) are not exact in floating point; the endpoints
        // must equal a and b at the bit level.
        x[0] = a;
        x[n - 1] = b;

        Ok(Self { x, a, b })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Map a physical coordinate into the canonical [-1, 1] domain.
    ///
    /// Grid point `x[j]` maps onto `-cos(j*pi/(n-1))`, the canonical
    /// ascending Lobatto node, which is the sampling convention the forward
    /// Chebyshev transform expects.
    pub fn canonical_coordinate(&self, x: T) -> T {
        (T::from_f64(2.0) * x - (self.a + self.b)) / (self.b - self.a)
    }

    /// Check monotonicity, endpoint placement and finiteness.
    pub fn validate(&self) -> bool {
        let n = self.x.len();
        if n < 2 {
            return false;
        }
        if self.x[0] != self.a || self.x[n - 1] != self.b {
            return false;
        }
        for &xi in self.x.iter() {
            if !xi.is_finite() {
                return false;
            }
        }
        let ascending = self.a < self.b;
        for i in 1..n {
            let ordered = if ascending {
                self.x[i] > self.x[i - 1]
            } else {
                self.x[i] < self.x[i - 1]
            };
            if !ordered {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
