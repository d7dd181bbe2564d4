//! # chebspec-rust: pseudospectral transform engine
//!
//! Derivatives, integrals and interpolants of smooth functions through
//! pseudospectral (Chebyshev and trigonometric) expansions, with the
//! exponential convergence that finite differences cannot reach.
//!
//! The core pieces are Chebyshev-Gauss-Lobatto grid generation, numerically
//! stable differentiation matrices for the polynomial and trigonometric
//! bases, the fast forward transform to Chebyshev coefficients with direct
//! inverse evaluation, and Clenshaw-Curtis quadrature weights. A thin
//! composition layer samples caller closures and packages derivative
//! vectors, scalar integrals, continuous interpolants and a 2D mixed-basis
//! reconstruction.
//!
//! Every operation is a pure function of its inputs: no shared state, no
//! I/O, no caching. Concurrent callers never interfere.

pub mod diffmat;
pub mod grid;
pub mod numeric;
pub mod quadrature;
pub mod spectral; // Composition layer over the transform core
pub mod transform;
pub mod trigdiff; // Periodic (trigonometric) differentiation operators

// Re-export commonly used types and operations
pub use diffmat::{diff_matrices, DiffMatrices, DiffMatrixError};
pub use grid::{Grid, GridError};
pub use numeric::CustomNumeric;
pub use quadrature::{clenshaw_curtis, quadrature_weights, QuadratureError};
pub use spectral::{
    sample, spectral_derivative, spectral_integrate, spectral_interpolant, MixedInterpolant,
    SpectralError,
};
pub use transform::{chebyshev_basis, evaluate, forward_transform, TransformError};
pub use trigdiff::{
    harmonic_amplitudes, trig_diff_matrices, trig_diff_matrices_with, TrigDiffConfig,
    TrigDiffError,
};

// Re-export the extended-precision backend for convenience
pub use twofloat::TwoFloat;
