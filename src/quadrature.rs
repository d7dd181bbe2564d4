//! Clenshaw-Curtis quadrature weights
//!
//! Integrates a function's Chebyshev expansion term by term. Over a
//! symmetric domain the odd-degree terms vanish by parity, so only the
//! even-indexed coefficients carry weight: for an interval of length L,
//! `w_k = L / (1 - 4k^2)` pairs with coefficient 2k. The formula requires an
//! odd coefficient count; callers holding an even count bump the requested
//! order up by one before sampling.

use thiserror::Error;

/// Errors from quadrature-weight derivation.
#[derive(Debug, Error, PartialEq)]
pub enum QuadratureError {
    #[error("quadrature needs a non-empty coefficient vector")]
    Empty,
    #[error("bad coefficient length {0}: Clenshaw-Curtis weights need an odd count")]
    EvenLength(usize),
}

/// Weights pairing with the even-indexed coefficients of an n-term
/// Chebyshev expansion over an interval of length `length`.
///
/// Produces ceil(n/2) weights `w_k = length / (1 - 4k^2)`.
///
/// # Errors
/// `Empty` for n = 0, `EvenLength` for even n.
pub fn quadrature_weights(length: f64, n: usize) -> Result<Vec<f64>, QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::Empty);
    }
    if n % 2 == 0 {
        return Err(QuadratureError::EvenLength(n));
    }
    let m = n.div_ceil(2);
    Ok((0..m)
        .map(|k| length / (1.0 - (4 * k * k) as f64))
        .collect())
}

/// Definite-integral estimate from Chebyshev coefficients over an interval
/// of length `length`: the dot product of the weights with the even-indexed
/// coefficients. Odd-indexed coefficients integrate to exactly zero and are
/// excluded, not approximated away.
pub fn clenshaw_curtis(coeffs: &[f64], length: f64) -> Result<f64, QuadratureError> {
    let w = quadrature_weights(length, coeffs.len())?;
    Ok(w.iter()
        .zip(coeffs.iter().step_by(2))
        .map(|(&wk, &ck)| wk * ck)
        .sum())
}

#[cfg(test)]
#[path = "quadrature_tests.rs"]
mod tests;
