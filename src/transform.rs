//! Chebyshev coefficient transform
//!
//! Forward: nodal values sampled on the canonical ascending n-point
//! Chebyshev-Gauss-Lobatto grid (`-cos(j*pi/(n-1))`) to the coefficients of
//! the interpolating expansion `sum_k c_k T_k(x)`. The transform is a type-1
//! discrete cosine transform executed as a complex FFT of length 2(n-1) over
//! the even extension of the data, which keeps the cost at O(n log n); the
//! raw DCT output is scaled by 2/(n-1) and the first and last coefficients
//! are halved to undo the double counting of the two boundary collocation
//! points.
//!
//! Inverse: direct evaluation of the expansion at a point via the three-term
//! Chebyshev recurrence. The domain mapping between [-1, 1] and a physical
//! interval is the caller's concern on both sides.

use crate::numeric::CustomNumeric;
use num_complex::Complex64;
use num_traits::Zero;
use rustfft::FftPlanner;
use thiserror::Error;

/// Errors from the forward transform.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("transform needs at least 2 sampled values, got {0}")]
    TooFewValues(usize),
}

/// Forward transform: nodal values to Chebyshev coefficients.
///
/// `values[j]` is the sample at the canonical ascending Lobatto node
/// `-cos(j*pi/(n-1))`. The result is the plain-sum coefficient vector: the
/// interpolant is `sum_{k=0}^{n-1} c_k T_k(x)` with no implicit end-point
/// weighting, and it reproduces `values` exactly at the nodes.
pub fn forward_transform(values: &[f64]) -> Result<Vec<f64>, TransformError> {
    let n = values.len();
    if n < 2 {
        return Err(TransformError::TooFewValues(n));
    }
    let m = n - 1;

    // Even extension of the reversed samples: the DCT convention indexes
    // nodes by cos(j*pi/m) descending, so the ascending input is flipped
    // before extension.
    let len = 2 * m;
    let mut buf = vec![Complex64::zero(); len];
    for j in 0..n {
        buf[j] = Complex64::new(values[m - j], 0.0);
    }
    for j in 1..m {
        buf[len - j] = Complex64::new(values[m - j], 0.0);
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(len);
    fft.process(&mut buf);

    // Re(F_k) = 2 * sum''_j values_rev[j] cos(pi j k / m), the half-weighted
    // DCT-I sum; discrete orthogonality of T_k on the Lobatto nodes gives
    // the coefficients after scaling and end-point halving.
    let scale = 1.0 / m as f64;
    let mut coeffs: Vec<f64> = (0..n).map(|k| buf[k].re * scale).collect();
    coeffs[0] *= 0.5;
    coeffs[m] *= 0.5;
    Ok(coeffs)
}

/// Chebyshev basis values `[T_0(x), ..., T_{n-1}(x)]` by the three-term
/// recurrence `T_{k+1} = 2x T_k - T_{k-1}`.
///
/// The recurrence is stable for |x| <= 1 and degrees well beyond what a
/// direct power-form evaluation survives near the endpoints.
pub fn chebyshev_basis<T: CustomNumeric>(x: T, n: usize) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    let mut t = Vec::with_capacity(n);
    t.push(T::one());
    if n > 1 {
        t.push(x);
    }
    let two = T::from_f64(2.0);
    for k in 1..n.saturating_sub(1) {
        let next = two * x * t[k] - t[k - 1];
        t.push(next);
    }
    t
}

/// Evaluate a Chebyshev expansion at a point assumed in [-1, 1].
///
/// Computes the dot product of the coefficients with the basis values. For
/// |x| > 1 the result is the polynomial extrapolation; it is well defined
/// but carries no accuracy guarantee.
pub fn evaluate<T: CustomNumeric>(coeffs: &[T], x: T) -> T {
    let basis = chebyshev_basis(x, coeffs.len());
    let mut acc = T::zero();
    for (c, t) in coeffs.iter().zip(basis.iter()) {
        acc = acc + *c * *t;
    }
    acc
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
