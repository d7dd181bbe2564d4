//! Working-precision abstraction for the spectral engine
//!
//! Grid generation, differentiation matrices and basis evaluation are generic
//! over the working floating-point type. Two backends are provided: plain f64
//! and the double-double `twofloat::TwoFloat` for callers that need extra
//! headroom against cancellation.

use std::fmt::Debug;
use twofloat::TwoFloat;

/// Numeric operations required by the spectral core.
///
/// The trait is deliberately small: only the operations the grid builder,
/// the differentiation-matrix builder and the Chebyshev recurrence actually
/// perform. The precision choice is threaded through calls explicitly; there
/// is no ambient precision context.
pub trait CustomNumeric:
    Copy
    + Debug
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
{
    /// Convert from f64 to Self.
    fn from_f64(x: f64) -> Self;

    /// Convert to f64, possibly losing precision.
    fn to_f64(self) -> f64;

    /// Machine epsilon of the backend.
    fn epsilon() -> Self;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// PI constant of the backend.
    fn pi() -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Cosine function.
    fn cos(self) -> Self;

    /// Sine function.
    fn sin(self) -> Self;

    /// Exponential function.
    fn exp(self) -> Self;

    /// Check that the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

impl CustomNumeric for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn epsilon() -> Self {
        f64::EPSILON
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn pi() -> Self {
        std::f64::consts::PI
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn sin(self) -> Self {
        self.sin()
    }

    fn exp(self) -> Self {
        self.exp()
    }

    fn is_finite(self) -> bool {
        self.is_finite()
    }
}

impl CustomNumeric for TwoFloat {
    fn from_f64(x: f64) -> Self {
        TwoFloat::from(x)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn epsilon() -> Self {
        // 2^-104, the relative spacing of double-double numbers
        TwoFloat::from(4.930380657631324e-32)
    }

    fn zero() -> Self {
        TwoFloat::from(0.0)
    }

    fn one() -> Self {
        TwoFloat::from(1.0)
    }

    fn pi() -> Self {
        // TwoFloat's transcendental functions carry f64-level accuracy only,
        // so an f64 PI seed does not limit the achievable precision.
        TwoFloat::from(std::f64::consts::PI)
    }

    fn abs(self) -> Self {
        TwoFloat::abs(&self)
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn sin(self) -> Self {
        self.sin()
    }

    fn exp(self) -> Self {
        self.exp()
    }

    fn is_finite(self) -> bool {
        self.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_custom_numeric() {
        let x = 1.5_f64;
        assert_eq!(<f64 as CustomNumeric>::abs(-x), 1.5);
        assert_eq!(x.to_f64(), 1.5);
        assert_eq!(<f64 as CustomNumeric>::epsilon(), f64::EPSILON);
        assert!(<f64 as CustomNumeric>::cos(x).is_finite());
        assert_eq!(
            <f64 as CustomNumeric>::zero() + <f64 as CustomNumeric>::one(),
            1.0
        );
    }

    #[test]
    fn test_twofloat_custom_numeric() {
        let x = <TwoFloat as CustomNumeric>::from_f64(1.5);
        assert!((x.to_f64() - 1.5).abs() < 1e-15);
        assert!(<TwoFloat as CustomNumeric>::is_finite(x));

        let eps = <TwoFloat as CustomNumeric>::epsilon();
        assert!(eps > <TwoFloat as CustomNumeric>::zero());
        assert!(eps < <TwoFloat as CustomNumeric>::from_f64(f64::EPSILON));
    }

    #[test]
    fn test_pi_round_trip() {
        let pi_f64 = <f64 as CustomNumeric>::pi();
        let pi_tf = <TwoFloat as CustomNumeric>::pi();
        assert!((pi_tf.to_f64() - pi_f64).abs() < f64::EPSILON);
    }
}
