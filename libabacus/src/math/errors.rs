//! Errors produced by the numeric kernel.

use crate::diagnostics::DiagnosticRecord;
use thiserror::Error;

/// A failure of a kernel operation.
///
/// Kernel errors are plain values: arithmetic is not a transient-failure domain, so there is
/// nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("denominator of a rational number cannot be zero")]
    ZeroDenominator,

    #[error("division by zero")]
    DivisionByZero,

    #[error("a negative number is not a natural number")]
    NegativeToNatural,

    #[error("cannot multiply a polynomial by x^{0}: the power must be non-negative")]
    InvalidShift(i64),

    #[error("cannot subtract a larger natural number from a smaller one")]
    NaturalUnderflow,

    #[error("exponent must be a non-negative integer constant")]
    InvalidExponent,

    #[error("number is too large to be used as a count")]
    Overflow,

    #[error(r#""{0}" is not a decimal number"#)]
    InvalidLiteral(String),

    #[error("internal error: {0} did not converge")]
    NonConvergent(&'static str),
}

impl MathError {
    /// The stable diagnostic code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            MathError::ZeroDenominator => ZeroDenominator::CODE,
            MathError::DivisionByZero => DivisionByZero::CODE,
            MathError::NegativeToNatural => NegativeToNatural::CODE,
            MathError::InvalidShift(_) => InvalidShift::CODE,
            MathError::NaturalUnderflow => NaturalUnderflow::CODE,
            MathError::InvalidExponent => InvalidExponent::CODE,
            MathError::Overflow => Overflow::CODE,
            MathError::InvalidLiteral(_) => InvalidLiteral::CODE,
            MathError::NonConvergent(_) => NonConvergent::CODE,
        }
    }
}

define_errors! {
    MathErrors;

    ///A rational number was constructed with a zero denominator, as in
    ///
    ///```text
    ///1/0
    ///```
    ///
    ///Fractions are only defined for non-zero denominators.
    M0001: ZeroDenominator

    ///A division or remainder operation was asked to divide by zero. This applies to natural
    ///numbers, integers, rationals and polynomials alike; for polynomials the divisor is zero when
    ///every coefficient is zero.
    ///
    ///```text
    ///7 / (3 - 3)
    ///    ^^^^^^^- evaluates to zero
    ///```
    M0002: DivisionByZero

    ///A negative value was used where a natural number is required. In the natural-number
    ///domain this fires on negative literals and on unary minus applied to a non-zero value.
    M0003: NegativeToNatural

    ///A polynomial was multiplied by x^k with a negative k. Only non-negative powers of x are
    ///polynomials.
    M0004: InvalidShift

    ///A larger natural number was subtracted from a smaller one, as in
    ///
    ///```text
    ///3 - 5
    ///```
    ///
    ///The result is negative, which has no representation among the natural numbers. Evaluate the
    ///expression in the integer domain instead.
    M0005: NaturalUnderflow

    ///The exponent of a polynomial power must evaluate to a constant, non-negative integer.
    ///
    ///```text
    ///x^x     - exponent is not a constant
    ///x^(1/2) - exponent is not an integer
    ///```
    M0006: InvalidExponent

    ///A number was used as a count (a decimal shift in `TM`, or a polynomial exponent) but is too
    ///large to be represented as one, or the result it asks for would be longer than a million
    ///(2^20) digits or coefficients.
    ///
    ///```text
    ///TM(1, 18446744073709551615)
    ///x^1000000000
    ///```
    M0007: Overflow

    ///A literal could not be read as a decimal number. Only the digits 0-9 are accepted.
    M0008: InvalidLiteral

    ///A polynomial long division or GCD loop exceeded its iteration bound. The bound is a small
    ///multiple of the degrees involved, so this indicates an internal bug rather than a problem
    ///with the input. We would appreciate a bug report.
    M0009: NonConvergent
}
