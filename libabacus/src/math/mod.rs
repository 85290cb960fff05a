//! The numeric kernel: naturals, integers, rationals and polynomials over the rationals.
//!
//! Each layer is built only from the one below it. Values are immutable; operations borrow their
//! operands and return fresh values, so nothing in this module is shared or mutated across calls.

#[macro_use]
mod macros;

mod errors;
pub use errors::{MathError, MathErrors};

/// The most digits of a natural, or coefficients of a polynomial, that an operation taking a
/// count (a decimal shift, a power of `x`, an exponent) may produce. Longer results fail with
/// [`MathError::Overflow`] before anything is allocated.
pub const MAX_LENGTH: usize = 1 << 20;

mod natural;
pub use natural::Natural;

mod integer;
pub use integer::{Integer, Sign};

mod rational;
pub use rational::Rational;

mod poly;
pub use poly::Poly;
