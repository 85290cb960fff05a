//! Exact fractions over arbitrary-precision integers.

use crate::math::{Integer, MathError, Natural};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops;

/// A fraction `numerator / denominator` with a non-zero natural denominator.
///
/// Arithmetic always yields reduced fractions (`gcd(|numerator|, denominator) = 1`). A fraction
/// built directly with [`Rational::new`] is kept as written until it is [reduced].
///
/// Equality and ordering are numeric, so `2/4 == 1/2`.
///
/// [reduced]: Rational::reduce
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

impl Rational {
    /// Creates a fraction, failing with [`MathError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Natural) -> Result<Self, MathError> {
        if denominator.is_zero() {
            return Err(MathError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a reduced fraction from a numerator and a denominator known to be non-zero.
    pub(crate) fn reduced_from_parts(numerator: Integer, denominator: Natural) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
        .reduce()
    }

    #[inline]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// Divides numerator and denominator by their greatest common divisor.
    ///
    /// Reducing is idempotent; a zero numerator reduces to `0/1`.
    pub fn reduce(&self) -> Rational {
        let gcd = self.numerator.magnitude().gcd(&self.denominator);
        if gcd.is_one() {
            return self.clone();
        }
        // gcd is non-zero since the denominator is
        let (magnitude, _) = self.numerator.magnitude().long_division(&gcd);
        let (denominator, _) = self.denominator.long_division(&gcd);
        Rational {
            numerator: Integer::new(self.numerator.is_negative(), magnitude),
            denominator,
        }
    }

    /// Whether the fraction represents an integer, i.e. its reduced denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.reduce().denominator.is_one()
    }

    /// The integer value of the fraction, if it has one.
    pub fn to_integer(&self) -> Option<Integer> {
        let reduced = self.reduce();
        if reduced.denominator.is_one() {
            Some(reduced.numerator)
        } else {
            None
        }
    }

    /// The reciprocal `denominator / numerator`, carrying the sign into the new numerator.
    pub fn recip(&self) -> Result<Rational, MathError> {
        if self.numerator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Rational::reduced_from_parts(
            Integer::new(self.numerator.is_negative(), self.denominator.clone()),
            self.numerator.magnitude().clone(),
        ))
    }

    /// Returns `self / rhs`, failing with [`MathError::DivisionByZero`] if `rhs` is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, rhs: &Rational) -> Result<Rational, MathError> {
        Ok(self * &rhs.recip()?)
    }

    /// Multiplies by an integer.
    pub fn mul_integer(&self, rhs: &Integer) -> Rational {
        Rational::reduced_from_parts(&self.numerator * rhs, self.denominator.clone())
    }

    /// The absolute value of `self`.
    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(numerator: Integer) -> Self {
        Rational {
            numerator,
            denominator: Natural::one(),
        }
    }
}

impl From<Natural> for Rational {
    fn from(n: Natural) -> Self {
        Rational::from(Integer::from(n))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from(Integer::from(n))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from(Integer::one())
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Ord for Rational {
    /// Compares `a/b` with `c/d` as `a*d` with `c*b`; denominators are positive.
    fn cmp(&self, other: &Rational) -> Ordering {
        let lhs = &self.numerator * &Integer::from(other.denominator.clone());
        let rhs = &other.numerator * &Integer::from(self.denominator.clone());
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> ops::Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

forward_neg!(Rational);

/// Brings two fractions to the common denominator `lcm(d1, d2)`, returning the scaled numerators
/// and the common denominator.
fn to_common_denominator(lhs: &Rational, rhs: &Rational) -> (Integer, Integer, Natural) {
    let lcm = lhs.denominator.lcm(&rhs.denominator);
    let scale_lhs = Integer::from(lcm.long_division(&lhs.denominator).0);
    let scale_rhs = Integer::from(lcm.long_division(&rhs.denominator).0);
    (
        &lhs.numerator * &scale_lhs,
        &rhs.numerator * &scale_rhs,
        lcm,
    )
}

impl<'a, 'b> ops::Add<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'b Rational) -> Rational {
        let (a, b, denominator) = to_common_denominator(self, rhs);
        Rational::reduced_from_parts(a + b, denominator)
    }
}

impl<'a, 'b> ops::Sub<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'b Rational) -> Rational {
        let (a, b, denominator) = to_common_denominator(self, rhs);
        Rational::reduced_from_parts(a - b, denominator)
    }
}

impl<'a, 'b> ops::Mul<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'b Rational) -> Rational {
        Rational::reduced_from_parts(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

forward_binop!(impl Add, add for Rational);
forward_binop!(impl Sub, sub for Rational);
forward_binop!(impl Mul, mul for Rational);

impl fmt::Display for Rational {
    /// Prints `numerator/denominator`, or just the numerator when the denominator is 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator.is_zero() {
            return write!(f, "0");
        }
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: u64) -> Rational {
        Rational::new(Integer::from(num), Natural::from(den)).unwrap()
    }

    macro_rules! rational_test_binop {
        ($($name:ident: $lhs:expr, $op:tt, $rhs:expr, $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                let (ln, ld) = $lhs;
                let (rn, rd) = $rhs;
                assert_eq!((q(ln, ld) $op q(rn, rd)).to_string(), $expected);
            }
        )*
        }
    }

    mod arith {
        use super::*;

        rational_test_binop! {
            add_halves: (1, 2), +, (1, 3), "5/6"
            add_to_integer: (1, 2), +, (1, 2), "1"
            add_negative: (-3, 4), +, (1, 4), "-1/2"
            add_unreduced: (2, 4), +, (3, 9), "5/6"
            sub_to_zero: (2, 3), -, (4, 6), "0"
            sub_negative: (1, 6), -, (1, 2), "-1/3"
            mul_reduce: (2, 3), *, (3, 4), "1/2"
            mul_signs: (-2, 3), *, (-3, 5), "2/5"
            mul_zero: (0, 7), *, (-3, 5), "0"
        }
    }

    #[test]
    fn zero_denominator() {
        assert!(matches!(
            Rational::new(Integer::from(1), Natural::zero()),
            Err(MathError::ZeroDenominator)
        ));
    }

    #[test]
    fn reduce() {
        let r = q(6, 9).reduce();
        assert_eq!(r.numerator(), &Integer::from(2));
        assert_eq!(r.denominator(), &Natural::from(3));
        assert_eq!(r.reduce().to_string(), "2/3");
        assert_eq!(q(-6, 9).reduce().to_string(), "-2/3");
        assert_eq!(q(0, 9).reduce().denominator(), &Natural::one());
    }

    #[test]
    fn display_keeps_literal_form() {
        assert_eq!(q(6, 9).to_string(), "6/9");
        assert_eq!(q(5, 1).to_string(), "5");
        assert_eq!(q(-5, 1).to_string(), "-5");
        assert_eq!(q(0, 3).to_string(), "0");
    }

    #[test]
    fn integrality() {
        assert!(q(6, 3).is_integer());
        assert!(!q(6, 4).is_integer());
        assert_eq!(q(-6, 3).to_integer(), Some(Integer::from(-2)));
        assert_eq!(q(1, 2).to_integer(), None);
    }

    #[test]
    fn division() {
        assert_eq!(q(1, 2).div(&q(-3, 4)).unwrap().to_string(), "-2/3");
        assert_eq!(q(-1, 2).div(&q(-1, 4)).unwrap().to_string(), "2");
        assert_eq!(q(1, 2).div(&q(0, 4)), Err(MathError::DivisionByZero));
        assert_eq!(q(-3, 7).recip().unwrap().to_string(), "-7/3");
    }

    #[test]
    fn numeric_equality_and_order() {
        assert_eq!(q(2, 4), q(1, 2));
        assert!(q(1, 3) < q(1, 2));
        assert!(q(-1, 2) < q(-1, 3));
        assert_eq!(q(7, 3).abs(), q(-7, 3).abs());
    }

    #[test]
    fn field_laws() {
        let x = q(-14, 15);
        assert!((&x + &(-&x)).is_zero());
        assert!((&x * &x.recip().unwrap()).is_one());
    }
}
