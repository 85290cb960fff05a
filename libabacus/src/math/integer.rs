//! Arbitrary-precision signed integers.

use crate::math::{MathError, Natural};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;

/// The sign of an [`Integer`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// A signed integer: a sign flag over a [`Natural`] magnitude.
///
/// Zero is always stored as non-negative, so derived equality is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Integer {
    negative: bool,
    magnitude: Natural,
}

impl Integer {
    /// Creates an integer from a sign flag and a magnitude. A zero magnitude is always positive.
    pub fn new(negative: bool, magnitude: Natural) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    #[inline]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn sign(&self) -> Sign {
        if self.negative {
            Sign::Negative
        } else if self.magnitude.is_zero() {
            Sign::Zero
        } else {
            Sign::Positive
        }
    }

    /// The absolute value of `self`.
    pub fn abs(&self) -> Integer {
        Integer::from(self.magnitude.clone())
    }

    /// Views a non-negative integer as a natural number.
    pub fn to_natural(&self) -> Result<Natural, MathError> {
        if self.negative {
            Err(MathError::NegativeToNatural)
        } else {
            Ok(self.magnitude.clone())
        }
    }

    /// Divides `self` by `rhs`, returning `(quotient, remainder)`.
    ///
    /// The quotient is truncated toward zero and the remainder takes the sign of the dividend, so
    /// `self == rhs * quotient + remainder` and `|remainder| < |rhs|` for any combination of signs.
    ///
    /// ```text
    ///  7 /  2 =  3,  7 %  2 =  1
    /// -7 /  2 = -3, -7 %  2 = -1
    ///  7 / -2 = -3,  7 % -2 =  1
    /// -7 / -2 =  3, -7 % -2 = -1
    /// ```
    pub fn div_rem(&self, rhs: &Integer) -> Result<(Integer, Integer), MathError> {
        let (q, r) = self.magnitude.div_rem(&rhs.magnitude)?;
        Ok((
            Integer::new(self.negative ^ rhs.negative, q),
            Integer::new(self.negative, r),
        ))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, rhs: &Integer) -> Result<Integer, MathError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn rem(&self, rhs: &Integer) -> Result<Integer, MathError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Integer::new(n < 0, Natural::from(n.unsigned_abs()))
    }
}

impl FromStr for Integer {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let magnitude = digits
            .parse::<Natural>()
            .map_err(|_| MathError::InvalidLiteral(s.to_owned()))?;
        Ok(Integer::new(negative, magnitude))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Integer::from(Natural::zero())
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Integer::from(Natural::one())
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Integer) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> ops::Neg for &'a Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer::new(!self.negative, self.magnitude.clone())
    }
}

forward_neg!(Integer);

impl<'a, 'b> ops::Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn add(self, rhs: &'b Integer) -> Integer {
        if self.negative == rhs.negative {
            return Integer::new(self.negative, &self.magnitude + &rhs.magnitude);
        }
        // opposite signs: the result follows the operand with the larger magnitude
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => Integer::new(
                self.negative,
                self.magnitude.sub_unchecked(&rhs.magnitude),
            ),
            Ordering::Less => Integer::new(
                rhs.negative,
                rhs.magnitude.sub_unchecked(&self.magnitude),
            ),
        }
    }
}

impl<'a, 'b> ops::Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn sub(self, rhs: &'b Integer) -> Integer {
        self + &(-rhs)
    }
}

impl<'a, 'b> ops::Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn mul(self, rhs: &'b Integer) -> Integer {
        Integer::new(self.negative ^ rhs.negative, &self.magnitude * &rhs.magnitude)
    }
}

forward_binop!(impl Add, add for Integer);
forward_binop!(impl Sub, sub for Integer);
forward_binop!(impl Mul, mul for Integer);

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}
