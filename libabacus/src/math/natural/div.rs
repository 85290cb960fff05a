#![allow(clippy::should_implement_trait)]
use crate::math::{MathError, Natural};
use num_traits::Zero;

impl Natural {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libabacus::math::Natural;
    ///
    /// let (q, r) = Natural::from(1234).div_rem(&Natural::from(7)).unwrap();
    /// assert_eq!(q.to_string(), "176");
    /// assert_eq!(r.to_string(), "2");
    /// ```
    pub fn div_rem(&self, divisor: &Natural) -> Result<(Natural, Natural), MathError> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.long_division(divisor))
    }

    /// The quotient of `self / divisor`, rounded down.
    pub fn div(&self, divisor: &Natural) -> Result<Natural, MathError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// The remainder of `self / divisor`.
    pub fn rem(&self, divisor: &Natural) -> Result<Natural, MathError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// The first digit of the quotient `self / divisor`, along with its decimal position `k`, so
    /// that `d * 10^k * divisor <= self`.
    ///
    /// Returns `(0, 0)` when `self < divisor`.
    pub fn leading_quotient_digit(&self, divisor: &Natural) -> Result<(u8, usize), MathError> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        if self < divisor {
            return Ok((0, 0));
        }
        let mut k = self.degree() - divisor.degree();
        if &divisor.shift_digits(k) > self {
            k -= 1;
        }
        let shifted = divisor.shift_digits(k);
        let d = largest_multiple(self, &shifted);
        Ok((d, k))
    }

    /// Schoolbook long division. The caller guarantees `divisor` is non-zero.
    ///
    /// Digits of `self` are brought down from the most significant end into a running remainder;
    /// at each step the largest digit `d` with `d * divisor <= remainder` is the next quotient
    /// digit.
    pub(crate) fn long_division(&self, divisor: &Natural) -> (Natural, Natural) {
        debug_assert!(!divisor.is_zero());
        if self < divisor {
            return (Natural::zero(), self.clone());
        }

        let mut quotient = vec![0; self.digits.len()];
        let mut rem = Natural::zero();
        for (i, &digit) in self.digits.iter().enumerate().rev() {
            rem = rem.shift_in(digit);
            let d = largest_multiple(&rem, divisor);
            if d != 0 {
                rem = rem.sub_unchecked(&divisor.mul_digit(d));
            }
            quotient[i] = d;
        }

        (Natural::from_digits(quotient), rem)
    }

    /// Returns `self * 10 + digit`.
    fn shift_in(&self, digit: u8) -> Natural {
        if self.is_zero() {
            return Natural::from_digit(digit);
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.push(digit);
        digits.extend_from_slice(&self.digits);
        Natural { digits }
    }
}

/// The largest digit `d` such that `d * divisor <= n`.
fn largest_multiple(n: &Natural, divisor: &Natural) -> u8 {
    (1..10u8)
        .rev()
        .find(|&d| &divisor.mul_digit(d) <= n)
        .unwrap_or(0)
}
