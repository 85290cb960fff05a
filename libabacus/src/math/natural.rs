//! Arbitrary-precision natural numbers.

use crate::math::MathError;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

mod add;
mod compare;
mod div;
mod mul;
mod sub;

/// A natural number (zero included) of unbounded size.
///
/// Digits are stored in base 10 with the least significant digit first, e.g. 123 is stored as
/// `[3, 2, 1]`. The digit vector is never empty and never carries high-order zeros, so zero is
/// exactly `[0]` and structural equality is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Natural {
    digits: Vec<u8>,
}

/// Removes high-order zero digits, leaving at least one digit.
fn truncate_zeros(mut digits: Vec<u8>) -> Vec<u8> {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

impl Natural {
    /// Creates a natural from little-endian digits, restoring the canonical form.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10));
        Self {
            digits: truncate_zeros(digits),
        }
    }

    /// Creates a single-digit natural. `d` must be in 0..=9.
    pub fn from_digit(d: u8) -> Self {
        debug_assert!(d < 10);
        Self { digits: vec![d % 10] }
    }

    /// The digits of the number, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Index of the most significant digit, i.e. the number of digits minus one.
    #[inline]
    pub fn degree(&self) -> usize {
        self.digits.len() - 1
    }

    /// Returns `self + 1`.
    pub fn add_one(&self) -> Natural {
        let mut digits = self.digits.clone();
        for d in digits.iter_mut() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                return Natural { digits };
            }
        }
        digits.push(1);
        Natural { digits }
    }

    /// The greatest common divisor of `self` and `other`, by the Euclidean algorithm.
    ///
    /// `gcd(0, 0)` is 0.
    pub fn gcd(&self, other: &Natural) -> Natural {
        let mut u = self.clone();
        let mut v = other.clone();
        while !v.is_zero() {
            let (_, r) = u.long_division(&v);
            u = v;
            v = r;
        }
        u
    }

    /// The least common multiple of `self` and `other`. If either is zero, so is the result.
    pub fn lcm(&self, other: &Natural) -> Natural {
        if self.is_zero() || other.is_zero() {
            return Natural::zero();
        }
        let gcd = self.gcd(other);
        (self * other).long_division(&gcd).0
    }

    /// Converts the number to a machine-sized count.
    pub fn to_usize(&self) -> Result<usize, MathError> {
        self.digits.iter().rev().try_fold(0usize, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(d as usize))
                .ok_or(MathError::Overflow)
        })
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self { digits: vec![0] }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
}

impl One for Natural {
    fn one() -> Self {
        Self { digits: vec![1] }
    }
}

impl From<u64> for Natural {
    fn from(mut n: u64) -> Self {
        let mut digits = Vec::with_capacity(20);
        loop {
            digits.push((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        Natural { digits }
    }
}

impl FromStr for Natural {
    type Err = MathError;

    /// Parses a string of decimal digits. Leading zeros are accepted and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathError::InvalidLiteral(s.to_owned()));
        }
        Ok(Natural::from_digits(s.bytes().rev().map(|b| b - b'0').collect()))
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad(&s)
    }
}
