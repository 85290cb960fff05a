#![allow(clippy::suspicious_arithmetic_impl)]
use crate::math::{MathError, Natural, MAX_LENGTH};
use num_traits::Zero;
use std::ops;

impl Natural {
    /// Multiplies by a single digit `d` in 0..=9.
    pub fn mul_digit(&self, d: u8) -> Natural {
        debug_assert!(d < 10);
        if d == 0 || self.is_zero() {
            return Natural::zero();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        let mut carry = 0;
        for &digit in self.digits.iter() {
            let prod = digit * d + carry;
            digits.push(prod % 10);
            carry = prod / 10;
        }
        if carry != 0 {
            digits.push(carry);
        }
        Natural { digits }
    }

    /// Multiplies by 10^k, failing with [`MathError::Overflow`] if the result would have more
    /// than [`MAX_LENGTH`] digits.
    pub fn mul_pow10(&self, k: usize) -> Result<Natural, MathError> {
        if self.is_zero() || k == 0 {
            return Ok(self.clone());
        }
        match self.digits.len().checked_add(k) {
            Some(len) if len <= MAX_LENGTH => Ok(self.shift_digits(k)),
            _ => Err(MathError::Overflow),
        }
    }

    /// Prepends `k` zero digits to a non-zero natural.
    pub(crate) fn shift_digits(&self, k: usize) -> Natural {
        let mut digits = vec![0; k];
        digits.extend_from_slice(&self.digits);
        Natural { digits }
    }
}

impl<'a, 'b> ops::Mul<&'b Natural> for &'a Natural {
    type Output = Natural;

    fn mul(self, rhs: &'b Natural) -> Natural {
        if self.is_zero() || rhs.is_zero() {
            return Natural::zero();
        }

        // accumulate the digit convolution first, then normalize carries in one pass
        let mut acc = vec![0u32; self.digits.len() + rhs.digits.len()];
        for (i, &a) in self.digits.iter().enumerate() {
            for (j, &b) in rhs.digits.iter().enumerate() {
                acc[i + j] += a as u32 * b as u32;
            }
        }

        let mut digits = Vec::with_capacity(acc.len());
        let mut carry = 0u32;
        for column in acc {
            let total = column + carry;
            digits.push((total % 10) as u8);
            carry = total / 10;
        }
        while carry != 0 {
            digits.push((carry % 10) as u8);
            carry /= 10;
        }

        Natural::from_digits(digits)
    }
}

forward_binop!(impl Mul, mul for Natural);
