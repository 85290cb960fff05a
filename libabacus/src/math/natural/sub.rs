use crate::math::{MathError, Natural};

impl Natural {
    /// Returns `self - rhs`, failing with [`MathError::NaturalUnderflow`] if `rhs > self`.
    pub fn checked_sub(&self, rhs: &Natural) -> Result<Natural, MathError> {
        if rhs > self {
            return Err(MathError::NaturalUnderflow);
        }
        Ok(self.sub_unchecked(rhs))
    }

    /// Returns `self - d * rhs`, where `d` is a single digit.
    pub fn sub_digit_mul(&self, rhs: &Natural, d: u8) -> Result<Natural, MathError> {
        self.checked_sub(&rhs.mul_digit(d))
    }

    /// Schoolbook subtraction. The caller guarantees `self >= rhs`.
    pub(crate) fn sub_unchecked(&self, rhs: &Natural) -> Natural {
        debug_assert!(self >= rhs);
        let mut digits = Vec::with_capacity(self.digits.len());
        let mut borrow = 0i8;
        for (i, &d) in self.digits.iter().enumerate() {
            let mut res = d as i8 - rhs.digits.get(i).copied().unwrap_or(0) as i8 - borrow;
            borrow = (res < 0) as i8;
            res += borrow * 10;
            digits.push(res as u8);
        }
        Natural::from_digits(digits)
    }
}
