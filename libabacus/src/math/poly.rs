//! Single-variable polynomials over the rationals.

use crate::math::{Integer, MathError, Natural, Rational, MAX_LENGTH};
use log::warn;
use std::convert::TryFrom;
use num_traits::{One, Zero};
use std::fmt;
use std::ops;

/// A polynomial in `x` with [`Rational`] coefficients.
///
/// `coefficients[i]` multiplies `x^i`. The highest coefficient is non-zero unless the polynomial
/// is zero, which is stored as `[0]` and has degree 0.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Poly {
    coefficients: Vec<Rational>,
}

/// Creates a polynomial from integer coefficients, highest degree first.
///
/// ```ignore
/// poly![1, 0, -4]; // x^2 - 4
/// ```
#[cfg(test)]
macro_rules! poly {
    ($($c:expr),+ $(,)?) => {
        crate::math::Poly::from_coefficients(
            vec![$(crate::math::Rational::from($c as i64)),+].into_iter().rev().collect(),
        )
    };
}

/// Extra iterations granted to the bounded division and GCD loops on top of the degree bound.
const ITERATION_SLACK: usize = 2;

impl Poly {
    /// Creates a polynomial from coefficients in ascending degree, dropping zero high-order terms.
    pub fn from_coefficients(mut coefficients: Vec<Rational>) -> Self {
        while coefficients.len() > 1 && coefficients.last().map_or(false, Zero::is_zero) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(Rational::zero());
        }
        Self { coefficients }
    }

    /// The constant polynomial `q`.
    pub fn constant(q: Rational) -> Self {
        Self::from_coefficients(vec![q])
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::from_coefficients(vec![Rational::zero(), Rational::one()])
    }

    /// Coefficients in ascending degree.
    pub fn coefficients(&self) -> &[Rational] {
        &self.coefficients
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The coefficient of the highest-degree term; zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> &Rational {
        &self.coefficients[self.degree()]
    }

    /// Whether the polynomial has no `x` terms.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() == 1
    }

    /// Multiplies every coefficient by `q`.
    pub fn scale(&self, q: &Rational) -> Poly {
        if q.is_zero() {
            return Poly::zero();
        }
        Poly::from_coefficients(self.coefficients.iter().map(|c| c * q).collect())
    }

    /// Multiplies by `x^k`, failing with [`MathError::InvalidShift`] if `k` is negative.
    pub fn shift(&self, k: i64) -> Result<Poly, MathError> {
        if k < 0 {
            return Err(MathError::InvalidShift(k));
        }
        if self.is_zero() {
            return Ok(Poly::zero());
        }
        let k = usize::try_from(k).map_err(|_| MathError::Overflow)?;
        match self.coefficients.len().checked_add(k) {
            Some(len) if len <= MAX_LENGTH => Ok(self.shift_by(k)),
            _ => Err(MathError::Overflow),
        }
    }

    fn shift_by(&self, k: usize) -> Poly {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut coefficients = vec![Rational::zero(); k];
        coefficients.extend(self.coefficients.iter().cloned());
        Poly { coefficients }
    }

    /// Polynomial long division, returning `(quotient, remainder)` with
    /// `self = divisor * quotient + remainder` and `deg(remainder) < deg(divisor)` unless the
    /// remainder is zero.
    ///
    /// Fails with [`MathError::DivisionByZero`] if the divisor is the zero polynomial.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libabacus::math::Poly;
    /// use num_traits::One;
    ///
    /// // (x^2 - 1) / (x - 1)
    /// let x = Poly::x();
    /// let one = Poly::one();
    /// let (q, r) = (&x * &x - &one).div_rem(&(&x - &one)).unwrap();
    /// assert_eq!(q.to_string(), "x + 1");
    /// assert_eq!(r.to_string(), "0");
    /// ```
    pub fn div_rem(&self, divisor: &Poly) -> Result<(Poly, Poly), MathError> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let mut quotient = Poly::zero();
        let mut remainder = self.clone();
        if self.degree() < divisor.degree() {
            return Ok((quotient, remainder));
        }

        let lc = divisor.leading_coefficient();
        let bound = self.degree() - divisor.degree() + ITERATION_SLACK;
        for _ in 0..bound {
            if remainder.is_zero() || remainder.degree() < divisor.degree() {
                return Ok((quotient, remainder));
            }
            let k = remainder.degree() - divisor.degree();
            let coef = remainder.leading_coefficient().div(lc)?;
            let term = Poly::constant(coef).shift_by(k);
            remainder = &remainder - &(divisor * &term);
            quotient = &quotient + &term;
        }
        warn!(
            "long division of degree {} by degree {} did not settle in {} steps",
            self.degree(),
            divisor.degree(),
            bound
        );
        Err(MathError::NonConvergent("polynomial division"))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, divisor: &Poly) -> Result<Poly, MathError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn rem(&self, divisor: &Poly) -> Result<Poly, MathError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// The formal derivative.
    pub fn derivative(&self) -> Poly {
        if self.is_constant() {
            return Poly::zero();
        }
        Poly::from_coefficients(
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.mul_integer(&Integer::from(i as i64)))
                .collect(),
        )
    }

    /// Divides every coefficient by the leading coefficient. The zero polynomial is returned
    /// unchanged.
    pub fn monic(&self) -> Result<Poly, MathError> {
        if self.is_zero() {
            return Ok(Poly::zero());
        }
        Ok(self.scale(&self.leading_coefficient().recip()?))
    }

    /// The monic greatest common divisor, by the Euclidean algorithm.
    ///
    /// `gcd(0, 0)` is the zero polynomial.
    pub fn gcd(&self, other: &Poly) -> Result<Poly, MathError> {
        let mut a = self.clone();
        let mut b = other.clone();
        let bound = self.degree().max(other.degree()) + 1 + ITERATION_SLACK;
        for _ in 0..bound {
            if b.is_zero() {
                return a.monic();
            }
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }
        warn!(
            "gcd of degrees {} and {} did not settle in {} steps",
            self.degree(),
            other.degree(),
            bound
        );
        Err(MathError::NonConvergent("polynomial gcd"))
    }

    /// The rational factor `lcm(denominators) / gcd(numerators)` taken over the non-zero
    /// coefficients. The zero polynomial has content 1.
    pub fn content(&self) -> Rational {
        let nonzero = self
            .coefficients
            .iter()
            .filter(|c| !c.is_zero())
            .map(Rational::reduce);
        let (lcm, gcd) = nonzero.fold((Natural::one(), Natural::zero()), |(lcm, gcd), c| {
            (
                lcm.lcm(c.denominator()),
                gcd.gcd(c.numerator().magnitude()),
            )
        });
        if gcd.is_zero() {
            return Rational::one();
        }
        Rational::reduced_from_parts(Integer::from(lcm), gcd)
    }

    /// Removes repeated roots by dividing out `gcd(p, p')`.
    ///
    /// ```
    /// use libabacus::math::Poly;
    /// use num_traits::One;
    ///
    /// // (x - 1)^2 -> x - 1
    /// let p = (Poly::x() - Poly::one()).pow(2).unwrap();
    /// assert_eq!(p.square_free().unwrap().to_string(), "x - 1");
    /// ```
    pub fn square_free(&self) -> Result<Poly, MathError> {
        if self.is_constant() {
            return Ok(self.clone());
        }
        let g = self.gcd(&self.derivative())?;
        if g.is_constant() {
            return Ok(self.clone());
        }
        self.div(&g)
    }

    /// Raises to the `k`-th power by repeated squaring. `p^0` is 1, including for `p = 0`.
    ///
    /// Fails with [`MathError::Overflow`] if `k` times the size of `self` (its degree plus the
    /// digits of its longest coefficient) exceeds [`MAX_LENGTH`]; powers of `0`, `1` and `-1`
    /// always succeed.
    pub fn pow(&self, mut k: usize) -> Result<Poly, MathError> {
        if k == 0 {
            return Ok(Poly::one());
        }
        if self.is_zero() {
            return Ok(Poly::zero());
        }
        if self.is_constant() && self.leading_coefficient().abs().is_one() {
            return Ok(if k % 2 == 0 { Poly::one() } else { self.clone() });
        }
        let longest_coefficient = self
            .coefficients
            .iter()
            .map(|c| {
                let numerator = c.numerator().magnitude().digits().len();
                numerator.max(c.denominator().digits().len())
            })
            .max()
            .unwrap_or(1);
        match (self.degree() + longest_coefficient).checked_mul(k) {
            Some(size) if size <= MAX_LENGTH => {}
            _ => return Err(MathError::Overflow),
        }

        let mut result = Poly::one();
        let mut base = self.clone();
        while k > 0 {
            if k & 1 == 1 {
                result = &result * &base;
            }
            k >>= 1;
            if k > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }

    /// Evaluates the polynomial at `at` with Horner's scheme.
    pub fn evaluate_at(&self, at: &Rational) -> Rational {
        self.coefficients
            .iter()
            .rev()
            .fold(Rational::zero(), |acc, c| &(&acc * at) + c)
    }

    fn zip_with(&self, rhs: &Poly, f: impl Fn(&Rational, &Rational) -> Rational) -> Poly {
        let zero = Rational::zero();
        let len = self.coefficients.len().max(rhs.coefficients.len());
        Poly::from_coefficients(
            (0..len)
                .map(|i| {
                    let a = self.coefficients.get(i).unwrap_or(&zero);
                    let b = rhs.coefficients.get(i).unwrap_or(&zero);
                    f(a, b)
                })
                .collect(),
        )
    }
}

impl From<Rational> for Poly {
    fn from(q: Rational) -> Self {
        Poly::constant(q)
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::constant(Rational::zero())
    }

    fn is_zero(&self) -> bool {
        self.is_constant() && self.coefficients[0].is_zero()
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::constant(Rational::one())
    }
}

impl<'a> ops::Neg for &'a Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly {
            coefficients: self.coefficients.iter().map(|c| -c).collect(),
        }
    }
}

forward_neg!(Poly);

impl<'a, 'b> ops::Add<&'b Poly> for &'a Poly {
    type Output = Poly;

    fn add(self, rhs: &'b Poly) -> Poly {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<'a, 'b> ops::Sub<&'b Poly> for &'a Poly {
    type Output = Poly;

    fn sub(self, rhs: &'b Poly) -> Poly {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<'a, 'b> ops::Mul<&'b Poly> for &'a Poly {
    type Output = Poly;

    /// Sums `rhs * c_i * x^i` over the coefficients `c_i` of `self`.
    fn mul(self, rhs: &'b Poly) -> Poly {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .fold(Poly::zero(), |acc, (i, c)| &acc + &rhs.scale(c).shift_by(i))
    }
}

forward_binop!(impl Add, add for Poly);
forward_binop!(impl Sub, sub for Poly);
forward_binop!(impl Mul, mul for Poly);

impl fmt::Display for Poly {
    /// Lists terms from the highest degree down, e.g. `-x^3 + 2/3x - 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero());
        for (n, (i, c)) in terms.enumerate() {
            let negative = c.numerator().is_negative();
            match (n, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            let magnitude = c.abs();
            if i == 0 || !magnitude.is_one() {
                write!(f, "{}", magnitude)?;
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
