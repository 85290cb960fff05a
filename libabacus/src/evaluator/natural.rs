use super::DomainEvaluator;
use crate::dialect::{Function, Operator};
use crate::math::{Integer, MathError, Natural};
use crate::postfix::Literal;
use num_traits::Zero;
use std::cmp::Ordering;
use std::str::FromStr;

pub struct NaturalEvaluator;

impl DomainEvaluator for NaturalEvaluator {
    type Value = Natural;

    /// Reads the literal as an integer first so a negative literal reports
    /// [`MathError::NegativeToNatural`] rather than an unreadable number.
    fn literal(literal: &Literal) -> Result<Natural, MathError> {
        if literal.denominator.is_some() {
            return Err(MathError::InvalidLiteral(literal.to_string()));
        }
        Integer::from_str(&literal.numerator)?.to_natural()
    }

    fn negate(value: Natural) -> Result<Natural, MathError> {
        if value.is_zero() {
            Ok(value)
        } else {
            Err(MathError::NegativeToNatural)
        }
    }

    fn binary(op: Operator, lhs: Natural, rhs: Natural) -> Result<Natural, MathError> {
        match op {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => lhs.checked_sub(&rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => lhs.div(&rhs),
            Operator::Rem => lhs.rem(&rhs),
            Operator::Compare => Ok(Natural::from_digit(match lhs.cmp(&rhs) {
                Ordering::Greater => 2,
                Ordering::Less => 1,
                Ordering::Equal => 0,
            })),
            Operator::Pow | Operator::Neg => unreachable!("{} is not a natural operator", op),
        }
    }

    fn call(function: Function, args: Vec<Natural>) -> Result<Natural, MathError> {
        match (function, args.as_slice()) {
            (Function::Gcd, [a, b]) => Ok(a.gcd(b)),
            (Function::Lcm, [a, b]) => Ok(a.lcm(b)),
            (Function::Nzer, [a]) => Ok(Natural::from_digit(if a.is_zero() { 0 } else { 1 })),
            (Function::Tm, [a, k]) => a.mul_pow10(k.to_usize()?),
            _ => unreachable!(
                "{:?} is not a natural function of {} arguments",
                function,
                args.len()
            ),
        }
    }
}
