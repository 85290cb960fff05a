use super::DomainEvaluator;
use crate::dialect::{Function, Operator};
use crate::math::{Integer, MathError, Natural, Rational};
use crate::postfix::Literal;
use num_traits::{One, Zero};
use std::str::FromStr;

pub struct RationalEvaluator;

/// Reads an integer or fraction literal without reducing it.
pub(super) fn rational_literal(literal: &Literal) -> Result<Rational, MathError> {
    let numerator = Integer::from_str(&literal.numerator)?;
    let denominator = match &literal.denominator {
        Some(den) => Natural::from_str(den)?,
        None => Natural::one(),
    };
    Rational::new(numerator, denominator)
}

impl DomainEvaluator for RationalEvaluator {
    type Value = Rational;

    fn literal(literal: &Literal) -> Result<Rational, MathError> {
        rational_literal(literal)
    }

    fn negate(value: Rational) -> Result<Rational, MathError> {
        Ok(-value)
    }

    fn binary(op: Operator, lhs: Rational, rhs: Rational) -> Result<Rational, MathError> {
        match op {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => lhs.div(&rhs),
            Operator::Rem | Operator::Pow | Operator::Compare | Operator::Neg => {
                unreachable!("{} is not a rational operator", op)
            }
        }
    }

    fn call(function: Function, args: Vec<Rational>) -> Result<Rational, MathError> {
        match (function, args.as_slice()) {
            (Function::Red, [q]) => Ok(q.reduce()),
            (Function::Int, [q]) => Ok(if q.is_integer() {
                Rational::one()
            } else {
                Rational::zero()
            }),
            _ => unreachable!(
                "{:?} is not a rational function of {} arguments",
                function,
                args.len()
            ),
        }
    }
}
