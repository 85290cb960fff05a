//! Postfix evaluation over the four number domains.
//!
//! The stack machine in [`evaluate_postfix`] is shared; each domain contributes a
//! [`DomainEvaluator`] that builds values from literals and dispatches operators and functions to
//! the numeric kernel.

mod integer;
mod natural;
mod polynomial;
mod rational;

pub use integer::IntegerEvaluator;
pub use natural::NaturalEvaluator;
pub use polynomial::PolynomialEvaluator;
pub use rational::RationalEvaluator;

use crate::common::Span;
use crate::dialect::{Function, Operator};
use crate::errors::EvaluationError;
use crate::math::MathError;
use crate::postfix::{Item, Literal, Malformed, MalformedKind, Postfix};
use log::trace;
use std::fmt;

/// The values and operations of one number domain.
pub trait DomainEvaluator {
    type Value: Clone + fmt::Display;

    /// Builds a value from a literal as written in the expression.
    fn literal(literal: &Literal) -> Result<Self::Value, MathError>;

    /// The value of the variable `x`, in domains that have one.
    fn variable() -> Option<Self::Value> {
        None
    }

    fn negate(value: Self::Value) -> Result<Self::Value, MathError>;

    fn binary(op: Operator, lhs: Self::Value, rhs: Self::Value)
        -> Result<Self::Value, MathError>;

    /// Applies a function to arguments in call order. The argument count always matches the
    /// function's arity.
    fn call(function: Function, args: Vec<Self::Value>) -> Result<Self::Value, MathError>;
}

/// Runs a postfix program, returning `None` for an empty program.
pub fn evaluate_postfix<E: DomainEvaluator>(
    postfix: &Postfix,
) -> Result<Option<E::Value>, EvaluationError> {
    let mut stack: Vec<(E::Value, Span)> = Vec::new();

    for step in postfix.items() {
        let span = step.span;
        let value = match &step.item {
            Item::Literal(literal) => {
                E::literal(literal).map_err(|e| EvaluationError::math(e, span))?
            }
            Item::Variable => match E::variable() {
                Some(x) => x,
                None => {
                    return Err(Malformed::new(MalformedKind::InvalidToken("x".into()), span).into())
                }
            },
            Item::Operator(op) if op.is_unary() => {
                let (operand, _) = pop(&mut stack, span)?;
                E::negate(operand).map_err(|e| EvaluationError::math(e, span))?
            }
            Item::Operator(op) => {
                let (rhs, _) = pop(&mut stack, span)?;
                let (lhs, _) = pop(&mut stack, span)?;
                E::binary(*op, lhs, rhs).map_err(|e| EvaluationError::math(e, span))?
            }
            Item::Function(spec) => {
                let mut args = Vec::with_capacity(spec.arity);
                for _ in 0..spec.arity {
                    args.push(pop(&mut stack, span)?.0);
                }
                args.reverse();
                E::call(spec.function, args).map_err(|e| EvaluationError::math(e, span))?
            }
        };
        trace!("{} => {}", step.item, value);
        stack.push((value, span));
    }

    let result = stack.pop();
    if let Some((_, span)) = stack.pop() {
        return Err(Malformed::new(MalformedKind::MissingOperator, span).into());
    }
    Ok(result.map(|(value, _)| value))
}

fn pop<V>(stack: &mut Vec<(V, Span)>, at: Span) -> Result<(V, Span), Malformed> {
    stack
        .pop()
        .ok_or_else(|| Malformed::new(MalformedKind::ExpectedExpression, at))
}
