//! Exact evaluation of arithmetic expressions over naturals, integers, rationals and polynomials
//! with rational coefficients.
//!
//! ```
//! use libabacus::{evaluate, Domain};
//!
//! assert_eq!(evaluate(Domain::Rational, "1/2 + 1/3").unwrap(), Some("5/6".to_owned()));
//! assert_eq!(evaluate(Domain::Polynomial, "(x+1)(x-1)").unwrap(), Some("x^2 - 1".to_owned()));
//! assert_eq!(evaluate(Domain::Integer, "").unwrap(), None);
//! ```
//!
//! An expression is scanned with the literal rules of its domain's [`Dialect`], converted to
//! [postfix order](postfix), and run on a stack machine over the numeric kernel in [`math`].

#[macro_use]
pub mod diagnostics;

pub mod common;
pub mod dialect;
pub mod errors;
pub mod evaluator;
pub mod math;
pub mod postfix;
pub mod scanner;

mod utils;

pub use dialect::{Dialect, Domain};
pub use errors::EvaluationError;
pub use postfix::Postfix;

use evaluator::{
    evaluate_postfix, DomainEvaluator, IntegerEvaluator, NaturalEvaluator, PolynomialEvaluator,
    RationalEvaluator,
};
use log::debug;

/// Evaluates `input` in `domain`, returning the printed result or `None` for an empty expression.
pub fn evaluate(domain: Domain, input: &str) -> Result<Option<String>, EvaluationError> {
    debug!("evaluating {:?} in the {} domain", input, domain);
    let postfix = to_postfix(domain, input)?;
    match domain {
        Domain::Natural => run::<NaturalEvaluator>(&postfix),
        Domain::Integer => run::<IntegerEvaluator>(&postfix),
        Domain::Rational => run::<RationalEvaluator>(&postfix),
        Domain::Polynomial => run::<PolynomialEvaluator>(&postfix),
    }
}

/// Converts `input` to postfix order without evaluating it.
pub fn to_postfix(domain: Domain, input: &str) -> Result<Postfix, EvaluationError> {
    Ok(postfix::to_postfix(input, domain.dialect())?)
}

fn run<E: DomainEvaluator>(postfix: &Postfix) -> Result<Option<String>, EvaluationError> {
    Ok(evaluate_postfix::<E>(postfix)?.map(|value| value.to_string()))
}
