//! Errors for token streams that do not form an expression.

use crate::common::Span;
use crate::diagnostics::DiagnosticRecord;
use thiserror::Error;

/// What is wrong with a malformed expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    #[error(r#"invalid token "{0}""#)]
    InvalidToken(String),

    #[error(r#"unknown function "{0}""#)]
    UnknownFunction(String),

    #[error("expected an expression")]
    ExpectedExpression,

    #[error("missing an operator between two operands")]
    MissingOperator,

    #[error("unmatched opening parenthesis")]
    UnmatchedOpenParen,

    #[error("unmatched closing parenthesis")]
    UnmatchedCloseParen,

    #[error(r#"function "{0}" must be followed by an argument list"#)]
    FunctionWithoutArguments(String),

    #[error(
        r#"function "{function}" takes {expected} argument{}, but {found} {} given"#,
        plural_suffix(.expected),
        was_or_were(.found)
    )]
    WrongArity {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("comma outside of a function call")]
    CommaOutsideFunction,
}

fn plural_suffix(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

fn was_or_were(n: &usize) -> &'static str {
    if *n == 1 {
        "was"
    } else {
        "were"
    }
}

impl MalformedKind {
    /// The stable diagnostic code of this error.
    pub fn code(&self) -> &'static str {
        use MalformedKind::*;
        match self {
            InvalidToken(_) => InvalidTokenRecord::CODE,
            UnknownFunction(_) => UnknownFunctionRecord::CODE,
            ExpectedExpression => ExpectedExpressionRecord::CODE,
            MissingOperator => MissingOperatorRecord::CODE,
            UnmatchedOpenParen => UnmatchedOpenParenRecord::CODE,
            UnmatchedCloseParen => UnmatchedCloseParenRecord::CODE,
            FunctionWithoutArguments(_) => FunctionWithoutArgumentsRecord::CODE,
            WrongArity { .. } => WrongArityRecord::CODE,
            CommaOutsideFunction => CommaOutsideFunctionRecord::CODE,
        }
    }
}

/// A malformed expression, located at the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct Malformed {
    pub kind: MalformedKind,
    pub span: Span,
}

impl Malformed {
    pub fn new<Sp: Into<Span>>(kind: MalformedKind, span: Sp) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }
}

define_errors! {
    ExpressionErrors;

    ///A character in the expression does not start any token of the chosen domain. Numbers are
    ///written with the digits 0-9; fractions as `a/b` in the rational and polynomial domains; the
    ///variable `x` exists only in the polynomial domain.
    ///
    ///This error also fires on operators the domain does not have, for example `%` over the
    ///rationals or `^` outside of polynomials.
    E0001: InvalidTokenRecord

    ///An identifier does not name a function of the chosen domain. The functions are
    ///
    ///```text
    ///natural:    GCD (НОД), LCM (НОК), NZER, TM
    ///integer:    ABS, POZ
    ///rational:   RED, INT
    ///polynomial: LED, DEG, FAC, GCF, DER, NMR
    ///```
    ///
    ///Function names are case-insensitive.
    E0002: UnknownFunctionRecord

    ///An operand was expected but the expression continued with an operator, a closing
    ///parenthesis or a comma, or ended. For example
    ///
    ///```text
    ///1 + * 2
    ///    ^ expected an expression
    ///```
    E0003: ExpectedExpressionRecord

    ///Two operands follow each other without an operator between them, as in
    ///
    ///```text
    ///2 3
    ///```
    ///
    ///Only the polynomial domain reads juxtaposition (`2x`, `(x+1)(x-1)`) as multiplication.
    E0004: MissingOperatorRecord

    ///An opening parenthesis is never closed.
    ///
    ///```text
    ///(1 + 2
    ///^ unmatched
    ///```
    E0005: UnmatchedOpenParenRecord

    ///A closing parenthesis has no opening parenthesis to match.
    ///
    ///```text
    ///1 + 2)
    ///     ^ unmatched
    ///```
    E0006: UnmatchedCloseParenRecord

    ///A function name must be directly followed by a parenthesized argument list, as in `ABS(-2)`.
    E0007: FunctionWithoutArgumentsRecord

    ///A function was called with the wrong number of arguments. `GCD`, `LCM`, `TM` and `GCF` take
    ///two arguments; every other function takes one.
    E0008: WrongArityRecord

    ///Commas separate function arguments and may not appear anywhere else.
    ///
    ///```text
    ///(1, 2)
    ///  ^ not a function call
    ///```
    E0009: CommaOutsideFunctionRecord
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message() {
        let one = MalformedKind::WrongArity {
            function: "ABS".into(),
            expected: 1,
            found: 2,
        };
        assert_eq!(
            one.to_string(),
            r#"function "ABS" takes 1 argument, but 2 were given"#
        );
        let two = MalformedKind::WrongArity {
            function: "GCD".into(),
            expected: 2,
            found: 1,
        };
        assert_eq!(
            two.to_string(),
            r#"function "GCD" takes 2 arguments, but 1 was given"#
        );
    }

    #[test]
    fn codes() {
        assert_eq!(MalformedKind::InvalidToken("@".into()).code(), "E0001");
        assert_eq!(MalformedKind::CommaOutsideFunction.code(), "E0009");
    }
}
