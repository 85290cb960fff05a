//! The error type returned by expression evaluation.

use crate::common::Span;
use crate::math::MathError;
use crate::postfix::Malformed;
use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A kernel operation failed, e.g. a division by zero.
    #[error("{source}")]
    Math { source: MathError, span: Span },

    /// The expression is not well-formed.
    #[error(transparent)]
    Malformed(#[from] Malformed),
}

impl EvaluationError {
    pub(crate) fn math(source: MathError, span: Span) -> Self {
        EvaluationError::Math { source, span }
    }

    /// The stable diagnostic code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationError::Math { source, .. } => source.code(),
            EvaluationError::Malformed(malformed) => malformed.kind.code(),
        }
    }

    /// The span of the expression text the error is reported at.
    pub fn span(&self) -> Span {
        match self {
            EvaluationError::Math { span, .. } => *span,
            EvaluationError::Malformed(malformed) => malformed.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postfix::MalformedKind;

    #[test]
    fn codes_and_spans() {
        let err = EvaluationError::math(MathError::DivisionByZero, Span::from(2..3));
        assert_eq!(err.code(), "M0002");
        assert_eq!(err.span(), Span::from(2..3));
        assert_eq!(err.to_string(), "division by zero");

        let err: EvaluationError =
            Malformed::new(MalformedKind::UnmatchedCloseParen, (4, 5)).into();
        assert_eq!(err.code(), "E0006");
        assert_eq!(err.to_string(), "unmatched closing parenthesis");
    }
}
