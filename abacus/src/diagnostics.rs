//! User-facing abacus diagnostics.
//!
//! Renders a [libabacus error][libabacus::EvaluationError] as an annotated snippet of the
//! expression it was raised on.

use libabacus::errors::EvaluationError;
use libabacus::postfix::MalformedKind;

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

pub fn sanitize_source_for_diagnostics(source: &str) -> String {
    let source = source.to_owned();
    source + " " // errors at the end of input point one past the last character
}

/// A short label for the annotated span of an error.
fn span_label(error: &EvaluationError) -> &'static str {
    match error {
        EvaluationError::Math { .. } => "evaluated here",
        EvaluationError::Malformed(malformed) => match malformed.kind {
            MalformedKind::InvalidToken(_) => "not recognized",
            MalformedKind::UnknownFunction(_) => "no such function",
            MalformedKind::ExpectedExpression => "expected an operand here",
            MalformedKind::MissingOperator => "an operator is missing before this",
            MalformedKind::UnmatchedOpenParen => "never closed",
            MalformedKind::UnmatchedCloseParen => "nothing to close",
            MalformedKind::FunctionWithoutArguments(_) => "expected `(` after this",
            MalformedKind::WrongArity { .. } => "called here",
            MalformedKind::CommaOutsideFunction => "not in an argument list",
        },
    }
}

pub fn emit_abacus_diagnostic(
    source: &str,
    error: &EvaluationError,
    color: bool,
) -> String {
    let title = error.to_string();
    let help = format!("for more information, try `abacus --explain {}`", error.code());
    let (lo, hi): (usize, usize) = error.span().into();
    // empty spans are widened so there is something to underline
    let range = if lo == hi { (lo, hi + 1) } else { (lo, hi) };

    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(&title),
            id: Some(error.code()),
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![Annotation {
            label: Some(&help),
            id: None,
            annotation_type: AnnotationType::Help,
        }],
        slices: vec![Slice {
            source,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: span_label(error),
                annotation_type: AnnotationType::Error,
                range,
            }],
        }],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };
    format!("{}\n", DisplayList::from(snippet))
}
