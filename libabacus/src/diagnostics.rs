//! Stable diagnostic codes for every error libabacus reports.
//!
//! Each error kind is registered with a code and a long-form explanation through
//! [`define_errors!`]. Front ends use [`all_codes_with_explanations`] to implement an
//! `--explain`-style lookup.

use std::collections::HashMap;

/// A single registered error kind.
pub trait DiagnosticRecord {
    /// Stable code of the error, e.g. `M0002`.
    const CODE: &'static str;
    /// Long-form explanation of the error.
    const EXPLANATION: &'static str;
}

/// A collection of registered error kinds.
pub trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

/// Defines a set of [`DiagnosticRecord`]s and a registry collecting them.
///
/// The doc comment of each entry becomes its explanation.
macro_rules! define_errors {
    ($registry:ident; $($(#[doc = $doc:expr])+ $code:ident: $error:ident)*) => {
        $(
            $(#[doc = $doc])+
            pub(crate) struct $error;

            impl crate::diagnostics::DiagnosticRecord for $error {
                const CODE: &'static str = stringify!($code);
                const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
            }
        )*

        pub struct $registry;

        impl crate::diagnostics::DiagnosticRegistry for $registry {
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                use crate::diagnostics::DiagnosticRecord;
                vec![$(($error::CODE, $error::EXPLANATION)),*]
            }
        }
    };
}

/// Returns every diagnostic code known to libabacus, mapped to its explanation.
pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
    use crate::math::MathErrors;
    use crate::postfix::ExpressionErrors;

    MathErrors::codes_with_explanations()
        .into_iter()
        .chain(ExpressionErrors::codes_with_explanations())
        .collect()
}
