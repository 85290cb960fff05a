//! Definitions of types used in the libabacus scanner.

use crate::common::Span;
use core::fmt;

/// The type of a [Token][Token].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TokenType {
    /// A decimal literal, possibly with a leading `-` in dialects with signed literals.
    Number(String),

    /// A fraction literal `numerator/denominator`; the numerator may carry a leading `-`.
    Fraction(String, String),

    /// The polynomial variable `x`.
    Variable,

    /// An identifier, expected to name a function.
    Identifier(String),

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// A prefix minus that negates the operand after it. Never written directly; shown as `~`.
    UnaryMinus,

    /// * symbol, or an implicit multiplication
    Mult,

    /// / symbol
    Div,

    /// % symbol
    Mod,

    /// ^ symbol
    Exp,

    /// > symbol
    Greater,

    /// ( symbol
    OpenParen,

    /// ) symbol
    CloseParen,

    /// , symbol
    Comma,

    /// An invalid token.
    Invalid(String),
}

impl TokenType {
    /// Whether the token can end an operand, i.e. be directly followed by a binary operator.
    pub fn ends_operand(&self) -> bool {
        use TokenType::*;
        matches!(self, Number(_) | Fraction(..) | Variable | CloseParen)
    }

    /// Whether the token can begin an operand.
    pub fn begins_operand(&self) -> bool {
        use TokenType::*;
        matches!(
            self,
            Number(_) | Fraction(..) | Variable | Identifier(_) | OpenParen
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        match self {
            Number(num) => write!(f, "{}", num),
            Fraction(num, den) => write!(f, "{}/{}", num, den),
            Variable => write!(f, "x"),
            Identifier(s) | Invalid(s) => write!(f, "{}", s),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            UnaryMinus => write!(f, "~"),
            Mult => write!(f, "*"),
            Div => write!(f, "/"),
            Mod => write!(f, "%"),
            Exp => write!(f, "^"),
            Greater => write!(f, ">"),
            OpenParen => write!(f, "("),
            CloseParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

/// Describes a token in an expression.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Token {
    /// The type of the token.
    pub ty: TokenType,
    /// The character span of the token in the expression. Implicit multiplications have an empty
    /// span at the position they were inserted.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new<Sp>(ty: TokenType, span: Sp) -> Self
    where
        Sp: Into<Span>,
    {
        Self {
            ty,
            span: span.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}

#[cfg(test)]
mod tests {
    mod format {
        use crate::scanner::types::*;

        macro_rules! format_tests {
            ($($name:ident: $ty:expr, $format_str:expr)*) => {
            $(
                #[test]
                fn $name() {
                    use TokenType::*;
                    let tok = Token::new($ty, (0..0));
                    assert_eq!(tok.to_string(), $format_str);
                }
            )*
            }
        }

        format_tests! {
            number: Number("-12".into()), "-12"
            fraction: Fraction("3".into(), "4".into()), "3/4"
            variable: Variable, "x"
            identifier: Identifier("НОД".into()), "НОД"
            unary_minus: UnaryMinus, "~"
            greater: Greater, ">"
            comma: Comma, ","
            invalid: Invalid("@".into()), "@"
        }
    }
}
