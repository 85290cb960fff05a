//! Infix to postfix conversion with the shunting-yard algorithm.
//!
//! Conversion doubles as validation: every token stream that converts successfully evaluates
//! without stack underflow, and every function in the output was called with its arity.

mod errors;
pub use errors::{ExpressionErrors, Malformed, MalformedKind};

use crate::common::Span;
use crate::dialect::{Associativity, Dialect, FunctionSpec, Operator};
use crate::scanner::scan;
use crate::scanner::types::{Token, TokenType};
use crate::utils::PeekIter;
use log::debug;
use std::fmt;

/// A numeric literal as written, with an optional leading `-` on the numerator.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Literal {
    pub numerator: String,
    pub denominator: Option<String>,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.denominator {
            Some(den) => write!(f, "{}/{}", self.numerator, den),
            None => write!(f, "{}", self.numerator),
        }
    }
}

/// One instruction of a postfix program.
#[derive(Clone, Debug)]
pub enum Item {
    Literal(Literal),
    Variable,
    Operator(Operator),
    Function(&'static FunctionSpec),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Literal(lit) => write!(f, "{}", lit),
            Item::Variable => write!(f, "x"),
            Item::Operator(op) => write!(f, "{}", op),
            Item::Function(spec) => write!(f, "{}", spec.name()),
        }
    }
}

/// A postfix item and the span of source text it was produced from. Operators span their symbol;
/// function calls span from the name to the closing parenthesis.
#[derive(Clone, Debug)]
pub struct PostfixItem {
    pub item: Item,
    pub span: Span,
}

/// An expression in postfix order.
#[derive(Clone, Debug, Default)]
pub struct Postfix {
    items: Vec<PostfixItem>,
}

impl Postfix {
    pub fn items(&self) -> &[PostfixItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item.item)?;
        }
        Ok(())
    }
}

/// Scans `input` and converts it to postfix order in `dialect`.
///
/// Empty input converts to an empty program.
pub fn to_postfix(input: &str, dialect: &'static Dialect) -> Result<Postfix, Malformed> {
    let tokens = scan(input, dialect);
    let end = input.chars().count();
    let postfix = Converter::new(tokens, dialect, end).convert()?;
    debug!("postfix: {}", postfix);
    Ok(postfix)
}

/// An entry of the operator stack.
enum Pending {
    Operator(Operator, u8, Span),
    Function(&'static FunctionSpec, Span),
    Paren {
        span: Span,
        /// Whether the parenthesis opens the argument list of a function.
        call: bool,
        commas: usize,
    },
}

struct Converter {
    dialect: &'static Dialect,
    tokens: PeekIter<Token>,
    output: Vec<PostfixItem>,
    stack: Vec<Pending>,
    /// Whether the next token must begin an operand.
    expect_operand: bool,
    /// Character index of the end of the input.
    end: usize,
}

fn operator_of(ty: &TokenType) -> Option<Operator> {
    use TokenType::*;
    Some(match ty {
        Plus => Operator::Add,
        Minus => Operator::Sub,
        UnaryMinus => Operator::Neg,
        Mult => Operator::Mul,
        Div => Operator::Div,
        Mod => Operator::Rem,
        Exp => Operator::Pow,
        Greater => Operator::Compare,
        _ => return None,
    })
}

impl Converter {
    fn new(tokens: Vec<Token>, dialect: &'static Dialect, end: usize) -> Self {
        Self {
            dialect,
            tokens: PeekIter::new(tokens.into_iter()),
            output: Vec::new(),
            stack: Vec::new(),
            expect_operand: true,
            end,
        }
    }

    fn convert(mut self) -> Result<Postfix, Malformed> {
        let mut seen_any = false;
        while let Some(Token { ty, span }) = self.tokens.next() {
            seen_any = true;
            match ty {
                TokenType::Number(numerator) => self.operand(
                    Item::Literal(Literal {
                        numerator,
                        denominator: None,
                    }),
                    span,
                )?,
                TokenType::Fraction(numerator, den) => self.operand(
                    Item::Literal(Literal {
                        numerator,
                        denominator: Some(den),
                    }),
                    span,
                )?,
                TokenType::Variable => self.operand(Item::Variable, span)?,
                TokenType::Identifier(name) => self.function(name, span)?,
                TokenType::OpenParen => self.open_paren(span)?,
                TokenType::CloseParen => self.close_paren(span)?,
                TokenType::Comma => self.comma(span)?,
                TokenType::Invalid(s) => {
                    return Err(Malformed::new(MalformedKind::InvalidToken(s), span))
                }
                ty => match operator_of(&ty) {
                    Some(op) => self.operator(op, span)?,
                    None => {
                        return Err(Malformed::new(
                            MalformedKind::InvalidToken(ty.to_string()),
                            span,
                        ))
                    }
                },
            }
        }

        if seen_any && self.expect_operand {
            return Err(Malformed::new(
                MalformedKind::ExpectedExpression,
                (self.end, self.end),
            ));
        }
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(op, _, span) => self.emit(Item::Operator(op), span),
                Pending::Paren { span, .. } => {
                    return Err(Malformed::new(MalformedKind::UnmatchedOpenParen, span))
                }
                Pending::Function(spec, span) => {
                    return Err(Malformed::new(
                        MalformedKind::FunctionWithoutArguments(spec.name().into()),
                        span,
                    ))
                }
            }
        }
        Ok(Postfix { items: self.output })
    }

    fn emit(&mut self, item: Item, span: Span) {
        self.output.push(PostfixItem { item, span });
    }

    fn operand(&mut self, item: Item, span: Span) -> Result<(), Malformed> {
        if !self.expect_operand {
            return Err(Malformed::new(MalformedKind::MissingOperator, span));
        }
        self.emit(item, span);
        self.expect_operand = false;
        Ok(())
    }

    fn function(&mut self, name: String, span: Span) -> Result<(), Malformed> {
        let spec = match self.dialect.function(&name) {
            Some(spec) => spec,
            None => return Err(Malformed::new(MalformedKind::UnknownFunction(name), span)),
        };
        if !self.expect_operand {
            return Err(Malformed::new(MalformedKind::MissingOperator, span));
        }
        match self.tokens.peek() {
            Some(Token {
                ty: TokenType::OpenParen,
                ..
            }) => {}
            _ => {
                return Err(Malformed::new(
                    MalformedKind::FunctionWithoutArguments(name),
                    span,
                ))
            }
        }
        self.stack.push(Pending::Function(spec, span));
        Ok(())
    }

    fn open_paren(&mut self, span: Span) -> Result<(), Malformed> {
        if !self.expect_operand {
            return Err(Malformed::new(MalformedKind::MissingOperator, span));
        }
        let call = matches!(self.stack.last(), Some(Pending::Function(..)));
        self.stack.push(Pending::Paren {
            span,
            call,
            commas: 0,
        });
        Ok(())
    }

    /// Moves operators to the output up to, but excluding, the innermost open parenthesis.
    fn pop_operators(&mut self) {
        while let Some(Pending::Operator(op, _, span)) = self.stack.last() {
            let (op, span) = (*op, *span);
            self.stack.pop();
            self.emit(Item::Operator(op), span);
        }
    }

    fn comma(&mut self, span: Span) -> Result<(), Malformed> {
        if self.expect_operand {
            return Err(Malformed::new(MalformedKind::ExpectedExpression, span));
        }
        self.pop_operators();
        match self.stack.last_mut() {
            Some(Pending::Paren {
                call: true, commas, ..
            }) => *commas += 1,
            _ => return Err(Malformed::new(MalformedKind::CommaOutsideFunction, span)),
        }
        self.expect_operand = true;
        Ok(())
    }

    fn close_paren(&mut self, span: Span) -> Result<(), Malformed> {
        let empty = self.expect_operand;
        if empty {
            // only an argument list may be empty, and then only to report its arity
            let empty_call = matches!(
                self.stack.last(),
                Some(Pending::Paren {
                    call: true,
                    commas: 0,
                    ..
                })
            );
            if !empty_call {
                return Err(Malformed::new(MalformedKind::ExpectedExpression, span));
            }
        }

        self.pop_operators();
        match self.stack.pop() {
            Some(Pending::Paren {
                call: true, commas, ..
            }) => {
                if let Some(Pending::Function(spec, name_span)) = self.stack.pop() {
                    let found = if empty { 0 } else { commas + 1 };
                    let call_span = name_span.to(span);
                    if found != spec.arity {
                        return Err(Malformed::new(
                            MalformedKind::WrongArity {
                                function: spec.name().into(),
                                expected: spec.arity,
                                found,
                            },
                            call_span,
                        ));
                    }
                    self.emit(Item::Function(spec), call_span);
                }
            }
            Some(Pending::Paren { .. }) => {}
            _ => return Err(Malformed::new(MalformedKind::UnmatchedCloseParen, span)),
        }
        self.expect_operand = false;
        Ok(())
    }

    fn operator(&mut self, op: Operator, span: Span) -> Result<(), Malformed> {
        let spec = match self.dialect.operator(op) {
            Some(spec) => *spec,
            None => {
                return Err(Malformed::new(
                    MalformedKind::InvalidToken(op.symbol().into()),
                    span,
                ))
            }
        };

        if op.is_unary() {
            // a prefix operator has no left operand to bind, so nothing is popped
            if !self.expect_operand {
                return Err(Malformed::new(MalformedKind::MissingOperator, span));
            }
            self.stack.push(Pending::Operator(op, spec.priority, span));
            return Ok(());
        }

        if self.expect_operand {
            return Err(Malformed::new(MalformedKind::ExpectedExpression, span));
        }
        while let Some(&Pending::Operator(top, priority, top_span)) = self.stack.last() {
            let binds_tighter = priority > spec.priority
                || (priority == spec.priority && spec.associativity == Associativity::Left);
            if !binds_tighter {
                break;
            }
            self.stack.pop();
            self.emit(Item::Operator(top), top_span);
        }
        self.stack.push(Pending::Operator(op, spec.priority, span));
        self.expect_operand = true;
        Ok(())
    }
}
