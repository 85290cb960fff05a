pub mod types;

use crate::dialect::Dialect;
use crate::utils::PeekIter;
use log::debug;
use types::*;

/// Splits an expression into tokens according to the literal rules of `dialect`.
///
/// Scanning never fails; characters that cannot start a token become [`TokenType::Invalid`] and
/// are reported when the token stream is converted to postfix.
pub fn scan(input: &str, dialect: &Dialect) -> Vec<Token> {
    let mut scanner = Scanner::new(input, dialect);
    scanner.scan();
    debug!(
        "scanned {} tokens: {}",
        scanner.output.len(),
        scanner
            .output
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    scanner.output
}

struct Scanner<'a> {
    input: PeekIter<char>,
    /// Character index of the next character in `input`.
    pos: usize,
    dialect: &'a Dialect,
    output: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(input: &str, dialect: &'a Dialect) -> Scanner<'a> {
        let chars: Vec<char> = input.chars().collect();

        Scanner {
            input: PeekIter::new(chars.into_iter()),
            pos: 0,
            dialect,
            output: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(&c) = self.input.peek() {
            match c {
                _ if c.is_whitespace() => {
                    self.bump();
                }
                _ if c.is_ascii_digit() => {
                    let start = self.pos;
                    self.scan_number(start, false);
                }
                '-' => self.scan_minus(),
                'x' if self.dialect.variable && !self.nth_is(1, char::is_alphabetic) => {
                    let start = self.pos;
                    self.bump();
                    self.push(TokenType::Variable, start);
                }
                _ if c.is_alphabetic() => self.scan_identifier(),
                _ => self.scan_symbol(),
            }
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.input.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn nth_is(&mut self, n: usize, predicate: impl Fn(char) -> bool) -> bool {
        self.input.peek_nth(n).map_or(false, |&c| predicate(c))
    }

    /// Emits a token spanning from `start` to the current position, inserting an implicit
    /// multiplication before it where the dialect asks for one.
    fn push(&mut self, ty: TokenType, start: usize) {
        if self.dialect.implicit_multiplication && ty.begins_operand() {
            if let Some(prev) = self.output.last() {
                if prev.ty.ends_operand() {
                    self.output.push(Token::new(TokenType::Mult, (start, start)));
                }
            }
        }
        self.output.push(Token::new(ty, (start, self.pos)));
    }

    /// Whether the next token is in operand position, where a minus cannot be binary.
    fn at_operand_start(&self) -> bool {
        use TokenType::*;
        match self.output.last() {
            None => true,
            Some(tok) => matches!(
                tok.ty,
                Plus | Minus
                    | UnaryMinus
                    | Mult
                    | Div
                    | Mod
                    | Exp
                    | Greater
                    | OpenParen
                    | Comma
            ),
        }
    }

    fn scan_minus(&mut self) {
        let start = self.pos;
        self.bump();
        if !self.at_operand_start() {
            self.push(TokenType::Minus, start);
        } else if self.dialect.signed_literals && self.nth_is(0, |c| c.is_ascii_digit()) {
            self.scan_number(start, true);
        } else {
            self.push(TokenType::UnaryMinus, start);
        }
    }

    /// Scans a number or, in dialects with fraction literals, a fraction `a/b`.
    fn scan_number(&mut self, start: usize, negative: bool) {
        let mut num = if negative {
            String::from("-")
        } else {
            String::new()
        };
        num.push_str(&self.collect_digits());

        if self.dialect.fractions
            && self.nth_is(0, |c| c == '/')
            && self.nth_is(1, |c| c.is_ascii_digit())
        {
            self.bump();
            let den = self.collect_digits();
            self.push(TokenType::Fraction(num, den), start);
        } else {
            self.push(TokenType::Number(num), start);
        }
    }

    fn collect_digits(&mut self) -> String {
        let digits: String = self.input.collect_while(|c| c.is_ascii_digit());
        self.pos += digits.len();
        digits
    }

    fn scan_identifier(&mut self) {
        let start = self.pos;
        let name: String = self.input.collect_while(|c| c.is_alphabetic());
        self.pos += name.chars().count();
        self.push(TokenType::Identifier(name), start);
    }

    fn scan_symbol(&mut self) {
        use TokenType::*;
        let start = self.pos;
        let ty = match self.bump() {
            Some('+') => Plus,
            Some('*') => Mult,
            Some('/') => Div,
            Some('%') => Mod,
            Some('^') => Exp,
            Some('>') => Greater,
            Some('(') => OpenParen,
            Some(')') => CloseParen,
            Some(',') => Comma,
            Some(c) => Invalid(c.to_string()),
            None => return,
        };
        self.push(ty, start);
    }
}
