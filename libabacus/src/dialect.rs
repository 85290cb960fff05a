//! Static descriptions of the four expression dialects.
//!
//! A [`Dialect`] is pure configuration: which literals and operators are accepted, how tightly
//! operators bind, and which functions exist with what arity. The scanner and the postfix
//! converter are shared by every domain and consult the dialect for these decisions.

use std::fmt;
use std::str::FromStr;

/// The number domain an expression is evaluated in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Domain {
    Natural,
    Integer,
    Rational,
    Polynomial,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Natural,
        Domain::Integer,
        Domain::Rational,
        Domain::Polynomial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Natural => "natural",
            Domain::Integer => "integer",
            Domain::Rational => "rational",
            Domain::Polynomial => "polynomial",
        }
    }

    pub fn dialect(self) -> &'static Dialect {
        match self {
            Domain::Natural => &NATURAL,
            Domain::Integer => &INTEGER,
            Domain::Rational => &RATIONAL,
            Domain::Polynomial => &POLYNOMIAL,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .copied()
            .find(|domain| domain.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!(r#"unknown domain "{}""#, s))
    }
}

/// An operator of the expression language.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    /// Three-way comparison of naturals.
    Compare,
    /// Prefix negation.
    Neg,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Pow => "^",
            Operator::Compare => ">",
            Operator::Neg => "~",
        }
    }

    #[inline]
    pub fn is_unary(self) -> bool {
        self == Operator::Neg
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding strength of an operator in a dialect.
#[derive(Copy, Clone, Debug)]
pub struct OperatorSpec {
    pub operator: Operator,
    pub priority: u8,
    pub associativity: Associativity,
}

const fn left(operator: Operator, priority: u8) -> OperatorSpec {
    OperatorSpec {
        operator,
        priority,
        associativity: Associativity::Left,
    }
}

const fn right(operator: Operator, priority: u8) -> OperatorSpec {
    OperatorSpec {
        operator,
        priority,
        associativity: Associativity::Right,
    }
}

/// A built-in function of some dialect.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Function {
    /// Greatest common divisor of two naturals.
    Gcd,
    /// Least common multiple of two naturals.
    Lcm,
    /// 1 if a natural is non-zero, else 0.
    Nzer,
    /// `TM(a, k) = a * 10^k`.
    Tm,
    /// Absolute value of an integer.
    Abs,
    /// Sign of an integer as 1, 0 or -1.
    Poz,
    /// Reduces a fraction.
    Red,
    /// 1 if a fraction is an integer, else 0.
    Int,
    /// Leading coefficient of a polynomial.
    Led,
    /// Degree of a polynomial.
    Deg,
    /// Content of a polynomial.
    Fac,
    /// Monic GCD of two polynomials.
    Gcf,
    /// Derivative of a polynomial.
    Der,
    /// Square-free part of a polynomial.
    Nmr,
}

/// A function together with the names it is spelled with and its arity.
#[derive(Copy, Clone, Debug)]
pub struct FunctionSpec {
    pub function: Function,
    /// Accepted spellings, canonical spelling first. Matching ignores case.
    pub names: &'static [&'static str],
    pub arity: usize,
}

impl FunctionSpec {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.names[0]
    }
}

/// The grammar knobs and tables of one dialect.
#[derive(Debug)]
pub struct Dialect {
    pub domain: Domain,
    /// Whether `a/b` digit pairs are read as a single fraction literal.
    pub fractions: bool,
    /// Whether `x` is a variable.
    pub variable: bool,
    /// Whether a prefix minus directly before a number becomes part of the literal. Elsewhere a
    /// prefix minus is the negation operator.
    pub signed_literals: bool,
    /// Whether juxtaposition such as `2x` or `(x+1)(x-1)` means multiplication.
    pub implicit_multiplication: bool,
    pub operators: &'static [OperatorSpec],
    pub functions: &'static [FunctionSpec],
}

impl Dialect {
    pub fn operator(&self, operator: Operator) -> Option<&OperatorSpec> {
        self.operators.iter().find(|spec| spec.operator == operator)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSpec> {
        let name = name.to_lowercase();
        self.functions
            .iter()
            .find(|spec| spec.names.iter().any(|alias| alias.to_lowercase() == name))
    }

    pub fn spec_of(&self, function: Function) -> Option<&FunctionSpec> {
        self.functions.iter().find(|spec| spec.function == function)
    }
}

pub static NATURAL: Dialect = Dialect {
    domain: Domain::Natural,
    fractions: false,
    variable: false,
    signed_literals: true,
    implicit_multiplication: false,
    operators: &[
        left(Operator::Compare, 0),
        left(Operator::Add, 1),
        left(Operator::Sub, 1),
        left(Operator::Mul, 2),
        left(Operator::Div, 2),
        left(Operator::Rem, 2),
        right(Operator::Neg, 3),
    ],
    functions: &[
        FunctionSpec {
            function: Function::Gcd,
            names: &["GCD", "НОД", "nod"],
            arity: 2,
        },
        FunctionSpec {
            function: Function::Lcm,
            names: &["LCM", "НОК", "nok"],
            arity: 2,
        },
        FunctionSpec {
            function: Function::Nzer,
            names: &["NZER"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Tm,
            names: &["TM"],
            arity: 2,
        },
    ],
};

pub static INTEGER: Dialect = Dialect {
    domain: Domain::Integer,
    fractions: false,
    variable: false,
    signed_literals: true,
    implicit_multiplication: false,
    operators: &[
        left(Operator::Add, 1),
        left(Operator::Sub, 1),
        left(Operator::Mul, 2),
        left(Operator::Div, 2),
        left(Operator::Rem, 2),
        right(Operator::Neg, 3),
    ],
    functions: &[
        FunctionSpec {
            function: Function::Abs,
            names: &["ABS"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Poz,
            names: &["POZ"],
            arity: 1,
        },
    ],
};

pub static RATIONAL: Dialect = Dialect {
    domain: Domain::Rational,
    fractions: true,
    variable: false,
    signed_literals: true,
    implicit_multiplication: false,
    operators: &[
        left(Operator::Add, 1),
        left(Operator::Sub, 1),
        left(Operator::Mul, 2),
        left(Operator::Div, 2),
        right(Operator::Neg, 3),
    ],
    functions: &[
        FunctionSpec {
            function: Function::Red,
            names: &["RED"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Int,
            names: &["INT"],
            arity: 1,
        },
    ],
};

pub static POLYNOMIAL: Dialect = Dialect {
    domain: Domain::Polynomial,
    fractions: true,
    variable: true,
    signed_literals: false,
    implicit_multiplication: true,
    operators: &[
        left(Operator::Add, 1),
        left(Operator::Sub, 1),
        left(Operator::Mul, 2),
        left(Operator::Div, 2),
        left(Operator::Rem, 2),
        right(Operator::Neg, 3),
        right(Operator::Pow, 4),
    ],
    functions: &[
        FunctionSpec {
            function: Function::Led,
            names: &["LED"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Deg,
            names: &["DEG"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Fac,
            names: &["FAC"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Gcf,
            names: &["GCF"],
            arity: 2,
        },
        FunctionSpec {
            function: Function::Der,
            names: &["DER"],
            arity: 1,
        },
        FunctionSpec {
            function: Function::Nmr,
            names: &["NMR"],
            arity: 1,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_lookup_ignores_case_and_accepts_aliases() {
        let gcd = Some(Function::Gcd);
        assert_eq!(NATURAL.function("gcd").map(|f| f.function), gcd);
        assert_eq!(NATURAL.function("НОД").map(|f| f.function), gcd);
        assert_eq!(NATURAL.function("нод").map(|f| f.function), gcd);
        assert_eq!(NATURAL.function("NOD").map(|f| f.function), gcd);
        assert!(NATURAL.function("ABS").is_none());
        assert_eq!(INTEGER.function("Abs").map(|f| f.name()), Some("ABS"));
    }

    #[test]
    fn power_binds_tighter_than_negation() {
        let pow = POLYNOMIAL.operator(Operator::Pow).unwrap();
        let neg = POLYNOMIAL.operator(Operator::Neg).unwrap();
        assert!(pow.priority > neg.priority);
        assert_eq!(pow.associativity, Associativity::Right);
        assert!(RATIONAL.operator(Operator::Rem).is_none());
    }

    #[test]
    fn domain_from_str() {
        assert_eq!("Polynomial".parse::<Domain>(), Ok(Domain::Polynomial));
        assert!("real".parse::<Domain>().is_err());
        for domain in Domain::ALL.iter() {
            assert_eq!(domain.dialect().domain, *domain);
        }
    }
}
