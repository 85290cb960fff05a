use libabacus::math::MathError;
use libabacus::postfix::MalformedKind;
use libabacus::{evaluate, to_postfix, Domain, EvaluationError};
use pretty_assertions::assert_eq;

macro_rules! evaluate_tests {
    ($($name:ident: $domain:ident, $program:expr => $expected:expr)*) => {
    $(
        #[test]
        fn $name() {
            let result = evaluate(Domain::$domain, $program).unwrap();
            assert_eq!(result.as_deref(), Some($expected));
        }
    )*
    }
}

macro_rules! error_tests {
    ($($name:ident: $domain:ident, $program:expr => $code:expr, $span:expr)*) => {
    $(
        #[test]
        fn $name() {
            let err = evaluate(Domain::$domain, $program).unwrap_err();
            let span: (usize, usize) = err.span().into();
            assert_eq!((err.code(), span), ($code, $span));
        }
    )*
    }
}

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    evaluate_tests! {
        natural: Natural, "7+3*2" => "13"
        integer: Integer, "-5-3" => "-8"
        rational_sum: Rational, "1/2+1/3" => "5/6"
        rational_reduce: Rational, "RED(6/9)" => "2/3"
        polynomial_product: Polynomial, "(x+1)*(x-1)" => "x^2 - 1"
        polynomial_degree: Polynomial, "DEG(x^3+2x+1)" => "3"
    }
}

mod domains {
    use super::*;
    use pretty_assertions::assert_eq;

    evaluate_tests! {
        natural_functions: Natural, "LCM(GCD(12, 18), 4) + TM(NZER(7), 2)" => "112"
        natural_comparison: Natural, "2*3 > 5" => "2"
        natural_big_product: Natural, "12345678901234567890 * 98765432109876543210"
            => "1219326311370217952237463801111263526900"
        integer_functions: Integer, "ABS(-12) * POZ(-3) % 5" => "-2"
        integer_truncates: Integer, "(-17) / 5" => "-3"
        rational_int: Rational, "INT(3/4 + 1/4)" => "1"
        rational_negated: Rational, "-(1/3) * 3/2" => "-1/2"
        polynomial_content: Polynomial, "FAC(4x^2 + 6)" => "1/2"
        polynomial_gcf: Polynomial, "GCF(x^3 - x, x^2 - 2x + 1)" => "x - 1"
        polynomial_square_free: Polynomial, "NMR((x+1)^3 (x-2))" => "x^2 - x - 2"
        polynomial_derivative: Polynomial, "DER(1/3x^3 - 1/2x^2)" => "x^2 - x"
        polynomial_power_chain: Polynomial, "2^2^3" => "256"
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    error_tests! {
        natural_underflow: Natural, "3 - 5" => "M0005", (2, 3)
        natural_negative_literal: Natural, "1 + -2" => "M0003", (4, 6)
        integer_division_by_zero: Integer, "1 / (2 - 2)" => "M0002", (2, 3)
        rational_zero_denominator: Rational, "3/0" => "M0001", (0, 3)
        polynomial_exponent: Polynomial, "x^(1/2)" => "M0006", (1, 2)
        natural_huge_shift: Natural, "TM(1, 18446744073709551615)" => "M0007", (0, 27)
        polynomial_huge_power: Polynomial, "x^1000000000" => "M0007", (1, 2)
        unknown_function: Integer, "RED(2)" => "E0002", (0, 3)
        missing_operator: Rational, "1/2 3" => "E0004", (4, 5)
        unmatched_open: Polynomial, "(x + 1" => "E0005", (0, 1)
        unmatched_close: Natural, "1)" => "E0006", (1, 2)
        wrong_arity: Natural, "TM(5)" => "E0008", (0, 5)
    }
}

#[test]
fn empty_input_has_no_result() {
    for domain in Domain::ALL.iter() {
        assert_eq!(evaluate(*domain, "").unwrap(), None);
        assert_eq!(evaluate(*domain, " \t ").unwrap(), None);
    }
}

#[test]
fn math_errors_carry_their_source() {
    match evaluate(Domain::Polynomial, "x % 0") {
        Err(EvaluationError::Math { source, .. }) => assert_eq!(source, MathError::DivisionByZero),
        other => panic!("expected a math error, got {:?}", other),
    }
}

#[test]
fn malformed_errors_carry_their_kind() {
    match evaluate(Domain::Natural, "GCD(1, 2, 3)") {
        Err(EvaluationError::Malformed(malformed)) => assert_eq!(
            malformed.kind,
            MalformedKind::WrongArity {
                function: "GCD".into(),
                expected: 2,
                found: 3,
            }
        ),
        other => panic!("expected a malformed expression, got {:?}", other),
    }
}

#[test]
fn postfix_rendering() {
    let postfix = to_postfix(Domain::Polynomial, "-2x^2 + GCF(x, 1)").unwrap();
    assert_eq!(postfix.to_string(), "2 ~ x 2 ^ * x 1 GCF +");
}
