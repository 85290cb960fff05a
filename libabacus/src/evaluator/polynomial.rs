use super::rational::rational_literal;
use super::DomainEvaluator;
use crate::dialect::{Function, Operator};
use crate::math::{MathError, Natural, Poly, Rational};
use crate::postfix::Literal;

pub struct PolynomialEvaluator;

/// Reads a polynomial exponent, which must be a constant non-negative integer.
fn exponent(p: &Poly) -> Result<usize, MathError> {
    if !p.is_constant() {
        return Err(MathError::InvalidExponent);
    }
    match p.leading_coefficient().to_integer() {
        Some(k) if !k.is_negative() => k.magnitude().to_usize(),
        _ => Err(MathError::InvalidExponent),
    }
}

impl DomainEvaluator for PolynomialEvaluator {
    type Value = Poly;

    fn literal(literal: &Literal) -> Result<Poly, MathError> {
        rational_literal(literal).map(Poly::constant)
    }

    fn variable() -> Option<Poly> {
        Some(Poly::x())
    }

    fn negate(value: Poly) -> Result<Poly, MathError> {
        Ok(-value)
    }

    fn binary(op: Operator, lhs: Poly, rhs: Poly) -> Result<Poly, MathError> {
        match op {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => lhs.div(&rhs),
            Operator::Rem => lhs.rem(&rhs),
            Operator::Pow => lhs.pow(exponent(&rhs)?),
            Operator::Compare | Operator::Neg => {
                unreachable!("{} is not a polynomial operator", op)
            }
        }
    }

    /// Numeric results (`LED`, `DEG`, `FAC`) are returned as constant polynomials.
    fn call(function: Function, args: Vec<Poly>) -> Result<Poly, MathError> {
        match (function, args.as_slice()) {
            (Function::Led, [p]) => Ok(Poly::constant(p.leading_coefficient().clone())),
            (Function::Deg, [p]) => Ok(Poly::constant(Rational::from(Natural::from(
                p.degree() as u64,
            )))),
            (Function::Fac, [p]) => Ok(Poly::constant(p.content())),
            (Function::Gcf, [p, q]) => p.gcd(q),
            (Function::Der, [p]) => Ok(p.derivative()),
            (Function::Nmr, [p]) => p.square_free(),
            _ => unreachable!(
                "{:?} is not a polynomial function of {} arguments",
                function,
                args.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::POLYNOMIAL;
    use crate::errors::EvaluationError;
    use crate::evaluator::{evaluate_postfix, PolynomialEvaluator};
    use crate::math::MathError;
    use crate::postfix::to_postfix;

    fn eval(program: &str) -> Result<Option<String>, EvaluationError> {
        let postfix = to_postfix(program, &POLYNOMIAL)?;
        Ok(evaluate_postfix::<PolynomialEvaluator>(&postfix)?.map(|p| p.to_string()))
    }

    macro_rules! polynomial_eval_tests {
        ($($name:ident: $program:expr => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                assert_eq!(eval($program).unwrap().as_deref(), Some($expected));
            }
        )*
        }
    }

    polynomial_eval_tests! {
        difference_of_squares: "(x+1)*(x-1)" => "x^2 - 1"
        implicit_product: "(x+1)(x-1)" => "x^2 - 1"
        degree: "DEG(x^3+2x+1)" => "3"
        power: "(x-1)^2" => "x^2 - 2x + 1"
        power_zero: "(x+5)^0" => "1"
        negated_power: "-x^2 + 1" => "-x^2 + 1"
        fraction_coefficient: "2/3x - 5 - x^3" => "-x^3 + 2/3x - 5"
        quotient: "(x^2 - 1) / (x - 1)" => "x + 1"
        remainder: "(x^2 + 1) % (x - 1)" => "2"
        leading_coefficient: "LED(3x^2 - x)" => "3"
        content: "FAC(2/3x^2 + 4/5x - 6/7)" => "105/2"
        gcf: "GCF(x^2 - 1, x^2 + 2x + 1)" => "x + 1"
        derivative: "DER(x^3 + 2x + 1)" => "3x^2 + 2"
        square_free: "NMR((x-1)^2)" => "x - 1"
        numbers_mix_with_polynomials: "DEG(x^2) * x" => "2x"
        constant: "1/2 + 1/3" => "5/6"
    }

    #[test]
    fn exponent_errors() {
        let math = |program| match eval(program) {
            Err(EvaluationError::Math { source, .. }) => source,
            other => panic!("expected a math error, got {:?}", other),
        };
        assert_eq!(math("x^x"), MathError::InvalidExponent);
        assert_eq!(math("x^(1/2)"), MathError::InvalidExponent);
        assert_eq!(math("x^-1"), MathError::InvalidExponent);
        assert_eq!(math("x / 0"), MathError::DivisionByZero);
    }

    #[test]
    fn huge_exponents_overflow() {
        let programs = [
            "x^1000000000",
            "(x+1)^18446744073709551615",
            "2^99999999999999999999999",
        ];
        for program in &programs {
            let err = eval(program).unwrap_err();
            assert_eq!(err.code(), "M0007", "{}", program);
        }
        assert_eq!(eval("(-1)^1000000001").unwrap().as_deref(), Some("-1"));
    }
}
