use super::DomainEvaluator;
use crate::dialect::{Function, Operator};
use crate::math::{Integer, MathError, Sign};
use crate::postfix::Literal;
use std::str::FromStr;

pub struct IntegerEvaluator;

impl DomainEvaluator for IntegerEvaluator {
    type Value = Integer;

    fn literal(literal: &Literal) -> Result<Integer, MathError> {
        if literal.denominator.is_some() {
            return Err(MathError::InvalidLiteral(literal.to_string()));
        }
        Integer::from_str(&literal.numerator)
    }

    fn negate(value: Integer) -> Result<Integer, MathError> {
        Ok(-value)
    }

    fn binary(op: Operator, lhs: Integer, rhs: Integer) -> Result<Integer, MathError> {
        match op {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => lhs.div(&rhs),
            Operator::Rem => lhs.rem(&rhs),
            Operator::Pow | Operator::Compare | Operator::Neg => {
                unreachable!("{} is not an integer operator", op)
            }
        }
    }

    fn call(function: Function, args: Vec<Integer>) -> Result<Integer, MathError> {
        match (function, args.as_slice()) {
            (Function::Abs, [a]) => Ok(a.abs()),
            (Function::Poz, [a]) => Ok(Integer::from(match a.sign() {
                Sign::Positive => 1,
                Sign::Zero => 0,
                Sign::Negative => -1,
            })),
            _ => unreachable!(
                "{:?} is not an integer function of {} arguments",
                function,
                args.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::INTEGER;
    use crate::errors::EvaluationError;
    use crate::evaluator::{evaluate_postfix, IntegerEvaluator};
    use crate::postfix::to_postfix;

    fn eval(program: &str) -> Result<Option<String>, EvaluationError> {
        let postfix = to_postfix(program, &INTEGER)?;
        Ok(evaluate_postfix::<IntegerEvaluator>(&postfix)?.map(|n| n.to_string()))
    }

    macro_rules! integer_eval_tests {
        ($($name:ident: $program:expr => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                assert_eq!(eval($program).unwrap().as_deref(), Some($expected));
            }
        )*
        }
    }

    integer_eval_tests! {
        negative_literal: "-5-3" => "-8"
        subtract_negative: "2 - -3" => "5"
        product_signs: "-4 * -5" => "20"
        truncating_division: "-7 / 2" => "-3"
        remainder_follows_dividend: "-7 % 2" => "-1"
        negative_divisor: "7 % -2" => "1"
        negated_group: "-(2 + 3) * 2" => "-10"
        abs: "ABS(3 - 10)" => "7"
        poz_positive: "POZ(12)" => "1"
        poz_zero: "POZ(3 - 3)" => "0"
        poz_negative: "poz(-12)" => "-1"
        zero_is_unsigned: "-0" => "0"
    }
}
