#![allow(clippy::suspicious_arithmetic_impl)]
use crate::math::Natural;
use std::ops;

impl<'a, 'b> ops::Add<&'b Natural> for &'a Natural {
    type Output = Natural;

    fn add(self, rhs: &'b Natural) -> Natural {
        // iterate over the longer operand so the shorter one can be zero-extended
        let (long, short) = if self.digits.len() >= rhs.digits.len() {
            (&self.digits, &rhs.digits)
        } else {
            (&rhs.digits, &self.digits)
        };

        let mut digits = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &d) in long.iter().enumerate() {
            let sum = d + short.get(i).copied().unwrap_or(0) + carry;
            digits.push(sum % 10);
            carry = sum / 10;
        }
        if carry != 0 {
            digits.push(carry);
        }

        Natural { digits }
    }
}

forward_binop!(impl Add, add for Natural);

#[cfg(test)]
mod tests {
    macro_rules! natural_test_add {
        ($($name: ident: $lhs:expr, $rhs:expr, $program:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::math::Natural;
                let lhs: Natural = $lhs.parse().unwrap();
                let rhs: Natural = $rhs.parse().unwrap();
                assert_eq!((&lhs + &rhs).to_string(), $program);
                assert_eq!((rhs + lhs).to_string(), $program);
            }
        )*
        }
    }

    mod add {
        natural_test_add! {
            int1: "5", "5", "10"
            int2: "55", "13", "68"
            int3: "5", "15", "20"
            int4: "55555555555555555555555", "5555555555555555", "55555561111111111111110"
            int5: "99999999999999999999999999999999" , "999999999999999999999", "100000000000999999999999999999998"
            int6: "111", "1", "112"
            zero: "0", "0", "0"
            zero_identity: "0", "12345", "12345"
        }
    }
}
