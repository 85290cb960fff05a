//! Property-based tests for the numeric kernel.

use libabacus::math::{Integer, Natural, Poly, Rational};
use num_traits::{One, Zero};
use proptest::prelude::*;

fn natural() -> impl Strategy<Value = Natural> {
    "[0-9]{1,40}".prop_map(|digits| digits.parse().unwrap())
}

fn nonzero_natural() -> impl Strategy<Value = Natural> {
    natural().prop_filter("divisor must be non-zero", |n| !n.is_zero())
}

fn integer() -> impl Strategy<Value = Integer> {
    (any::<bool>(), natural()).prop_map(|(negative, magnitude)| Integer::new(negative, magnitude))
}

fn nonzero_integer() -> impl Strategy<Value = Integer> {
    integer().prop_filter("divisor must be non-zero", |n| !n.is_zero())
}

fn rational() -> impl Strategy<Value = Rational> {
    (-1000i64..1000, 1u64..1000)
        .prop_map(|(n, d)| Rational::new(Integer::from(n), Natural::from(d)).unwrap())
}

// Polynomials of degree 0-4 with small rational coefficients.
fn poly() -> impl Strategy<Value = Poly> {
    proptest::collection::vec(rational(), 1..=5).prop_map(Poly::from_coefficients)
}

proptest! {
    #[test]
    fn natural_matches_machine_arithmetic(a in any::<u32>(), b in any::<u32>()) {
        let (na, nb) = (Natural::from(a as u64), Natural::from(b as u64));
        prop_assert_eq!((&na + &nb).to_string(), (a as u64 + b as u64).to_string());
        prop_assert_eq!((&na * &nb).to_string(), (a as u64 * b as u64).to_string());
        prop_assert_eq!(na.cmp(&nb), a.cmp(&b));
    }

    #[test]
    fn natural_division_identity(a in natural(), b in nonzero_natural()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&b * &q + r, a);
    }

    #[test]
    fn natural_gcd_divides_both(a in nonzero_natural(), b in nonzero_natural()) {
        let g = a.gcd(&b);
        prop_assert!(a.rem(&g).unwrap().is_zero());
        prop_assert!(b.rem(&g).unwrap().is_zero());
        prop_assert_eq!(&g * &a.lcm(&b), &a * &b);
    }

    #[test]
    fn integer_division_identity(a in integer(), b in nonzero_integer()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r.magnitude() < b.magnitude());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert_eq!(&b * &q + r, a);
    }

    #[test]
    fn integer_add_sub_inverse(a in integer(), b in integer()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn reduce_is_idempotent(q in rational()) {
        let reduced = q.reduce();
        prop_assert_eq!(reduced.reduce().to_string(), reduced.to_string());
        prop_assert!(reduced.numerator().magnitude().gcd(reduced.denominator()).is_one()
            || reduced.is_zero());
    }

    #[test]
    fn rational_field_laws(q in rational()) {
        prop_assert_eq!((&q + &(-&q)).to_string(), "0");
        if !q.is_zero() {
            prop_assert_eq!((&q * &q.recip().unwrap()).to_string(), "1");
        }
    }

    #[test]
    fn polynomial_division_identity(p in poly(), d in poly()) {
        prop_assume!(!d.is_zero());
        let (q, r) = p.div_rem(&d).unwrap();
        prop_assert!(r.is_zero() || r.degree() < d.degree());
        prop_assert_eq!(&d * &q + r, p);
    }

    #[test]
    fn polynomial_gcd_is_monic_common_divisor(a in poly(), b in poly()) {
        prop_assume!(!a.is_zero() && !b.is_zero());
        let g = a.gcd(&b).unwrap();
        prop_assert!(g.leading_coefficient().is_one());
        prop_assert!(a.rem(&g).unwrap().is_zero());
        prop_assert!(b.rem(&g).unwrap().is_zero());
    }

    #[test]
    fn square_free_drops_repeated_factor(p in poly()) {
        prop_assume!(!p.is_constant());
        let squared = p.pow(2).unwrap();
        let reduced = squared.square_free().unwrap();
        prop_assert!(reduced.degree() <= p.degree());
        prop_assert!(squared.rem(&reduced).unwrap().is_zero());
    }
}

#[test]
fn square_free_of_repeated_root() {
    let p = (Poly::x() - Poly::one()).pow(2).unwrap();
    let reduced = p.square_free().unwrap();
    assert_eq!(reduced.degree(), 1);
    assert!(reduced.evaluate_at(&Rational::one()).is_zero());
}
