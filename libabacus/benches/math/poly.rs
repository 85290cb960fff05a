#[macro_use]
extern crate criterion;
extern crate libabacus;

use criterion::{black_box, Criterion};
use libabacus::math::Poly;
use num_traits::One;

/// `(x - 1)^k (x + 2)`
fn repeated_root(k: usize) -> Poly {
    (Poly::x() - Poly::one()).pow(k).unwrap() * (Poly::x() + Poly::one() + Poly::one())
}

macro_rules! bench_poly {
    ($($name:ident: $k:expr)*) => {
        $(
        fn $name(c: &mut Criterion) {
            let p = repeated_root($k);
            c.bench_function(concat!("poly_square_free_", $k), |b| {
                b.iter(|| black_box(&p).square_free().unwrap())
            });
        }
        )*
    }
}

bench_poly! {
    degree_4: 3
    degree_8: 7
    degree_12: 11
}

fn bench_gcd(c: &mut Criterion) {
    let p = repeated_root(6);
    let q = p.derivative();
    c.bench_function("poly_gcd", |b| b.iter(|| black_box(&p).gcd(black_box(&q)).unwrap()));
}

criterion_group!(poly_benches, degree_4, degree_8, degree_12, bench_gcd);
criterion_main!(poly_benches);
