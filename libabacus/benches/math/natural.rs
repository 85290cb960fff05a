#[macro_use]
extern crate criterion;
extern crate libabacus;

use criterion::{black_box, Criterion};
use libabacus::math::Natural;

fn input() -> Vec<(Natural, Natural)> {
    [
        (
            "99999999999999999999999999999999",
            "999999999999999999999",
        ),
        ("123456789012345678901234567890", "987654321"),
        ("100000000000000000000000000000000000001", "3"),
    ]
    .iter()
    .map(|(u, v)| (u.parse().unwrap(), v.parse().unwrap()))
    .collect()
}

macro_rules! bench_natural {
    ($($name:ident: $op:expr)*) => {
        $(
        fn $name(c: &mut Criterion) {
            let input = input();
            c.bench_function(concat!("natural_", stringify!($name)), |b| {
                b.iter(|| {
                    for (u, v) in input.iter() {
                        let f: fn(&Natural, &Natural) -> Natural = $op;
                        black_box(f(black_box(u), black_box(v)));
                    }
                })
            });
        }
        )*
    }
}

bench_natural! {
    add: |u, v| u + v
    sub: |u, v| u.checked_sub(v).unwrap()
    mul: |u, v| u * v
    div: |u, v| u.div(v).unwrap()
    rem: |u, v| u.rem(v).unwrap()
}

criterion_group!(natural_benches, add, sub, mul, div, rem);
criterion_main!(natural_benches);
