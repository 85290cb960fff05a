#[macro_use]
extern crate criterion;
extern crate libabacus;

use criterion::{black_box, Criterion};
use libabacus::math::Natural;

const INPUT: [(u64, u64); 3] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
];

fn bench_gcd(c: &mut Criterion) {
    let input: Vec<(Natural, Natural)> = INPUT
        .iter()
        .map(|&(u, v)| (Natural::from(u), Natural::from(v)))
        .collect();
    c.bench_function("natural_gcd", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                black_box(black_box(u).gcd(black_box(v)));
            }
        })
    });
}

fn bench_lcm(c: &mut Criterion) {
    let input: Vec<(Natural, Natural)> = INPUT
        .iter()
        .map(|&(u, v)| (Natural::from(u), Natural::from(v)))
        .collect();
    c.bench_function("natural_lcm", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                black_box(black_box(u).lcm(black_box(v)));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_gcd, bench_lcm);
criterion_main!(gcd_benches);
