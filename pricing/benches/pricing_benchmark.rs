// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::analytic::black_scholes::{black_scholes_price, black_scholes_price_str};
use pricing::{atmf_straddle_price, DerivativeParameter, OptionType};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_closed_form_pricing);
criterion_main!(benches);

pub fn criterion_closed_form_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Closed-form option pricing");

    let dp = DerivativeParameter::new(100.0, 105.0, 0.5, 0.05, 0.2);
    group.bench_function("black-scholes call", |b| {
        b.iter(|| black_scholes_price(black_box(&dp), black_box(OptionType::Call)))
    });
    group.bench_function("black-scholes put, option type by name", |b| {
        b.iter(|| black_scholes_price_str(black_box(100.0), 105.0, 0.5, 0.05, 0.2, black_box("put")))
    });
    group.bench_function("atmf straddle", |b| {
        b.iter(|| atmf_straddle_price(black_box(100.0), black_box(0.5), 0.05, 0.2))
    });

    group.finish()
}
