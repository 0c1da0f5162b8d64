use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use differentiator::symbolic::expression::RealExpression;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| RealExpression::parse(black_box("a * x^2 + sin(x) * ln(x) - exp(x / b)")))
    });
}

fn bench_simplify(c: &mut Criterion) {
    let expression = RealExpression::parse("sin(x)^2 + cos(x)^2 + (a * x + b * x) / x").unwrap();
    c.bench_function("simplify", |b| b.iter(|| black_box(&expression).simplify()));
}

fn bench_nth_derivative(c: &mut Criterion) {
    let expression = RealExpression::parse("sin(x) / cos(x) + x^x").unwrap();
    for order in [1, 3, 5] {
        c.bench_function(&format!("derivative order {}", order), |b| {
            b.iter(|| black_box(&expression).differentiate("x", order))
        });
    }
}

criterion_group!(benches, bench_parse, bench_simplify, bench_nth_derivative);
criterion_main!(benches);
