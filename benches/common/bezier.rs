use criterion::{black_box, Criterion};
use crate::common::samples::CURVES;

pub fn eval(c: &mut Criterion) {
    for (name, curve) in CURVES.iter() {
        c.bench_function(&format!("eval {}", name), |b| {
            b.iter(|| black_box(curve.evaluate(black_box(0.5))))
        });
    }
}

pub fn eval_with(c: &mut Criterion) {
    for (name, curve) in CURVES.iter() {
        let mut buffer = Vec::with_capacity(curve.points().len());
        c.bench_function(&format!("eval_with {}", name), |b| {
            b.iter(|| black_box(curve.evaluate_with(black_box(0.5), &mut buffer)))
        });
    }
}

pub fn sample(c: &mut Criterion) {
    let curve = &CURVES.REFERENCE;
    c.bench_function("sample reference 500", |b| {
        b.iter(|| black_box(curve.sample(black_box(500))))
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    eval_with(c);
    sample(c);
}
