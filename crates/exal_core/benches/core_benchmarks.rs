//! Criterion benchmarks for exal_core numerical primitives.
//!
//! Measures the normal CDF, the scaled error function on both sides of its
//! asymptotic switch, and bisection under both tolerance modes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exal_core::math::solvers::{BisectionSolver, SolverConfig};
use exal_core::math::special::{erfcx, norm_cdf};

/// Benchmark special function evaluation.
fn bench_special_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("special_functions");

    for x in [-3.0_f64, 0.0, 3.0] {
        group.bench_with_input(BenchmarkId::new("norm_cdf", x), &x, |b, &x| {
            b.iter(|| norm_cdf(black_box(x)));
        });
    }

    for x in [1.0_f64, 25.0, 70.0] {
        group.bench_with_input(BenchmarkId::new("erfcx", x), &x, |b, &x| {
            b.iter(|| erfcx(black_box(x)));
        });
    }

    group.finish();
}

/// Benchmark bisection root finding.
fn bench_bisection(c: &mut Criterion) {
    let mut group = c.benchmark_group("bisection");

    let relative = BisectionSolver::new(SolverConfig::default());
    group.bench_function("relative_machine_precision", |b| {
        b.iter(|| {
            relative
                .find_root(|g: f64| erfcx(g / std::f64::consts::SQRT_2) - 0.5, 0.0, 100.0)
                .unwrap()
        });
    });

    let absolute = BisectionSolver::new(SolverConfig::absolute(1e-8, 10_000_000));
    group.bench_function("absolute_1e-8", |b| {
        b.iter(|| {
            absolute
                .find_root(|x: f64| norm_cdf(x) - black_box(0.975), -5.0, 5.0)
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_special_functions, bench_bisection);
criterion_main!(benches);
