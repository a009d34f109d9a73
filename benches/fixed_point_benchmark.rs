// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - Shifting native numbers into the scaled domain
// 2. Arithmetic - Checked vs. wrapping entry points, same and mixed scales
// 3. Division - Truncating vs. precision-preserving division
// 4. Conversion - Back to native numbers, strings and rust_decimal
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_point::prelude::*;
use std::hint::black_box;

fn s(exponent: i32) -> ScaleExponent {
    ScaleExponent::new(exponent)
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for scale in [-2, -9, -18].iter() {
        group.bench_with_input(BenchmarkId::new("from_int", scale), scale, |b, &scale| {
            b.iter(|| Decimal64::from_value_and_scale(black_box(12_345i64), s(scale)))
        });
    }

    group.bench_function("from_f64", |b| {
        b.iter(|| Decimal64::from_value_and_scale(black_box(123.45f64), s(-4)))
    });

    group.bench_function("from_str", |b| {
        b.iter(|| black_box("-98765.4321").parse::<Decimal64>())
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// Overflow checking cost relative to plain wraparound
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Decimal64::from_scaled(1_234_567, s(-4));
    let b = Decimal64::from_scaled(7_654_321, s(-4));
    let coarse = Decimal64::from_scaled(42, s(-1));

    group.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(a).checked_add(black_box(b)))
    });
    group.bench_function("wrapping_add", |bench| {
        bench.iter(|| black_box(a).wrapping_add(black_box(b)))
    });
    group.bench_function("checked_add_mixed_scale", |bench| {
        bench.iter(|| black_box(a).checked_add(black_box(coarse)))
    });
    group.bench_function("checked_mul", |bench| {
        bench.iter(|| black_box(a).checked_mul(black_box(b)))
    });
    group.bench_function("wrapping_mul", |bench| {
        bench.iter(|| black_box(a).wrapping_mul(black_box(b)))
    });
    group.bench_function("compare_mixed_scale", |bench| {
        bench.iter(|| black_box(a) < black_box(coarse))
    });

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    let a = Decimal64::from_scaled(1_000_000, s(-2));
    let b = Decimal64::from_scaled(3, s(0));
    let config = ArithmeticConfig::new()
        .with_rounding(RoundingMode::HalfAwayFromZero)
        .with_division_guard_digits(6);

    group.bench_function("checked_div", |bench| {
        bench.iter(|| black_box(a).checked_div(black_box(b)))
    });
    group.bench_function("div_with_guard_digits", |bench| {
        bench.iter(|| black_box(a).div_with(black_box(b), &config))
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let whole = Decimal64::from_scaled(12_500, s(-2));
    let fraction = Decimal64::from_scaled(12_345, s(-2));

    group.bench_function("to_i64", |b| b.iter(|| black_box(whole).to::<i64>()));
    group.bench_function("to_f64", |b| b.iter(|| black_box(fraction).to::<f64>()));
    group.bench_function("best_representation", |b| {
        b.iter(|| black_box(fraction).best_representation())
    });
    group.bench_function("to_decimal", |b| b.iter(|| black_box(fraction).to_decimal()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_arithmetic,
    benchmark_division,
    benchmark_conversion
);
criterion_main!(benches);
