//! Benchmark tests for table generation and validation.
//!
//! Run with: cargo bench --bench curve_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use dimcurve::{DimCurve, TABLE_SIZE, check, validate};

fn presets() -> Vec<(&'static str, DimCurve)> {
    vec![
        ("linear", DimCurve::Linear),
        ("gamma", DimCurve::Gamma { gamma: 2.2 }),
        ("exponential", DimCurve::Exponential { rate: 4.0 }),
        ("dali_log", DimCurve::DaliLog),
        (
            "led_low_end_boost",
            DimCurve::LedLowEndBoost {
                gamma: 2.2,
                pwm_min: 40,
            },
        ),
        (
            "led_hybrid",
            DimCurve::LedHybrid {
                threshold: 0.2,
                gamma_low: 3.0,
                gamma_high: 2.2,
            },
        ),
        ("led_s_curve", DimCurve::LedSCurve { gamma: 2.2 }),
    ]
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(TABLE_SIZE as u64));

    for (name, curve) in presets() {
        let mut table = [0u16; TABLE_SIZE];
        group.bench_function(name, |b| {
            b.iter(|| std::hint::black_box(std::hint::black_box(&curve).generate(&mut table)));
        });
    }

    group.finish();
}

fn bench_generate_with_fallback(c: &mut Criterion) {
    let curve = DimCurve::Exponential { rate: f32::NAN };
    let mut table = [0u16; TABLE_SIZE];

    c.bench_function("generate_linear_fallback", |b| {
        b.iter(|| std::hint::black_box(std::hint::black_box(&curve).generate(&mut table)));
    });
}

fn bench_validate(c: &mut Criterion) {
    let table = DimCurve::LedHybrid {
        threshold: 0.2,
        gamma_low: 3.0,
        gamma_high: 2.2,
    }
    .to_table();

    c.bench_function("validate", |b| {
        b.iter(|| std::hint::black_box(validate(std::hint::black_box(&table))));
    });

    c.bench_function("check", |b| {
        b.iter(|| std::hint::black_box(check(std::hint::black_box(&table))));
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_generate_with_fallback,
    bench_validate,
);

criterion_main!(benches);
