// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Formatting - Result rendering (grouped and exponential)
// 2. Display Buffer - Raw digit entry and edits
// 3. Calculator - Operator chains through the engine
// 4. Registry - End-to-end key dispatch with events
// ============================================================================

use calculatory::display::format_number;
use calculatory::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    for value in [8.0, 1_234_567.891, 0.1 + 0.2, 6.02214076e23].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, value| {
            b.iter(|| black_box(format_number(*value)))
        });
    }

    group.finish();
}

// ============================================================================
// Display Buffer Benchmarks
// ============================================================================

fn benchmark_buffer_entry(c: &mut Criterion) {
    c.bench_function("buffer_type_and_clear", |b| {
        let mut buffer = DisplayBuffer::scientific();
        b.iter(|| {
            for key in "12345.6789".chars() {
                let _ = buffer.update(black_box(key));
            }
            let _ = buffer.negative();
            buffer.delete();
            let value = buffer.parse_value();
            buffer.clear();
            black_box(value)
        });
    });
}

// ============================================================================
// Calculator Benchmarks
// ============================================================================

fn benchmark_chained_equals(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_equals");

    for presses in [1usize, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::new("add", presses), presses, |b, &presses| {
            b.iter(|| {
                let mut calc = ScientificCalculator::new();
                let _ = calc.update('5');
                let _ = calc.operator(BinaryOperator::Add);
                let _ = calc.update('3');
                for _ in 0..presses {
                    let _ = calc.equal();
                }
                black_box(calc.value())
            });
        });
    }

    group.finish();
}

fn benchmark_scientific_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("scientific_function");

    for function in [
        ScientificFunction::Factorial,
        ScientificFunction::Sin,
        ScientificFunction::Log10,
    ] {
        group.bench_function(function.label(), |b| {
            let mut calc = ScientificCalculator::new();
            b.iter(|| {
                calc.clear();
                let _ = calc.update('9');
                black_box(calc.function(function))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn benchmark_registry_dispatch(c: &mut Criterion) {
    let mut registry = RegistryBuilder::new()
        .build(Arc::new(NoOpEventHandler))
        .expect("standard configuration is valid");

    c.bench_function("registry_convert_length", |b| {
        registry.show(PanelKind::LengthConverter);
        b.iter(|| black_box(registry.press_str("c2.54=")));
    });

    c.bench_function("registry_navigation", |b| {
        b.iter(|| {
            for kind in PanelKind::ALL {
                registry.show(black_box(kind));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_format_number,
    benchmark_buffer_entry,
    benchmark_chained_equals,
    benchmark_scientific_functions,
    benchmark_registry_dispatch,
);
criterion_main!(benches);
