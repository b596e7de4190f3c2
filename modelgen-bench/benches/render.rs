//! Rendering benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use modelgen_bench::input_model_json;
use modelgen_codegen::{RustGenerator, RustOptions};
use modelgen_schema::parse_input_model;
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let json = input_model_json(100);

    c.bench_function("parse_input_model_100", |b| {
        b.iter(|| parse_input_model(black_box(&json)))
    });
}

fn benchmark_render_single(c: &mut Criterion) {
    let input = parse_input_model(&input_model_json(2)).expect("Failed to parse fixture");
    let generator = RustGenerator::new(RustOptions::default().with_initializer(true));
    let Some(model) = input.get("Model1") else {
        return;
    };

    c.bench_function("render_complete_model", |b| {
        b.iter(|| generator.render_complete_model(black_box(model), &input).result.len())
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_complete_models");
    let generator = RustGenerator::default();

    for count in [10, 100, 1000] {
        let input = parse_input_model(&input_model_json(count)).expect("Failed to parse fixture");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| generator.generate_complete_models(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_render_single,
    benchmark_generate
);
criterion_main!(benches);
