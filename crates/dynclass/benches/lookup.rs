// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::missing_panics_doc)] // Benches panic on failure

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dynclass::{Schema, TypeSynthesizer, TypeTag, Value};

fn order_schema() -> Schema {
    Schema::builder()
        .field("Id", TypeTag::I64)
        .string_field("Customer")
        .field("Total", TypeTag::F64)
        .field("Paid", TypeTag::Bool)
        .build()
        .expect("valid schema")
}

// ============================================================================
// Cache Benchmarks
// ============================================================================

/// Benchmark: get_or_create on a warm cache (read path only)
fn bench_cache_hit(c: &mut Criterion) {
    let synth = TypeSynthesizer::new();
    let schema = order_schema();
    let _ = synth.get_or_create(&schema);

    c.bench_function("get_or_create_hit", |b| {
        b.iter(|| black_box(synth.get_or_create(black_box(&schema))));
    });
}

/// Benchmark: get_or_create on a cold cache (write path + synthesis)
fn bench_cache_miss(c: &mut Criterion) {
    let schema = order_schema();

    c.bench_function("get_or_create_miss", |b| {
        b.iter_batched(
            TypeSynthesizer::new,
            |synth| black_box(synth.get_or_create(&schema)),
            BatchSize::SmallInput,
        );
    });
}

// ============================================================================
// Instance Benchmarks
// ============================================================================

/// Benchmark: hash_code over four slots
fn bench_hash_code(c: &mut Criterion) {
    let synth = TypeSynthesizer::new();
    let desc = synth.get_or_create(&order_schema());
    let inst = desc
        .construct([
            Value::from(7i64),
            Value::from("ACME"),
            Value::from(99.5f64),
            Value::from(true),
        ])
        .expect("construct");

    c.bench_function("instance_hash_code", |b| {
        b.iter(|| black_box(inst.hash_code()));
    });
}

criterion_group!(benches, bench_cache_hit, bench_cache_miss, bench_hash_code);
criterion_main!(benches);
