// ============================================================================
// Codec Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Decimal text to canonical value, with and without rounding
// 2. JSON Decode - serde and node-level decoding of number/string inputs
// 3. JSON Encode - Canonical value back to a JSON number literal
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use serde_json::json;
use typed_money::prelude::*;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["42", "42.12", "31.12345", "-123456789.987654321", "1.5e2"] {
        group.bench_with_input(BenchmarkId::new("from_str", input), &input, |b, input| {
            b.iter(|| black_box(input.parse::<FixedDecimal>()));
        });
    }

    group.bench_function("from_number", |b| {
        b.iter(|| black_box(FixedDecimal::<2>::from_number(black_box(31.12345))));
    });

    group.finish();
}

// ============================================================================
// JSON Decode Benchmarks
// ============================================================================

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("serde_number", |b| {
        b.iter(|| black_box(serde_json::from_str::<Net>(black_box("31.12345"))));
    });

    group.bench_function("serde_string", |b| {
        b.iter(|| black_box(serde_json::from_str::<Gross>(black_box("\"42.1234\""))));
    });

    let codec = JsonCodec::default();
    let node = json!("42.1234");
    group.bench_function("node_string", |b| {
        b.iter(|| black_box(codec.decode_nullable::<Gross>(black_box(&node))));
    });

    let body = json!({
        "netWithRounding": 31.12345,
        "grossWithString": "42.1234",
        "notNull": null,
        "nullableValue": null
    });
    group.bench_function("field_decoder", |b| {
        b.iter(|| {
            let mut fields = FieldDecoder::new(black_box(body.as_object().unwrap()));
            let net: Required<Net> = fields.required("netWithRounding");
            let gross: Required<Gross> = fields.required("grossWithString");
            let missing: Required<Net> = fields.required("notNull");
            let nullable: NetNullable = fields.nullable("nullableValue");
            black_box((net, gross, missing, nullable, fields.finish()))
        });
    });

    group.finish();
}

// ============================================================================
// JSON Encode Benchmarks
// ============================================================================

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let gross: Gross = "42.12".parse().unwrap();

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(serde_json::to_string(black_box(&gross))));
    });

    group.bench_function("to_json_number", |b| {
        b.iter(|| black_box(black_box(gross).to_json_number()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_decode, benchmark_encode);
criterion_main!(benches);
