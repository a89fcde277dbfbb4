//! Primitive decoder benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexed_codec::{interpret, parse_hex_bytes, PrimitiveDecoder, Selection};

/// Benchmark decoding every primitive from contiguous bytes.
fn bench_interpret_contiguous(c: &mut Criterion) {
    let selection = Selection::from(&[0xEF, 0xBE, 0xAD, 0xDE, 0x01, 0x02, 0x03, 0x04][..]);

    c.bench_function("interpret_contiguous", |b| {
        b.iter(|| black_box(interpret(black_box(&selection))));
    });
}

/// Benchmark decoding from a ragged selection with gaps.
fn bench_interpret_ragged(c: &mut Criterion) {
    let selection = Selection::from_optional_rows(vec![
        Some(vec![0xEF]),
        None,
        Some(vec![0xBE, 0xAD]),
        None,
        Some(vec![0xDE, 0x00]),
        Some(vec![0x00, 0x00, 0x00]),
    ]);

    c.bench_function("interpret_ragged", |b| {
        b.iter(|| black_box(interpret(black_box(&selection))));
    });
}

/// Benchmark a single typed decode.
fn bench_decode_u32(c: &mut Criterion) {
    let decoder = PrimitiveDecoder::from_bytes([0xEF, 0xBE, 0xAD, 0xDE]);

    c.bench_function("decode_u32", |b| {
        b.iter(|| black_box(black_box(&decoder).decode_u32().unwrap()));
    });
}

/// Benchmark hex text parsing.
fn bench_parse_hex(c: &mut Criterion) {
    let text = "DE AD BE EF ".repeat(64);

    c.bench_function("parse_hex_256", |b| {
        b.iter(|| black_box(parse_hex_bytes(black_box(&text)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_interpret_contiguous,
    bench_interpret_ragged,
    bench_decode_u32,
    bench_parse_hex,
);

criterion_main!(benches);
