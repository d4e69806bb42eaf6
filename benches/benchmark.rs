//! Benchmarks for card_network performance testing.
//!
//! Run with: cargo bench

use card_network::{
    classify, format, inspect, is_luhn_valid, luhn, masked_display, validate, NetworkIdentity,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const AMEX: &str = "378282246310005";
const SWITCH: &str = "633110000000000005";
const UNKNOWN: &str = "1234567890123452";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

/// Classification cost grows with how far down the registry the match is.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, number) in [
        ("visa_first_rule", VISA_16),
        ("amex_fourth_rule", AMEX),
        ("switch_ninth_rule", SWITCH),
        ("unknown_fallback", UNKNOWN),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), number, |b, number| {
            b.iter(|| classify(black_box(number)))
        });
    }

    group.bench_function("empty", |b| b.iter(|| classify(black_box(""))));

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    group.bench_function("visa_16", |b| {
        b.iter(|| validate(black_box(NetworkIdentity::Visa), black_box(VISA_16)))
    });

    group.bench_function("amex_15", |b| {
        b.iter(|| validate(black_box(NetworkIdentity::Amex), black_box(AMEX)))
    });

    group.bench_function("length_reject", |b| {
        b.iter(|| validate(black_box(NetworkIdentity::Amex), black_box(VISA_16)))
    });

    group.finish();
}

fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("digits_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("string_16", |b| {
        b.iter(|| is_luhn_valid(black_box(VISA_16)))
    });

    group.bench_function("string_16_formatted", |b| {
        b.iter(|| is_luhn_valid(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("grouped_visa", |b| {
        b.iter(|| format::grouped_display(black_box(NetworkIdentity::Visa), black_box(VISA_16)))
    });

    group.bench_function("grouped_amex", |b| {
        b.iter(|| format::grouped_display(black_box(NetworkIdentity::Amex), black_box(AMEX)))
    });

    group.bench_function("masked", |b| {
        b.iter(|| masked_display(black_box("****"), black_box(VISA_16)))
    });

    group.finish();
}

/// One full keystroke: classify, validate, group and mask.
fn bench_inspect(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");
    group.throughput(Throughput::Elements(VISA_16.len() as u64));

    group.bench_function("typing_visa", |b| {
        b.iter(|| {
            for end in 1..=VISA_16.len() {
                black_box(inspect(black_box(&VISA_16[..end])));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_validate,
    bench_luhn,
    bench_format,
    bench_inspect,
);
criterion_main!(benches);
