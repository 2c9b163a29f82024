use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_gs1::{decode, decode_batch};

const PARENTHESIZED: &str = "(01)12345678901231(15)251231(10)LOT99(21)SERIAL0001";
const ELEMENT_STRING: &str = "]d20112345678901231\u{1d}10LOT99\u{1d}3103000250\u{1d}15251231";
const CORRUPTED: &str = "]C1##0112345678901231??15251231!!";

fn bench_decode_parenthesized(c: &mut Criterion) {
    c.bench_function("decode_parenthesized", |b| {
        b.iter(|| decode(black_box(PARENTHESIZED)))
    });
}

fn bench_decode_element_string(c: &mut Criterion) {
    c.bench_function("decode_element_string", |b| {
        b.iter(|| decode(black_box(ELEMENT_STRING)))
    });
}

fn bench_decode_digit_scan(c: &mut Criterion) {
    c.bench_function("decode_digit_scan", |b| {
        b.iter(|| decode(black_box(CORRUPTED)))
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let payloads: Vec<&str> = [PARENTHESIZED, ELEMENT_STRING, CORRUPTED]
        .iter()
        .cycle()
        .take(3000)
        .copied()
        .collect();
    c.bench_function("decode_batch_3000", |b| {
        b.iter(|| decode_batch(black_box(&payloads)))
    });
}

criterion_group!(
    benches,
    bench_decode_parenthesized,
    bench_decode_element_string,
    bench_decode_digit_scan,
    bench_decode_batch
);
criterion_main!(benches);
