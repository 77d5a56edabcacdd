#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use multimime::Multipart;

fn benchmark_parse(c: &mut Criterion) {
    let message = build_message(64 * 1024);

    c.bench_function("parse_64kb_message", |b| {
        b.iter(|| {
            let parsed = Multipart::parse(&message).expect("message should parse");
            assert_eq!(parsed.parts().len(), 2);
        });
    });
}

fn benchmark_serialize(c: &mut Criterion) {
    let message = build_message(64 * 1024);
    let multipart = Multipart::parse(&message).expect("message should parse");

    c.bench_function("serialize_64kb_message", |b| {
        b.iter(|| {
            let wire = multipart.to_bytes().expect("boundary is valid");
            assert_eq!(wire.len(), message.len());
        });
    });
}

fn build_message(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 256);
    out.extend_from_slice(b"content-type: multipart/mixed; boundary=BOUND\r\n\r\n");
    out.extend_from_slice(b"--BOUND\r\ncontent-type: application/octet-stream\r\n\r\n");
    out.extend(std::iter::repeat(b'x').take(size));
    out.extend_from_slice(b"\r\n--BOUND\r\ncontent-type: text/plain\r\n\r\nsmall field\r\n--BOUND--\r\n");
    out
}

criterion_group!(benches, benchmark_parse, benchmark_serialize);
criterion_main!(benches);
