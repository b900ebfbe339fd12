use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wsv::{parse, parse_as_jagged_array, parse_non_preserving, to_bytes, to_string, varint};

fn sample_document(rows: usize) -> String {
    let mut lines = Vec::with_capacity(rows);
    for i in 0..rows {
        lines.push(format!(
            "row{i} \"quoted value {i}\" -  \"\" bare{i}  #trailing comment {i}"
        ));
    }
    lines.join("\n")
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for rows in [10, 100, 1000] {
        let input = sample_document(rows);
        group.bench_with_input(BenchmarkId::new("preserving", rows), &input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("non_preserving", rows),
            &input,
            |b, input| {
                b.iter(|| parse_non_preserving(black_box(input)).unwrap());
            },
        );
        group.bench_with_input(BenchmarkId::new("jagged", rows), &input, |b, input| {
            b.iter(|| parse_as_jagged_array(black_box(input)).unwrap());
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let doc = parse(&sample_document(100)).unwrap();
    c.bench_function("serialize_preserving_100", |b| {
        b.iter(|| to_string(black_box(&doc)));
    });
    c.bench_function("serialize_non_preserving_100", |b| {
        b.iter(|| black_box(&doc).serialize_non_preserving());
    });
}

fn benchmark_binary(c: &mut Criterion) {
    let doc = parse(&sample_document(100)).unwrap();
    let bytes = to_bytes(&doc).unwrap();
    c.bench_function("binary_encode_100", |b| {
        b.iter(|| to_bytes(black_box(&doc)).unwrap());
    });
    c.bench_function("binary_decode_100", |b| {
        b.iter(|| wsv::from_bytes(black_box(&bytes)).unwrap());
    });
}

fn benchmark_varint(c: &mut Criterion) {
    let samples: Vec<u64> = (0..56).map(|bit| 1u64 << bit).collect();
    c.bench_function("varint_encode_all_lengths", |b| {
        b.iter(|| {
            for &n in &samples {
                black_box(varint::encode(black_box(n)).unwrap());
            }
        });
    });
    let encoded: Vec<Vec<u8>> = samples.iter().map(|&n| varint::encode(n).unwrap()).collect();
    c.bench_function("varint_decode_all_lengths", |b| {
        b.iter(|| {
            for bytes in &encoded {
                black_box(varint::decode(black_box(bytes), 0).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_binary,
    benchmark_varint
);
criterion_main!(benches);
