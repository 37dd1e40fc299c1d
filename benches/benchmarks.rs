use criterion::{black_box, criterion_group, criterion_main, Criterion};
use float_vector::{decode, encode, utils::generate_random_vectors, Metric, Vector};

fn bench_text(c: &mut Criterion) {
    let vector = generate_random_vectors(768, 1).remove(0);
    let text = vector.to_string();

    c.bench_function("format_768", |b| b.iter(|| black_box(&vector).to_string()));
    c.bench_function("parse_768", |b| {
        b.iter(|| black_box(text.as_str()).parse::<Vector>())
    });
}

fn bench_codec(c: &mut Criterion) {
    let vector = generate_random_vectors(768, 1).remove(0);
    let values = vector.values().unwrap_or_default();
    let bytes = encode(values).unwrap_or_default();

    c.bench_function("encode_768", |b| b.iter(|| encode(black_box(values))));
    c.bench_function("decode_768", |b| b.iter(|| decode(black_box(&bytes))));
}

fn bench_metrics(c: &mut Criterion) {
    let vectors = generate_random_vectors(768, 2);

    for metric in Metric::ALL {
        c.bench_function(&format!("{}_768", metric), |b| {
            b.iter(|| metric.distance(black_box(&vectors[0]), black_box(&vectors[1])))
        });
    }
}

criterion_group!(benches, bench_text, bench_codec, bench_metrics);
criterion_main!(benches);
