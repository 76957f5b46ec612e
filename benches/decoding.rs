use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;
use serde_minitoml::{decode, decode_with_options, from_str, DecodeOptions};

#[derive(Deserialize)]
#[allow(dead_code)]
struct Server {
    host: String,
    ports: Vec<u16>,
    limits: Limits,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct Limits {
    connections: u32,
    retries: u32,
}

const SERVER: &str = r#"
# server settings
host = "localhost"
ports = [8000, 8001, 8002]
limits = { connections = 5000, retries = 3 }
"#;

fn flat_document(tables: usize) -> String {
    let mut doc = String::new();
    for i in 0..tables {
        doc.push_str(&format!(
            "[section{i}]\nname = \"entry {i}\"\nid = {i}\nenabled_mask = 255 # bits\n\n"
        ));
    }
    doc
}

fn benchmark_decode_simple(c: &mut Criterion) {
    c.bench_function("decode_simple_document", |b| {
        b.iter(|| decode(black_box(SERVER)))
    });
}

fn benchmark_from_str_simple(c: &mut Criterion) {
    c.bench_function("from_str_simple_struct", |b| {
        b.iter(|| from_str::<Server>(black_box(SERVER)))
    });
}

fn benchmark_decode_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_tables");

    for size in [10, 100, 1000].iter() {
        let doc = flat_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| decode(black_box(doc)))
        });
    }

    group.finish();
}

fn benchmark_decode_wide_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_wide_array");

    for size in [100, 1000, 10_000].iter() {
        let items: Vec<String> = (0..*size).map(|i| i.to_string()).collect();
        let doc = format!("values = [{}]", items.join(", "));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| decode(black_box(doc)))
        });
    }

    group.finish();
}

fn benchmark_decode_deep_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_deep_nesting");
    let options = DecodeOptions::new().with_max_depth(1024);

    for depth in [8, 64, 512].iter() {
        let doc = format!("a = {}1{}", "[".repeat(*depth), "]".repeat(*depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &doc, |b, doc| {
            b.iter(|| decode_with_options(black_box(doc), &options))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decode_simple,
    benchmark_from_str_simple,
    benchmark_decode_tables,
    benchmark_decode_wide_array,
    benchmark_decode_deep_nesting
);
criterion_main!(benches);
