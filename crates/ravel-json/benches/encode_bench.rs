use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ravel_http::headers::HeaderMap;
use ravel_json::{Body, JsonBodyWriter};
use serde::Serialize;

#[derive(Serialize)]
struct Todo {
    id: u64,
    title: String,
    done: bool,
}

fn bench_write_to(c: &mut Criterion) {
    let writer = JsonBodyWriter::default();
    let value = Todo {
        id: 42,
        title: "benchmark the body writer".to_string(),
        done: true,
    };

    c.bench_function("write_to_structured", |b| {
        b.iter(|| {
            let mut headers = HeaderMap::new();
            let mut sink = Vec::with_capacity(128);
            writer
                .write_to(&Body::json(black_box(&value)), &mut headers, &mut sink)
                .unwrap();
            sink
        })
    });

    c.bench_function("write_to_text", |b| {
        b.iter(|| {
            let mut headers = HeaderMap::new();
            let mut sink = Vec::with_capacity(128);
            writer
                .write_to(&Body::text(black_box("pre-rendered text")), &mut headers, &mut sink)
                .unwrap();
            sink
        })
    });
}

criterion_group!(benches, bench_write_to);
criterion_main!(benches);
