use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::Value;
use std::fs;
use std::hint::black_box;
use togedoo::services::{locate_activities, normalize_activity};

fn benchmark_normalize(c: &mut Criterion) {
    // Load the recorded Ungfritid payload
    let fixture_content = fs::read_to_string("tests/fixtures/ungfritid_oslo.json")
        .expect("Failed to read fixture");
    let payload: Value = serde_json::from_str(&fixture_content).expect("Failed to parse fixture");

    // Scale up to a realistic page of results
    let hits: Vec<Value> = locate_activities(&payload)
        .iter()
        .cycle()
        .take(200)
        .cloned()
        .collect();
    let large_payload = serde_json::json!({ "activities": { "hits": hits } });

    let mut group = c.benchmark_group("ungfritid_normalize");

    group.bench_function("locate_and_normalize_200", |b| {
        b.iter(|| {
            locate_activities(black_box(&large_payload))
                .iter()
                .map(|record| normalize_activity(record, "Oslo"))
                .count()
        })
    });

    group.bench_function("normalize_empty_record", |b| {
        let empty = Value::Object(Default::default());
        b.iter(|| normalize_activity(black_box(&empty), "Oslo"))
    });

    group.finish();
}

criterion_group!(benches, benchmark_normalize);
criterion_main!(benches);
