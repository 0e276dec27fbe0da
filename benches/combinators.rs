use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nilo::{codec, Optional};

fn benchmark_combinator_chain(c: &mut Criterion) {
    c.bench_function("combinator_chain", |b| {
        b.iter(|| {
            black_box(Optional::of(black_box(42u64)))
                .filter(|v| v % 2 == 0)
                .map(|v| v * 3)
                .and_then(|v| if v > 100 { Optional::of(v) } else { Optional::empty() })
                .or_else(0)
        })
    });
}

fn benchmark_get_or_insert(c: &mut Criterion) {
    c.bench_function("get_or_insert_with", |b| {
        b.iter(|| {
            let mut slot: Optional<Vec<u8>> = Optional::empty();
            slot.get_or_insert_with(|| Vec::with_capacity(16)).push(1);
            black_box(slot)
        })
    });
}

fn benchmark_json_round_trip(c: &mut Criterion) {
    let value = Optional::of(vec!["alpha".to_string(), "beta".to_string()]);
    let encoded = codec::to_json(&value).unwrap();

    c.bench_function("json_encode", |b| {
        b.iter(|| black_box(codec::to_json(black_box(&value)).unwrap()))
    });

    c.bench_function("json_decode", |b| {
        b.iter(|| black_box(codec::from_json::<Vec<String>>(black_box(&encoded)).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_combinator_chain,
    benchmark_get_or_insert,
    benchmark_json_round_trip
);
criterion_main!(benches);
