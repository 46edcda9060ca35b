use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recase::{CaseConverter, Scheme};

fn bench_convert(c: &mut Criterion) {
    let converter = CaseConverter::default();
    let input = "The_quick brown-fox  jumps over__the lazy-dog";

    for scheme in Scheme::ALL {
        c.bench_function(&format!("convert_{}", scheme), |b| {
            b.iter(|| converter.convert(black_box(input), scheme))
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let converter = CaseConverter::default();
    let inputs: Vec<String> = (0..10_000)
        .map(|i| format!("Batch_input number-{} with  words", i))
        .collect();

    c.bench_function("convert_batch_kebab", |b| {
        b.iter(|| converter.convert_batch(black_box(&inputs), Scheme::Kebab))
    });
}

criterion_group!(benches, bench_convert, bench_batch);
criterion_main!(benches);
