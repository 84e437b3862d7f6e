use criterion::{criterion_group, criterion_main, Criterion};

use passmith::charset::CharacterClass;
use passmith::{generate, GenerationConfig};

fn criterion_benchmark_random_password(c: &mut Criterion) {
    let config = GenerationConfig {
        classes: CharacterClass::ALL.to_vec(),
        exclude_ambiguous: false,
        length: 32,
        memorable: false,
    };

    c.bench_function("random password 32 chars", |b| {
        b.iter(|| generate(&config).unwrap())
    });
}

fn criterion_benchmark_memorable_passphrase(c: &mut Criterion) {
    let config = GenerationConfig {
        classes: Vec::new(),
        exclude_ambiguous: false,
        length: 0,
        memorable: true,
    };

    c.bench_function("memorable passphrase", |b| {
        b.iter(|| generate(&config).unwrap())
    });
}

criterion_group!(
    benches,
    criterion_benchmark_random_password,
    criterion_benchmark_memorable_passphrase
);
criterion_main!(benches);
