use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dghv::{
    Ciphertext, Parameters, PrivateKey, PublicKey, Source, decrypt, encrypt_with_source, generate_keys_with_source,
    params::presets,
};

fn setup(params: &Parameters) -> (PublicKey, PrivateKey, Source) {
    let mut source: Source = Source::new([0u8; 32]);
    let (pk, sk) = generate_keys_with_source(params, &mut source).unwrap();
    (pk, sk, source)
}

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    group.sample_size(10);
    for params in [presets::tiny(), presets::toy()] {
        let mut source: Source = Source::new([0u8; 32]);
        group.bench_with_input(BenchmarkId::from_parameter(params.gamma()), &params, |b, params| {
            b.iter(|| black_box(generate_keys_with_source(params, &mut source).unwrap()))
        });
    }
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");
    for params in [presets::tiny(), presets::toy()] {
        let (pk, _, mut source) = setup(&params);
        group.bench_with_input(BenchmarkId::from_parameter(params.gamma()), &params, |b, params| {
            b.iter(|| black_box(encrypt_with_source(1, &pk, params, &mut source).unwrap()))
        });
    }
    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");
    for params in [presets::tiny(), presets::toy()] {
        let (pk, sk, mut source) = setup(&params);
        let ct: Ciphertext = encrypt_with_source(1, &pk, &params, &mut source).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(params.gamma()), &params, |b, params| {
            b.iter(|| black_box(decrypt(&ct, &sk, params).unwrap()))
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for params in [presets::tiny(), presets::toy()] {
        let (pk, _, mut source) = setup(&params);
        let a: Ciphertext = encrypt_with_source(1, &pk, &params, &mut source).unwrap();
        let b: Ciphertext = encrypt_with_source(1, &pk, &params, &mut source).unwrap();
        group.bench_function(BenchmarkId::from_parameter(params.gamma()), |bench| {
            bench.iter(|| black_box(pk.mul(&a, &b)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_encrypt, bench_decrypt, bench_mul);
criterion_main!(benches);
