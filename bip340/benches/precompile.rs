//! Point multiplication, verification and precompile benchmarks

use bip340::{
    precompile::SCHNORR_VERIFY_GAS,
    schnorr,
    test_vectors::{bip340::VERIFY_VECTORS, precompile::TestVector},
    Precompile, ProjectivePoint, Scalar, SchnorrVerify,
};
use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use hex_literal::hex;

fn test_scalar_x() -> Scalar {
    Scalar::from_bytes(&hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

fn test_scalar_y() -> Scalar {
    Scalar::from_bytes(&hex!(
        "67e2f68071ed8281e8aed6bcf1c5207c5e633722d920afd6ae22d06eeb8035e3"
    ))
    .unwrap()
}

fn bench_point_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ProjectivePoint::GENERATOR;
    let s = test_scalar_x();
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| &black_box(p) * &black_box(s))
    });
}

fn bench_point_lincomb<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = ProjectivePoint::GENERATOR;
    let q = p.double();
    let s = test_scalar_x();
    let t = test_scalar_y();
    group.bench_function("lincomb", |b| {
        b.iter(|| ProjectivePoint::lincomb(&black_box(p), &black_box(s), &black_box(q), &black_box(t)))
    });
}

fn bench_verify<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let vector = &VERIFY_VECTORS[1];
    group.bench_function("verify", |b| {
        b.iter(|| {
            schnorr::verify(
                black_box(&vector.message),
                black_box(&vector.signature),
                black_box(&vector.public_key),
            )
        })
    });
}

fn bench_precompile_fixture<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let vectors: Vec<TestVector> =
        serde_json::from_str(include_str!("../tests/data/schnorr_verify.json")).unwrap();
    let precompile = SchnorrVerify::default();

    for vector in vectors.iter().filter(|v| !v.no_benchmark) {
        let input = vector.input_bytes().unwrap();
        group.bench_function(vector.name.as_str(), |b| {
            b.iter(|| precompile.run(SCHNORR_VERIFY_GAS, black_box(&input)))
        });
    }
}

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_mul(&mut group);
    bench_point_lincomb(&mut group);
    group.finish();
}

fn bench_precompile(c: &mut Criterion) {
    let mut group = c.benchmark_group("schnorr verification");
    bench_verify(&mut group);
    bench_precompile_fixture(&mut group);
    group.finish();
}

criterion_group!(benches, bench_group, bench_precompile);
criterion_main!(benches);
