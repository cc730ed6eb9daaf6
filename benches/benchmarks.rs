use std::iter;

use bloomcheck::BloomFilter;
use criterion::Criterion;

fn key(rng: &fastrand::Rng) -> String {
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter<str>, rng: &fastrand::Rng, n: usize) {
    for _ in 0..n {
        bf.insert(&key(rng));
    }
}

fn bench_bloom_filter_insert(c: &mut Criterion) {
    let rng = fastrand::Rng::with_seed(1);

    for n in [1000, 10_000] {
        c.bench_function(&format!("insert-{}", n), |b| {
            let mut bf = BloomFilter::<str>::with_capacity(n).unwrap();

            b.iter(|| bf.insert(&key(&rng)));
        });
    }
}

fn bench_bloom_filter_contains(c: &mut Criterion) {
    let rng = fastrand::Rng::with_seed(2);

    for n in [1000, 10_000] {
        c.bench_function(&format!("contains-{}", n), |b| {
            let mut bf = BloomFilter::<str>::with_capacity(n).unwrap();
            populate(&mut bf, &rng, n);

            b.iter(|| bf.contains(&key(&rng)));
        });
    }
}

fn bench_bloom_filter_strict(c: &mut Criterion) {
    let rng = fastrand::Rng::with_seed(3);

    c.bench_function("contains-strict-10000", |b| {
        let mut bf = BloomFilter::<str>::new(10_000, 1e-6).unwrap();
        populate(&mut bf, &rng, 10_000);

        b.iter(|| bf.contains(&key(&rng)));
    });
}

criterion::criterion_group!(
    benches,
    bench_bloom_filter_insert,
    bench_bloom_filter_contains,
    bench_bloom_filter_strict
);
criterion::criterion_main!(benches);
