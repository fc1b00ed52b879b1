use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prefix_trie::trie::Trie;

fn words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = words(10_000);
    let queries: Vec<&str> = words.iter().map(String::as_str).collect();

    c.bench_function("insert 10k", |b| b.iter(|| {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        trie
    }));

    let mut trie = Trie::new();
    trie.insert_all(&queries).unwrap();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("search", |b| b.iter(|| {
        queries.iter().filter(|word| trie.search(black_box(word)).unwrap()).count()
    }));
    group.bench_function("starts_with", |b| b.iter(|| {
        queries.iter().filter(|word| trie.starts_with(black_box(&word[..2])).unwrap()).count()
    }));
    group.bench_function("search_all (rayon)", |b| b.iter(|| trie.search_all(black_box(&queries))));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
