use autocorrectrs::{edit_distance, Config, SuggestionEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Deterministic pseudo-words so runs are comparable
fn generate_words(count: usize) -> Vec<String> {
    const LETTERS: &[u8] = b"etaoinshrdlucmfwyp";
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let len = 3 + (seed % 8) as usize;
            (0..len)
                .map(|i| LETTERS[((seed >> (i * 4)) % LETTERS.len() as u64) as usize] as char)
                .collect()
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");

    for (name, limit) in [("unbounded", None), ("limit_1", Some(1)), ("limit_3", Some(3))] {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(edit_distance(
                    black_box("misspelling"),
                    black_box("mispelings"),
                    limit,
                ))
            })
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let words = generate_words(20_000);
    let config = Config::new(3, 10, false).unwrap();
    let engine = SuggestionEngine::new(&words, config);
    let queries = ["hendrs", "stoat", "rumple", "etaoin"];

    let mut group = c.benchmark_group("lookup");

    group.bench_function("sequential", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(engine.lookup(black_box(q)));
            }
        })
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(engine.par_lookup(black_box(q)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_lookup);
criterion_main!(benches);
