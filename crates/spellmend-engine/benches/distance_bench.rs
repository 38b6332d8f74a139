// Criterion benchmarks for spellmend-engine.
//
// Run:
//   cargo bench -p spellmend-engine

use criterion::{Criterion, criterion_group, criterion_main};
use spellmend_engine::{Corrector, Word, distance};

fn load_lines(name: &str) -> Vec<String> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_default()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Single pair distance on typical word lengths.
fn bench_distance_pair(c: &mut Criterion) {
    let query: Vec<char> = "neccessary".chars().collect();
    let candidate: Vec<char> = "necessary".chars().collect();

    c.bench_function("distance_10x9", |b| {
        b.iter(|| std::hint::black_box(distance(&query, &candidate)));
    });
}

/// Full dictionary scan for every fixture misspelling, cache disabled.
fn bench_dictionary_scan(c: &mut Criterion) {
    let dictionary: Vec<Word> = load_lines("dictionary.txt")
        .into_iter()
        .map(Word::from)
        .collect();
    let misspellings = load_lines("misspellings.txt");
    let Ok(corrector) = Corrector::new(dictionary) else {
        eprintln!("[bench_dictionary_scan] dictionary fixture missing -- skipping");
        c.bench_function("dictionary_scan (skipped)", |b| b.iter(|| {}));
        return;
    };

    c.bench_function("correct_fixture_misspellings", |b| {
        b.iter(|| {
            for word in &misspellings {
                corrector.clear_cache();
                let _ = std::hint::black_box(corrector.correct(word));
            }
        });
    });
}

criterion_group!(benches, bench_distance_pair, bench_dictionary_scan);
criterion_main!(benches);
