use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shelfview::browse::{filter, BrowseState, FilterCriteria, Selection};
use shelfview::catalog::{Book, Catalog};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

const AUTHORS: usize = 50;
const GENRES: usize = 12;

fn generate_catalog(count: usize) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let words = [
        "river", "night", "garden", "empire", "letters", "winter", "island", "house", "war",
        "stranger", "machine", "ocean", "mirror", "crown",
    ];

    let books = (0..count)
        .map(|i| {
            let title = (0..rng.gen_range(1..5))
                .map(|_| words[rng.gen_range(0..words.len())])
                .collect::<Vec<_>>()
                .join(" ");
            let genres: BTreeSet<String> = (0..rng.gen_range(0..4))
                .map(|_| format!("g{}", rng.gen_range(0..GENRES)))
                .collect();
            Book {
                id: format!("book-{i}"),
                title,
                author: format!("a{}", rng.gen_range(0..AUTHORS)),
                image: format!("covers/{i}.jpg"),
                description: String::new(),
                published: Utc
                    .with_ymd_and_hms(rng.gen_range(1800..2020), 1, 1, 0, 0, 0)
                    .unwrap(),
                genres,
            }
        })
        .collect();

    let authors: BTreeMap<String, String> = (0..AUTHORS)
        .map(|i| (format!("a{i}"), format!("Author {i}")))
        .collect();
    let genres: BTreeMap<String, String> = (0..GENRES)
        .map(|i| (format!("g{i}"), format!("Genre {i}")))
        .collect();

    Catalog::new(books, authors, genres, 36).expect("generated catalog is valid")
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    let criteria = [
        ("unfiltered", FilterCriteria::default()),
        ("title", FilterCriteria::from_form("Night", "any", "any")),
        (
            "combined",
            FilterCriteria::new(
                "garden",
                Selection::Id("a7".to_string()),
                Selection::Id("g3".to_string()),
            ),
        ),
    ];

    for size in [1_000, 10_000, 100_000] {
        let catalog = generate_catalog(size);
        for (name, criteria) in &criteria {
            group.bench_with_input(BenchmarkId::new(*name, size), &catalog, |b, catalog| {
                b.iter(|| filter(black_box(catalog.books()), black_box(criteria)).len())
            });
        }
    }

    group.finish();
}

fn bench_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(2));

    let catalog = generate_catalog(10_000);
    group.bench_function("reveal_all_pages", |b| {
        b.iter(|| {
            let mut state = BrowseState::new(&catalog);
            let mut revealed = state.apply_filter(FilterCriteria::default()).len();
            while let Some(page) = state.show_more() {
                revealed += page.len();
            }
            black_box(revealed)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_paging);
criterion_main!(benches);
