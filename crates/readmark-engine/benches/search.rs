use criterion::{Criterion, criterion_group, criterion_main};
use readmark_engine::{SearchOptions, SearchSession, find_matches, parse_document};
mod common;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let doc = parse_document(&common::generate_article(100)).unwrap();
    let corpus = doc.plain_text();

    group.bench_function("find_matches", |b| {
        b.iter(|| {
            let matches = find_matches(
                std::hint::black_box(&corpus),
                "section",
                SearchOptions::default(),
            );
            std::hint::black_box(matches);
        });
    });

    group.bench_function("session_highlights", |b| {
        b.iter(|| {
            let session = SearchSession::new(&doc.blocks, "caption", SearchOptions::default());
            std::hint::black_box(session.block_highlights());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
