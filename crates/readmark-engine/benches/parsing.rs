use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use readmark_engine::{Parser, ParserOptions, parse_document};
mod common;

fn bench_parse_article(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for size in [1, 10, 100] {
        let content = common::generate_article(size);
        group.bench_with_input(BenchmarkId::new("article", size), &content, |b, content| {
            b.iter(|| {
                let doc = parse_document(std::hint::black_box(content)).unwrap();
                std::hint::black_box(doc);
            });
        });
    }

    let prose = common::generate_plain_prose(200);
    group.bench_function("plain_prose", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&prose)).unwrap()));
    });

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting");
    group.sample_size(10);

    let parser = Parser::new(ParserOptions {
        max_nesting_depth: 64,
    });
    for depth in [4, 16, 48] {
        let content = common::generate_nested_emphasis(depth);
        group.bench_with_input(BenchmarkId::new("emphasis", depth), &content, |b, content| {
            b.iter(|| std::hint::black_box(parser.parse(std::hint::black_box(content)).unwrap()));
        });
    }

    group.finish();
}

fn bench_many_italics(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_italics");
    group.sample_size(10);

    // Star italics only, so the underscore rule never matches.
    for count in [100, 1_000, 10_000] {
        let content = "*a* ".repeat(count);
        group.bench_with_input(BenchmarkId::new("star", count), &content, |b, content| {
            b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(content)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_article, bench_nesting, bench_many_italics);
criterion_main!(benches);
