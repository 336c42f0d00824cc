use readmark_engine::{
    BlockContent, ElementKind, Parser, ParserOptions, SearchMatch, SearchOptions, SearchSession,
    Span, blocks::bounds_of, group_by_bounds, parse_document,
};

const ARTICLE: &str = "# Rust for readers

Rust has **ownership** and _borrowing_.

```rust
fn main() { println!(\"rust\"); }
```

![Ferris](ferris.png \"Ferris the crab\")

- Learn rust
- Write ~~C~~ rust
";

#[test]
fn article_blocks() {
    let doc = parse_document(ARTICLE).unwrap();
    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.content().name()).collect();
    assert_eq!(kinds, vec!["text", "code", "text", "image", "text"]);

    match doc.blocks[1].content() {
        BlockContent::Code(el) => {
            assert_eq!(
                el.kind,
                ElementKind::BlockCode {
                    language: Some("rust".into())
                }
            );
            assert_eq!(el.text, "fn main() { println!(\"rust\"); }");
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn offsets_are_monotonic_and_chained() {
    let doc = parse_document(ARTICLE).unwrap();
    assert_eq!(doc.blocks[0].offset(), 0);
    for pair in doc.blocks.windows(2) {
        assert_eq!(pair[1].offset(), pair[0].bounds().end);
    }
    assert_eq!(
        doc.plain_text().chars().count(),
        doc.blocks.last().unwrap().bounds().end
    );
}

#[test]
fn every_search_hit_is_highlighted_in_one_block() {
    let doc = parse_document(ARTICLE).unwrap();
    let session = SearchSession::new(&doc.blocks, "rust", SearchOptions::default());
    let plain = doc.plain_text();

    // Title, paragraph, code body and both list items. The fence language is not text.
    assert_eq!(session.len(), 5, "plain text was {plain:?}");

    let highlighted: usize = session.block_highlights().iter().map(Vec::len).sum();
    assert_eq!(highlighted, session.len());

    let mut s = session.clone();
    for _ in 0..s.len() {
        let focused = s.focused_in_block().unwrap();
        let block = &doc.blocks[focused.block];
        let local: String = block
            .plain_text()
            .chars()
            .skip(focused.local.start)
            .take(focused.local.end - focused.local.start)
            .collect();
        assert_eq!(local.to_lowercase(), "rust");
        s.focus_next();
    }
}

#[test]
fn straddling_match_documented_gap() {
    let bounds = [Span::new(0, 10), Span::new(10, 25)];
    let groups = group_by_bounds(&[SearchMatch::new(8, 12)], &bounds);
    assert!(groups.iter().all(Vec::is_empty));
}

#[test]
fn bounds_helper_matches_blocks() {
    let doc = parse_document("a ![b](c \"d\") e").unwrap();
    assert_eq!(
        bounds_of(&doc.blocks),
        vec![Span::new(0, 2), Span::new(2, 3), Span::new(3, 5)]
    );
}

#[test]
fn custom_depth_parser() {
    let parser = Parser::new(ParserOptions {
        max_nesting_depth: 2,
    });
    let doc = parser.parse("> > > > deep").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.plain_text(), "> deep");
}
