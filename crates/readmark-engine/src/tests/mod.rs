//! End-to-end tests across parsing, grouping, plain text and search.

mod invariants;

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use crate::{
    blocks::BlockContent,
    outline,
    parsing::{Element, ElementKind, parse_document},
    search::{SearchOptions, SearchSession, find_matches},
    span::Span,
};

/// Create a temporary library directory
pub fn create_test_library() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test markdown file with content
pub fn create_test_file(library: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = library.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

fn styled(kind: ElementKind, text: &str) -> Element {
    Element::new(kind, text).with_children(vec![Element::text(text)])
}

#[test]
fn title_paragraph_and_image_scenario() {
    let doc =
        parse_document("# Title\n\nSome **bold** and _italic_ text.\n\n![alt](url \"caption\")")
            .unwrap();
    invariants::check_blocks(&doc.blocks);

    assert_eq!(doc.blocks.len(), 3);
    assert_eq!(
        doc.blocks[0].content(),
        &BlockContent::Text(vec![
            Element::new(ElementKind::Header { level: 1 }, "Title"),
            Element::text("\n\n"),
            Element::text("Some "),
            styled(ElementKind::Bold, "bold"),
            Element::text(" and "),
            styled(ElementKind::Italic, "italic"),
            Element::text(" text.\n\n"),
        ])
    );
    assert_eq!(
        doc.blocks[1].content(),
        &BlockContent::Image(Element::new(
            ElementKind::Image {
                target: "url".into(),
                alt_text: Some("alt".into()),
            },
            "caption",
        ))
    );
    // Nothing follows the image, so the trailing text run is empty.
    assert_eq!(
        doc.blocks[2].content(),
        &BlockContent::Text(vec![Element::text("")])
    );

    assert_eq!(doc.blocks[0].bounds(), Span::new(0, 35));
    assert_eq!(doc.blocks[1].bounds(), Span::new(35, 42));
    assert_eq!(doc.blocks[2].bounds(), Span::new(42, 42));
}

#[test]
fn scenario_outline() {
    let doc =
        parse_document("# Title\n\nSome **bold** and _italic_ text.\n\n![alt](url \"caption\")")
            .unwrap();
    insta::assert_snapshot!(outline::render(&doc.blocks), @r#"
    text 0..35
      header(1) "Title"
      text "\n\n"
      text "Some "
      bold "bold"
        text "bold"
      text " and "
      italic "italic"
        text "italic"
      text " text.\n\n"
    image 35..42
      image(url, alt="alt") "caption"
    text 42..42
      text ""
    "#);
}

#[rstest]
#[case("plain words only")]
#[case("numbers 123 and punctuation, fine.")]
#[case("")]
fn text_without_markdown_is_one_text_block(#[case] input: &str) {
    let doc = parse_document(input).unwrap();
    assert_eq!(
        doc.blocks.iter().map(|b| b.content().clone()).collect::<Vec<_>>(),
        vec![BlockContent::Text(vec![Element::text(input)])]
    );
}

#[rstest]
#[case("")]
#[case("# H\n\ntext")]
#[case("```\ncode\n```\n![a](b \"c\")\n```\nmore\n```")]
#[case("![a](b \"c\")![d](e \"f\")")]
#[case("- **a** _b_\n1. ~~c~~ `d`\n> [e](f)\n---\n")]
#[case("unicode: é ü ç ø **ñ** ![ö](p \"ß\")")]
#[case("**unclosed *mixed ~~runs `everywhere")]
fn offsets_chain_and_match_plain_text(#[case] input: &str) {
    let doc = parse_document(input).unwrap();
    invariants::check_blocks(&doc.blocks);
}

#[rstest]
#[case("The cat. The **cat**! ![cat](c.png \"A cat\")", "cat")]
#[case("é é é", "é")]
#[case("nothing here", "zzz")]
#[case("```\nlet x\n```\nx marks", "x")]
fn matches_stay_within_plain_text(#[case] input: &str, #[case] query: &str) {
    let doc = parse_document(input).unwrap();
    let corpus = doc.plain_text();
    let matches = find_matches(&corpus, query, SearchOptions::default());
    invariants::check_matches(&matches, corpus.chars().count());
}

#[test]
fn bold_has_no_asterisks_in_any_leaf() {
    fn leaves(el: &Element, out: &mut Vec<String>) {
        if el.is_leaf() {
            out.push(el.text.clone());
        }
        for child in &el.children {
            leaves(child, out);
        }
    }

    let doc = parse_document("**bold**").unwrap();
    let elements = doc.blocks[0].content().elements();
    let bolds: Vec<_> = elements
        .iter()
        .filter(|e| e.kind == ElementKind::Bold)
        .collect();
    assert_eq!(bolds.len(), 1);
    assert_eq!(bolds[0].text, "bold");

    let mut texts = vec![];
    for el in elements {
        leaves(el, &mut texts);
    }
    assert!(texts.iter().all(|t| !t.contains('*')));
}

#[test]
fn search_highlights_per_block() {
    let doc = parse_document("Find me.\n```\nfind me too\n```\nand Find once more").unwrap();
    let session = SearchSession::new(&doc.blocks, "find", SearchOptions::default());
    assert_eq!(session.len(), 3);
    let highlights = session.block_highlights();
    assert_eq!(highlights.len(), 3);
    assert!(highlights.iter().all(|h| h.len() == 1));
    assert_eq!(highlights[1][0].start, 0);
}
