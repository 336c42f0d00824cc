//! Indented text dump of parsed blocks, for the CLI and for snapshot tests.

use std::fmt::Write;

use crate::{
    blocks::Block,
    parsing::{Element, ElementKind},
};

/// Renders one line per block (`kind start..end`) followed by its element
/// tree, children indented two spaces under their parent. Text is shown
/// debug-escaped so line breaks stay visible.
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        let b = block.bounds();
        let _ = writeln!(out, "{} {}..{}", block.content().name(), b.start, b.end);
        for element in block.content().elements() {
            render_element(&mut out, element, 1);
        }
    }
    out
}

fn render_element(out: &mut String, element: &Element, depth: usize) {
    let _ = writeln!(
        out,
        "{}{} {:?}",
        "  ".repeat(depth),
        label(&element.kind),
        element.text
    );
    for child in &element.children {
        render_element(out, child, depth + 1);
    }
}

fn label(kind: &ElementKind) -> String {
    match kind {
        ElementKind::Header { level } => format!("header({level})"),
        ElementKind::OrderedListItem { order } => format!("ordered_list_item({order})"),
        ElementKind::BlockCode {
            language: Some(language),
        } => format!("block_code({language})"),
        ElementKind::Link { target } => format!("link({target})"),
        ElementKind::Image {
            target,
            alt_text: Some(alt),
        } => format!("image({target}, alt={alt:?})"),
        ElementKind::Image { target, .. } => format!("image({target})"),
        other => other.name().to_string(),
    }
}
