//! Markdown-free text over parsed elements and blocks.
//!
//! Leaves contribute their `text`; composite elements contribute their
//! children's text instead of their own raw payload. The output of
//! [`to_plain_text`] is the corpus search offsets refer to, so its length
//! always equals the end bound of the last block.

use crate::{blocks::Block, parsing::Element};

/// Plain text of one element.
pub fn clear_content(element: &Element) -> String {
    if element.is_leaf() {
        return element.text.clone();
    }
    element.children.iter().map(clear_content).collect()
}

/// Character count of [`clear_content`] without building the string.
pub fn element_len(element: &Element) -> usize {
    if element.is_leaf() {
        return element.text.chars().count();
    }
    element.children.iter().map(element_len).sum()
}

/// Plain text of a whole article.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks.iter().map(Block::plain_text).collect()
}
