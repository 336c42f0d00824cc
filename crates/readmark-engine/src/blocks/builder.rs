use crate::parsing::Element;

use super::types::{Block, BlockContent};

/// Folds top-level elements into blocks.
///
/// Inline elements accumulate in an open text run. A top-level image or
/// fenced code element closes the run and becomes a block of its own. Each
/// block starts where the previous one ends.
pub struct BlockBuilder {
    open_text: Vec<Element>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open_text: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, element: Element) {
        if element.is_image() {
            self.flush_text();
            self.push_block(BlockContent::Image(element));
        } else if element.is_block_code() {
            self.flush_text();
            self.push_block(BlockContent::Code(element));
        } else {
            self.open_text.push(element);
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_text();
        self.out
    }

    fn next_offset(&self) -> usize {
        self.out.last().map_or(0, |b| b.bounds().end)
    }

    fn push_block(&mut self, content: BlockContent) {
        let offset = self.next_offset();
        self.out.push(Block::new(content, offset));
    }

    fn flush_text(&mut self) {
        if self.open_text.is_empty() {
            return;
        }
        let elements = std::mem::take(&mut self.open_text);
        self.push_block(BlockContent::Text(elements));
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
