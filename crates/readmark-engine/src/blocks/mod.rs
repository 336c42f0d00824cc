//! # Block Grouping
//!
//! Folds the tokenizer's top-level elements into [`Block`]s, the unit a
//! renderer maps to one view and the unit search results are partitioned by.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockContent`
//! - **`builder`**: `BlockBuilder` fold with offset chaining
//!
//! ## Key Invariants
//!
//! - The first block starts at offset 0
//! - Every later block starts at the previous block's `bounds().end`
//! - Only top-level images and fenced code get their own blocks; nested ones
//!   stay inside their parent's text run

pub mod builder;
pub mod types;

pub use builder::BlockBuilder;
pub use types::{Block, BlockContent};

use crate::{parsing::Element, span::Span};

/// Groups top-level elements into blocks in document order.
pub fn group(elements: Vec<Element>) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for element in elements {
        builder.push(element);
    }
    builder.finish()
}

/// The bounds of each block, in order.
pub fn bounds_of(blocks: &[Block]) -> Vec<Span> {
    blocks.iter().map(Block::bounds).collect()
}
