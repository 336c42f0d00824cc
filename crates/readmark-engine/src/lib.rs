pub mod blocks;
pub mod io;
pub mod outline;
pub mod parsing;
pub mod plain_text;
pub mod search;
pub mod span;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockContent, group};
pub use io::*;
pub use parsing::{
    Element, ElementKind, ParseError, ParsedDoc, Parser, ParserOptions, parse_document,
};
pub use plain_text::{clear_content, to_plain_text};
pub use search::{
    FocusedMatch, SearchMatch, SearchOptions, SearchSession, find_matches, group_by_bounds,
};
pub use span::Span;
