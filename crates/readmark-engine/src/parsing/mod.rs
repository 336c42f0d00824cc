//! # Parsing
//!
//! Markdown text in, ordered [`Block`]s out.
//!
//! ## Pipeline
//!
//! 1. **Normalize** line separators to `\n`
//! 2. **Tokenize** (`tokenizer`): scan for the leftmost construct in the
//!    pattern table, emit literal text for the gap before it, recurse into
//!    composite constructs
//! 3. **Group** (`crate::blocks`): fold top-level elements into text, image
//!    and code blocks with character offsets
//!
//! ## Modules
//!
//! - **`element`**: `Element` tree node and `ElementKind`
//! - **`patterns`**: `PatternTable` of recognizers and the combined scanner
//! - **`tokenizer`**: `Tokenizer` recursive descent over the pattern table
//! - **`cursor`**: byte cursor with look-behind used by the emphasis scanner
//! - **`error`**: `ParseError`

pub mod cursor;
pub mod element;
pub mod error;
pub mod patterns;
pub mod tokenizer;

use std::borrow::Cow;

use crate::blocks::{self, Block};

pub use element::{Element, ElementKind};
pub use error::ParseError;
pub use patterns::PatternTable;
pub use tokenizer::{DEFAULT_MAX_NESTING_DEPTH, Tokenizer};

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Composite constructs nested deeper than this are kept as literal text.
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// A parsed article.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

impl ParsedDoc {
    /// Markdown-free text of the whole article; the base for search offsets.
    pub fn plain_text(&self) -> String {
        crate::plain_text::to_plain_text(&self.blocks)
    }
}

/// Parses markdown with a shared pattern table.
pub struct Parser<'t> {
    table: &'t PatternTable,
    options: ParserOptions,
}

impl Parser<'static> {
    pub fn new(options: ParserOptions) -> Self {
        Self::with_table(PatternTable::shared(), options)
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl<'t> Parser<'t> {
    pub fn with_table(table: &'t PatternTable, options: ParserOptions) -> Self {
        Self { table, options }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Tokenizes `text` into top-level elements.
    pub fn parse_elements(&self, text: &str) -> Result<Vec<Element>, ParseError> {
        let text = normalize_line_separators(text);
        Tokenizer::new(self.table, self.options.max_nesting_depth).parse(&text)
    }

    /// Tokenizes and groups `text` into blocks.
    pub fn parse(&self, text: &str) -> Result<ParsedDoc, ParseError> {
        let elements = self.parse_elements(text)?;
        let blocks = blocks::group(elements);
        log::debug!(
            "parsed {} bytes into {} blocks",
            text.len(),
            blocks.len()
        );
        Ok(ParsedDoc { blocks })
    }
}

/// Parses with default options.
pub fn parse_document(text: &str) -> Result<ParsedDoc, ParseError> {
    Parser::default().parse(text)
}

/// Rewrites `\r\n` and lone `\r` as `\n`. Borrows when there is nothing to do.
pub fn normalize_line_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
