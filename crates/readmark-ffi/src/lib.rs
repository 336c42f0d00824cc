//! UniFFI bindings for readmark mobile apps
//!
//! Exposes parsing, block layout and in-article search to the Kotlin
//! reader. Element trees are flattened in pre-order with a depth so the
//! bindings stay free of recursive records.

use readmark_engine::{
    Block, Element, ElementKind, ParsedDoc, SearchMatch, SearchOptions, SearchSession,
    parse_document,
};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Parse error: {reason}")]
    ParseError { reason: String },
}

// ============ Article Handle ============

struct ArticleState {
    doc: ParsedDoc,
    session: Option<SearchSession>,
}

/// A handle to a parsed article and its current search.
#[derive(uniffi::Object)]
pub struct ArticleHandle {
    inner: Mutex<ArticleState>,
}

#[uniffi::export]
impl ArticleHandle {
    /// Parse an article from markdown content.
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Result<Self, FfiError> {
        let doc = parse_document(&content).map_err(|e| FfiError::ParseError {
            reason: e.to_string(),
        })?;
        log::debug!("article parsed into {} blocks", doc.blocks.len());

        Ok(Self {
            inner: Mutex::new(ArticleState { doc, session: None }),
        })
    }

    /// Markdown-free text of the whole article.
    pub fn plain_text(&self) -> String {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.doc.plain_text()
    }

    /// Blocks in display order.
    pub fn blocks(&self) -> Vec<BlockDto> {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.doc.blocks.iter().map(BlockDto::from_engine).collect()
    }

    /// Run a case-insensitive search, replacing any previous one. The first
    /// match is focused.
    pub fn search(&self, query: String) -> SearchResultsDto {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let session = SearchSession::new(&state.doc.blocks, &query, SearchOptions::default());
        let results = SearchResultsDto::from_session(&session);
        state.session = Some(session);
        results
    }

    /// Move focus to the next match, wrapping at the end.
    pub fn focus_next(&self) -> Option<SearchResultsDto> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let session = state.session.as_mut()?;
        session.focus_next();
        Some(SearchResultsDto::from_session(session))
    }

    /// Move focus to the previous match, wrapping at the start.
    pub fn focus_previous(&self) -> Option<SearchResultsDto> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let session = state.session.as_mut()?;
        session.focus_previous();
        Some(SearchResultsDto::from_session(session))
    }

    /// Drop the current search.
    pub fn clear_search(&self) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.session = None;
    }
}

// ============ DTOs ============

/// A renderable block of an article.
#[derive(Debug, uniffi::Record)]
pub struct BlockDto {
    /// "text", "image" or "code"
    pub kind: String,
    /// Start of the block in the article's plain text, in characters
    pub offset: u64,
    /// End of the block in the article's plain text, in characters
    pub end: u64,
    /// The block's element trees, flattened in pre-order
    pub elements: Vec<ElementDto>,
}

impl BlockDto {
    fn from_engine(block: &Block) -> Self {
        let mut elements = Vec::new();
        for el in block.content().elements() {
            ElementDto::flatten(el, 0, &mut elements);
        }
        let bounds = block.bounds();
        Self {
            kind: block.content().name().to_string(),
            offset: bounds.start as u64,
            end: bounds.end as u64,
            elements,
        }
    }
}

/// One element of a flattened tree. An element's children are the
/// following entries with `depth` one greater, up to the next entry whose
/// depth is not greater than its own.
#[derive(Debug, uniffi::Record)]
pub struct ElementDto {
    /// Element type, e.g. "text", "bold", "header", "image"
    pub kind: String,
    /// Delimiter-stripped text
    pub text: String,
    /// Nesting depth, 0 for top-level elements
    pub depth: u32,
    /// Header level (1-6) if this is a header, 0 otherwise
    pub heading_level: u8,
    /// Numeral of an ordered list item, e.g. "3."
    pub list_marker: Option<String>,
    /// Info string of a code block
    pub language: Option<String>,
    /// Link or image target
    pub target: Option<String>,
    /// Image alt text
    pub alt_text: Option<String>,
}

impl ElementDto {
    fn flatten(el: &Element, depth: u32, out: &mut Vec<ElementDto>) {
        let mut dto = ElementDto {
            kind: el.kind.name().to_string(),
            text: el.text.clone(),
            depth,
            heading_level: 0,
            list_marker: None,
            language: None,
            target: None,
            alt_text: None,
        };
        match &el.kind {
            ElementKind::Header { level } => dto.heading_level = *level,
            ElementKind::OrderedListItem { order } => dto.list_marker = Some(order.clone()),
            ElementKind::BlockCode { language } => dto.language = language.clone(),
            ElementKind::Link { target } => dto.target = Some(target.clone()),
            ElementKind::Image { target, alt_text } => {
                dto.target = Some(target.clone());
                dto.alt_text = alt_text.clone();
            }
            _ => {}
        }
        out.push(dto);
        for child in &el.children {
            Self::flatten(child, depth + 1, out);
        }
    }
}

/// A match interval relative to the start of its block.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct HighlightDto {
    pub block: u32,
    pub start: u64,
    pub end: u64,
}

impl HighlightDto {
    fn new(block: usize, local: SearchMatch) -> Self {
        Self {
            block: block as u32,
            start: local.start as u64,
            end: local.end as u64,
        }
    }
}

/// State of a search after a query or a focus move.
#[derive(Debug, uniffi::Record)]
pub struct SearchResultsDto {
    pub query: String,
    /// Number of matches in the plain text
    pub total: u32,
    /// Index of the focused match, if any
    pub focused_index: Option<u32>,
    /// The focused match, if it lies inside a single block
    pub focused: Option<HighlightDto>,
    /// Every match that lies inside a single block
    pub highlights: Vec<HighlightDto>,
}

impl SearchResultsDto {
    fn from_session(session: &SearchSession) -> Self {
        let highlights = session
            .block_highlights()
            .into_iter()
            .enumerate()
            .flat_map(|(block, group)| {
                group
                    .into_iter()
                    .map(move |local| HighlightDto::new(block, local))
            })
            .collect();

        Self {
            query: session.query().to_string(),
            total: session.len() as u32,
            focused_index: session.focused_index().map(|i| i as u32),
            focused: session
                .focused_in_block()
                .map(|f| HighlightDto::new(f.block, f.local)),
            highlights,
        }
    }
}

// ============ Standalone Functions ============

/// Plain text of a markdown string, without keeping a handle.
#[uniffi::export]
pub fn parse_plain_text(content: String) -> Result<String, FfiError> {
    parse_document(&content)
        .map(|doc| doc.plain_text())
        .map_err(|e| FfiError::ParseError {
            reason: e.to_string(),
        })
}

/// Route engine logs to logcat. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("Readmark"),
        );
    }
}
