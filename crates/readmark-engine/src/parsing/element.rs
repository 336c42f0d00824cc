use serde::Serialize;

/// The kind of a parsed markdown element, with any kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// Literal text that matched no construct.
    Text,
    Bold,
    Italic,
    Strike,
    /// `#`..`######` heading. Headings do not parse their content further.
    Header { level: u8 },
    /// A `> ` line.
    Quote,
    /// A `-`, `*` or `+` list line.
    UnorderedListItem,
    /// A numbered list line. `order` keeps the numeral and its period, e.g. `"12."`.
    OrderedListItem { order: String },
    InlineCode,
    /// Fenced code. `language` is the info string after the opening fence.
    BlockCode { language: Option<String> },
    Link { target: String },
    Image {
        target: String,
        alt_text: Option<String>,
    },
    /// Horizontal rule. Carries no text.
    Rule,
}

impl ElementKind {
    /// Short display name used by outlines and FFI DTOs.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Bold => "bold",
            ElementKind::Italic => "italic",
            ElementKind::Strike => "strike",
            ElementKind::Header { .. } => "header",
            ElementKind::Quote => "quote",
            ElementKind::UnorderedListItem => "unordered_list_item",
            ElementKind::OrderedListItem { .. } => "ordered_list_item",
            ElementKind::InlineCode => "inline_code",
            ElementKind::BlockCode { .. } => "block_code",
            ElementKind::Link { .. } => "link",
            ElementKind::Image { .. } => "image",
            ElementKind::Rule => "rule",
        }
    }
}

/// One node of the parsed markdown tree.
///
/// `text` is the delimiter-stripped payload. For composite kinds (bold,
/// italic, strike, quote, list items) `children` holds the parse of that same
/// text; renderers should prefer `children` when it is non-empty and fall back
/// to `text` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    #[serde(flatten)]
    pub kind: ElementKind,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// A plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, text)
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image { .. })
    }

    pub fn is_block_code(&self) -> bool {
        matches!(self.kind, ElementKind::BlockCode { .. })
    }
}
