//! Inline and fenced constructs, plus field extraction for links and images.
//!
//! Links and images are matched as a whole first. Their fields are pulled out
//! afterwards by a second, fully anchored pattern that must stay in sync with
//! the first one; a mismatch between the two is a bug, not bad input.

use std::sync::OnceLock;

use regex::Regex;

use super::{ConstructKind, regex_rule::RegexRule};

pub const INLINE_CODE: &str = r"`(?P<inner>[^`\n]+)`";
pub const LINK: &str = r"\[[^\]\n]*\]\([^)\s]*\)";
pub const IMAGE: &str = r#"!\[[^\]\n]*\]\([^)\s]+ "[^"\n]*"\)"#;
/// Opening fence at a line start with an optional info string, closing fence
/// alone at a line start. The body may be empty.
pub const BLOCK_CODE: &str = r"(?ms)^```(?P<marker>[^`\n]*)\n(?:(?P<inner>.*?)\n)?```$";

const LINK_FIELDS: &str = r"^\[(?P<title>[^\]\n]*)\]\((?P<url>[^)\s]*)\)$";
const IMAGE_FIELDS: &str = r#"^!\[(?P<alt>[^\]\n]*)\]\((?P<url>[^)\s]+) "(?P<title>[^"\n]*)"\)$"#;

/// Inline recognizers in priority order.
pub fn recognizers() -> Vec<RegexRule> {
    vec![
        RegexRule::new(ConstructKind::InlineCode, INLINE_CODE),
        RegexRule::new(ConstructKind::Link, LINK),
        RegexRule::new(ConstructKind::Image, IMAGE),
        RegexRule::new(ConstructKind::BlockCode, BLOCK_CODE),
    ]
}

fn link_fields() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINK_FIELDS).expect("link field pattern should always compile"))
}

fn image_fields() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(IMAGE_FIELDS).expect("image field pattern should always compile")
    })
}

/// Fields of `[title](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

impl<'a> LinkParts<'a> {
    pub fn extract(fragment: &'a str) -> Option<Self> {
        let caps = link_fields().captures(fragment)?;
        Some(Self {
            title: caps.name("title")?.as_str(),
            url: caps.name("url")?.as_str(),
        })
    }
}

/// Fields of `![alt](url "title")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParts<'a> {
    /// `None` when the brackets are empty.
    pub alt: Option<&'a str>,
    pub url: &'a str,
    pub title: &'a str,
}

impl<'a> ImageParts<'a> {
    pub fn extract(fragment: &'a str) -> Option<Self> {
        let caps = image_fields().captures(fragment)?;
        let alt = caps.name("alt")?.as_str();
        Some(Self {
            alt: (!alt.is_empty()).then_some(alt),
            url: caps.name("url")?.as_str(),
            title: caps.name("title")?.as_str(),
        })
    }
}
