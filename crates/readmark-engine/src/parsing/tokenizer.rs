use super::{
    element::{Element, ElementKind},
    error::ParseError,
    patterns::{
        ConstructKind, ConstructMatch, PatternTable,
        inline::{ImageParts, LinkParts},
    },
};

/// Default cap on nested constructs before the remainder is kept as literal text.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Recursive tokenizer turning markdown into a flat sequence of elements,
/// each composite element carrying the parse of its own content.
pub struct Tokenizer<'t> {
    table: &'t PatternTable,
    max_depth: usize,
}

impl<'t> Tokenizer<'t> {
    pub fn new(table: &'t PatternTable, max_depth: usize) -> Self {
        Self { table, max_depth }
    }

    /// Parses `text` into elements covering all of it.
    ///
    /// Unmatched delimiters stay literal text. The last element is always a
    /// Text element for whatever follows the final construct, even when that
    /// is empty.
    pub fn parse(&self, text: &str) -> Result<Vec<Element>, ParseError> {
        self.parse_at_depth(text, 0)
    }

    fn parse_at_depth(&self, text: &str, depth: usize) -> Result<Vec<Element>, ParseError> {
        if depth > self.max_depth {
            log::warn!(
                "nesting deeper than {} levels, keeping {} bytes as literal text",
                self.max_depth,
                text.len()
            );
            return Ok(vec![Element::text(text)]);
        }

        let mut out = Vec::new();
        let mut scanner = self.table.scanner(text);
        let mut cursor = 0;
        let mut after_line = false;

        while let Some(m) = scanner.next_match(cursor) {
            if cursor < m.full.start {
                push_gap(&mut out, &text[cursor..m.full.start], after_line);
            }
            out.push(self.build(text, &m, depth)?);
            after_line = m.kind.is_line_anchored();
            cursor = m.full.end;
        }
        push_gap(&mut out, &text[cursor..], after_line);

        Ok(out)
    }

    fn build(&self, text: &str, m: &ConstructMatch, depth: usize) -> Result<Element, ParseError> {
        let inner = &text[m.inner.clone()];
        let marker = m.marker.clone().map(|r| &text[r]);

        let kind = match m.kind {
            ConstructKind::UnorderedListItem => ElementKind::UnorderedListItem,
            ConstructKind::OrderedListItem => ElementKind::OrderedListItem {
                order: marker.unwrap_or_default().to_string(),
            },
            ConstructKind::Header => ElementKind::Header {
                level: marker.map_or(1, |hashes| hashes.len() as u8),
            },
            ConstructKind::Quote => ElementKind::Quote,
            ConstructKind::Rule => return Ok(Element::new(ElementKind::Rule, "")),
            ConstructKind::Italic => ElementKind::Italic,
            ConstructKind::Bold => ElementKind::Bold,
            ConstructKind::Strike => ElementKind::Strike,
            ConstructKind::InlineCode => ElementKind::InlineCode,
            ConstructKind::BlockCode => ElementKind::BlockCode {
                language: marker
                    .map(str::trim)
                    .filter(|info| !info.is_empty())
                    .map(str::to_string),
            },
            ConstructKind::Link => {
                let parts = LinkParts::extract(inner).ok_or_else(|| mismatch(m.kind, inner))?;
                return Ok(Element::new(
                    ElementKind::Link {
                        target: parts.url.to_string(),
                    },
                    parts.title,
                ));
            }
            ConstructKind::Image => {
                let parts = ImageParts::extract(inner).ok_or_else(|| mismatch(m.kind, inner))?;
                return Ok(Element::new(
                    ElementKind::Image {
                        target: parts.url.to_string(),
                        alt_text: parts.alt.map(str::to_string),
                    },
                    parts.title,
                ));
            }
        };

        let element = Element::new(kind, inner);
        if m.kind.recurses() {
            let children = self.parse_at_depth(inner, depth + 1)?;
            Ok(element.with_children(children))
        } else {
            Ok(element)
        }
    }
}

fn mismatch(construct: ConstructKind, fragment: &str) -> ParseError {
    ParseError::PatternMismatch {
        construct,
        fragment: fragment.to_string(),
    }
}

/// Emits literal text between constructs. Right after a line-anchored
/// construct the line breaks that end it form their own element.
fn push_gap(out: &mut Vec<Element>, gap: &str, after_line: bool) {
    let rest = gap.trim_start_matches('\n');
    let breaks = gap.len() - rest.len();
    if after_line && breaks > 0 && !rest.is_empty() {
        out.push(Element::text(&gap[..breaks]));
        out.push(Element::text(rest));
    } else {
        out.push(Element::text(gap));
    }
}
