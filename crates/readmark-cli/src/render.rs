//! Styled terminal lines for parsed article blocks.
//!
//! Element text is painted char by char so search highlights, which are
//! block-local char offsets into the plain text, land on the right glyphs.
//! Decorations (list bullets, header hashes, fences) are drawn around the
//! text and never advance the offset.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use readmark_engine::{Block, Element, ElementKind, SearchMatch, SearchSession};

/// Lines for a whole article, plus the line holding the focused match.
#[derive(Debug, Default)]
pub struct RenderedArticle {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

pub fn article_lines(blocks: &[Block], session: Option<&SearchSession>) -> RenderedArticle {
    let highlights = session
        .map(SearchSession::block_highlights)
        .unwrap_or_default();
    let focused = session.and_then(SearchSession::focused_in_block);

    let mut builder = LineBuilder::default();
    for (i, block) in blocks.iter().enumerate() {
        builder.start_block(
            highlights.get(i).map(Vec::as_slice).unwrap_or(&[]),
            focused.filter(|f| f.block == i).map(|f| f.local),
        );
        for element in block.content().elements() {
            builder.element(element, Style::default());
        }
        builder.end_block();
    }
    builder.finish()
}

fn highlight_style() -> Style {
    Style::default().bg(Color::Yellow).fg(Color::Black)
}

fn focus_style() -> Style {
    Style::default()
        .bg(Color::LightRed)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn decoration_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    pending: String,
    pending_style: Style,
    // Per-block state
    pos: usize,
    matches: Vec<SearchMatch>,
    focus: Option<SearchMatch>,
    focus_line: Option<usize>,
}

impl LineBuilder {
    fn start_block(&mut self, matches: &[SearchMatch], focus: Option<SearchMatch>) {
        self.pos = 0;
        self.matches = matches.to_vec();
        self.focus = focus;
    }

    fn end_block(&mut self) {
        if !self.current.is_empty() || !self.pending.is_empty() {
            self.newline();
        }
    }

    fn element(&mut self, el: &Element, style: Style) {
        match &el.kind {
            ElementKind::Text => self.text(&el.text, style),
            ElementKind::Bold => self.children(el, style.add_modifier(Modifier::BOLD)),
            ElementKind::Italic => self.children(el, style.add_modifier(Modifier::ITALIC)),
            ElementKind::Strike => self.children(el, style.add_modifier(Modifier::CROSSED_OUT)),
            ElementKind::Header { level } => {
                let header = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                self.decoration(&format!("{} ", "#".repeat(*level as usize)), header);
                self.text(&el.text, header);
            }
            ElementKind::Quote => {
                self.decoration("│ ", decoration_style());
                self.children(el, style.fg(Color::Gray).add_modifier(Modifier::ITALIC));
            }
            ElementKind::UnorderedListItem => {
                self.decoration("• ", decoration_style());
                self.children(el, style);
            }
            ElementKind::OrderedListItem { order } => {
                self.decoration(&format!("{order} "), decoration_style());
                self.children(el, style);
            }
            ElementKind::InlineCode => self.text(&el.text, style.fg(Color::Yellow)),
            ElementKind::BlockCode { language } => {
                self.decoration(
                    &format!("```{}\n", language.as_deref().unwrap_or_default()),
                    decoration_style(),
                );
                self.text(&el.text, style.fg(Color::Green));
                self.decoration("\n```", decoration_style());
            }
            ElementKind::Link { target } => {
                self.text(
                    &el.text,
                    style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                );
                self.decoration(&format!(" <{target}>"), decoration_style());
            }
            ElementKind::Image { target, alt_text } => {
                let label = alt_text.as_deref().unwrap_or(target);
                self.decoration(&format!("[image: {label}] "), style.fg(Color::Magenta));
                self.text(&el.text, style.add_modifier(Modifier::ITALIC));
            }
            ElementKind::Rule => self.decoration("────────────────", decoration_style()),
        }
    }

    fn children(&mut self, el: &Element, style: Style) {
        if el.children.is_empty() {
            self.text(&el.text, style);
            return;
        }
        for child in &el.children {
            self.element(child, style);
        }
    }

    /// Text that counts toward block offsets.
    fn text(&mut self, text: &str, style: Style) {
        for c in text.chars() {
            let painted = if self.focus.is_some_and(|m| m.start <= self.pos && self.pos < m.end) {
                if self.focus.is_some_and(|m| m.start == self.pos) {
                    self.focus_line = Some(self.lines.len());
                }
                style.patch(focus_style())
            } else if self
                .matches
                .iter()
                .any(|m| m.start <= self.pos && self.pos < m.end)
            {
                style.patch(highlight_style())
            } else {
                style
            };
            self.push_char(c, painted);
            self.pos += 1;
        }
    }

    fn decoration(&mut self, text: &str, style: Style) {
        for c in text.chars() {
            self.push_char(c, style);
        }
    }

    fn push_char(&mut self, c: char, style: Style) {
        if c == '\n' {
            self.newline();
            return;
        }
        if style != self.pending_style {
            self.flush_pending();
            self.pending_style = style;
        }
        self.pending.push(c);
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.current.push(Span::styled(text, self.pending_style));
        }
    }

    fn newline(&mut self) {
        self.flush_pending();
        self.lines
            .push(Line::from(std::mem::take(&mut self.current)));
    }

    fn finish(mut self) -> RenderedArticle {
        self.end_block();
        RenderedArticle {
            lines: self.lines,
            focus_line: self.focus_line,
        }
    }
}
