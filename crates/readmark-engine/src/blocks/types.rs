use std::sync::OnceLock;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    parsing::Element,
    plain_text::{clear_content, element_len},
    span::Span,
};

/// What a block holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// A run of inline-level elements rendered as one text view.
    Text(Vec<Element>),
    /// A standalone image.
    Image(Element),
    /// A standalone fenced code block.
    Code(Element),
}

impl BlockContent {
    pub fn name(&self) -> &'static str {
        match self {
            BlockContent::Text(_) => "text",
            BlockContent::Image(_) => "image",
            BlockContent::Code(_) => "code",
        }
    }

    /// The elements of this block, in order.
    pub fn elements(&self) -> &[Element] {
        match self {
            BlockContent::Text(elements) => elements,
            BlockContent::Image(element) | BlockContent::Code(element) => {
                std::slice::from_ref(element)
            }
        }
    }
}

/// A top-level unit of rendering and of search-result partitioning.
///
/// `offset` is where the block's plain text starts in the whole article's
/// plain text. The rendered length is computed on first use and cached;
/// blocks never change after grouping.
#[derive(Debug, Clone)]
pub struct Block {
    content: BlockContent,
    offset: usize,
    rendered_len: OnceLock<usize>,
}

impl Block {
    pub fn new(content: BlockContent, offset: usize) -> Self {
        Self {
            content,
            offset,
            rendered_len: OnceLock::new(),
        }
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Plain-text length in characters.
    pub fn rendered_len(&self) -> usize {
        *self.rendered_len.get_or_init(|| match &self.content {
            BlockContent::Text(elements) => elements.iter().map(element_len).sum(),
            BlockContent::Image(element) | BlockContent::Code(element) => {
                element.text.chars().count()
            }
        })
    }

    /// `(offset, offset + rendered_len)`.
    pub fn bounds(&self) -> Span {
        Span::new(self.offset, self.offset + self.rendered_len())
    }

    /// This block's share of the article's plain text.
    pub fn plain_text(&self) -> String {
        match &self.content {
            BlockContent::Text(elements) => elements.iter().map(clear_content).collect(),
            BlockContent::Image(element) | BlockContent::Code(element) => element.text.clone(),
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.content == other.content
    }
}

impl Eq for Block {}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Block", 3)?;
        state.serialize_field("kind", self.content.name())?;
        state.serialize_field("bounds", &self.bounds())?;
        state.serialize_field("elements", self.content.elements())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ElementKind;

    #[test]
    fn text_block_length_uses_children_over_raw_text() {
        let bold = Element::new(ElementKind::Bold, "b").with_children(vec![Element::text("b")]);
        let block = Block::new(
            BlockContent::Text(vec![Element::text("ab "), bold, Element::text("é")]),
            4,
        );
        assert_eq!(block.rendered_len(), 5);
        assert_eq!(block.bounds(), Span::new(4, 9));
        assert_eq!(block.plain_text(), "ab bé");
    }

    #[test]
    fn image_block_length_is_caption() {
        let image = Element::new(
            ElementKind::Image {
                target: "x.png".into(),
                alt_text: None,
            },
            "caption",
        );
        let block = Block::new(BlockContent::Image(image), 10);
        assert_eq!(block.bounds(), Span::new(10, 17));
    }

    #[test]
    fn serializes_kind_bounds_and_elements() {
        let block = Block::new(BlockContent::Text(vec![Element::text("hi")]), 0);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["bounds"], serde_json::json!({"start": 0, "end": 2}));
        assert_eq!(json["elements"][0]["text"], "hi");
    }
}
