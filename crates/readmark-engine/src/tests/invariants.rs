use crate::{blocks::Block, plain_text::to_plain_text, search::SearchMatch};

/// Offsets chain from zero and the plain text is exactly as long as the
/// last block's end bound.
pub fn check_blocks(blocks: &[Block]) {
    let mut expected_offset = 0;
    for (i, b) in blocks.iter().enumerate() {
        assert_eq!(
            b.offset(),
            expected_offset,
            "block {i} offset does not continue from the previous block"
        );
        assert!(b.bounds().start <= b.bounds().end);
        expected_offset = b.bounds().end;
    }

    let len = to_plain_text(blocks).chars().count();
    assert_eq!(
        len, expected_offset,
        "plain text length disagrees with block bounds"
    );
}

/// Every match lies inside the corpus and is non-empty.
pub fn check_matches(matches: &[SearchMatch], corpus_len: usize) {
    for m in matches {
        assert!(
            m.start < m.end && m.end <= corpus_len,
            "match {m:?} outside corpus of length {corpus_len}"
        );
    }
}
