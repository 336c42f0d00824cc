use super::patterns::ConstructKind;

/// Errors raised while parsing.
///
/// Malformed markdown is never an error: unmatched delimiters fall through to
/// literal text. The only failure is an internal inconsistency between the
/// pattern table and the secondary field extraction for links and images.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{construct:?} pattern accepted {fragment:?} but its fields could not be extracted")]
    PatternMismatch {
        construct: ConstructKind,
        fragment: String,
    },
}
