//! Error types surfaced by the parser.

/// Reasons a string did not produce a color.
///
/// Both variants are routine outcomes for free-form input; callers that want
/// the zero-color fallback can pass `parse(text).ok()` to [`crate::as_rgba`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,

    #[error("unrecognized color: {0:?}")]
    NotRecognized(String),
}
