//! Glide error types

use thiserror::Error;

/// Errors raised when parsing animation identifiers from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Name does not match any easing curve
    #[error("Unknown easing curve: {0:?}")]
    UnknownEasing(String),

    /// Name does not match a coordinate space
    #[error("Unknown coordinate space: {0:?}")]
    UnknownSpace(String),

    /// Name does not match a transform property
    #[error("Unknown transform property: {0:?}")]
    UnknownProperty(String),
}

/// Result type for Glide operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fold a user-supplied identifier into the form used for name matching.
///
/// Case, `_`, `-` and whitespace are ignored, so `"EaseInOutBack"`,
/// `"ease_in_out_back"` and `"ease-in-out-back"` all compare equal.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
