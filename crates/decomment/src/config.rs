//! Per-scan configuration.

use crate::standard::Standard;

/// Configuration for one scan. Immutable while the scan runs.
///
/// The placeholder options substitute a fixed character for the
/// *contents* of character/string literals (delimiters, encoding
/// prefixes, splices, and raw-string bodies are never substituted), so
/// downstream text tools can match keywords without tripping over
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Language standard deciding which features warn. See [`Standard`].
    pub standard: Standard,
    /// Emit the comments and drop the code, instead of the reverse.
    pub emit_comments: bool,
    /// Leave an explicit `/*` `*/` (or `//`) marker where a comment was
    /// removed, instead of a bare blank.
    pub mark_blank_comments: bool,
    /// Warn when `/*` appears inside a block comment.
    pub warn_nested_comments: bool,
    /// Replacement for the contents of character constants.
    pub char_placeholder: Option<char>,
    /// Replacement for the contents of string literals.
    pub string_placeholder: Option<char>,
}

impl ScanConfig {
    /// A default-flag configuration for `standard`.
    pub fn new(standard: Standard) -> Self {
        Self {
            standard,
            ..Self::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            standard: Standard::C,
            emit_comments: false,
            mark_blank_comments: false,
            warn_nested_comments: false,
            char_placeholder: None,
            string_placeholder: None,
        }
    }
}
