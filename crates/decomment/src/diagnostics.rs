//! Line-tagged scan diagnostics.
//!
//! Diagnostics are advisory: every anomaly short of a bad [`Standard`]
//! is recorded here while scanning continues under a recovery
//! heuristic. They are kept as data rather than printed so the
//! embedding caller decides where they go.
//!
//! [`Standard`]: crate::Standard

use std::fmt;

/// One warning, tagged with the 1-based source line it was detected on.
///
/// The line is where detection happened, which for recovery paths can
/// trail the construct it describes (a literal closed heuristically at
/// a newline is reported on the line it began).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_as_line_colon_message() {
        let diagnostic = Diagnostic::new(12, "unterminated C-style comment");
        assert_eq!(diagnostic.to_string(), "12: unterminated C-style comment");
    }
}
