//! Literal scanning: quoted constants, encoding prefixes, raw strings,
//! and universal character names.
//!
//! Everything here runs with the opening delimiter already consumed by
//! the dispatcher and returns with the cursor past the literal, so the
//! driver never sees a quote or comment marker that is really content.

use super::{Channel, Scanner};
use crate::features::Feature;

/// Longest d-char-sequence a raw string delimiter may carry.
const RAW_DELIMITER_MAX: usize = 16;

impl Scanner<'_> {
    // ─── Quoted literals ─────────────────────────────────────────────────

    /// Scan the body of a quoted literal whose opening quote has already
    /// been emitted. `what` names the construct in diagnostics.
    ///
    /// Escape handling works on whole backslash runs so that `\\` pairs
    /// never hide a closing quote and a trailing backslash correctly
    /// pairs with a newline as a splice. Unterminated literals recover
    /// heuristically: a bare newline ends the literal with a warning,
    /// EOF warns unless the input died mid-run of backslashes.
    pub(super) fn scan_quoted(&mut self, quote: char, what: &str) {
        loop {
            let Some(c1) = self.cursor.next() else {
                self.warn_at(self.cursor.line(), format!("EOF in {what}"));
                return;
            };
            if c1 == quote {
                self.emit(Channel::Code, quote);
                return;
            }
            if c1 == '\\' {
                let mut run = 1u32;
                let mut follow = None;
                while let Some(c2) = self.cursor.next() {
                    if c2 == '\\' {
                        run += 1;
                    } else {
                        follow = Some(c2);
                        break;
                    }
                }
                match follow {
                    None => {
                        // Backslashes running straight into EOF: emit
                        // them and close the literal ourselves.
                        for _ in 0..run {
                            self.emit_literal_char(quote, '\\');
                        }
                        self.emit(Channel::Code, quote);
                        return;
                    }
                    Some('\n') => {
                        // The last backslash of the run pairs with the
                        // newline as a splice and rides along verbatim.
                        for _ in 1..run {
                            self.emit_literal_char(quote, '\\');
                        }
                        self.emit(Channel::Code, '\\');
                        self.emit(Channel::Code, '\n');
                    }
                    Some(c2) => {
                        for _ in 0..run / 2 {
                            self.emit_literal_char(quote, '\\');
                            self.emit_literal_char(quote, '\\');
                        }
                        if run % 2 == 0 {
                            // An even run escapes nothing further: the
                            // next character stands alone, and closes
                            // the literal when it is the quote.
                            self.emit(Channel::Code, c2);
                            if c2 == quote {
                                return;
                            }
                        } else {
                            self.emit_literal_char(quote, '\\');
                            self.emit_literal_char(quote, c2);
                            if matches!(c2, 'u' | 'U')
                                && !self.has_feature(Feature::Universal)
                            {
                                self.warn_feature(Feature::Universal);
                            }
                        }
                    }
                }
            } else if c1 == '\n' {
                // Assume the literal was meant to close on its own line.
                self.emit_literal_char(quote, '\n');
                self.warn_at(self.cursor.line() - 1, format!("newline in {what}"));
                return;
            } else {
                self.emit_literal_char(quote, c1);
            }
        }
    }

    // ─── Identifiers and literal prefixes ────────────────────────────────

    /// An identifier, or a literal carrying an encoding prefix. `first`
    /// has been consumed but not yet emitted.
    pub(super) fn scan_identifier(&mut self, first: char) {
        if is_literal_prefix_char(first) {
            self.scan_possible_literal_prefix(first);
        } else {
            self.emit(Channel::Code, first);
            self.scan_identifier_tail();
        }
    }

    fn scan_identifier_tail(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.cursor.next();
                self.emit(Channel::Code, c);
            } else {
                break;
            }
        }
    }

    /// Accumulate characters that could still form an encoding prefix
    /// (`L`, `u`, `U`, `u8`, or a raw variant ending in `R`) and decide
    /// what the token really is once a quote or other character shows.
    fn scan_possible_literal_prefix(&mut self, first: char) {
        let mut prefix = String::from(first);
        loop {
            match self.cursor.peek() {
                Some('\'') => {
                    // Prefix validity is irrelevant before a single
                    // quote: the prefix comes out as-is and the quote
                    // is scanned as a character constant either way.
                    self.emit_str(Channel::Code, &prefix);
                    self.cursor.next();
                    self.emit(Channel::Code, '\'');
                    self.scan_quoted('\'', "character constant");
                    return;
                }
                Some('"') => {
                    if is_literal_prefix(&prefix) {
                        self.cursor.next();
                        self.scan_prefixed_string(&prefix);
                    } else {
                        // Identifier butted straight against a double
                        // quote. Not valid source, but scan the quoted
                        // part through so we do not lose sync.
                        self.emit_str(Channel::Code, &prefix);
                        self.cursor.next();
                        self.emit(Channel::Code, '"');
                        self.scan_quoted('"', "character constant");
                    }
                    return;
                }
                Some(c) if is_literal_prefix_char(c) => {
                    self.cursor.next();
                    prefix.push(c);
                    if prefix.len() > 3 {
                        // No valid prefix is this long.
                        self.emit_str(Channel::Code, &prefix);
                        self.scan_identifier_tail();
                        return;
                    }
                }
                Some(_) => {
                    self.emit_str(Channel::Code, &prefix);
                    self.scan_identifier_tail();
                    return;
                }
                None => {
                    self.emit_str(Channel::Code, &prefix);
                    return;
                }
            }
        }
    }

    /// The opening double quote after a valid prefix has been consumed
    /// but not emitted. Dispatch on raw versus ordinary.
    fn scan_prefixed_string(&mut self, prefix: &str) {
        if is_raw_prefix(prefix) {
            if !self.has_feature(Feature::RawString) {
                self.warn_feature(Feature::RawString);
            }
            self.emit_str(Channel::Code, prefix);
            self.scan_raw_string(prefix);
        } else {
            if prefix != "L" && !self.has_feature(Feature::Unicode) {
                self.warn_feature(Feature::Unicode);
            }
            self.emit_str(Channel::Code, prefix);
            self.emit(Channel::Code, '"');
            self.scan_quoted('"', "string literal");
        }
    }

    // ─── Raw strings ─────────────────────────────────────────────────────

    /// A raw string: scan the delimiter, then the body. On a bad
    /// delimiter, fall back to scanning an ordinary string so the text
    /// that was read is not lost.
    fn scan_raw_string(&mut self, prefix: &str) {
        match self.scan_raw_delimiter(prefix) {
            Ok(delimiter) => {
                self.emit(Channel::Code, '"');
                self.emit_str(Channel::Code, &delimiter);
                self.emit(Channel::Code, '(');
                let open_line = self.cursor.line();
                self.scan_raw_body(&delimiter, open_line);
            }
            Err(partial) => {
                // The characters meant for the delimiter become
                // ordinary string content.
                self.emit(Channel::Code, '"');
                for c in partial.chars() {
                    self.emit_literal_char('"', c);
                }
                self.scan_quoted('"', "string literal");
            }
        }
    }

    /// Read the d-char-sequence up to the opening parenthesis.
    ///
    /// On failure the returned string holds the characters read so far,
    /// including the offending one, for the caller to replay.
    fn scan_raw_delimiter(&mut self, prefix: &str) -> Result<String, String> {
        let mut delimiter = String::new();
        let mut len = 0;
        while let Some(c) = self.cursor.next() {
            if c == '(' {
                return Ok(delimiter);
            }
            if is_invalid_delimiter_char(c) || len >= RAW_DELIMITER_MAX {
                let message = if len >= RAW_DELIMITER_MAX {
                    delimiter.push(c);
                    format!("Too long a raw string d-char-sequence: {prefix}\"{delimiter}")
                } else {
                    let note = delimiter_char_note(c);
                    let message = format!(
                        "Invalid mark character (code {code}{note}) in d-char-sequence: {prefix}\"{delimiter}",
                        code = u32::from(c),
                    );
                    delimiter.push(c);
                    message
                };
                self.warn_at(self.cursor.line(), message);
                return Err(delimiter);
            }
            delimiter.push(c);
            len += 1;
        }
        self.warn_at(
            self.cursor.line(),
            format!("Unexpected EOF in raw string d-char-sequence: {prefix}\"{delimiter}"),
        );
        Err(delimiter)
    }

    /// Scan raw string content until `)` delimiter `"`.
    ///
    /// The body is emitted verbatim: raw strings have no escapes to
    /// resolve and content placeholders do not apply to them. A `)`
    /// that is not followed by the full delimiter and a quote is
    /// content too, and a second `)` restarts the delimiter match.
    fn scan_raw_body(&mut self, delimiter: &str, open_line: u32) {
        loop {
            let chunk = self.cursor.take_until(b')');
            if !chunk.is_empty() {
                self.emit_str(Channel::Code, chunk);
            }
            if self.cursor.next().is_none() {
                self.warn_at(open_line, "Unexpected EOF in raw string starting at this line");
                return;
            }
            let mut matched = String::new();
            loop {
                let Some(c) = self.cursor.next() else {
                    self.warn_at(open_line, "Unexpected EOF in raw string starting at this line");
                    return;
                };
                if c == '"' && matched.len() == delimiter.len() {
                    self.emit(Channel::Code, ')');
                    self.emit_str(Channel::Code, delimiter);
                    self.emit(Channel::Code, '"');
                    return;
                }
                if delimiter[matched.len()..].starts_with(c) {
                    matched.push(c);
                } else if c == ')' {
                    self.emit(Channel::Code, ')');
                    self.emit_str(Channel::Code, &matched);
                    matched.clear();
                } else {
                    self.emit(Channel::Code, ')');
                    self.emit_str(Channel::Code, &matched);
                    self.emit(Channel::Code, c);
                    break;
                }
            }
        }
    }

    // ─── Universal character names ───────────────────────────────────────

    /// A `\u` or `\U` escape in code. The backslash has been consumed;
    /// `letter` is still pending in the cursor.
    ///
    /// Valid source would never need these outside literals, but they
    /// have to be recognized to report use under a standard that lacks
    /// them. The escape itself passes through unchanged.
    pub(super) fn scan_ucn(&mut self, letter: char, digits: u32) {
        if !self.has_feature(Feature::Universal) {
            self.warn_feature(Feature::Universal);
        }
        self.emit(Channel::Code, '\\');
        let consumed = self.cursor.next();
        debug_assert_eq!(consumed, Some(letter));
        self.emit(Channel::Code, letter);
        let mut collected = String::new();
        for _ in 0..digits {
            match self.cursor.next() {
                None => {
                    self.warn_at(
                        self.cursor.line(),
                        format!("Invalid UCN \\{letter}{collected} detected"),
                    );
                    return;
                }
                Some(c) if !c.is_ascii_hexdigit() => {
                    self.emit(Channel::Code, c);
                    self.warn_at(
                        self.cursor.line(),
                        format!("Invalid UCN \\{letter}{collected}{c} detected"),
                    );
                    return;
                }
                Some(c) => {
                    self.emit(Channel::Code, c);
                    collected.push(c);
                }
            }
        }
    }
}

fn is_literal_prefix_char(c: char) -> bool {
    matches!(c, 'u' | 'U' | 'L' | 'R' | '8')
}

fn is_literal_prefix(prefix: &str) -> bool {
    is_encoding_prefix(prefix) || is_raw_prefix(prefix)
}

fn is_encoding_prefix(prefix: &str) -> bool {
    matches!(prefix, "L" | "u" | "U" | "u8")
}

fn is_raw_prefix(prefix: &str) -> bool {
    matches!(prefix, "R" | "LR" | "uR" | "UR" | "u8R")
}

/// d-chars are any character except space, parentheses, backslash, and
/// the tab, vertical tab, form feed, and newline controls. The double
/// quote is excluded too since it would need a backslash escape, and
/// NUL never names a delimiter.
fn is_invalid_delimiter_char(c: char) -> bool {
    matches!(c, '"' | ')' | ' ' | '\\' | '\t' | '\x0B' | '\x0C' | '\n' | '\0')
}

/// Printable-character note for an invalid delimiter diagnostic,
/// quoted the way a C character constant would write it.
fn delimiter_char_note(c: char) -> String {
    if c.is_ascii_graphic() {
        let escape = if c == '\'' || c == '\\' { "\\" } else { "" };
        format!(" '{escape}{c}'")
    } else {
        String::new()
    }
}
