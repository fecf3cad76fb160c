//! The comment-stripping state machine.
//!
//! One [`Scanner`] is built per scan and owns everything the pass
//! needs: the cursor, the derived feature set, the output buffer, the
//! diagnostics, and the per-line warning dedup state. Nothing is shared
//! between scans.
//!
//! # Design
//!
//! The driver consumes one character at a time and dispatches on the
//! current [`ScanState`]. Sub-scanners (literals, numbers, raw strings)
//! are methods that run the cursor forward themselves and return to the
//! driver when their construct ends; only comment boundaries are
//! tracked as driver state, because only they survive across the
//! driver's per-character steps.
//!
//! Every emission names a [`Channel`]. Which channel actually reaches
//! the output buffer is decided in exactly one place
//! ([`Scanner::emit`]), so inverting the output (`emit_comments`) can
//! never drift between call sites.

mod literal;
mod number;

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::diagnostics::Diagnostic;
use crate::features::{Feature, FeatureSet};

/// Result of one scan: the transformed text plus everything the scanner
/// had to say about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// The transformed text (code with comments stripped, or the
    /// comments themselves under `emit_comments`).
    pub output: String,
    /// Warnings in detection order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// `true` when the scan recorded no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Which half of the input an emission belongs to.
///
/// The scanner classifies every character as code or comment; the
/// configuration then selects which class reaches the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channel {
    Code,
    Comment,
}

/// Driver state. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Ordinary source text.
    Code,
    /// Between `/*` and `*/`.
    BlockComment,
    /// Between `//` and the next unescaped newline.
    LineComment,
}

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    config: &'a ScanConfig,
    features: FeatureSet,
    out: String,
    diagnostics: Vec<Diagnostic>,
    /// Last line that warned about a nested `/*`; suppresses repeats on
    /// the same physical line.
    last_nested_warning: u32,
    /// Last line that warned about a stray `*/`.
    last_stray_close_warning: u32,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, config: &'a ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            features: FeatureSet::for_standard(config.standard),
            out: String::with_capacity(input.len()),
            diagnostics: Vec::new(),
            last_nested_warning: 0,
            last_stray_close_warning: 0,
        }
    }

    /// Run the scan to end of input.
    pub(crate) fn run(mut self) -> ScanResult {
        let mut state = ScanState::Code;
        let mut prev = '\0';
        while let Some(ch) = self.cursor.next() {
            state = match state {
                ScanState::Code => self.scan_code(ch),
                ScanState::BlockComment => self.scan_block_comment(ch),
                ScanState::LineComment => self.scan_line_comment(ch, prev),
            };
            prev = ch;
        }
        if state != ScanState::Code {
            self.warn_at(self.cursor.line(), "unterminated C-style comment");
        }
        ScanResult {
            output: self.out,
            diagnostics: self.diagnostics,
        }
    }

    // ─── Emission ────────────────────────────────────────────────────────

    fn active_channel(&self) -> Channel {
        if self.config.emit_comments {
            Channel::Comment
        } else {
            Channel::Code
        }
    }

    fn emit(&mut self, channel: Channel, ch: char) {
        if channel == self.active_channel() {
            self.out.push(ch);
        }
    }

    fn emit_str(&mut self, channel: Channel, text: &str) {
        if channel == self.active_channel() {
            self.out.push_str(text);
        }
    }

    /// Emit one character of literal *content*, applying the configured
    /// placeholder for the given quote kind. Delimiters and splices
    /// bypass this and go through [`emit`](Self::emit) directly.
    fn emit_literal_char(&mut self, quote: char, ch: char) {
        let placeholder = if quote == '\'' {
            self.config.char_placeholder
        } else {
            self.config.string_placeholder
        };
        self.emit(Channel::Code, placeholder.unwrap_or(ch));
    }

    // ─── Diagnostics ─────────────────────────────────────────────────────

    fn warn_at(&mut self, line: u32, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(line, message));
    }

    fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(feature.flag())
    }

    /// Record that a disabled feature was used anyway. Fires on every
    /// occurrence; only the caller knows when once-per-literal is
    /// appropriate.
    fn warn_feature(&mut self, feature: Feature) {
        self.warn_at(
            self.cursor.line(),
            format!(
                "{} feature used but not supported in {}",
                feature.name(),
                self.config.standard
            ),
        );
    }

    // ─── Splices ─────────────────────────────────────────────────────────

    /// Count the backslash-newline pairs sitting at the cursor.
    ///
    /// Stops at the first break in the pattern, pushing back a lone
    /// backslash that turned out not to start a pair. On return the
    /// next character is the first one after the spliced run.
    fn count_splices(&mut self) -> u32 {
        let mut count = 0;
        while self.cursor.peek() == Some('\\') {
            self.cursor.next();
            if self.cursor.peek() == Some('\n') {
                self.cursor.next();
                count += 1;
            } else {
                self.cursor.push_back('\\');
                break;
            }
        }
        count
    }

    /// Re-emit `count` backslash-newline pairs. Splicing is purely a
    /// transport artifact, so the pairs are reproduced verbatim into
    /// whichever channel the surrounding construct is writing.
    fn emit_splices(&mut self, count: u32, channel: Channel) {
        for _ in 0..count {
            self.emit(channel, '\\');
            self.emit(channel, '\n');
        }
    }

    // ─── Code state ──────────────────────────────────────────────────────

    fn scan_code(&mut self, ch: char) -> ScanState {
        match ch {
            '*' => {
                self.scan_possible_stray_close();
                ScanState::Code
            }
            '\'' => {
                self.emit(Channel::Code, '\'');
                self.scan_quoted('\'', "character constant");
                ScanState::Code
            }
            '"' => {
                self.emit(Channel::Code, '"');
                self.scan_quoted('"', "string literal");
                ScanState::Code
            }
            '/' => self.scan_slash(),
            _ if ch.is_ascii_digit() || (ch == '.' && self.peek_is_ascii_digit()) => {
                self.scan_number(ch);
                ScanState::Code
            }
            _ if ch.is_ascii_alphanumeric() || ch == '_' => {
                self.scan_identifier(ch);
                ScanState::Code
            }
            '\\' => {
                // Detecting UCNs only matters for the feature warning;
                // the escape itself is passed through as scanned.
                match self.cursor.peek() {
                    Some(letter @ ('u' | 'U')) => {
                        let digits = if letter == 'u' { 4 } else { 8 };
                        self.scan_ucn(letter, digits);
                    }
                    _ => self.emit(Channel::Code, '\\'),
                }
                ScanState::Code
            }
            _ => {
                // Whitespace, punctuation, non-ASCII text.
                self.emit(Channel::Code, ch);
                ScanState::Code
            }
        }
    }

    fn peek_is_ascii_digit(&self) -> bool {
        self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
    }

    /// A `*` in code: when `/` follows (possibly across splices) this is
    /// a comment closer with no comment open.
    fn scan_possible_stray_close(&mut self) {
        let splices = self.count_splices();
        if self.cursor.peek() == Some('/') {
            self.cursor.next();
            self.emit(Channel::Code, '*');
            self.emit_splices(splices, Channel::Code);
            self.emit(Channel::Code, '/');
            let line = self.cursor.line();
            if self.last_stray_close_warning != line {
                self.warn_at(line, "C-style comment end marker ('*/') not in a comment");
            }
            self.last_stray_close_warning = line;
        } else {
            self.emit(Channel::Code, '*');
            self.emit_splices(splices, Channel::Code);
        }
    }

    /// A `/` in code: comment opener, unsupported `//`, or plain slash.
    fn scan_slash(&mut self) -> ScanState {
        let splices = self.count_splices();
        match self.cursor.peek() {
            Some('*') => {
                self.cursor.next();
                self.emit(Channel::Comment, '/');
                self.emit_splices(splices, Channel::Comment);
                self.emit(Channel::Comment, '*');
                if self.config.mark_blank_comments {
                    self.emit(Channel::Code, '/');
                    self.emit(Channel::Code, '*');
                }
                ScanState::BlockComment
            }
            Some('/') if self.has_feature(Feature::DoubleSlash) => {
                self.cursor.next();
                self.emit(Channel::Comment, '/');
                self.emit_splices(splices, Channel::Comment);
                self.emit(Channel::Comment, '/');
                if self.config.mark_blank_comments {
                    self.emit_str(Channel::Code, "//");
                }
                ScanState::LineComment
            }
            Some('/') => {
                // Not a comment under this standard: warn, emit both
                // slashes as code, and keep scanning the rest as code.
                self.warn_feature(Feature::DoubleSlash);
                self.cursor.next();
                self.emit(Channel::Code, '/');
                self.emit_splices(splices, Channel::Code);
                self.emit(Channel::Code, '/');
                ScanState::Code
            }
            _ => {
                self.emit(Channel::Code, '/');
                self.emit_splices(splices, Channel::Code);
                ScanState::Code
            }
        }
    }

    // ─── Comment states ──────────────────────────────────────────────────

    fn scan_block_comment(&mut self, ch: char) -> ScanState {
        if ch == '*' {
            let splices = self.count_splices();
            if self.cursor.peek() == Some('/') {
                self.cursor.next();
                self.emit(Channel::Comment, '*');
                self.emit_splices(splices, Channel::Comment);
                self.emit(Channel::Comment, '/');
                // The removed comment leaves a single space, or an
                // explicit marker when configured.
                self.emit(Channel::Code, ' ');
                if self.config.mark_blank_comments {
                    self.emit(Channel::Code, '*');
                    self.emit(Channel::Code, '/');
                }
                return ScanState::Code;
            }
            self.emit(Channel::Comment, '*');
            self.emit_splices(splices, Channel::Comment);
            return ScanState::BlockComment;
        }
        if self.config.warn_nested_comments && ch == '/' && self.cursor.peek() == Some('*') {
            let line = self.cursor.line();
            if self.last_nested_warning != line {
                self.warn_at(line, "nested C-style comment");
            }
            self.last_nested_warning = line;
        }
        self.emit(Channel::Comment, ch);
        ScanState::BlockComment
    }

    /// Line comments end at a newline, unless the previous character
    /// was a backslash — splicing extends them across lines.
    fn scan_line_comment(&mut self, ch: char, prev: char) -> ScanState {
        if ch == '\n' && prev != '\\' {
            self.emit(Channel::Code, '\n');
            ScanState::Code
        } else {
            self.emit(Channel::Comment, ch);
            ScanState::LineComment
        }
    }
}
