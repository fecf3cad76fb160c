//! Forward-only character cursor with bounded pushback.
//!
//! The scanner inspects multi-character patterns (splices, literal
//! prefixes, raw-string delimiters) before committing to an
//! interpretation, so the cursor pairs a non-consuming [`peek`] with a
//! small LIFO pushback stack instead of rewinding the byte offset. The
//! offset only ever moves forward; abandoning a character goes through
//! [`push_back`], which keeps the forward-progress invariant checkable.
//!
//! # Line tracking
//!
//! The line counter is 1-based and counts `\n` characters as they are
//! consumed. Pushing a newline back decrements it again, so a peek
//! implemented as consume-then-push-back observes the same line number
//! as one that never consumed at all.
//!
//! [`peek`]: Cursor::peek
//! [`push_back`]: Cursor::push_back

use smallvec::SmallVec;

/// Character cursor over an immutable source buffer.
///
/// # Invariant
///
/// `pos` is always on a UTF-8 character boundary of `src` and never
/// decreases. Lookbehind is expressed purely through the `pending`
/// stack, which holds characters handed back via [`push_back`] in LIFO
/// order.
///
/// [`push_back`]: Cursor::push_back
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    /// Full source text; never mutated.
    src: &'a str,
    /// Byte offset of the next character not yet consumed from `src`.
    pos: usize,
    /// Characters returned to the stream, most recent last.
    pending: SmallVec<[char; 2]>,
    /// 1-based line number of the character about to be consumed.
    line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            pending: SmallVec::new(),
            line: 1,
        }
    }

    /// Consume and return the next character, or `None` at end of input.
    ///
    /// Pushback is drained before the buffer advances. Consuming `\n`
    /// increments the line counter.
    pub(crate) fn next(&mut self) -> Option<char> {
        let ch = match self.pending.pop() {
            Some(ch) => ch,
            None => {
                let ch = self.src[self.pos..].chars().next()?;
                self.pos += ch.len_utf8();
                ch
            }
        };
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Look at the next character without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        if let Some(&ch) = self.pending.last() {
            return Some(ch);
        }
        self.src[self.pos..].chars().next()
    }

    /// Hand one character back to the stream.
    ///
    /// # Contract
    ///
    /// Callers may only push back characters they just consumed, in
    /// reverse order of consumption. At least two characters of pushback
    /// are supported in sequence (the splice scan needs exactly that).
    pub(crate) fn push_back(&mut self, ch: char) {
        if ch == '\n' {
            self.line -= 1;
        }
        self.pending.push(ch);
    }

    /// 1-based line number of the next character to be consumed.
    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Advance to the next occurrence of `byte` (or end of input) and
    /// return the skipped text. The matching byte itself is not consumed.
    ///
    /// Line numbers stay accurate: every newline inside the returned
    /// slice is counted.
    ///
    /// # Contract
    ///
    /// `byte` must be ASCII (a UTF-8 continuation byte can never match
    /// it, so the cursor stays on a character boundary), and the
    /// pushback stack must be empty — bulk skipping cannot see handed-
    /// back characters.
    pub(crate) fn take_until(&mut self, byte: u8) -> &'a str {
        debug_assert!(byte.is_ascii(), "take_until needle must be ASCII");
        debug_assert!(
            self.pending.is_empty(),
            "take_until called with outstanding pushback"
        );
        let rest = &self.src.as_bytes()[self.pos..];
        let len = memchr::memchr(byte, rest).unwrap_or(rest.len());
        let skipped = &self.src[self.pos..self.pos + len];
        self.pos += len;
        self.line += newline_count(skipped);
        skipped
    }
}

/// Number of `\n` bytes in `text`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "input length is bounded by source-file size, far below u32::MAX lines"
)]
fn newline_count(text: &str) -> u32 {
    memchr::memchr_iter(b'\n', text.as_bytes()).count() as u32
}

#[cfg(test)]
mod tests;
