//! Numeric constant scanning.
//!
//! Numbers matter to the scanner only because their spellings can
//! contain characters that look like something else: the single quote
//! as a digit separator must not open a character constant, and a hex
//! float's `P` exponent must stay glued to its constant. Recognized
//! forms include `12345`, `0177`, `0xDEAD`, `0b0110`, `9.23e-8`,
//! `.987E+30`, `0xA.BCP12`, and any of them punctuated like
//! `0xDEFA'CED0`.

use super::{Channel, Scanner};
use crate::features::Feature;

impl Scanner<'_> {
    /// A number. `first` has been consumed: a digit, or a `.` known to
    /// be followed by one. Dispatch on the radix.
    pub(super) fn scan_number(&mut self, first: char) {
        if first != '0' {
            self.scan_decimal(first);
            return;
        }
        match self.cursor.peek() {
            Some(radix @ ('x' | 'X')) => {
                self.cursor.next();
                self.scan_hex(radix);
            }
            Some(radix @ ('b' | 'B')) => {
                self.cursor.next();
                self.scan_binary(radix);
            }
            Some(c) if is_octal_digit(c) || c == '\'' => {
                self.cursor.next();
                self.scan_octal(c);
            }
            Some('e' | 'E' | '.') => {
                // Zero-led float such as 0.1234 or 0E0.
                self.scan_decimal(first);
            }
            _ => {
                // Plain zero, as in array[0]. This also covers 08 and
                // 09: not octal, but they show up inside preprocessing
                // numbers such as the "%08X" of a format macro, so the
                // zero passes through without complaint.
                self.emit(Channel::Code, '0');
            }
        }
    }

    fn scan_decimal(&mut self, first: char) {
        self.emit(Channel::Code, first);
        let Some(second) = self.cursor.peek() else {
            return;
        };
        if !second.is_ascii_digit() && second != '\'' {
            return;
        }
        // The character right after the lead is taken as-is; separator
        // checks start from the one after it.
        self.cursor.next();
        self.emit(Channel::Code, second);
        let mut prev = second;
        loop {
            match self.cursor.peek() {
                Some('\'') => prev = self.scan_separator(prev, is_decimal_digit),
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.next();
                    self.emit(Channel::Code, c);
                    prev = c;
                }
                _ => break,
            }
        }
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.scan_exponent();
        }
    }

    /// An octal constant. `first` is the consumed character after the
    /// leading zero, either an octal digit or a separator quote.
    fn scan_octal(&mut self, first: char) {
        self.emit(Channel::Code, '0');
        self.emit(Channel::Code, first);
        let mut prev = first;
        loop {
            match self.cursor.peek() {
                Some('\'') => prev = self.scan_separator(prev, is_octal_digit),
                Some(c) if is_octal_digit(c) => {
                    self.cursor.next();
                    self.emit(Channel::Code, c);
                    prev = c;
                }
                _ => break,
            }
        }
        if let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                self.warn_at(
                    self.cursor.line(),
                    format!("Non-octal digit {c} in octal constant"),
                );
            }
        }
    }

    /// A hex constant, integer or float. `radix` is the consumed `x`
    /// or `X`.
    fn scan_hex(&mut self, radix: char) {
        self.emit(Channel::Code, '0');
        self.emit(Channel::Code, radix);
        let mut prev = radix;
        let mut warned = false;
        loop {
            match self.cursor.peek() {
                Some('\'') => prev = self.scan_separator(prev, is_hex_digit),
                Some(c) if c.is_ascii_hexdigit() || c == '.' => {
                    if c == '.' && !self.has_feature(Feature::HexFloat) && !warned {
                        self.warn_feature(Feature::HexFloat);
                        warned = true;
                    }
                    self.cursor.next();
                    self.emit(Channel::Code, c);
                    prev = c;
                }
                _ => break,
            }
        }
        if matches!(self.cursor.peek(), Some('p' | 'P')) {
            if !self.has_feature(Feature::HexFloat) && !warned {
                self.warn_feature(Feature::HexFloat);
            }
            self.scan_exponent();
        }
    }

    /// A binary constant. `radix` is the consumed `b` or `B`.
    fn scan_binary(&mut self, radix: char) {
        if !self.has_feature(Feature::Binary) {
            self.warn_feature(Feature::Binary);
        }
        self.emit(Channel::Code, '0');
        self.emit(Channel::Code, radix);
        let mut prev = radix;
        loop {
            match self.cursor.peek() {
                Some('\'') => prev = self.scan_separator(prev, is_binary_digit),
                Some(c) if is_binary_digit(c) => {
                    self.cursor.next();
                    self.emit(Channel::Code, c);
                    prev = c;
                }
                _ => break,
            }
        }
        if let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                self.warn_at(
                    self.cursor.line(),
                    format!("Non-binary digit {c} in binary constant"),
                );
            }
        }
    }

    /// A digit separator quote is pending. `prev` is the character
    /// before it; `is_digit` checks digits of the current radix.
    ///
    /// Returns the character the next separator check should treat as
    /// preceding it: the peeked follower when the quote sits between
    /// two valid digits, otherwise the quote itself.
    fn scan_separator(&mut self, prev: char, is_digit: fn(char) -> bool) -> char {
        let consumed = self.cursor.next();
        debug_assert_eq!(consumed, Some('\''));
        self.emit(Channel::Code, '\'');
        if !self.has_feature(Feature::DigitSeparator) {
            self.warn_feature(Feature::DigitSeparator);
        }
        if !is_digit(prev) {
            self.warn_at(
                self.cursor.line(),
                "Single quote in numeric context not preceded by a valid digit",
            );
            return '\'';
        }
        let Some(next) = self.cursor.peek() else {
            self.warn_at(
                self.cursor.line(),
                "Single quote in numeric context followed by EOF",
            );
            return '\'';
        };
        if !is_digit(next) {
            self.warn_at(
                self.cursor.line(),
                "Single quote in numeric context not followed by a valid digit",
            );
        }
        next
    }

    /// An exponent marker (`e`/`E`, or `p`/`P` after hex) is pending.
    /// Scan it with its optional sign and digits.
    fn scan_exponent(&mut self) {
        let Some(marker) = self.cursor.next() else {
            return;
        };
        self.emit(Channel::Code, marker);
        if let Some(sign @ ('+' | '-')) = self.cursor.peek() {
            self.cursor.next();
            self.emit(Channel::Code, sign);
        }
        let mut count = 0;
        loop {
            match self.cursor.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.next();
                    self.emit(Channel::Code, c);
                    count += 1;
                }
                _ => break,
            }
        }
        if count == 0 {
            self.warn_at(
                self.cursor.line(),
                format!("Exponent {marker} not followed by (optional sign and) one or more digits"),
            );
        }
    }
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}
