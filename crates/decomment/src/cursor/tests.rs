use super::Cursor;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn next_yields_characters_in_order() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.next(), Some('b'));
    assert_eq!(cursor.next(), Some('c'));
    assert_eq!(cursor.next(), None);
}

#[test]
fn next_keeps_returning_none_at_end() {
    let mut cursor = Cursor::new("");
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
}

#[test]
fn next_decodes_multibyte_characters() {
    let mut cursor = Cursor::new("aéz");
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.next(), Some('é'));
    assert_eq!(cursor.next(), Some('z'));
    assert_eq!(cursor.next(), None);
}

// === Peek ===

#[test]
fn peek_does_not_consume() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
}

#[test]
fn peek_at_end_is_none() {
    let mut cursor = Cursor::new("x");
    cursor.next();
    assert_eq!(cursor.peek(), None);
}

// === Pushback ===

#[test]
fn pushed_back_character_is_returned_first() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.next(), Some('a'));
    cursor.push_back('a');
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.next(), Some('b'));
}

#[test]
fn two_pushbacks_come_back_in_lifo_order() {
    let mut cursor = Cursor::new("xy z");
    assert_eq!(cursor.next(), Some('x'));
    assert_eq!(cursor.next(), Some('y'));
    cursor.push_back('y');
    cursor.push_back('x');
    assert_eq!(cursor.next(), Some('x'));
    assert_eq!(cursor.next(), Some('y'));
    assert_eq!(cursor.next(), Some(' '));
}

// === Line Tracking ===

#[test]
fn line_starts_at_one() {
    let cursor = Cursor::new("a\nb");
    assert_eq!(cursor.line(), 1);
}

#[test]
fn consuming_newline_increments_line() {
    let mut cursor = Cursor::new("a\nb\nc");
    cursor.next(); // a
    assert_eq!(cursor.line(), 1);
    cursor.next(); // \n
    assert_eq!(cursor.line(), 2);
    cursor.next(); // b
    cursor.next(); // \n
    assert_eq!(cursor.line(), 3);
}

#[test]
fn pushing_back_newline_rolls_the_line_counter_back() {
    let mut cursor = Cursor::new("\nx");
    assert_eq!(cursor.next(), Some('\n'));
    assert_eq!(cursor.line(), 2);
    cursor.push_back('\n');
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.next(), Some('\n'));
    assert_eq!(cursor.line(), 2);
}

// === take_until ===

#[test]
fn take_until_stops_at_needle_without_consuming_it() {
    let mut cursor = Cursor::new("body)tail");
    assert_eq!(cursor.take_until(b')'), "body");
    assert_eq!(cursor.next(), Some(')'));
    assert_eq!(cursor.next(), Some('t'));
}

#[test]
fn take_until_runs_to_end_when_needle_is_absent() {
    let mut cursor = Cursor::new("no close paren");
    assert_eq!(cursor.take_until(b')'), "no close paren");
    assert_eq!(cursor.next(), None);
}

#[test]
fn take_until_counts_skipped_newlines() {
    let mut cursor = Cursor::new("a\nb\nc)d");
    assert_eq!(cursor.take_until(b')'), "a\nb\nc");
    assert_eq!(cursor.line(), 3);
}

#[test]
fn take_until_handles_multibyte_content() {
    let mut cursor = Cursor::new("héllo)x");
    assert_eq!(cursor.take_until(b')'), "héllo");
    assert_eq!(cursor.next(), Some(')'));
}

#[test]
fn take_until_with_empty_skip() {
    let mut cursor = Cursor::new(")x");
    assert_eq!(cursor.take_until(b')'), "");
    assert_eq!(cursor.next(), Some(')'));
}
