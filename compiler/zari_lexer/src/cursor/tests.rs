use super::*;

#[test]
fn advance_tracks_line_and_column() {
    let mut cursor = Cursor::new("ab\ncd");
    assert_eq!((cursor.line(), cursor.column()), (1, 1));
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!((cursor.line(), cursor.column()), (1, 2));
    cursor.advance_n(2);
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
    assert_eq!(cursor.current(), Some('c'));
}

#[test]
fn peek_looks_ahead_without_consuming() {
    let cursor = Cursor::new("xyz");
    assert_eq!(cursor.peek(0), Some('x'));
    assert_eq!(cursor.peek(2), Some('z'));
    assert_eq!(cursor.peek(3), None);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn eof_behavior() {
    let mut cursor = Cursor::new("a");
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.advance(), None);
    cursor.advance_n(5);
    assert_eq!(cursor.pos().byte_offset(), 1);
}

#[test]
fn multibyte_characters_count_once() {
    let mut cursor = Cursor::new("é→x");
    let start = cursor;
    cursor.advance_n(2);
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.column(), 3);
    let span = cursor.span_from(&start);
    assert_eq!(span.len, 2);
    assert_eq!(cursor.slice_from(&start), "é→");
    assert_eq!(cursor.pos().byte_offset(), "é→".len());
}

#[test]
fn eat_while_counts_characters() {
    let mut cursor = Cursor::new("   x");
    assert_eq!(cursor.eat_while(|c| c == ' '), 3);
    assert_eq!(cursor.eat_while(|c| c == ' '), 0);
    assert!(cursor.starts_with("x"));
}

#[test]
fn span_from_keeps_start_location() {
    let mut cursor = Cursor::new("a\n  bc");
    cursor.advance_n(4);
    let start = cursor;
    cursor.advance_n(2);
    let span = cursor.span_from(&start);
    assert_eq!((span.line, span.column, span.len), (2, 3, 2));
    assert_eq!(span.start.byte_offset(), 4);
}
