use super::*;
use pretty_assertions::assert_eq;
use std::io::Write;

fn span_at(buf: &SourceBuffer, offset: usize, len: usize) -> Span {
    buf.span(offset, len).expect("span should fit in the buffer")
}

// === Construction ===

#[test]
fn from_string_keeps_text_and_uses_sentinel_path() {
    let buf = SourceBuffer::from_string("a\r\nb");
    assert_eq!(buf.text(), "a\r\nb");
    assert_eq!(buf.path(), NO_PATH);
}

#[test]
fn from_path_normalizes_newlines() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"one\r\ntwo\rthree\n").expect("write temp file");

    let buf = SourceBuffer::from_path(file.path()).expect("readable file");
    assert_eq!(buf.text(), "one\ntwo\nthree\n");
    assert_eq!(buf.path(), file.path().display().to_string());
}

#[test]
fn from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.zari");
    let err = SourceBuffer::from_path(&missing).expect_err("file does not exist");
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("missing.zari"));
}

#[test]
fn from_path_invalid_utf8_is_decode_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"ok \xFF bad").expect("write temp file");

    let err = SourceBuffer::from_path(file.path()).expect_err("invalid UTF-8");
    match err {
        SourceError::Decode { offset, .. } => assert_eq!(offset, 3),
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[test]
fn normalize_borrows_when_clean() {
    assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    assert_eq!(normalize_newlines("a\r\n\r\rb"), "a\n\n\nb");
}

// === Positions ===

#[test]
fn advance_counts_characters_not_bytes() {
    let buf = SourceBuffer::from_string("héllo");
    let pos = buf.advance(buf.start(), 2);
    assert_eq!(pos.byte_offset(), 3);
    assert_eq!(buf.char_at(pos), Some('l'));
    assert_eq!(buf.distance(buf.start(), pos), 2);
}

#[test]
fn advance_clamps_at_end() {
    let buf = SourceBuffer::from_string("abc");
    assert_eq!(buf.advance(buf.start(), 10), buf.end());
    assert_eq!(buf.char_at(buf.end()), None);
}

#[test]
fn line_col_is_one_based() {
    let buf = SourceBuffer::from_string("ab\ncdé\nf");
    let pos = buf.pos_of_char(6).expect("in range");
    assert_eq!(buf.char_at(pos), Some('\n'));
    assert_eq!(buf.line_col(pos), (2, 4));
    assert_eq!(buf.line_col(buf.start()), (1, 1));
    assert_eq!(buf.line_col(buf.end()), (3, 2));
}

#[test]
fn pos_of_char_allows_end() {
    let buf = SourceBuffer::from_string("ab");
    assert_eq!(buf.pos_of_char(2), Some(buf.end()));
    assert_eq!(buf.pos_of_char(3), None);
}

// === Substring / Contains ===

#[test]
fn substring_takes_span_characters() {
    let buf = SourceBuffer::from_string("hello world");
    let span = Span::new(buf.start(), 5, 1, 1);
    assert_eq!(buf.substring(span), "hello");
}

#[test]
fn substring_clamps_overrun() {
    let buf = SourceBuffer::from_string("hello");
    let span = Span::new(buf.advance(buf.start(), 3), 10, 1, 4);
    assert_eq!(buf.substring(span), "lo");
}

#[test]
fn contains_checks_remaining_characters() {
    let buf = SourceBuffer::from_string("añb");
    assert!(buf.contains(buf.start(), 3));
    assert!(!buf.contains(buf.start(), 4));
    assert!(buf.contains(buf.end(), 0));
    assert!(!buf.contains(TextPos::from_byte_offset(2), 1)); // inside 'ñ'
}

#[test]
fn span_helper_rejects_overrun() {
    let buf = SourceBuffer::from_string("abc");
    assert!(buf.span(1, 2).is_some());
    assert!(buf.span(1, 3).is_none());
    assert!(buf.span(4, 0).is_none());
}

// === Lines ===

#[test]
fn lines_stop_after_span_end() {
    let buf = SourceBuffer::from_string("line 1\nline 2\nline 3");
    let span = Span::new(buf.start(), 10, 1, 1);
    assert_eq!(buf.lines(span), vec![(1, "line 1"), (2, "line 2")]);
}

#[test]
fn lines_return_whole_lines_for_mid_line_span() {
    let buf = SourceBuffer::from_string("line 1\nline 2\nline 3");
    let span = span_at(&buf, 5, 5);
    assert_eq!(buf.lines(span), vec![(1, "line 1"), (2, "line 2")]);
}

#[test]
fn lines_single_line_without_terminator() {
    let buf = SourceBuffer::from_string("let x = 9$ + 1");
    let span = span_at(&buf, 8, 2);
    assert_eq!(buf.lines(span), vec![(1, "let x = 9$ + 1")]);
}

#[test]
fn lines_span_ending_on_terminator_stays_on_one_line() {
    let buf = SourceBuffer::from_string("\"hello\nworld\"");
    let span = span_at(&buf, 0, 7);
    assert_eq!(buf.lines(span), vec![(1, "\"hello")]);
}

#[test]
fn lines_last_line_of_file() {
    let buf = SourceBuffer::from_string("a\nbc\ndef");
    let span = span_at(&buf, 6, 2);
    assert_eq!(buf.lines(span), vec![(3, "def")]);
}

#[test]
fn lines_zero_width_at_end_yields_one_line() {
    let buf = SourceBuffer::from_string("abc");
    let span = Span::point(buf.end(), 1, 4);
    assert_eq!(buf.lines(span), vec![(1, "abc")]);
}

#[test]
fn source_lines_report_starts_and_terminators() {
    let buf = SourceBuffer::from_string("ab\ncd\nef");
    let span = span_at(&buf, 1, 6);
    let lines = buf.source_lines(span);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].start, buf.start());
    assert!(lines[0].terminated);
    assert_eq!(lines[1].start.byte_offset(), 3);
    assert_eq!(lines[2].text, "ef");
    assert!(!lines[2].terminated);
}

#[test]
#[should_panic(expected = "runs past the end")]
fn lines_panic_on_out_of_range_span() {
    let buf = SourceBuffer::from_string("short");
    let _ = buf.lines(Span::new(buf.start(), 20, 1, 1));
}

#[test]
fn buffer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SourceBuffer>();
}
