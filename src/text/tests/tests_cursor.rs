//! Tests for the IDL-aware cursor

use crate::base::SourceLocation;
use crate::text::{IdlCursor, TextError, is_shape_id_character};

#[test]
fn test_rewind_positions_on_location() {
    let text = "structure Foo {\n    bar: PrimitiveInteger\n}\n";
    let mut cursor = IdlCursor::new(text);
    cursor.rewind(&SourceLocation::new("a.smithy", 2, 5)).unwrap();
    assert_eq!(cursor.peek(), Some('b'));
    assert_eq!((cursor.line(), cursor.column()), (2, 5));
    assert_eq!(usize::from(cursor.position()), 20);
}

#[test]
fn test_rewind_past_end_fails() {
    let mut cursor = IdlCursor::new("string Foo\n");
    assert_eq!(
        cursor.rewind(&SourceLocation::new("a.smithy", 3, 1)),
        Err(TextError::PositionNotFound { line: 3, column: 1 })
    );
}

#[test]
fn test_rewind_can_move_backwards() {
    let text = "a\nb\nc\n";
    let mut cursor = IdlCursor::new(text);
    cursor.rewind(&SourceLocation::new("a.smithy", 3, 1)).unwrap();
    cursor.rewind(&SourceLocation::new("a.smithy", 1, 1)).unwrap();
    assert_eq!(cursor.peek(), Some('a'));
}

#[test]
fn test_ws_skips_separators_and_comments() {
    let text = " ,\t// note: a comment\r\n  // another\n\nInteger";
    let mut cursor = IdlCursor::new(text);
    cursor.ws();
    assert_eq!(cursor.peek(), Some('I'));
    assert_eq!(cursor.line(), 4);
    assert_eq!(cursor.column(), 1);
}

#[test]
fn test_ws_stops_at_single_slash() {
    let mut cursor = IdlCursor::new("  /x");
    cursor.ws();
    assert_eq!(cursor.peek(), Some('/'));
}

#[test]
fn test_consume_while_returns_consumed_text() {
    let mut cursor = IdlCursor::new("bar: smithy.api#PrimitiveLong, baz");
    assert_eq!(cursor.consume_while(|c| c != ':'), "bar");
    cursor.skip();
    cursor.ws();
    let start = cursor.position();
    assert_eq!(
        cursor.consume_while(is_shape_id_character),
        "smithy.api#PrimitiveLong"
    );
    assert_eq!(usize::from(start), 5);
    assert_eq!(cursor.peek(), Some(','));
}

#[test]
fn test_skip_tracks_lines() {
    let mut cursor = IdlCursor::new("ab\ncd");
    for _ in 0..4 {
        cursor.skip();
    }
    assert_eq!((cursor.line(), cursor.column()), (2, 2));
    cursor.skip();
    assert!(cursor.eof());
    // skipping at the end is a no-op
    cursor.skip();
    assert!(cursor.eof());
    assert_eq!(cursor.peek(), None);
}

#[test]
fn test_reset_returns_to_start() {
    let mut cursor = IdlCursor::new("ab\ncd");
    cursor.consume_rest_of_line();
    assert_eq!(cursor.peek(), Some('\n'));
    cursor.reset();
    assert_eq!(cursor.peek_nth(1), Some('b'));
}
