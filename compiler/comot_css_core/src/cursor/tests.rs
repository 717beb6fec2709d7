use super::*;

fn entries(text: &str) -> Vec<DecodedEntry> {
    text.chars()
        .zip(0..)
        .map(|(c, i)| DecodedEntry::new(u32::from(c), i))
        .collect()
}

// === Basic Navigation ===

#[test]
fn starts_at_line_one_column_one() {
    let buf = entries("abc");
    let cursor = Cursor::new(&buf);
    assert_eq!(cursor.position(), Position::START);
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn bump_returns_consumed_entry() {
    let buf = entries("ab");
    let mut cursor = Cursor::new(&buf);
    assert_eq!(cursor.bump().map(DecodedEntry::as_char), Some('a'));
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.column(), 2);
}

#[test]
fn bump_at_end_does_not_move() {
    let buf = entries("a");
    let mut cursor = Cursor::new(&buf);
    cursor.bump();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.index(), 1);
    assert_eq!(cursor.column(), 2);
}

#[test]
fn empty_sequence_is_at_end() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current(), EOF_CHAR);
}

// === Lookahead ===

#[test]
fn peek_looks_ahead_without_moving() {
    let buf = entries("xyz");
    let cursor = Cursor::new(&buf);
    assert_eq!(cursor.peek(2).map(|e| e.scalar), Some(u32::from('z')));
    assert_eq!(cursor.peek(3), None);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn lookahead_past_end_yields_sentinel() {
    let buf = entries("x");
    let cursor = Cursor::new(&buf);
    assert_eq!(cursor.scalar(0), u32::from('x'));
    assert_eq!(cursor.scalar(1), 0);
    assert_eq!(cursor.char_at(5), EOF_CHAR);
}

// === Advance ===

#[test]
fn advance_tracks_lines_and_columns() {
    let buf = entries("ab\ncd");
    let mut cursor = Cursor::new(&buf);
    let pos = cursor.advance(4);
    assert_eq!(
        pos,
        Some(Position {
            index: 4,
            line: 2,
            column: 2,
        })
    );
}

#[test]
fn advance_past_end_clamps() {
    let buf = entries("ab");
    let mut cursor = Cursor::new(&buf);
    assert_eq!(cursor.advance(5), None);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.index(), 2);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn advance_zero_is_a_no_op() {
    let buf = entries("ab");
    let mut cursor = Cursor::new(&buf);
    assert_eq!(cursor.advance(0), Some(Position::START));
}

#[test]
fn eat_while_stops_at_end() {
    let buf = entries("   ");
    let mut cursor = Cursor::new(&buf);
    cursor.eat_while(|c| c == ' ');
    assert!(cursor.is_at_end());
}

// === Step Back ===

#[test]
fn step_back_at_start_returns_none() {
    let buf = entries("a");
    let mut cursor = Cursor::new(&buf);
    assert_eq!(cursor.step_back(), None);
    assert_eq!(cursor.position(), Position::START);
}

#[test]
fn step_back_restores_column() {
    let buf = entries("abc");
    let mut cursor = Cursor::new(&buf);
    cursor.advance(2);
    let entry = cursor.step_back();
    assert_eq!(entry.map(DecodedEntry::as_char), Some('b'));
    assert_eq!(cursor.column(), 2);
    assert_eq!(cursor.current(), 'b');
}

#[test]
fn step_back_over_line_feed_restores_previous_line() {
    let buf = entries("x\nabc\nd");
    let mut cursor = Cursor::new(&buf);
    cursor.advance(6);
    assert_eq!((cursor.line(), cursor.column()), (3, 1));
    cursor.step_back();
    assert_eq!(cursor.current(), '\n');
    assert_eq!((cursor.line(), cursor.column()), (2, 4));
}

#[test]
fn step_back_over_first_line_feed() {
    let buf = entries("ab\n");
    let mut cursor = Cursor::new(&buf);
    cursor.advance(3);
    cursor.step_back();
    assert_eq!((cursor.line(), cursor.column()), (1, 3));
}

#[test]
fn step_back_then_bump_is_identity() {
    let buf = entries("a\n\nb");
    let mut cursor = Cursor::new(&buf);
    for _ in 0..4 {
        cursor.bump();
        let before = cursor.position();
        cursor.step_back();
        cursor.bump();
        assert_eq!(cursor.position(), before);
    }
}
