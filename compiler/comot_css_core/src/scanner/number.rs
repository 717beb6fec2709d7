use super::{consume_ident_sequence, Scanner};
use crate::classify::{is_digit, would_start_ident};
use crate::cursor::Cursor;
use crate::tag::{Token, TokenKind, TokenTag};

/// CSS numeric type flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// No fraction and no exponent.
    Integer,
    Number,
}

/// Consume a number body: `[+-]? digits* ( . digits+ )? ( [eE] [+-]? digits+ )?`.
///
/// The `.` and the exponent marker are only taken when digits follow them.
/// The cursor must be on something that starts a number.
pub fn consume_number(cursor: &mut Cursor<'_>) -> NumberType {
    let mut ty = NumberType::Integer;

    if matches!(cursor.current(), '+' | '-') {
        cursor.bump();
    }
    cursor.eat_while(is_digit);

    if cursor.current() == '.' && is_digit(cursor.char_at(1)) {
        cursor.bump();
        cursor.eat_while(is_digit);
        ty = NumberType::Number;
    }

    if matches!(cursor.current(), 'e' | 'E') {
        let sign = matches!(cursor.char_at(1), '+' | '-');
        let marker_len = if sign { 2 } else { 1 };
        if is_digit(cursor.char_at(marker_len)) {
            cursor.advance(marker_len);
            cursor.eat_while(is_digit);
            ty = NumberType::Number;
        }
    }

    ty
}

impl Scanner<'_> {
    /// Number, percentage or dimension token.
    pub(super) fn numeric(&mut self) -> Token {
        consume_number(&mut self.cursor);

        let (a, b, c) = (
            self.cursor.char_at(0),
            self.cursor.char_at(1),
            self.cursor.char_at(2),
        );
        if would_start_ident(a, b, c) {
            consume_ident_sequence(&mut self.cursor);
            self.finish(TokenTag::Dimension, TokenKind::Valid)
        } else if a == '%' {
            self.cursor.bump();
            self.finish(TokenTag::Percentage, TokenKind::Valid)
        } else {
            self.finish(TokenTag::Number, TokenKind::Valid)
        }
    }
}
