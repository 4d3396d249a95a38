//! Numeric literal recognition: decimal, hexadecimal, octal, and binary
//! integers, and decimal/hexadecimal floats.
//!
//! A `.` continues a literal only when a digit follows it and the byte
//! before the literal is not itself a `.` — so `x.0.1` stays member access
//! and `4.x` lexes as `4` `.` `x`. Malformed digits never abort: the
//! offending identifier-continuation run is consumed into the token and a
//! single error records the first bad position.

use crate::cursor::Cursor;
use crate::lexeme::{LexError, LexErrorKind};
use crate::lexer::Scanned;
use crate::token::TokenKind;
use crate::unicode;

/// Lex a numeric literal. The cursor sits on the first digit; the byte
/// before the token (trivia included) is still visible as
/// [`previous()`](Cursor::previous) for the member-access dot rule.
pub(crate) fn lex_number(cursor: &mut Cursor<'_>, text_start: u32) -> Scanned {
    let prev_before_token = cursor.previous();

    if cursor.current() == b'0' {
        match cursor.peek() {
            b'x' => return lex_hex_number(cursor, text_start),
            b'o' => return lex_radix_number(cursor, text_start, Radix::Octal),
            b'b' => return lex_radix_number(cursor, text_start, Radix::Binary),
            _ => {}
        }
    }

    cursor.eat_while(is_decimal_digit_or_separator);

    // Fraction: a dot continues the literal only before a digit, and not
    // when the literal itself follows a dot (member access chains).
    if cursor.current() == b'.'
        && cursor.peek().is_ascii_digit()
        && prev_before_token != b'.'
    {
        cursor.advance();
        cursor.eat_while(is_decimal_digit_or_separator);
        if matches!(cursor.current(), b'e' | b'E') {
            return lex_decimal_exponent(cursor, text_start);
        }
        return finish_literal(cursor, text_start, TokenKind::FloatLiteral);
    }

    // Exponent without a fraction: `1e9`.
    if matches!(cursor.current(), b'e' | b'E') {
        return lex_decimal_exponent(cursor, text_start);
    }

    finish_integer(cursor, text_start, LexErrorKind::InvalidDecimalDigit)
}

#[derive(Clone, Copy)]
enum Radix {
    Octal,
    Binary,
}

impl Radix {
    fn is_digit(self, byte: u8) -> bool {
        match self {
            Radix::Octal => (b'0'..=b'7').contains(&byte),
            Radix::Binary => byte == b'0' || byte == b'1',
        }
    }

    fn error_kind(self) -> LexErrorKind {
        match self {
            Radix::Octal => LexErrorKind::InvalidOctalDigit,
            Radix::Binary => LexErrorKind::InvalidBinaryDigit,
        }
    }
}

/// `0o` / `0b` literals. The cursor sits on the leading `0`.
fn lex_radix_number(cursor: &mut Cursor<'_>, text_start: u32, radix: Radix) -> Scanned {
    cursor.advance();
    cursor.advance();

    if !radix.is_digit(cursor.current()) {
        // `0b_1` is rejected too: the first position must be a real digit.
        return consume_invalid_digits(cursor, text_start, radix.error_kind());
    }
    cursor.eat_while(|b| radix.is_digit(b) || b == b'_');

    if is_trailing_junk(cursor) {
        return consume_invalid_digits(cursor, text_start, radix.error_kind());
    }
    Scanned::token(TokenKind::IntegerLiteral)
}

/// `0x` literals: hex integers and hex floats. The cursor sits on the `0`.
fn lex_hex_number(cursor: &mut Cursor<'_>, text_start: u32) -> Scanned {
    cursor.advance();
    cursor.advance();

    if !cursor.current().is_ascii_hexdigit() {
        return consume_invalid_digits(cursor, text_start, LexErrorKind::InvalidHexDigit);
    }
    cursor.eat_while(is_hex_digit_or_separator);

    // Optional fraction.
    let mut on_dot: Option<Cursor<'_>> = None;
    if cursor.current() == b'.' && cursor.peek().is_ascii_hexdigit() {
        on_dot = Some(*cursor);
        cursor.advance();
        cursor.eat_while(is_hex_digit_or_separator);
    }

    if !matches!(cursor.current(), b'p' | b'P') {
        if let Some(dot) = on_dot {
            // `0xff.description`: a fraction whose first character is not a
            // decimal digit is member access — rewind to the dot.
            if !dot.peek().is_ascii_digit() {
                *cursor = dot;
                return Scanned::token(TokenKind::IntegerLiteral);
            }
            // A real fraction with no exponent.
            return Scanned {
                error: Some(LexError::new(
                    LexErrorKind::ExpectedBinaryExponentInHexFloat,
                    cursor.pos() - text_start,
                )),
                ..Scanned::token(TokenKind::FloatLiteral)
            };
        }
        if is_trailing_junk(cursor) {
            return consume_invalid_digits(cursor, text_start, LexErrorKind::InvalidHexDigit);
        }
        return Scanned::token(TokenKind::IntegerLiteral);
    }

    // Binary exponent.
    cursor.advance();
    cursor.advance_matching_either(b'+', b'-');
    if !cursor.current().is_ascii_digit() {
        return exponent_error(cursor, text_start);
    }
    cursor.eat_while(is_decimal_digit_or_separator);

    if is_trailing_junk(cursor) {
        return consume_invalid_digits(
            cursor,
            text_start,
            LexErrorKind::InvalidFloatingPointExponentDigit,
        )
        .retagged(TokenKind::FloatLiteral);
    }
    Scanned::token(TokenKind::FloatLiteral)
}

/// `e`/`E` exponent of a decimal literal. The cursor sits on the marker.
fn lex_decimal_exponent(cursor: &mut Cursor<'_>, text_start: u32) -> Scanned {
    cursor.advance();
    cursor.advance_matching_either(b'+', b'-');
    if !cursor.current().is_ascii_digit() {
        return exponent_error(cursor, text_start);
    }
    cursor.eat_while(is_decimal_digit_or_separator);

    if is_trailing_junk(cursor) {
        return consume_invalid_digits(
            cursor,
            text_start,
            LexErrorKind::InvalidFloatingPointExponentDigit,
        )
        .retagged(TokenKind::FloatLiteral);
    }
    Scanned::token(TokenKind::FloatLiteral)
}

/// Diagnose a missing exponent digit; the cursor sits where the digit was
/// expected.
///
/// Three cases: an underscore cannot lead an exponent, another identifier
/// character is an invalid digit, and anything else (whitespace, EOF) means
/// the digits are simply missing.
fn exponent_error(cursor: &mut Cursor<'_>, text_start: u32) -> Scanned {
    let offset = cursor.pos() - text_start;
    let kind = if cursor.current() == b'_' {
        LexErrorKind::InvalidFloatingPointExponentCharacter
    } else if is_trailing_junk(cursor) {
        LexErrorKind::InvalidFloatingPointExponentDigit
    } else {
        LexErrorKind::ExpectedDigitInFloat
    };
    consume_identifier_continuation(cursor);
    Scanned {
        error: Some(LexError::new(kind, offset)),
        ..Scanned::token(TokenKind::FloatLiteral)
    }
}

/// Plain integer epilogue: attach an error if identifier junk trails the
/// digits.
fn finish_integer(cursor: &mut Cursor<'_>, text_start: u32, kind: LexErrorKind) -> Scanned {
    if is_trailing_junk(cursor) {
        return consume_invalid_digits(cursor, text_start, kind);
    }
    Scanned::token(TokenKind::IntegerLiteral)
}

/// Float epilogue, same junk rule as integers.
fn finish_literal(cursor: &mut Cursor<'_>, text_start: u32, token: TokenKind) -> Scanned {
    if is_trailing_junk(cursor) {
        return consume_invalid_digits(cursor, text_start, LexErrorKind::InvalidDecimalDigit)
            .retagged(token);
    }
    Scanned::token(token)
}

/// Record one error at the current position, then swallow the rest of the
/// identifier-continuation run into the literal.
fn consume_invalid_digits(
    cursor: &mut Cursor<'_>,
    text_start: u32,
    kind: LexErrorKind,
) -> Scanned {
    let offset = cursor.pos() - text_start;
    consume_identifier_continuation(cursor);
    Scanned {
        error: Some(LexError::new(kind, offset)),
        ..Scanned::token(TokenKind::IntegerLiteral)
    }
}

fn consume_identifier_continuation(cursor: &mut Cursor<'_>) {
    cursor.advance_while(unicode::is_identifier_continue);
}

/// Whether the byte after the digits would merge into the literal as an
/// identifier character (making the literal malformed).
fn is_trailing_junk(cursor: &Cursor<'_>) -> bool {
    let byte = cursor.current();
    if byte.is_ascii_alphanumeric() || byte == b'_' {
        return true;
    }
    if byte < 0x80 {
        return false;
    }
    let mut tmp = *cursor;
    matches!(
        unicode::advance_validating_utf8_character(&mut tmp),
        Some(c) if unicode::is_identifier_continue(c)
    )
}

fn is_decimal_digit_or_separator(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'_'
}

fn is_hex_digit_or_separator(byte: u8) -> bool {
    byte.is_ascii_hexdigit() || byte == b'_'
}
