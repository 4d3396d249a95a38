//! Speculative regex-literal lexing.
//!
//! `/.../` and `#/.../#` are only regex literals in positions where a `/`
//! cannot be division — the position must not be left-bound. The body is
//! lexed tentatively on a copy of the cursor; any malformation restores the
//! original cursor and the caller falls back to operator lexing. Rollback is
//! a plain cursor assignment, never control-flow by panic.

use crate::cursor::Cursor;
use crate::lexer::Scanned;
use crate::token::TokenKind;

/// Try to lex a regex literal. The cursor sits on `/` or on the `#`s of an
/// extended literal. Returns `None` with the cursor untouched when the
/// bytes do not form one.
pub(crate) fn try_lex_regex_literal(cursor: &mut Cursor<'_>) -> Option<Scanned> {
    // A left-bound `/` is division, never a regex.
    if cursor.is_left_bound() {
        return None;
    }
    let start = *cursor;

    let mut pound_count = 0u32;
    while cursor.advance_matching(b'#') {
        pound_count += 1;
    }
    if !cursor.advance_matching(b'/') {
        *cursor = start;
        return None;
    }

    // An unadorned regex cannot start with whitespace; `a / b` stays
    // division.
    if pound_count == 0 && matches!(cursor.current(), b' ' | b'\t' | b'\n') {
        *cursor = start;
        return None;
    }

    // A line break after the opening delimiter (allowing horizontal
    // whitespace first) selects the multi-line form.
    let multiline = {
        let mut tmp = *cursor;
        tmp.eat_while(|b| b == b' ' || b == b'\t');
        matches!(tmp.current(), b'\n' | b'\r')
    };

    let mut paren_depth = 0u32;
    loop {
        match cursor.current() {
            0 if cursor.is_eof() => {
                *cursor = start;
                return None;
            }
            b'\n' | b'\r' if !multiline => {
                *cursor = start;
                return None;
            }
            b'\\' => {
                cursor.advance();
                if !cursor.is_eof() {
                    cursor.advance();
                }
            }
            b'(' => {
                paren_depth += 1;
                cursor.advance();
            }
            b')' => {
                if paren_depth == 0 {
                    *cursor = start;
                    return None;
                }
                paren_depth -= 1;
                cursor.advance();
            }
            b'/' => {
                // A plain regex cannot end with whitespace before the
                // closing slash; that shape is division again.
                if !multiline
                    && pound_count == 0
                    && matches!(cursor.previous(), b' ' | b'\t')
                {
                    *cursor = start;
                    return None;
                }
                let mut tmp = *cursor;
                tmp.advance();
                let mut hashes = 0u32;
                while hashes < pound_count && tmp.advance_matching(b'#') {
                    hashes += 1;
                }
                if hashes < pound_count {
                    // Not enough hashes: the slash is body content of the
                    // extended literal.
                    cursor.advance();
                    continue;
                }
                // The closing delimiter must not glue onto a comment.
                if pound_count == 0 && matches!(tmp.current(), b'/' | b'*') {
                    *cursor = start;
                    return None;
                }
                *cursor = tmp;
                return Some(Scanned::token(TokenKind::RegexLiteral));
            }
            _ => {
                cursor.advance();
            }
        }
    }
}
