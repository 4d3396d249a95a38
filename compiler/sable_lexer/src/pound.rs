//! `#` forms: raw string delimiters, extended regex literals, directive
//! keywords, and editor placeholders.

use crate::cursor::{Cursor, ScannerState};
use crate::lexer::Scanned;
use crate::operator;
use crate::regex;
use crate::token::{PoundKeyword, TokenKind};

/// Dispatch a `#`. The cursor sits on the first `#`.
///
/// In order of preference: the opening delimiter of a raw string
/// (`#`s followed by a quote), an extended regex literal (`#`s followed by
/// `/`), a recognized directive (`#if`, `#available`, ...), and finally the
/// bare pound token. An unrecognized directive name is *not* consumed — it
/// lexes as its own identifier after the pound.
pub(crate) fn lex_pound(cursor: &mut Cursor<'_>) -> Scanned {
    let start = *cursor;

    let mut delimiter_len = 0u32;
    while cursor.advance_matching(b'#') {
        delimiter_len += 1;
    }
    match cursor.current() {
        b'"' | b'\'' => {
            return Scanned::with_transition(
                TokenKind::RawStringDelimiter,
                ScannerState::AfterRawStringDelimiter { delimiter_len },
            );
        }
        b'/' => {
            *cursor = start;
            if let Some(scanned) = regex::try_lex_regex_literal(cursor) {
                return scanned;
            }
        }
        _ => {}
    }

    // Not a raw string or regex: only a single `#` participates in the
    // directive form.
    *cursor = start;
    cursor.advance();
    lex_magic_pound(cursor)
}

/// Match the directive vocabulary after a consumed `#`.
fn lex_magic_pound(cursor: &mut Cursor<'_>) -> Scanned {
    let first = cursor.current();
    if !first.is_ascii_alphabetic() && first != b'_' {
        return Scanned::token(TokenKind::Pound);
    }

    let mut tmp = *cursor;
    let name_start = tmp.pos();
    tmp.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    match PoundKeyword::lookup(tmp.slice(name_start, tmp.pos())) {
        Some(keyword) => {
            *cursor = tmp;
            Scanned::token(TokenKind::PoundKeyword(keyword))
        }
        None => Scanned::token(TokenKind::Pound),
    }
}

/// Try to lex `<#name#>`. The cursor sits on the `<`; returns `None` (cursor
/// untouched) unless a `#>` closes the placeholder on the same line, in
/// which case the whole placeholder lexes as one identifier.
pub(crate) fn try_lex_editor_placeholder(cursor: &mut Cursor<'_>) -> Option<Scanned> {
    debug_assert!(cursor.current() == b'<' && cursor.peek() == b'#');
    if !operator::placeholder_closes_on_line(cursor) {
        return None;
    }
    cursor.advance();
    cursor.advance();
    loop {
        if cursor.current() == b'#' && cursor.peek() == b'>' {
            cursor.advance();
            cursor.advance();
            return Some(Scanned::token(TokenKind::Identifier));
        }
        cursor.advance();
    }
}
