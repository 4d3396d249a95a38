//! Identifier recognition: plain names, backtick-escaped names, and dollar
//! identifiers, with reserved-word resolution.

use crate::cursor::Cursor;
use crate::lexeme::LexemeFlags;
use crate::lexer::Scanned;
use crate::token::{Keyword, TokenKind};
use crate::unicode;

/// Lex an identifier. The cursor sits on a valid identifier-start scalar.
///
/// The lexed text is resolved against the reserved-word table; a bare `_`
/// becomes the wildcard token.
pub(crate) fn lex_identifier(cursor: &mut Cursor<'_>, text_start: u32) -> Scanned {
    cursor.advance_if(unicode::is_identifier_start);
    cursor.advance_while(unicode::is_identifier_continue);

    let text = cursor.slice_from(text_start);
    if text == b"_" {
        return Scanned::token(TokenKind::Wildcard);
    }
    match Keyword::lookup(text) {
        Some(keyword) => Scanned::token(TokenKind::Keyword(keyword)),
        None => Scanned::token(TokenKind::Identifier),
    }
}

/// Lex a backtick form. The cursor sits on the backtick.
///
/// `` `name` `` and the special `` `$` `` both yield an identifier carrying
/// the escaped flag; a backtick that opens no well-formed escape yields the
/// bare backtick token, consuming only itself.
pub(crate) fn lex_escaped_identifier(cursor: &mut Cursor<'_>) -> Scanned {
    cursor.advance();
    let after_backtick = *cursor;

    // The `` `$` `` form names the compiler-generated storage of a property.
    if cursor.current() == b'$' && cursor.peek() == b'`' {
        cursor.advance();
        cursor.advance();
        return escaped_identifier();
    }

    if cursor.advance_if(unicode::is_identifier_start) {
        cursor.advance_while(unicode::is_identifier_continue);
        if cursor.advance_matching(b'`') {
            return escaped_identifier();
        }
    }

    *cursor = after_backtick;
    Scanned::token(TokenKind::Backtick)
}

fn escaped_identifier() -> Scanned {
    let mut scanned = Scanned::token(TokenKind::Identifier);
    scanned.flags.set(LexemeFlags::ESCAPED_IDENTIFIER);
    scanned
}

/// Lex a `$` form. The cursor sits on the dollar sign.
///
/// `$` + digits is a dollar identifier (anonymous closure argument); `$`
/// followed by identifier characters, or a bare `$`, is an ordinary
/// identifier.
pub(crate) fn lex_dollar_identifier(cursor: &mut Cursor<'_>) -> Scanned {
    cursor.advance();
    let digits_start = cursor.pos();
    cursor.eat_while(|b| b.is_ascii_digit());

    // A non-digit identifier character turns the whole thing into a plain
    // identifier (`$foo`, `$0x`).
    let mut probe = *cursor;
    if probe.advance_if(unicode::is_identifier_continue) {
        *cursor = probe;
        cursor.advance_while(unicode::is_identifier_continue);
        return Scanned::token(TokenKind::Identifier);
    }

    if cursor.pos() > digits_start {
        Scanned::token(TokenKind::DollarIdentifier)
    } else {
        Scanned::token(TokenKind::Identifier)
    }
}
