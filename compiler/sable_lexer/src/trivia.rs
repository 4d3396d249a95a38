//! Trivia scanning: bytes that belong to no token but attach to an adjacent
//! one — whitespace, comments, the byte order mark, a leading shebang, and
//! version-control conflict markers.
//!
//! Trivia is scanned in two positions. Leading trivia may contain line
//! breaks (recorded so the driver can set the start-of-line flag); trailing
//! trivia never crosses a line break, so a block comment containing one is
//! left for the next lexeme's leading trivia.
//!
//! Bytes that can begin no token also end up here: malformed UTF-8 is
//! resynchronized and classified as trivia, as are non-breaking spaces and
//! lone curly quotes. A curly-quoted run with a matching closing quote on
//! the same line is instead recovered as an [`TokenKind::Unknown`] token, as
//! is an identifier-continuation scalar with no valid identifier start.

use crate::cursor::Cursor;
use crate::lexer::Scanned;
use crate::token::TokenKind;
use crate::unicode;

/// Whether trivia is being attached before or after a token's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TriviaPosition {
    Leading,
    Trailing,
}

/// Consume trivia at the cursor. Returns `true` if the consumed trivia
/// contained a line break (only possible in leading position).
pub(crate) fn scan_trivia(cursor: &mut Cursor<'_>, position: TriviaPosition) -> bool {
    let mut saw_newline = false;
    loop {
        match cursor.current() {
            b' ' | b'\t' | 0x0B | 0x0C => {
                cursor.advance();
            }
            b'\n' | b'\r' => {
                if position == TriviaPosition::Trailing {
                    break;
                }
                cursor.advance();
                saw_newline = true;
            }
            // Interior null bytes behave as whitespace; the sentinel ends
            // the scan.
            0 => {
                if cursor.is_eof() {
                    break;
                }
                cursor.advance();
            }
            b'/' => match cursor.peek() {
                b'/' => {
                    cursor.advance();
                    cursor.advance();
                    cursor.eat_until_newline_or_eof();
                }
                b'*' => match advance_over_block_comment(cursor, position) {
                    Some(contained_newline) => saw_newline |= contained_newline,
                    None => break,
                },
                _ => break,
            },
            b'#' => {
                // A shebang line is trivia only at the very start of the
                // buffer.
                if cursor.pos() == 0 && cursor.peek() == b'!' {
                    cursor.eat_until_newline_or_eof();
                } else {
                    break;
                }
            }
            // UTF-8 byte order mark (EF BB BF).
            0xEF if cursor.peek() == 0xBB && cursor.peek_at(2) == 0xBF => {
                cursor.advance();
                cursor.advance();
                cursor.advance();
            }
            b'<' | b'>' => {
                if cursor.is_at_line_start() && try_lex_conflict_marker(cursor) {
                    // Conflict marker regions always span lines.
                    saw_newline = true;
                } else {
                    break;
                }
            }
            byte if byte < 0x80 => {
                // Printable ASCII begins a token; remaining control bytes
                // are trivia.
                if (0x21..=0x7E).contains(&byte) {
                    break;
                }
                cursor.advance();
            }
            _ => {
                let snapshot = *cursor;
                match unicode::advance_validating_utf8_character(cursor) {
                    // Malformed sequence: already resynchronized, trivia.
                    None => {}
                    // Non-breaking space.
                    Some('\u{00A0}') => {}
                    Some('\u{201C}') => {
                        if find_closing_curly_quote(&snapshot).is_some() {
                            *cursor = snapshot;
                            break;
                        }
                        // An unpaired curly quote is trivia.
                    }
                    Some(c)
                        if unicode::is_identifier_continue(c) || unicode::is_operator_head(c) =>
                    {
                        *cursor = snapshot;
                        break;
                    }
                    // Anything else (unassigned scalars, stray combining
                    // marks without a base) is trivia.
                    Some(_) => {}
                }
            }
        }
    }
    saw_newline
}

/// Consume a `/* ... */` comment with arbitrary nesting.
///
/// Returns `Some(contained_newline)` when consumed. In trailing position a
/// comment containing a line break is not consumed (`None`); it belongs to
/// the next lexeme. An unterminated comment runs to EOF.
fn advance_over_block_comment(cursor: &mut Cursor<'_>, position: TriviaPosition) -> Option<bool> {
    let snapshot = *cursor;
    cursor.advance();
    cursor.advance();
    let mut depth = 1u32;
    let mut contained_newline = false;
    loop {
        match cursor.current() {
            0 if cursor.is_eof() => break,
            b'\n' | b'\r' => {
                contained_newline = true;
                cursor.advance();
            }
            b'/' if cursor.peek() == b'*' => {
                depth += 1;
                cursor.advance();
                cursor.advance();
            }
            b'*' if cursor.peek() == b'/' => {
                cursor.advance();
                cursor.advance();
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {
                cursor.advance();
            }
        }
    }
    if contained_newline && position == TriviaPosition::Trailing {
        *cursor = snapshot;
        return None;
    }
    Some(contained_newline)
}

/// Which style of conflict marker was found.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ConflictMarkerKind {
    /// `<<<<<<< ` ... `>>>>>>> ` (git).
    Normal,
    /// `>>>> ` ... `<<<<` (Perforce).
    Perforce,
}

/// Try to consume an entire conflict-marker region as trivia.
///
/// The cursor must sit at the start of a line. If the corresponding
/// terminator is never found, nothing is consumed.
fn try_lex_conflict_marker(cursor: &mut Cursor<'_>) -> bool {
    let kind = if starts_with(cursor, b"<<<<<<< ") {
        ConflictMarkerKind::Normal
    } else if starts_with(cursor, b">>>> ") {
        ConflictMarkerKind::Perforce
    } else {
        return false;
    };

    let mut tmp = *cursor;
    tmp.eat_until_newline_or_eof();
    loop {
        if tmp.is_eof() {
            return false;
        }
        // Consume the line break (CRLF as a unit).
        if tmp.current() == b'\r' {
            tmp.advance();
            tmp.advance_matching(b'\n');
        } else {
            tmp.advance();
        }
        match kind {
            ConflictMarkerKind::Normal => {
                if starts_with(&tmp, b">>>>>>> ") {
                    // The whole terminator line is part of the region.
                    tmp.eat_until_newline_or_eof();
                    *cursor = tmp;
                    return true;
                }
            }
            ConflictMarkerKind::Perforce => {
                if starts_with(&tmp, b"<<<<\n") {
                    for _ in 0..5 {
                        tmp.advance();
                    }
                    *cursor = tmp;
                    return true;
                }
            }
        }
        tmp.eat_until_newline_or_eof();
    }
}

fn starts_with(cursor: &Cursor<'_>, prefix: &[u8]) -> bool {
    prefix
        .iter()
        .enumerate()
        .all(|(i, &byte)| cursor.peek_at(u32::try_from(i).unwrap_or(u32::MAX)) == byte)
}

/// Scan past an opening `“` for a matching `”` on the same line.
///
/// Returns a cursor positioned just after the closing quote.
fn find_closing_curly_quote<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    let mut tmp = *cursor;
    // Skip the opening quote.
    let _ = unicode::advance_validating_utf8_character(&mut tmp);
    loop {
        match tmp.current() {
            0 if tmp.is_eof() => return None,
            b'\n' | b'\r' => return None,
            _ => {
                let mut probe = tmp;
                match unicode::advance_validating_utf8_character(&mut probe) {
                    Some('\u{201D}') => return Some(probe),
                    _ => tmp = probe,
                }
            }
        }
    }
}

/// Lex bytes that begin no token as an [`TokenKind::Unknown`] token.
///
/// Reached from the driver when trivia scanning stopped at something that is
/// not a token start: an identifier-continuation run with no valid start, or
/// a curly-quoted pseudo-string.
pub(crate) fn lex_unknown_token(cursor: &mut Cursor<'_>) -> Scanned {
    let snapshot = *cursor;
    match unicode::advance_validating_utf8_character(cursor) {
        Some(c) if unicode::is_identifier_continue(c) => {
            cursor.advance_while(unicode::is_identifier_continue);
            Scanned::token(TokenKind::Unknown)
        }
        Some('\u{201C}') => {
            if let Some(after_close) = find_closing_curly_quote(&snapshot) {
                *cursor = after_close;
            }
            Scanned::token(TokenKind::Unknown)
        }
        _ => Scanned::token(TokenKind::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceBuffer;

    fn scan(source: &[u8], position: TriviaPosition) -> (u32, bool) {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        let saw_newline = scan_trivia(&mut cursor, position);
        (cursor.pos(), saw_newline)
    }

    // === Whitespace ===

    #[test]
    fn consumes_spaces_and_tabs() {
        assert_eq!(scan(b"  \t x", TriviaPosition::Leading), (4, false));
        assert_eq!(scan(b"  \t x", TriviaPosition::Trailing), (4, false));
    }

    #[test]
    fn consumes_vertical_tab_and_form_feed() {
        assert_eq!(scan(b"\x0b\x0cx", TriviaPosition::Leading), (2, false));
    }

    #[test]
    fn newline_only_in_leading_position() {
        assert_eq!(scan(b"\n\nx", TriviaPosition::Leading), (2, true));
        assert_eq!(scan(b"\nx", TriviaPosition::Trailing), (0, false));
        assert_eq!(scan(b" \r\nx", TriviaPosition::Trailing), (1, false));
    }

    #[test]
    fn interior_null_is_trivia() {
        assert_eq!(scan(b"\0\0x", TriviaPosition::Leading), (2, false));
    }

    #[test]
    fn stops_at_token_bytes() {
        assert_eq!(scan(b"x", TriviaPosition::Leading), (0, false));
        assert_eq!(scan(b"\"s\"", TriviaPosition::Leading), (0, false));
        assert_eq!(scan(b"+", TriviaPosition::Leading), (0, false));
    }

    // === Comments ===

    #[test]
    fn line_comment_stops_before_newline() {
        assert_eq!(scan(b"// hi\nx", TriviaPosition::Leading), (6, true));
        assert_eq!(scan(b"// hi\nx", TriviaPosition::Trailing), (5, false));
    }

    #[test]
    fn line_comment_runs_to_eof() {
        assert_eq!(scan(b"// hi", TriviaPosition::Leading), (5, false));
    }

    #[test]
    fn block_comment_with_nesting() {
        assert_eq!(scan(b"/* a /* b */ c */x", TriviaPosition::Leading), (17, false));
    }

    #[test]
    fn unterminated_block_comment_runs_to_eof() {
        assert_eq!(scan(b"/* a /* b */", TriviaPosition::Leading), (12, false));
    }

    #[test]
    fn multi_line_block_comment_counts_as_newline() {
        assert_eq!(scan(b"/* a\nb */x", TriviaPosition::Leading), (9, true));
    }

    #[test]
    fn trailing_trivia_rejects_multi_line_block_comment() {
        assert_eq!(scan(b"/* a\nb */x", TriviaPosition::Trailing), (0, false));
        // A single-line block comment is fine in trailing position.
        assert_eq!(scan(b"/* a */x", TriviaPosition::Trailing), (7, false));
    }

    // === BOM & shebang ===

    #[test]
    fn byte_order_mark_is_trivia() {
        assert_eq!(scan(b"\xEF\xBB\xBFx", TriviaPosition::Leading), (3, false));
    }

    #[test]
    fn shebang_at_buffer_start() {
        assert_eq!(scan(b"#!/bin/sable\nx", TriviaPosition::Leading), (13, true));
    }

    #[test]
    fn shebang_only_at_offset_zero() {
        assert_eq!(scan(b" #!/bin/sable", TriviaPosition::Leading), (1, false));
    }

    // === Conflict markers ===

    #[test]
    fn git_conflict_marker_region() {
        let source = b"<<<<<<< HEAD\nours\n=======\ntheirs\n>>>>>>> branch\nx";
        let (pos, newline) = scan(source, TriviaPosition::Leading);
        // Region plus the newline after the terminator line.
        assert_eq!(&source[pos as usize..], b"x");
        assert!(newline);
    }

    #[test]
    fn perforce_conflict_marker_region() {
        let source = b">>>> ORIGINAL\nours\n==== THEIRS\ntheirs\n<<<<\nx";
        let (pos, newline) = scan(source, TriviaPosition::Leading);
        assert_eq!(&source[pos as usize..], b"x");
        assert!(newline);
    }

    #[test]
    fn unterminated_conflict_marker_consumes_nothing() {
        let source = b"<<<<<<< HEAD\nours only";
        assert_eq!(scan(source, TriviaPosition::Leading), (0, false));
    }

    #[test]
    fn conflict_marker_requires_line_start() {
        // Mid-line `<<<<<<< ` is an operator, not a marker.
        let source = b"<<<<<<< HEAD\n>>>>>>> b\n";
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        cursor.advance(); // no longer at line start
        assert!(!try_lex_conflict_marker(&mut cursor));
    }

    // === Unknown bytes ===

    #[test]
    fn invalid_utf8_is_trivia() {
        assert_eq!(scan(&[0xFF, 0xFE, b'x'], TriviaPosition::Leading), (2, false));
    }

    #[test]
    fn non_breaking_space_is_trivia() {
        assert_eq!(scan("\u{00A0}x".as_bytes(), TriviaPosition::Leading), (2, false));
    }

    #[test]
    fn lone_curly_quote_is_trivia() {
        let source = "\u{201C}no close".as_bytes();
        assert_eq!(scan(source, TriviaPosition::Leading), (3, false));
    }

    #[test]
    fn paired_curly_quote_stops_trivia() {
        let source = "\u{201C}text\u{201D}".as_bytes();
        assert_eq!(scan(source, TriviaPosition::Leading), (0, false));
    }

    #[test]
    fn identifier_scalar_stops_trivia() {
        assert_eq!(scan("λ".as_bytes(), TriviaPosition::Leading), (0, false));
        // A combining mark with no base is an identifier continuation: it
        // stops trivia so the driver can emit an unknown token.
        assert_eq!(scan("\u{0301}".as_bytes(), TriviaPosition::Leading), (0, false));
    }
}
