//! The string-literal engine.
//!
//! A string literal is lexed as several tokens — raw delimiter, opening
//! quote, contents, closing quote, raw delimiter — driven by the scanner
//! state the cursor carries (see [`ScannerState`]):
//!
//! ```text
//! Normal ──#s──► AfterRawStringDelimiter ──quote──► InStringLiteral
//! InStringLiteral ──body──► AfterStringLiteral ──quote──► Normal
//!                                              └─(raw)──► AfterClosingStringQuote ──#s──► Normal
//! ```
//!
//! Raw delimiters gate escapes: inside `#"..."#` a backslash is literal
//! content unless followed by the same number of `#`s. Interpolations are
//! skipped over, not tokenized — the contents token covers them byte-for-
//! byte and the parser re-lexes the interior.

use crate::cursor::{Cursor, ScannerState, StringLiteralKind};
use crate::lexer::Scanned;
use crate::token::TokenKind;
use crate::unicode;

// ─── Delimiter helpers ──────────────────────────────────────────────────

/// Whether `n` `#`s follow at `skip` bytes ahead of the cursor.
fn hashes_follow_at(cursor: &Cursor<'_>, skip: u32, n: u32) -> bool {
    (0..n).all(|i| cursor.peek_at(skip + i) == b'#')
}

/// Consume `n` `#`s if they are all present.
fn advance_if_string_delimiter(cursor: &mut Cursor<'_>, n: u32) -> bool {
    if hashes_follow_at(cursor, 0, n) {
        for _ in 0..n {
            cursor.advance();
        }
        true
    } else {
        false
    }
}

/// Decide multi-line-ness right after an opening `"` has been consumed,
/// consuming the second and third quotes when the answer is yes.
///
/// With a raw delimiter open (`opening_raw_delimiters > 0`), a line that
/// already contains `"` followed by that many `#`s forces single-line
/// classification — `#"""#` is the empty single-line raw string, not an
/// unterminated multi-line one.
fn advance_if_multiline_delimiter(
    cursor: &mut Cursor<'_>,
    opening_raw_delimiters: Option<u32>,
) -> bool {
    debug_assert!(cursor.previous() == b'"', "caller consumed the first quote");

    if let Some(n) = opening_raw_delimiters {
        if n > 0 {
            let mut tmp = *cursor;
            loop {
                match tmp.advance() {
                    None | Some(b'\n' | b'\r') => break,
                    Some(b'"') => {
                        if advance_if_string_delimiter(&mut tmp, n) {
                            return false;
                        }
                    }
                    Some(_) => {}
                }
            }
        }
    }

    let mut tmp = *cursor;
    if tmp.advance_matching(b'"') && tmp.advance_matching(b'"') {
        *cursor = tmp;
        return true;
    }
    false
}

/// Whether the literal's closing delimiter starts at the cursor (pure
/// lookahead; consumes nothing).
fn at_string_terminator(cursor: &Cursor<'_>, kind: StringLiteralKind, delimiter_len: u32) -> bool {
    let mut tmp = *cursor;
    let matched = match kind {
        StringLiteralKind::SingleQuote => tmp.advance_matching(b'\''),
        StringLiteralKind::SingleLine => tmp.advance_matching(b'"'),
        StringLiteralKind::MultiLine => {
            tmp.advance_matching(b'"') && tmp.advance_matching(b'"') && tmp.advance_matching(b'"')
        }
    };
    matched && hashes_follow_at(&tmp, 0, delimiter_len)
}

// ─── Quote tokens ───────────────────────────────────────────────────────

/// Lex an opening quote. The cursor sits on `"` or `'`; `delimiter_len` is
/// the raw delimiter just lexed (0 outside raw strings).
pub(crate) fn lex_string_quote(cursor: &mut Cursor<'_>, delimiter_len: u32) -> Scanned {
    match cursor.advance() {
        Some(b'\'') => Scanned::with_transition(
            TokenKind::SingleQuote,
            ScannerState::InStringLiteral {
                kind: StringLiteralKind::SingleQuote,
                delimiter_len,
            },
        ),
        Some(b'"') => {
            if advance_if_multiline_delimiter(cursor, Some(delimiter_len)) {
                Scanned::with_transition(
                    TokenKind::MultilineStringQuote,
                    ScannerState::InStringLiteral {
                        kind: StringLiteralKind::MultiLine,
                        delimiter_len,
                    },
                )
            } else {
                Scanned::with_transition(
                    TokenKind::StringQuote,
                    ScannerState::InStringLiteral {
                        kind: StringLiteralKind::SingleLine,
                        delimiter_len,
                    },
                )
            }
        }
        _ => Scanned::with_transition(TokenKind::Unknown, ScannerState::Normal),
    }
}

/// Lex the closing quote after a finished body.
pub(crate) fn lex_after_string_literal(cursor: &mut Cursor<'_>, raw: bool) -> Scanned {
    let next_state = if raw {
        ScannerState::AfterClosingStringQuote
    } else {
        ScannerState::Normal
    };
    match cursor.advance() {
        Some(b'\'') => Scanned::with_transition(TokenKind::SingleQuote, next_state),
        Some(b'"') => {
            if advance_if_multiline_delimiter(cursor, None) {
                Scanned::with_transition(TokenKind::MultilineStringQuote, next_state)
            } else {
                Scanned::with_transition(TokenKind::StringQuote, next_state)
            }
        }
        _ => Scanned::with_transition(TokenKind::Unknown, ScannerState::Normal),
    }
}

/// Lex the trailing `#`s of a raw string. The body scan guaranteed at least
/// the opening count is present; any extras join the same token.
pub(crate) fn lex_after_closing_string_quote(cursor: &mut Cursor<'_>) -> Scanned {
    cursor.eat_while(|b| b == b'#');
    Scanned::with_transition(TokenKind::RawStringDelimiter, ScannerState::Normal)
}

// ─── Body scan ──────────────────────────────────────────────────────────

/// Lex the body of a string literal up to (not including) its closing
/// delimiter.
///
/// The contents token covers escapes and interpolations byte-for-byte; the
/// parser re-lexes interpolation interiors. A body cut short — by a line
/// break in a single-line literal, or by EOF — becomes an `Unknown` token
/// and drops the cursor back to the normal state. Interior NUL bytes are
/// ordinary content.
pub(crate) fn lex_in_string_literal(
    cursor: &mut Cursor<'_>,
    kind: StringLiteralKind,
    delimiter_len: u32,
) -> Scanned {
    loop {
        match cursor.current() {
            b'\\' if hashes_follow_at(cursor, 1, delimiter_len)
                && cursor.peek_at(1 + delimiter_len) == b'(' =>
            {
                cursor.advance();
                advance_if_string_delimiter(cursor, delimiter_len);
                cursor.advance();
                skip_over_interpolation(cursor, kind == StringLiteralKind::MultiLine);
            }
            b'\\' => lex_escaped_character(cursor, kind, delimiter_len),
            b'\n' | b'\r' => {
                if kind == StringLiteralKind::MultiLine {
                    cursor.advance();
                } else {
                    return Scanned::with_transition(TokenKind::Unknown, ScannerState::Normal);
                }
            }
            0 if cursor.is_eof() => {
                return Scanned::with_transition(TokenKind::Unknown, ScannerState::Normal);
            }
            b'"' | b'\'' => {
                if at_string_terminator(cursor, kind, delimiter_len) {
                    return Scanned::with_transition(
                        TokenKind::StringLiteralContents,
                        ScannerState::AfterStringLiteral {
                            raw: delimiter_len > 0,
                        },
                    );
                }
                cursor.advance();
            }
            _ => {
                // Content scalar; malformed UTF-8 is resynchronized and
                // still covered by the contents token.
                let _ = unicode::advance_validating_utf8_character(cursor);
            }
        }
    }
}

/// Consume a backslash that does not open an interpolation.
///
/// Inside a raw literal whose `#`s do not follow, the backslash is literal
/// content. Otherwise the escape sequence after the delimiters is skipped:
/// single-character escapes, `\u{...}`, and — in multi-line literals — a
/// backslash before trailing whitespace and a line break, which folds the
/// break. An unrecognized escape consumes one trailing alphanumeric as
/// recovery.
fn lex_escaped_character(cursor: &mut Cursor<'_>, kind: StringLiteralKind, delimiter_len: u32) {
    if !hashes_follow_at(cursor, 1, delimiter_len) {
        cursor.advance();
        return;
    }
    cursor.advance();
    advance_if_string_delimiter(cursor, delimiter_len);

    match cursor.current() {
        b'0' | b'n' | b'r' | b't' | b'"' | b'\'' | b'\\' => {
            cursor.advance();
        }
        b'u' => {
            cursor.advance();
            if cursor.advance_matching(b'{') {
                cursor.eat_while(|b| b.is_ascii_hexdigit());
                cursor.advance_matching(b'}');
            }
        }
        b' ' | b'\t' if kind == StringLiteralKind::MultiLine => {
            // Line continuation: backslash, horizontal whitespace, line
            // break. The break itself stays for the body loop.
            let mut tmp = *cursor;
            tmp.eat_while(|b| b == b' ' || b == b'\t');
            if matches!(tmp.current(), b'\n' | b'\r') {
                *cursor = tmp;
            }
        }
        b'\n' | b'\r' if kind == StringLiteralKind::MultiLine => {}
        byte => {
            if byte.is_ascii_alphanumeric() {
                cursor.advance();
            }
        }
    }
}

// ─── Interpolation skip-scan ────────────────────────────────────────────

/// What kind of delimiter a nesting level of the skip-scan is inside.
#[derive(Clone, Copy)]
enum OpenDelimiter {
    Paren,
    DoubleQuote { multiline: bool, delimiter_len: u32 },
    SingleQuote { delimiter_len: u32 },
}

/// One nesting level: the open delimiter plus whether a line break may be
/// crossed at this depth.
#[derive(Clone, Copy)]
struct ScanLevel {
    delimiter: OpenDelimiter,
    allow_newline: bool,
}

impl ScanLevel {
    fn in_string(self) -> bool {
        !matches!(self.delimiter, OpenDelimiter::Paren)
    }
}

/// Skip from just after the `(` of `\(` to just past its matching `)`.
///
/// Only bracket balance matters here — the skipped bytes are re-lexed by
/// the parser — but nested string literals, raw delimiters, comments, and
/// further interpolations must be tracked so a `)` inside them does not
/// close the expression. On any unterminated construct the scan returns
/// with the cursor at the recovery point (a line break the level cannot
/// cross, the start of a comment that spans lines inside a single-line
/// literal, or EOF) and leaves it for the outer body scan.
fn skip_over_interpolation(cursor: &mut Cursor<'_>, allow_newline: bool) {
    let mut stack = vec![ScanLevel {
        delimiter: OpenDelimiter::Paren,
        allow_newline,
    }];

    loop {
        let Some(&top) = stack.last() else { return };
        match cursor.current() {
            0 if cursor.is_eof() => return,
            b'\n' | b'\r' => {
                if !top.allow_newline {
                    return;
                }
                cursor.advance();
            }
            b'(' if !top.in_string() => {
                cursor.advance();
                stack.push(ScanLevel {
                    delimiter: OpenDelimiter::Paren,
                    allow_newline: top.allow_newline,
                });
            }
            b')' if !top.in_string() => {
                cursor.advance();
                stack.pop();
                if stack.is_empty() {
                    return;
                }
            }
            b'"' => match top.delimiter {
                OpenDelimiter::DoubleQuote {
                    multiline,
                    delimiter_len,
                } => {
                    if try_close_double_quote(cursor, multiline, delimiter_len) {
                        stack.pop();
                    } else {
                        cursor.advance();
                    }
                }
                OpenDelimiter::SingleQuote { .. } => {
                    cursor.advance();
                }
                OpenDelimiter::Paren => {
                    cursor.advance();
                    if let Some(level) = open_double_quote(cursor, 0) {
                        stack.push(level);
                    }
                }
            },
            b'\'' => match top.delimiter {
                OpenDelimiter::SingleQuote { delimiter_len } => {
                    let mut tmp = *cursor;
                    tmp.advance();
                    if hashes_follow_at(&tmp, 0, delimiter_len) {
                        advance_if_string_delimiter(&mut tmp, delimiter_len);
                        *cursor = tmp;
                        stack.pop();
                    } else {
                        cursor.advance();
                    }
                }
                OpenDelimiter::DoubleQuote { .. } => {
                    cursor.advance();
                }
                OpenDelimiter::Paren => {
                    cursor.advance();
                    stack.push(ScanLevel {
                        delimiter: OpenDelimiter::SingleQuote { delimiter_len: 0 },
                        allow_newline: false,
                    });
                }
            },
            b'#' if !top.in_string() => {
                let mut tmp = *cursor;
                let mut count = 0u32;
                while tmp.advance_matching(b'#') {
                    count += 1;
                }
                match tmp.current() {
                    b'"' => {
                        tmp.advance();
                        *cursor = tmp;
                        if let Some(level) = open_double_quote(cursor, count) {
                            stack.push(level);
                        }
                    }
                    b'\'' => {
                        tmp.advance();
                        *cursor = tmp;
                        stack.push(ScanLevel {
                            delimiter: OpenDelimiter::SingleQuote {
                                delimiter_len: count,
                            },
                            allow_newline: false,
                        });
                    }
                    _ => {
                        cursor.advance();
                    }
                }
            }
            b'\\' => {
                let delimiter_len = match top.delimiter {
                    OpenDelimiter::DoubleQuote { delimiter_len, .. }
                    | OpenDelimiter::SingleQuote { delimiter_len } => Some(delimiter_len),
                    OpenDelimiter::Paren => None,
                };
                match delimiter_len {
                    Some(n) if hashes_follow_at(cursor, 1, n) => {
                        match cursor.peek_at(1 + n) {
                            b'(' => {
                                cursor.advance();
                                advance_if_string_delimiter(cursor, n);
                                cursor.advance();
                                stack.push(ScanLevel {
                                    delimiter: OpenDelimiter::Paren,
                                    allow_newline: top.allow_newline,
                                });
                            }
                            // A break right after the escape: leave it for
                            // the enclosing scan to rule on.
                            b'\n' | b'\r' | 0 => {
                                cursor.advance();
                            }
                            _ => {
                                cursor.advance();
                                advance_if_string_delimiter(cursor, n);
                                cursor.advance();
                            }
                        }
                    }
                    _ => {
                        cursor.advance();
                    }
                }
            }
            b'/' if !top.in_string() => match cursor.peek() {
                b'/' => {
                    cursor.advance();
                    cursor.advance();
                    cursor.eat_until_newline_or_eof();
                }
                b'*' => {
                    if !skip_block_comment(cursor, top.allow_newline) {
                        return;
                    }
                }
                _ => {
                    cursor.advance();
                }
            },
            _ => {
                cursor.advance();
            }
        }
    }
}

/// After an opening `"` was consumed inside the skip-scan, settle the
/// literal's shape. Returns the level to push, or `None` for an empty
/// `""` literal that opened and closed on the spot.
fn open_double_quote(cursor: &mut Cursor<'_>, delimiter_len: u32) -> Option<ScanLevel> {
    if cursor.current() == b'"' && cursor.peek() == b'"' {
        cursor.advance();
        cursor.advance();
        return Some(ScanLevel {
            delimiter: OpenDelimiter::DoubleQuote {
                multiline: true,
                delimiter_len,
            },
            allow_newline: true,
        });
    }
    if delimiter_len == 0 && cursor.current() == b'"' {
        // Empty string literal.
        cursor.advance();
        return None;
    }
    Some(ScanLevel {
        delimiter: OpenDelimiter::DoubleQuote {
            multiline: false,
            delimiter_len,
        },
        allow_newline: false,
    })
}

/// Try to consume the closing delimiter of a nested double-quoted literal.
fn try_close_double_quote(cursor: &mut Cursor<'_>, multiline: bool, delimiter_len: u32) -> bool {
    let mut tmp = *cursor;
    let quotes_matched = if multiline {
        tmp.advance_matching(b'"') && tmp.advance_matching(b'"') && tmp.advance_matching(b'"')
    } else {
        tmp.advance_matching(b'"')
    };
    if quotes_matched && hashes_follow_at(&tmp, 0, delimiter_len) {
        advance_if_string_delimiter(&mut tmp, delimiter_len);
        *cursor = tmp;
        true
    } else {
        false
    }
}

/// Skip a `/* ... */` comment inside an interpolation. Returns `false` when
/// the scan must stop: a comment spanning lines cannot appear inside a
/// single-line literal, so the cursor is restored to the comment start for
/// the outer scan to handle.
fn skip_block_comment(cursor: &mut Cursor<'_>, allow_newline: bool) -> bool {
    let comment_start = *cursor;
    cursor.advance();
    cursor.advance();
    let mut depth = 1u32;
    loop {
        match cursor.current() {
            0 if cursor.is_eof() => return false,
            b'\n' | b'\r' => {
                if !allow_newline {
                    *cursor = comment_start;
                    return false;
                }
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
                    return true;
                }
            }
            _ => {
                cursor.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceBuffer;

    fn quote(source: &[u8], delimiter_len: u32) -> (Scanned, u32) {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        let scanned = lex_string_quote(&mut cursor, delimiter_len);
        (scanned, cursor.pos())
    }

    fn body(source: &[u8], kind: StringLiteralKind, delimiter_len: u32) -> (Scanned, u32) {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        let scanned = lex_in_string_literal(&mut cursor, kind, delimiter_len);
        (scanned, cursor.pos())
    }

    // === Opening quotes ===

    #[test]
    fn single_line_quote() {
        let (scanned, len) = quote(b"\"abc\"", 0);
        assert_eq!(scanned.kind, TokenKind::StringQuote);
        assert_eq!(len, 1);
        assert_eq!(
            scanned.transition,
            Some(ScannerState::InStringLiteral {
                kind: StringLiteralKind::SingleLine,
                delimiter_len: 0
            })
        );
    }

    #[test]
    fn multiline_quote() {
        let (scanned, len) = quote(b"\"\"\"\nabc\n\"\"\"", 0);
        assert_eq!(scanned.kind, TokenKind::MultilineStringQuote);
        assert_eq!(len, 3);
    }

    #[test]
    fn single_quote_literal() {
        let (scanned, len) = quote(b"'c'", 0);
        assert_eq!(scanned.kind, TokenKind::SingleQuote);
        assert_eq!(len, 1);
    }

    #[test]
    fn raw_pseudo_multiline_is_single_line() {
        // In `#"""#` the quote run is an empty single-line raw string, not
        // a multi-line opener: the close appears on the same line.
        let (scanned, len) = quote(b"\"\"\"#", 1);
        assert_eq!(scanned.kind, TokenKind::StringQuote);
        assert_eq!(len, 1);
    }

    #[test]
    fn raw_multiline_still_possible() {
        let (scanned, len) = quote(b"\"\"\"\nx\n\"\"\"#", 1);
        assert_eq!(scanned.kind, TokenKind::MultilineStringQuote);
        assert_eq!(len, 3);
    }

    // === Bodies ===

    #[test]
    fn body_runs_to_closing_quote() {
        let (scanned, len) = body(b"abc\"rest", StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 3); // the quote is not consumed
        assert_eq!(
            scanned.transition,
            Some(ScannerState::AfterStringLiteral { raw: false })
        );
    }

    #[test]
    fn empty_body() {
        let (scanned, len) = body(b"\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 0);
    }

    #[test]
    fn escaped_quote_is_content() {
        let (_, len) = body(b"a\\\"b\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(len, 4);
    }

    #[test]
    fn raw_body_ignores_unmatched_escape() {
        // In a raw string, `\"` does not escape: the quote closes.
        let (scanned, len) = body(b"a\\\"#", StringLiteralKind::SingleLine, 1);
        // The backslash is content; the quote is followed by `#` so it
        // terminates.
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 2);
    }

    #[test]
    fn raw_body_quote_without_hashes_is_content() {
        let (_, len) = body(b"a\"b\"#", StringLiteralKind::SingleLine, 1);
        assert_eq!(len, 3);
    }

    #[test]
    fn unicode_escape_is_skipped() {
        let (_, len) = body(b"\\u{1F600}\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(len, 9);
    }

    #[test]
    fn newline_ends_single_line_body() {
        let (scanned, len) = body(b"abc\ndef", StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::Unknown);
        assert_eq!(len, 3);
        assert_eq!(scanned.transition, Some(ScannerState::Normal));
    }

    #[test]
    fn eof_ends_body_as_unknown() {
        let (scanned, len) = body(b"abc", StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::Unknown);
        assert_eq!(len, 3);
    }

    #[test]
    fn multiline_body_crosses_lines() {
        let (scanned, len) = body(b"a\nb\n\"\"\"", StringLiteralKind::MultiLine, 0);
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 4);
    }

    #[test]
    fn multiline_body_skips_short_quote_runs() {
        let (_, len) = body(b"a \" b \"\" c \"\"\"", StringLiteralKind::MultiLine, 0);
        assert_eq!(len, 11);
    }

    #[test]
    fn interior_null_is_content() {
        let (scanned, len) = body(b"a\0b\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 3);
    }

    // === Interpolation ===

    #[test]
    fn interpolation_is_skipped_into_contents() {
        let (scanned, len) = body(b"a\\(b)c\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 6);
    }

    #[test]
    fn interpolation_with_nested_string() {
        let source = b"a\\(f(\"x)y\"))c\"";
        let (scanned, len) = body(source, StringLiteralKind::SingleLine, 0);
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 13);
    }

    #[test]
    fn interpolation_with_nested_parens() {
        let (_, len) = body(b"\\((1, (2)))\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(len, 11);
    }

    #[test]
    fn raw_interpolation_needs_hashes() {
        // With one `#`, `\(` is literal content and `\#(` interpolates.
        let (_, len) = body(b"\\(x)\\#(y)\"#", StringLiteralKind::SingleLine, 1);
        assert_eq!(len, 9);
    }

    #[test]
    fn unterminated_interpolation_stops_at_newline() {
        let (scanned, len) = body(b"a\\(b\nrest", StringLiteralKind::SingleLine, 0);
        // The skip-scan leaves the line break; the body scan then ends the
        // literal on it.
        assert_eq!(scanned.kind, TokenKind::Unknown);
        assert_eq!(len, 4);
    }

    #[test]
    fn interpolation_comment_with_newline_recovers() {
        let (scanned, len) = body(b"\\(x /* a\nb */)\"", StringLiteralKind::SingleLine, 0);
        // The block comment spans lines inside a single-line literal: the
        // scan returns at the comment start, and the body then fails at the
        // newline inside it.
        assert_eq!(scanned.kind, TokenKind::Unknown);
        assert_eq!(len, 8);
    }

    #[test]
    fn interpolation_line_comment_hides_paren() {
        let (scanned, len) = body(
            b"\\(x // )\ny)\"\"\"",
            StringLiteralKind::MultiLine,
            0,
        );
        // Inside a multi-line literal the comment swallows the `)` and the
        // one on the next line closes.
        assert_eq!(scanned.kind, TokenKind::StringLiteralContents);
        assert_eq!(len, 11);
    }

    #[test]
    fn nested_interpolation() {
        let (_, len) = body(b"\\(\"inner \\(x)\")\"", StringLiteralKind::SingleLine, 0);
        assert_eq!(len, 15);
    }

    // === Closing quotes & raw delimiters ===

    #[test]
    fn closing_quote_returns_to_normal() {
        let buf = SourceBuffer::new(b"\"rest");
        let mut cursor = buf.cursor();
        let scanned = lex_after_string_literal(&mut cursor, false);
        assert_eq!(scanned.kind, TokenKind::StringQuote);
        assert_eq!(scanned.transition, Some(ScannerState::Normal));
    }

    #[test]
    fn closing_quote_of_raw_string_awaits_hashes() {
        let buf = SourceBuffer::new(b"\"##");
        let mut cursor = buf.cursor();
        let scanned = lex_after_string_literal(&mut cursor, true);
        assert_eq!(scanned.kind, TokenKind::StringQuote);
        assert_eq!(
            scanned.transition,
            Some(ScannerState::AfterClosingStringQuote)
        );

        let scanned = lex_after_closing_string_quote(&mut cursor);
        assert_eq!(scanned.kind, TokenKind::RawStringDelimiter);
        assert_eq!(cursor.pos(), 3);
        assert_eq!(scanned.transition, Some(ScannerState::Normal));
    }

    #[test]
    fn closing_multiline_quote() {
        let buf = SourceBuffer::new(b"\"\"\"");
        let mut cursor = buf.cursor();
        let scanned = lex_after_string_literal(&mut cursor, false);
        assert_eq!(scanned.kind, TokenKind::MultilineStringQuote);
        assert_eq!(cursor.pos(), 3);
    }
}
