//! The lexeme driver: stitches leading trivia, one token, and trailing
//! trivia into a [`Lexeme`], threading the scanner state between calls.
//!
//! Each call to [`Lexer::next_lexeme`]:
//!
//! 1. scans leading trivia, when the current state admits it;
//! 2. dispatches on the state (and, in the normal state, the current byte)
//!    to a recognizer;
//! 3. applies the recognizer's state transition;
//! 4. scans trailing trivia — never across a line break — when the new
//!    state admits it;
//! 5. composes the lexeme's four byte ranges.
//!
//! The ranges of consecutive lexemes abut without gap or overlap, so
//! concatenating every lexeme reproduces the buffer exactly; the final
//! lexeme is `Eof` with zero text length.

use crate::cursor::{Cursor, ScannerState};
use crate::identifier;
use crate::lexeme::{LexError, Lexeme, LexemeFlags};
use crate::number;
use crate::operator;
use crate::pound;
use crate::regex;
use crate::source_buffer::SourceBuffer;
use crate::string;
use crate::token::TokenKind;
use crate::trivia::{self, TriviaPosition};
use crate::unicode;

/// What a recognizer produced: the kind plus optional error, flags, and
/// state transition. The driver turns this into a [`Lexeme`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scanned {
    pub(crate) kind: TokenKind,
    pub(crate) flags: LexemeFlags,
    pub(crate) error: Option<LexError>,
    pub(crate) transition: Option<ScannerState>,
}

impl Scanned {
    pub(crate) fn token(kind: TokenKind) -> Self {
        Scanned {
            kind,
            flags: LexemeFlags::EMPTY,
            error: None,
            transition: None,
        }
    }

    pub(crate) fn with_transition(kind: TokenKind, state: ScannerState) -> Self {
        Scanned {
            transition: Some(state),
            ..Scanned::token(kind)
        }
    }

    /// Same scan result under a different kind.
    pub(crate) fn retagged(self, kind: TokenKind) -> Self {
        Scanned { kind, ..self }
    }
}

/// The lexer: a cursor plus the one-token driver.
///
/// Iterating yields every lexeme in source order, ending with the `Eof`
/// lexeme exactly once.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Lex `buffer` from the start of a session.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Lexer {
            cursor: buffer.cursor(),
            finished: false,
        }
    }

    /// Lex `buffer` as the continuation of a session: `previous` is the
    /// byte before the buffer's first (use `0x00` for none) and `state` is
    /// the scanner state in force there.
    pub fn resume(buffer: &'a SourceBuffer, previous: u8, state: ScannerState) -> Self {
        Lexer {
            cursor: Cursor::resume(
                buffer.as_sentinel_bytes(),
                buffer.len(),
                previous,
                state,
            ),
            finished: false,
        }
    }

    /// The cursor's scanner state (for session hand-off).
    pub fn state(&self) -> ScannerState {
        self.cursor.state()
    }

    /// Produce the next lexeme, advancing the cursor past its trivia and
    /// text.
    pub fn next_lexeme(&mut self) -> Lexeme {
        let leading_start = self.cursor.pos();
        let mut saw_newline = false;
        if self.cursor.state().admits_trivia(self.cursor.current()) {
            saw_newline = trivia::scan_trivia(&mut self.cursor, TriviaPosition::Leading);
        }

        let text_start = self.cursor.pos();
        let scanned = self.dispatch(text_start);
        let text_end = self.cursor.pos();

        if let Some(state) = scanned.transition {
            self.cursor.set_state(state);
        }

        if self.cursor.state().admits_trivia(self.cursor.current()) {
            let trailing_newline =
                trivia::scan_trivia(&mut self.cursor, TriviaPosition::Trailing);
            debug_assert!(!trailing_newline, "trailing trivia crossed a line break");
        }
        let trailing_end = self.cursor.pos();

        let mut flags = scanned.flags;
        if saw_newline || leading_start == 0 {
            flags.set(LexemeFlags::AT_START_OF_LINE);
        }

        Lexeme {
            kind: scanned.kind,
            flags,
            error: scanned.error,
            leading_trivia_start: leading_start,
            leading_trivia_len: text_start - leading_start,
            text_len: text_end - text_start,
            trailing_trivia_len: trailing_end - text_end,
        }
    }

    fn dispatch(&mut self, text_start: u32) -> Scanned {
        match self.cursor.state() {
            ScannerState::Normal => self.lex_normal(text_start),
            ScannerState::AfterRawStringDelimiter { delimiter_len } => {
                string::lex_string_quote(&mut self.cursor, delimiter_len)
            }
            ScannerState::InStringLiteral {
                kind,
                delimiter_len,
            } => string::lex_in_string_literal(&mut self.cursor, kind, delimiter_len),
            ScannerState::AfterStringLiteral { raw } => {
                string::lex_after_string_literal(&mut self.cursor, raw)
            }
            ScannerState::AfterClosingStringQuote => {
                string::lex_after_closing_string_quote(&mut self.cursor)
            }
        }
    }

    fn lex_normal(&mut self, text_start: u32) -> Scanned {
        let cursor = &mut self.cursor;
        match cursor.current() {
            0 if cursor.is_eof() => Scanned::token(TokenKind::Eof),

            b'(' => Self::punctuation(cursor, TokenKind::LeftParen),
            b')' => Self::punctuation(cursor, TokenKind::RightParen),
            b'{' => Self::punctuation(cursor, TokenKind::LeftBrace),
            b'}' => Self::punctuation(cursor, TokenKind::RightBrace),
            b'[' => Self::punctuation(cursor, TokenKind::LeftSquare),
            b']' => Self::punctuation(cursor, TokenKind::RightSquare),
            b',' => Self::punctuation(cursor, TokenKind::Comma),
            b';' => Self::punctuation(cursor, TokenKind::Semicolon),
            b':' => Self::punctuation(cursor, TokenKind::Colon),
            b'@' => Self::punctuation(cursor, TokenKind::AtSign),
            b'\\' => Self::punctuation(cursor, TokenKind::Backslash),

            b'#' => pound::lex_pound(cursor),
            b'`' => identifier::lex_escaped_identifier(cursor),
            b'$' => identifier::lex_dollar_identifier(cursor),
            b'"' | b'\'' => string::lex_string_quote(cursor, 0),
            b'0'..=b'9' => number::lex_number(cursor, text_start),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => identifier::lex_identifier(cursor, text_start),

            // `!` and `?` straight after an expression are punctuation, not
            // the start of an operator run.
            b'!' if cursor.is_left_bound() => {
                Self::punctuation(cursor, TokenKind::ExclamationMark)
            }
            b'?' if cursor.is_left_bound() => {
                Self::punctuation(cursor, TokenKind::PostfixQuestionMark)
            }

            b'/' => match regex::try_lex_regex_literal(cursor) {
                Some(scanned) => scanned,
                None => operator::lex_operator(cursor, text_start),
            },

            b'<' if cursor.peek() == b'#' => {
                match pound::try_lex_editor_placeholder(cursor) {
                    Some(scanned) => scanned,
                    None => operator::lex_operator(cursor, text_start),
                }
            }

            b'=' | b'-' | b'+' | b'*' | b'%' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^' | b'~'
            | b'.' | b'?' => operator::lex_operator(cursor, text_start),

            _ => {
                // Non-ASCII: identifier, operator, or unknown-byte recovery.
                let snapshot = *cursor;
                match unicode::advance_validating_utf8_character(cursor) {
                    Some(c) if unicode::is_identifier_start(c) => {
                        *cursor = snapshot;
                        identifier::lex_identifier(cursor, text_start)
                    }
                    Some(c) if unicode::is_operator_head(c) => {
                        *cursor = snapshot;
                        operator::lex_operator(cursor, text_start)
                    }
                    _ => {
                        *cursor = snapshot;
                        trivia::lex_unknown_token(cursor)
                    }
                }
            }
        }
    }

    fn punctuation(cursor: &mut Cursor<'_>, kind: TokenKind) -> Scanned {
        cursor.advance();
        Scanned::token(kind)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        if self.finished {
            return None;
        }
        let lexeme = self.next_lexeme();
        if lexeme.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(lexeme)
    }
}

/// Lex an entire buffer, `Eof` lexeme included.
pub fn lex(buffer: &SourceBuffer) -> Vec<Lexeme> {
    Lexer::new(buffer).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests {
    use super::*;
    use crate::token::{Keyword, PoundKeyword};

    fn lex_source(source: &[u8]) -> Vec<Lexeme> {
        let buffer = SourceBuffer::new(source);
        lex(&buffer)
    }

    fn kinds(source: &[u8]) -> Vec<TokenKind> {
        lex_source(source).iter().map(|l| l.kind).collect()
    }

    fn texts(source: &[u8]) -> Vec<(TokenKind, Vec<u8>)> {
        let buffer = SourceBuffer::new(source);
        lex(&buffer)
            .iter()
            .map(|l| (l.kind, l.text(buffer.as_bytes()).to_vec()))
            .collect()
    }

    /// The quantified stream invariants: coverage, monotonicity, trailing
    /// trivia free of line breaks, the start-of-line flag, and a single
    /// trailing `Eof`.
    fn check_invariants(source: &[u8]) {
        let buffer = SourceBuffer::new(source);
        let lexemes = lex(&buffer);
        let bytes = buffer.as_bytes();

        assert!(!lexemes.is_empty());
        let last = lexemes.last().unwrap();
        assert_eq!(last.kind, TokenKind::Eof, "stream must end in eof");
        assert_eq!(last.text_len, 0, "eof has no text");
        assert_eq!(
            lexemes.iter().filter(|l| l.kind == TokenKind::Eof).count(),
            1
        );

        let mut offset = 0u32;
        for lexeme in &lexemes {
            assert_eq!(
                lexeme.leading_trivia_start, offset,
                "lexemes must abut: {lexemes:?} for {source:?}"
            );
            assert!(
                !lexeme
                    .trailing_trivia(bytes)
                    .iter()
                    .any(|&b| b == b'\n' || b == b'\r'),
                "trailing trivia crossed a line break for {source:?}"
            );
            let newline_in_leading = lexeme
                .leading_trivia(bytes)
                .iter()
                .any(|&b| b == b'\n' || b == b'\r');
            assert_eq!(
                lexeme.flags.is_at_start_of_line(),
                newline_in_leading || lexeme.leading_trivia_start == 0,
                "start-of-line flag mismatch for {source:?}"
            );
            offset = lexeme.trailing_end();
        }
        assert_eq!(offset, buffer.len(), "lexemes must cover the buffer");
    }

    // === Representative programs ===

    #[test]
    fn lex_simple_binding() {
        assert_eq!(
            kinds(b"let x = 42"),
            vec![
                TokenKind::Keyword(Keyword::Let),
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::IntegerLiteral,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_hex_float() {
        assert_eq!(
            kinds(b"0xff.fp0"),
            vec![TokenKind::FloatLiteral, TokenKind::Eof]
        );
    }

    #[test]
    fn lex_hex_member_access() {
        assert_eq!(
            texts(b"0xff.description"),
            vec![
                (TokenKind::IntegerLiteral, b"0xff".to_vec()),
                (TokenKind::Period, b".".to_vec()),
                (TokenKind::Identifier, b"description".to_vec()),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    #[test]
    fn lex_raw_empty_string() {
        assert_eq!(
            texts(b"#\"\"\"#"),
            vec![
                (TokenKind::RawStringDelimiter, b"#".to_vec()),
                (TokenKind::StringQuote, b"\"".to_vec()),
                (TokenKind::StringLiteralContents, vec![]),
                (TokenKind::StringQuote, b"\"".to_vec()),
                (TokenKind::RawStringDelimiter, b"#".to_vec()),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    #[test]
    fn lex_interpolated_string() {
        assert_eq!(
            texts(b"\"a\\(b)c\""),
            vec![
                (TokenKind::StringQuote, b"\"".to_vec()),
                (TokenKind::StringLiteralContents, b"a\\(b)c".to_vec()),
                (TokenKind::StringQuote, b"\"".to_vec()),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    #[test]
    fn lex_regex_expression() {
        assert_eq!(
            texts(b"/.*/ + /x/"),
            vec![
                (TokenKind::RegexLiteral, b"/.*/".to_vec()),
                (TokenKind::BinaryOperator, b"+".to_vec()),
                (TokenKind::RegexLiteral, b"/x/".to_vec()),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    #[test]
    fn lex_postfix_before_member_access() {
        assert_eq!(
            kinds(b"x^.y"),
            vec![
                TokenKind::Identifier,
                TokenKind::PostfixOperator,
                TokenKind::Period,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_editor_placeholder() {
        assert_eq!(
            texts(b"<#placeholder#>"),
            vec![
                (TokenKind::Identifier, b"<#placeholder#>".to_vec()),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    // === Punctuation & operators ===

    #[test]
    fn lex_punctuation() {
        assert_eq!(
            kinds(b"(){}[],;:@"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftSquare,
                TokenKind::RightSquare,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::AtSign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_arrow_and_equals() {
        assert_eq!(
            kinds(b"f -> g = h"),
            vec![
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_force_unwrap_and_chaining() {
        assert_eq!(
            kinds(b"a!.b?.c"),
            vec![
                TokenKind::Identifier,
                TokenKind::ExclamationMark,
                TokenKind::Period,
                TokenKind::Identifier,
                TokenKind::PostfixQuestionMark,
                TokenKind::Period,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_prefix_bang() {
        assert_eq!(
            kinds(b"!a"),
            vec![TokenKind::PrefixOperator, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn lex_stray_comment_end() {
        assert_eq!(
            kinds(b"*/"),
            vec![TokenKind::Unknown, TokenKind::Eof]
        );
    }

    // === Strings end to end ===

    #[test]
    fn lex_multiline_string() {
        assert_eq!(
            kinds(b"\"\"\"\nline\n\"\"\""),
            vec![
                TokenKind::MultilineStringQuote,
                TokenKind::StringLiteralContents,
                TokenKind::MultilineStringQuote,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_raw_string_with_contents() {
        assert_eq!(
            texts(b"##\"a\\(x)b\"##"),
            vec![
                (TokenKind::RawStringDelimiter, b"##".to_vec()),
                (TokenKind::StringQuote, b"\"".to_vec()),
                (TokenKind::StringLiteralContents, b"a\\(x)b".to_vec()),
                (TokenKind::StringQuote, b"\"".to_vec()),
                (TokenKind::RawStringDelimiter, b"##".to_vec()),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    #[test]
    fn lex_single_quoted_literal() {
        assert_eq!(
            kinds(b"'c'"),
            vec![
                TokenKind::SingleQuote,
                TokenKind::StringLiteralContents,
                TokenKind::SingleQuote,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_recovers_at_newline() {
        assert_eq!(
            kinds(b"\"abc\nx"),
            vec![
                TokenKind::StringQuote,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_recovers_at_eof() {
        assert_eq!(
            kinds(b"\"abc"),
            vec![TokenKind::StringQuote, TokenKind::Unknown, TokenKind::Eof]
        );
    }

    // === Pound forms ===

    #[test]
    fn lex_pound_directives() {
        assert_eq!(
            kinds(b"#if x #else #endif"),
            vec![
                TokenKind::PoundKeyword(PoundKeyword::If),
                TokenKind::Identifier,
                TokenKind::PoundKeyword(PoundKeyword::Else),
                TokenKind::PoundKeyword(PoundKeyword::Endif),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unrecognized_directive_splits() {
        assert_eq!(
            kinds(b"#foo"),
            vec![TokenKind::Pound, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    // === Trivia attachment ===

    #[test]
    fn trivia_attaches_around_tokens() {
        let buffer = SourceBuffer::new(b"  a // c\n  b");
        let lexemes = lex(&buffer);
        let bytes = buffer.as_bytes();
        assert_eq!(lexemes[0].leading_trivia(bytes), b"  ");
        assert_eq!(lexemes[0].text(bytes), b"a");
        assert_eq!(lexemes[0].trailing_trivia(bytes), b" // c");
        assert_eq!(lexemes[1].leading_trivia(bytes), b"\n  ");
        assert_eq!(lexemes[1].text(bytes), b"b");
        assert!(lexemes[1].flags.is_at_start_of_line());
        assert!(lexemes[0].flags.is_at_start_of_line());
    }

    #[test]
    fn shebang_is_leading_trivia() {
        let buffer = SourceBuffer::new(b"#!/usr/bin/sable\nlet");
        let lexemes = lex(&buffer);
        assert_eq!(lexemes[0].kind, TokenKind::Keyword(Keyword::Let));
        assert_eq!(
            lexemes[0].leading_trivia(buffer.as_bytes()),
            b"#!/usr/bin/sable\n"
        );
    }

    #[test]
    fn conflict_marker_is_trivia() {
        let source = b"a\n<<<<<<< HEAD\nx\n=======\ny\n>>>>>>> branch\nb";
        assert_eq!(
            kinds(source),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn non_breaking_space_separates_operators() {
        // NBSP is trivia and unbinds the operator on that side.
        let source = "a\u{00A0}+b".as_bytes();
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Identifier,
                TokenKind::PrefixOperator,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    // === Recovery ===

    #[test]
    fn invalid_utf8_is_trivia() {
        let source = &[b'a', 0xFF, 0xFE, b' ', b'b'][..];
        assert_eq!(
            kinds(source),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn stray_combining_mark_is_unknown_token() {
        // The malformed-identifier recovery swallows the whole
        // continuation run, `x` included.
        let source = "\u{0301}x y".as_bytes();
        assert_eq!(
            kinds(source),
            vec![TokenKind::Unknown, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn curly_quoted_text_is_unknown_token() {
        let source = "“quoted”x".as_bytes();
        let lexemes = lex_source(source);
        assert_eq!(lexemes[0].kind, TokenKind::Unknown);
        assert_eq!(
            lexemes[0].text_len,
            u32::try_from("“quoted”".len()).unwrap()
        );
        assert_eq!(lexemes[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn number_error_is_attached_to_lexeme() {
        let lexemes = lex_source(b"0b012 x");
        assert_eq!(lexemes[0].kind, TokenKind::IntegerLiteral);
        let error = lexemes[0].error.unwrap();
        assert_eq!(error.offset, 4);
        assert_eq!(lexemes[1].kind, TokenKind::Identifier);
    }

    // === Session resumption ===

    #[test]
    fn resume_inside_string_body() {
        let buffer = SourceBuffer::new(b"abc\"");
        let mut lexer = Lexer::resume(
            &buffer,
            b'"',
            ScannerState::InStringLiteral {
                kind: crate::cursor::StringLiteralKind::SingleLine,
                delimiter_len: 0,
            },
        );
        let lexeme = lexer.next_lexeme();
        assert_eq!(lexeme.kind, TokenKind::StringLiteralContents);
        assert_eq!(lexeme.text_len, 3);
    }

    // === Invariants ===

    #[test]
    fn invariants_on_representative_sources() {
        let sources: &[&[u8]] = &[
            b"",
            b"let x = 42",
            b"  \n\t ",
            b"\"a\\(f(\"x\"))b\" + /re/ // done",
            b"#\"\"\"#",
            b"\"\"\"\nbody\n\"\"\"",
            b"\"unterminated",
            b"0b012 0o78 0xfg 1e_5",
            b"/* nested /* comment */ */ x",
            b"a\n<<<<<<< HEAD\nx\n>>>>>>> b\nc",
            b"#!/bin/sable\nmain()",
            b"`escaped` $0 $name _",
            b"x^.y !a a! *\xFF\xC0*",
            "λ ± “curly” \u{00A0}end".as_bytes(),
            b"\"multi\nline\"",
            b"'''",
        ];
        for source in sources {
            check_invariants(source);
        }
    }

    #[test]
    fn invariants_on_all_single_bytes() {
        for byte in 0u8..=255 {
            check_invariants(&[byte]);
        }
    }

    #[test]
    fn invariants_on_ascii_pairs() {
        // Every pair of printable ASCII plus quote/backslash/newline.
        let interesting: &[u8] = b"\"'\\#/(){}<>.?!&=$`_0a \n\r\t";
        for &a in interesting {
            for &b in interesting {
                check_invariants(&[a, b]);
            }
        }
    }

    // === Property tests ===

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn invariants_on_random_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                check_invariants(&bytes);
            }

            #[test]
            fn invariants_on_token_soup(
                pieces in proptest::collection::vec(
                    prop_oneof![
                        Just(&b"let"[..]),
                        Just(&b"x"[..]),
                        Just(&b"42"[..]),
                        Just(&b"0xff.fp0"[..]),
                        Just(&b"\"str\""[..]),
                        Just(&b"#\"raw\"#"[..]),
                        Just(&b"\"a\\(b)c\""[..]),
                        Just(&b"/re/"[..]),
                        Just(&b"+"[..]),
                        Just(&b"->"[..]),
                        Just(&b"<#p#>"[..]),
                        Just(&b"// comment"[..]),
                        Just(&b"/* block */"[..]),
                        Just(&b" "[..]),
                        Just(&b"\n"[..]),
                        Just(&b"\t"[..]),
                    ],
                    0..24,
                )
            ) {
                let source: Vec<u8> = pieces.concat();
                check_invariants(&source);
            }

            #[test]
            fn invariants_on_quote_heavy_soup(
                bytes in proptest::collection::vec(
                    prop_oneof![
                        Just(b'"'), Just(b'\''), Just(b'#'), Just(b'\\'),
                        Just(b'('), Just(b')'), Just(b'/'), Just(b'\n'),
                        Just(b'a'), Just(b' '),
                    ],
                    0..48,
                )
            ) {
                check_invariants(&bytes);
            }
        }
    }
}
