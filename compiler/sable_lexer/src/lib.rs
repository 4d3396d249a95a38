//! Byte-level lexer for the Sable programming language.
//!
//! Consumes a UTF-8 source buffer — tolerating arbitrary bytes — and
//! produces a stream of [`Lexeme`]s, each carrying a token kind, the trivia
//! attached before and after its text, classification flags, and at most
//! one recovered error. Lexing never fails: malformed input degrades into
//! `Unknown` tokens, trivia, or per-lexeme errors, and the stream always
//! ends in a zero-length `Eof`.
//!
//! # Architecture
//!
//! The scanner is a single-pass state machine over a `Copy` [`Cursor`]:
//!
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated buffer and the
//!   cursor that threads position, one byte of look-behind, and the
//!   [`ScannerState`] between lexemes.
//! - [`Lexer`]: the driver — leading trivia, one recognizer dispatch,
//!   trailing trivia per call.
//! - Recognizers for numbers, identifiers, operators (classified by the
//!   boundness of their surroundings), string literals (a five-state
//!   mini-automaton with raw delimiters and interpolation skip-scanning),
//!   speculative regex literals, and `#` forms.
//!
//! Speculation — regex literals, multi-line string delimiters, editor
//! placeholders — rolls back by assigning a saved cursor copy; there are no
//! panics or error returns on the lexing paths.
//!
//! # Usage
//!
//! ```
//! use sable_lexer::{lex, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new(b"let x = 42");
//! let lexemes = lex(&buffer);
//! assert_eq!(lexemes.last().map(|l| l.kind), Some(TokenKind::Eof));
//!
//! // The lexeme ranges reproduce the buffer exactly.
//! let total: u32 = lexemes
//!     .iter()
//!     .map(|l| l.leading_trivia_len + l.text_len + l.trailing_trivia_len)
//!     .sum();
//! assert_eq!(total, buffer.len());
//! ```

mod cursor;
mod identifier;
mod lexeme;
mod lexer;
mod number;
mod operator;
mod pound;
mod regex;
mod source_buffer;
mod string;
mod token;
mod trivia;
mod unicode;

pub use cursor::{Cursor, ScannerState, StringLiteralKind};
pub use lexeme::{LexError, LexErrorKind, Lexeme, LexemeFlags};
pub use lexer::{lex, Lexer};
pub use source_buffer::SourceBuffer;
pub use token::{Keyword, PoundKeyword, TokenKind};
