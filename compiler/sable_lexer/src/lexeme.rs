//! The lexeme record produced by the driver, its metadata flags, and the
//! per-lexeme error type.
//!
//! A lexeme owns four contiguous byte ranges — leading trivia, text, and
//! trailing trivia — that partition a slice of the buffer. Concatenating the
//! ranges of every lexeme in a session reproduces the source exactly; the
//! driver's tests enforce this.

use crate::token::TokenKind;

/// Per-lexeme metadata flags packed into a single byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LexemeFlags(u8);

impl LexemeFlags {
    /// The lexeme is the first on its line: its leading trivia contains a
    /// line break, or it starts at offset 0.
    pub const AT_START_OF_LINE: u8 = 1 << 0;
    /// The identifier was written with backtick escapes: `` `name` ``.
    pub const ESCAPED_IDENTIFIER: u8 = 1 << 1;

    /// Empty flags (no bits set).
    pub const EMPTY: Self = LexemeFlags(0);

    /// Create flags from raw bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        LexemeFlags(bits)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if a specific flag is set.
    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Check if this lexeme is first on its line.
    #[inline]
    pub const fn is_at_start_of_line(self) -> bool {
        self.contains(Self::AT_START_OF_LINE)
    }

    /// Check if this lexeme is a backtick-escaped identifier.
    #[inline]
    pub const fn is_escaped_identifier(self) -> bool {
        self.contains(Self::ESCAPED_IDENTIFIER)
    }
}

/// What went wrong inside a lexeme.
///
/// Every variant describes a malformation the lexer recovered from; none of
/// them stops the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A digit outside `0-7` in an `0o` literal.
    InvalidOctalDigit,
    /// A digit outside `0-1` in a `0b` literal.
    InvalidBinaryDigit,
    /// A non-hex digit in an `0x` literal.
    InvalidHexDigit,
    /// A non-digit where a decimal literal continues.
    InvalidDecimalDigit,
    /// An exponent marker with no digits after it.
    ExpectedDigitInFloat,
    /// An exponent starting with `_` (separators cannot lead).
    InvalidFloatingPointExponentCharacter,
    /// A non-digit inside a float exponent.
    InvalidFloatingPointExponentDigit,
    /// A hex float with a fraction but no `p` exponent (`0x1.8`).
    ExpectedBinaryExponentInHexFloat,
}

impl LexErrorKind {
    /// A short human-readable message for diagnostics.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidOctalDigit => "invalid digit in octal literal",
            Self::InvalidBinaryDigit => "invalid digit in binary literal",
            Self::InvalidHexDigit => "invalid digit in hexadecimal literal",
            Self::InvalidDecimalDigit => "invalid digit in decimal literal",
            Self::ExpectedDigitInFloat => "expected a digit in floating-point exponent",
            Self::InvalidFloatingPointExponentCharacter => {
                "floating-point exponent cannot start with `_`"
            }
            Self::InvalidFloatingPointExponentDigit => {
                "invalid digit in floating-point exponent"
            }
            Self::ExpectedBinaryExponentInHexFloat => {
                "hexadecimal float requires a binary exponent (`p`)"
            }
        }
    }
}

/// A recoverable error attached to a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Byte offset of the fault, relative to the lexeme's text start.
    pub offset: u32,
}

impl LexError {
    /// Create an error of `kind` at `offset` bytes into the lexeme text.
    #[inline]
    pub fn new(kind: LexErrorKind, offset: u32) -> Self {
        LexError { kind, offset }
    }
}

/// One lexed unit: token text plus the trivia attached to it.
///
/// The ranges are laid out as
///
/// ```text
/// [leading trivia][text][trailing trivia]
///  ^leading_trivia_start
/// ```
///
/// and abut the neighbouring lexemes without gap or overlap. Lexemes borrow
/// nothing; they address the buffer they were lexed from by offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Metadata flags.
    pub flags: LexemeFlags,
    /// The error recovered from while lexing this token, if any.
    pub error: Option<LexError>,
    /// Byte offset where the leading trivia (and thus the lexeme) begins.
    pub leading_trivia_start: u32,
    /// Length of the leading trivia in bytes.
    pub leading_trivia_len: u32,
    /// Length of the token text in bytes.
    pub text_len: u32,
    /// Length of the trailing trivia in bytes.
    pub trailing_trivia_len: u32,
}

impl Lexeme {
    /// Byte offset where the token text begins.
    #[inline]
    pub fn text_start(&self) -> u32 {
        self.leading_trivia_start + self.leading_trivia_len
    }

    /// Byte offset just past the token text.
    #[inline]
    pub fn text_end(&self) -> u32 {
        self.text_start() + self.text_len
    }

    /// Byte offset just past the trailing trivia — where the next lexeme
    /// begins.
    #[inline]
    pub fn trailing_end(&self) -> u32 {
        self.text_end() + self.trailing_trivia_len
    }

    /// The token text, sliced out of `source`.
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.text_start() as usize..self.text_end() as usize]
    }

    /// The leading trivia bytes, sliced out of `source`.
    pub fn leading_trivia<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.leading_trivia_start as usize..self.text_start() as usize]
    }

    /// The trailing trivia bytes, sliced out of `source`.
    pub fn trailing_trivia<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.text_end() as usize..self.trailing_end() as usize]
    }
}

// Compile-time size checks for the frequently-produced types.
const _: () = assert!(std::mem::size_of::<LexemeFlags>() == 1);
const _: () = assert!(std::mem::size_of::<Lexeme>() <= 32);
