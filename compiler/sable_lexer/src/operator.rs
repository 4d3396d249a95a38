//! Operator recognition: maximal runs of operator scalars, classified by
//! the boundness of their surroundings into prefix, postfix, or binary
//! fixity, with the reserved single- and two-character forms split out.

use crate::cursor::Cursor;
use crate::lexer::Scanned;
use crate::token::TokenKind;
use crate::unicode;

/// Lex an operator. The cursor sits on an operator-start scalar.
pub(crate) fn lex_operator(cursor: &mut Cursor<'_>, text_start: u32) -> Scanned {
    let left_bound = cursor.is_left_bound();
    let started_with_dot = cursor.current() == b'.';

    cursor.advance_if(unicode::is_operator_head);
    loop {
        // A dot can only continue an operator that began with one.
        if cursor.current() == b'.' && !started_with_dot {
            break;
        }
        // A comment begins here; it belongs to trivia.
        if cursor.current() == b'/' && matches!(cursor.peek(), b'/' | b'*') {
            break;
        }
        // Split before `<#` when a matching `#>` completes a placeholder on
        // this line, so the placeholder lexes on its own.
        if cursor.current() == b'<' && cursor.peek() == b'#' && placeholder_closes_on_line(cursor)
        {
            break;
        }
        if !cursor.advance_if(unicode::is_operator_continuation) {
            break;
        }
    }

    let text = cursor.slice_from(text_start);
    let right_bound = cursor.is_right_bound(left_bound);

    match text {
        b"=" => Scanned::token(TokenKind::Equal),
        b"&" if right_bound && !left_bound => Scanned::token(TokenKind::PrefixAmpersand),
        b"." => Scanned::token(TokenKind::Period),
        b"?" if left_bound => Scanned::token(TokenKind::PostfixQuestionMark),
        b"?" => Scanned::token(TokenKind::InfixQuestionMark),
        b"->" => Scanned::token(TokenKind::Arrow),
        // A stray comment terminator never forms an operator.
        b"*/" => Scanned::token(TokenKind::Unknown),
        _ if text.len() > 2 && contains_comment_end(text) => Scanned::token(TokenKind::Unknown),
        _ => Scanned::token(classify(left_bound, right_bound)),
    }
}

fn classify(left_bound: bool, right_bound: bool) -> TokenKind {
    if left_bound == right_bound {
        TokenKind::BinaryOperator
    } else if left_bound {
        TokenKind::PostfixOperator
    } else {
        TokenKind::PrefixOperator
    }
}

fn contains_comment_end(text: &[u8]) -> bool {
    text.windows(2).any(|pair| pair == b"*/")
}

/// Whether a `#>` closes the `<#` at the cursor before the end of the line.
pub(crate) fn placeholder_closes_on_line(cursor: &Cursor<'_>) -> bool {
    let mut offset = 2;
    loop {
        match cursor.peek_at(offset) {
            0 | b'\n' | b'\r' => return false,
            b'#' if cursor.peek_at(offset + 1) == b'>' => return true,
            _ => offset += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceBuffer;

    /// Lex the operator at `at` in `source`, faking the consumption of the
    /// bytes before it so boundness sees the real neighbourhood.
    fn lex_at(source: &[u8], at: u32) -> (TokenKind, u32) {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        for _ in 0..at {
            cursor.advance();
        }
        let scanned = lex_operator(&mut cursor, at);
        (scanned.kind, cursor.pos() - at)
    }

    // === Fixity ===

    #[test]
    fn binary_when_bound_on_both_sides() {
        assert_eq!(lex_at(b"a+b", 1), (TokenKind::BinaryOperator, 1));
        assert_eq!(lex_at(b"a + b", 2).0, TokenKind::BinaryOperator);
    }

    #[test]
    fn prefix_when_right_bound_only() {
        assert_eq!(lex_at(b"-x", 0), (TokenKind::PrefixOperator, 1));
        assert_eq!(lex_at(b"(!x)", 1).0, TokenKind::PrefixOperator);
    }

    #[test]
    fn postfix_when_left_bound_only() {
        assert_eq!(lex_at(b"x^ ", 1), (TokenKind::PostfixOperator, 1));
        assert_eq!(lex_at(b"x++)", 1), (TokenKind::PostfixOperator, 2));
    }

    #[test]
    fn dot_rule_keeps_postfix_before_member_access() {
        // x^.y : postfix ^, the dot is member access
        assert_eq!(lex_at(b"x^.y", 1), (TokenKind::PostfixOperator, 1));
        // ^.y at start: prefix ^
        assert_eq!(lex_at(b"^.y", 0), (TokenKind::PrefixOperator, 1));
    }

    // === Runs ===

    #[test]
    fn maximal_runs() {
        assert_eq!(lex_at(b"a<=>b", 1), (TokenKind::BinaryOperator, 3));
        assert_eq!(lex_at(b"a===b", 1), (TokenKind::BinaryOperator, 3));
    }

    #[test]
    fn dotted_operator_keeps_dots() {
        assert_eq!(lex_at(b"a..<b", 1), (TokenKind::BinaryOperator, 3));
        assert_eq!(lex_at(b"a...b", 1), (TokenKind::BinaryOperator, 3));
    }

    #[test]
    fn dot_cannot_join_mid_operator() {
        // `+.` stops before the dot; the dot then refuses to right-bind.
        assert_eq!(lex_at(b"a+.b", 1), (TokenKind::PostfixOperator, 1));
    }

    #[test]
    fn comment_start_ends_the_run() {
        assert_eq!(lex_at(b"a+//c", 1), (TokenKind::PostfixOperator, 1));
        assert_eq!(lex_at(b"a+/*c*/", 1), (TokenKind::PostfixOperator, 1));
    }

    #[test]
    fn unicode_operator() {
        let source = "a±b".as_bytes();
        assert_eq!(lex_at(source, 1), (TokenKind::BinaryOperator, 2));
    }

    // === Reserved forms ===

    #[test]
    fn reserved_single_characters() {
        assert_eq!(lex_at(b"a = b", 2).0, TokenKind::Equal);
        assert_eq!(lex_at(b"a.b", 1).0, TokenKind::Period);
        assert_eq!(lex_at(b"(&x)", 1).0, TokenKind::PrefixAmpersand);
        // `&` bound on both sides stays an operator
        assert_eq!(lex_at(b"a&b", 1).0, TokenKind::BinaryOperator);
    }

    #[test]
    fn question_mark_by_boundness() {
        assert_eq!(lex_at(b"x? ", 1).0, TokenKind::PostfixQuestionMark);
        assert_eq!(lex_at(b"a ? b", 2).0, TokenKind::InfixQuestionMark);
    }

    #[test]
    fn arrow() {
        assert_eq!(lex_at(b"a -> b", 2), (TokenKind::Arrow, 2));
    }

    #[test]
    fn stray_comment_end_is_unknown() {
        assert_eq!(lex_at(b"*/", 0), (TokenKind::Unknown, 2));
        assert_eq!(lex_at(b"a+*/-b", 1), (TokenKind::Unknown, 4));
    }

    // === Placeholder splitting ===

    #[test]
    fn operator_splits_before_placeholder() {
        assert_eq!(lex_at(b"+<#x#>", 0), (TokenKind::PrefixOperator, 1));
    }

    #[test]
    fn no_split_without_closing() {
        // `<#` with no `#>` on the line: the `<` joins the run and the `#`
        // ends it.
        assert_eq!(lex_at(b"+<#x", 0).1, 2);
    }
}
