//! Literal locator - finds the editable literal under a cursor

pub mod token;
pub mod lexer;

pub use token::{Base, Token, TokenKind, FALSE_KEYWORD, TRUE_KEYWORD};
pub use lexer::Lexer;

use log::debug;

use crate::utils::LiteralSpan;

/// Find the literal whose digit (or boolean keyword) sits at `index`.
///
/// The significand and exponent of a decimal literal are separate spans. A
/// `-` directly before the span is included; a `+` is only included when it
/// signs an exponent. Points, underscores, exponent markers and the `0` of a
/// base prefix never match.
pub fn locate(line: &str, index: usize) -> Option<LiteralSpan> {
    let mut lexer = Lexer::new(line);
    let tokens = lexer.tokenize();
    let source = lexer.source();

    let token = tokens.into_iter().find(|t| t.covers(index))?;

    let (base, exponent) = match token.kind {
        TokenKind::Bool(_) => return Some(LiteralSpan::boolean(token.start, token.end)),
        TokenKind::Number { base, exponent } => (base, exponent),
        _ => return None,
    };

    let (mut start, end) = match exponent {
        Some(marker) if marker < index => (marker + 1, token.end),
        Some(marker) => (token.start, marker),
        None => (token.start, token.end),
    };

    if !base.is_digit(source[index]) || (base.is_prefixed() && index == token.start) {
        return None;
    }

    if start > 0 && source[start - 1] == '-' {
        start -= 1;
    }

    debug!("located {:?} literal at {}..{} for index {}", base, start, end, index);
    Some(LiteralSpan::numeric(start, end, base))
}

/// Whether `index` holds a digit that [`locate`] would hand to the
/// transformer.
pub fn is_digit(line: &str, index: usize) -> bool {
    matches!(locate(line, index), Some(span) if !span.is_boolean())
}
