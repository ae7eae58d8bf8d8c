//! Token definitions for the line scanner

use serde::Serialize;

/// Spelling of the true keyword
pub const TRUE_KEYWORD: &str = "True";
/// Spelling of the false keyword
pub const FALSE_KEYWORD: &str = "False";

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Start char index
    pub start: usize,
    /// End char index (exclusive)
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn covers(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Token kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ============ Literals ============
    /// Numeric literal; `exponent` is the char index of an `e`/`E` marker
    Number { base: Base, exponent: Option<usize> },
    /// True / False
    Bool(bool),

    // ============ Everything else ============
    /// Identifier or non-literal keyword
    Ident,
    /// Quoted string, possibly unterminated
    Str,
    /// `#` comment to end of line
    Comment,
    /// Digit run that is not a valid literal (`1e`, `0x`, `12ab`)
    Malformed,
    /// Any other single character
    Punct(char),
}

impl TokenKind {
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            TRUE_KEYWORD => Some(TokenKind::Bool(true)),
            FALSE_KEYWORD => Some(TokenKind::Bool(false)),
            _ => None,
        }
    }
}

/// Base of an integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Base named by the letter after a leading `0` (`0b`, `0o`, `0x`)
    pub fn from_marker(c: char) -> Option<Base> {
        match c.to_ascii_lowercase() {
            'b' => Some(Base::Binary),
            'o' => Some(Base::Octal),
            'x' => Some(Base::Hexadecimal),
            _ => None,
        }
    }

    /// Whether literals of this base carry a two-character prefix
    pub fn is_prefixed(self) -> bool {
        self != Base::Decimal
    }

    /// Check whether `c` is a digit of this base, in either letter case
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(Base::from_marker('x'), Some(Base::Hexadecimal));
        assert_eq!(Base::from_marker('X'), Some(Base::Hexadecimal));
        assert_eq!(Base::from_marker('O'), Some(Base::Octal));
        assert_eq!(Base::from_marker('b'), Some(Base::Binary));
        assert_eq!(Base::from_marker('d'), None);
    }

    #[test]
    fn test_digits_per_base() {
        assert!(Base::Binary.is_digit('1'));
        assert!(!Base::Binary.is_digit('2'));
        assert!(Base::Octal.is_digit('7'));
        assert!(!Base::Octal.is_digit('8'));
        assert!(Base::Hexadecimal.is_digit('F'));
        assert!(Base::Hexadecimal.is_digit('a'));
        assert!(!Base::Hexadecimal.is_digit('x'));
        assert!(!Base::Decimal.is_digit('e'));
        assert!(!Base::Decimal.is_digit('_'));
    }

    #[test]
    fn test_boolean_keywords() {
        assert_eq!(TokenKind::keyword_from_str("True"), Some(TokenKind::Bool(true)));
        assert_eq!(TokenKind::keyword_from_str("False"), Some(TokenKind::Bool(false)));
        assert_eq!(TokenKind::keyword_from_str("true"), None);
    }
}
