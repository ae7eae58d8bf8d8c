//! Lexer for a single line of source
//!
//! Splits a line into literal candidates and the things that must never be
//! mistaken for them: identifiers, strings and comments.

use log::trace;

use crate::locator::token::{Base, Token, TokenKind};

/// The lexer state
pub struct Lexer {
    /// Line as chars
    source: Vec<char>,
    /// Current position in source
    pos: usize,
    /// Start position of current token
    start: usize,
}

impl Lexer {
    /// Create a new lexer for the given line
    pub fn new(line: &str) -> Self {
        Self {
            source: line.chars().collect(),
            pos: 0,
            start: 0,
        }
    }

    /// The scanned line
    pub fn source(&self) -> &[char] {
        &self.source
    }

    /// Get the current character without advancing
    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    /// Get the next character without advancing
    fn peek_next(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        self.pos += 1;
        c
    }

    /// Check if we've reached the end of input
    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Create a token spanning start to current position
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.start, self.pos)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        self.skip_word();

        let text: String = self.source[self.start..self.pos].iter().collect();
        let kind = TokenKind::keyword_from_str(&text).unwrap_or(TokenKind::Ident);

        self.make_token(kind)
    }

    fn skip_word(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read digits of `base`, allowing single underscores between digits.
    /// Returns false when no digit was read.
    fn read_digits(&mut self, base: Base) -> bool {
        if !matches!(self.peek(), Some(c) if base.is_digit(c)) {
            return false;
        }
        self.advance();

        loop {
            match self.peek() {
                Some(c) if base.is_digit(c) => {
                    self.advance();
                }
                Some('_') if matches!(self.peek_next(), Some(c) if base.is_digit(c)) => {
                    self.advance();
                    self.advance();
                }
                _ => break,
            }
        }
        true
    }

    /// Read a number literal (integer or float)
    fn read_number(&mut self) -> Token {
        // Prefixed integer
        if self.peek() == Some('0') {
            if let Some(base) = self.peek_next().and_then(Base::from_marker) {
                self.advance(); // 0
                self.advance(); // marker
                let valid = self.read_digits(base);
                return self.finish_number(TokenKind::Number { base, exponent: None }, valid, false);
            }
        }

        let mut valid = true;

        if self.peek() != Some('.') {
            valid &= self.read_digits(Base::Decimal);
        }

        // Fraction; digits are optional after a leading integer part
        let mut bare_point = false;
        if self.peek() == Some('.') {
            self.advance();
            if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                valid &= self.read_digits(Base::Decimal);
            } else {
                bare_point = true;
            }
        }

        let mut exponent = None;
        if matches!(self.peek(), Some('e') | Some('E')) {
            exponent = Some(self.pos);
            self.advance();

            if matches!(self.peek(), Some('+') | Some('-')) {
                self.advance();
            }

            valid &= self.read_digits(Base::Decimal);
        }

        // `1.real`: the point ends the number and the name is an attribute
        let attribute = bare_point && exponent.is_none();
        self.finish_number(TokenKind::Number { base: Base::Decimal, exponent }, valid, attribute)
    }

    /// Reject a number glued to identifier characters, swallowing the rest
    /// of the run so none of it can match. With `attribute` set, a following
    /// name is a separate token.
    fn finish_number(&mut self, kind: TokenKind, valid: bool, attribute: bool) -> Token {
        let glued = !attribute && matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_');
        if valid && !glued {
            return self.make_token(kind);
        }

        self.skip_word();
        let token = self.make_token(TokenKind::Malformed);
        trace!("malformed number at {}..{}", token.start, token.end);
        token
    }

    /// Read a quoted string; an unterminated one runs to the end of the line
    fn read_string(&mut self, quote: char) -> Token {
        self.advance(); // consume opening quote

        while let Some(c) = self.advance() {
            if c == quote {
                break;
            }
            if c == '\\' {
                self.advance();
            }
        }
        self.pos = self.pos.min(self.source.len());

        self.make_token(TokenKind::Str)
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        self.start = self.pos;

        let c = self.peek()?;

        // Identifiers and keywords
        if c.is_alphabetic() || c == '_' {
            return Some(self.read_identifier());
        }

        // Numbers
        if c.is_ascii_digit() || (c == '.' && matches!(self.peek_next(), Some(d) if d.is_ascii_digit())) {
            return Some(self.read_number());
        }

        // String literals
        if c == '"' || c == '\'' {
            return Some(self.read_string(c));
        }

        // Comment
        if c == '#' {
            self.pos = self.source.len();
            return Some(self.make_token(TokenKind::Comment));
        }

        self.advance();
        Some(self.make_token(TokenKind::Punct(c)))
    }

    /// Tokenize the entire line
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        debug_assert!(self.is_at_end());
        tokens
    }
}
