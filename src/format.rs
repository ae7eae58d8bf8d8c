//! Format preservation
//!
//! A nudged literal should look like the one it replaced: same prefix
//! spelling, same hex letter case, same underscore grouping. The new text is
//! rebuilt from the raw arithmetic result using what [`FormatMetadata`]
//! recorded about the original.

use crate::locator::Base;

/// Letter case used for hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexCase {
    Lower,
    Upper,
}

/// Surface formatting of an original literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMetadata {
    /// Leading `+` or `-`
    pub sign: Option<char>,
    /// Base prefix as written (`0x`, `0X`, ...), empty for decimal
    pub prefix: String,
    pub hex_case: HexCase,
    /// Underscore positions as negative offsets from the end of the literal
    pub underscores: Vec<isize>,
    /// Digits with sign, prefix and underscores removed (may contain a point)
    pub digits: String,
}

impl FormatMetadata {
    pub fn scan(expr: &str, base: Base) -> Self {
        let sign = expr.chars().next().filter(|c| matches!(*c, '+' | '-'));
        let rest = &expr[sign.map_or(0, char::len_utf8)..];

        let prefix: String = if base.is_prefixed() {
            rest.chars().take(2).collect()
        } else {
            String::new()
        };
        let body = &rest[prefix.len()..];

        let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
        let hex_case = if has_lower && !has_upper { HexCase::Lower } else { HexCase::Upper };

        let len = expr.chars().count() as isize;
        let underscores = expr
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '_')
            .map(|(i, _)| i as isize - len)
            .collect();

        Self {
            sign,
            prefix,
            hex_case,
            underscores,
            digits: body.chars().filter(|&c| c != '_').collect(),
        }
    }

    /// Whether the digit run was written with leading zero padding
    pub fn zero_padded(&self) -> bool {
        self.digits.starts_with('0')
    }
}

/// Number of leading non-digit characters in a result: sign and base prefix
pub fn prefix_len(raw: &str, base: Base) -> usize {
    let sign = usize::from(raw.starts_with(['+', '-']));
    sign + if base.is_prefixed() { 2 } else { 0 }
}

/// Rebuild the literal text from a raw, unprefixed result
pub fn reformat(raw: &str, base: Base, meta: &FormatMetadata) -> String {
    let (sign, digits) = match raw.strip_prefix(['+', '-']) {
        Some(rest) => (&raw[..1], rest),
        None => ("", raw),
    };

    let digits = match (base, meta.hex_case) {
        (Base::Hexadecimal, HexCase::Lower) => digits.to_ascii_lowercase(),
        (Base::Hexadecimal, HexCase::Upper) => digits.to_ascii_uppercase(),
        _ => digits.to_string(),
    };

    let mut text: Vec<char> = sign.chars().chain(meta.prefix.chars()).chain(digits.chars()).collect();
    let prefix = prefix_len(raw, base) as isize;

    // Right to left, so each offset still counts the underscores after it
    for &offset in meta.underscores.iter().rev() {
        let at = text.len() as isize + offset + 1;
        if at > prefix {
            text.insert(at as usize, '_');
        }
    }

    text.into_iter().collect()
}
