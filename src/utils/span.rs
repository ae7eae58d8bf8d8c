//! Literal location tracking

use serde::Serialize;

use crate::locator::Base;

/// A half-open range of char indices covering one editable literal.
///
/// `base` is `None` for boolean keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LiteralSpan {
    /// Start char index, including a leading `-` when present
    pub start: usize,
    /// End char index (exclusive)
    pub end: usize,
    /// Base of a numeric literal
    pub base: Option<Base>,
}

impl LiteralSpan {
    /// Create a span over a numeric literal
    pub fn numeric(start: usize, end: usize, base: Base) -> Self {
        Self { start, end, base: Some(base) }
    }

    /// Create a span over a boolean keyword
    pub fn boolean(start: usize, end: usize) -> Self {
        Self { start, end, base: None }
    }

    pub fn is_boolean(&self) -> bool {
        self.base.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_span_has_base() {
        let span = LiteralSpan::numeric(2, 5, Base::Decimal);
        assert!(!span.is_boolean());
        assert_eq!((span.start, span.end), (2, 5));
    }

    #[test]
    fn test_boolean_span_has_no_base() {
        let span = LiteralSpan::boolean(0, 4);
        assert!(span.is_boolean());
        assert_eq!(span.base, None);
    }
}
