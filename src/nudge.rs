//! The nudge pipeline: locate, transform, reformat, move the cursor

use log::debug;
use serde::Serialize;

use crate::cursor;
use crate::format::{self, FormatMetadata};
use crate::locator::locate;
use crate::utils::{Error, Result};
use crate::value::{self, DecimalContext, Direction};

/// A rewritten line and how far the cursor should move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub line: String,
    pub offset: isize,
}

impl Edit {
    fn unchanged(line: &str) -> Self {
        Self { line: line.to_string(), offset: 0 }
    }

    pub fn is_noop(&self, original: &str) -> bool {
        self.offset == 0 && self.line == original
    }
}

/// Nudge the literal at `index` of `line` one unit in `direction`.
///
/// An empty line, or an index that lands on no literal, comes back unchanged
/// with a zero offset.
pub fn transform_literal(
    ctx: &mut DecimalContext,
    line: &str,
    index: usize,
    direction: Direction,
) -> Result<Edit> {
    if line.contains(['\n', '\r']) {
        return Err(Error::MultiLine);
    }
    if line.is_empty() {
        return Ok(Edit::unchanged(line));
    }

    let source: Vec<char> = line.chars().collect();
    if index >= source.len() {
        return Err(Error::IndexOutOfRange { index, len: source.len() });
    }

    let Some(span) = locate(line, index) else {
        debug!("no literal at index {}", index);
        return Ok(Edit::unchanged(line));
    };

    let expr: String = source[span.start..span.end].iter().collect();
    let (result, prefix_len) = match span.base {
        None => (value::toggle(&expr).to_string(), 0),
        Some(base) => {
            let meta = FormatMetadata::scan(&expr, base);
            let raw = value::transform(&expr, base, index - span.start, direction, &meta, ctx)?;
            (format::reformat(&raw, base, &meta), format::prefix_len(&raw, base))
        }
    };

    let offset = cursor::offset(span.start, index, &expr, &result, prefix_len);
    debug!("{:?} {:?} -> {:?}, cursor {:+}", direction, expr, result, offset);

    let mut new_line: String = source[..span.start].iter().collect();
    new_line.push_str(&result);
    new_line.extend(&source[span.end..]);

    Ok(Edit { line: new_line, offset })
}

/// Owns a [`DecimalContext`] across calls for callers that do not want to
/// manage one.
#[derive(Debug, Default, Clone)]
pub struct Nudger {
    ctx: DecimalContext,
}

impl Nudger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(ctx: DecimalContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &DecimalContext {
        &self.ctx
    }

    pub fn nudge(&mut self, line: &str, index: usize, direction: Direction) -> Result<Edit> {
        transform_literal(&mut self.ctx, line, index, direction)
    }

    pub fn increment(&mut self, line: &str, index: usize) -> Result<Edit> {
        self.nudge(line, index, Direction::Increment)
    }

    pub fn decrement(&mut self, line: &str, index: usize) -> Result<Edit> {
        self.nudge(line, index, Direction::Decrement)
    }
}
