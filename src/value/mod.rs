//! Value transformer - applies one unit of place value to a located literal

pub mod integer;
pub mod decimal;

pub use decimal::{DecimalContext, DEFAULT_PRECISION, PRECISION_MARGIN};

use serde::{Deserialize, Serialize};

use crate::format::FormatMetadata;
use crate::locator::{Base, FALSE_KEYWORD, TRUE_KEYWORD};
use crate::utils::Result;

/// Which way to nudge a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// Signed unit: `+1` or `-1`
    pub fn delta(self) -> i32 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }
}

/// Change the digit at `index` of the numeric literal `expr` by one unit of
/// its place value, returning the raw (unprefixed, ungrouped) result.
///
/// A span containing a point is computed as a decimal, anything else as an
/// integer of `base`. A `+` written on the original is kept while the result
/// stays non-negative.
pub fn transform(
    expr: &str,
    base: Base,
    index: usize,
    direction: Direction,
    meta: &FormatMetadata,
    ctx: &mut DecimalContext,
) -> Result<String> {
    let chars: Vec<char> = expr.chars().collect();
    let delta = direction.delta();

    let mut raw = if chars.contains(&'.') {
        decimal::step(&chars, index, delta, ctx)?
    } else {
        integer::step(&chars, index, base, delta, meta)?
    };

    if meta.sign == Some('+') && !raw.starts_with('-') {
        raw.insert(0, '+');
    }
    Ok(raw)
}

/// The other boolean keyword
pub fn toggle(keyword: &str) -> &'static str {
    if keyword == TRUE_KEYWORD {
        FALSE_KEYWORD
    } else {
        TRUE_KEYWORD
    }
}
