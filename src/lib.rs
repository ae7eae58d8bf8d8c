//! litnudge
//!
//! Increment or decrement the digit under a cursor in one line of source,
//! keeping the literal's prefix, case, grouping and exponent form intact, and
//! report how far the cursor has to move to stay on that digit.
//!
//! Pipeline: [`locator`] finds the literal, [`value`] changes it, [`format`]
//! restores its spelling and [`cursor`] computes the offset.

pub mod locator;
pub mod value;
pub mod format;
pub mod cursor;
pub mod nudge;
pub mod utils;

pub use locator::{is_digit, locate, Base};
pub use nudge::{transform_literal, Edit, Nudger};
pub use utils::{Error, LiteralSpan, Result};
pub use value::{DecimalContext, Direction};
