//! Utility module

mod span;
mod error;

pub use span::LiteralSpan;
pub use error::{Error, Result};
