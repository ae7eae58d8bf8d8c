//! Decimal (fractional) literal arithmetic
//!
//! Values are `BigDecimal`s so no literal the user can type loses digits.
//! Precision is owned by the caller through [`DecimalContext`].

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::locator::Base;
use crate::utils::{Error, Result};

/// Significant digits before any literal has been seen
pub const DEFAULT_PRECISION: u64 = 28;

/// Extra digits reserved on top of the widest literal seen so far
pub const PRECISION_MARGIN: u64 = 5;

/// Precision setting for decimal computations.
///
/// Precision only ever grows, so a literal that was exactly representable
/// once stays exactly representable for the life of the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: u64,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

impl DecimalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a precision other than the default (at least one digit)
    pub fn with_precision(precision: u64) -> Self {
        Self { precision: precision.max(1) }
    }

    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Raise the precision to at least `digits`; never lowers it
    pub fn ensure_precision(&mut self, digits: u64) -> u64 {
        if digits > self.precision {
            log::debug!("raising decimal precision {} -> {}", self.precision, digits);
            self.precision = digits;
        }
        self.precision
    }

    /// Round `value` to the context precision if it has more digits
    fn apply(&self, value: BigDecimal) -> BigDecimal {
        if value.digits() > self.precision {
            value.with_prec(self.precision)
        } else {
            value
        }
    }
}

/// Power of ten of the digit at `index`, relative to the decimal point.
///
/// Underscores are not digits. Without a point, the point is taken to sit at
/// the end of `expr`.
pub fn weight(expr: &[char], index: usize) -> i64 {
    let point = expr.iter().position(|&c| c == '.').unwrap_or(expr.len());
    let count = |chars: &[char]| chars.iter().filter(|c| c.is_ascii_digit()).count() as i64;

    if point > index {
        count(&expr[index + 1..point])
    } else {
        -count(&expr[point + 1..=index])
    }
}

/// Add `delta * 10^weight` to the decimal literal `expr` and render the
/// result in positional notation.
pub fn step(expr: &[char], index: usize, delta: i32, ctx: &mut DecimalContext) -> Result<String> {
    let weight = weight(expr, index);
    let value = parse(expr)?;

    ctx.ensure_precision(expr.len() as u64 + PRECISION_MARGIN);

    let step = BigDecimal::new(BigInt::from(delta), -weight);
    let (_, literal_scale) = value.as_bigint_and_exponent();
    let scale = literal_scale.max(-weight);
    let result = ctx.apply((value + step).with_scale(scale));

    log::trace!("decimal step 10^{} -> {}", weight, result);
    let mut text = render(&result);
    // `5.` keeps its trailing point
    if expr.last() == Some(&'.') && !text.contains('.') {
        text.push('.');
    }
    Ok(text)
}

/// Parse a signed decimal literal with optional point and underscores
fn parse(expr: &[char]) -> Result<BigDecimal> {
    let text: String = expr.iter().filter(|&&c| c != '_').collect();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text.as_str())),
    };

    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let digits = format!("{int_part}{frac_part}");
    if digits.is_empty() || !digits.chars().all(|c| Base::Decimal.is_digit(c)) {
        return Err(Error::InvalidDigits(text.clone()));
    }

    let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| Error::InvalidDigits(text.clone()))?;
    let mantissa = if negative { -mantissa } else { mantissa };

    Ok(BigDecimal::new(mantissa, frac_part.len() as i64))
}

/// Render without exponent notation, keeping trailing fractional zeros
fn render(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let sign = if mantissa.is_negative() { "-" } else { "" };
    let digits = mantissa.magnitude().to_str_radix(10);

    if scale <= 0 {
        if mantissa.is_zero() {
            return "0".to_string();
        }
        return format!("{sign}{digits}{}", "0".repeat(scale.unsigned_abs() as usize));
    }

    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(expr: &str, index: usize, delta: i32) -> String {
        step(&chars(expr), index, delta, &mut DecimalContext::new()).unwrap()
    }

    #[test]
    fn test_weight_left_and_right_of_point() {
        assert_eq!(weight(&chars("123.45"), 0), 2);
        assert_eq!(weight(&chars("123.45"), 2), 0);
        assert_eq!(weight(&chars("123.45"), 4), -1);
        assert_eq!(weight(&chars("123.45"), 5), -2);
    }

    #[test]
    fn test_weight_skips_underscores_and_sign() {
        assert_eq!(weight(&chars("1_000.0_5"), 0), 3);
        assert_eq!(weight(&chars("1_000.0_5"), 8), -2);
        assert_eq!(weight(&chars("-11.0"), 1), 1);
    }

    #[test]
    fn test_weight_without_point() {
        assert_eq!(weight(&chars("150"), 0), 2);
    }

    #[test]
    fn test_step_keeps_fraction_width() {
        assert_eq!(run("1.0", 2, 1), "1.1");
        assert_eq!(run("1.0", 2, -1), "0.9");
        assert_eq!(run("1.4", 0, 1), "2.4");
        assert_eq!(run("9.99", 0, 1), "10.99");
    }

    #[test]
    fn test_step_crosses_zero() {
        assert_eq!(run("0.01", 2, -1), "-0.09");
        assert_eq!(run("-0.01", 3, 1), "0.09");
        assert_eq!(run("-11.0", 1, 1), "-1.0");
        assert_eq!(run("0.1", 2, -1), "0.0");
    }

    #[test]
    fn test_step_point_forms() {
        assert_eq!(run(".5", 1, 1), "0.6");
        assert_eq!(run("5.", 0, 1), "6.");
        assert_eq!(run("9.", 0, 1), "10.");
    }

    #[test]
    fn test_step_never_uses_exponent_notation() {
        assert_eq!(run("0.0000001", 8, 1), "0.0000002");
        assert_eq!(run("100000000.0", 0, 1), "200000000.0");
    }

    #[test]
    fn test_long_literals_stay_exact() {
        let expr = "1234567890123456789012345678901234567890.5";
        let mut ctx = DecimalContext::new();
        let result = step(&chars(expr), expr.len() - 1, 1, &mut ctx).unwrap();
        assert_eq!(result, "1234567890123456789012345678901234567890.6");
        assert_eq!(ctx.precision(), expr.len() as u64 + PRECISION_MARGIN);
    }

    #[test]
    fn test_precision_is_monotonic() {
        let mut ctx = DecimalContext::new();
        assert_eq!(ctx.ensure_precision(50), 50);
        assert_eq!(ctx.ensure_precision(10), 50);
        assert_eq!(ctx.precision(), 50);

        run_with(&mut ctx, "1.5");
        assert_eq!(ctx.precision(), 50);
    }

    #[test]
    fn test_context_rounds_only_when_exceeded() {
        let ctx = DecimalContext::with_precision(3);
        let value = BigDecimal::new(BigInt::from(12345), 2);
        assert_eq!(render(&ctx.apply(value)), "123");
        let small = BigDecimal::new(BigInt::from(12), 1);
        assert_eq!(render(&ctx.apply(small)), "1.2");
    }

    fn run_with(ctx: &mut DecimalContext, expr: &str) -> String {
        step(&chars(expr), 0, 1, ctx).unwrap()
    }
}
