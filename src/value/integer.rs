//! Integer literal arithmetic in any supported base

use num_bigint::BigInt;
use num_traits::Signed;

use crate::format::FormatMetadata;
use crate::locator::Base;
use crate::utils::{Error, Result};

/// Power of the base for the digit at `index`: the number of digits to its
/// right, not counting underscores.
pub fn weight(expr: &[char], index: usize) -> u32 {
    expr[index + 1..].iter().filter(|&&c| c != '_').count() as u32
}

/// Add `delta * base^weight` to the integer literal `expr`.
///
/// The result is signed but unprefixed; zero padding of the original digit
/// run is kept.
pub fn step(expr: &[char], index: usize, base: Base, delta: i32, meta: &FormatMetadata) -> Result<String> {
    let weight = weight(expr, index);
    let value = parse(meta, base)?;

    let unit = BigInt::from(base.radix()).pow(weight);
    let value = value + unit * delta;
    log::trace!("integer step {}^{} -> {}", base.radix(), weight, value);

    let mut digits = value.magnitude().to_str_radix(base.radix());
    let width = meta.digits.len();
    if meta.zero_padded() && digits.len() < width {
        digits.insert_str(0, &"0".repeat(width - digits.len()));
    }

    let sign = if value.is_negative() { "-" } else { "" };
    Ok(format!("{sign}{digits}"))
}

fn parse(meta: &FormatMetadata, base: Base) -> Result<BigInt> {
    let value = BigInt::parse_bytes(meta.digits.as_bytes(), base.radix())
        .ok_or_else(|| Error::InvalidDigits(meta.digits.clone()))?;

    Ok(if meta.sign == Some('-') { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(expr: &str, index: usize, base: Base, delta: i32) -> String {
        let chars: Vec<char> = expr.chars().collect();
        let meta = FormatMetadata::scan(expr, base);
        step(&chars, index, base, delta, &meta).unwrap()
    }

    #[test]
    fn test_weight_ignores_underscores() {
        let expr: Vec<char> = "1_000".chars().collect();
        assert_eq!(weight(&expr, 0), 3);
        assert_eq!(weight(&expr, 4), 0);
    }

    #[test]
    fn test_decimal_carry() {
        assert_eq!(run("9", 0, Base::Decimal, 1), "10");
        assert_eq!(run("30", 1, Base::Decimal, -1), "29");
        assert_eq!(run("10000", 0, Base::Decimal, -1), "0");
    }

    #[test]
    fn test_sign_crossing() {
        assert_eq!(run("0", 0, Base::Decimal, -1), "-1");
        assert_eq!(run("-1", 1, Base::Decimal, 1), "0");
        assert_eq!(run("-10", 2, Base::Decimal, -1), "-11");
        assert_eq!(run("+0", 1, Base::Decimal, -1), "-1");
    }

    #[test]
    fn test_other_bases() {
        assert_eq!(run("0xfff", 4, Base::Hexadecimal, 1), "1000");
        assert_eq!(run("0b1011", 2, Base::Binary, 1), "10011");
        assert_eq!(run("0o17", 2, Base::Octal, 1), "27");
        assert_eq!(run("-0x10", 4, Base::Hexadecimal, 1), "-f");
        assert_eq!(run("-0x10", 3, Base::Hexadecimal, 1), "0");
    }

    #[test]
    fn test_zero_padding_is_kept() {
        assert_eq!(run("05", 1, Base::Decimal, 1), "06");
        assert_eq!(run("-05", 2, Base::Decimal, 1), "-04");
        assert_eq!(run("0x0f", 3, Base::Hexadecimal, 1), "10");
        assert_eq!(run("0x0f", 3, Base::Hexadecimal, -1), "0e");
    }

    #[test]
    fn test_no_overflow() {
        let big = "18446744073709551615";
        assert_eq!(run(big, big.len() - 1, Base::Decimal, 1), "18446744073709551616");
    }
}
