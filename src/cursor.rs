//! Cursor offset after a literal is rewritten

/// Signed cursor shift that keeps the cursor on the same digit.
///
/// `start` and `index` are char indices into the line, `prefix_len` counts
/// the sign and base prefix of `result`. The cursor is never left on the
/// prefix: if the literal shrank past it, it moves to the first digit.
pub fn offset(start: usize, index: usize, expr: &str, result: &str, prefix_len: usize) -> isize {
    let delta = result.chars().count() as isize - expr.chars().count() as isize;
    let (start, index, prefix_len) = (start as isize, index as isize, prefix_len as isize);

    if index + delta - start < prefix_len {
        start - index + prefix_len
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_moves_right() {
        assert_eq!(offset(0, 0, "9", "10", 0), 1);
        assert_eq!(offset(0, 4, "0xfff", "0x1000", 2), 1);
    }

    #[test]
    fn test_same_length() {
        assert_eq!(offset(4, 6, "1.0", "1.1", 0), 0);
    }

    #[test]
    fn test_shrink_clamps_to_first_digit() {
        assert_eq!(offset(0, 0, "10000", "0", 0), 0);
        assert_eq!(offset(0, 1, "-10", "0", 0), -1);
        assert_eq!(offset(0, 1, "-11.0", "-1.0", 1), 0);
        assert_eq!(offset(0, 2, "0x10100", "0x100", 2), 0);
    }

    #[test]
    fn test_shrink_without_clamp() {
        assert_eq!(offset(0, 2, "1_0", "9", 0), -2);
        assert_eq!(offset(0, 1, "10", "9", 0), -1);
    }
}
