//! Normal forms for digit-value sequences
//!
//! Sequences are ordered most-significant digit first, matching the
//! order digits appear in text. Zero is the one-element sequence `[0]`,
//! never an empty sequence.


/// Remove leading zeros from an integer part, keeping at least one digit
pub(crate) fn trim_leading_zeros(digits: &mut Vec<u64>) {
    match digits.iter().position(|&d| d != 0) {
        Some(0) => {}
        Some(idx) => {
            digits.drain(..idx);
        }
        None => {
            digits.clear();
            digits.push(0);
        }
    }
}

/// Remove trailing zeros from a fraction part, keeping at least one digit
pub(crate) fn trim_trailing_zeros(digits: &mut Vec<u64>) {
    match digits.iter().rposition(|&d| d != 0) {
        Some(idx) => digits.truncate(idx + 1),
        None => {
            digits.clear();
            digits.push(0);
        }
    }
}

/// Borrow the slice with leading zeros skipped, keeping the last digit
/// when every digit is zero
pub(crate) fn strip_leading_zeros(digits: &[u64]) -> &[u64] {
    match digits.iter().position(|&d| d != 0) {
        Some(idx) => &digits[idx..],
        None if digits.is_empty() => digits,
        None => &digits[digits.len() - 1..],
    }
}

/// True if every digit is zero (an empty sequence counts as zero)
pub(crate) fn is_all_zero(digits: &[u64]) -> bool {
    digits.iter().all(|&d| d == 0)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trim_leading_keeps_value() {
        let mut v = vec![0, 0, 7, 0, 3];
        trim_leading_zeros(&mut v);
        assert_eq!(v, vec![7, 0, 3]);
    }

    #[test]
    fn trim_leading_all_zero_collapses() {
        let mut v = vec![0, 0, 0];
        trim_leading_zeros(&mut v);
        assert_eq!(v, vec![0]);
    }

    #[test]
    fn trim_leading_empty_becomes_zero() {
        let mut v = Vec::new();
        trim_leading_zeros(&mut v);
        assert_eq!(v, vec![0]);
    }

    #[test]
    fn trim_trailing_keeps_scale() {
        let mut v = vec![0, 5, 0, 0];
        trim_trailing_zeros(&mut v);
        assert_eq!(v, vec![0, 5]);
    }

    #[test]
    fn trim_trailing_all_zero_collapses() {
        let mut v = vec![0, 0];
        trim_trailing_zeros(&mut v);
        assert_eq!(v, vec![0]);
    }

    #[test]
    fn strip_leading_borrows() {
        assert_eq!(strip_leading_zeros(&[0, 0, 4, 0]), &[4, 0]);
        assert_eq!(strip_leading_zeros(&[0, 0]), &[0]);
        assert_eq!(strip_leading_zeros(&[]), &[] as &[u64]);
    }

    #[test]
    fn all_zero_checks() {
        assert!(is_all_zero(&[0, 0, 0]));
        assert!(is_all_zero(&[]));
        assert!(!is_all_zero(&[0, 1]));
    }
}
