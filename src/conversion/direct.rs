//! Backend-free conversion by repeated short division
//!
//! The source digits themselves are the working number: each pass
//! divides them in place by the target radix, and the remainders,
//! collected least significant first, are the target digits. Works in
//! machine words only, so the radix pair must keep `remainder * source
//! + digit` inside u64.

use crate::ConversionError;
use crate::digits::strip_leading_zeros;

use super::{check_digits, Conversion};


/// Word-sized conversion of integer parts without a backend
///
/// Construction fails with `PossibleOverflow` when the product of the
/// two radixes does not fit u64; fractions are not expressible by
/// repeated division and fail with `UnsupportedOperation`.
#[derive(Clone, Copy, Debug)]
pub struct Direct {
    source_radix: u64,
    target_radix: u64,
}

impl Direct {
    pub fn new(source_radix: u64, target_radix: u64) -> Result<Direct, ConversionError> {
        debug_assert!(source_radix >= 2 && target_radix >= 2);
        source_radix
            .checked_mul(target_radix)
            .ok_or(ConversionError::PossibleOverflow)?;
        Ok(Direct {
            source_radix,
            target_radix,
        })
    }
}

impl Conversion for Direct {
    fn integer(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        check_digits(digits, self.source_radix)?;

        let mut work = strip_leading_zeros(digits).to_vec();
        let mut start = 0;
        let mut out = Vec::new();
        while start < work.len() {
            // one in-place short division; remainder is the next digit
            let mut remainder = 0u64;
            for digit in work[start..].iter_mut() {
                let acc = remainder * self.source_radix + *digit;
                *digit = acc / self.target_radix;
                remainder = acc % self.target_radix;
            }
            out.push(remainder);
            while start < work.len() && work[start] == 0 {
                start += 1;
            }
        }
        if out.is_empty() {
            out.push(0);
        }
        out.reverse();
        Ok(out)
    }

    fn fraction(&self, _digits: &[u64], _budget: usize) -> Result<Vec<u64>, ConversionError> {
        Err(ConversionError::UnsupportedOperation)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod integer_parts {
        use super::*;

        macro_rules! impl_case {
            ( $name:ident: $src:literal -> $dst:literal; $input:expr => $expected:expr ) => {
                #[test]
                fn $name() {
                    let conv = Direct::new($src, $dst).unwrap();
                    assert_eq!(conv.integer(&$input).unwrap(), $expected);
                }
            };
        }

        impl_case!(case_hex_a37334_to_decimal: 16 -> 10;
            [10u64, 3, 7, 3, 3, 4] => vec![1, 0, 7, 1, 1, 8, 6, 0]);
        impl_case!(case_decimal_to_binary: 10 -> 2; [1u64, 1] => vec![1, 0, 1, 1]);
        impl_case!(case_unrelated_radixes: 5 -> 7; [4u64, 3, 2] => vec![2, 2, 5]);
        impl_case!(case_zero: 10 -> 2; [0u64, 0, 0] => vec![0]);
        impl_case!(case_leading_zeros_ignored: 10 -> 16; [0u64, 0, 2, 5, 5] => vec![15, 15]);
        impl_case!(case_single_digit: 10 -> 16; [9u64] => vec![9]);

        #[test]
        fn case_digit_outside_radix() {
            let conv = Direct::new(10, 16).unwrap();
            let result = conv.integer(&[3, 10]);
            assert!(matches!(result, Err(ConversionError::InvalidDigit(_))));
        }

        #[test]
        fn long_inputs_stay_exact() {
            // 2^64 in decimal, one digit past the machine word
            let digits: Vec<u64> = "18446744073709551616"
                .chars()
                .map(|c| c.to_digit(10).unwrap() as u64)
                .collect();
            let conv = Direct::new(10, 2).unwrap();
            let mut expected = vec![1u64];
            expected.extend(std::iter::repeat(0).take(64));
            assert_eq!(conv.integer(&digits).unwrap(), expected);
        }
    }

    mod radix_limits {
        use super::*;

        #[test]
        fn word_sized_product_is_accepted() {
            // 2^32 * (2^32 - 1) still fits
            assert!(Direct::new(1 << 32, (1 << 32) - 1).is_ok());
        }

        #[test]
        fn oversized_product_is_refused() {
            let result = Direct::new(1 << 32, 1 << 32);
            assert!(matches!(result, Err(ConversionError::PossibleOverflow)));
        }
    }

    #[test]
    fn fractions_are_unsupported() {
        let conv = Direct::new(10, 2).unwrap();
        let result = conv.fraction(&[5], 10);
        assert!(matches!(result, Err(ConversionError::UnsupportedOperation)));
    }
}
