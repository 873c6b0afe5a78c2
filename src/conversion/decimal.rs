//! Conversion through an arbitrary-precision value
//!
//! The general strategy: accumulate source digits into a magnitude,
//! then divide it back out in the target radix. Fractions ride along
//! as a numerator over `source_radix ^ digit_count`, multiplied up one
//! target digit at a time.

use std::marker::PhantomData;

use crate::ConversionError;
use crate::arithmetic::Arithmetic;
use crate::digits::is_all_zero;

use super::{check_digits, Conversion};


/// Arbitrary-radix conversion through an [`Arithmetic`] backend
///
/// Works for any pair of radixes; fraction output is truncated to its
/// digit budget, never rounded.
#[derive(Clone, Copy, Debug)]
pub struct Decimal<M: Arithmetic> {
    source_radix: u64,
    target_radix: u64,
    _math: PhantomData<M>,
}

impl<M: Arithmetic> Decimal<M> {
    pub fn new(source_radix: u64, target_radix: u64) -> Decimal<M> {
        debug_assert!(source_radix >= 2 && target_radix >= 2);
        Decimal {
            source_radix,
            target_radix,
            _math: PhantomData,
        }
    }
}

impl<M: Arithmetic> Conversion for Decimal<M> {
    fn integer(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        check_digits(digits, self.source_radix)?;
        let value = M::from_digits(digits, self.source_radix);
        Ok(M::to_digits(&value, self.target_radix))
    }

    fn fraction(&self, digits: &[u64], budget: usize) -> Result<Vec<u64>, ConversionError> {
        check_digits(digits, self.source_radix)?;
        if is_all_zero(digits) {
            return Ok(vec![0]);
        }

        // numerator / source_radix^len, kept exact while digits of the
        // target expansion are peeled off the top
        let mut numerator = M::from_digits(digits, self.source_radix);
        let denominator = M::pow(&M::from_u64(self.source_radix), digits.len());
        let radix = M::from_u64(self.target_radix);

        let mut out = Vec::with_capacity(budget);
        for _ in 0..budget {
            if M::is_zero(&numerator) {
                break;
            }
            numerator = M::mul(&numerator, &radix);
            let (digit, rest) = M::div_rem(&numerator, &denominator);
            out.push(M::to_u64(&digit).expect("digit below target radix"));
            numerator = rest;
        }
        if out.is_empty() {
            out.push(0);
        }
        Ok(out)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::ChunkedMath;

    type ChunkedDecimal = Decimal<ChunkedMath>;

    mod integer_parts {
        use super::*;

        macro_rules! impl_case {
            ( $name:ident: $src:literal -> $dst:literal; $input:expr => $expected:expr ) => {
                #[test]
                fn $name() {
                    let conv = ChunkedDecimal::new($src, $dst);
                    assert_eq!(conv.integer(&$input).unwrap(), $expected);
                }
            };
        }

        impl_case!(case_hex_a37334_to_decimal: 16 -> 10;
            [10u64, 3, 7, 3, 3, 4] => vec![1, 0, 7, 1, 1, 8, 6, 0]);
        impl_case!(case_decimal_to_hex: 10 -> 16;
            [1u64, 0, 7, 1, 1, 8, 6, 0] => vec![10, 3, 7, 3, 3, 4]);
        impl_case!(case_hex_to_bits_matches_replacement: 16 -> 2;
            [10u64, 3] => vec![1, 0, 1, 0, 0, 0, 1, 1]);
        impl_case!(case_unrelated_radixes: 5 -> 7; [4u64, 3, 2] => vec![2, 2, 5]);
        impl_case!(case_zero: 16 -> 10; [0u64, 0] => vec![0]);
        impl_case!(case_huge_radix_pair: 1000 -> 100;
            [7u64, 700] => vec![77, 0]);

        #[test]
        fn case_digit_outside_radix() {
            let conv = ChunkedDecimal::new(5, 7);
            let result = conv.integer(&[4, 5]);
            assert!(matches!(result, Err(ConversionError::InvalidDigit(_))));
        }
    }

    mod fraction_parts {
        use super::*;

        macro_rules! impl_case {
            ( $name:ident: $src:literal -> $dst:literal, budget $budget:literal; $input:expr => $expected:expr ) => {
                #[test]
                fn $name() {
                    let conv = ChunkedDecimal::new($src, $dst);
                    assert_eq!(conv.fraction(&$input, $budget).unwrap(), $expected);
                }
            };
        }

        impl_case!(case_third_repeats: 3 -> 10, budget 6; [1u64] => vec![3, 3, 3, 3, 3, 3]);
        impl_case!(case_hex_a7: 16 -> 10, budget 3; [10u64, 7] => vec![6, 5, 2]);
        impl_case!(case_hex_a_to_decimal: 16 -> 10, budget 5; [10u64] => vec![6, 2, 5]);
        impl_case!(case_exact_half: 10 -> 2, budget 8; [5u64] => vec![1]);
        impl_case!(case_budget_truncates: 16 -> 10, budget 2; [10u64, 7] => vec![6, 5]);
        impl_case!(case_zero_fraction: 16 -> 10, budget 4; [0u64, 0] => vec![0]);

        #[test]
        fn early_stop_beats_budget() {
            // 0.25 needs two binary digits no matter how many are allowed
            let conv = ChunkedDecimal::new(10, 2);
            assert_eq!(conv.fraction(&[2, 5], 30).unwrap(), vec![0, 1]);
        }

        #[test]
        fn truncation_never_rounds() {
            // 0.999 in decimal is 0.FF… in hex; truncation keeps digits below
            let conv = ChunkedDecimal::new(10, 16);
            assert_eq!(conv.fraction(&[9, 9, 9], 2).unwrap(), vec![15, 15]);
        }
    }
}
