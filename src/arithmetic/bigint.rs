//! Magnitude arithmetic delegated to num-bigint
//!
//! `BigUint` already knows positional conversion for radixes through
//! 256, so digit bridging takes that path when it can and falls back
//! to the generic loops above that.

use std::cmp::Ordering;
use std::convert::TryFrom;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::Arithmetic;


/// Largest radix `BigUint` bridges natively
const NATIVE_RADIX_LIMIT: u64 = 256;

/// Marker for the num-bigint backend
#[derive(Copy, Clone, Debug, Default)]
pub struct BigIntMath;

impl Arithmetic for BigIntMath {
    type Magnitude = BigUint;

    fn from_u64(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn to_u64(n: &BigUint) -> Option<u64> {
        n.to_u64()
    }

    fn is_zero(n: &BigUint) -> bool {
        n.is_zero()
    }

    fn add(a: &BigUint, b: &BigUint) -> BigUint {
        a + b
    }

    fn mul(a: &BigUint, b: &BigUint) -> BigUint {
        a * b
    }

    fn pow(base: &BigUint, exp: usize) -> BigUint {
        num_traits::pow(base.clone(), exp)
    }

    fn cmp(a: &BigUint, b: &BigUint) -> Ordering {
        Ord::cmp(a, b)
    }

    fn div_rem(a: &BigUint, b: &BigUint) -> (BigUint, BigUint) {
        Integer::div_rem(a, b)
    }

    fn from_digits(digits: &[u64], radix: u64) -> BigUint {
        if let Some(native) = native_radix(radix) {
            debug_assert!(digits.iter().all(|&d| d < radix));
            let bytes: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
            if let Some(n) = BigUint::from_radix_be(&bytes, native) {
                return n;
            }
        }
        let radix_m = BigUint::from(radix);
        let mut acc = BigUint::zero();
        for &digit in digits {
            debug_assert!(digit < radix);
            acc = acc * &radix_m + digit;
        }
        acc
    }

    fn to_digits(n: &BigUint, radix: u64) -> Vec<u64> {
        if n.is_zero() {
            return vec![0];
        }
        if let Some(native) = native_radix(radix) {
            return n.to_radix_be(native).into_iter().map(u64::from).collect();
        }
        let radix_m = BigUint::from(radix);
        let mut digits = Vec::new();
        let mut rest = n.clone();
        while !rest.is_zero() {
            let (quotient, remainder) = rest.div_rem(&radix_m);
            digits.push(remainder.to_u64().expect("remainder below radix"));
            rest = quotient;
        }
        digits.reverse();
        digits
    }
}

fn native_radix(radix: u64) -> Option<u32> {
    debug_assert!(radix >= 2);
    if radix <= NATIVE_RADIX_LIMIT {
        u32::try_from(radix).ok()
    } else {
        None
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::ChunkedMath;

    #[test]
    fn native_bridge_matches_generic_loop() {
        let digits = vec![200, 0, 255, 17, 9];
        let via_native = BigIntMath::from_digits(&digits, 256);
        // a radix past the native limit forces the fallback loop
        let wide: Vec<u64> = digits.clone();
        let via_loop = BigIntMath::from_digits(&wide, 257);
        assert_ne!(via_native, via_loop);
        assert_eq!(BigIntMath::to_digits(&via_native, 256), digits);
        assert_eq!(BigIntMath::to_digits(&via_loop, 257), digits);
    }

    #[test]
    fn zero_is_a_single_digit() {
        let zero = BigUint::zero();
        assert_eq!(BigIntMath::to_digits(&zero, 16), vec![0]);
    }

    #[test]
    fn backends_agree_on_digit_bridging() {
        let digits = vec![1, 0, 0, 7, 3, 3, 4, 9, 9, 9, 2];
        for radix in [10u64, 16, 62, 1000] {
            let b = BigIntMath::from_digits(&digits, radix);
            let c = ChunkedMath::from_digits(&digits, radix);
            assert_eq!(BigIntMath::to_digits(&b, radix), ChunkedMath::to_digits(&c, radix));
        }
    }

    #[test]
    fn backends_agree_on_div_rem() {
        let a_digits: Vec<u64> = (0..40).map(|i| (i * 7 + 3) % 10).collect();
        let b_digits = vec![9, 8, 1, 2, 7, 7];
        let (bq, br) = BigIntMath::div_rem(
            &BigIntMath::from_digits(&a_digits, 10),
            &BigIntMath::from_digits(&b_digits, 10),
        );
        let (cq, cr) = ChunkedMath::div_rem(
            &ChunkedMath::from_digits(&a_digits, 10),
            &ChunkedMath::from_digits(&b_digits, 10),
        );
        assert_eq!(BigIntMath::to_digits(&bq, 10), ChunkedMath::to_digits(&cq, 10));
        assert_eq!(BigIntMath::to_digits(&br, 10), ChunkedMath::to_digits(&cr, 10));
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let three = BigIntMath::from_u64(3);
        let mut by_hand = BigIntMath::from_u64(1);
        for _ in 0..21 {
            by_hand = BigIntMath::mul(&by_hand, &three);
        }
        assert_eq!(BigIntMath::pow(&three, 21), by_hand);
    }
}
