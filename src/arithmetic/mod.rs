//! magnitude arithmetic backends
//!
//! Conversion through a value needs unbounded unsigned integers with a
//! handful of operations. The [`Arithmetic`] trait names those
//! operations; marker types implement it, keeping the magnitude
//! representation an associated type.

use std::cmp::Ordering;
use std::fmt;

pub(crate) mod chunked;

#[cfg(feature = "bigint")]
pub(crate) mod bigint;

pub use self::chunked::{ChunkedInt, ChunkedMath};

#[cfg(feature = "bigint")]
pub use self::bigint::BigIntMath;


/// Unsigned whole-number arithmetic, enough to carry digit sequences
/// through a value and back
///
/// Magnitudes are call-local values; implementations never share state.
/// `div_rem` is not optional: conversion out of a value is repeated
/// division, so a backend without it cannot conform.
pub trait Arithmetic: Copy + Clone + Default + fmt::Debug {
    /// The unbounded unsigned integer this backend computes with
    type Magnitude: Clone + fmt::Debug;

    fn from_u64(n: u64) -> Self::Magnitude;

    /// Back to a machine word, `None` if the magnitude does not fit
    fn to_u64(n: &Self::Magnitude) -> Option<u64>;

    fn is_zero(n: &Self::Magnitude) -> bool;

    fn add(a: &Self::Magnitude, b: &Self::Magnitude) -> Self::Magnitude;

    fn mul(a: &Self::Magnitude, b: &Self::Magnitude) -> Self::Magnitude;

    fn pow(base: &Self::Magnitude, exp: usize) -> Self::Magnitude;

    fn cmp(a: &Self::Magnitude, b: &Self::Magnitude) -> Ordering;

    /// Quotient and remainder; panics on zero divisor
    fn div_rem(a: &Self::Magnitude, b: &Self::Magnitude) -> (Self::Magnitude, Self::Magnitude);

    /// Accumulate digit values, most significant first, into a magnitude
    fn from_digits(digits: &[u64], radix: u64) -> Self::Magnitude {
        let radix_m = Self::from_u64(radix);
        let mut acc = Self::from_u64(0);
        for &digit in digits {
            debug_assert!(digit < radix);
            acc = Self::mul(&acc, &radix_m);
            acc = Self::add(&acc, &Self::from_u64(digit));
        }
        acc
    }

    /// Break a magnitude into digit values, most significant first
    ///
    /// Zero comes back as `[0]`, never empty.
    fn to_digits(n: &Self::Magnitude, radix: u64) -> Vec<u64> {
        let radix_m = Self::from_u64(radix);
        let mut digits = Vec::new();
        let mut rest = n.clone();
        while !Self::is_zero(&rest) {
            let (quotient, remainder) = Self::div_rem(&rest, &radix_m);
            digits.push(Self::to_u64(&remainder).expect("remainder below radix"));
            rest = quotient;
        }
        if digits.is_empty() {
            digits.push(0);
        }
        digits.reverse();
        digits
    }
}


/// The compiled-in arithmetic backends, in preference order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Delegate to `num_bigint::BigUint`
    #[cfg(feature = "bigint")]
    BigInt,
    /// The built-in base-10⁹ chunk kernel
    Chunked,
}

impl Backend {
    /// The preferred backend among those compiled in
    pub fn resolve() -> Backend {
        #[cfg(feature = "bigint")]
        return Backend::BigInt;
        #[cfg(not(feature = "bigint"))]
        Backend::Chunked
    }
}

impl Default for Backend {
    fn default() -> Backend {
        Backend::resolve()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            #[cfg(feature = "bigint")]
            Backend::BigInt => f.write_str("bigint"),
            Backend::Chunked => f.write_str("chunked"),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_prefers_bigint_when_built() {
        #[cfg(feature = "bigint")]
        assert_eq!(Backend::resolve(), Backend::BigInt);
        #[cfg(not(feature = "bigint"))]
        assert_eq!(Backend::resolve(), Backend::Chunked);
    }

    #[test]
    fn digit_bridging_round_trips() {
        let digits = vec![3, 0, 7, 7, 1];
        let n = ChunkedMath::from_digits(&digits, 8);
        assert_eq!(ChunkedMath::to_digits(&n, 8), digits);
    }

    #[test]
    fn from_no_digits_is_zero() {
        let n = ChunkedMath::from_digits(&[], 10);
        assert!(ChunkedMath::is_zero(&n));
        assert_eq!(ChunkedMath::to_digits(&n, 10), vec![0]);
    }

    #[test]
    fn leading_zero_digits_do_not_change_value() {
        let bare = ChunkedMath::from_digits(&[5, 1], 8);
        let padded = ChunkedMath::from_digits(&[0, 0, 5, 1], 8);
        assert_eq!(ChunkedMath::cmp(&bare, &padded), Ordering::Equal);
    }
}
