//! Digit replacement through a common radix root
//!
//! When both radixes are powers of one root, every source digit
//! expands to a fixed-width run of root digits and every fixed-width
//! run of root digits regroups into one target digit. No arithmetic
//! beyond small divisions, and the result is always exact.

use std::sync::OnceLock;

use crate::ConversionError;
use crate::digits::{trim_leading_zeros, trim_trailing_zeros};
use crate::numeral::common_radix_root;

use super::{check_digits, Conversion};


/// Exact conversion between radixes sharing a root
///
/// The per-digit expansion table is built on first use and cached for
/// the life of the strategy.
#[derive(Debug, Clone)]
pub struct Replace {
    source_radix: u64,
    target_radix: u64,
    root: u64,
    source_width: usize,
    target_width: usize,
    expansions: OnceLock<Vec<Vec<u64>>>,
}

impl Replace {
    /// Pair two radixes, failing with `UnavailableConversion` when
    /// they share no root
    pub fn new(source_radix: u64, target_radix: u64) -> Result<Replace, ConversionError> {
        debug_assert!(source_radix >= 2 && target_radix >= 2);
        let root = common_radix_root(source_radix, target_radix)
            .ok_or(ConversionError::UnavailableConversion)?;
        Ok(Replace {
            source_radix,
            target_radix,
            root,
            source_width: power_exponent(source_radix, root),
            target_width: power_exponent(target_radix, root),
            expansions: OnceLock::new(),
        })
    }

    /// The radix both sides are a power of
    pub fn root(&self) -> u64 {
        self.root
    }

    /// Expansion chunks of every source digit, most significant root
    /// digit first
    fn expansion_table(&self) -> &Vec<Vec<u64>> {
        self.expansions.get_or_init(|| {
            (0..self.source_radix)
                .map(|digit| expand_digit(digit, self.root, self.source_width))
                .collect()
        })
    }

    /// Flatten source digits into root digits
    fn expand(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        check_digits(digits, self.source_radix)?;
        let table = self.expansion_table();
        let mut root_digits = Vec::with_capacity(digits.len() * self.source_width);
        for &digit in digits {
            root_digits.extend_from_slice(&table[digit as usize]);
        }
        Ok(root_digits)
    }

    /// Regroup root digits into target digits; the root-digit count
    /// must be a multiple of the target width
    fn regroup(&self, root_digits: &[u64]) -> Vec<u64> {
        debug_assert_eq!(root_digits.len() % self.target_width, 0);
        root_digits
            .chunks(self.target_width)
            .map(|chunk| chunk.iter().fold(0, |acc, &d| acc * self.root + d))
            .collect()
    }
}

impl Conversion for Replace {
    fn integer(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        let root_digits = self.expand(digits)?;
        let missing = pad_len(root_digits.len(), self.target_width);
        let mut padded = Vec::with_capacity(root_digits.len() + missing);
        padded.resize(missing, 0);
        padded.extend_from_slice(&root_digits);
        let mut grouped = self.regroup(&padded);
        trim_leading_zeros(&mut grouped);
        Ok(grouped)
    }

    fn fraction(&self, digits: &[u64], _budget: usize) -> Result<Vec<u64>, ConversionError> {
        let mut root_digits = self.expand(digits)?;
        let missing = pad_len(root_digits.len(), self.target_width);
        root_digits.resize(root_digits.len() + missing, 0);
        let mut grouped = self.regroup(&root_digits);
        trim_trailing_zeros(&mut grouped);
        Ok(grouped)
    }
}

/// Root digits of `digit`, fixed width, most significant first
fn expand_digit(mut digit: u64, root: u64, width: usize) -> Vec<u64> {
    let mut chunk = vec![0u64; width];
    for slot in chunk.iter_mut().rev() {
        *slot = digit % root;
        digit /= root;
    }
    debug_assert_eq!(digit, 0);
    chunk
}

/// Exponent e with `root^e == radix`
fn power_exponent(radix: u64, root: u64) -> usize {
    debug_assert!(root >= 2);
    let mut n = radix;
    let mut exponent = 0;
    while n > 1 {
        debug_assert_eq!(n % root, 0);
        n /= root;
        exponent += 1;
    }
    exponent
}

/// Zeros needed to reach a multiple of `width`
fn pad_len(len: usize, width: usize) -> usize {
    match len % width {
        0 => 0,
        rem => width - rem,
    }
}


#[cfg(test)]
mod test {
    use super::*;

    include!("replace.tests.rs");
}
