//! Numeral systems: ordered alphabets of digit symbols
//!
//! A numeral system assigns the values `0..radix` to an ordered,
//! duplicate-free list of symbols. The symbol type is generic; any
//! equatable, hashable type works through the sequence interfaces, and
//! types with a text form ([`Glyph`]) additionally parse and render
//! strings.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

use crate::ConversionError;

pub(crate) mod glyph;
pub(crate) mod splitter;

pub use self::glyph::Glyph;
use self::splitter::TextTable;


/// Digits 0-9, A-Z, a-z, shared by every radix up to 62
const STANDARD_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The base64 digit order, used for radix 64 exactly
const BASE64_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Largest radix with a canonical character alphabet
const MAX_CHAR_RADIX: u64 = 256;


/// An ordered alphabet of digit symbols
///
/// The position of a symbol in the alphabet is its numeric value, and
/// the alphabet's length is the radix. Alphabets are immutable once
/// built; derived text tables are created lazily and cached.
#[derive(Debug, Clone)]
pub struct NumeralSystem<S> {
    symbols: Vec<S>,
    values: HashMap<S, u64>,
    text: OnceLock<TextTable>,
}

impl<S> NumeralSystem<S> {
    /// Number of digits in the alphabet
    pub fn radix(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// The ordered digit symbols
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Symbol of a digit value
    pub fn digit(&self, value: u64) -> Result<&S, ConversionError> {
        self.symbols
            .get(value as usize)
            .ok_or_else(|| ConversionError::InvalidDigit(value.to_string()))
    }

    /// Greatest radix both alphabets are an integer power of
    ///
    /// Returns `None` when no common root of two or more exists. Equal
    /// radices share themselves as root. The symbol types of the two
    /// systems are unrelated.
    ///
    /// ```
    /// use bigradix::NumeralSystem;
    ///
    /// let base4 = NumeralSystem::standard(4).unwrap();
    /// let base8 = NumeralSystem::standard(8).unwrap();
    /// let base5 = NumeralSystem::standard(5).unwrap();
    /// assert_eq!(base4.common_root(&base8), Some(2));
    /// assert_eq!(base4.common_root(&base5), None);
    /// ```
    pub fn common_root<T>(&self, other: &NumeralSystem<T>) -> Option<u64> {
        common_radix_root(self.radix(), other.radix())
    }
}

impl<S: Eq + Hash> NumeralSystem<S> {
    /// Value of a symbol by exact equality
    pub fn value(&self, symbol: &S) -> Result<u64, ConversionError> {
        self.lookup(symbol)
            .ok_or_else(|| ConversionError::InvalidDigit(String::from("symbol outside alphabet")))
    }

    /// Membership test by exact equality
    pub fn has_digit(&self, symbol: &S) -> bool {
        self.values.contains_key(symbol)
    }

    pub(crate) fn lookup(&self, symbol: &S) -> Option<u64> {
        self.values.get(symbol).copied()
    }
}

impl<S: Eq + Hash + Clone> NumeralSystem<S> {
    /// Build from an ordered list of symbols
    ///
    /// Fails if fewer than two symbols are given or any symbol repeats.
    pub fn from_symbols(symbols: Vec<S>) -> Result<Self, AlphabetError> {
        if symbols.len() < 2 {
            return Err(AlphabetError::TooFewDigits);
        }
        let mut values = HashMap::with_capacity(symbols.len());
        for (index, symbol) in symbols.iter().enumerate() {
            if values.insert(symbol.clone(), index as u64).is_some() {
                return Err(AlphabetError::DuplicateDigit);
            }
        }
        Ok(NumeralSystem {
            symbols,
            values,
            text: OnceLock::new(),
        })
    }
}

impl NumeralSystem<char> {
    /// Canonical character alphabet for a radix
    ///
    /// Radixes through 62 use `0-9A-Za-z`; radix 64 exactly uses the
    /// base64 digit order; every other radix through 256 uses the
    /// Unicode scalars `U+0000..U+00FF` standing in for raw byte
    /// values. Radixes above 256 have no character alphabet; use
    /// [`NumeralSystem::numbered`] for those.
    pub fn standard(radix: u64) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = match radix {
            0 | 1 => return Err(AlphabetError::TooFewDigits),
            2..=62 => STANDARD_DIGITS.chars().take(radix as usize).collect(),
            64 => BASE64_DIGITS.chars().collect(),
            _ if radix <= MAX_CHAR_RADIX => (0..radix as u32)
                .map(|v| char::from_u32(v).expect("scalar below U+0100"))
                .collect(),
            _ => return Err(AlphabetError::RadixTooLarge(radix)),
        };
        Self::from_symbols(symbols)
    }

    /// Alphabet of the characters of a string, in order
    pub fn from_text(digits: &str) -> Result<Self, AlphabetError> {
        Self::from_symbols(digits.chars().collect())
    }
}

impl NumeralSystem<String> {
    /// `#`-prefixed decimal alphabet, canonical above radix 256
    ///
    /// Every digit renders as `#` followed by its value, zero padded to
    /// the width of `radix - 1`, so the texts share one width and
    /// splitting never needs digit boundaries marked.
    pub fn numbered(radix: u64) -> Result<Self, AlphabetError> {
        if radix < 2 {
            return Err(AlphabetError::TooFewDigits);
        }
        let width = decimal_width(radix - 1);
        let symbols: Vec<String> = (0..radix)
            .map(|value| format!("#{:0width$}", value, width = width))
            .collect();
        Self::from_symbols(symbols)
    }
}

impl<S: Glyph> NumeralSystem<S> {
    /// Split text into digit values, most significant first
    pub fn split_text(&self, input: &str) -> Result<Vec<u64>, ConversionError> {
        self.text_table().split(input)
    }

    /// Value of a whole token under the alphabet's case rule
    pub fn value_of_text(&self, token: &str) -> Result<u64, ConversionError> {
        self.text_table()
            .value_of(token)
            .ok_or_else(|| ConversionError::InvalidDigit(token.to_string()))
    }

    /// Canonical text of a digit value
    pub fn text_of(&self, value: u64) -> Result<&str, ConversionError> {
        if value >= self.radix() {
            return Err(ConversionError::InvalidDigit(value.to_string()));
        }
        Ok(self.text_table().text_of(value))
    }

    /// Render digit values as text, most significant first
    pub fn render(&self, digits: &[u64]) -> Result<String, ConversionError> {
        let radix = self.radix();
        let mut out = String::with_capacity(digits.len());
        for &digit in digits {
            if digit >= radix {
                return Err(ConversionError::InvalidDigit(digit.to_string()));
            }
            out.push_str(self.text_table().text_of(digit));
        }
        Ok(out)
    }

    /// True when two digit texts differ only by ASCII case, disabling
    /// case folding for this alphabet
    pub fn is_case_sensitive(&self) -> bool {
        self.text_table().is_case_sensitive()
    }

    pub(crate) fn text_table(&self) -> &TextTable {
        self.text.get_or_init(|| TextTable::build(&self.symbols))
    }
}

impl<S: PartialEq> PartialEq for NumeralSystem<S> {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl<S: Eq> Eq for NumeralSystem<S> {}


/// Greatest common radix root of two radices
///
/// Walks exponents of the smaller radix upward; the first exact root
/// that also generates the larger radix is the greatest.
pub(crate) fn common_radix_root(a: u64, b: u64) -> Option<u64> {
    debug_assert!(a >= 2 && b >= 2);
    let (small, large) = if a <= b { (a, b) } else { (b, a) };
    for exp in 1..=63u32 {
        let root = match exact_root(small, exp) {
            Some(root) => root,
            None => continue,
        };
        if root < 2 {
            // roots only shrink as the exponent grows
            break;
        }
        if is_power_of(large, root) {
            return Some(root);
        }
    }
    None
}

/// Integer `exp`-th root of `n`, if it is exact
fn exact_root(n: u64, exp: u32) -> Option<u64> {
    if exp == 1 {
        return Some(n);
    }
    let mut lo = 1u64;
    let mut hi = 1u64 << (64 / exp).min(63);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        match mid.checked_pow(exp) {
            Some(p) if p <= n => lo = mid,
            _ => hi = mid - 1,
        }
    }
    if lo.checked_pow(exp) == Some(n) {
        Some(lo)
    } else {
        None
    }
}

fn is_power_of(mut n: u64, base: u64) -> bool {
    debug_assert!(base >= 2);
    while n % base == 0 {
        n /= base;
    }
    n == 1
}

/// Count of decimal digits in `n`
fn decimal_width(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}


/// Failure to build a numeral system
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlphabetError {
    /// Fewer than two digit symbols
    TooFewDigits,
    /// The same symbol appears at two positions
    DuplicateDigit,
    /// No canonical character alphabet exists for this radix
    RadixTooLarge(u64),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlphabetError::TooFewDigits => {
                write!(f, "a numeral system needs at least two digits")
            }
            AlphabetError::DuplicateDigit => {
                write!(f, "duplicate digit symbol in alphabet")
            }
            AlphabetError::RadixTooLarge(radix) => {
                write!(f, "no canonical character alphabet for radix {}", radix)
            }
        }
    }
}

impl std::error::Error for AlphabetError {
    fn description(&self) -> &str {
        "failed to build numeral system"
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod standard_alphabets {
        use super::*;

        #[test]
        fn base2_is_binary_digits() {
            let sys = NumeralSystem::standard(2).unwrap();
            assert_eq!(sys.symbols(), &['0', '1']);
        }

        #[test]
        fn base16_has_uppercase_letters() {
            let sys = NumeralSystem::standard(16).unwrap();
            assert_eq!(sys.radix(), 16);
            assert_eq!(*sys.digit(15).unwrap(), 'F');
        }

        #[test]
        fn base62_spans_digits_and_both_cases() {
            let sys = NumeralSystem::standard(62).unwrap();
            assert_eq!(*sys.digit(10).unwrap(), 'A');
            assert_eq!(*sys.digit(36).unwrap(), 'a');
            assert_eq!(*sys.digit(61).unwrap(), 'z');
            assert!(sys.is_case_sensitive());
        }

        #[test]
        fn base64_uses_base64_digit_order() {
            let sys = NumeralSystem::standard(64).unwrap();
            assert_eq!(*sys.digit(0).unwrap(), 'A');
            assert_eq!(*sys.digit(26).unwrap(), 'a');
            assert_eq!(*sys.digit(52).unwrap(), '0');
            assert_eq!(*sys.digit(63).unwrap(), '/');
        }

        #[test]
        fn base63_falls_back_to_byte_values() {
            let sys = NumeralSystem::standard(63).unwrap();
            assert_eq!(*sys.digit(0).unwrap(), '\u{0}');
            assert_eq!(*sys.digit(62).unwrap(), '>');
        }

        #[test]
        fn base256_covers_all_byte_values() {
            let sys = NumeralSystem::standard(256).unwrap();
            assert_eq!(*sys.digit(255).unwrap(), '\u{FF}');
        }

        #[test]
        fn base16_folds_case() {
            let sys = NumeralSystem::standard(16).unwrap();
            assert!(!sys.is_case_sensitive());
            assert_eq!(sys.value_of_text("f").unwrap(), 15);
        }

        #[test]
        fn oversized_radix_is_refused() {
            assert_eq!(
                NumeralSystem::standard(257).unwrap_err(),
                AlphabetError::RadixTooLarge(257),
            );
        }

        #[test]
        fn degenerate_radixes_are_refused() {
            assert_eq!(NumeralSystem::standard(0).unwrap_err(), AlphabetError::TooFewDigits);
            assert_eq!(NumeralSystem::standard(1).unwrap_err(), AlphabetError::TooFewDigits);
        }
    }

    mod numbered_alphabets {
        use super::*;

        #[test]
        fn width_pads_to_largest_value() {
            let sys = NumeralSystem::numbered(1000).unwrap();
            assert_eq!(sys.digit(7).unwrap(), "#007");
            assert_eq!(sys.digit(999).unwrap(), "#999");
        }

        #[test]
        fn base2_numbered() {
            let sys = NumeralSystem::numbered(2).unwrap();
            assert_eq!(sys.digit(0).unwrap(), "#0");
            assert_eq!(sys.digit(1).unwrap(), "#1");
        }

        #[test]
        fn splits_without_separators() {
            let sys = NumeralSystem::numbered(500).unwrap();
            assert_eq!(sys.split_text("#499#000#012").unwrap(), vec![499, 0, 12]);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn duplicate_symbol_is_refused() {
            let result = NumeralSystem::from_text("0120");
            assert_eq!(result.unwrap_err(), AlphabetError::DuplicateDigit);
        }

        #[test]
        fn single_symbol_is_refused() {
            let result = NumeralSystem::from_text("0");
            assert_eq!(result.unwrap_err(), AlphabetError::TooFewDigits);
        }

        #[test]
        fn arbitrary_symbols_build() {
            let sys = NumeralSystem::from_symbols(vec![(0, 'a'), (1, 'b'), (2, 'c')]).unwrap();
            assert_eq!(sys.radix(), 3);
            assert_eq!(sys.value(&(1, 'b')).unwrap(), 1);
            assert!(!sys.has_digit(&(9, 'z')));
        }

        #[test]
        fn unknown_symbol_is_invalid_digit() {
            let sys = NumeralSystem::from_text("01").unwrap();
            assert!(matches!(sys.value(&'7'), Err(ConversionError::InvalidDigit(_))));
        }

        #[test]
        fn digit_out_of_range_is_invalid() {
            let sys = NumeralSystem::from_text("01").unwrap();
            assert!(matches!(sys.digit(2), Err(ConversionError::InvalidDigit(_))));
        }
    }

    mod common_roots {
        use super::*;

        macro_rules! impl_case {
            ( $name:ident: $a:literal, $b:literal => $expected:expr ) => {
                #[test]
                fn $name() {
                    assert_eq!(common_radix_root($a, $b), $expected);
                    assert_eq!(common_radix_root($b, $a), $expected);
                }
            };
        }

        impl_case!(case_4_8: 4, 8 => Some(2));
        impl_case!(case_4_16: 4, 16 => Some(4));
        impl_case!(case_5_7: 5, 7 => None);
        impl_case!(case_2_64: 2, 64 => Some(2));
        impl_case!(case_27_81: 27, 81 => Some(3));
        impl_case!(case_10_100: 10, 100 => Some(10));
        impl_case!(case_12_18: 12, 18 => None);
        impl_case!(case_7_7: 7, 7 => Some(7));
        impl_case!(case_256_16: 256, 16 => Some(16));

        #[test]
        fn root_is_greatest_not_first() {
            // 16 and 64 share roots 2 and 4; 4 must win
            assert_eq!(common_radix_root(16, 64), Some(4));
        }

        #[test]
        fn large_powers_stay_exact() {
            let a = 2u64.pow(62);
            assert_eq!(common_radix_root(a, 2), Some(2));
            assert_eq!(common_radix_root(a, a), Some(a));
        }
    }
}
