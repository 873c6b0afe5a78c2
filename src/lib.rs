// Licensed under the Apache License, Version 2.0
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <http://opensource.org/licenses/MIT>, at your option. This file may
// not be copied, modified, or distributed except according to those
// terms.

//! Arbitrary-radix number conversion
//!
//! `bigradix` converts signed numbers with unbounded integer and
//! fraction parts between positional numeral systems. A numeral
//! system is an ordered alphabet of digit symbols rather than a bare
//! radix integer: hexadecimal, base64, byte-valued alphabets, numbered
//! `#`-digits above radix 256, or any ordered set of your own symbol
//! type.
//!
//! A [`Converter`] picks the cheapest correct strategy for its pair of
//! systems: digit-for-digit remapping for equal radices, table-driven
//! digit replacement when the radices share an integer power root,
//! arbitrary-precision arithmetic otherwise, with a native long
//! division fallback for integer parts when no big-integer backend is
//! available.
//!
//! # Example
//!
//! ```
//! use bigradix::{Converter, NumeralSystem};
//!
//! let hex = NumeralSystem::standard(16).unwrap();
//! let dec = NumeralSystem::standard(10).unwrap();
//!
//! let converter = Converter::new(hex, dec);
//! assert_eq!(converter.convert("-1BCC7.A").unwrap(), "-113863.625");
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]


#[cfg(feature = "bigint")]
pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

use self::conversion::check_digits;
use self::digits::{trim_leading_zeros, trim_trailing_zeros};

#[cfg(feature = "bigint")]
use self::arithmetic::BigIntMath;
use self::arithmetic::ChunkedMath;

pub use num_traits::{One, Zero};


// const DEFAULT_PRECISION: i64 = ${RUST_BIGRADIX_DEFAULT_PRECISION} or -1;
include!(concat!(env!("OUT_DIR"), "/default_precision.rs"));

#[cfg(test)]
extern crate paste;

// digit-sequence normal forms
mod digits;

// ordered alphabets of digit symbols
pub mod numeral;
pub use numeral::{AlphabetError, Glyph, NumeralSystem};

// arbitrary-precision magnitude backends
pub mod arithmetic;
pub use arithmetic::{Arithmetic, Backend};

// the three conversion strategies
pub mod conversion;
pub use conversion::{Conversion, Decimal, Direct, Replace};


/// Return the number of target digits carrying the information of
/// `len` source fraction digits
///
/// Uses the log ratio of the radices, rounded up.
fn equivalent_fraction_length(len: usize, source_radix: u64, target_radix: u64) -> i64 {
    let ratio = (source_radix as f64).ln() / (target_radix as f64).ln();
    (len as f64 * ratio).ceil() as i64
}

/// Split an unsigned number at its fraction separator
///
/// At most one `.` is accepted, and neither side of a present
/// separator may be empty.
fn split_separator(unsigned: &str) -> Result<(&str, Option<&str>), ConversionError> {
    let (integer_text, fraction_text) = match unsigned.find('.') {
        None => (unsigned, None),
        Some(at) => {
            let fraction = &unsigned[at + 1..];
            if fraction.contains('.') {
                return Err(ConversionError::MalformedInput("more than one fraction separator"));
            }
            (&unsigned[..at], Some(fraction))
        }
    };

    if integer_text.is_empty() {
        return Err(ConversionError::MalformedInput("fraction separator without integer digits"));
    }
    if let Some(text) = fraction_text {
        if text.is_empty() {
            return Err(ConversionError::MalformedInput("fraction separator without fraction digits"));
        }
    }
    Ok((integer_text, fraction_text))
}


/// Converts numbers between a source and a target numeral system
///
/// A converter owns the two systems, the fraction precision policy,
/// and the choice of arithmetic backend. Equal radices are remapped
/// digit for digit; radices sharing an integer power root go through
/// digit replacement; every other pair runs through backend
/// arithmetic, or native long division for integer parts when no
/// backend is installed.
///
/// Conversion itself never mutates the converter, so a converter may
/// be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Converter<S, T = S> {
    source: NumeralSystem<S>,
    target: NumeralSystem<T>,
    backend: Option<Backend>,
    precision: i64,
    replace: OnceLock<Option<Replace>>,
}

impl<S, T> Converter<S, T> {
    /// Creates a converter from `source` to `target`
    ///
    /// The fraction precision starts at the build-time default and the
    /// backend at [`Backend::resolve`].
    pub fn new(source: NumeralSystem<S>, target: NumeralSystem<T>) -> Converter<S, T> {
        Converter {
            source,
            target,
            backend: Some(Backend::resolve()),
            precision: DEFAULT_PRECISION,
            replace: OnceLock::new(),
        }
    }

    /// Return this converter with the given fraction precision
    ///
    /// A positive precision is the exact number of fraction digits to
    /// produce. A precision `p <= 0` asks for the target-digit
    /// equivalent of the source fraction's length, plus `-p` extra
    /// digits. Exact conversions stop early; the last digit is always
    /// truncated, never rounded. Digit replacement and equal-radix
    /// remapping are exact and ignore precision entirely.
    ///
    /// ```
    /// # use bigradix::{Converter, NumeralSystem};
    /// let ternary = NumeralSystem::standard(3).unwrap();
    /// let decimal = NumeralSystem::standard(10).unwrap();
    ///
    /// let converter = Converter::new(ternary, decimal).with_precision(6);
    /// assert_eq!(converter.convert("0.1").unwrap(), "0.333333");
    /// ```
    pub fn with_precision(mut self, precision: i64) -> Converter<S, T> {
        self.precision = precision;
        self
    }

    /// Return this converter with the given arithmetic backend
    ///
    /// `None` removes backend arithmetic: integer parts of unrelated
    /// radix pairs then fall back to native long division, and
    /// fraction parts fail with [`ConversionError::UnavailableConversion`].
    ///
    /// ```
    /// # use bigradix::{ConversionError, Converter, NumeralSystem};
    /// let decimal = NumeralSystem::standard(10).unwrap();
    /// let base7 = NumeralSystem::standard(7).unwrap();
    ///
    /// let converter = Converter::new(decimal, base7).with_backend(None);
    /// assert_eq!(converter.convert("117").unwrap(), "225");
    /// assert_eq!(converter.convert("0.5"), Err(ConversionError::UnavailableConversion));
    /// ```
    pub fn with_backend(mut self, backend: Option<Backend>) -> Converter<S, T> {
        self.backend = backend;
        self
    }

    /// The source numeral system
    pub fn source(&self) -> &NumeralSystem<S> {
        &self.source
    }

    /// The target numeral system
    pub fn target(&self) -> &NumeralSystem<T> {
        &self.target
    }

    /// The fraction precision parameter
    pub fn precision(&self) -> i64 {
        self.precision
    }

    /// The installed arithmetic backend, if any
    pub fn backend(&self) -> Option<Backend> {
        self.backend
    }

    fn replacement(&self) -> Option<&Replace> {
        self.replace
            .get_or_init(|| Replace::new(self.source.radix(), self.target.radix()).ok())
            .as_ref()
    }

    fn fraction_budget(&self, source_len: usize) -> usize {
        if self.precision > 0 {
            return self.precision as usize;
        }
        let base = equivalent_fraction_length(source_len, self.source.radix(), self.target.radix());
        base.saturating_sub(self.precision).max(1) as usize
    }

    /// Convert integer-part digit values, most significant first
    fn integer_values(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        let mut converted = if self.source.radix() == self.target.radix() {
            check_digits(digits, self.source.radix())?;
            digits.to_vec()
        } else if let Some(replace) = self.replacement() {
            replace.integer(digits)?
        } else if let Some(backend) = self.backend {
            self.backend_integer(backend, digits)?
        } else {
            Direct::new(self.source.radix(), self.target.radix())?.integer(digits)?
        };
        trim_leading_zeros(&mut converted);
        Ok(converted)
    }

    /// Convert fraction-part digit values under the precision policy
    fn fraction_values(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        let budget = self.fraction_budget(digits.len());
        let mut converted = if self.source.radix() == self.target.radix() {
            check_digits(digits, self.source.radix())?;
            digits.to_vec()
        } else if let Some(replace) = self.replacement() {
            replace.fraction(digits, budget)?
        } else if let Some(backend) = self.backend {
            self.backend_fraction(backend, digits, budget)?
        } else {
            // long division handles integer parts only
            return Err(ConversionError::UnavailableConversion);
        };
        trim_trailing_zeros(&mut converted);
        Ok(converted)
    }

    fn backend_integer(&self, backend: Backend, digits: &[u64]) -> Result<Vec<u64>, ConversionError> {
        let (source, target) = (self.source.radix(), self.target.radix());
        match backend {
            #[cfg(feature = "bigint")]
            Backend::BigInt => Decimal::<BigIntMath>::new(source, target).integer(digits),
            Backend::Chunked => Decimal::<ChunkedMath>::new(source, target).integer(digits),
        }
    }

    fn backend_fraction(
        &self,
        backend: Backend,
        digits: &[u64],
        budget: usize,
    ) -> Result<Vec<u64>, ConversionError> {
        let (source, target) = (self.source.radix(), self.target.radix());
        match backend {
            #[cfg(feature = "bigint")]
            Backend::BigInt => Decimal::<BigIntMath>::new(source, target).fraction(digits, budget),
            Backend::Chunked => Decimal::<ChunkedMath>::new(source, target).fraction(digits, budget),
        }
    }
}

impl<S: Glyph, T: Glyph> Converter<S, T> {
    /// Convert the text form of a number
    ///
    /// The input is an optional leading `-`, then source-system digits
    /// with at most one `.` between integer and fraction parts; `-`
    /// and `.` are reserved and never read as digits. Tokenization is
    /// case-insensitive whenever the source alphabet permits. Output
    /// uses canonical digit texts of the target system, the integer
    /// part trimmed of leading zeros, the fraction part trimmed of
    /// trailing zeros but keeping its separator, and a `-` kept even
    /// on negative zero.
    ///
    /// ```
    /// # use bigradix::{Converter, NumeralSystem};
    /// let bits = NumeralSystem::standard(2).unwrap();
    /// let hex = NumeralSystem::standard(16).unwrap();
    ///
    /// let converter = Converter::new(bits, hex);
    /// assert_eq!(converter.convert("101000110111001100110100").unwrap(), "A37334");
    /// ```
    pub fn convert(&self, input: &str) -> Result<String, ConversionError> {
        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        if unsigned.is_empty() {
            return Err(ConversionError::MalformedInput("number has no digits"));
        }

        let (integer_text, fraction_text) = split_separator(unsigned)?;

        let integer_digits = self.source.split_text(integer_text)?;
        let integer_part = self.integer_values(&integer_digits)?;

        let fraction_part = match fraction_text {
            Some(text) => {
                let fraction_digits = self.source.split_text(text)?;
                Some(self.fraction_values(&fraction_digits)?)
            }
            None => None,
        };

        let mut rendered = String::new();
        if negative {
            rendered.push('-');
        }
        rendered.push_str(&self.target.render(&integer_part)?);
        if let Some(fraction) = fraction_part {
            rendered.push('.');
            rendered.push_str(&self.target.render(&fraction)?);
        }
        Ok(rendered)
    }
}

impl<S: Eq + Hash, T: Clone> Converter<S, T> {
    /// Convert an unsigned integer digit sequence, most significant
    /// digit first
    ///
    /// Symbols are matched by exact equality, without case folding.
    /// The result is in normal form: no leading zeros, zero itself as
    /// a single digit.
    ///
    /// ```
    /// # use bigradix::{Converter, NumeralSystem};
    /// let hex = NumeralSystem::standard(16).unwrap();
    /// let base4 = NumeralSystem::standard(4).unwrap();
    ///
    /// let converter = Converter::new(hex, base4);
    /// assert_eq!(converter.convert_integer(&['1', 'F']).unwrap(), vec!['1', '3', '3']);
    /// ```
    pub fn convert_integer(&self, digits: &[S]) -> Result<Vec<T>, ConversionError> {
        let values = self.source_values(digits)?;
        let converted = self.integer_values(&values)?;
        self.target_symbols(&converted)
    }

    /// Convert an unsigned fraction digit sequence, most significant
    /// digit first
    ///
    /// The precision policy applies exactly as in [`Converter::convert`].
    /// Trailing zeros are trimmed; an all-zero fraction collapses to a
    /// single zero digit.
    ///
    /// ```
    /// # use bigradix::{Converter, NumeralSystem};
    /// let hex = NumeralSystem::standard(16).unwrap();
    /// let dec = NumeralSystem::standard(10).unwrap();
    ///
    /// let converter = Converter::new(hex, dec);
    /// assert_eq!(converter.convert_fraction(&['A']).unwrap(), vec!['6', '2', '5']);
    /// ```
    pub fn convert_fraction(&self, digits: &[S]) -> Result<Vec<T>, ConversionError> {
        let values = self.source_values(digits)?;
        let converted = self.fraction_values(&values)?;
        self.target_symbols(&converted)
    }

    fn source_values(&self, digits: &[S]) -> Result<Vec<u64>, ConversionError> {
        digits.iter().map(|digit| self.source.value(digit)).collect()
    }

    fn target_symbols(&self, values: &[u64]) -> Result<Vec<T>, ConversionError> {
        values
            .iter()
            .map(|&value| self.target.digit(value).map(Clone::clone))
            .collect()
    }
}


/// Failure of a conversion or of parsing the number around it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// A digit outside the source numeral system
    InvalidDigit(String),
    /// Text does not resolve to exactly one digit sequence
    UnsupportedTokenization,
    /// The selected strategy cannot perform the requested operation
    UnsupportedOperation,
    /// Native arithmetic would overflow for this radix pair
    PossibleOverflow,
    /// No strategy can convert between the two systems
    UnavailableConversion,
    /// Broken sign or separator structure in the input
    MalformedInput(&'static str),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ConversionError::*;

        match *self {
            InvalidDigit(ref digit) => write!(f, "invalid digit: {}", digit),
            UnsupportedTokenization => "text splits into more than one digit sequence".fmt(f),
            UnsupportedOperation => "operation not supported by the selected strategy".fmt(f),
            PossibleOverflow => "radix pair too large for native arithmetic".fmt(f),
            UnavailableConversion => "no conversion available between these numeral systems".fmt(f),
            MalformedInput(reason) => reason.fmt(f),
        }
    }
}

impl std::error::Error for ConversionError {
    fn description(&self) -> &str {
        "failed to convert between numeral systems"
    }
}


/// Tools to help serializing/deserializing `NumeralSystem`s
#[cfg(feature = "serde")]
mod numeral_serde {
    use super::*;
    use serde::{de, ser};
    use std::marker::PhantomData;

    impl<D: ser::Serialize> ser::Serialize for NumeralSystem<D> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.collect_seq(self.symbols())
        }
    }

    struct AlphabetVisitor<D> {
        marker: PhantomData<D>,
    }

    impl<'de, D> de::Visitor<'de> for AlphabetVisitor<D>
    where
        D: de::Deserialize<'de> + Eq + Hash + Clone,
    {
        type Value = NumeralSystem<D>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "an ordered list of at least two digit symbols")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut symbols = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(symbol) = seq.next_element()? {
                symbols.push(symbol);
            }
            NumeralSystem::from_symbols(symbols).map_err(de::Error::custom)
        }
    }

    impl<'de, D> de::Deserialize<'de> for NumeralSystem<D>
    where
        D: de::Deserialize<'de> + Eq + Hash + Clone,
    {
        fn deserialize<De>(d: De) -> Result<Self, De::Error>
        where
            De: de::Deserializer<'de>,
        {
            d.deserialize_seq(AlphabetVisitor { marker: PhantomData })
        }
    }

    #[cfg(test)]
    extern crate serde_json;

    #[cfg(test)]
    extern crate serde_test;

    #[test]
    fn test_serde_serialize_char_alphabet() {
        let sys = NumeralSystem::standard(4).unwrap();
        let json = serde_json::to_string(&sys).unwrap();
        assert_eq!(json, r#"["0","1","2","3"]"#);
    }

    #[test]
    fn test_serde_round_trip_char_alphabet() {
        let sys = NumeralSystem::standard(16).unwrap();
        let json = serde_json::to_string(&sys).unwrap();
        let back: NumeralSystem<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sys);
    }

    #[test]
    fn test_serde_tokens() {
        use self::serde_test::{assert_tokens, Token};

        let sys = NumeralSystem::numbered(2).unwrap();
        assert_tokens(
            &sys,
            &[
                Token::Seq { len: Some(2) },
                Token::Str("#0"),
                Token::Str("#1"),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_serde_deserialize_rejects_duplicates() {
        let result: Result<NumeralSystem<char>, _> = serde_json::from_str(r#"["0","1","0"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_deserialize_rejects_single_digit() {
        let result: Result<NumeralSystem<char>, _> = serde_json::from_str(r#"["7"]"#);
        assert!(result.is_err());
    }
}


#[cfg(test)]
mod converter_tests {
    use super::*;

    include!("lib.tests.convert.rs");
}

#[cfg(test)]
mod test_route_selection {
    use super::*;

    include!("lib.tests.engine.rs");
}


#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use paste::paste;
    use proptest::*;

    include!("lib.tests.property-tests.rs");
}
