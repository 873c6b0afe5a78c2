//! conversion strategies
//!
//! Each strategy turns digit-value sequences of a source radix into
//! digit-value sequences of a target radix. Integer and fraction parts
//! convert separately; sequences are most significant digit first in
//! both directions.
//!
//! * [`Replace`] regroups digits through a shared radix root, exact
//!   and arithmetic-free.
//! * [`Decimal`] goes through an arbitrary-precision value using an
//!   [`Arithmetic`](crate::arithmetic::Arithmetic) backend.
//! * [`Direct`] is repeated in-place short division, integers only,
//!   no backend required.

use crate::ConversionError;

pub(crate) mod decimal;
pub(crate) mod direct;
pub(crate) mod replace;

pub use self::decimal::Decimal;
pub use self::direct::Direct;
pub use self::replace::Replace;


/// A way of converting digit sequences between two fixed radixes
///
/// Implementations validate their input digits and never panic on
/// malformed sequences.
pub trait Conversion {
    /// Convert an integer part
    ///
    /// Output has no leading zeros; zero is `[0]`.
    fn integer(&self, digits: &[u64]) -> Result<Vec<u64>, ConversionError>;

    /// Convert a fraction part, producing at most `budget` digits
    ///
    /// Strategies that are exact ignore the budget. The last digit is
    /// truncated, never rounded, and conversion stops early when the
    /// remaining fraction is exactly zero.
    fn fraction(&self, digits: &[u64], budget: usize) -> Result<Vec<u64>, ConversionError>;
}

/// Reject digit values outside the radix
pub(crate) fn check_digits(digits: &[u64], radix: u64) -> Result<(), ConversionError> {
    match digits.iter().find(|&&d| d >= radix) {
        Some(d) => Err(ConversionError::InvalidDigit(d.to_string())),
        None => Ok(()),
    }
}
