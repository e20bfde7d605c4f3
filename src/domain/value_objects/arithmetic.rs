//! # Money Arithmetic
//!
//! Overflow-checked multiplication and cent rounding for rental amounts.
//!
//! ```
//! use car_rental::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let daily = Decimal::new(376, 1);
//! let total = daily.safe_mul(Decimal::new(5, 0)).unwrap();
//! assert_eq!(total, Decimal::new(1880, 1));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Fraction digits of a money amount.
pub const CENT_SCALE: u32 = 2;

/// A rental calculation left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The amount does not fit in a `Decimal`.
    #[error("rental amount overflows")]
    Overflow,

    /// The date falls outside the supported calendar.
    #[error("due date out of calendar range")]
    DateOutOfRange,
}

/// Outcome of a checked calculation.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Multiplication that reports overflow instead of panicking.
pub trait CheckedArithmetic: Sized {
    /// Multiplies `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Rounds a money amount to two fraction digits, half away from zero.
///
/// The result always carries exactly two fraction digits, so `244.4`
/// becomes `244.40`.
///
/// # Examples
///
/// ```
/// use car_rental::domain::value_objects::arithmetic::round_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_cents(Decimal::new(2444, 1)).to_string(), "244.40");
/// assert_eq!(round_to_cents(Decimal::new(1005, 3)).to_string(), "1.01");
/// ```
#[must_use]
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CENT_SCALE);
    rounded
}
