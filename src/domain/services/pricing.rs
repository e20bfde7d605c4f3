//! # Rental Pricing
//!
//! Pure calculations behind a rental quote.
//!
//! ```text
//! amount   = daily_price × bracket_multiplier × days
//! due_date = today + days (calendar days)
//! ```
//!
//! # Examples
//!
//! ```
//! use car_rental::domain::services::pricing::rental_amount;
//! use car_rental::domain::value_objects::Price;
//! use rust_decimal::Decimal;
//!
//! let price = Price::new(Decimal::new(376, 1)).unwrap();
//! let amount = rental_amount(price, Decimal::new(13, 1), 5).unwrap();
//! assert_eq!(amount, Decimal::new(2444, 1));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Price;
use crate::domain::value_objects::arithmetic::{
    ArithmeticError, CENT_SCALE, CheckedArithmetic, round_to_cents,
};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

/// Total amount for renting at `price` per day for `days` days with the
/// given age multiplier. The result is exact; rounding happens when the
/// amount is formatted.
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` on overflow, including totals too
/// large to carry two fraction digits.
pub fn rental_amount(price: Price, multiplier: Decimal, days: u32) -> DomainResult<Decimal> {
    let total = price
        .get()
        .safe_mul(multiplier)?
        .safe_mul(Decimal::from(days))?;
    if round_to_cents(total).scale() < CENT_SCALE {
        return Err(ArithmeticError::Overflow.into());
    }
    Ok(total)
}

/// Date the car is due back: `today` plus `days` calendar days.
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` if the date falls outside the
/// representable calendar.
pub fn due_date(today: NaiveDate, days: u32) -> DomainResult<NaiveDate> {
    today
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or(DomainError::Arithmetic(ArithmeticError::DateOutOfRange))
}
