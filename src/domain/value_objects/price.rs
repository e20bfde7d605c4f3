//! # Price Value Object
//!
//! Positive daily rate of a car category.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A strictly positive decimal daily rate.
///
/// Serialized as a JSON number, matching the payloads callers send
/// (`"price": 37.6`).
///
/// # Examples
///
/// ```
/// use car_rental::domain::value_objects::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(376, 1)).unwrap();
/// assert_eq!(price.get(), Decimal::new(376, 1));
/// assert!(Price::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `value <= 0`.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::InvalidPrice(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
