//! # Domain Errors
//!
//! Error types raised while constructing or validating domain values.
//!
//! These errors never leave the domain layer on their own: the application
//! layer wraps them in [`ApplicationError`](crate::application::error::ApplicationError).

use crate::domain::value_objects::arithmetic::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A price was zero or negative.
    #[error("invalid price: {0} (must be positive)")]
    InvalidPrice(Decimal),

    /// A tax bracket has `from > to`.
    #[error("invalid tax bracket: from {from} is greater than to {to}")]
    InvertedBracket {
        /// Lower bound.
        from: u32,
        /// Upper bound.
        to: u32,
    },

    /// A tax bracket multiplier was zero or negative.
    #[error("invalid tax multiplier {multiplier} for ages {from}..={to}")]
    InvalidMultiplier {
        /// Lower bound.
        from: u32,
        /// Upper bound.
        to: u32,
        /// Offending multiplier.
        multiplier: Decimal,
    },

    /// Two tax brackets share at least one age.
    #[error("overlapping tax brackets: {first_from}..={first_to} and {second_from}..={second_to}")]
    OverlappingBrackets {
        /// Lower bound of the first bracket.
        first_from: u32,
        /// Upper bound of the first bracket.
        first_to: u32,
        /// Lower bound of the second bracket.
        second_from: u32,
        /// Upper bound of the second bracket.
        second_to: u32,
    },

    /// The tax table has no brackets at all.
    #[error("tax table is empty")]
    EmptyTaxTable,

    /// The tax table leaves an age of the expected domain uncovered.
    #[error("tax table does not cover age {0}")]
    UncoveredAge(u32),

    /// Unknown locale tag.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Unknown ISO 4217 currency code.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
