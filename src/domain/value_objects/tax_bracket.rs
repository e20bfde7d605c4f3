//! # Age Tax Brackets
//!
//! Static table mapping customer age ranges to price multipliers.
//!
//! This module provides:
//! - [`TaxBracket`]: One inclusive age range and its multiplier
//! - [`TaxTable`]: A validated, non-overlapping list of brackets
//!
//! # Lookup Policy
//!
//! A table is validated once, when it is built: brackets must be
//! well-formed and must not overlap, so any age matches at most one
//! bracket. An age that matches none is reported as `None` by
//! [`TaxTable::bracket_for`]; there is no default bracket.
//!
//! # Examples
//!
//! ```
//! use car_rental::domain::value_objects::tax_bracket::{TaxBracket, TaxTable};
//! use rust_decimal::Decimal;
//!
//! let table = TaxTable::new(vec![
//!     TaxBracket::new(18, 25, Decimal::new(11, 1)),
//!     TaxBracket::new(26, 30, Decimal::new(15, 1)),
//! ]).unwrap();
//!
//! assert_eq!(table.bracket_for(27).unwrap().multiplier(), Decimal::new(15, 1));
//! assert!(table.bracket_for(31).is_none());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive age range with its price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lowest age in the bracket (inclusive).
    from: u32,
    /// Highest age in the bracket (inclusive).
    to: u32,
    /// Multiplier applied to the base daily price.
    #[serde(alias = "then", with = "rust_decimal::serde::float")]
    multiplier: Decimal,
}

impl TaxBracket {
    /// Creates a bracket. Validation happens when it joins a [`TaxTable`].
    #[must_use]
    pub const fn new(from: u32, to: u32, multiplier: Decimal) -> Self {
        Self {
            from,
            to,
            multiplier,
        }
    }

    /// Lowest age covered.
    #[inline]
    #[must_use]
    pub const fn min_age(&self) -> u32 {
        self.from
    }

    /// Highest age covered.
    #[inline]
    #[must_use]
    pub const fn max_age(&self) -> u32 {
        self.to
    }

    /// Price multiplier.
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> Decimal {
        self.multiplier
    }

    /// Returns true if `age` lies within `from..=to`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, age: u32) -> bool {
        self.from <= age && age <= self.to
    }

    fn validate(&self) -> DomainResult<()> {
        if self.from > self.to {
            return Err(DomainError::InvertedBracket {
                from: self.from,
                to: self.to,
            });
        }
        if self.multiplier <= Decimal::ZERO {
            return Err(DomainError::InvalidMultiplier {
                from: self.from,
                to: self.to,
                multiplier: self.multiplier,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={} x{}", self.from, self.to, self.multiplier)
    }
}

/// A validated set of non-overlapping tax brackets, sorted by lower bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Builds a table from brackets in any order.
    ///
    /// # Errors
    ///
    /// - `DomainError::EmptyTaxTable` if `brackets` is empty
    /// - `DomainError::InvertedBracket` if a bracket has `from > to`
    /// - `DomainError::InvalidMultiplier` if a multiplier is not positive
    /// - `DomainError::OverlappingBrackets` if two brackets share an age
    pub fn new(mut brackets: Vec<TaxBracket>) -> DomainResult<Self> {
        if brackets.is_empty() {
            return Err(DomainError::EmptyTaxTable);
        }
        for bracket in &brackets {
            bracket.validate()?;
        }

        brackets.sort_by_key(TaxBracket::min_age);
        for pair in brackets.windows(2) {
            let [first, second] = pair else { continue };
            if second.from <= first.to {
                return Err(DomainError::OverlappingBrackets {
                    first_from: first.from,
                    first_to: first.to,
                    second_from: second.from,
                    second_to: second.to,
                });
            }
        }

        Ok(Self { brackets })
    }

    /// The age table used by the rental desk when none is configured.
    ///
    /// | Ages    | Multiplier |
    /// |---------|------------|
    /// | 18–25   | 1.1        |
    /// | 26–30   | 1.5        |
    /// | 31–100  | 1.3        |
    #[must_use]
    pub fn standard() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(18, 25, Decimal::new(11, 1)),
                TaxBracket::new(26, 30, Decimal::new(15, 1)),
                TaxBracket::new(31, 100, Decimal::new(13, 1)),
            ],
        }
    }

    /// Returns the single bracket containing `age`, if any.
    #[must_use]
    pub fn bracket_for(&self, age: u32) -> Option<&TaxBracket> {
        let idx = self.brackets.partition_point(|b| b.to < age);
        self.brackets.get(idx).filter(|b| b.contains(age))
    }

    /// Checks that every age in `ages` matches a bracket.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UncoveredAge` with the first age left uncovered.
    pub fn ensure_covers(&self, ages: RangeInclusive<u32>) -> DomainResult<()> {
        let mut next = *ages.start();
        for bracket in &self.brackets {
            if bracket.to < next {
                continue;
            }
            if bracket.from > next {
                break;
            }
            if bracket.to >= *ages.end() {
                return Ok(());
            }
            next = bracket.to + 1;
        }
        if ages.is_empty() {
            return Ok(());
        }
        Err(DomainError::UncoveredAge(next))
    }

    /// Returns the brackets, sorted by lower bound.
    #[must_use]
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for TaxTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let brackets = Vec::<TaxBracket>::deserialize(deserializer)?;
        Self::new(brackets).map_err(serde::de::Error::custom)
    }
}
