//! # Identifiers
//!
//! Opaque string identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a car record.
///
/// The store decides the format; the core only compares and forwards it.
///
/// # Examples
///
/// ```
/// use car_rental::domain::value_objects::CarId;
///
/// let id = CarId::new("1a2b3c");
/// assert_eq!(id.as_str(), "1a2b3c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(String);

impl CarId {
    /// Creates a new car identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CarId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
