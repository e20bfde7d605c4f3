//! # Car Entity
//!
//! A car record as held by the store.

use crate::domain::value_objects::CarId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A car record.
///
/// Only the identifier has meaning to the pricing logic. Every other field
/// (name, release year, fuel level...) is kept as-is in `attributes` and
/// written back out unchanged.
///
/// # Examples
///
/// ```
/// use car_rental::domain::entities::Car;
///
/// let car: Car = serde_json::from_str(
///     r#"{"id": "c1", "name": "Mustang", "releaseYear": 2020}"#,
/// ).unwrap();
/// assert_eq!(car.id().as_str(), "c1");
/// assert_eq!(car.attribute("name").and_then(|v| v.as_str()), Some("Mustang"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Store key.
    id: CarId,
    /// Descriptive fields, untouched.
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Car {
    /// Creates a car with no descriptive fields.
    #[must_use]
    pub fn new(id: CarId) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    /// Adds a descriptive field.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &CarId {
        &self.id
    }

    /// Returns a descriptive field.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns all descriptive fields.
    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car({})", self.id)
    }
}
