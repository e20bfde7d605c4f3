//! # Car Category Entity
//!
//! A group of cars sharing a daily price.

use crate::domain::value_objects::{CarId, Price};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named group of cars sharing a base daily price and a pool of
/// candidate car identifiers.
///
/// Categories arrive with each request and are not persisted. Fields other
/// than `price` and `carIds` are carried along untouched.
///
/// # Examples
///
/// ```
/// use car_rental::domain::entities::CarCategory;
///
/// let category: CarCategory = serde_json::from_str(
///     r#"{"id": "suv", "name": "SUV", "carIds": ["c1", "c2"], "price": 37.6}"#,
/// ).unwrap();
/// assert_eq!(category.car_ids().len(), 2);
/// assert_eq!(category.label(), Some("SUV"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    /// Base daily rate.
    price: Price,
    /// Candidate car identifiers.
    #[serde(default)]
    car_ids: Vec<CarId>,
    /// Remaining caller-supplied fields.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CarCategory {
    /// Creates a category.
    #[must_use]
    pub fn new(price: Price, car_ids: Vec<CarId>) -> Self {
        Self {
            price,
            car_ids,
            extra: Map::new(),
        }
    }

    /// Adds a descriptive field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Base daily rate.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Candidate car identifiers.
    #[must_use]
    pub fn car_ids(&self) -> &[CarId] {
        &self.car_ids
    }

    /// Caller-supplied label, if any (`name`, falling back to `id`).
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.extra
            .get("name")
            .or_else(|| self.extra.get("id"))
            .and_then(Value::as_str)
    }
}
