//! # Customer Entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The person renting a car.
///
/// Only `age` drives pricing; all other fields are passed through verbatim
/// into the transaction.
///
/// # Examples
///
/// ```
/// use car_rental::domain::entities::Customer;
///
/// let customer: Customer = serde_json::from_str(r#"{"id": "u1", "name": "Ana", "age": 50}"#).unwrap();
/// assert_eq!(customer.age(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Age in whole years.
    age: u32,
    /// Remaining caller-supplied fields.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Customer {
    /// Creates a customer of the given age.
    #[must_use]
    pub fn new(age: u32) -> Self {
        Self {
            age,
            extra: Map::new(),
        }
    }

    /// Adds a descriptive field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Age in whole years.
    #[inline]
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }
}
