//! # Transaction Entity
//!
//! The receipt returned after a successful rental.

use crate::domain::entities::{Car, Customer};
use serde::{Deserialize, Serialize};

/// Rental receipt: the allocated car, the customer, when the car is due
/// back and how much the rental costs.
///
/// `due_date` and `amount` are already rendered for display. A transaction
/// is built once and handed back to the caller; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The allocated car, exactly as the store returned it.
    pub car: Car,
    /// The customer, exactly as supplied.
    pub customer: Customer,
    /// Long-form localized due date.
    pub due_date: String,
    /// Formatted total amount.
    pub amount: String,
}

impl Transaction {
    /// Assembles a receipt.
    #[must_use]
    pub fn new(car: Car, customer: Customer, due_date: String, amount: String) -> Self {
        Self {
            car,
            customer,
            due_date,
            amount,
        }
    }
}
