//! # Domain Entities
//!
//! Records the rental desk works with.
//!
//! - [`Car`]: A car record owned by the store
//! - [`CarCategory`]: Price and candidate cars, supplied per request
//! - [`Customer`]: The renter, supplied per request
//! - [`Transaction`]: The receipt returned by a rental

pub mod car;
pub mod car_category;
pub mod customer;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use car::Car;
pub use car_category::CarCategory;
pub use customer::Customer;
pub use transaction::Transaction;
