//! # Car Rental
//!
//! Quoting and rental service for a car rental desk.
//!
//! Given a customer, a car category and a rental length, the service:
//!
//! - prices the rental from the category's daily rate and the multiplier of
//!   the customer's age bracket,
//! - draws one of the category's cars uniformly at random and resolves it
//!   in the car store,
//! - issues a receipt with the car, the customer, a localized due date and
//!   the formatted amount.
//!
//! # Architecture
//!
//! ```text
//! api::rest ──► application::services::RentalService
//!                 │            │            │
//!                 ▼            ▼            ▼
//!          domain::services  CarSelector  CarRepository ◄── infrastructure
//!          (pricing)         Clock        (in-memory, JSON file)
//! ```
//!
//! - [`domain`]: Entities, value objects and pricing arithmetic
//! - [`application`]: The rental use cases and their errors
//! - [`infrastructure`]: Car store adapters
//! - [`api`]: HTTP transport
//! - [`config`]: Layered server configuration
//! - [`telemetry`]: Logging setup

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
