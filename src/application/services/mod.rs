//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`RentalService`]: Price quotes, car allocation and rental receipts
//! - [`CarSelector`]: Strategies for drawing a car from a category
//! - [`Clock`]: Source of today's date

pub mod car_selector;
pub mod clock;
pub mod rental_service;

pub use car_selector::{CarSelector, FixedPositionSelector, UniformRandomSelector};
pub use clock::{Clock, FixedClock, SystemClock};
pub use rental_service::RentalService;
