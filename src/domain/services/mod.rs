//! # Domain Services
//!
//! Calculations that don't belong to a single entity or value object.
//!
//! ## Services
//!
//! - [`pricing`]: Rental amount and due date arithmetic

pub mod pricing;
