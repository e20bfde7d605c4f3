//! # Application Layer
//!
//! Use cases of the rental desk, wired to the store through the ports in
//! [`crate::infrastructure::persistence`].

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, ErrorKind};
