//! # Infrastructure Layer
//!
//! Adapters for the ports the application layer depends on.

pub mod persistence;
