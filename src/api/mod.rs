//! # API Layer
//!
//! Transports exposing the rental service.

pub mod rest;
