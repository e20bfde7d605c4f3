//! # Persistence Layer
//!
//! Car store port and its implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`CarRepository`]: Keyed lookup of car records
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory store for tests and demos
//! - `json_file`: Store reading a JSON file of cars

pub mod in_memory;
pub mod json_file;
pub mod traits;

pub use in_memory::InMemoryCarRepository;
pub use json_file::JsonFileCarRepository;
pub use traits::{CarRepository, RepositoryError, RepositoryResult};
