//! # In-Memory Repositories
//!
//! In-memory implementations for tests and demos without a data file.
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod car_repository;

pub use car_repository::InMemoryCarRepository;
