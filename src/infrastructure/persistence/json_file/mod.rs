//! # JSON File Repositories
//!
//! Repositories reading records from JSON files on disk.

pub mod car_repository;

pub use car_repository::JsonFileCarRepository;
