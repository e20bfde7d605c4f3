//! # Repository Traits
//!
//! Port definition for car lookups.
//!
//! The rental service depends only on [`CarRepository`]. Implementations
//! can keep cars in memory, in a JSON file, or anywhere else.
//!
//! # Examples
//!
//! ```ignore
//! use car_rental::infrastructure::persistence::traits::CarRepository;
//!
//! async fn print_car(repo: &impl CarRepository, id: &CarId) {
//!     let car = repo.find(id).await.unwrap();
//!     println!("{car}");
//! }
//! ```

use crate::domain::entities::Car;
use crate::domain::value_objects::CarId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Failure of a car store lookup.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with this identifier.
    #[error("{entity_type} {id} is not in the store")]
    NotFound {
        /// Kind of record looked up.
        entity_type: &'static str,
        /// Identifier looked up.
        id: String,
    },

    /// The store could not be reached or read.
    #[error("car store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with data that does not decode as cars.
    #[error("car store holds malformed data: {0}")]
    Malformed(String),
}

impl RepositoryError {
    /// Lookup miss for `id`.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Store unreachable or unreadable.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Store contents undecodable.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }

    /// True for a lookup miss, as opposed to a storage failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Outcome of a car store lookup.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only keyed lookup of car records.
///
/// Lookups may involve I/O, so they are asynchronous. Cancellation and
/// timeouts are the implementation's business; callers forward whatever
/// error comes back.
#[async_trait]
pub trait CarRepository: Send + Sync + fmt::Debug {
    /// Resolves a car by identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no car has this identifier,
    /// or another variant if the backing storage fails.
    async fn find(&self, id: &CarId) -> RepositoryResult<Car>;
}
