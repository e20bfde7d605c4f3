//! # Application Errors
//!
//! Error types for the rental use cases.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── InvalidInput(String)          - Malformed payload or numberOfDays
//! ├── InvalidCategory(String)       - Category has no candidate cars
//! ├── NoMatchingBracket { age }     - Age outside every tax bracket
//! ├── NotFound { .. }               - Store lookup miss
//! ├── DataConsistency { car_id }    - Category lists a car the store lacks
//! ├── Repository(RepositoryError)   - Store failure other than a miss
//! ├── Domain(DomainError)           - Value-object validation failure
//! └── Internal(String)              - Broken collaborator
//! ```
//!
//! The service layer never recovers from these; every failure reaches the
//! caller tagged with its [`ErrorKind`].
//!
//! # Examples
//!
//! ```
//! use car_rental::application::error::{ApplicationError, ErrorKind};
//!
//! let err = ApplicationError::validation("numberOfDays must be positive");
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//!
//! let err = ApplicationError::no_matching_bracket(12);
//! assert!(err.to_string().contains("12"));
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Coarse classification of an [`ApplicationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Malformed or missing input.
    InvalidInput,
    /// Empty candidate set.
    InvalidCategory,
    /// Age outside all brackets.
    NoMatchingBracket,
    /// Lookup miss.
    NotFound,
    /// Category and store disagree.
    DataConsistency,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// Stable identifier used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::InvalidCategory => "InvalidCategory",
            Self::NoMatchingBracket => "NoMatchingBracket",
            Self::NotFound => "NotFound",
            Self::DataConsistency => "DataConsistency",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The category cannot supply a car.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// No tax bracket covers the customer's age.
    #[error("no tax bracket matches customer age {age}")]
    NoMatchingBracket {
        /// Customer age.
        age: u32,
    },

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// A category referenced a car the store does not hold.
    #[error("data consistency error: car {car_id} is listed in the category but missing from the store")]
    DataConsistency {
        /// The drawn identifier.
        car_id: String,
    },

    /// Store failure.
    #[error("repository error: {0}")]
    Repository(RepositoryError),

    /// Domain validation failure.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an invalid category error.
    #[must_use]
    pub fn invalid_category(message: impl Into<String>) -> Self {
        Self::InvalidCategory(message.into())
    }

    /// Creates a no matching bracket error.
    #[must_use]
    pub fn no_matching_bracket(age: u32) -> Self {
        Self::NoMatchingBracket { age }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates a data consistency error.
    #[must_use]
    pub fn data_consistency(car_id: impl Into<String>) -> Self {
        Self::DataConsistency {
            car_id: car_id.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Classifies this error.
    ///
    /// Domain errors raised while pricing stem from caller input (bad
    /// price, overflowing totals), so they classify as `InvalidInput`.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::Domain(_) => ErrorKind::InvalidInput,
            Self::InvalidCategory(_) => ErrorKind::InvalidCategory,
            Self::NoMatchingBracket { .. } => ErrorKind::NoMatchingBracket,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DataConsistency { .. } => ErrorKind::DataConsistency,
            Self::Repository(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns true if a lookup came back empty, including the
    /// data-consistency case.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::DataConsistency { .. })
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity_type, id } => Self::not_found(entity_type, id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
