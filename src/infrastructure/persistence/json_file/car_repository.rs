//! # JSON File Car Repository
//!
//! Reads car records from a JSON file.
//!
//! The file holds either an array of car objects or a single car object.
//! It is read again on every lookup, so edits to the file are picked up
//! without restarting the service.

use crate::domain::entities::Car;
use crate::domain::value_objects::CarId;
use crate::infrastructure::persistence::traits::{
    CarRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted file layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum CarFile {
    Many(Vec<Car>),
    One(Car),
}

impl CarFile {
    fn into_cars(self) -> Vec<Car> {
        match self {
            Self::Many(cars) => cars,
            Self::One(car) => vec![car],
        }
    }
}

/// [`CarRepository`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCarRepository {
    path: PathBuf,
}

impl JsonFileCarRepository {
    /// Creates a repository reading from `path`. The file is not touched
    /// until the first lookup.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes every car in the file.
    ///
    /// # Errors
    ///
    /// - `RepositoryError::Unavailable` if the file cannot be read
    /// - `RepositoryError::Malformed` if it is not valid car JSON
    pub async fn load_all(&self) -> RepositoryResult<Vec<Car>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            RepositoryError::unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let file: CarFile = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::malformed(format!("{}: {e}", self.path.display()))
        })?;
        Ok(file.into_cars())
    }
}

#[async_trait]
impl CarRepository for JsonFileCarRepository {
    async fn find(&self, id: &CarId) -> RepositoryResult<Car> {
        self.load_all()
            .await?
            .into_iter()
            .find(|car| car.id() == id)
            .ok_or_else(|| RepositoryError::not_found("Car", id.as_str()))
    }
}
