//! # In-Memory Car Repository
//!
//! In-memory implementation of [`CarRepository`].
//!
//! The car set is fixed at construction, making it suitable for unit tests
//! and demos without a data file.

use crate::domain::entities::Car;
use crate::domain::value_objects::CarId;
use crate::infrastructure::persistence::traits::{
    CarRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory implementation of [`CarRepository`].
///
/// Clones share the same car set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCarRepository {
    storage: Arc<HashMap<CarId, Car>>,
}

impl InMemoryCarRepository {
    /// Creates a repository holding no cars.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with `cars`.
    ///
    /// A later car with the same identifier replaces an earlier one.
    #[must_use]
    pub fn from_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let map = cars
            .into_iter()
            .map(|car| (car.id().clone(), car))
            .collect::<HashMap<_, _>>();
        Self {
            storage: Arc::new(map),
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn find(&self, id: &CarId) -> RepositoryResult<Car> {
        self.storage
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Car", id.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn create_test_car(id: &str) -> Car {
        Car::new(CarId::new(id)).with_attribute("name", format!("car {id}"))
    }

    #[tokio::test]
    async fn empty_repository_finds_nothing() {
        let repo = InMemoryCarRepository::new();
        assert!(repo.find(&CarId::new("car-1")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn finds_preloaded_car() {
        let car = create_test_car("car-1");
        let repo = InMemoryCarRepository::from_cars([car.clone(), create_test_car("car-2")]);

        assert_eq!(repo.find(&CarId::new("car-1")).await.unwrap(), car);
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let repo = InMemoryCarRepository::from_cars([create_test_car("car-1")]);

        let err = repo.find(&CarId::new("nope")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nope"));
    }

    #[tokio::test]
    async fn from_cars_keeps_last_duplicate() {
        let first = create_test_car("car-1");
        let second = Car::new(CarId::new("car-1")).with_attribute("name", "replacement");
        let repo = InMemoryCarRepository::from_cars([first, second.clone()]);

        assert_eq!(repo.find(&CarId::new("car-1")).await.unwrap(), second);
    }
}
