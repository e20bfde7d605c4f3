//! # Rental Service
//!
//! Quotes rental prices, allocates cars and issues rental receipts.
//!
//! # Rental Flow
//!
//! ```text
//! quote_price ──► select_car ──► due date ──► Transaction
//! ```
//!
//! The quote is computed before the car is drawn. The two steps share no
//! state, so the order only matters for which error a caller sees when
//! both would fail.
//!
//! # Examples
//!
//! ```
//! use car_rental::application::services::{FixedClock, RentalService};
//! use car_rental::domain::entities::{Car, CarCategory, Customer};
//! use car_rental::domain::value_objects::{CarId, FormatConfig, Price, TaxTable};
//! use car_rental::infrastructure::persistence::InMemoryCarRepository;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let cars = InMemoryCarRepository::from_cars([Car::new(CarId::new("c1"))]);
//! let service = RentalService::new(Arc::new(cars), TaxTable::standard(), FormatConfig::default())
//!     .with_clock(Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2020, 11, 5).unwrap())));
//!
//! let category = CarCategory::new(Price::new(Decimal::new(376, 1)).unwrap(), vec![CarId::new("c1")]);
//! let receipt = service.create_rental(Customer::new(50), &category, 5).await.unwrap();
//!
//! assert_eq!(receipt.amount, "R$\u{a0}244,40");
//! assert_eq!(receipt.due_date, "10 de novembro de 2020");
//! # });
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::car_selector::{CarSelector, UniformRandomSelector};
use crate::application::services::clock::{Clock, SystemClock};
use crate::domain::entities::{Car, CarCategory, Customer, Transaction};
use crate::domain::services::pricing;
use crate::domain::value_objects::{FormatConfig, TaxTable};
use crate::infrastructure::persistence::CarRepository;
use std::fmt;
use std::sync::Arc;

/// The rental desk.
///
/// Stateless apart from its read-only configuration: share one instance
/// behind an `Arc` across all requests.
pub struct RentalService {
    cars: Arc<dyn CarRepository>,
    selector: Arc<dyn CarSelector>,
    clock: Arc<dyn Clock>,
    tax_table: TaxTable,
    format: FormatConfig,
}

impl RentalService {
    /// Creates a rental service with uniform random car selection and the
    /// system clock.
    ///
    /// # Arguments
    ///
    /// * `cars` - Store resolving car identifiers
    /// * `tax_table` - Validated age brackets
    /// * `format` - Locale and currency for receipts
    #[must_use]
    pub fn new(cars: Arc<dyn CarRepository>, tax_table: TaxTable, format: FormatConfig) -> Self {
        Self {
            cars,
            selector: Arc::new(UniformRandomSelector::new()),
            clock: Arc::new(SystemClock),
            tax_table,
            format,
        }
    }

    /// Replaces the car selection strategy.
    #[must_use]
    pub fn with_selector(mut self, selector: Arc<dyn CarSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Draws one car from `category` and resolves it in the store.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::InvalidCategory` if the category lists no cars
    /// - `ApplicationError::DataConsistency` if the drawn car is not in the store
    /// - `ApplicationError::Repository` if the store fails
    /// - `ApplicationError::Internal` if the selector draws out of range
    pub async fn select_car(&self, category: &CarCategory) -> ApplicationResult<Car> {
        let car_ids = category.car_ids();
        if car_ids.is_empty() {
            return Err(ApplicationError::invalid_category(format!(
                "category {} has no candidate cars",
                category.label().unwrap_or("<unnamed>")
            )));
        }

        let position = self.selector.pick(car_ids.len());
        let car_id = car_ids.get(position).ok_or_else(|| {
            ApplicationError::internal(format!(
                "{} selector picked position {position} of {}",
                self.selector.name(),
                car_ids.len()
            ))
        })?;

        let car = self.cars.find(car_id).await.map_err(|err| {
            if err.is_not_found() {
                ApplicationError::data_consistency(car_id.as_str())
            } else {
                err.into()
            }
        })?;

        tracing::debug!(
            car_id = %car.id(),
            candidates = car_ids.len(),
            selector = self.selector.name(),
            "car selected"
        );
        Ok(car)
    }

    /// Prices a rental of `number_of_days` days for `customer`.
    ///
    /// Returns the amount formatted with this service's [`FormatConfig`].
    /// Identical inputs always yield byte-identical output.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::InvalidInput` if `number_of_days` is zero
    /// - `ApplicationError::NoMatchingBracket` if no bracket covers the age
    /// - `ApplicationError::Domain` if the total overflows
    pub fn quote_price(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: u32,
    ) -> ApplicationResult<String> {
        if number_of_days == 0 {
            return Err(ApplicationError::validation(
                "numberOfDays must be a positive integer",
            ));
        }

        let age = customer.age();
        let bracket = self
            .tax_table
            .bracket_for(age)
            .ok_or_else(|| ApplicationError::no_matching_bracket(age))?;

        let amount =
            pricing::rental_amount(category.price(), bracket.multiplier(), number_of_days)?;
        let formatted = self.format.format_currency(amount);

        tracing::debug!(
            age,
            bracket = %bracket,
            number_of_days,
            amount = %formatted,
            "price quoted"
        );
        Ok(formatted)
    }

    /// Rents a car from `category` to `customer` for `number_of_days` days.
    ///
    /// The returned transaction carries the car exactly as the store
    /// returned it and the customer exactly as supplied.
    ///
    /// # Errors
    ///
    /// Any error of [`quote_price`](Self::quote_price) or
    /// [`select_car`](Self::select_car), or `ApplicationError::Domain` if
    /// the due date falls outside the calendar.
    pub async fn create_rental(
        &self,
        customer: Customer,
        category: &CarCategory,
        number_of_days: u32,
    ) -> ApplicationResult<Transaction> {
        let amount = self.quote_price(category, &customer, number_of_days)?;
        let car = self.select_car(category).await?;

        let due = pricing::due_date(self.clock.today(), number_of_days)?;
        let due_date = self.format.format_long_date(due);

        Ok(Transaction::new(car, customer, due_date, amount))
    }

    /// Returns the tax table in use.
    #[must_use]
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    /// Returns the format configuration in use.
    #[must_use]
    pub fn format(&self) -> FormatConfig {
        self.format
    }

    /// Returns the selection strategy name.
    #[must_use]
    pub fn selector_name(&self) -> &'static str {
        self.selector.name()
    }
}

impl fmt::Debug for RentalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RentalService")
            .field("cars", &self.cars)
            .field("selector", &self.selector.name())
            .field("clock", &self.clock)
            .field("tax_table", &self.tax_table)
            .field("format", &self.format)
            .finish()
    }
}
