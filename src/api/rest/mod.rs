//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /rent` - Rent a car, returns a transaction receipt
//! - `POST /calculateFinalPrice` - Quote the formatted price of a rental
//! - `POST /getAvailableCar` - Draw an available car from a category
//!
//! Any other request is answered with `{"success": "Hello, world!"}`.
//!
//! Successful calls answer `200 {"result": ...}`. Failures answer
//! `500 {"error": {"kind": ..., "message": ...}}` and are logged.
//!
//! # Usage
//!
//! ```ignore
//! use car_rental::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = AppState::new(Arc::new(rental_service));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, AvailableCarRequest, ErrorBody, ErrorResponse, RentalRequest,
    ResultResponse,
};
pub use routes::create_router;
