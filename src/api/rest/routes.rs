//! # REST Routes
//!
//! Router construction for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

/// Creates the REST API router.
///
/// Each rental operation answers `POST` only; any other method on those
/// paths, and any other path, gets the greeting.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rent", post(handlers::rent).fallback(handlers::hello))
        .route(
            "/calculateFinalPrice",
            post(handlers::calculate_final_price).fallback(handlers::hello),
        )
        .route(
            "/getAvailableCar",
            post(handlers::get_available_car).fallback(handlers::hello),
        )
        .fallback(handlers::hello)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
