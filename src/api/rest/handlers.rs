//! # REST Handlers
//!
//! Request decoding, response envelopes and the handlers behind each route.

use crate::application::error::{ApplicationError, ErrorKind};
use crate::application::services::RentalService;
use crate::domain::entities::{Car, CarCategory, Customer, Transaction};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The rental desk.
    pub rental_service: Arc<RentalService>,
}

impl AppState {
    /// Creates handler state around `rental_service`.
    #[must_use]
    pub fn new(rental_service: Arc<RentalService>) -> Self {
        Self { rental_service }
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Body of `POST /rent` and `POST /calculateFinalPrice`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    /// The renter.
    pub customer: Customer,
    /// Category to rent from.
    pub car_category: CarCategory,
    /// Rental length. Signed so that negative values reach validation
    /// instead of failing to decode.
    pub number_of_days: i64,
}

impl RentalRequest {
    /// Returns the rental length as a day count.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidInput` if the value is negative or
    /// does not fit in a `u32`. Zero is left for the service to reject.
    pub fn days(&self) -> Result<u32, ApplicationError> {
        u32::try_from(self.number_of_days).map_err(|_| {
            ApplicationError::validation(format!(
                "numberOfDays must be a positive integer, got {}",
                self.number_of_days
            ))
        })
    }
}

/// Body of `POST /getAvailableCar`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCarRequest {
    /// Category to draw from.
    pub car_category: CarCategory,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse<T> {
    /// Operation output.
    pub result: T,
}

/// Failure details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Error classification.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: ErrorBody,
}

impl From<&ApplicationError> for ErrorResponse {
    fn from(err: &ApplicationError) -> Self {
        Self {
            error: ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Handler error; renders as a 500 with an [`ErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(kind = %self.0.kind(), error = %self.0, "request failed");
        let body = Json(ErrorResponse::from(&self.0));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

type ApiResult<T> = Result<Json<ResultResponse<T>>, ApiError>;

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApplicationError> {
    serde_json::from_slice(body)
        .map_err(|e| ApplicationError::validation(format!("malformed request body: {e}")))
}

fn ok<T>(result: T) -> ApiResult<T> {
    Ok(Json(ResultResponse { result }))
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /rent`
///
/// # Errors
///
/// Any [`ApplicationError`] raised while decoding or renting.
pub async fn rent(State(state): State<AppState>, body: Bytes) -> ApiResult<Transaction> {
    let request: RentalRequest = decode(&body)?;
    let days = request.days()?;
    let transaction = state
        .rental_service
        .create_rental(request.customer, &request.car_category, days)
        .await?;
    ok(transaction)
}

/// `POST /calculateFinalPrice`
///
/// # Errors
///
/// Any [`ApplicationError`] raised while decoding or quoting.
pub async fn calculate_final_price(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<String> {
    let request: RentalRequest = decode(&body)?;
    let days = request.days()?;
    let price =
        state
            .rental_service
            .quote_price(&request.car_category, &request.customer, days)?;
    ok(price)
}

/// `POST /getAvailableCar`
///
/// # Errors
///
/// Any [`ApplicationError`] raised while decoding or selecting.
pub async fn get_available_car(State(state): State<AppState>, body: Bytes) -> ApiResult<Car> {
    let request: AvailableCarRequest = decode(&body)?;
    let car = state
        .rental_service
        .select_car(&request.car_category)
        .await?;
    ok(car)
}

/// Answers every unrouted request.
pub async fn hello() -> Json<Value> {
    Json(json!({ "success": "Hello, world!" }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rental_request_decodes_camel_case() {
        let request: RentalRequest = decode(
            br#"{
                "customer": {"id": "c1", "age": 30},
                "carCategory": {"price": 37.6, "carIds": ["a"]},
                "numberOfDays": 5
            }"#,
        )
        .unwrap();

        assert_eq!(request.customer.age(), 30);
        assert_eq!(request.car_category.car_ids().len(), 1);
        assert_eq!(request.days().unwrap(), 5);
    }

    #[test]
    fn negative_days_is_invalid_input() {
        let request: RentalRequest = decode(
            br#"{"customer": {"age": 30}, "carCategory": {"price": 1}, "numberOfDays": -2}"#,
        )
        .unwrap();

        let err = request.days().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn malformed_body_is_invalid_input() {
        let err = decode::<AvailableCarRequest>(b"{").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = decode::<AvailableCarRequest>(br#"{"carCategory": {}}"#).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn error_response_shape() {
        let err = ApplicationError::no_matching_bracket(12);
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(value["error"]["kind"], "NoMatchingBracket");
        assert_eq!(
            value["error"]["message"],
            "no tax bracket matches customer age 12"
        );
    }

    #[test]
    fn api_error_is_server_error() {
        let response = ApiError::from(ApplicationError::internal("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
