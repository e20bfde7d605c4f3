//! End-to-end tests driving the REST router in process.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use car_rental::api::rest::{AppState, create_router};
use car_rental::application::services::{FixedClock, FixedPositionSelector, RentalService};
use car_rental::domain::value_objects::{FormatConfig, TaxBracket, TaxTable};
use car_rental::infrastructure::persistence::JsonFileCarRepository;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower::ServiceExt;

fn valid_car() -> Value {
    json!({
        "id": "0c8e1a3b-7f3e-4c9e-9b1a-2f5d6e7a8b9c",
        "name": "Mustang",
        "releaseYear": 2020,
        "available": true,
        "gasAvailable": true
    })
}

fn valid_customer() -> Value {
    json!({
        "id": "b1f6e0c4-6d5d-4d83-8f2a-3c9e4a1b2c3d",
        "name": "Erick Wendel",
        "age": 50
    })
}

fn valid_category(car_ids: Value) -> Value {
    json!({
        "id": "4e2f6b8a-1c3d-4e5f-9a7b-0c1d2e3f4a5b",
        "name": "Premium",
        "price": 37.6,
        "carIds": car_ids
    })
}

struct TestApp {
    router: Router,
    _cars: NamedTempFile,
}

fn app_with(tax_table: TaxTable) -> TestApp {
    let mut cars = NamedTempFile::new().unwrap();
    cars.write_all(json!([valid_car()]).to_string().as_bytes()).unwrap();

    let service = RentalService::new(
        Arc::new(JsonFileCarRepository::new(cars.path())),
        tax_table,
        FormatConfig::default(),
    )
    .with_selector(Arc::new(FixedPositionSelector::first()))
    .with_clock(Arc::new(FixedClock::new(
        NaiveDate::from_ymd_opt(2020, 11, 5).unwrap(),
    )));

    TestApp {
        router: create_router(AppState::new(Arc::new(service))),
        _cars: cars,
    }
}

fn app() -> TestApp {
    app_with(TaxTable::standard())
}

async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map_or_else(Body::empty, |v| Body::from(v.to_string()));
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &TestApp, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

mod calculate_final_price {
    use super::*;

    #[tokio::test]
    async fn returns_formatted_amount() {
        let app = app();
        let body = json!({
            "customer": valid_customer(),
            "carCategory": valid_category(json!([valid_car()["id"]])),
            "numberOfDays": 5
        });

        let (status, response) = post(&app, "/calculateFinalPrice", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response,
            json!({ "result": FormatConfig::default().format_currency(Decimal::new(2444, 1)) })
        );
        assert_eq!(response["result"], "R$\u{a0}244,40");
    }

    #[tokio::test]
    async fn unmatched_age_is_server_error() {
        let app = app();
        let mut customer = valid_customer();
        customer["age"] = json!(12);
        let body = json!({
            "customer": customer,
            "carCategory": valid_category(json!([])),
            "numberOfDays": 5
        });

        let (status, response) = post(&app, "/calculateFinalPrice", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["kind"], "NoMatchingBracket");
    }

    #[tokio::test]
    async fn zero_days_is_invalid_input() {
        let app = app();
        let body = json!({
            "customer": valid_customer(),
            "carCategory": valid_category(json!([])),
            "numberOfDays": 0
        });

        let (status, response) = post(&app, "/calculateFinalPrice", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["kind"], "InvalidInput");
    }

    #[tokio::test]
    async fn missing_fields_are_invalid_input() {
        let app = app();

        let (status, response) =
            post(&app, "/calculateFinalPrice", json!({ "customer": valid_customer() })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["kind"], "InvalidInput");
        assert!(response["error"]["message"].as_str().unwrap().contains("carCategory"));
    }
}

mod get_available_car {
    use super::*;

    #[tokio::test]
    async fn returns_car_from_store() {
        let app = app();
        let body = json!({ "carCategory": valid_category(json!([valid_car()["id"]])) });

        let (status, response) = post(&app, "/getAvailableCar", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({ "result": valid_car() }));
    }

    #[tokio::test]
    async fn empty_category_is_server_error() {
        let app = app();
        let body = json!({ "carCategory": valid_category(json!([])) });

        let (status, response) = post(&app, "/getAvailableCar", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["kind"], "InvalidCategory");
    }

    #[tokio::test]
    async fn unknown_car_is_data_consistency() {
        let app = app();
        let body = json!({ "carCategory": valid_category(json!(["not-in-store"])) });

        let (status, response) = post(&app, "/getAvailableCar", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["kind"], "DataConsistency");
    }
}

mod rent {
    use super::*;

    #[tokio::test]
    async fn returns_transaction_receipt() {
        let app = app();
        let body = json!({
            "customer": valid_customer(),
            "carCategory": valid_category(json!([valid_car()["id"]])),
            "numberOfDays": 5
        });

        let (status, response) = post(&app, "/rent", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response,
            json!({
                "result": {
                    "customer": valid_customer(),
                    "car": valid_car(),
                    "amount": "R$\u{a0}244,40",
                    "dueDate": "10 de novembro de 2020"
                }
            })
        );
    }

    #[tokio::test]
    async fn custom_tax_table_applies() {
        let app = app_with(
            TaxTable::new(vec![TaxBracket::new(40, 60, Decimal::new(2, 0))]).unwrap(),
        );
        let body = json!({
            "customer": valid_customer(),
            "carCategory": valid_category(json!([valid_car()["id"]])),
            "numberOfDays": 1
        });

        let (status, response) = post(&app, "/rent", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["result"]["amount"], "R$\u{a0}75,20");
        assert_eq!(response["result"]["dueDate"], "6 de novembro de 2020");
    }

    #[tokio::test]
    async fn negative_days_is_invalid_input() {
        let app = app();
        let body = json!({
            "customer": valid_customer(),
            "carCategory": valid_category(json!([valid_car()["id"]])),
            "numberOfDays": -1
        });

        let (status, response) = post(&app, "/rent", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["kind"], "InvalidInput");
    }
}

mod fallback {
    use super::*;

    #[tokio::test]
    async fn unknown_route_says_hello() {
        let app = app();

        let (status, response) = send(&app, Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({ "success": "Hello, world!" }));
    }

    #[tokio::test]
    async fn wrong_method_says_hello() {
        let app = app();

        let (status, response) = send(&app, Method::GET, "/rent", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({ "success": "Hello, world!" }));
    }
}
