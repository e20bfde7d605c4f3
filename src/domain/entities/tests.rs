//! Serialization tests shared by the entity types.

#![allow(clippy::unwrap_used)]

use super::*;
use crate::domain::value_objects::{CarId, Price};
use rust_decimal::Decimal;
use serde_json::json;

fn sample_car_json() -> serde_json::Value {
    json!({
        "id": "63e2fa4b-5bc2-4a6c-8d1c-1c1d7b2a9f10",
        "name": "Mustang",
        "releaseYear": 2018,
        "available": true,
        "gasAvailable": true
    })
}

#[test]
fn car_round_trips_unknown_fields() {
    let value = sample_car_json();
    let car: Car = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(car.id(), &CarId::new("63e2fa4b-5bc2-4a6c-8d1c-1c1d7b2a9f10"));
    assert_eq!(car.attributes().len(), 4);
    assert_eq!(serde_json::to_value(&car).unwrap(), value);
}

#[test]
fn car_requires_id() {
    assert!(serde_json::from_value::<Car>(json!({"name": "Mustang"})).is_err());
}

#[test]
fn category_reads_camel_case_fields() {
    let category: CarCategory = serde_json::from_value(json!({
        "id": "cat-1",
        "name": "Premium",
        "carIds": ["a", "b", "c"],
        "price": 37.6
    }))
    .unwrap();

    assert_eq!(category.price().get(), Decimal::new(376, 1));
    assert_eq!(
        category.car_ids(),
        &[CarId::new("a"), CarId::new("b"), CarId::new("c")]
    );
    assert_eq!(category.label(), Some("Premium"));
}

#[test]
fn category_without_car_ids_is_empty() {
    let category: CarCategory = serde_json::from_value(json!({"price": 10})).unwrap();
    assert!(category.car_ids().is_empty());
    assert_eq!(category.label(), None);
}

#[test]
fn category_rejects_non_positive_price() {
    let result = serde_json::from_value::<CarCategory>(json!({"price": 0, "carIds": ["a"]}));
    assert!(result.is_err());
}

#[test]
fn category_builders() {
    let category = CarCategory::new(Price::new(Decimal::ONE).unwrap(), vec![CarId::new("x")])
        .with_field("id", "cat-9");
    assert_eq!(category.car_ids().len(), 1);
    assert_eq!(category.price().get(), Decimal::ONE);
    assert_eq!(category.label(), Some("cat-9"));
}

#[test]
fn customer_keeps_extra_fields() {
    let value = json!({"id": "u-1", "name": "Erick", "age": 50});
    let customer: Customer = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(customer.age(), 50);
    assert_eq!(serde_json::to_value(&customer).unwrap(), value);
}

#[test]
fn customer_rejects_negative_age() {
    assert!(serde_json::from_value::<Customer>(json!({"age": -1})).is_err());
}

#[test]
fn transaction_serializes_camel_case() {
    let car = Car::new(CarId::new("c1")).with_attribute("name", "Fusca");
    let customer = Customer::new(30).with_field("name", "Ana");
    let transaction = Transaction::new(
        car,
        customer,
        "10 de novembro de 2020".to_string(),
        "R$\u{a0}244,40".to_string(),
    );

    let value = serde_json::to_value(&transaction).unwrap();
    assert_eq!(
        value,
        json!({
            "car": {"id": "c1", "name": "Fusca"},
            "customer": {"age": 30, "name": "Ana"},
            "dueDate": "10 de novembro de 2020",
            "amount": "R$\u{a0}244,40"
        })
    );
}
