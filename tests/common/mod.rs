//! Shared fixtures for the integration tests.
//!
//! The handlers only ever see a `DatabaseConnection`, so the suites run
//! the real router against `sea_orm::MockDatabase`; no Postgres or
//! Stripe is needed. Query results are appended in the order the
//! handler under test issues them.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use petpals_server::app::app;
use petpals_server::billing::StripeClient;
use petpals_server::config::{Config, StripeConfig};
use petpals_server::entities::{feeding_schedule, health_record, medication, pet, photo, user, vet_visit};
use sea_orm::DatabaseConnection;

pub const USER_ID: i32 = 1;
pub const PET_ID: i32 = 7;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        port: 0,
        cors_origin: "http://localhost:3000".to_string(),
        stripe: StripeConfig {
            secret_key: "sk_test_123".to_string(),
            price_id: "price_123".to_string(),
            // No test talks to Stripe; a closed port keeps accidents loud.
            api_base: "http://127.0.0.1:9".to_string(),
            app_base_url: "http://localhost:3000".to_string(),
        },
    }
}

pub fn create_test_app(db: DatabaseConnection) -> Router {
    let config = test_config();
    let stripe = StripeClient::new(&config.stripe);
    app(db, stripe, &config)
}

fn timestamp(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn test_user(id: i32, password_hash: &str) -> user::Model {
    user::Model {
        id,
        email: format!("user{}@example.com", id),
        password_hash: password_hash.to_string(),
        name: "Test User".to_string(),
        created_at: timestamp(1, 9),
        updated_at: timestamp(1, 9),
    }
}

pub fn test_pet(id: i32, user_id: i32) -> pet::Model {
    pet::Model {
        id,
        user_id,
        name: "Rex".to_string(),
        species: "dog".to_string(),
        breed: Some("Labrador".to_string()),
        birth_date: Some(timestamp(1, 0)),
        weight: Some(28.5),
        color: Some("black".to_string()),
        microchip_id: None,
        image_url: None,
        notes: None,
        created_at: timestamp(2, 9),
        updated_at: timestamp(2, 9),
    }
}

pub fn test_vet_visit(id: i32, pet_id: i32, day: u32) -> vet_visit::Model {
    vet_visit::Model {
        id,
        pet_id,
        visit_date: timestamp(day, 10),
        reason: "Checkup".to_string(),
        diagnosis: None,
        treatment: None,
        vet_name: Some("Dr. Alvarez".to_string()),
        vet_clinic: None,
        cost: Some(75.0),
        notes: None,
        next_visit: None,
        created_at: timestamp(day, 11),
        updated_at: timestamp(day, 11),
    }
}

pub fn test_medication(id: i32, pet_id: i32, is_active: bool) -> medication::Model {
    medication::Model {
        id,
        pet_id,
        name: "Amoxicillin".to_string(),
        dosage: "50mg".to_string(),
        frequency: "daily".to_string(),
        time_of_day: "morning".to_string(),
        start_date: timestamp(3, 0),
        end_date: None,
        refill_date: None,
        is_active,
        created_at: timestamp(3, 8),
        updated_at: timestamp(3, 8),
    }
}

pub fn test_feeding_schedule(id: i32, pet_id: i32, time: &str) -> feeding_schedule::Model {
    feeding_schedule::Model {
        id,
        pet_id,
        meal_name: "Breakfast".to_string(),
        time: time.to_string(),
        food_type: "kibble".to_string(),
        portion: "1 cup".to_string(),
        is_active: true,
        created_at: timestamp(4, 7),
        updated_at: timestamp(4, 7),
    }
}

pub fn test_photo(id: i32, pet_id: i32, day: u32) -> photo::Model {
    photo::Model {
        id,
        pet_id,
        url: format!("https://cdn.example.com/photos/{}.jpg", id),
        caption: None,
        created_at: timestamp(day, 12),
    }
}

pub fn test_health_record(id: i32, pet_id: i32, day: u32) -> health_record::Model {
    health_record::Model {
        id,
        pet_id,
        record_date: timestamp(day, 9),
        record_type: "weight".to_string(),
        title: "Weigh-in".to_string(),
        value: Some("28.5".to_string()),
        unit: Some("kg".to_string()),
        notes: None,
        created_at: timestamp(day, 9),
        updated_at: timestamp(day, 9),
    }
}

pub fn session_cookie(user_id: i32) -> String {
    format!("petpals_user={}", user_id)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, session_cookie(USER_ID))
        .body(Body::empty())
        .unwrap()
}

pub fn request_unauthenticated(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, session_cookie(USER_ID))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_unauthenticated(
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
