mod common;

use axum::http::{Method, StatusCode};
use common::*;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::json;
use tower::ServiceExt;

fn insert_ok(id: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: id,
        rows_affected: 1,
    }
}

#[tokio::test]
async fn sub_resource_listing_requires_pet_ownership() {
    for uri in [
        "/pets/7/vet-visits",
        "/pets/7/medications",
        "/pets/7/feeding",
        "/pets/7/photos",
        "/pets/7/health",
    ] {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<petpals_server::entities::pet::Model>::new()])
            .into_connection();
        let app = create_test_app(db.clone());

        let response = app.oneshot(request(Method::GET, uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "Pet not found");
        // Only the guard ran; the child table was never read.
        assert_eq!(db.into_transaction_log().len(), 1, "{}", uri);
    }
}

#[tokio::test]
async fn list_vet_visits_orders_by_visit_date_desc() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![
            test_vet_visit(2, PET_ID, 20),
            test_vet_visit(1, PET_ID, 11),
        ]])
        .into_connection();
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(request(Method::GET, "/pets/7/vet-visits"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["id"], 2);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains(r#""visit_date" DESC"#));
}

#[tokio::test]
async fn create_vet_visit_with_bad_date_writes_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .into_connection();
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/vet-visits",
            json!({"visitDate": "yesterday-ish", "reason": "Checkup"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Invalid visitDate");
    // Guard select only; no INSERT reached the store.
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn create_vet_visit_coerces_dates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![test_vet_visit(1, PET_ID, 20)]])
        .append_exec_results([insert_ok(1)])
        .into_connection();
    let app = create_test_app(db);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/vet-visits",
            json!({"visitDate": "2024-03-20", "reason": "Checkup", "cost": 75.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["petId"], PET_ID);
    assert_eq!(body["reason"], "Checkup");
}

#[tokio::test]
async fn create_medication_defaults_to_active() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![test_medication(1, PET_ID, true)]])
        .append_exec_results([insert_ok(1)])
        .into_connection();
    let db_handle = db.clone();
    let app = create_test_app(db);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/medications",
            json!({
                "name": "Amoxicillin",
                "dosage": "50mg",
                "frequency": "daily",
                "timeOfDay": "morning",
                "startDate": "2024-01-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["petId"], PET_ID);
    assert_eq!(body["isActive"], true);
    assert_eq!(body["name"], "Amoxicillin");
    // The coerced timestamp is what went to the store.
    let log = format!("{:?}", db_handle.into_transaction_log());
    assert!(log.contains("2024-01-01"));
}

#[tokio::test]
async fn create_medication_with_bad_refill_date_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .into_connection();
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/medications",
            json!({
                "name": "Amoxicillin",
                "dosage": "50mg",
                "frequency": "daily",
                "timeOfDay": "morning",
                "startDate": "2024-01-01",
                "refillDate": "whenever"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Invalid refillDate");
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn list_medications_orders_by_created_at_desc() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![
            test_medication(1, PET_ID, true),
            test_medication(2, PET_ID, false),
        ]])
        .into_connection();
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(request(Method::GET, "/pets/7/medications"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // The full list includes inactive medications, unlike the detail view.
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains(r#""created_at" DESC"#));
}

#[tokio::test]
async fn list_feeding_schedules_orders_by_time_asc() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![
            test_feeding_schedule(1, PET_ID, "08:00"),
            test_feeding_schedule(2, PET_ID, "18:00"),
        ]])
        .into_connection();
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(request(Method::GET, "/pets/7/feeding"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains(r#""time" ASC"#));
}

#[tokio::test]
async fn create_feeding_schedule_defaults_to_active() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![test_feeding_schedule(1, PET_ID, "08:00")]])
        .append_exec_results([insert_ok(1)])
        .into_connection();
    let app = create_test_app(db);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/feeding",
            json!({"mealName": "Breakfast", "time": "08:00", "foodType": "kibble", "portion": "1 cup"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["isActive"], true);
    assert_eq!(body["petId"], PET_ID);
}

#[tokio::test]
async fn create_photo_takes_pet_id_from_path() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![test_photo(1, PET_ID, 5)]])
        .append_exec_results([insert_ok(1)])
        .into_connection();
    let app = create_test_app(db);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/photos",
            // A petId in the payload is ignored; the path wins.
            json!({"url": "https://cdn.example.com/photos/1.jpg", "petId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["petId"], PET_ID);
}

#[tokio::test]
async fn create_health_record_coerces_record_date() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .append_query_results([vec![test_health_record(1, PET_ID, 6)]])
        .append_exec_results([insert_ok(1)])
        .into_connection();
    let app = create_test_app(db);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/health",
            json!({"recordDate": "2024-03-06", "recordType": "weight", "title": "Weigh-in"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["recordType"], "weight");
}

#[tokio::test]
async fn create_health_record_with_bad_date_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_pet(PET_ID, USER_ID)]])
        .into_connection();
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/pets/7/health",
            json!({"recordDate": "spring", "recordType": "weight", "title": "Weigh-in"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Invalid recordDate");
    assert_eq!(db.into_transaction_log().len(), 1);
}
