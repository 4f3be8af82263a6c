use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::api::dates::{parse_datetime, parse_optional_datetime};
use crate::api::guard;
use crate::entities::medication;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicationRequest {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time_of_day: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub refill_date: Option<String>,
    pub is_active: Option<bool>,
}

// GET /pets/:id/medications
pub async fn list_medications(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    match medication::Entity::find()
        .filter(medication::Column::PetId.eq(pet_id))
        .order_by_desc(medication::Column::CreatedAt)
        .all(&db)
        .await
    {
        Ok(medications) => (StatusCode::OK, Json(medications)).into_response(),
        Err(e) => {
            error!("Failed to fetch medications: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// POST /pets/:id/medications
pub async fn create_medication(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
    Json(payload): Json<CreateMedicationRequest>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    let start_date = match parse_datetime("startDate", &payload.start_date) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };
    let end_date = match parse_optional_datetime("endDate", payload.end_date.as_deref()) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };
    let refill_date = match parse_optional_datetime("refillDate", payload.refill_date.as_deref()) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };

    let now = chrono::Utc::now().naive_utc();
    let new_medication = medication::ActiveModel {
        pet_id: Set(pet_id),
        name: Set(payload.name),
        dosage: Set(payload.dosage),
        frequency: Set(payload.frequency),
        time_of_day: Set(payload.time_of_day),
        start_date: Set(start_date),
        end_date: Set(end_date),
        refill_date: Set(refill_date),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_medication.insert(&db).await {
        Ok(medication) => {
            tracing::Span::current()
                .record("table", "medications")
                .record("action", "create_medication")
                .record("pet_id", pet_id);
            (StatusCode::CREATED, Json(medication)).into_response()
        }
        Err(e) => {
            error!("Failed to create medication: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
