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

use crate::api::dates::parse_datetime;
use crate::api::guard;
use crate::entities::health_record;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHealthRecordRequest {
    pub record_date: String,
    pub record_type: String,
    pub title: String,
    pub value: Option<String>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

// GET /pets/:id/health
pub async fn list_health_records(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    match health_record::Entity::find()
        .filter(health_record::Column::PetId.eq(pet_id))
        .order_by_desc(health_record::Column::RecordDate)
        .all(&db)
        .await
    {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            error!("Failed to fetch health records: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// POST /pets/:id/health
pub async fn create_health_record(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
    Json(payload): Json<CreateHealthRecordRequest>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    let record_date = match parse_datetime("recordDate", &payload.record_date) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };

    let now = chrono::Utc::now().naive_utc();
    let new_record = health_record::ActiveModel {
        pet_id: Set(pet_id),
        record_date: Set(record_date),
        record_type: Set(payload.record_type),
        title: Set(payload.title),
        value: Set(payload.value),
        unit: Set(payload.unit),
        notes: Set(payload.notes),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_record.insert(&db).await {
        Ok(record) => {
            tracing::Span::current()
                .record("table", "health_records")
                .record("action", "create_health_record")
                .record("pet_id", pet_id);
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(e) => {
            error!("Failed to create health record: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
