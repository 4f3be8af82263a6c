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

use crate::api::guard;
use crate::entities::feeding_schedule;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedingScheduleRequest {
    pub meal_name: String,
    pub time: String,
    pub food_type: String,
    pub portion: String,
    pub is_active: Option<bool>,
}

// GET /pets/:id/feeding
pub async fn list_feeding_schedules(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    match feeding_schedule::Entity::find()
        .filter(feeding_schedule::Column::PetId.eq(pet_id))
        .order_by_asc(feeding_schedule::Column::Time)
        .all(&db)
        .await
    {
        Ok(schedules) => (StatusCode::OK, Json(schedules)).into_response(),
        Err(e) => {
            error!("Failed to fetch feeding schedules: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// POST /pets/:id/feeding
pub async fn create_feeding_schedule(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
    Json(payload): Json<CreateFeedingScheduleRequest>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    let now = chrono::Utc::now().naive_utc();
    let new_schedule = feeding_schedule::ActiveModel {
        pet_id: Set(pet_id),
        meal_name: Set(payload.meal_name),
        time: Set(payload.time),
        food_type: Set(payload.food_type),
        portion: Set(payload.portion),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_schedule.insert(&db).await {
        Ok(schedule) => {
            tracing::Span::current()
                .record("table", "feeding_schedules")
                .record("action", "create_feeding_schedule")
                .record("pet_id", pet_id);
            (StatusCode::CREATED, Json(schedule)).into_response()
        }
        Err(e) => {
            error!("Failed to create feeding schedule: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
