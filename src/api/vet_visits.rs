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
use crate::entities::vet_visit;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVetVisitRequest {
    pub visit_date: String,
    pub reason: String,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub vet_name: Option<String>,
    pub vet_clinic: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub next_visit: Option<String>,
}

// GET /pets/:id/vet-visits
pub async fn list_vet_visits(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    match vet_visit::Entity::find()
        .filter(vet_visit::Column::PetId.eq(pet_id))
        .order_by_desc(vet_visit::Column::VisitDate)
        .all(&db)
        .await
    {
        Ok(visits) => (StatusCode::OK, Json(visits)).into_response(),
        Err(e) => {
            error!("Failed to fetch vet visits: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// POST /pets/:id/vet-visits
pub async fn create_vet_visit(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
    Json(payload): Json<CreateVetVisitRequest>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    let visit_date = match parse_datetime("visitDate", &payload.visit_date) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };
    let next_visit = match parse_optional_datetime("nextVisit", payload.next_visit.as_deref()) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };

    let now = chrono::Utc::now().naive_utc();
    let new_visit = vet_visit::ActiveModel {
        pet_id: Set(pet_id),
        visit_date: Set(visit_date),
        reason: Set(payload.reason),
        diagnosis: Set(payload.diagnosis),
        treatment: Set(payload.treatment),
        vet_name: Set(payload.vet_name),
        vet_clinic: Set(payload.vet_clinic),
        cost: Set(payload.cost),
        notes: Set(payload.notes),
        next_visit: Set(next_visit),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_visit.insert(&db).await {
        Ok(visit) => {
            tracing::Span::current()
                .record("table", "vet_visits")
                .record("action", "create_vet_visit")
                .record("pet_id", pet_id);
            (StatusCode::CREATED, Json(visit)).into_response()
        }
        Err(e) => {
            error!("Failed to create vet visit: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
