use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde_json::json;
use tracing::error;

use crate::entities::pet;

/// A pet lookup that either fails or proves ownership. Absent and
/// not-owned are indistinguishable on the wire so pet ids cannot be
/// probed for existence.
pub enum GuardError {
    NotFound,
    Db(DbErr),
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        match self {
            GuardError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Pet not found"})),
            )
                .into_response(),
            GuardError::Db(e) => {
                error!("Pet ownership lookup failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                )
                    .into_response()
            }
        }
    }
}

/// Single filtered read against pets. Every pet-scoped operation runs
/// this before touching a child table; child queries then filter by
/// pet_id alone.
pub async fn find_owned_pet(
    db: &DatabaseConnection,
    user_id: i32,
    pet_id: i32,
) -> Result<pet::Model, GuardError> {
    match pet::Entity::find_by_id(pet_id)
        .filter(pet::Column::UserId.eq(user_id))
        .one(db)
        .await
    {
        Ok(Some(p)) => Ok(p),
        Ok(None) => Err(GuardError::NotFound),
        Err(e) => Err(GuardError::Db(e)),
    }
}
