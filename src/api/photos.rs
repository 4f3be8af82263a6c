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
use crate::entities::photo;

#[derive(Deserialize)]
pub struct CreatePhotoRequest {
    pub url: String,
    pub caption: Option<String>,
}

// GET /pets/:id/photos
pub async fn list_photos(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    match photo::Entity::find()
        .filter(photo::Column::PetId.eq(pet_id))
        .order_by_desc(photo::Column::CreatedAt)
        .all(&db)
        .await
    {
        Ok(photos) => (StatusCode::OK, Json(photos)).into_response(),
        Err(e) => {
            error!("Failed to fetch photos: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// POST /pets/:id/photos
pub async fn create_photo(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
    Json(payload): Json<CreatePhotoRequest>,
) -> Response {
    if let Err(e) = guard::find_owned_pet(&db, user_id, pet_id).await {
        return e.into_response();
    }

    let new_photo = photo::ActiveModel {
        pet_id: Set(pet_id),
        url: Set(payload.url),
        caption: Set(payload.caption),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    match new_photo.insert(&db).await {
        Ok(photo) => {
            tracing::Span::current()
                .record("table", "photos")
                .record("action", "create_photo")
                .record("pet_id", pet_id);
            (StatusCode::CREATED, Json(photo)).into_response()
        }
        Err(e) => {
            error!("Failed to create photo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
