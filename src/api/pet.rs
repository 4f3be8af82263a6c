use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Serialize;
use serde_json::json;

use crate::api::dates::parse_optional_datetime;
use crate::api::guard;
use crate::entities::{feeding_schedule, health_record, medication, pet, photo, vet_visit};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    name: String,
    species: String,
    breed: Option<String>,
    birth_date: Option<String>,
    weight: Option<f64>,
    color: Option<String>,
    microchip_id: Option<String>,
    image_url: Option<String>,
    notes: Option<String>,
}

#[derive(Serialize)]
pub struct PetCounts {
    #[serde(rename = "vetVisits")]
    pub vet_visits: u64,
    pub medications: u64,
    pub photos: u64,
}

#[derive(Serialize)]
pub struct PetWithCounts {
    #[serde(flatten)]
    pub pet: pet::Model,
    #[serde(rename = "_count")]
    pub count: PetCounts,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetailResponse {
    #[serde(flatten)]
    pub pet: pet::Model,
    pub vet_visits: Vec<vet_visit::Model>,
    pub medications: Vec<medication::Model>,
    pub feeding_schedules: Vec<feeding_schedule::Model>,
    pub photos: Vec<photo::Model>,
    pub health_records: Vec<health_record::Model>,
}

pub async fn list_user_pets(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
) -> Response {
    let pets = match pet::Entity::find()
        .filter(pet::Column::UserId.eq(user_id))
        .order_by_desc(pet::Column::CreatedAt)
        .all(&db)
        .await
    {
        Ok(pets) => pets,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let mut response = Vec::with_capacity(pets.len());
    for p in pets {
        let vet_visits = match vet_visit::Entity::find()
            .filter(vet_visit::Column::PetId.eq(p.id))
            .count(&db)
            .await
        {
            Ok(n) => n,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                )
                    .into_response()
            }
        };
        let medications = match medication::Entity::find()
            .filter(medication::Column::PetId.eq(p.id))
            .count(&db)
            .await
        {
            Ok(n) => n,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                )
                    .into_response()
            }
        };
        let photos = match photo::Entity::find()
            .filter(photo::Column::PetId.eq(p.id))
            .count(&db)
            .await
        {
            Ok(n) => n,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                )
                    .into_response()
            }
        };

        response.push(PetWithCounts {
            pet: p,
            count: PetCounts {
                vet_visits,
                medications,
                photos,
            },
        });
    }

    (StatusCode::OK, Json(response)).into_response()
}

pub async fn create_pet(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Json(payload): Json<CreatePetRequest>,
) -> Response {
    let birth_date = match parse_optional_datetime("birthDate", payload.birth_date.as_deref()) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };

    let now = chrono::Utc::now().naive_utc();
    let new_pet = pet::ActiveModel {
        user_id: Set(user_id),
        name: Set(payload.name),
        species: Set(payload.species),
        breed: Set(payload.breed),
        birth_date: Set(birth_date),
        weight: Set(payload.weight),
        color: Set(payload.color),
        microchip_id: Set(payload.microchip_id),
        image_url: Set(payload.image_url),
        notes: Set(payload.notes),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_pet.insert(&db).await {
        Ok(pet) => {
            tracing::Span::current()
                .record("table", "pets")
                .record("action", "create_pet")
                .record("user_id", user_id)
                .record("pet_id", pet.id)
                .record("business_event", "Pet created");

            metrics::gauge!("petpals_pets_total").increment(1.0);
            crate::metrics::increment_user_pets(&db, user_id).await;

            (StatusCode::CREATED, Json(pet)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn get_pet_detail(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    let pet = match guard::find_owned_pet(&db, user_id, pet_id).await {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };

    let vet_visits = match vet_visit::Entity::find()
        .filter(vet_visit::Column::PetId.eq(pet_id))
        .order_by_desc(vet_visit::Column::VisitDate)
        .limit(5)
        .all(&db)
        .await
    {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let medications = match medication::Entity::find()
        .filter(medication::Column::PetId.eq(pet_id))
        .filter(medication::Column::IsActive.eq(true))
        .all(&db)
        .await
    {
        Ok(m) => m,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let feeding_schedules = match feeding_schedule::Entity::find()
        .filter(feeding_schedule::Column::PetId.eq(pet_id))
        .filter(feeding_schedule::Column::IsActive.eq(true))
        .all(&db)
        .await
    {
        Ok(f) => f,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let photos = match photo::Entity::find()
        .filter(photo::Column::PetId.eq(pet_id))
        .order_by_desc(photo::Column::CreatedAt)
        .limit(10)
        .all(&db)
        .await
    {
        Ok(p) => p,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    let health_records = match health_record::Entity::find()
        .filter(health_record::Column::PetId.eq(pet_id))
        .order_by_desc(health_record::Column::RecordDate)
        .limit(10)
        .all(&db)
        .await
    {
        Ok(h) => h,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    (
        StatusCode::OK,
        Json(PetDetailResponse {
            pet,
            vet_visits,
            medications,
            feeding_schedules,
            photos,
            health_records,
        }),
    )
        .into_response()
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    name: Option<String>,
    species: Option<String>,
    breed: Option<String>,
    birth_date: Option<String>,
    weight: Option<f64>,
    color: Option<String>,
    microchip_id: Option<String>,
    image_url: Option<String>,
    notes: Option<String>,
}

pub async fn update_pet(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
    Json(payload): Json<UpdatePetRequest>,
) -> Response {
    let pet = match guard::find_owned_pet(&db, user_id, pet_id).await {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };

    let birth_date = match parse_optional_datetime("birthDate", payload.birth_date.as_deref()) {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };

    let mut active_pet = pet.into_active_model();
    if let Some(name) = payload.name {
        active_pet.name = Set(name);
    }
    if let Some(species) = payload.species {
        active_pet.species = Set(species);
    }
    if let Some(breed) = payload.breed {
        active_pet.breed = Set(Some(breed));
    }
    if let Some(d) = birth_date {
        active_pet.birth_date = Set(Some(d));
    }
    if let Some(weight) = payload.weight {
        active_pet.weight = Set(Some(weight));
    }
    if let Some(color) = payload.color {
        active_pet.color = Set(Some(color));
    }
    if let Some(microchip_id) = payload.microchip_id {
        active_pet.microchip_id = Set(Some(microchip_id));
    }
    if let Some(image_url) = payload.image_url {
        active_pet.image_url = Set(Some(image_url));
    }
    if let Some(notes) = payload.notes {
        active_pet.notes = Set(Some(notes));
    }
    active_pet.updated_at = Set(chrono::Utc::now().naive_utc());

    match active_pet.update(&db).await {
        Ok(p) => (StatusCode::OK, Json(p)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

// Ownership-filtered delete. Deleting an absent or foreign pet succeeds
// with zero effect, so repeat deletes are safe and ids cannot be probed.
pub async fn delete_pet(
    Extension(db): Extension<DatabaseConnection>,
    Extension(user_id): Extension<i32>,
    Path(pet_id): Path<i32>,
) -> Response {
    match pet::Entity::delete_many()
        .filter(pet::Column::Id.eq(pet_id))
        .filter(pet::Column::UserId.eq(user_id))
        .exec(&db)
        .await
    {
        Ok(res) => {
            if res.rows_affected > 0 {
                tracing::Span::current()
                    .record("table", "pets")
                    .record("action", "delete_pet")
                    .record("user_id", user_id)
                    .record("pet_id", pet_id);
                metrics::gauge!("petpals_pets_total").decrement(res.rows_affected as f64);
            }
            (StatusCode::OK, Json(json!({"success": true}))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
