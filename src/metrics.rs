use crate::entities::{pet, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

/// Seed the gauges from the store at startup so restarts don't zero the
/// dashboards. Handlers keep them current afterwards.
pub async fn init_metrics(db: &DatabaseConnection) {
    let user_count = user::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("petpals_users_total").set(user_count as f64);

    let pet_count = pet::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("petpals_pets_total").set(pet_count as f64);

    // Per-user pet counts. A join with GROUP BY would do this in one
    // query; looping is fine at the cardinality this app sees.
    let users = user::Entity::find().all(db).await.unwrap_or_default();
    for u in users {
        let count = pet::Entity::find()
            .filter(pet::Column::UserId.eq(u.id))
            .count(db)
            .await
            .unwrap_or(0);
        metrics::gauge!("petpals_user_pets_total", "name" => u.name).set(count as f64);
    }

    tracing::info!(
        "Initialized metrics: Users={}, Pets={}",
        user_count,
        pet_count
    );
}

pub async fn increment_user_pets(db: &DatabaseConnection, user_id: i32) {
    if let Ok(Some(u)) = user::Entity::find_by_id(user_id).one(db).await {
        metrics::gauge!("petpals_user_pets_total", "name" => u.name).increment(1.0);
    }
}
