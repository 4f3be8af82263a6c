use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use tracing::error;

use crate::billing::StripeClient;
use crate::entities::user;

// POST /stripe/checkout
pub async fn create_checkout_session(
    Extension(db): Extension<DatabaseConnection>,
    Extension(stripe): Extension<StripeClient>,
    Extension(user_id): Extension<i32>,
) -> Response {
    // The cookie only carries the id; the email Stripe wants lives in
    // the users row.
    let user = match user::Entity::find_by_id(user_id).one(&db).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Unauthorized"})),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    match stripe
        .create_subscription_checkout(user.id, &user.email)
        .await
    {
        Ok(session) => {
            tracing::Span::current()
                .record("action", "create_checkout_session")
                .record("user_id", user.id)
                .record("business_event", "Checkout session created");
            metrics::counter!("petpals_checkout_sessions_total").increment(1);

            (StatusCode::OK, Json(json!({"url": session.url}))).into_response()
        }
        Err(e) => {
            error!("Stripe checkout error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to create checkout session"})),
            )
                .into_response()
        }
    }
}
