use axum::{
    routing::{get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;

use crate::{api, billing::StripeClient, config::Config};

async fn health_check() -> &'static str {
    "OK"
}

/// Build the application router. The binary wraps this with the
/// Prometheus layer and /metrics route; tests drive it directly.
pub fn app(db: DatabaseConnection, stripe: StripeClient, config: &Config) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login))
        .route("/logout", post(api::auth::logout));

    let protected_routes = Router::new()
        .route(
            "/users",
            get(api::user::get_user)
                .patch(api::user::update_user)
                .delete(api::user::delete_user),
        )
        .route(
            "/pets",
            get(api::pet::list_user_pets).post(api::pet::create_pet),
        )
        .route(
            "/pets/:id",
            get(api::pet::get_pet_detail)
                .put(api::pet::update_pet)
                .delete(api::pet::delete_pet),
        )
        .route(
            "/pets/:id/vet-visits",
            get(api::vet_visits::list_vet_visits).post(api::vet_visits::create_vet_visit),
        )
        .route(
            "/pets/:id/medications",
            get(api::medications::list_medications).post(api::medications::create_medication),
        )
        .route(
            "/pets/:id/feeding",
            get(api::feeding::list_feeding_schedules).post(api::feeding::create_feeding_schedule),
        )
        .route(
            "/pets/:id/photos",
            get(api::photos::list_photos).post(api::photos::create_photo),
        )
        .route(
            "/pets/:id/health",
            get(api::health_records::list_health_records)
                .post(api::health_records::create_health_record),
        )
        .route(
            "/stripe/checkout",
            post(api::billing::create_checkout_session),
        )
        .route_layer(axum::middleware::from_fn(api::middleware::auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(Extension(db))
        .layer(Extension(stripe))
        .layer(tower_cookies::CookieManagerLayer::new())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched| matched.as_str());

                    // Span name "METHOD /path" (e.g. "POST /pets")
                    let span_name = if let Some(path) = matched_path {
                        format!("{} {}", request.method(), path)
                    } else {
                        format!("{} {}", request.method(), request.uri().path())
                    };

                    let user_ip = request
                        .headers()
                        .get("x-forwarded-for")
                        .and_then(|v| v.to_str().ok())
                        .or_else(|| {
                            request
                                .headers()
                                .get("x-real-ip")
                                .and_then(|v| v.to_str().ok())
                        })
                        .unwrap_or("unknown");

                    // Fields left Empty are filled in by handlers.
                    tracing::info_span!(
                        "request",
                        "otel.name" = span_name,
                        user_ip = user_ip,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        table = tracing::field::Empty,
                        action = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                        user_email = tracing::field::Empty,
                        pet_id = tracing::field::Empty,
                        business_event = tracing::field::Empty,
                        error = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency = tracing::field::Empty,
                    )
                })
                .on_request(
                    |_request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                        // keep request start quiet; the completion event carries everything
                    },
                )
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", tracing::field::display(response.status()));
                        span.record("latency", tracing::field::debug(latency));

                        tracing::info!("request completed");
                    },
                ),
        )
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(
                    config
                        .cors_origin
                        .parse::<axum::http::HeaderValue>()
                        .expect("invalid CORS_ORIGIN"),
                )
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::PATCH,
                    axum::http::Method::DELETE,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .allow_credentials(true),
        )
}
