use axum::routing::get;
use petpals_server::{app, billing::StripeClient, config::Config, migrator};
use sea_orm::Database;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    petpals_server::telemetry::init_telemetry("petpals-server");

    let config = Config::from_env().expect("missing required environment variables");

    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    // Database Connection
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    use sea_orm_migration::MigratorTrait;
    migrator::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Initialize Metrics
    petpals_server::metrics::init_metrics(&db).await;

    let stripe = StripeClient::new(&config.stripe);

    let router = app::app(db, stripe, &config)
        .layer(prometheus_layer)
        .route("/metrics", get(|| async move { metric_handle.render() }));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, router).await.unwrap();
}
