use std::env;

/// Process configuration, read once at startup and passed down. Handlers
/// never reach into the environment themselves.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_origin: String,
    pub stripe: StripeConfig,
}

#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub secret_key: String,
    pub price_id: String,
    pub api_base: String,
    /// Base URL of the web frontend; checkout redirects land under it.
    pub app_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            stripe: StripeConfig {
                secret_key: env::var("STRIPE_SECRET_KEY")?,
                price_id: env::var("STRIPE_PRICE_ID")?,
                api_base: env::var("STRIPE_API_BASE")
                    .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
                app_base_url: env::var("APP_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
        })
    }
}
