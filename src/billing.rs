use serde::Deserialize;
use uuid::Uuid;

use crate::config::StripeConfig;

/// Checkout-session slice of the Stripe API. Only the fields the
/// handlers read are deserialized.
#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

#[derive(Debug)]
pub enum StripeError {
    Request(reqwest::Error),
    Api { status: u16, body: String },
}

impl std::fmt::Display for StripeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StripeError::Request(e) => write!(f, "stripe request failed: {}", e),
            StripeError::Api { status, body } => {
                write!(f, "stripe api returned {}: {}", status, body)
            }
        }
    }
}

impl From<reqwest::Error> for StripeError {
    fn from(e: reqwest::Error) -> Self {
        StripeError::Request(e)
    }
}

#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    price_id: String,
    api_base: String,
    success_url: String,
    cancel_url: String,
}

impl StripeClient {
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
            price_id: config.price_id.clone(),
            api_base: config.api_base.clone(),
            success_url: format!("{}/dashboard/billing?success=true", config.app_base_url),
            cancel_url: format!("{}/dashboard/billing?canceled=true", config.app_base_url),
        }
    }

    /// Create a subscription-mode checkout session. The user id rides
    /// along as opaque metadata; Stripe echoes it back on webhook
    /// events handled outside this service.
    pub async fn create_subscription_checkout(
        &self,
        user_id: i32,
        customer_email: &str,
    ) -> Result<CheckoutSession, StripeError> {
        let params = self.checkout_params(user_id, customer_email);
        let idempotency_key = Uuid::new_v4().to_string();

        let response = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", &idempotency_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StripeError::Api { status, body });
        }

        Ok(response.json::<CheckoutSession>().await?)
    }

    fn checkout_params(&self, user_id: i32, customer_email: &str) -> Vec<(String, String)> {
        vec![
            ("mode".into(), "subscription".into()),
            ("payment_method_types[0]".into(), "card".into()),
            ("line_items[0][price]".into(), self.price_id.clone()),
            ("line_items[0][quantity]".into(), "1".into()),
            ("customer_email".into(), customer_email.into()),
            ("success_url".into(), self.success_url.clone()),
            ("cancel_url".into(), self.cancel_url.clone()),
            ("metadata[userId]".into(), user_id.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> StripeClient {
        StripeClient::new(&StripeConfig {
            secret_key: "sk_test_123".to_string(),
            price_id: "price_123".to_string(),
            api_base: "https://api.stripe.com".to_string(),
            app_base_url: "https://petpals.example".to_string(),
        })
    }

    #[test]
    fn checkout_params_carry_price_email_and_metadata() {
        let params = test_client().checkout_params(42, "rex@example.com");
        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("mode"), Some("subscription"));
        assert_eq!(get("line_items[0][price]"), Some("price_123"));
        assert_eq!(get("line_items[0][quantity]"), Some("1"));
        assert_eq!(get("customer_email"), Some("rex@example.com"));
        assert_eq!(get("metadata[userId]"), Some("42"));
        assert_eq!(
            get("success_url"),
            Some("https://petpals.example/dashboard/billing?success=true")
        );
        assert_eq!(
            get("cancel_url"),
            Some("https://petpals.example/dashboard/billing?canceled=true")
        );
    }
}
