//! HTTP client for the hosted payment API
//!
//! Form-encoded requests against the Stripe REST surface, bearer-authed with
//! the configured secret key.

use serde::{de::DeserializeOwned, Deserialize};

use crate::config::AppConfig;
use crate::types::Tier;

use super::{BillingError, CURRENCY};

const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

/// Inputs for a checkout-session creation call.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutParams {
    pub user_id: String,
    pub credits: u64,
    pub tier: Tier,
    pub amount_cents: u64,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Redirect target; absent until the session is ready to be paid.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortalSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the payment processor's REST API.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    endpoint: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: STRIPE_API_URL.to_string(),
            secret_key: secret_key.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BillingError> {
        let key = config
            .stripe_secret_key
            .as_deref()
            .ok_or(BillingError::MissingSecretKey)?;
        Ok(Self::new(key))
    }

    /// Override the API endpoint (tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Create a hosted checkout session and return it, redirect URL included.
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutParams,
    ) -> Result<CheckoutSession, BillingError> {
        self.post_form("/checkout/sessions", &checkout_form(params))
            .await
    }

    /// Create a billing-portal session for an existing customer.
    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, BillingError> {
        let form = vec![
            ("customer".to_string(), customer_id.to_string()),
            ("return_url".to_string(), return_url.to_string()),
        ];
        self.post_form("/billing_portal/sessions", &form).await
    }

    async fn post_form<R>(&self, path: &str, form: &[(String, String)]) -> Result<R, BillingError>
    where
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.endpoint, path))
            .bearer_auth(&self.secret_key)
            .form(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ApiErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(BillingError::Api(message));
        }

        Ok(response.json().await?)
    }
}

/// Flatten checkout parameters into Stripe's bracketed form encoding.
fn checkout_form(params: &CheckoutParams) -> Vec<(String, String)> {
    vec![
        ("mode".to_string(), "payment".to_string()),
        (
            "payment_method_types[0]".to_string(),
            "card".to_string(),
        ),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
        (
            "line_items[0][price_data][currency]".to_string(),
            CURRENCY.to_string(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            params.amount_cents.to_string(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            format!("{} Credits", params.credits),
        ),
        (
            "line_items[0][price_data][product_data][description]".to_string(),
            format!("Purchase {} credits for Hi-API services", params.credits),
        ),
        ("success_url".to_string(), params.success_url.clone()),
        ("cancel_url".to_string(), params.cancel_url.clone()),
        ("metadata[userId]".to_string(), params.user_id.clone()),
        (
            "metadata[credits]".to_string(),
            params.credits.to_string(),
        ),
        (
            "metadata[tier]".to_string(),
            params.tier.id().to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CheckoutParams {
        CheckoutParams {
            user_id: "demo-user".to_string(),
            credits: 1_000,
            tier: Tier::Pro,
            amount_cents: 1_000,
            success_url: "http://localhost:8080/credits/success".to_string(),
            cancel_url: "http://localhost:8080/credits".to_string(),
        }
    }

    fn field<'a>(form: &'a [(String, String)], key: &str) -> &'a str {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing form field {key}"))
    }

    #[test]
    fn checkout_form_carries_amount_and_metadata() {
        let form = checkout_form(&params());

        assert_eq!(field(&form, "mode"), "payment");
        assert_eq!(field(&form, "line_items[0][price_data][currency]"), "usd");
        assert_eq!(field(&form, "line_items[0][price_data][unit_amount]"), "1000");
        assert_eq!(
            field(&form, "line_items[0][price_data][product_data][name]"),
            "1000 Credits"
        );
        assert_eq!(field(&form, "metadata[userId]"), "demo-user");
        assert_eq!(field(&form, "metadata[credits]"), "1000");
        assert_eq!(field(&form, "metadata[tier]"), "pro");
    }

    #[test]
    fn client_requires_a_secret_key() {
        let config = AppConfig {
            app_url: String::new(),
            stripe_secret_key: None,
            database_url: None,
            google: Default::default(),
            github: Default::default(),
        };
        assert!(matches!(
            StripeClient::from_config(&config),
            Err(BillingError::MissingSecretKey)
        ));
    }
}
