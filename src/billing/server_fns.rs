//! Server functions wrapping the payment API

use dioxus::prelude::*;

use super::{checkout_amount_cents, CheckoutParams, StripeClient};
use crate::config::AppConfig;
use crate::types::Tier;

/// Create a checkout session for a credit purchase and return the redirect
/// URL. Rejects purchases below the minimum amount.
#[server]
pub async fn create_checkout_session(
    user_id: String,
    credits: u64,
    tier: String,
) -> Result<String, ServerFnError> {
    let config = AppConfig::from_env();

    let amount_cents =
        checkout_amount_cents(credits).map_err(|e| ServerFnError::new(e.to_string()))?;

    let client =
        StripeClient::from_config(&config).map_err(|e| ServerFnError::new(e.to_string()))?;

    let params = CheckoutParams {
        user_id,
        credits,
        tier: Tier::from_id(&tier),
        amount_cents,
        success_url: format!(
            "{}/credits/success?session_id={{CHECKOUT_SESSION_ID}}",
            config.app_url
        ),
        cancel_url: format!("{}/credits", config.app_url),
    };

    let session = client
        .create_checkout_session(&params)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .url
        .ok_or_else(|| ServerFnError::new("checkout session has no redirect URL"))
}

/// Create a billing-portal session for an existing customer and return its
/// URL.
#[server]
pub async fn create_portal_session(customer_id: String) -> Result<String, ServerFnError> {
    let config = AppConfig::from_env();
    let return_url = format!("{}/credits", config.app_url);

    let client =
        StripeClient::from_config(&config).map_err(|e| ServerFnError::new(e.to_string()))?;

    let session = client
        .create_portal_session(&customer_id, &return_url)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(session.url)
}
