//! Payment-processor integration stub
//!
//! Wrappers around the hosted payment API's checkout-session and
//! billing-portal calls. Not exercised by any core path; the one real rule
//! here is the minimum purchase amount.

mod client;
mod server_fns;

pub use client::*;
pub use server_fns::*;

use thiserror::Error;

pub const CURRENCY: &str = "usd";
/// $5.00 in cents.
pub const MINIMUM_PURCHASE_CENTS: u64 = 500;
/// 1 credit = $0.01.
pub const CREDIT_VALUE_CENTS: u64 = 1;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("minimum purchase is ${}", MINIMUM_PURCHASE_CENTS / 100)]
    AmountBelowMinimum { amount_cents: u64 },

    #[error("STRIPE_SECRET_KEY is not configured")]
    MissingSecretKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("payment API error: {0}")]
    Api(String),
}

/// Price a credit purchase in cents, rejecting amounts below the minimum.
pub fn checkout_amount_cents(credits: u64) -> Result<u64, BillingError> {
    let amount_cents = credits * CREDIT_VALUE_CENTS;
    if amount_cents < MINIMUM_PURCHASE_CENTS {
        return Err(BillingError::AmountBelowMinimum { amount_cents });
    }
    Ok(amount_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchases_below_the_minimum_are_rejected() {
        let err = checkout_amount_cents(499).expect_err("below minimum");
        assert!(matches!(
            err,
            BillingError::AmountBelowMinimum { amount_cents: 499 }
        ));
        assert_eq!(err.to_string(), "minimum purchase is $5");
    }

    #[test]
    fn purchases_at_or_above_the_minimum_pass() {
        assert_eq!(checkout_amount_cents(500).unwrap(), 500);
        assert_eq!(checkout_amount_cents(1_250).unwrap(), 1_250);
    }
}
