//! Session enrichment strategy
//!
//! Selected once at startup from configuration: with a database connection
//! the stateless token profile is enriched with the stored credit balance
//! and tier; without one the profile passes through unchanged. Database
//! errors are swallowed with a warning and the unenriched session is used.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::types::{Tier, UserProfile};

pub enum SessionEnrichment {
    Database(PgPool),
    Stateless,
}

impl SessionEnrichment {
    /// Pick the variant for this process. A configured-but-unreachable
    /// database degrades to stateless rather than failing startup.
    pub async fn from_config(config: &AppConfig) -> Self {
        let Some(url) = &config.database_url else {
            return SessionEnrichment::Stateless;
        };

        match PgPoolOptions::new().max_connections(2).connect(url).await {
            Ok(pool) => SessionEnrichment::Database(pool),
            Err(err) => {
                tracing::warn!("database not available, using stateless sessions: {err}");
                SessionEnrichment::Stateless
            }
        }
    }

    /// Attach the stored credit balance and tier to a session profile.
    pub async fn enrich(&self, mut profile: UserProfile) -> UserProfile {
        let pool = match self {
            SessionEnrichment::Stateless => return profile,
            SessionEnrichment::Database(pool) => pool,
        };

        let row: Result<Option<(i64, String)>, sqlx::Error> =
            sqlx::query_as("SELECT credits, tier FROM users WHERE id = $1")
                .bind(&profile.id)
                .fetch_optional(pool)
                .await;

        match row {
            Ok(Some((credits, tier))) => {
                profile.credits = credits;
                profile.tier = Tier::from_id(&tier);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("database not available during session enrichment: {err}");
            }
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stateless_enrichment_is_the_identity() {
        let profile = UserProfile::demo();
        let enriched = SessionEnrichment::Stateless.enrich(profile.clone()).await;
        assert_eq!(enriched, profile);
    }

    #[tokio::test]
    async fn missing_database_url_selects_stateless() {
        let config = AppConfig {
            app_url: String::new(),
            stripe_secret_key: None,
            database_url: None,
            google: Default::default(),
            github: Default::default(),
        };
        assert!(matches!(
            SessionEnrichment::from_config(&config).await,
            SessionEnrichment::Stateless
        ));
    }
}
