//! Environment-driven configuration
//!
//! Read once at startup; the session-enrichment strategy and the billing
//! stub both take their settings from here instead of branching on the
//! environment at call sites.

/// Client credentials for one external OAuth provider.
#[derive(Debug, Clone, Default)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
}

/// Application configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public base URL used for checkout redirect targets.
    pub app_url: String,
    /// Payment processor API key; the billing stub refuses to run without it.
    pub stripe_secret_key: Option<String>,
    /// Optional database connection string; absence selects the stateless
    /// session-enrichment variant.
    pub database_url: Option<String>,
    pub google: OAuthConfig,
    pub github: OAuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").ok(),
            database_url: std::env::var("DATABASE_URL").ok(),
            google: OAuthConfig {
                client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
                client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            },
            github: OAuthConfig {
                client_id: std::env::var("GITHUB_CLIENT_ID").unwrap_or_default(),
                client_secret: std::env::var("GITHUB_CLIENT_SECRET").unwrap_or_default(),
            },
        }
    }
}
