//! External OAuth provider descriptors
//!
//! Two providers are configured; the sign-in page lists them. Client
//! credentials come from `AppConfig`, never from these static descriptors.

use crate::config::{AppConfig, OAuthConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OAuthProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub authorize_url: &'static str,
}

pub static OAUTH_PROVIDERS: &[OAuthProvider] = &[
    OAuthProvider {
        id: "google",
        name: "Google",
        authorize_url: "https://accounts.google.com/o/oauth2/v2/auth",
    },
    OAuthProvider {
        id: "github",
        name: "GitHub",
        authorize_url: "https://github.com/login/oauth/authorize",
    },
];

/// Client credentials for a provider id, if one is configured.
pub fn credentials<'a>(config: &'a AppConfig, provider_id: &str) -> Option<&'a OAuthConfig> {
    match provider_id {
        "google" => Some(&config.google),
        "github" => Some(&config.github),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_providers_are_listed() {
        let ids: Vec<_> = OAUTH_PROVIDERS.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["google", "github"]);
    }

    #[test]
    fn unknown_provider_has_no_credentials() {
        let config = AppConfig {
            app_url: String::new(),
            stripe_secret_key: None,
            database_url: None,
            google: Default::default(),
            github: Default::default(),
        };
        assert!(credentials(&config, "google").is_some());
        assert!(credentials(&config, "gitlab").is_none());
    }
}
