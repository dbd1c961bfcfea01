//! Shared domain types
//!
//! Catalog records are authored statically in `catalog::data` and borrow
//! `'static` string data; only the types that cross a storage or wire
//! boundary carry serde derives.

use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Types
// ============================================================================

/// Generation latency tier advertised by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

impl Speed {
    pub fn label(&self) -> &'static str {
        match self {
            Speed::Fast => "fast",
            Speed::Medium => "medium",
            Speed::Slow => "slow",
        }
    }
}

/// Output quality tier advertised by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    High,
    Medium,
    Low,
}

impl Quality {
    pub fn label(&self) -> &'static str {
        match self {
            Quality::High => "high",
            Quality::Medium => "medium",
            Quality::Low => "low",
        }
    }
}

/// Content-policy strictness of an image provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Censorship {
    Strict,
    Moderate,
    Permissive,
}

/// Base price plus the unit it is billed against ("image", "second", ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub base: f64,
    pub unit: &'static str,
}

/// A static entry describing one third-party AI service offering shown in a
/// category catalog. Authored once at build time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub rating: f32,
    pub price: Price,
    pub features: &'static [&'static str],
    pub category: &'static str,
    pub speed: Speed,
    pub quality: Quality,
    pub badge: Option<&'static str>,
    pub popular: bool,
    /// Image providers only.
    pub censorship: Option<Censorship>,
    /// Video providers only, in seconds.
    pub max_duration_secs: Option<u32>,
    pub styles: &'static [&'static str],
    pub output_formats: &'static [&'static str],
}

/// A multi-step template shown on the workflows page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkflowTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub steps: u8,
    pub category: &'static str,
}

// ============================================================================
// Account Types
// ============================================================================

/// Pricing tier a user account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Pro,
    Enterprise,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Pro => "Pro",
            Tier::Enterprise => "Enterprise",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Pro => "pro",
            Tier::Enterprise => "enterprise",
        }
    }

    /// Falls back to `Basic` for unrecognized tier names.
    pub fn from_id(id: &str) -> Self {
        match id {
            "pro" => Tier::Pro,
            "enterprise" => Tier::Enterprise,
            _ => Tier::Basic,
        }
    }

    /// Markup applied on top of upstream provider cost.
    pub fn markup(&self) -> f64 {
        match self {
            Tier::Basic => 0.4,
            Tier::Pro => 0.2,
            Tier::Enterprise => 0.1,
        }
    }

    pub fn monthly_fee_cents(&self) -> u64 {
        match self {
            Tier::Basic => 0,
            Tier::Pro => 5_000,
            Tier::Enterprise => 50_000,
        }
    }

    pub fn max_credits(&self) -> u64 {
        match self {
            Tier::Basic => 10_000,
            Tier::Pro => 50_000,
            Tier::Enterprise => 999_999,
        }
    }
}

/// A user profile as persisted by the demo session store and returned by the
/// identity-provider glue. Not a credential; carries no security properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub credits: i64,
    pub tier: Tier,
}

impl UserProfile {
    /// The fixed fabricated profile used by the demo sign-in flow.
    pub fn demo() -> Self {
        Self {
            id: "demo-user".to_string(),
            name: "Demo User".to_string(),
            email: "demo@hi-api.com".to_string(),
            image: None,
            credits: 1_250,
            tier: Tier::Pro,
        }
    }
}

/// Current authentication status exposed by the session context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_from_id_falls_back_to_basic() {
        assert_eq!(Tier::from_id("pro"), Tier::Pro);
        assert_eq!(Tier::from_id("enterprise"), Tier::Enterprise);
        assert_eq!(Tier::from_id("basic"), Tier::Basic);
        assert_eq!(Tier::from_id("platinum"), Tier::Basic);
    }

    #[test]
    fn demo_profile_is_stable() {
        let user = UserProfile::demo();
        assert_eq!(user.id, "demo-user");
        assert_eq!(user.email, "demo@hi-api.com");
        assert_eq!(user.credits, 1_250);
        assert_eq!(user.tier, Tier::Pro);
    }
}
