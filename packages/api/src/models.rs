//! Directory records as the remote API serves them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One listed AI tool. Immutable once fetched; the UI never mutates records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub rating: f32,
}

/// A registered end user, shown only in the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(alias = "date", alias = "join_date")]
    pub joined: String,
    pub subscription: SubscriptionTier,
}

/// Subscription plan tier. The live API spells tiers lowercase; older mock
/// payloads capitalize them, so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[serde(alias = "Free")]
    Free,
    #[serde(alias = "Premium")]
    Premium,
    #[serde(alias = "Business")]
    Business,
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Premium => "Premium",
            SubscriptionTier::Business => "Business",
        };
        f.write_str(label)
    }
}

impl SubscriptionTier {
    /// CSS badge class used by the dashboard tables.
    pub fn badge_class(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "subscription-badge free",
            SubscriptionTier::Premium => "subscription-badge premium",
            SubscriptionTier::Business => "subscription-badge business",
        }
    }
}

/// Static headline numbers for the dashboard overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub users: u32,
    pub tools: u32,
    pub reviews: u32,
    pub revenue: u32,
}

/// The overview numbers the dashboard has always shown. Not served by the
/// API; the admin stats endpoint is not consumed here.
pub fn sample_stats() -> DashboardStats {
    DashboardStats {
        users: 15_482,
        tools: 253,
        reviews: 8_743,
        revenue: 12_850,
    }
}
