//! # api crate — remote directory client
//!
//! Thin read-only client for the hosted directory API. Two endpoints are
//! consumed, the tool list and the user list, both returning the JSON
//! envelope `{ "success": bool, "data": { "tools": [...] } }` (or
//! `"users"`).
//!
//! The public fetch operations never fail: any network error, parse error,
//! falsy `success` field, or missing payload is logged and replaced by a
//! fixed static dataset. Callers cannot distinguish a fallback from a
//! genuinely short live list; that silence is part of the contract. There
//! are no retries, no timeouts, and no caching — every page mount fetches
//! afresh.

use serde::Deserialize;
use thiserror::Error;

pub mod models;

pub use models::{sample_stats, DashboardStats, SubscriptionTier, ToolRecord, UserRecord};

/// Origin of the hosted directory API.
pub const DEFAULT_BASE_URL: &str = "https://aiinteltools-production.up.railway.app";

const TOOLS_PATH: &str = "/api/v1/tools";
const USERS_PATH: &str = "/api/v1/users";

/// Why a live fetch was abandoned. Diagnostic only — the caller always
/// receives the fallback dataset instead of this error.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("server reported failure")]
    Failure,
    #[error("response missing data payload")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ToolList {
    tools: Vec<ToolRecord>,
}

#[derive(Debug, Deserialize)]
struct UserList {
    users: Vec<UserRecord>,
}

/// Read-only client for the directory endpoints.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the tool directory, substituting [`fallback_tools`] on any
    /// failure.
    pub async fn fetch_tools(&self) -> Vec<ToolRecord> {
        match self.try_fetch_tools().await {
            Ok(tools) => tools,
            Err(e) => {
                tracing::warn!("tool list fetch failed, serving fallback: {e}");
                fallback_tools()
            }
        }
    }

    /// Fetch the registered-user list (admin view), substituting
    /// [`fallback_users`] on any failure.
    pub async fn fetch_users(&self) -> Vec<UserRecord> {
        match self.try_fetch_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("user list fetch failed, serving fallback: {e}");
                fallback_users()
            }
        }
    }

    async fn try_fetch_tools(&self) -> Result<Vec<ToolRecord>, DirectoryError> {
        let body = self.get_text(TOOLS_PATH).await?;
        parse_tools(&body)
    }

    async fn try_fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let body = self.get_text(USERS_PATH).await?;
        parse_users(&body)
    }

    async fn get_text(&self, path: &str) -> Result<String, DirectoryError> {
        let url = format!("{}{}", self.base_url, path);
        let body = self.http.get(&url).send().await?.text().await?;
        Ok(body)
    }
}

fn parse_tools(body: &str) -> Result<Vec<ToolRecord>, DirectoryError> {
    let envelope: Envelope<ToolList> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(DirectoryError::Failure);
    }
    Ok(envelope.data.ok_or(DirectoryError::MissingData)?.tools)
}

fn parse_users(body: &str) -> Result<Vec<UserRecord>, DirectoryError> {
    let envelope: Envelope<UserList> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(DirectoryError::Failure);
    }
    Ok(envelope.data.ok_or(DirectoryError::MissingData)?.users)
}

/// The fixed three-tool sample list shown whenever the live fetch fails.
pub fn fallback_tools() -> Vec<ToolRecord> {
    vec![
        ToolRecord {
            id: 1,
            name: "ChatGPT".to_string(),
            category: "Conversational AI".to_string(),
            description: "Advanced AI chatbot for conversations and content creation"
                .to_string(),
            rating: 4.8,
        },
        ToolRecord {
            id: 2,
            name: "Midjourney".to_string(),
            category: "Image Generation".to_string(),
            description: "AI-powered image generation from text prompts".to_string(),
            rating: 4.7,
        },
        ToolRecord {
            id: 3,
            name: "GitHub Copilot".to_string(),
            category: "Code Assistant".to_string(),
            description: "AI pair programmer that helps you write code faster".to_string(),
            rating: 4.6,
        },
    ]
}

/// The fixed sample user list for the dashboard when the live fetch fails.
pub fn fallback_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            joined: "2025-07-22".to_string(),
            subscription: SubscriptionTier::Premium,
        },
        UserRecord {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            joined: "2025-07-21".to_string(),
            subscription: SubscriptionTier::Business,
        },
        UserRecord {
            id: 3,
            name: "Robert Johnson".to_string(),
            email: "robert@example.com".to_string(),
            joined: "2025-07-20".to_string(),
            subscription: SubscriptionTier::Free,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tool_envelope() {
        let body = r#"{
            "success": true,
            "data": {
                "tools": [
                    {"id": 7, "name": "Claude", "category": "Conversational AI",
                     "description": "Assistant", "rating": 4.9}
                ],
                "pagination": {"page": 1, "total_pages": 1}
            }
        }"#;

        let tools = parse_tools(body).unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "Claude");
        assert_eq!(tools[0].rating, 4.9);
    }

    #[test]
    fn reported_failure_is_an_error() {
        let body = r#"{"success": false, "message": "nope"}"#;
        assert!(matches!(parse_tools(body), Err(DirectoryError::Failure)));
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(matches!(
            parse_tools("<html>503</html>"),
            Err(DirectoryError::Malformed(_))
        ));
    }

    #[test]
    fn success_without_data_is_an_error() {
        let body = r#"{"success": true}"#;
        assert!(matches!(parse_tools(body), Err(DirectoryError::MissingData)));
    }

    #[test]
    fn parses_user_envelope_with_either_tier_spelling() {
        let body = r#"{
            "success": true,
            "data": {
                "users": [
                    {"id": 1, "name": "A", "email": "a@x.com",
                     "joined": "2025-06-15", "subscription": "premium"},
                    {"id": 2, "name": "B", "email": "b@x.com",
                     "date": "2025-06-16", "subscription": "Business"}
                ]
            }
        }"#;

        let users = parse_users(body).unwrap();
        assert_eq!(users[0].subscription, SubscriptionTier::Premium);
        assert_eq!(users[1].subscription, SubscriptionTier::Business);
        assert_eq!(users[1].joined, "2025-06-16");
    }

    #[test]
    fn fallback_tools_are_the_documented_three() {
        let tools = fallback_tools();
        let summary: Vec<(&str, f32)> = tools
            .iter()
            .map(|t| (t.name.as_str(), t.rating))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("ChatGPT", 4.8),
                ("Midjourney", 4.7),
                ("GitHub Copilot", 4.6),
            ]
        );
    }

    #[test]
    fn fallback_users_cover_every_tier() {
        let users = fallback_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].subscription, SubscriptionTier::Premium);
        assert_eq!(users[1].subscription, SubscriptionTier::Business);
        assert_eq!(users[2].subscription, SubscriptionTier::Free);
    }

    #[tokio::test]
    async fn unreachable_origin_serves_fallback() {
        // Port 9 (discard) refuses connections immediately; no live server
        // is involved.
        let client = DirectoryClient::with_base_url("http://127.0.0.1:9");

        let tools = client.fetch_tools().await;
        assert_eq!(tools, fallback_tools());

        let users = client.fetch_users().await;
        assert_eq!(users, fallback_users());
    }

    #[test]
    fn tier_labels_display_capitalized() {
        assert_eq!(SubscriptionTier::Free.to_string(), "Free");
        assert_eq!(SubscriptionTier::Premium.to_string(), "Premium");
        assert_eq!(SubscriptionTier::Business.to_string(), "Business");
    }
}
