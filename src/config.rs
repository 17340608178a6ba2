//! Environment-driven connector configuration.

use serde::{Deserialize, Serialize};

/// Base URL used when `WEBSITE_URL` is not set.
pub const DEFAULT_WEBSITE_URL: &str = "http://localhost:3000";

/// Connection settings for the website backend.
///
/// Built once at process start and passed by reference to
/// [`WebsiteClient::new`](crate::WebsiteClient::new); nothing reads the
/// environment after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteConfig {
    /// Base URL of the website backend.
    pub base_url: String,

    /// Shared secret authorizing bot calls (`BOT_WEBHOOK_SECRET` on the
    /// website side). Sent in the topup body and as a bearer token on the
    /// `/api/bot/*` routes.
    pub webhook_secret: String,
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEBSITE_URL.into(),
            webhook_secret: String::new(),
        }
    }
}

impl WebsiteConfig {
    /// Load config from `WEBSITE_URL` / `BOT_WEBHOOK_SECRET`, reading a
    /// local `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            base_url: std::env::var("WEBSITE_URL")
                .unwrap_or_else(|_| DEFAULT_WEBSITE_URL.into()),
            webhook_secret: std::env::var("BOT_WEBHOOK_SECRET").unwrap_or_default(),
        }
    }
}
