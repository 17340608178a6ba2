//! Shared types for the website connector.

use serde::{Deserialize, Serialize};

/// A JSON object owned by the website backend. The connector does not force
/// a schema on response bodies because the website's shapes may evolve
/// independently of the bot.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Presence config pushed from the bot to the web via the sync-status
/// endpoint. Field names match the wire format expected by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSync {
    #[serde(default)]
    pub status_text_1: String,
    #[serde(default)]
    pub status_text_2: String,
    #[serde(default)]
    pub large_image: String,
    #[serde(default)]
    pub large_image_2: String,
    /// Whether the status rotation is enabled.
    pub active: bool,
}
