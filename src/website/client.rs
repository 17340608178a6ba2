//! HTTP client for the website's bot-facing API routes.

use crate::config::WebsiteConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{Payload, StatusSync};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout. Expiry resolves as a transport failure, never a
/// panic or hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the website backend's bot API.
#[derive(Debug, Clone)]
pub struct WebsiteClient {
    base_url: String,
    secret: String,
    http: reqwest::Client,
}

// -- Request types ----------------------------------------------------------

#[derive(Debug, Serialize)]
struct TopupRequest<'a> {
    secret: &'a str,
    #[serde(rename = "discordId")]
    discord_id: &'a str,
    amount: i64,
    reference: &'a str,
}

impl WebsiteClient {
    /// Create a new client from connection settings.
    pub fn new(config: &WebsiteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            secret: config.webhook_secret.clone(),
            http,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL under the `/api/bot/` prefix.
    fn bot_url(&self, path: &str) -> String {
        format!("{}/api/bot/{}", self.base_url, path)
    }

    /// Send a prepared request and normalize the outcome: 200 + JSON object
    /// becomes `Ok`, a non-200 JSON body is preserved as a remote rejection,
    /// and anything else (refused connection, timeout, non-JSON body)
    /// collapses to a transport failure.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> ApiResult {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let payload: Payload =
            serde_json::from_str(&body).map_err(|e| ApiError::Transport {
                message: format!("invalid JSON response: {e}"),
            })?;

        if status == StatusCode::OK {
            Ok(payload)
        } else {
            Err(ApiError::Remote {
                status: status.as_u16(),
                payload,
            })
        }
    }

    /// Credit a user's balance via the topup webhook.
    ///
    /// `reference` defaults to `Bot-Topup-{discord_id}` when not given. On
    /// success the payload includes the user's `newBalance`.
    pub async fn request_topup(
        &self,
        discord_id: &str,
        amount: i64,
        reference: Option<&str>,
    ) -> ApiResult {
        let reference = reference
            .map(str::to_string)
            .unwrap_or_else(|| format!("Bot-Topup-{discord_id}"));

        debug!("Topup {} for user {} (ref {})", amount, discord_id, reference);

        self.dispatch(
            self.http
                .post(format!("{}/api/topup/webhook", self.base_url))
                .json(&TopupRequest {
                    secret: &self.secret,
                    discord_id,
                    amount,
                    reference: &reference,
                }),
        )
        .await
    }

    /// Fetch a user's status config from the website. The payload carries
    /// `user`, `subscription`, and `statusConfig` maps.
    pub async fn fetch_user_status(&self, discord_id: &str) -> ApiResult {
        debug!("Fetching status config for user {}", discord_id);

        self.dispatch(
            self.http
                .get(self.bot_url(&format!("user-status/{discord_id}")))
                .bearer_auth(&self.secret),
        )
        .await
    }

    /// Check whether the user has an active subscription.
    ///
    /// Pure derivation over a single [`fetch_user_status`] call: returns the
    /// subscription map iff it is present and its `status` is `"active"`.
    ///
    /// [`fetch_user_status`]: Self::fetch_user_status
    pub async fn check_subscription_active(&self, discord_id: &str) -> Option<Payload> {
        let payload = self.fetch_user_status(discord_id).await.ok()?;
        let sub = payload.get("subscription")?.as_object()?;

        if sub.get("status").and_then(Value::as_str) == Some("active") {
            Some(sub.clone())
        } else {
            None
        }
    }

    /// Push the bot-side presence config to the website.
    pub async fn sync_status(&self, discord_id: &str, status: &StatusSync) -> ApiResult {
        debug!("Syncing status config for user {}", discord_id);

        self.dispatch(
            self.http
                .post(self.bot_url(&format!("sync-status/{discord_id}")))
                .bearer_auth(&self.secret)
                .json(status),
        )
        .await
    }

    /// Fetch a user's full profile: account, subscription, status config,
    /// and recent transactions.
    pub async fn fetch_user_profile(&self, discord_id: &str) -> ApiResult {
        self.dispatch(
            self.http
                .get(self.bot_url(&format!("user-profile/{discord_id}")))
                .bearer_auth(&self.secret),
        )
        .await
    }

    /// Verify connectivity and secret validity against the website. The
    /// payload carries `authenticated`, `serverTime`, and `version`.
    pub async fn verify_connection(&self) -> ApiResult {
        self.dispatch(self.http.get(self.bot_url("verify")).bearer_auth(&self.secret))
            .await
    }
}
