//! Two-tier failure model for website API calls.

use crate::types::Payload;
use serde_json::Value;

/// Result of a single website API call: the parsed 200 body, or an error
/// that still carries a payload map.
pub type ApiResult = Result<Payload, ApiError>;

/// Why a website API call failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable JSON response: connection
    /// refused, DNS failure, timeout, or a body that was not a JSON object.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The website answered with a non-200 status and a structured JSON
    /// body. The body is preserved verbatim.
    #[error("website rejected the request (HTTP {status})")]
    Remote { status: u16, payload: Payload },
}

impl ApiError {
    /// HTTP status of an application-level rejection, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::Remote { status, .. } => Some(*status),
        }
    }

    /// Error payload in the shape the original connector returned: the
    /// remote body for rejections, a synthesized `{"error": ...}` map for
    /// transport failures.
    pub fn payload(&self) -> Payload {
        match self {
            Self::Transport { message } => {
                let mut map = Payload::new();
                map.insert("error".into(), Value::String(message.clone()));
                map
            }
            Self::Remote { payload, .. } => payload.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}
