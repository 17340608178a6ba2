//! Website API connector for the status rental Discord bot.
//!
//! Thin async client over the website's bot-facing HTTP endpoints:
//! crediting a user's balance, reading subscription/status config, and
//! syncing presence state back to the web. Remote payloads are kept as
//! schemaless JSON maps since the website owns their shape.

pub mod config;
pub mod error;
pub mod types;
pub mod website;

pub use config::WebsiteConfig;
pub use error::{ApiError, ApiResult};
pub use types::{Payload, StatusSync};
pub use website::WebsiteClient;
