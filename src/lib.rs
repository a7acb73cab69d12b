//! Typed async client for the Novu notification service REST API.
//!
//! ```no_run
//! use novu_client::domain::{SubscriberPayload, UpdateSubscriberPreferencesOptions, ChannelType};
//! use novu_client::{ClientConfig, NovuClient};
//! use secrecy::Secret;
//!
//! # async fn run() -> Result<(), novu_client::NovuError> {
//! let client = NovuClient::new(Secret::new("my-api-key".to_string()), ClientConfig::default())?;
//!
//! let payload = SubscriberPayload {
//!     email: Some("john@example.com".to_string()),
//!     ..Default::default()
//! };
//! client.subscribers().identify("62b51a44da1af31d109f5da7", &payload).await?;
//!
//! let options = UpdateSubscriberPreferencesOptions::new()
//!     .enabled(true)
//!     .channel(ChannelType::Email, true);
//! client
//!     .subscribers()
//!     .update_preferences("62b51a44da1af31d109f5da7", "topicId", &options)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
mod transport;

pub use client::NovuClient;
pub use config::{get_configuration, ClientConfig, NovuSettings};
pub use error::NovuError;
