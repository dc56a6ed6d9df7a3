//! Client trait for reading and writing the settings document
//!
//! The form controller talks to this trait only; the native client calls the
//! domain service in-process and the HTTP client goes over the REST API.

use super::{error::SettingsError, model::Settings};
use async_trait::async_trait;

/// Settings API as seen by consumers
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Fetch the current document (defaults if nothing was ever saved)
    async fn load(&self) -> Result<Settings, SettingsError>;

    /// Replace the stored document, returning the server-confirmed copy
    async fn save(&self, settings: &Settings) -> Result<Settings, SettingsError>;
}
