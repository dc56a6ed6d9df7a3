//! Native client implementation - wraps domain service for in-process calls

use crate::api::rest::mapper::{settings_from_json, settings_to_json};
use crate::contract::{AuthContext, Settings, SettingsApi, SettingsError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
/// Every call runs with the `AuthContext` it was built with.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
    ctx: AuthContext,
}

impl NativeClient {
    /// Create a new native client acting as `ctx`
    pub fn new(service: Arc<Service>, ctx: AuthContext) -> Self {
        Self { service, ctx }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let doc = self.service.get_settings(&self.ctx).await?;
        settings_from_json(doc).map_err(|e| {
            SettingsError::transport(format!("stored settings are not a valid document: {}", e))
        })
    }

    async fn save(&self, settings: &Settings) -> Result<Settings, SettingsError> {
        let doc = settings_to_json(settings).map_err(|_| SettingsError::Internal)?;
        let written = self.service.update_settings(&self.ctx, doc).await?;
        settings_from_json(written).map_err(|e| {
            SettingsError::transport(format!("written settings are not a valid document: {}", e))
        })
    }
}
