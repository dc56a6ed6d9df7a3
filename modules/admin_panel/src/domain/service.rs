//! Domain service - capability gate, validation and store orchestration

use super::store::SettingsStore;
use super::validation::{ensure_object, SettingsValidator};
use crate::config::Config;
use crate::contract::{AuthContext, SettingsError};
use serde_json::Value;
use std::sync::Arc;

/// Message returned when the store does not accept a write
pub const STORE_WRITE_FAILED: &str = "Failed to update settings";

/// Service configuration derived from the module config
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Capability required for both read and write
    pub required_capability: String,
    /// Reject documents that do not match the settings schema
    pub strict_validation: bool,
    /// Maximum serialized document size in bytes
    pub max_data_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ServiceConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            required_capability: cfg.required_capability.clone(),
            strict_validation: cfg.strict_validation,
            max_data_size: cfg.max_data_size,
        }
    }
}

/// Domain service for the settings document
pub struct Service {
    store: Arc<SettingsStore>,
    validator: SettingsValidator,
    config: ServiceConfig,
}

impl Service {
    pub fn new(store: Arc<SettingsStore>, config: ServiceConfig) -> Result<Self, SettingsError> {
        Ok(Self {
            store,
            validator: SettingsValidator::new()?,
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Capability check; runs before any store access
    fn authorize(&self, ctx: &AuthContext, operation: &str) -> Result<(), SettingsError> {
        if ctx.can(&self.config.required_capability) {
            return Ok(());
        }
        tracing::warn!(
            principal = ctx.principal(),
            operation,
            capability = %self.config.required_capability,
            "settings access denied"
        );
        Err(SettingsError::forbidden(&self.config.required_capability))
    }

    /// Read the settings document, falling back to defaults when nothing is stored
    pub async fn get_settings(&self, ctx: &AuthContext) -> Result<Value, SettingsError> {
        self.authorize(ctx, "read")?;
        Ok(self.store.get().await)
    }

    /// Replace the settings document with a raw request body
    pub async fn update_settings_from_bytes(
        &self,
        ctx: &AuthContext,
        body: &[u8],
    ) -> Result<Value, SettingsError> {
        self.authorize(ctx, "write")?;
        self.check_size(body.len())?;
        let doc: Value = serde_json::from_slice(body)
            .map_err(|e| SettingsError::validation(format!("body is not valid JSON: {}", e)))?;
        self.write(ctx, doc).await
    }

    /// Replace the settings document
    pub async fn update_settings(
        &self,
        ctx: &AuthContext,
        doc: Value,
    ) -> Result<Value, SettingsError> {
        self.authorize(ctx, "write")?;
        let size = serde_json::to_vec(&doc)
            .map_err(|_| SettingsError::Internal)?
            .len();
        self.check_size(size)?;
        self.write(ctx, doc).await
    }

    fn check_size(&self, size: usize) -> Result<(), SettingsError> {
        if size > self.config.max_data_size {
            return Err(SettingsError::PayloadTooLarge {
                size,
                limit: self.config.max_data_size,
            });
        }
        Ok(())
    }

    async fn write(&self, ctx: &AuthContext, doc: Value) -> Result<Value, SettingsError> {
        ensure_object(&doc)?;
        if self.config.strict_validation {
            self.validator.validate(&doc)?;
        }

        if !self.store.set(&doc).await {
            return Err(SettingsError::StoreWrite {
                message: STORE_WRITE_FAILED.to_owned(),
            });
        }

        tracing::info!(
            principal = ctx.principal(),
            option = self.store.option_name(),
            "settings updated"
        );
        Ok(doc)
    }
}
