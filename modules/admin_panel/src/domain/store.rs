//! Settings store - the single named document on top of the option repository

use super::repository::OptionRepository;
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Default option name under which the document is persisted
pub const DEFAULT_OPTION_NAME: &str = "wrp_settings";

/// Built-in default document, used until a default is registered
pub fn default_document() -> Value {
    json!({
        "general": {
            "site_title": "",
            "admin_email": ""
        },
        "appearance": {
            "admin_color": "#ffffff",
            "menu_position": "left"
        },
        "advanced": {
            "custom_css": "",
            "custom_js": ""
        }
    })
}

/// Persists and retrieves one named JSON document.
///
/// No schema validation happens here: whatever well-formed JSON is written is
/// returned verbatim by the next `get`.
pub struct SettingsStore {
    repo: Arc<dyn OptionRepository>,
    option_name: String,
    registered_default: RwLock<Option<Value>>,
    /// Serializes writes so concurrent `set` calls never interleave
    write_gate: Mutex<()>,
}

impl SettingsStore {
    pub fn new(repo: Arc<dyn OptionRepository>, option_name: impl Into<String>) -> Self {
        Self {
            repo,
            option_name: option_name.into(),
            registered_default: RwLock::new(None),
            write_gate: Mutex::new(()),
        }
    }

    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    /// Register the default document. The first registration wins.
    ///
    /// Returns `true` when this call performed the registration.
    pub fn register_default(&self, default: Value) -> bool {
        let mut slot = self.registered_default.write();
        if slot.is_some() {
            tracing::debug!(option = %self.option_name, "default already registered");
            return false;
        }
        *slot = Some(default);
        true
    }

    /// Document returned when nothing is stored
    pub fn default_value(&self) -> Value {
        self.registered_default
            .read()
            .clone()
            .unwrap_or_else(default_document)
    }

    /// Stored document, or the default one (not persisted) when absent.
    ///
    /// Read failures are logged and fall back to the default as well.
    pub async fn get(&self) -> Value {
        match self.repo.find(&self.option_name).await {
            Ok(Some(value)) if !value.is_null() => value,
            Ok(_) => {
                tracing::debug!(option = %self.option_name, "no stored settings, using defaults");
                self.default_value()
            }
            Err(e) => {
                tracing::warn!(option = %self.option_name, error = ?e, "failed to read settings, using defaults");
                self.default_value()
            }
        }
    }

    /// Replace the stored document. Returns whether the write succeeded.
    pub async fn set(&self, doc: &Value) -> bool {
        let _guard = self.write_gate.lock().await;
        match self.repo.upsert(&self.option_name, doc).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(option = %self.option_name, error = ?e, "failed to write settings");
                false
            }
        }
    }
}
