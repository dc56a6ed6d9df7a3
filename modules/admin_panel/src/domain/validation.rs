//! JSON Schema validation for the settings document

use crate::contract::{MenuPosition, SettingsError};
use jsonschema::Validator;
use serde_json::{json, Value};

/// JSON Schema describing a well-formed settings document.
///
/// Only type shape is checked: every section and key must be present, all
/// values are strings, `menu_position` is one of the known positions and no
/// unknown sections or keys are allowed.
pub fn settings_schema() -> Value {
    let positions: Vec<&str> = MenuPosition::ALL.iter().map(|p| p.as_str()).collect();

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Settings",
        "type": "object",
        "additionalProperties": false,
        "required": ["general", "appearance", "advanced"],
        "properties": {
            "general": {
                "type": "object",
                "additionalProperties": false,
                "required": ["site_title", "admin_email"],
                "properties": {
                    "site_title": { "type": "string" },
                    "admin_email": { "type": "string" }
                }
            },
            "appearance": {
                "type": "object",
                "additionalProperties": false,
                "required": ["admin_color", "menu_position"],
                "properties": {
                    "admin_color": { "type": "string" },
                    "menu_position": { "type": "string", "enum": positions }
                }
            },
            "advanced": {
                "type": "object",
                "additionalProperties": false,
                "required": ["custom_css", "custom_js"],
                "properties": {
                    "custom_css": { "type": "string" },
                    "custom_js": { "type": "string" }
                }
            }
        }
    })
}

/// Compiled settings schema
pub struct SettingsValidator {
    validator: Validator,
}

impl SettingsValidator {
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_schema(&settings_schema())
    }

    pub fn from_schema(schema: &Value) -> Result<Self, SettingsError> {
        let validator = Validator::new(schema).map_err(|e| SettingsError::Validation {
            message: format!("Invalid JSON Schema: {}", e),
        })?;
        Ok(Self { validator })
    }

    /// Validate a document against the compiled schema
    pub fn validate(&self, data: &Value) -> Result<(), SettingsError> {
        if let Err(error) = self.validator.validate(data) {
            return Err(SettingsError::Validation {
                message: error.to_string(),
            });
        }
        Ok(())
    }
}

/// Structural check applied even when schema validation is disabled
pub fn ensure_object(data: &Value) -> Result<(), SettingsError> {
    if data.is_object() {
        Ok(())
    } else {
        Err(SettingsError::validation(
            "settings document must be a JSON object",
        ))
    }
}
