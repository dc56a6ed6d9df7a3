//! Contract error types for the admin panel
//!
//! These errors are transport-agnostic: the service raises them, the REST layer
//! maps them to status codes and the clients rebuild them from responses.

use thiserror::Error;

/// Admin panel errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Caller lacks the capability required to manage settings
    #[error("{message}")]
    Forbidden { message: String },

    /// Request body is not a well-formed settings document
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Request body exceeds the configured size limit
    #[error("Settings document is {size} bytes, limit is {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Persistence layer did not accept the write
    #[error("{message}")]
    StoreWrite { message: String },

    /// Network, protocol or decode failure between client and API
    #[error("{message}")]
    Transport { message: String },

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl SettingsError {
    pub fn forbidden(capability: &str) -> Self {
        Self::Forbidden {
            message: format!("Sorry, you are not allowed to do that (requires '{capability}')"),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
