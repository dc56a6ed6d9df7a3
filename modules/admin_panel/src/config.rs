//! Configuration for the admin panel module

use crate::contract::MANAGE_OPTIONS;
use crate::domain::store::DEFAULT_OPTION_NAME;
use serde::{Deserialize, Serialize};

/// Admin panel module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Option name the settings document is stored under
    #[serde(default = "default_option_name")]
    pub option_name: String,

    /// Capability required to read or write settings
    #[serde(default = "default_capability")]
    pub required_capability: String,

    /// Enable JSON Schema validation of written documents
    #[serde(default = "default_true")]
    pub strict_validation: bool,

    /// Maximum settings document size in bytes
    #[serde(default = "default_max_data_size")]
    pub max_data_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            option_name: default_option_name(),
            required_capability: default_capability(),
            strict_validation: true,
            max_data_size: default_max_data_size(),
        }
    }
}

fn default_option_name() -> String {
    DEFAULT_OPTION_NAME.to_owned()
}

fn default_capability() -> String {
    MANAGE_OPTIONS.to_owned()
}

fn default_true() -> bool {
    true
}

fn default_max_data_size() -> usize {
    64 * 1024 // 64KB
}
