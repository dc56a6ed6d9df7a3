//! Admin Panel Module
//!
//! Settings management for an admin screen: one structured document
//! (`general`, `appearance`, `advanced`) persisted under a named option,
//! served over a capability-gated get/replace API and edited through a form
//! controller that keeps a draft and reports outcomes as notices.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, AuthContext, Field, MenuPosition, Section,
    Settings,
};

pub mod module;
pub use module::AdminPanelModule;

pub mod config;
pub use config::Config;

pub mod ui;

pub mod api;
pub use api::{http::HttpSettingsClient, native::NativeClient};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
pub(crate) mod test_support;
