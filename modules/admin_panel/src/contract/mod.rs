//! Contract layer - public API shared by the service, clients and UI controller
//!
//! This layer contains transport-agnostic models and the client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use error::SettingsError;
pub use model::{
    AdvancedSettings, AppearanceSettings, AuthContext, Field, GeneralSettings, MenuPosition,
    Section, Settings, UnknownVariant, MANAGE_OPTIONS,
};
