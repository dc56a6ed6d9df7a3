//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Settings document DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SettingsDto {
    pub general: GeneralSettingsDto,
    pub appearance: AppearanceSettingsDto,
    pub advanced: AdvancedSettingsDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneralSettingsDto {
    #[schema(example = "My Site")]
    pub site_title: String,

    #[schema(example = "admin@example.com")]
    pub admin_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AppearanceSettingsDto {
    /// Hex colour with leading `#`
    #[schema(example = "#ffffff")]
    pub admin_color: String,

    pub menu_position: MenuPositionDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MenuPositionDto {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AdvancedSettingsDto {
    pub custom_css: String,
    pub custom_js: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "store_write_failed")]
    pub code: String,

    /// Human-readable message, shown to the user as-is
    #[schema(example = "Failed to update settings")]
    pub message: String,

    /// HTTP status code
    #[schema(example = 500)]
    pub status: u16,
}

// Note: Conversion implementations live in mapper.rs
