//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{
    AdvancedSettings, AppearanceSettings, GeneralSettings, MenuPosition, Settings,
};
use serde_json::Value;

impl From<Settings> for SettingsDto {
    fn from(settings: Settings) -> Self {
        Self {
            general: GeneralSettingsDto {
                site_title: settings.general.site_title,
                admin_email: settings.general.admin_email,
            },
            appearance: AppearanceSettingsDto {
                admin_color: settings.appearance.admin_color,
                menu_position: settings.appearance.menu_position.into(),
            },
            advanced: AdvancedSettingsDto {
                custom_css: settings.advanced.custom_css,
                custom_js: settings.advanced.custom_js,
            },
        }
    }
}

impl From<SettingsDto> for Settings {
    fn from(dto: SettingsDto) -> Self {
        Self {
            general: GeneralSettings {
                site_title: dto.general.site_title,
                admin_email: dto.general.admin_email,
            },
            appearance: AppearanceSettings {
                admin_color: dto.appearance.admin_color,
                menu_position: dto.appearance.menu_position.into(),
            },
            advanced: AdvancedSettings {
                custom_css: dto.advanced.custom_css,
                custom_js: dto.advanced.custom_js,
            },
        }
    }
}

impl From<MenuPosition> for MenuPositionDto {
    fn from(position: MenuPosition) -> Self {
        match position {
            MenuPosition::Left => MenuPositionDto::Left,
            MenuPosition::Right => MenuPositionDto::Right,
        }
    }
}

impl From<MenuPositionDto> for MenuPosition {
    fn from(dto: MenuPositionDto) -> Self {
        match dto {
            MenuPositionDto::Left => MenuPosition::Left,
            MenuPositionDto::Right => MenuPosition::Right,
        }
    }
}

/// Encode a settings document as its wire JSON
pub fn settings_to_json(settings: &Settings) -> serde_json::Result<Value> {
    serde_json::to_value(SettingsDto::from(settings.clone()))
}

/// Decode wire JSON into a settings document
pub fn settings_from_json(value: Value) -> serde_json::Result<Settings> {
    serde_json::from_value::<SettingsDto>(value).map(Settings::from)
}
