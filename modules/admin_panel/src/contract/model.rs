//! Contract models for the admin panel
//!
//! These models are transport-agnostic and shared by the service, the clients
//! and the form controller.
//! NO serde derives - wire shapes live in `api::rest::dto`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Capability required by default to read or write the settings document
pub const MANAGE_OPTIONS: &str = "manage_options";

/// The single persisted settings document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub appearance: AppearanceSettings,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneralSettings {
    pub site_title: String,
    pub admin_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceSettings {
    /// Hex colour as emitted by the colour picker, leading `#` included
    pub admin_color: String,
    pub menu_position: MenuPosition,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            admin_color: "#ffffff".to_owned(),
            menu_position: MenuPosition::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdvancedSettings {
    pub custom_css: String,
    pub custom_js: String,
}

/// Side of the admin screen the menu is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPosition {
    #[default]
    Left,
    Right,
}

impl MenuPosition {
    pub const ALL: [MenuPosition; 2] = [MenuPosition::Left, MenuPosition::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuPosition::Left => "left",
            MenuPosition::Right => "right",
        }
    }
}

impl fmt::Display for MenuPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuPosition {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(MenuPosition::Left),
            "right" => Ok(MenuPosition::Right),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

/// Top-level grouping of the settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    General,
    Appearance,
    Advanced,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::General, Section::Appearance, Section::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::General => "general",
            Section::Appearance => "appearance",
            Section::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// A string that did not name any known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// One addressable field of the settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SiteTitle,
    AdminEmail,
    AdminColor,
    MenuPosition,
    CustomCss,
    CustomJs,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::SiteTitle,
        Field::AdminEmail,
        Field::AdminColor,
        Field::MenuPosition,
        Field::CustomCss,
        Field::CustomJs,
    ];

    pub fn section(self) -> Section {
        match self {
            Field::SiteTitle | Field::AdminEmail => Section::General,
            Field::AdminColor | Field::MenuPosition => Section::Appearance,
            Field::CustomCss | Field::CustomJs => Section::Advanced,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::SiteTitle => "site_title",
            Field::AdminEmail => "admin_email",
            Field::AdminColor => "admin_color",
            Field::MenuPosition => "menu_position",
            Field::CustomCss => "custom_css",
            Field::CustomJs => "custom_js",
        }
    }

    /// Resolve a `(section, key)` pair; `None` if the key does not live in that section
    pub fn lookup(section: Section, key: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.section() == section && field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key())
    }
}

impl Settings {
    /// Current value of a field in its string form
    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::SiteTitle => &self.general.site_title,
            Field::AdminEmail => &self.general.admin_email,
            Field::AdminColor => &self.appearance.admin_color,
            Field::MenuPosition => self.appearance.menu_position.as_str(),
            Field::CustomCss => &self.advanced.custom_css,
            Field::CustomJs => &self.advanced.custom_js,
        }
    }
}

/// Caller identity and capabilities, resolved by the host before a request reaches the API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthContext {
    /// Optional user identifier for audit logging
    pub user_id: Option<String>,
    /// Capabilities granted to the caller
    pub capabilities: BTreeSet<String>,
}

impl AuthContext {
    /// Context with no identity and no capabilities
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a user holding the given capabilities
    pub fn user<I, S>(user_id: impl Into<String>, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: Some(user_id.into()),
            capabilities: capabilities.into_iter().map(Into::into).collect(),
        }
    }

    /// Administrator context holding `manage_options`
    pub fn administrator(user_id: impl Into<String>) -> Self {
        Self::user(user_id, [MANAGE_OPTIONS])
    }

    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Identifier used in log lines
    pub fn principal(&self) -> &str {
        self.user_id.as_deref().unwrap_or("anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_matches_registered_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.site_title, "");
        assert_eq!(settings.general.admin_email, "");
        assert_eq!(settings.appearance.admin_color, "#ffffff");
        assert_eq!(settings.appearance.menu_position, MenuPosition::Left);
        assert_eq!(settings.advanced.custom_css, "");
        assert_eq!(settings.advanced.custom_js, "");
    }

    #[test]
    fn field_lookup_requires_matching_section() {
        assert_eq!(
            Field::lookup(Section::Appearance, "menu_position"),
            Some(Field::MenuPosition)
        );
        assert_eq!(Field::lookup(Section::General, "menu_position"), None);
        assert_eq!(Field::lookup(Section::Advanced, "nope"), None);
    }

    #[test]
    fn every_field_round_trips_through_lookup() {
        for field in Field::ALL {
            assert_eq!(Field::lookup(field.section(), field.key()), Some(field));
        }
    }

    #[test]
    fn section_and_menu_position_parse() {
        assert_eq!("general".parse::<Section>(), Ok(Section::General));
        assert!("General".parse::<Section>().is_err());
        assert_eq!("right".parse::<MenuPosition>(), Ok(MenuPosition::Right));
        assert_eq!(
            "top".parse::<MenuPosition>(),
            Err(UnknownVariant("top".to_owned()))
        );
    }

    #[test]
    fn auth_context_capabilities() {
        assert!(!AuthContext::anonymous().can(MANAGE_OPTIONS));
        assert!(AuthContext::administrator("admin").can(MANAGE_OPTIONS));
        let editor = AuthContext::user("editor", ["edit_posts"]);
        assert!(!editor.can(MANAGE_OPTIONS));
        assert_eq!(editor.principal(), "editor");
        assert_eq!(AuthContext::anonymous().principal(), "anonymous");
    }
}
