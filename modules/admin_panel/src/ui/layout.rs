//! Static description of the tabbed settings form.
//!
//! Widgets are rendered by the host; this only says which tab holds which
//! field, with what label and what kind of control.

use crate::contract::{Field, Section};

pub const PAGE_TITLE: &str = "WordPress Admin Customization";
pub const SAVE_BUTTON_LABEL: &str = "Save Settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Kind of control a field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    Email,
    Color,
    Select(&'static [SelectOption]),
    Textarea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: Field,
    pub label: &'static str,
    pub control: Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout {
    pub section: Section,
    pub title: &'static str,
    pub class_name: &'static str,
    pub fields: &'static [FieldLayout],
}

impl TabLayout {
    /// Tab identifier, same as the section name
    pub fn name(&self) -> &'static str {
        self.section.as_str()
    }
}

const MENU_POSITIONS: &[SelectOption] = &[
    SelectOption {
        label: "Left",
        value: "left",
    },
    SelectOption {
        label: "Right",
        value: "right",
    },
];

pub static TABS: [TabLayout; 3] = [
    TabLayout {
        section: Section::General,
        title: "General",
        class_name: "tab-general",
        fields: &[
            FieldLayout {
                field: Field::SiteTitle,
                label: "Site Title",
                control: Control::Text,
            },
            FieldLayout {
                field: Field::AdminEmail,
                label: "Admin Email",
                control: Control::Email,
            },
        ],
    },
    TabLayout {
        section: Section::Appearance,
        title: "Appearance",
        class_name: "tab-appearance",
        fields: &[
            FieldLayout {
                field: Field::AdminColor,
                label: "Admin Color",
                control: Control::Color,
            },
            FieldLayout {
                field: Field::MenuPosition,
                label: "Menu Position",
                control: Control::Select(MENU_POSITIONS),
            },
        ],
    },
    TabLayout {
        section: Section::Advanced,
        title: "Advanced",
        class_name: "tab-advanced",
        fields: &[
            FieldLayout {
                field: Field::CustomCss,
                label: "Custom CSS",
                control: Control::Textarea,
            },
            FieldLayout {
                field: Field::CustomJs,
                label: "Custom JavaScript",
                control: Control::Textarea,
            },
        ],
    },
];

pub fn tab(section: Section) -> &'static TabLayout {
    match section {
        Section::General => &TABS[0],
        Section::Appearance => &TABS[1],
        Section::Advanced => &TABS[2],
    }
}

pub fn field_layout(field: Field) -> Option<&'static FieldLayout> {
    tab(field.section())
        .fields
        .iter()
        .find(|layout| layout.field == field)
}
