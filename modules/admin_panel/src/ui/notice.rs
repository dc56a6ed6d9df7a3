//! Transient user-visible notices

use crate::contract::SettingsError;
use std::fmt;

/// Message shown after a successful save
pub const SAVE_SUCCESS_MESSAGE: &str = "Settings saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Error,
}

impl NoticeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeStatus::Success => "success",
            NoticeStatus::Error => "error",
        }
    }
}

impl fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome message shown above the form until dismissed or superseded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub status: NoticeStatus,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: NoticeStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: NoticeStatus::Error,
            message: message.into(),
        }
    }

    pub fn saved() -> Self {
        Self::success(SAVE_SUCCESS_MESSAGE)
    }
}

impl From<&SettingsError> for Notice {
    fn from(error: &SettingsError) -> Self {
        Self::error(error.to_string())
    }
}
