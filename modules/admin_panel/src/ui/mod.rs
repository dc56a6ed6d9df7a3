//! UI state layer - form controller, notices and form layout

pub mod form;
pub mod layout;
pub mod notice;

pub use form::{FieldError, Phase, SaveOutcome, SaveState, SettingsForm};
pub use notice::{Notice, NoticeStatus, SAVE_SUCCESS_MESSAGE};
