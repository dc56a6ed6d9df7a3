//! Settings form controller
//!
//! Holds the draft document, applies field patches as pure transitions and
//! drives load/save through a `SettingsApi` client. Widget rendering is left
//! to the host; see `ui::layout` for the form description.

use super::notice::Notice;
use crate::contract::{Field, Section, Settings, SettingsApi, SettingsError, UnknownVariant};
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

/// Rejected field patch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("section '{section}' has no field '{key}'")]
    UnknownKey { section: Section, key: String },

    #[error("'{value}' is not a valid value for {field}")]
    InvalidValue { field: Field, value: String },
}

/// Produce a new draft with `draft[section][key] = value`.
///
/// Everything else, in the same section and in other sections, is carried
/// over unchanged. `draft` itself is never modified.
pub fn update_field(
    draft: &Settings,
    section: &str,
    key: &str,
    value: &str,
) -> Result<Settings, FieldError> {
    let section: Section = section
        .parse()
        .map_err(|UnknownVariant(name)| FieldError::UnknownSection(name))?;
    let field = Field::lookup(section, key).ok_or_else(|| FieldError::UnknownKey {
        section,
        key: key.to_owned(),
    })?;
    set_field(draft, field, value)
}

/// Typed form of [`update_field`]
pub fn set_field(draft: &Settings, field: Field, value: &str) -> Result<Settings, FieldError> {
    let mut next = draft.clone();
    match field {
        Field::SiteTitle => next.general.site_title = value.to_owned(),
        Field::AdminEmail => next.general.admin_email = value.to_owned(),
        Field::AdminColor => next.appearance.admin_color = value.to_owned(),
        Field::MenuPosition => {
            next.appearance.menu_position =
                value.parse().map_err(|_| FieldError::InvalidValue {
                    field,
                    value: value.to_owned(),
                })?
        }
        Field::CustomCss => next.advanced.custom_css = value.to_owned(),
        Field::CustomJs => next.advanced.custom_js = value.to_owned(),
    }
    Ok(next)
}

/// Whether the initial load has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved,
    SaveFailed,
}

/// Result of a `save()` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Server confirmed the document
    Saved(Settings),
    /// Save failed; the draft is untouched
    Failed(SettingsError),
    /// Another save was in flight; it will re-submit the latest draft
    Queued,
    /// The form was torn down before the save resolved
    Abandoned,
}

#[derive(Debug)]
struct FormState {
    draft: Settings,
    phase: Phase,
    save_state: SaveState,
    notice: Option<Notice>,
    resave_requested: bool,
    torn_down: bool,
}

/// Leaves the `Saving` state when a save future is dropped before it resolves
struct InFlightSave<'a> {
    state: &'a Mutex<FormState>,
    completed: bool,
}

impl Drop for InFlightSave<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let mut state = self.state.lock();
        if state.save_state == SaveState::Saving {
            state.save_state = SaveState::Idle;
        }
        state.resave_requested = false;
    }
}

/// UI state controller for the settings form
pub struct SettingsForm {
    client: Arc<dyn SettingsApi>,
    state: Mutex<FormState>,
}

impl SettingsForm {
    /// New form holding the default document, in the `Loading` phase
    pub fn new(client: Arc<dyn SettingsApi>) -> Self {
        Self {
            client,
            state: Mutex::new(FormState {
                draft: Settings::default(),
                phase: Phase::Loading,
                save_state: SaveState::Idle,
                notice: None,
                resave_requested: false,
                torn_down: false,
            }),
        }
    }

    pub fn draft(&self) -> Settings {
        self.state.lock().draft.clone()
    }

    pub fn field_value(&self, field: Field) -> String {
        self.state.lock().draft.value_of(field).to_owned()
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    pub fn save_state(&self) -> SaveState {
        self.state.lock().save_state
    }

    pub fn notice(&self) -> Option<Notice> {
        self.state.lock().notice.clone()
    }

    /// Apply a `(section, key, value)` patch to the draft
    pub fn update_field(&self, section: &str, key: &str, value: &str) -> Result<(), FieldError> {
        let mut state = self.state.lock();
        state.draft = update_field(&state.draft, section, key, value)?;
        Ok(())
    }

    pub fn set_field(&self, field: Field, value: &str) -> Result<(), FieldError> {
        let mut state = self.state.lock();
        state.draft = set_field(&state.draft, field, value)?;
        Ok(())
    }

    /// Fetch the stored document into the draft.
    ///
    /// On failure the current draft is kept. Either way the form becomes `Ready`.
    pub async fn load(&self) -> Result<(), SettingsError> {
        let result = self.client.load().await;

        let mut state = self.state.lock();
        if state.torn_down {
            return result.map(|_| ());
        }
        state.phase = Phase::Ready;
        match result {
            Ok(settings) => {
                state.draft = settings;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings, keeping current draft");
                Err(e)
            }
        }
    }

    /// Persist the current draft.
    ///
    /// Saves never overlap: a call made while one is in flight returns
    /// `Queued` and the in-flight call re-submits the latest draft before
    /// resolving, so only the final outcome sets the notice.
    pub async fn save(&self) -> SaveOutcome {
        let mut draft = {
            let mut state = self.state.lock();
            if state.torn_down {
                return SaveOutcome::Abandoned;
            }
            if state.save_state == SaveState::Saving {
                state.resave_requested = true;
                return SaveOutcome::Queued;
            }
            state.save_state = SaveState::Saving;
            state.draft.clone()
        };
        let mut in_flight = InFlightSave {
            state: &self.state,
            completed: false,
        };

        loop {
            let result = self.client.save(&draft).await;

            let mut state = self.state.lock();
            if state.torn_down {
                return SaveOutcome::Abandoned;
            }
            if state.resave_requested {
                state.resave_requested = false;
                draft = state.draft.clone();
                continue;
            }

            in_flight.completed = true;
            return match result {
                Ok(saved) => {
                    state.save_state = SaveState::Saved;
                    state.notice = Some(Notice::saved());
                    SaveOutcome::Saved(saved)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to save settings");
                    state.save_state = SaveState::SaveFailed;
                    state.notice = Some(Notice::from(&e));
                    SaveOutcome::Failed(e)
                }
            };
        }
    }

    pub fn dismiss_notice(&self) {
        self.state.lock().notice = None;
    }

    /// Stop applying results of requests that resolve from now on
    pub fn teardown(&self) {
        self.state.lock().torn_down = true;
    }
}
