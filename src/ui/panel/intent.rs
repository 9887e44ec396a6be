//! Intents for the settings panel.

use serde_json::{Map, Value};

use crate::settings::Settings;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the settings panel reducer.
#[derive(Debug, Clone)]
pub enum PanelIntent {
    /// Fetch succeeded.
    Loaded { settings: Settings },
    /// Fetch failed; the panel shows an empty state.
    LoadFailed { message: String },
    /// No admin key, so no fetch was attempted.
    CredentialMissing,
    /// A key was resolved but the HTTP client could not be built.
    ClientUnavailable { message: String },
    /// Go back to Loading before a re-fetch. Read mode only.
    Refresh,

    FocusNext,
    FocusPrev,

    /// Enter edit mode with a buffer copied from the displayed values.
    BeginEdit,
    /// Discard the buffer and leave edit mode.
    CancelEdit,

    /// Flip a boolean, toggle the highlighted multi-select option, or step a
    /// single select forward, depending on the focused field.
    Toggle,
    CycleOption { forward: bool },
    MoveOptionCursor { forward: bool },
    ToggleOption,

    BeginText,
    InputChar(char),
    Backspace,
    CommitText,
    AbortText,

    /// User asked to save. Ignored while a save is already pending.
    SaveRequested,
    Saved { values: Map<String, Value> },
    SaveFailed { message: String },

    DismissNotice,
}

impl Intent for PanelIntent {}
