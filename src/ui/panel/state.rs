//! State for the settings panel.

use serde_json::Value;

use crate::settings::{EditBuffer, FieldEditor, PropertySchema, Settings};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient one-line message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Why there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No admin key; the fetch was never attempted.
    NoCredential,
    /// The HTTP client could not be built; retrying cannot help.
    ClientFailed { message: String },
    FetchFailed { message: String },
}

/// Pending edits plus the transient input state of the focused widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditSession {
    pub buffer: EditBuffer,
    /// Text being typed into a free-text field, committed on Enter.
    pub text_input: Option<String>,
    /// Highlighted option of a multi-select.
    pub option_cursor: usize,
}

impl EditSession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            buffer: EditBuffer::from_settings(settings),
            text_input: None,
            option_cursor: 0,
        }
    }
}

/// Loaded settings, in read or edit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyPanel {
    pub settings: Settings,
    pub focused: usize,
    /// `Some` while in edit mode.
    pub edit: Option<EditSession>,
    /// A save request is in flight.
    pub saving: bool,
    pub notice: Option<Notice>,
}

impl ReadyPanel {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            focused: 0,
            edit: None,
            saving: false,
            notice: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// True while the focused free-text field is capturing keystrokes.
    pub fn is_typing(&self) -> bool {
        self.edit
            .as_ref()
            .is_some_and(|session| session.text_input.is_some())
    }

    pub fn focused_key(&self) -> Option<&str> {
        self.settings.key_at(self.focused)
    }

    pub fn focused_property(&self) -> Option<PropertySchema> {
        self.focused_key()
            .and_then(|key| self.settings.schema.property(key))
            .cloned()
    }

    /// Value shown for `key`: the pending edit while editing, the stored
    /// value otherwise.
    pub fn current_value(&self, key: &str) -> Option<&Value> {
        match &self.edit {
            Some(session) => session.buffer.get(key),
            None => self.settings.values.get(key),
        }
    }

    /// Edit widget for the focused field (edit mode only).
    pub fn focused_editor(&self) -> Option<FieldEditor> {
        if !self.is_editing() {
            return None;
        }
        let key = self.focused_key()?;
        let property = self.settings.schema.property(key)?;
        Some(FieldEditor::for_property(property, self.current_value(key)))
    }
}

/// Settings panel lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Nothing to show (no credential, or the fetch failed).
    Unavailable {
        reason: UnavailableReason,
        notice: Option<Notice>,
    },
    Ready(ReadyPanel),
}

impl UiState for PanelState {}

impl PanelState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&ReadyPanel> {
        match self {
            Self::Ready(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.ready().map(|panel| &panel.settings)
    }

    pub fn is_editing(&self) -> bool {
        self.ready().is_some_and(ReadyPanel::is_editing)
    }

    pub fn is_saving(&self) -> bool {
        self.ready().is_some_and(|panel| panel.saving)
    }

    pub fn is_typing(&self) -> bool {
        self.ready().is_some_and(ReadyPanel::is_typing)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Loading => None,
            Self::Unavailable { notice, .. } => notice.as_ref(),
            Self::Ready(panel) => panel.notice.as_ref(),
        }
    }
}
