//! Reducer for the settings panel.

use crate::settings::{parse_text, seed_text, FieldEditor};
use crate::ui::mvi::Reducer;

use super::intent::PanelIntent;
use super::state::{EditSession, Notice, PanelState, ReadyPanel, UnavailableReason};

/// Reducer for settings panel state transitions.
///
/// Pure function. Network calls are issued by the caller around the
/// dispatch: `SaveRequested` only flips `saving`, the caller sends the buffer
/// when the resulting state says a save is pending.
pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = PanelState;
    type Intent = PanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::Loaded { settings } => PanelState::Ready(ReadyPanel::new(settings)),
            PanelIntent::LoadFailed { message } => PanelState::Unavailable {
                notice: Some(Notice::error(format!("Failed to load settings: {}", message))),
                reason: UnavailableReason::FetchFailed { message },
            },
            PanelIntent::CredentialMissing => PanelState::Unavailable {
                reason: UnavailableReason::NoCredential,
                notice: None,
            },
            PanelIntent::ClientUnavailable { message } => PanelState::Unavailable {
                notice: Some(Notice::error(format!("Failed to load settings: {}", message))),
                reason: UnavailableReason::ClientFailed { message },
            },
            PanelIntent::Refresh => match state {
                PanelState::Ready(panel) if panel.is_editing() || panel.saving => {
                    PanelState::Ready(panel)
                }
                PanelState::Ready(_)
                | PanelState::Unavailable {
                    reason: UnavailableReason::FetchFailed { .. },
                    ..
                } => PanelState::Loading,
                other => other,
            },
            PanelIntent::DismissNotice => match state {
                PanelState::Ready(mut panel) => {
                    panel.notice = None;
                    PanelState::Ready(panel)
                }
                PanelState::Unavailable { reason, .. } => PanelState::Unavailable {
                    reason,
                    notice: None,
                },
                other => other,
            },
            intent => match state {
                PanelState::Ready(panel) => PanelState::Ready(reduce_ready(panel, intent)),
                other => other,
            },
        }
    }
}

fn reduce_ready(mut panel: ReadyPanel, intent: PanelIntent) -> ReadyPanel {
    match intent {
        PanelIntent::FocusNext => move_focus(&mut panel, true),
        PanelIntent::FocusPrev => move_focus(&mut panel, false),
        PanelIntent::BeginEdit if !panel.is_editing() && !panel.saving => {
            panel.edit = Some(EditSession::new(&panel.settings));
        }
        PanelIntent::CancelEdit if !panel.saving => {
            panel.edit = None;
        }
        PanelIntent::Toggle => {
            if let Some(editor) = panel.focused_editor() {
                match editor {
                    FieldEditor::Toggle(_) => update_focused(&mut panel, FieldEditor::toggle),
                    FieldEditor::Select { .. } => {
                        update_focused(&mut panel, |editor| editor.cycle(true))
                    }
                    FieldEditor::MultiSelect { .. } => toggle_highlighted(&mut panel),
                    FieldEditor::Text(_) => {}
                }
            }
        }
        PanelIntent::CycleOption { forward } => {
            if matches!(panel.focused_editor(), Some(FieldEditor::Select { .. })) {
                update_focused(&mut panel, |editor| editor.cycle(forward));
            }
        }
        PanelIntent::MoveOptionCursor { forward } => {
            let count = panel
                .focused_editor()
                .map(|editor| editor.option_count())
                .unwrap_or(0);
            if let (Some(session), true) = (panel.edit.as_mut(), count > 0) {
                let cursor = session.option_cursor.min(count - 1);
                session.option_cursor = match (forward, cursor) {
                    (true, c) if c + 1 >= count => 0,
                    (true, c) => c + 1,
                    (false, 0) => count - 1,
                    (false, c) => c - 1,
                };
            }
        }
        PanelIntent::ToggleOption => {
            if matches!(panel.focused_editor(), Some(FieldEditor::MultiSelect { .. })) {
                toggle_highlighted(&mut panel);
            }
        }
        PanelIntent::BeginText => {
            if matches!(panel.focused_editor(), Some(FieldEditor::Text(_))) {
                let seed = panel
                    .focused_key()
                    .map(|key| seed_text(panel.current_value(key)))
                    .unwrap_or_default();
                if let Some(session) = panel.edit.as_mut() {
                    session.text_input = Some(seed);
                }
            }
        }
        PanelIntent::InputChar(ch) => {
            if let Some(text) = text_input(&mut panel) {
                text.push(ch);
            }
        }
        PanelIntent::Backspace => {
            if let Some(text) = text_input(&mut panel) {
                text.pop();
            }
        }
        PanelIntent::CommitText => commit_text(&mut panel),
        PanelIntent::AbortText => {
            if let Some(session) = panel.edit.as_mut() {
                session.text_input = None;
            }
        }
        PanelIntent::SaveRequested if panel.is_editing() && !panel.saving => {
            commit_text(&mut panel);
            panel.saving = true;
        }
        PanelIntent::Saved { values } => {
            panel.settings.values = values;
            panel.edit = None;
            panel.saving = false;
            panel.notice = Some(Notice::success("Settings saved"));
        }
        PanelIntent::SaveFailed { message } => {
            panel.saving = false;
            panel.notice = Some(Notice::error(format!("Failed to save settings: {}", message)));
        }
        _ => {}
    }

    panel
}

/// Wrapping focus movement. Locked while free text is being typed.
fn move_focus(panel: &mut ReadyPanel, forward: bool) {
    let count = panel.settings.field_count();
    if count == 0 || panel.is_typing() {
        return;
    }
    panel.focused = match (forward, panel.focused.min(count - 1)) {
        (true, focused) if focused + 1 >= count => 0,
        (true, focused) => focused + 1,
        (false, 0) => count - 1,
        (false, focused) => focused - 1,
    };
    if let Some(session) = panel.edit.as_mut() {
        session.option_cursor = 0;
    }
}

/// Apply `change` to the focused field's widget and store the result.
fn update_focused<F>(panel: &mut ReadyPanel, change: F)
where
    F: FnOnce(&mut FieldEditor),
{
    if panel.saving {
        return;
    }
    let (Some(key), Some(property), Some(mut editor)) = (
        panel.focused_key().map(str::to_string),
        panel.focused_property(),
        panel.focused_editor(),
    ) else {
        return;
    };
    change(&mut editor);
    let value = editor.value(&property.kind);
    if let Some(session) = panel.edit.as_mut() {
        session.buffer.set(&key, value);
    }
}

fn toggle_highlighted(panel: &mut ReadyPanel) {
    let cursor = panel
        .edit
        .as_ref()
        .map(|session| session.option_cursor)
        .unwrap_or(0);
    update_focused(panel, |editor| editor.toggle_option(cursor));
}

fn text_input(panel: &mut ReadyPanel) -> Option<&mut String> {
    if panel.saving {
        return None;
    }
    panel.edit.as_mut()?.text_input.as_mut()
}

fn commit_text(panel: &mut ReadyPanel) {
    let Some(text) = panel
        .edit
        .as_mut()
        .and_then(|session| session.text_input.take())
    else {
        return;
    };
    let (Some(key), Some(property)) = (
        panel.focused_key().map(str::to_string),
        panel.focused_property(),
    ) else {
        return;
    };
    let value = parse_text(&property.kind, &text);
    if let Some(session) = panel.edit.as_mut() {
        session.buffer.set(&key, value);
    }
}
