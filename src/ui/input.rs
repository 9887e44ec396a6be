use crate::settings::FieldEditor;
use crate::ui::app::App;
use crate::ui::panel::PanelIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 's') {
        app.save();
        return;
    }

    if app.panel().is_typing() {
        handle_text_key(app, key);
    } else if app.panel().is_editing() {
        handle_edit_key(app, key);
    } else {
        handle_read_key(app, key);
    }
}

fn handle_read_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('e') => app.dispatch(PanelIntent::BeginEdit),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(PanelIntent::FocusPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.dispatch(PanelIntent::FocusNext)
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch(PanelIntent::CancelEdit),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            app.dispatch(PanelIntent::FocusPrev)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.dispatch(PanelIntent::FocusNext)
        }
        KeyCode::Char(' ') => app.dispatch(PanelIntent::Toggle),
        KeyCode::Left => step(app, false),
        KeyCode::Right => step(app, true),
        KeyCode::Enter => match focused_editor(app) {
            Some(editor) if editor.is_text() => app.dispatch(PanelIntent::BeginText),
            Some(_) => app.dispatch(PanelIntent::Toggle),
            None => {}
        },
        _ => {}
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.dispatch(PanelIntent::CommitText),
        KeyCode::Esc => app.dispatch(PanelIntent::AbortText),
        KeyCode::Backspace => app.dispatch(PanelIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(PanelIntent::InputChar(ch))
        }
        _ => {}
    }
}

/// Left/Right: step a single select, or move the multi-select cursor.
fn step(app: &mut App, forward: bool) {
    match focused_editor(app) {
        Some(FieldEditor::Select { .. }) => app.dispatch(PanelIntent::CycleOption { forward }),
        Some(FieldEditor::MultiSelect { .. }) => {
            app.dispatch(PanelIntent::MoveOptionCursor { forward })
        }
        _ => {}
    }
}

fn focused_editor(app: &App) -> Option<FieldEditor> {
    app.panel().ready()?.focused_editor()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
