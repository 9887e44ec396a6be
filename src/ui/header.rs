use crate::ui::panel::PanelState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_WARN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title, mode badge and the schema description.
    pub fn widget(&self, state: &PanelState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Settings",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        let badge = if state.is_saving() {
            Some(("Saving…", STATUS_WARN))
        } else if is_modified(state) {
            Some(("Editing (modified)", STATUS_WARN))
        } else if state.is_editing() {
            Some(("Editing", STATUS_WARN))
        } else if state.is_loading() {
            Some(("Loading…", MUTED_TEXT))
        } else {
            None
        };
        if let Some((label, color)) = badge {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(label, Style::default().fg(color)));
        }

        if let Some(description) = state
            .settings()
            .and_then(|settings| settings.schema.description.clone())
        {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(description, Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn is_modified(state: &PanelState) -> bool {
    state
        .ready()
        .and_then(|panel| panel.edit.as_ref())
        .is_some_and(|session| session.buffer.is_dirty())
}
