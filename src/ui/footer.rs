use crate::ui::panel::{NoticeKind, PanelState, UnavailableReason};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &PanelState, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (text, style) = match state.notice() {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Success => STATUS_OK,
                    NoticeKind::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.message), Style::default().fg(color))
            }
            None => (hints(state).to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Key hints for the current mode.
pub fn hints(state: &PanelState) -> &'static str {
    if state.is_saving() {
        " Saving…"
    } else if state.is_typing() {
        " Enter: Apply │ Esc: Discard text │ Ctrl+S: Save"
    } else if state.is_editing() {
        " ↑↓: Move │ Space: Toggle │ ←→: Choose │ Enter: Edit text │ Ctrl+S: Save │ Esc: Cancel"
    } else if state.settings().is_some() {
        " ↑↓: Move │ e: Edit │ r: Refresh │ q: Quit"
    } else if matches!(
        state,
        PanelState::Unavailable {
            reason: UnavailableReason::FetchFailed { .. },
            ..
        }
    ) {
        " r: Retry │ q: Quit"
    } else {
        " q: Quit"
    }
}
