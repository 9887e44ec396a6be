//! Body rendering for the settings panel.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::settings::{stringify, Field, FieldEditor, ReadValue, DISABLED, ENABLED, NOT_SET};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{EditSession, PanelState, ReadyPanel, UnavailableReason};

const INDENT: &str = "    ";
const TEXT_CURSOR: &str = "▏";

/// Lines for the panel body plus the line where the focused field starts,
/// so the caller can scroll it into view.
#[derive(Debug, Default)]
pub struct PanelView {
    pub lines: Vec<Line<'static>>,
    pub focus_line: usize,
}

pub fn panel_view(state: &PanelState) -> PanelView {
    match state {
        PanelState::Loading => message_view(vec![muted("Loading settings…")]),
        PanelState::Unavailable { reason, .. } => message_view(unavailable_lines(reason)),
        PanelState::Ready(panel) => ready_view(panel),
    }
}

fn message_view(lines: Vec<Line<'static>>) -> PanelView {
    PanelView {
        lines,
        focus_line: 0,
    }
}

fn unavailable_lines(reason: &UnavailableReason) -> Vec<Line<'static>> {
    match reason {
        UnavailableReason::NoCredential => vec![
            Line::from(Span::styled(
                "No admin key configured.",
                Style::default().fg(HEADER_TEXT),
            )),
            muted("Pass --api-key, set auth.api_key in the config file,"),
            muted("or export the variable named by auth.api_key_env."),
        ],
        UnavailableReason::ClientFailed { message } => vec![
            Line::from(Span::styled(
                "Could not set up the connection to the admin API.",
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            muted("Check server.base_url and the TLS setup, then restart."),
        ],
        UnavailableReason::FetchFailed { message } => vec![
            Line::from(Span::styled(
                "Settings are not available.",
                Style::default().fg(HEADER_TEXT),
            )),
            muted("You may not have permission to view these settings."),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            muted("Press r to retry."),
        ],
    }
}

fn ready_view(panel: &ReadyPanel) -> PanelView {
    let fields = panel.settings.fields();
    if fields.is_empty() {
        return message_view(vec![muted("No settings available.")]);
    }

    let mut view = PanelView::default();
    for (index, field) in fields.iter().enumerate() {
        let focused = index == panel.focused;
        if focused {
            view.focus_line = view.lines.len();
        }

        let mut block = field_title(field, focused);
        if let Some(description) = &field.property.description {
            block.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(description.clone(), Style::default().fg(MUTED_TEXT)),
            ]));
        }

        match &panel.edit {
            Some(session) => {
                let editor =
                    FieldEditor::for_property(field.property, session.buffer.get(field.key));
                block.extend(editor_lines(&editor, session, focused));
            }
            None => block.extend(read_lines(&ReadValue::from_value(field.value))),
        }

        if focused {
            block = block
                .into_iter()
                .map(|line| line.style(Style::default().bg(ACTIVE_HIGHLIGHT)))
                .collect();
        }
        view.lines.extend(block);
        view.lines.push(Line::from(""));
    }
    view
}

fn field_title(field: &Field<'_>, focused: bool) -> Vec<Line<'static>> {
    let marker = if focused { "▶ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(
            field.key.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    let kind = field.property.kind.as_str();
    if !kind.is_empty() {
        spans.push(Span::styled(
            format!("  {}", kind),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    vec![Line::from(spans)]
}

/// Read-mode value lines.
pub fn read_lines(value: &ReadValue) -> Vec<Line<'static>> {
    match value {
        ReadValue::Flag(true) => vec![indented(Span::styled(
            ENABLED,
            Style::default().fg(STATUS_OK),
        ))],
        ReadValue::Flag(false) => vec![indented(Span::styled(
            DISABLED,
            Style::default().fg(MUTED_TEXT),
        ))],
        ReadValue::NotSet => vec![indented(Span::styled(
            NOT_SET,
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::ITALIC),
        ))],
        ReadValue::Chips(chips) if chips.is_empty() => {
            vec![indented(Span::styled("(empty)", Style::default().fg(MUTED_TEXT)))]
        }
        ReadValue::Chips(chips) => {
            let mut spans = vec![Span::raw(INDENT)];
            for chip in chips {
                spans.push(Span::styled(
                    format!("[{}]", chip),
                    Style::default().fg(ACCENT),
                ));
                spans.push(Span::raw(" "));
            }
            vec![Line::from(spans)]
        }
        ReadValue::Block(text) => text
            .lines()
            .map(|line| indented(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
            .collect(),
        ReadValue::Scalar(text) => vec![indented(Span::styled(
            text.clone(),
            Style::default().fg(HEADER_TEXT),
        ))],
    }
}

/// Edit-mode widget lines.
fn editor_lines(editor: &FieldEditor, session: &EditSession, focused: bool) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    match editor {
        FieldEditor::Toggle(flag) => {
            let (mark, label, color) = if *flag {
                ("[x] ", ENABLED, STATUS_OK)
            } else {
                ("[ ] ", DISABLED, MUTED_TEXT)
            };
            vec![Line::from(vec![
                Span::raw(INDENT),
                Span::styled(mark, text_style),
                Span::styled(label, Style::default().fg(color)),
            ])]
        }
        FieldEditor::Select { options, selected } => {
            let mut spans = vec![Span::raw(INDENT), Span::styled("< ", Style::default().fg(ACCENT))];
            for (index, option) in options.iter().enumerate() {
                let style = if Some(index) == *selected {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(MUTED_TEXT)
                };
                spans.push(Span::styled(option.clone(), style));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(">", Style::default().fg(ACCENT)));
            vec![Line::from(spans)]
        }
        FieldEditor::MultiSelect {
            options,
            selected,
            extra,
        } => {
            let mut spans = vec![Span::raw(INDENT)];
            for (index, (option, chosen)) in options.iter().zip(selected).enumerate() {
                let mark = if *chosen { "[x] " } else { "[ ] " };
                let mut style = if *chosen {
                    Style::default().fg(ACCENT)
                } else {
                    Style::default().fg(MUTED_TEXT)
                };
                if focused && index == session.option_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!("{}{}", mark, option), style));
                spans.push(Span::raw("  "));
            }
            for item in extra {
                spans.push(Span::styled(
                    format!("[{}]", stringify(item)),
                    Style::default().fg(MUTED_TEXT),
                ));
                spans.push(Span::raw(" "));
            }
            vec![Line::from(spans)]
        }
        FieldEditor::Text(seed) => {
            let typing = focused.then(|| session.text_input.as_ref()).flatten();
            let line = match typing {
                Some(input) => Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(format!("> {}", input), text_style),
                    Span::styled(TEXT_CURSOR, Style::default().fg(ACCENT)),
                ]),
                None if seed.is_empty() => indented(Span::styled(
                    "(empty)",
                    Style::default().fg(MUTED_TEXT),
                )),
                None => indented(Span::styled(seed.clone(), text_style)),
            };
            vec![line]
        }
    }
}

fn indented(span: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::raw(INDENT), span])
}

fn muted(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))
}

/// Plain text of a line, styling dropped.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
