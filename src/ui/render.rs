use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, scroll_for_focus};
use crate::ui::panel::panel_view;
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.panel();

    frame.render_widget(Header::new().widget(state), header);

    frame.render_widget(Clear, body);
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let view = panel_view(state);
    // Unwrapped, so one line is one row and the scroll offset stays exact.
    let scroll = scroll_for_focus(view.focus_line, block.inner(body).height);
    let paragraph = Paragraph::new(view.lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, body);

    frame.render_widget(Footer::new().widget(state, footer), footer);
}
