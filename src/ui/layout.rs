use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Scroll offset that keeps `focus_line` (plus a few lines of its block)
/// inside a viewport of `height` lines.
pub fn scroll_for_focus(focus_line: usize, height: u16) -> u16 {
    const LOOKAHEAD: usize = 4;
    let height = height as usize;
    if height == 0 {
        return 0;
    }
    let wanted_bottom = focus_line + LOOKAHEAD;
    wanted_bottom.saturating_sub(height).min(focus_line) as u16
}
