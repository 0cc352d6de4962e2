use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (bands[0], bands[1], bands[2])
}

/// Split the body into a status strip (loading / error feedback) and the
/// product list below it.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(body);
    (parts[0], parts[1])
}
