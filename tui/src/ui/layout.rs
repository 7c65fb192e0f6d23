use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main regions of the form screen.
///
/// # Returns
/// (header, body, events_opt)
pub fn vertical(area: Rect, show_events: bool) -> (Rect, Rect, Option<Rect>) {
    let constraints = if show_events {
        vec![Constraint::Length(4), Constraint::Min(10), Constraint::Length(7)]
    } else {
        vec![Constraint::Length(4), Constraint::Min(10)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = chunks[0];
    let body = chunks[1];
    let events = if show_events { Some(chunks[2]) } else { None };

    (header, body, events)
}

/// Splits body into (form, pane).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the form into three rows of paired inputs, the model selector and the submit line.
pub fn form(area: Rect) -> ([(Rect, Rect); 3], Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let pair = |r: Rect| {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(r);
        (cols[0], cols[1])
    };

    (
        [pair(rows[0]), pair(rows[1]), pair(rows[2])],
        rows[3],
        rows[4],
    )
}

/// Splits an input slot into (box, error line).
pub fn input(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    (rows[0], rows[1])
}

/// Centers a box of the given percentages inside `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
