//! Layout calculations for the editor screen

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Editor screen areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub info: Rect,
    pub node_list: Option<Rect>,
    pub elements: Rect,
    pub properties: Option<Rect>,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the editor layout.
///
/// The properties panel takes the right third when open; the node-list
/// panel takes the left quarter when visible.
pub fn calculate_editor_layout(
    area: Rect,
    has_status: bool,
    show_node_list: bool,
    panel_open: bool,
) -> EditorLayout {
    let mut rows = vec![Constraint::Length(3), Constraint::Min(0)];
    if has_status {
        rows.push(Constraint::Length(1));
    }
    rows.push(Constraint::Length(3));

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(area);

    let mut columns = Vec::new();
    if show_node_list {
        columns.push(Constraint::Percentage(25));
    }
    columns.push(Constraint::Min(0));
    if panel_open {
        columns.push(Constraint::Percentage(35));
    }

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(main_chunks[1]);

    let mut next = 0;
    let node_list = show_node_list.then(|| {
        next += 1;
        content[0]
    });
    let elements = content[next];
    let properties = panel_open.then(|| content[next + 1]);

    let (status, help) = if has_status {
        (Some(main_chunks[2]), main_chunks[3])
    } else {
        (None, main_chunks[2])
    };

    EditorLayout {
        info: main_chunks[0],
        node_list,
        elements,
        properties,
        status,
        help,
    }
}
