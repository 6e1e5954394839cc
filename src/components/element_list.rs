//! Element list component
//!
//! One row per graph element (nodes, then edges). Stands in for a graph
//! canvas: it shows the interaction cursor and selection, and turns mouse
//! clicks into pick actions.

use crate::action::Action;
use crate::model::{ElementKind, Network, SelectedElement};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Default)]
pub struct ElementListComponent {
    list_state: ListState,
    /// Inner list area from the last draw, for mouse hit-testing
    inner_area: Option<Rect>,
    /// Number of rows drawn last time
    row_count: usize,
}

impl ElementListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a terminal position inside the list to an element row.
    ///
    /// `Some(None)` is a click on the empty space below the last element;
    /// `None` means the position is outside the list.
    pub fn row_at(&self, column: u16, row: u16) -> Option<Option<usize>> {
        let inner = self.inner_area?;
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + (row - inner.y) as usize;
        Some((index < self.row_count).then_some(index))
    }

    /// Turn a left click into a pick action
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        self.row_at(mouse.column, mouse.row).map(Action::PickElement)
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        network: Option<&Network>,
        cursor: Option<usize>,
        selected: Option<&SelectedElement>,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Elements ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        self.inner_area = Some(block.inner(area));
        self.row_count = 0;

        let Some(network) = network else {
            let empty = List::new(vec![ListItem::new(Span::styled(
                "No network loaded",
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let items: Vec<ListItem> = network
            .elements()
            .into_iter()
            .map(|element| {
                let is_selected = selected == Some(&element);
                ListItem::new(element_line(network, &element, is_selected))
            })
            .collect();
        self.row_count = items.len();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        self.list_state.select(cursor);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

fn element_line(network: &Network, element: &SelectedElement, is_selected: bool) -> Line<'static> {
    let label = match element.kind {
        ElementKind::Node => network
            .node(&element.id)
            .map(|n| {
                let role = n.role();
                if role.is_empty() {
                    n.display_name().to_string()
                } else {
                    format!("{} [{}]", n.display_name(), role)
                }
            })
            .unwrap_or_else(|| element.id.clone()),
        ElementKind::Edge => network
            .edge(&element.id)
            .map(|e| {
                let a = network.node(&e.node_a).map(|n| n.display_name()).unwrap_or(&e.node_a);
                let b = network.node(&e.node_b).map(|n| n.display_name()).unwrap_or(&e.node_b);
                format!("{} ↔ {}", a, b)
            })
            .unwrap_or_else(|| element.id.clone()),
    };

    let kind_color = match element.kind {
        ElementKind::Node => Color::Green,
        ElementKind::Edge => Color::Blue,
    };
    let label_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{} ", element.kind.icon()), Style::default().fg(kind_color)),
        Span::styled(label, label_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::tests::sample_network;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_before_first_draw_is_ignored() {
        let mut list = ElementListComponent::new();
        assert_eq!(list.handle_mouse_event(click(3, 3)), None);
    }

    #[test]
    fn test_click_maps_to_row() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let mut list = ElementListComponent::new();
        let network = sample_network();

        terminal
            .draw(|frame| list.render(frame, frame.area(), Some(&network), None, None))
            .unwrap();

        // Border row is outside the list
        assert_eq!(list.handle_mouse_event(click(5, 0)), None);
        assert_eq!(
            list.handle_mouse_event(click(5, 1)),
            Some(Action::PickElement(Some(0)))
        );
        assert_eq!(
            list.handle_mouse_event(click(5, 8)),
            Some(Action::PickElement(Some(7)))
        );
    }

    #[test]
    fn test_click_below_last_element_deselects() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let mut list = ElementListComponent::new();
        let network = sample_network();

        terminal
            .draw(|frame| list.render(frame, frame.area(), Some(&network), None, None))
            .unwrap();

        // Eight elements occupy rows 1..=8
        assert_eq!(list.handle_mouse_event(click(5, 9)), Some(Action::PickElement(None)));
        assert_eq!(list.handle_mouse_event(click(5, 18)), Some(Action::PickElement(None)));
    }

    #[test]
    fn test_click_without_network_deselects() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut list = ElementListComponent::new();

        terminal
            .draw(|frame| list.render(frame, frame.area(), None, None, None))
            .unwrap();

        assert_eq!(list.handle_mouse_event(click(5, 1)), Some(Action::PickElement(None)));
    }

    #[test]
    fn test_render_shows_edge_endpoints() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut list = ElementListComponent::new();
        let network = sample_network();

        terminal
            .draw(|frame| {
                list.render(
                    frame,
                    frame.area(),
                    Some(&network),
                    Some(4),
                    Some(&SelectedElement::edge("ab")),
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("gateway ↔ server"));
    }
}
