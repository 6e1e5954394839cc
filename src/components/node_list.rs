//! Node-list toolbar panel
//!
//! Knows nothing about networks: it only listens for `updateNodeList` on
//! the event bus and shows the last payload it received.

use crate::model::Node;
use crate::services::{Subscription, UiEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct NodeListComponent {
    subscription: Subscription,
    nodes: Option<Vec<Node>>,
    pub visible: bool,
}

impl NodeListComponent {
    pub fn new(subscription: Subscription, visible: bool) -> Self {
        Self {
            subscription,
            nodes: None,
            visible,
        }
    }

    /// Apply queued bus events. Returns true if the list changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for event in self.subscription.drain() {
            match event {
                UiEvent::UpdateNodeList(nodes) => {
                    self.nodes = nodes;
                    changed = true;
                }
            }
        }
        changed
    }

    #[cfg(test)]
    pub fn nodes(&self) -> Option<&[Node]> {
        self.nodes.as_deref()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(format!(
                " Network Nodes ({}) ",
                self.nodes.as_ref().map(|n| n.len()).unwrap_or(0)
            ))
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));

        let items: Vec<ListItem> = match &self.nodes {
            Some(nodes) if !nodes.is_empty() => {
                let name_width = nodes
                    .iter()
                    .map(|n| n.display_name().width())
                    .max()
                    .unwrap_or(0)
                    .min(area.width.saturating_sub(4) as usize);
                nodes
                    .iter()
                    .map(|node| ListItem::new(node_row(node, name_width)))
                    .collect()
            }
            Some(_) => vec![placeholder("Network has no nodes")],
            None => vec![placeholder("No network")],
        };

        frame.render_widget(List::new(items).block(block), area);
    }
}

fn node_row(node: &Node, name_width: usize) -> Line<'static> {
    let name = node.display_name();
    let padding = name_width.saturating_sub(name.width());
    let mut spans = vec![Span::raw(format!("{}{} ", name, " ".repeat(padding)))];
    if node.entry_node {
        spans.push(Span::styled("E", Style::default().fg(Color::Yellow)));
    }
    if node.high_value_node {
        spans.push(Span::styled("H", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

fn placeholder(text: &'static str) -> ListItem<'static> {
    ListItem::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
