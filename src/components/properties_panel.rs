//! Node properties side panel
//!
//! The panel never decides on its own whether it is open; the panel
//! controller calls `open`/`close` on it.

use crate::model::Network;
use crate::services::PanelView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Default)]
pub struct PropertiesPanel {
    node_id: Option<String>,
}

impl PanelView for PropertiesPanel {
    fn open(&mut self, node_id: &str) {
        self.node_id = Some(node_id.to_string());
    }

    fn close(&mut self) {
        self.node_id = None;
    }
}

impl PropertiesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, network: Option<&Network>) {
        let Some(node_id) = self.node_id.as_deref() else {
            return;
        };

        let lines = match network.and_then(|n| n.node(node_id).map(|node| (n, node))) {
            Some((network, node)) => {
                let flag = |on: bool| if on { "yes" } else { "no" };
                let neighbours = network.neighbours(node_id);
                vec![
                    field("Name", node.display_name().to_string()),
                    field("UUID", node.uuid.clone()),
                    Line::from(""),
                    field("Entry node", flag(node.entry_node).to_string()),
                    field("High value", flag(node.high_value_node).to_string()),
                    field("Vulnerability", format!("{:.2}", node.vulnerability)),
                    field("Position", format!("({:.1}, {:.1})", node.x_pos, node.y_pos)),
                    Line::from(""),
                    field("Connections", network.degree(node_id).to_string()),
                    field(
                        "Neighbours",
                        if neighbours.is_empty() {
                            "-".to_string()
                        } else {
                            neighbours.join(", ")
                        },
                    ),
                ]
            }
            None => vec![Line::from(Span::styled(
                format!("Node '{}' is not in the active network", node_id),
                Style::default().fg(Color::Red),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" Node Properties ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}
