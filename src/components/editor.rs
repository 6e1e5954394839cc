//! Editor screen chrome: info bar, status line and key-hint bar

use crate::model::{Network, SelectedElement};
use crate::services::KeyboardPolicy;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;

/// Read-only state the editor chrome renders from
pub struct EditorRenderContext<'a> {
    pub network: Option<&'a Network>,
    pub source_path: Option<&'a Path>,
    pub loaded_at: Option<DateTime<Local>>,
    pub selected: Option<&'a SelectedElement>,
    pub policy: KeyboardPolicy,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

pub fn render_info_bar(frame: &mut Frame, area: Rect, ctx: &EditorRenderContext) {
    let mut spans = vec![];

    match ctx.network {
        Some(network) => {
            spans.push(Span::styled(
                format!(" {} ", network.name()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(
                    " {} nodes, {} edges",
                    network.nodes.len(),
                    network.edges.len()
                ),
                Style::default().fg(Color::White),
            ));
            if network.doc_metadata.locked {
                spans.push(Span::styled(" [locked]", Style::default().fg(Color::Red)));
            }
        }
        None => spans.push(Span::styled(
            " no network ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    if let Some(path) = ctx.source_path {
        spans.push(Span::styled(
            format!("  {}", path.display()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(loaded_at) = ctx.loaded_at {
        spans.push(Span::styled(
            format!("  loaded {}", loaded_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" keys: {} ", ctx.policy.label()))
        .title_alignment(Alignment::Right);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &EditorRenderContext) {
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = ctx.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, ctx: &EditorRenderContext) {
    let key = |k: &str, color: Color| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![];
    if ctx.policy == KeyboardPolicy::Forward {
        spans.push(key("j/k", Color::Cyan));
        spans.push(Span::raw("Navigate  "));
        spans.push(key("Esc", Color::Yellow));
        spans.push(Span::raw("Deselect  "));
    }
    if ctx.selected.is_some() {
        spans.push(key("Del", Color::Red));
        spans.push(Span::raw("Delete  "));
    }
    spans.push(key("n", Color::Cyan));
    spans.push(Span::raw("Nodes  "));
    spans.push(key("R", Color::Green));
    spans.push(Span::raw("Reload  "));
    spans.push(key("?", Color::Cyan));
    spans.push(Span::raw("Help  "));
    spans.push(key("q", Color::Yellow));
    spans.push(Span::raw("Quit"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
