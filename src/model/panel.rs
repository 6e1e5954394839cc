//! Properties panel state machine
//!
//! The panel is either closed or open for exactly one node. Transitions are
//! computed by [`reduce`], a pure function of the current state and the
//! incoming selection event.

use super::element::SelectedElement;
use std::fmt;

/// Observable state of the properties panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open(String),
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open(_))
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelState::Closed => write!(f, "Closed"),
            PanelState::Open(id) => write!(f, "Open({})", id),
        }
    }
}

/// Decide the next panel state for a selection event.
///
/// Absent selections and non-node elements close the panel; a node opens it
/// for that node. The previous state never influences the result, so the
/// last event processed always wins.
pub fn reduce(_current: &PanelState, selection: Option<&SelectedElement>) -> PanelState {
    match selection {
        Some(element) if element.is_node() => PanelState::Open(element.id.clone()),
        _ => PanelState::Closed,
    }
}
