//! Model layer - plain data and pure state transitions
//!
//! - `element` - selection identity (`SelectedElement`, `ElementKind`)
//! - `network` - network documents (nodes, edges, metadata)
//! - `panel` - properties panel state and its reducer
//! - `modal` - modal overlay stack

pub mod element;
pub mod modal;
pub mod network;
pub mod panel;

pub use element::{ElementKind, SelectedElement};
pub use network::{Network, Node};
pub use panel::PanelState;
