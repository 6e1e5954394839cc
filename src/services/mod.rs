//! Shell services
//!
//! This module contains the event plumbing between the interaction layer,
//! the network source and the views:
//! - Multicast streams and the typed UI event bus
//! - Network loading and the active-network source
//! - Interaction (cursor, selection, delete)
//! - Keyboard dispatch
//! - Selection bridge and panel controller
//! - Node-list publisher

pub mod event_bus;
pub mod interaction;
pub mod keyboard;
pub mod network;
pub mod node_list;
pub mod panel_controller;
pub mod selection_bridge;
pub mod stream;

pub use event_bus::{EventBus, Subscription, UiEvent};
pub use interaction::{InteractionContext, InteractionService};
pub use keyboard::{KeyInput, KeyboardDispatcher, KeyboardPolicy};
pub use network::NetworkService;
pub use node_list::NodeListPublisher;
pub use panel_controller::{PanelController, PanelView};
pub use selection_bridge::SelectionBridge;
