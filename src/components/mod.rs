//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod editor;
pub mod element_list;
pub mod help_dialog;
pub mod layout;
pub mod node_list;
pub mod properties_panel;
pub mod quit_dialog;

pub use editor::{render_help_bar, render_info_bar, render_status_bar, EditorRenderContext};
pub use element_list::ElementListComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_editor_layout, centered_popup};
pub use node_list::NodeListComponent;
pub use properties_panel::PropertiesPanel;
pub use quit_dialog::QuitDialog;
