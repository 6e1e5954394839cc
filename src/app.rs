//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates the services and the stream plumbing between them; the
//! panel decision and key policies live in the services.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_editor_layout, render_help_bar, render_info_bar, render_status_bar,
    EditorRenderContext, ElementListComponent, HelpDialog, NodeListComponent, PropertiesPanel,
    QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::services::{
    EventBus, InteractionContext, InteractionService, KeyInput, KeyboardDispatcher,
    NetworkService, NodeListPublisher, PanelController, SelectionBridge,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between services and components
pub struct App {
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Services
    // ─────────────────────────────────────────────────────────────────────────
    pub network: NetworkService,
    pub interaction: InteractionService,
    dispatcher: KeyboardDispatcher,
    bridge: SelectionBridge,
    panel: PanelController,
    publisher: NodeListPublisher,
    bus: EventBus,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub element_list: ElementListComponent,
    /// Bound in `init`; selection events before that hit the unbound-view path
    pub properties: Option<PropertiesPanel>,
    pub node_list: NodeListComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app and open the configured network, if any
    pub fn new(config: Config) -> App {
        let mut network = NetworkService::new();
        let mut interaction = InteractionService::new();
        let mut bus = EventBus::new();

        let bridge = SelectionBridge::new(interaction.selected_item());
        let publisher = NodeListPublisher::new(network.subscribe());
        let node_list = NodeListComponent::new(bus.subscribe(), config.show_node_list);

        let mut app = App {
            dispatcher: KeyboardDispatcher::new(config.keyboard_policy),
            panel: PanelController::new(config.strict_panel_binding()),
            help_dialog: HelpDialog::new(config.keyboard_policy),
            config,
            network,
            interaction,
            bridge,
            publisher,
            bus,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            element_list: ElementListComponent::new(),
            properties: None,
            node_list,
            quit_dialog: QuitDialog,
        };

        if let Some(path) = app.config.network_path.clone() {
            if let Err(e) = app.network.open(&path) {
                log::error!("{}", e);
                app.error = Some(e.to_string());
            }
        }

        app
    }

    /// Drain every pending stream event into its consumer
    fn pump(&mut self) -> Result<()> {
        self.bridge.relay(&mut self.panel, self.properties.as_mut())?;
        if self.publisher.relay(&mut self.bus).terminated {
            // The panel may be bound to a node of a network that is gone
            self.panel.close(self.properties.as_mut())?;
        }
        self.node_list.poll();
        Ok(())
    }

    fn reload_network(&mut self) {
        match self.network.reload() {
            Ok(()) => {
                self.interaction.network_replaced();
                self.error = None;
                self.status_message = self
                    .network
                    .active()
                    .map(|n| format!("Reloaded '{}'", n.name()));
            }
            Err(e) => {
                log::warn!("reload failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Application shortcuts, applied after the keyboard dispatcher has seen the key
fn app_shortcut(key: &KeyInput) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.key()? {
        "q" => Some(Action::OpenQuitDialog),
        "?" => Some(Action::OpenHelp),
        "n" => Some(Action::ToggleNodeList),
        "R" => Some(Action::ReloadNetwork),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.properties = Some(PropertiesPanel::new());
        self.pump()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        // Modals capture the keyboard
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        Ok(Some(Action::KeyDown(KeyInput::from(key))))
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        Ok(self.element_list.handle_mouse_event(mouse))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => None,
            Action::ForceQuit => {
                self.should_quit = true;
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Input
            // ─────────────────────────────────────────────────────────────────
            Action::KeyDown(key) => {
                let mut sink = InteractionContext {
                    interaction: &mut self.interaction,
                    network: &mut self.network,
                };
                self.dispatcher.dispatch(&key, &mut sink);
                app_shortcut(&key)
            }
            Action::PickElement(row) => {
                self.interaction.pick(row, self.network.active());
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                None
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
                None
            }
            Action::CloseModal => {
                self.modals.pop();
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // View Toggles
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleNodeList => {
                self.node_list.toggle();
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Network
            // ─────────────────────────────────────────────────────────────────
            Action::ReloadNetwork => {
                self.reload_network();
                None
            }
        };

        self.pump()?;
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let has_status = self.error.is_some() || self.status_message.is_some();
        let layout = calculate_editor_layout(
            area,
            has_status,
            self.node_list.visible,
            self.panel.state().is_open(),
        );

        let ctx = EditorRenderContext {
            network: self.network.active(),
            source_path: self.network.source_path(),
            loaded_at: self.network.loaded_at(),
            selected: self.interaction.selected(),
            policy: self.dispatcher.policy(),
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };

        render_info_bar(frame, layout.info, &ctx);
        if let Some(node_list_area) = layout.node_list {
            self.node_list.render(frame, node_list_area);
        }
        self.element_list.render(
            frame,
            layout.elements,
            ctx.network,
            self.interaction.cursor(),
            ctx.selected,
        );
        if let (Some(properties_area), Some(properties)) = (layout.properties, &self.properties) {
            properties.render(frame, properties_area, ctx.network);
        }
        if let Some(status_area) = layout.status {
            render_status_bar(frame, status_area, &ctx);
        }
        render_help_bar(frame, layout.help, &ctx);

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help { .. } => {
                let action = self.help_dialog.handle_key_event(key)?;
                if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                    *scroll_offset = self.help_dialog.scroll_offset;
                }
                Ok(action)
            }
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help { .. } => self.help_dialog.draw(frame, area),
        }
    }
}
