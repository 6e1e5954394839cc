//! Interaction service - cursor, selection and editing commands over the
//! active network's elements
//!
//! Selection changes are emitted on the selection stream; structural edits go
//! through the network service so every consumer sees the new network.

use super::keyboard::{InteractionSink, KeyInput};
use super::network::NetworkService;
use super::stream::{StreamSource, Subject};
use crate::model::{ElementKind, Network, SelectedElement};

/// Element cursor and current selection
#[derive(Default)]
pub struct InteractionService {
    cursor: Option<usize>,
    selected: Option<SelectedElement>,
    subject: Subject<Option<SelectedElement>>,
}

impl InteractionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to selection changes (`None` = deselected)
    pub fn selected_item(&mut self) -> StreamSource<Option<SelectedElement>> {
        self.subject.subscribe()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn selected(&self) -> Option<&SelectedElement> {
        self.selected.as_ref()
    }

    /// Emit a selection event. Every call is emitted, even when the
    /// selection did not change.
    pub fn select(&mut self, selection: Option<SelectedElement>) {
        self.selected = selection;
        self.subject.next(self.selected.clone());
    }

    /// Pick the element at a list row; rows past the end deselect
    pub fn pick(&mut self, row: Option<usize>, network: Option<&Network>) {
        let elements = network.map(|n| n.elements()).unwrap_or_default();
        match row.and_then(|r| elements.get(r).map(|e| (r, e.clone()))) {
            Some((index, element)) => {
                self.cursor = Some(index);
                self.select(Some(element));
            }
            None => self.select(None),
        }
    }

    /// Interpret a raw key press
    pub fn key_input(&mut self, key: &KeyInput, network: &mut NetworkService) {
        let len = network.active().map(|n| n.elements().len()).unwrap_or(0);

        let target = match key.key() {
            Some("ArrowDown") | Some("j") => self.step(len, 1),
            Some("ArrowUp") | Some("k") => self.step(len, -1),
            Some("Home") | Some("g") => (len > 0).then_some(0),
            Some("End") | Some("G") => len.checked_sub(1),
            Some("Escape") => {
                if self.selected.is_some() {
                    self.select(None);
                }
                return;
            }
            Some("Backspace") | Some("Delete") => {
                self.delete_current_selection(network);
                return;
            }
            _ => return,
        };

        if let Some(index) = target {
            self.pick(Some(index), network.active());
        }
    }

    /// Remove the selected node (with its edges) or edge from the active
    /// network, then deselect. No selection is a no-op.
    pub fn delete_current_selection(&mut self, network: &mut NetworkService) {
        let Some(selected) = self.selected.clone() else {
            log::debug!("delete requested with nothing selected");
            return;
        };

        let removed = network.update(|n| match selected.kind {
            ElementKind::Node => n.remove_node(&selected.id),
            ElementKind::Edge => n.remove_edge(&selected.id),
        });

        if removed {
            log::info!("deleted {}", selected);
        } else {
            log::warn!("selected {} no longer exists in the network", selected);
        }

        let len = network.active().map(|n| n.elements().len()).unwrap_or(0);
        self.cursor = match self.cursor {
            Some(c) if c >= len => len.checked_sub(1),
            other => other,
        };
        self.select(None);
    }

    /// Reset cursor and selection after the network was replaced
    pub fn network_replaced(&mut self) {
        self.cursor = None;
        if self.selected.is_some() {
            self.select(None);
        }
    }

    fn step(&self, len: usize, delta: isize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = match self.cursor {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(current) => (current as isize + delta).rem_euclid(len as isize) as usize,
        };
        Some(next)
    }
}

/// Binds the interaction service to the network it edits, for the keyboard
/// dispatcher
pub struct InteractionContext<'a> {
    pub interaction: &'a mut InteractionService,
    pub network: &'a mut NetworkService,
}

impl InteractionSink for InteractionContext<'_> {
    fn key_input(&mut self, key: &KeyInput) {
        self.interaction.key_input(key, self.network);
    }

    fn delete_current_selection(&mut self) {
        self.interaction.delete_current_selection(self.network);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::tests::sample_network;
    use crate::services::stream::StreamMessage;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyInput {
        KeyInput::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (
        InteractionService,
        NetworkService,
        StreamSource<Option<SelectedElement>>,
    ) {
        let mut interaction = InteractionService::new();
        let selections = interaction.selected_item();
        let mut network = NetworkService::new();
        network.set_active(Some(sample_network()));
        (interaction, network, selections)
    }

    fn selections(source: &mut StreamSource<Option<SelectedElement>>) -> Vec<Option<SelectedElement>> {
        source
            .drain()
            .into_iter()
            .filter_map(|m| match m {
                StreamMessage::Next(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_arrow_navigation_selects_under_cursor() {
        let (mut interaction, mut network, mut stream) = setup();

        interaction.key_input(&press(KeyCode::Down), &mut network);
        interaction.key_input(&press(KeyCode::Char('j')), &mut network);
        interaction.key_input(&press(KeyCode::Up), &mut network);

        assert_eq!(
            selections(&mut stream),
            vec![
                Some(SelectedElement::node("a")),
                Some(SelectedElement::node("b")),
                Some(SelectedElement::node("a")),
            ]
        );
        assert_eq!(interaction.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_wraps_around() {
        let (mut interaction, mut network, mut stream) = setup();

        interaction.key_input(&press(KeyCode::Up), &mut network);
        assert_eq!(interaction.cursor(), Some(7));
        interaction.key_input(&press(KeyCode::Down), &mut network);
        assert_eq!(interaction.cursor(), Some(0));

        let last = selections(&mut stream).pop().flatten();
        assert_eq!(last, Some(SelectedElement::node("a")));
    }

    #[test]
    fn test_end_selects_last_edge() {
        let (mut interaction, mut network, mut stream) = setup();
        interaction.key_input(&press(KeyCode::End), &mut network);
        assert_eq!(selections(&mut stream), vec![Some(SelectedElement::edge("cd"))]);
    }

    #[test]
    fn test_escape_deselects_only_when_selected() {
        let (mut interaction, mut network, mut stream) = setup();

        interaction.key_input(&press(KeyCode::Esc), &mut network);
        assert!(selections(&mut stream).is_empty());

        interaction.key_input(&press(KeyCode::Home), &mut network);
        interaction.key_input(&press(KeyCode::Esc), &mut network);
        assert_eq!(
            selections(&mut stream),
            vec![Some(SelectedElement::node("a")), None]
        );
    }

    #[test]
    fn test_unknown_and_unnamed_keys_do_nothing() {
        let (mut interaction, mut network, mut stream) = setup();
        interaction.key_input(&press(KeyCode::Char('z')), &mut network);
        interaction.key_input(&press(KeyCode::Null), &mut network);
        assert!(selections(&mut stream).is_empty());
        assert_eq!(interaction.cursor(), None);
    }

    #[test]
    fn test_delete_node_removes_edges_and_deselects() {
        let (mut interaction, mut network, mut stream) = setup();
        let mut networks = network.subscribe();

        interaction.pick(Some(2), network.active());
        interaction.delete_current_selection(&mut network);

        let active = network.active().unwrap();
        assert!(active.node("c").is_none());
        assert_eq!(active.edges.len(), 1);
        assert_eq!(
            selections(&mut stream),
            vec![Some(SelectedElement::node("c")), None]
        );
        assert_eq!(networks.drain().len(), 1);
        assert_eq!(interaction.selected(), None);
    }

    #[test]
    fn test_delete_last_element_moves_cursor_back() {
        let (mut interaction, mut network, _stream) = setup();
        interaction.key_input(&press(KeyCode::End), &mut network);
        interaction.key_input(&press(KeyCode::Delete), &mut network);

        assert_eq!(network.active().unwrap().edges.len(), 3);
        assert_eq!(interaction.cursor(), Some(6));
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let (mut interaction, mut network, mut stream) = setup();
        let mut networks = network.subscribe();

        interaction.delete_current_selection(&mut network);

        assert!(selections(&mut stream).is_empty());
        assert!(networks.drain().is_empty());
    }

    #[test]
    fn test_pick_past_end_deselects() {
        let (mut interaction, network, mut stream) = setup();
        interaction.pick(Some(4), network.active());
        interaction.pick(Some(40), network.active());
        assert_eq!(
            selections(&mut stream),
            vec![Some(SelectedElement::edge("ab")), None]
        );
    }

    #[test]
    fn test_network_replaced_clears_selection() {
        let (mut interaction, network, mut stream) = setup();
        interaction.pick(Some(0), network.active());
        interaction.network_replaced();
        assert_eq!(interaction.cursor(), None);
        assert_eq!(selections(&mut stream).last(), Some(&None));
    }

    #[test]
    fn test_context_routes_sink_calls() {
        let (mut interaction, mut network, mut stream) = setup();
        {
            let mut ctx = InteractionContext {
                interaction: &mut interaction,
                network: &mut network,
            };
            ctx.key_input(&press(KeyCode::Home));
            ctx.delete_current_selection();
        }
        assert!(network.active().unwrap().node("a").is_none());
        assert_eq!(selections(&mut stream).len(), 2);
    }
}
