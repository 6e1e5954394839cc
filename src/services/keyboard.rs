//! Application-level keyboard dispatch
//!
//! Every key press reaches the dispatcher before any widget. What happens
//! next depends on the configured [`KeyboardPolicy`]; a single dispatcher
//! instance runs exactly one policy.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A key press with a DOM-style key name.
///
/// `key` is `None` for presses that have no name (modifier-only keys, media
/// keys, lock keys, null).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Option<String>,
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            key: key_name(code),
            code,
            modifiers,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) if self.modifiers.is_empty() => write!(f, "{}", key),
            Some(key) => write!(f, "{:?}+{}", self.modifiers, key),
            None => write!(f, "<unnamed {:?}>", self.code),
        }
    }
}

/// Map a terminal key code to its DOM key name
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::F(n) => return Some(format!("F{}", n)),
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Insert => "Insert",
        _ => return None,
    };
    Some(name.to_string())
}

/// How the dispatcher treats key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardPolicy {
    /// Forward every key verbatim to the interaction handler
    #[default]
    Forward,
    /// Backspace/Delete delete the current selection; every other key is
    /// dropped
    DeleteIntercept,
}

impl KeyboardPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            KeyboardPolicy::Forward => "forward",
            KeyboardPolicy::DeleteIntercept => "delete-intercept",
        }
    }
}

/// Command side of the interaction layer
pub trait InteractionSink {
    /// Interpret a raw key press (navigation, modifiers, ...)
    fn key_input(&mut self, key: &KeyInput);

    /// Delete whatever is currently selected
    fn delete_current_selection(&mut self);
}

/// Routes key presses to the interaction sink according to one policy
#[derive(Debug, Clone, Copy)]
pub struct KeyboardDispatcher {
    policy: KeyboardPolicy,
}

impl KeyboardDispatcher {
    pub fn new(policy: KeyboardPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> KeyboardPolicy {
        self.policy
    }

    pub fn dispatch(&self, key: &KeyInput, sink: &mut dyn InteractionSink) {
        match self.policy {
            KeyboardPolicy::Forward => sink.key_input(key),
            KeyboardPolicy::DeleteIntercept => match key.key() {
                Some("Backspace") | Some("Delete") => {
                    log::debug!("keyboard: {} -> delete selection", key);
                    sink.delete_current_selection();
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MediaKeyCode, ModifierKeyCode};

    #[derive(Default)]
    struct RecordingSink {
        forwarded: Vec<KeyInput>,
        deletes: usize,
    }

    impl InteractionSink for RecordingSink {
        fn key_input(&mut self, key: &KeyInput) {
            self.forwarded.push(key.clone());
        }

        fn delete_current_selection(&mut self) {
            self.deletes += 1;
        }
    }

    fn press(code: KeyCode) -> KeyInput {
        KeyInput::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_names_follow_dom_naming() {
        assert_eq!(key_name(KeyCode::Backspace).as_deref(), Some("Backspace"));
        assert_eq!(key_name(KeyCode::Delete).as_deref(), Some("Delete"));
        assert_eq!(key_name(KeyCode::Up).as_deref(), Some("ArrowUp"));
        assert_eq!(key_name(KeyCode::Esc).as_deref(), Some("Escape"));
        assert_eq!(key_name(KeyCode::Char('x')).as_deref(), Some("x"));
        assert_eq!(key_name(KeyCode::F(5)).as_deref(), Some("F5"));
    }

    #[test]
    fn test_unnamed_keys_have_no_name() {
        assert_eq!(key_name(KeyCode::Null), None);
        assert_eq!(key_name(KeyCode::CapsLock), None);
        assert_eq!(key_name(KeyCode::Media(MediaKeyCode::Play)), None);
        assert_eq!(key_name(KeyCode::Modifier(ModifierKeyCode::LeftShift)), None);
    }

    #[test]
    fn test_from_key_event() {
        let event = KeyEvent {
            code: KeyCode::Delete,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let input = KeyInput::from(event);
        assert_eq!(input.key(), Some("Delete"));
        assert_eq!(input.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_intercept_deletes_once_for_backspace_and_delete() {
        let dispatcher = KeyboardDispatcher::new(KeyboardPolicy::DeleteIntercept);

        for code in [KeyCode::Backspace, KeyCode::Delete] {
            let mut sink = RecordingSink::default();
            dispatcher.dispatch(&press(code), &mut sink);
            assert_eq!(sink.deletes, 1, "{:?}", code);
            assert!(sink.forwarded.is_empty());
        }
    }

    #[test]
    fn test_intercept_ignores_every_other_key() {
        let dispatcher = KeyboardDispatcher::new(KeyboardPolicy::DeleteIntercept);
        let mut sink = RecordingSink::default();

        for code in [
            KeyCode::Char('d'),
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Esc,
            KeyCode::Null,
            KeyCode::Modifier(ModifierKeyCode::LeftControl),
        ] {
            dispatcher.dispatch(&press(code), &mut sink);
        }

        assert_eq!(sink.deletes, 0);
        assert!(sink.forwarded.is_empty());
    }

    #[test]
    fn test_intercept_treats_missing_key_as_no_match() {
        let dispatcher = KeyboardDispatcher::new(KeyboardPolicy::DeleteIntercept);
        let mut sink = RecordingSink::default();
        let input = KeyInput {
            key: None,
            code: KeyCode::Delete,
            modifiers: KeyModifiers::NONE,
        };

        dispatcher.dispatch(&input, &mut sink);
        assert_eq!(sink.deletes, 0);
    }

    #[test]
    fn test_forward_passes_every_key_verbatim() {
        let dispatcher = KeyboardDispatcher::new(KeyboardPolicy::Forward);
        let mut sink = RecordingSink::default();

        let keys = [press(KeyCode::Delete), press(KeyCode::Char('j')), press(KeyCode::Null)];
        for key in &keys {
            dispatcher.dispatch(key, &mut sink);
        }

        assert_eq!(sink.forwarded, keys.to_vec());
        assert_eq!(sink.deletes, 0);
    }

    #[test]
    fn test_policy_deserializes_from_snake_case() {
        let policy: KeyboardPolicy = serde_json::from_str("\"delete_intercept\"").unwrap();
        assert_eq!(policy, KeyboardPolicy::DeleteIntercept);
        assert_eq!(KeyboardPolicy::default(), KeyboardPolicy::Forward);
    }
}
