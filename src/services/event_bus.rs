//! Typed event bus for loosely coupled UI regions
//!
//! Publishers do not know who listens. Each subscriber gets its own queue
//! and drains it on its own schedule; publishing never waits for delivery.

use super::stream::{StreamMessage, StreamSource, Subject};
use crate::model::Node;

/// Events broadcast between UI regions
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The active network's node list changed; `None` when no network is
    /// active
    UpdateNodeList(Option<Vec<Node>>),
}

impl UiEvent {
    /// Stable event name
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::UpdateNodeList(_) => "updateNodeList",
        }
    }
}

/// Application-wide broadcast of [`UiEvent`]s
#[derive(Default)]
pub struct EventBus {
    subject: Subject<UiEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
        }
    }

    /// Fire-and-forget broadcast
    pub fn publish(&mut self, event: UiEvent) {
        log::debug!(
            "bus: {} -> {} subscriber(s)",
            event.name(),
            self.subject.subscriber_count()
        );
        self.subject.next(event);
    }

    pub fn subscribe(&mut self) -> Subscription {
        Subscription {
            source: self.subject.subscribe(),
        }
    }
}

/// A subscriber's queue of bus events
pub struct Subscription {
    source: StreamSource<UiEvent>,
}

impl Subscription {
    /// Take every event published since the last call
    pub fn drain(&mut self) -> Vec<UiEvent> {
        self.source
            .drain()
            .into_iter()
            .filter_map(|message| match message {
                StreamMessage::Next(event) => Some(event),
                _ => None,
            })
            .collect()
    }
}
