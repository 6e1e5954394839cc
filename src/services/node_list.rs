//! Node-list publisher - rebroadcasts the active network's nodes

use super::event_bus::{EventBus, UiEvent};
use super::stream::{StreamMessage, StreamSource};
use crate::error::ShellError;
use crate::model::Network;

/// Result of one [`NodeListPublisher::relay`] pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeListRelay {
    /// `updateNodeList` events published
    pub published: usize,
    /// The network stream errored or completed during this pass
    pub terminated: bool,
}

/// Publishes `updateNodeList` once per active-network change
pub struct NodeListPublisher {
    source: StreamSource<Option<Network>>,
}

impl NodeListPublisher {
    pub fn new(source: StreamSource<Option<Network>>) -> Self {
        Self { source }
    }

    /// Drain network changes and publish one event per change.
    ///
    /// A terminated network stream clears the node list and is reported in
    /// the returned [`NodeListRelay`] so the caller can close the panel.
    pub fn relay(&mut self, bus: &mut EventBus) -> NodeListRelay {
        let mut outcome = NodeListRelay::default();
        for message in self.source.drain() {
            let nodes = match message {
                StreamMessage::Next(network) => network.map(|n| n.nodes),
                StreamMessage::Error(reason) => {
                    Self::report_failure(reason);
                    outcome.terminated = true;
                    None
                }
                StreamMessage::Complete => {
                    Self::report_failure("completed".to_string());
                    outcome.terminated = true;
                    None
                }
            };
            bus.publish(UiEvent::UpdateNodeList(nodes));
            outcome.published += 1;
        }
        outcome
    }

    fn report_failure(reason: String) {
        let failure = ShellError::UpstreamStreamFailure {
            stream: "network",
            reason,
        };
        log::error!("{}; clearing node list and closing properties panel", failure);
    }
}
