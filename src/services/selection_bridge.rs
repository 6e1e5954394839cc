//! Selection bridge - relays selection events into the panel controller

use super::panel_controller::{PanelController, PanelView};
use super::stream::{StreamMessage, StreamSource};
use crate::error::ShellError;
use crate::model::SelectedElement;

/// Forwards each selection event, unchanged and in order, to the panel
/// controller.
///
/// When the upstream stream errors or completes, the bridge logs it, forces
/// the panel closed and stops relaying.
pub struct SelectionBridge {
    source: StreamSource<Option<SelectedElement>>,
}

impl SelectionBridge {
    pub fn new(source: StreamSource<Option<SelectedElement>>) -> Self {
        Self { source }
    }

    /// Drain pending selection events. Returns the number of selection
    /// events applied.
    pub fn relay<V>(
        &mut self,
        panel: &mut PanelController,
        mut view: Option<&mut V>,
    ) -> Result<usize, ShellError>
    where
        V: PanelView + ?Sized,
    {
        if self.source.is_finished() {
            return Ok(0);
        }

        let mut applied = 0;
        for message in self.source.drain() {
            match message {
                StreamMessage::Next(selection) => {
                    log::debug!(
                        "selection: {}",
                        selection
                            .as_ref()
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "none".to_string())
                    );
                    panel.apply(selection.as_ref(), view.as_deref_mut())?;
                    applied += 1;
                }
                StreamMessage::Error(reason) => {
                    Self::stop(reason, panel, view.as_deref_mut())?;
                }
                StreamMessage::Complete => {
                    Self::stop("completed".to_string(), panel, view.as_deref_mut())?;
                }
            }
        }

        Ok(applied)
    }

    fn stop<V>(
        reason: String,
        panel: &mut PanelController,
        view: Option<&mut V>,
    ) -> Result<(), ShellError>
    where
        V: PanelView + ?Sized,
    {
        let failure = ShellError::UpstreamStreamFailure {
            stream: "selection",
            reason,
        };
        log::error!("{}; closing properties panel", failure);
        panel.close(view)
    }
}
