//! Panel controller - single writer of the properties panel state

use crate::error::ShellError;
use crate::model::panel::{self, PanelState};
use crate::model::SelectedElement;

/// The view side of the properties panel
pub trait PanelView {
    /// Show the properties panel bound to a node
    fn open(&mut self, node_id: &str);

    /// Hide the properties panel
    fn close(&mut self);
}

/// Owns the panel state and drives the bound view.
///
/// When no view is bound, `strict_binding` decides between returning
/// [`ShellError::MissingPanelView`] and a logged no-op.
#[derive(Debug)]
pub struct PanelController {
    state: PanelState,
    strict_binding: bool,
}

impl PanelController {
    pub fn new(strict_binding: bool) -> Self {
        Self {
            state: PanelState::Closed,
            strict_binding,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Open the panel for a node. The caller has checked the element kind.
    pub fn open<V>(&mut self, node_id: &str, view: Option<&mut V>) -> Result<(), ShellError>
    where
        V: PanelView + ?Sized,
    {
        let Some(view) = self.require(view)? else {
            return Ok(());
        };
        view.open(node_id);
        self.state = PanelState::Open(node_id.to_string());
        log::debug!("panel: {}", self.state);
        Ok(())
    }

    /// Close the panel. Closing a closed panel changes nothing.
    pub fn close<V>(&mut self, view: Option<&mut V>) -> Result<(), ShellError>
    where
        V: PanelView + ?Sized,
    {
        let Some(view) = self.require(view)? else {
            return Ok(());
        };
        view.close();
        self.state = PanelState::Closed;
        log::debug!("panel: {}", self.state);
        Ok(())
    }

    /// Apply one selection event: nodes open the panel, anything else
    /// (including no selection) closes it.
    pub fn apply<V>(
        &mut self,
        selection: Option<&SelectedElement>,
        view: Option<&mut V>,
    ) -> Result<(), ShellError>
    where
        V: PanelView + ?Sized,
    {
        match panel::reduce(&self.state, selection) {
            PanelState::Open(id) => self.open(&id, view),
            PanelState::Closed => self.close(view),
        }
    }

    fn require<'v, V>(&self, view: Option<&'v mut V>) -> Result<Option<&'v mut V>, ShellError>
    where
        V: PanelView + ?Sized,
    {
        match view {
            Some(view) => Ok(Some(view)),
            None if self.strict_binding => Err(ShellError::MissingPanelView),
            None => {
                log::warn!("panel view not bound; ignoring panel transition");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every call made on the view
    #[derive(Debug, Default)]
    pub(crate) struct RecordingView {
        pub calls: Vec<String>,
        pub bound: Option<String>,
    }

    impl PanelView for RecordingView {
        fn open(&mut self, node_id: &str) {
            self.calls.push(format!("open({})", node_id));
            self.bound = Some(node_id.to_string());
        }

        fn close(&mut self) {
            self.calls.push("close".to_string());
            self.bound = None;
        }
    }

    #[test]
    fn test_node_selection_opens_panel() {
        let mut controller = PanelController::new(true);
        let mut view = RecordingView::default();

        controller
            .apply(Some(&SelectedElement::node("n1")), Some(&mut view))
            .unwrap();

        assert_eq!(controller.state(), &PanelState::Open("n1".to_string()));
        assert_eq!(view.bound.as_deref(), Some("n1"));
    }

    #[test]
    fn test_non_node_and_absent_selection_close_panel() {
        let mut controller = PanelController::new(true);
        let mut view = RecordingView::default();

        controller
            .apply(Some(&SelectedElement::node("n1")), Some(&mut view))
            .unwrap();
        controller
            .apply(Some(&SelectedElement::edge("e1")), Some(&mut view))
            .unwrap();
        assert_eq!(controller.state(), &PanelState::Closed);

        controller.apply(None, Some(&mut view)).unwrap();
        assert_eq!(controller.state(), &PanelState::Closed);
        assert_eq!(view.calls, vec!["open(n1)", "close", "close"]);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = PanelController::new(true);
        let mut view = RecordingView::default();

        controller.close(Some(&mut view)).unwrap();
        let once = controller.state().clone();
        controller.close(Some(&mut view)).unwrap();

        assert_eq!(controller.state(), &once);
        assert_eq!(view.bound, None);
    }

    #[test]
    fn test_missing_view_fails_loudly_when_strict() {
        let mut controller = PanelController::new(true);
        let result = controller.apply(Some(&SelectedElement::node("n1")), None::<&mut RecordingView>);
        assert!(matches!(result, Err(ShellError::MissingPanelView)));
        assert_eq!(controller.state(), &PanelState::Closed);
    }

    #[test]
    fn test_missing_view_is_noop_when_lenient() {
        let mut controller = PanelController::new(false);
        controller
            .apply(Some(&SelectedElement::node("n1")), None::<&mut RecordingView>)
            .unwrap();
        assert_eq!(controller.state(), &PanelState::Closed);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut controller = PanelController::new(true);
        let mut view = RecordingView::default();
        let dyn_view: &mut dyn PanelView = &mut view;

        controller.open("n9", Some(dyn_view)).unwrap();
        assert_eq!(controller.state(), &PanelState::Open("n9".to_string()));
    }
}
