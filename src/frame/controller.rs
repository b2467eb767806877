use crate::dom::{FormElement, Submitter};
use crate::frame::{Frame, NavigationFuture};

/// Navigation collaborator of a [`FrameElement`](crate::frame::FrameElement).
///
/// The element decides *when* a frame navigates; the controller decides *how*:
/// fetching, rendering, honouring `disabled`, and cancelling work. Every element
/// owns exactly one controller, created together with the element.
///
/// Calls arrive on the host's event loop and must not block. Navigations are
/// started eagerly: the returned future only reports the outcome, the work must
/// make progress even if nobody awaits it.
pub trait FrameController {
    /// The frame was attached to a document.
    fn connect(&mut self, frame: &Frame);

    /// The frame was detached. May be called for a frame that is already detached.
    fn disconnect(&mut self, frame: &Frame);

    /// Navigate the frame to `location` (as written in `src`, possibly relative).
    fn visit(&mut self, frame: &Frame, location: &str) -> NavigationFuture;

    /// A descendant form was submitted towards this frame. Return a future when the
    /// submission is a navigation whose outcome the frame should track.
    fn form_submission_intercepted(
        &mut self,
        frame: &Frame,
        form: &FormElement,
        submitter: Option<&Submitter>,
    ) -> Option<NavigationFuture>;
}
