//! Frame events emitted by the reference navigator.
//!
//! Subscribe with [`FrameNavigator::subscribe_events`](crate::frame::FrameNavigator::subscribe_events).
//! Only events sent after subscribing are received.

use crate::frame::FrameId;
use http::Method;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// Frame was attached and its controller is active
    Connected { frame_id: FrameId },
    /// Frame was detached; its in-flight navigations were canceled
    Disconnected { frame_id: FrameId },
    /// A request for the frame has been sent
    VisitStarted { frame_id: FrameId, url: Url },
    /// Response received (any status)
    VisitCompleted { frame_id: FrameId, url: Url, status: u16 },
    /// Navigation failed or was canceled
    VisitFailed { frame_id: FrameId, url: String, error: String },
    /// Navigation not started because the frame is disabled
    VisitSuppressed { frame_id: FrameId, location: String },
    /// A form submission was turned into a frame navigation
    FormSubmitted { frame_id: FrameId, method: Method, url: Url },
}

impl FrameEvent {
    pub fn frame_id(&self) -> FrameId {
        match self {
            FrameEvent::Connected { frame_id }
            | FrameEvent::Disconnected { frame_id }
            | FrameEvent::VisitStarted { frame_id, .. }
            | FrameEvent::VisitCompleted { frame_id, .. }
            | FrameEvent::VisitFailed { frame_id, .. }
            | FrameEvent::VisitSuppressed { frame_id, .. }
            | FrameEvent::FormSubmitted { frame_id, .. } => *frame_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_id_of_every_variant() {
        let id = FrameId::new();
        let url = Url::parse("https://example.com/a").unwrap();
        let events = vec![
            FrameEvent::Connected { frame_id: id },
            FrameEvent::Disconnected { frame_id: id },
            FrameEvent::VisitStarted { frame_id: id, url: url.clone() },
            FrameEvent::VisitCompleted { frame_id: id, url: url.clone(), status: 200 },
            FrameEvent::VisitFailed { frame_id: id, url: "/a".into(), error: "boom".into() },
            FrameEvent::VisitSuppressed { frame_id: id, location: "/a".into() },
            FrameEvent::FormSubmitted { frame_id: id, method: Method::POST, url },
        ];
        assert!(events.iter().all(|e| e.frame_id() == id));
    }
}
