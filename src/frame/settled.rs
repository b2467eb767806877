use crate::errors::NavigationError;
use crate::net::Response;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Outcome of a frame navigation. `Ok(None)` means "no response": nothing was
/// loaded, either because no navigation happened or because the controller
/// suppressed it.
pub type NavigationResult = Result<Option<Arc<Response>>, NavigationError>;

/// Future handed back by a [`FrameController`](crate::frame::FrameController)
/// for a navigation it started.
pub type NavigationFuture = BoxFuture<'static, NavigationResult>;

/// The settled slot of a frame: the outcome of its most recent navigation.
///
/// Cloning is cheap and every clone resolves to the same outcome, so any number
/// of observers can await one load. Awaiting a `Settled` never drives the
/// navigation itself beyond polling the controller's future.
#[derive(Clone)]
pub struct Settled {
    location: Option<String>,
    inner: Shared<NavigationFuture>,
}

impl std::fmt::Debug for Settled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settled")
            .field("location", &self.location)
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl Default for Settled {
    fn default() -> Self {
        Self::resolved()
    }
}

impl Settled {
    /// Already resolved to "no response". Every frame starts with this value.
    pub fn resolved() -> Self {
        let inner = futures::future::ready(Ok(None)).boxed().shared();
        // poll once so the outcome is visible through `peek` straight away
        let _ = inner.clone().now_or_never();
        Self { location: None, inner }
    }

    /// Tracks the navigation to `location` driven by `future`.
    pub fn new(location: impl Into<String>, future: NavigationFuture) -> Self {
        Self {
            location: Some(location.into()),
            inner: future.shared(),
        }
    }

    /// Location of the navigation this value tracks, `None` for the initial value.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Has the navigation finished (successfully or not)? An outcome becomes visible
    /// the first time any clone is polled after the controller's future completes.
    pub fn is_settled(&self) -> bool {
        self.inner.peek().is_some()
    }

    /// The outcome, if [`Settled::is_settled`].
    pub fn peek(&self) -> Option<&NavigationResult> {
        self.inner.peek()
    }
}

impl Future for Settled {
    type Output = NavigationResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;

    #[tokio::test]
    async fn resolved_is_no_response() {
        let settled = Settled::resolved();
        assert!(settled.location().is_none());
        assert!(settled.is_settled());
        assert_eq!(settled.peek(), Some(&Ok(None)));
        assert_eq!(settled.clone().await, Ok(None));
        assert!(settled.is_settled());
    }

    #[tokio::test]
    async fn clones_share_the_outcome() {
        let (tx, rx) = oneshot::channel::<NavigationResult>();
        let settled = Settled::new(
            "/a",
            async move { rx.await.unwrap_or(Err(NavigationError::Canceled)) }.boxed(),
        );
        let observer = settled.clone();
        assert!(!settled.is_settled());
        assert_eq!(settled.location(), Some("/a"));

        tx.send(Err(NavigationError::Network("connection refused".into()))).unwrap();

        let first = settled.await;
        let second = observer.await;
        assert_eq!(first, Err(NavigationError::Network("connection refused".into())));
        assert_eq!(first, second);
    }

    #[test]
    fn debug_shows_location() {
        let s = format!("{:?}", Settled::resolved());
        assert!(s.contains("Settled"));
        assert!(s.contains("location: None"));
    }
}
