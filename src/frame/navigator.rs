use crate::config::FrameControllerConfig;
use crate::dom::{FormElement, Submitter};
use crate::errors::{FrameError, NavigationError};
use crate::frame::{Frame, FrameController, FrameEvent, FrameId, NavigationFuture};
use crate::net::{fetch, Request};
use futures::FutureExt;
use http::header::{HeaderName, ACCEPT, USER_AGENT};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use url::Url;

const TURBO_FRAME_HEADER: HeaderName = HeaderName::from_static("turbo-frame");

/// Shared navigation service for frames: HTTP client, configuration, the runtime
/// visits run on, and the frame event bus. Cheap to clone.
#[derive(Clone)]
pub struct FrameNavigator {
    config: Arc<FrameControllerConfig>,
    client: reqwest::Client,
    runtime: Handle,
    event_tx: broadcast::Sender<FrameEvent>,
}

impl std::fmt::Debug for FrameNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameNavigator")
            .field("config", &self.config)
            .field("subscribers", &self.event_tx.receiver_count())
            .finish()
    }
}

impl FrameNavigator {
    /// Creates a navigator that spawns visits on `runtime`.
    pub fn new(config: FrameControllerConfig, runtime: Handle) -> Result<Self, FrameError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| FrameError::Client(e.to_string()))?;

        let (event_tx, _first_rx) = broadcast::channel(config.event_capacity);

        Ok(Self {
            config: Arc::new(config),
            client,
            runtime,
            event_tx,
        })
    }

    pub fn config(&self) -> &FrameControllerConfig {
        &self.config
    }

    /// Receive frame events sent from now on.
    pub fn subscribe_events(&self) -> broadcast::Receiver<FrameEvent> {
        self.event_tx.subscribe()
    }

    /// Creates the controller for one frame element.
    pub fn controller(&self) -> FetchFrameController {
        FetchFrameController {
            navigator: self.clone(),
            cancel: None,
        }
    }

    fn emit(&self, event: FrameEvent) {
        // no subscribers is fine
        let _ = self.event_tx.send(event);
    }

    fn request_for(&self, frame: &Frame, request: Request) -> Request {
        let mut request = request
            .with_header(USER_AGENT, &self.config.user_agent)
            .with_header(ACCEPT, &self.config.accept);

        if self.config.send_frame_header {
            if let Some(id) = frame.element_id() {
                request = request.with_header(TURBO_FRAME_HEADER, id);
            }
        }
        request
    }

    /// Spawns the request on the runtime. The navigation runs whether or not the
    /// returned future is polled.
    fn spawn(&self, frame_id: FrameId, request: Request, cancel: CancellationToken) -> NavigationFuture {
        let navigator = self.clone();
        let url = request.url.clone();

        let task = self.runtime.spawn(async move {
            navigator.emit(FrameEvent::VisitStarted {
                frame_id,
                url: url.clone(),
            });
            log::debug!("Frame {frame_id} requesting {} {url}", request.method);

            let result = tokio::select! {
                _ = cancel.cancelled() => Err(NavigationError::Canceled),
                r = fetch(&navigator.client, request) => r.map_err(NavigationError::from),
            };

            match result {
                Ok(resp) => {
                    log::debug!("Frame {frame_id} received {} from {}", resp.status, resp.url);
                    navigator.emit(FrameEvent::VisitCompleted {
                        frame_id,
                        url: resp.url.clone(),
                        status: resp.status,
                    });
                    Ok(Some(Arc::new(resp)))
                }
                Err(e) => {
                    log::warn!("Frame {frame_id} navigation to {url} failed: {e}");
                    navigator.emit(FrameEvent::VisitFailed {
                        frame_id,
                        url: url.to_string(),
                        error: e.to_string(),
                    });
                    Err(e)
                }
            }
        });

        async move {
            task.await
                .unwrap_or_else(|e| Err(NavigationError::Internal(e.to_string())))
        }
        .boxed()
    }
}

/// [`FrameController`] that loads frames over HTTP through a [`FrameNavigator`].
///
/// Disabled frames are never loaded. Disconnecting a frame cancels the visits it
/// has in flight; a newer visit does not cancel an older one.
pub struct FetchFrameController {
    navigator: FrameNavigator,
    /// Parent token for the visits of the frame's current connection
    cancel: Option<CancellationToken>,
}

impl FetchFrameController {
    fn cancel_token(&mut self) -> CancellationToken {
        self.cancel.get_or_insert_with(CancellationToken::new).child_token()
    }

    fn resolve(frame: &Frame, location: &str) -> Result<Url, NavigationError> {
        frame
            .document()
            .url()
            .join(location)
            .map_err(|e| NavigationError::InvalidUrl {
                url: location.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Drop for FetchFrameController {
    // a frame dropped while connected takes its visits with it
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}

impl FrameController for FetchFrameController {
    fn connect(&mut self, frame: &Frame) {
        if self.cancel.is_none() {
            self.cancel = Some(CancellationToken::new());
        }
        self.navigator.emit(FrameEvent::Connected { frame_id: frame.id() });
    }

    fn disconnect(&mut self, frame: &Frame) {
        if let Some(cancel) = self.cancel.take() {
            log::debug!("Frame {} disconnected, canceling in-flight visits", frame.id());
            cancel.cancel();
        }
        self.navigator.emit(FrameEvent::Disconnected { frame_id: frame.id() });
    }

    fn visit(&mut self, frame: &Frame, location: &str) -> NavigationFuture {
        if frame.disabled() {
            log::debug!("Frame {} is disabled, not visiting {location}", frame.id());
            self.navigator.emit(FrameEvent::VisitSuppressed {
                frame_id: frame.id(),
                location: location.to_string(),
            });
            return futures::future::ready(Ok(None)).boxed();
        }

        let url = match Self::resolve(frame, location) {
            Ok(url) => url,
            Err(e) => {
                log::error!("Frame {}: cannot resolve {location}: {e}", frame.id());
                self.navigator.emit(FrameEvent::VisitFailed {
                    frame_id: frame.id(),
                    url: location.to_string(),
                    error: e.to_string(),
                });
                return futures::future::ready(Err(e)).boxed();
            }
        };

        let request = self.navigator.request_for(frame, Request::get(url));
        let cancel = self.cancel_token();
        self.navigator.spawn(frame.id(), request, cancel)
    }

    fn form_submission_intercepted(
        &mut self,
        frame: &Frame,
        form: &FormElement,
        submitter: Option<&Submitter>,
    ) -> Option<NavigationFuture> {
        if frame.disabled() {
            log::debug!("Frame {} is disabled, ignoring form submission", frame.id());
            return None;
        }

        let request = match form.submission(submitter, frame.document().url()) {
            Ok(request) => request,
            Err(e) => {
                log::error!("Frame {}: invalid form submission: {e}", frame.id());
                return Some(futures::future::ready(Err(e)).boxed());
            }
        };

        self.navigator.emit(FrameEvent::FormSubmitted {
            frame_id: frame.id(),
            method: request.method.clone(),
            url: request.url.clone(),
        });

        let request = self.navigator.request_for(frame, request);
        let cancel = self.cancel_token();
        Some(self.navigator.spawn(frame.id(), request, cancel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::dom::{ElementLifecycle, Window};
    use crate::frame::FrameElement;
    use std::time::Duration;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn navigator() -> FrameNavigator {
        let config = FrameControllerConfig::builder()
            .user_agent("gosub-test/1.0")
            .build()
            .unwrap();
        FrameNavigator::new(config, Handle::current()).unwrap()
    }

    fn connected_frame(server: &MockServer, navigator: &FrameNavigator) -> (Window, FrameElement) {
        let window = Window::new(Url::parse(&server.uri()).unwrap());
        let mut element = FrameElement::new(&window.document(), Box::new(navigator.controller()));
        element.connected_callback();
        (window, element)
    }

    fn drain(rx: &mut broadcast::Receiver<FrameEvent>) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    #[tokio::test]
    async fn src_change_fetches_frame_with_headers() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/frames/inbox"))
            .and(header("turbo-frame", "inbox"))
            .and(header("user-agent", "gosub-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<turbo-frame id=\"inbox\">hi</turbo-frame>"))
            .expect(1)
            .mount(&server)
            .await;

        let navigator = navigator();
        let mut rx = navigator.subscribe_events();
        let (_window, mut element) = connected_frame(&server, &navigator);
        element.set_attribute("id", "inbox");
        element.set_src(Some("/frames/inbox"));

        let resp = element.loaded().await.unwrap().expect("response");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.url.path(), "/frames/inbox");
        assert!(resp.text().contains("hi"));

        let id = element.id();
        let events = drain(&mut rx);
        assert_eq!(events[0], FrameEvent::Connected { frame_id: id });
        assert!(matches!(&events[1], FrameEvent::VisitStarted { url, .. } if url.path() == "/frames/inbox"));
        assert!(matches!(&events[2], FrameEvent::VisitCompleted { status: 200, .. }));
    }

    #[tokio::test]
    async fn error_statuses_are_still_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let navigator = navigator();
        let (_window, mut element) = connected_frame(&server, &navigator);
        element.set_src(Some("/missing"));

        let resp = element.loaded().await.unwrap().expect("response");
        assert_eq!(resp.status, 404);
        assert_eq!(resp.status_text, "Not Found");
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn disabled_frames_are_not_fetched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let navigator = navigator();
        let mut rx = navigator.subscribe_events();
        let (_window, mut element) = connected_frame(&server, &navigator);
        element.set_disabled(true);
        element.set_src(Some("/frames/inbox"));

        assert_eq!(element.loaded().await, Ok(None));
        assert_eq!(element.loaded().location(), Some("/frames/inbox"));

        let events = drain(&mut rx);
        assert_eq!(
            events.last(),
            Some(&FrameEvent::VisitSuppressed {
                frame_id: element.id(),
                location: "/frames/inbox".into()
            })
        );

        // forms are ignored as well
        element.form_submission_intercepted(&FormElement::new().with_method("post"), None);
        assert_eq!(element.loaded().location(), Some("/frames/inbox"));
    }

    #[tokio::test]
    async fn disconnect_cancels_in_flight_visits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let navigator = navigator();
        let (_window, mut element) = connected_frame(&server, &navigator);
        element.set_src(Some("/slow"));
        element.disconnected_callback();

        let result = tokio::time::timeout(Duration::from_secs(5), element.loaded())
            .await
            .expect("cancellation resolves the visit");
        assert_eq!(result, Err(NavigationError::Canceled));
    }

    #[tokio::test]
    async fn dropping_a_connected_frame_cancels_its_visits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let navigator = navigator();
        let (_window, mut element) = connected_frame(&server, &navigator);
        element.set_src(Some("/slow"));
        let loaded = element.loaded();
        drop(element);

        let result = tokio::time::timeout(Duration::from_secs(5), loaded)
            .await
            .expect("dropping the frame resolves the visit");
        assert_eq!(result, Err(NavigationError::Canceled));
    }

    #[tokio::test]
    async fn post_form_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(body_string("body=hello&commit=Send"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let navigator = navigator();
        let mut rx = navigator.subscribe_events();
        let (_window, mut element) = connected_frame(&server, &navigator);

        let form = FormElement::new()
            .with_action("/messages")
            .with_method("post")
            .with_field("body", "hello");
        let submitter = Submitter {
            name: Some("commit".into()),
            value: Some("Send".into()),
            ..Default::default()
        };
        element.form_submission_intercepted(&form, Some(&submitter));

        let resp = element.loaded().await.unwrap().expect("response");
        assert_eq!(resp.status, 201);

        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e, FrameEvent::FormSubmitted { method, .. } if *method == http::Method::POST)));
    }

    #[tokio::test]
    async fn unresolvable_location_fails_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let navigator = navigator();
        let (_window, mut element) = connected_frame(&server, &navigator);

        let result = element.visit("http://[::1").await;
        assert!(matches!(result, Err(NavigationError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let config = FrameControllerConfig {
            event_capacity: 0,
            ..Default::default()
        };
        let err = FrameNavigator::new(config, Handle::current()).unwrap_err();
        assert_eq!(err, FrameError::Config(ConfigError::ZeroEventCapacity));
    }
}
