use gosub_frame::dom::{ElementLifecycle, FormElement, Window};
use gosub_frame::{FrameControllerConfig, FrameElement, FrameEvent, FrameLoadingStyle, FrameNavigator};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Page that hosts the frame, and the location the frame loads. Relative
    // locations are resolved against the page URL.
    let page = std::env::args().nth(1).unwrap_or_else(|| "https://example.com/".into());
    let src = std::env::args().nth(2).unwrap_or_else(|| "/".into());

    // Register <turbo-frame>. Calling this more than once is fine.
    FrameElement::define()?;

    let config = FrameControllerConfig::builder()
        .user_agent("GosubFrameDemo/0.1")
        .build()?;
    let navigator = FrameNavigator::new(config, tokio::runtime::Handle::current())?;

    // Print everything the navigator does in the background
    let mut event_rx = navigator.subscribe_events();
    let printer = tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            match event {
                FrameEvent::VisitStarted { url, .. } => println!("-> GET {url}"),
                FrameEvent::VisitCompleted { url, status, .. } => println!("<- {status} {url}"),
                FrameEvent::VisitFailed { url, error, .. } => println!("!! {url}: {error}"),
                other => println!("   {other:?}"),
            }
        }
    });

    let window = Window::new(Url::parse(&page)?);
    let mut frame = FrameElement::new(&window.document(), Box::new(navigator.controller()));
    frame.set_attribute("id", "demo");

    // A lazy frame waits for an explicit visit
    frame.set_loading(Some(FrameLoadingStyle::Lazy));
    frame.connected_callback();
    frame.set_src(Some(&src));
    println!("lazy frame loaded: {:?}", frame.loaded().await?.map(|r| r.status));

    // Switching to eager does not load by itself; the next src write does
    frame.set_loading(Some(FrameLoadingStyle::Eager));
    frame.set_src(Some(&src));
    match frame.loaded().await {
        Ok(Some(resp)) => println!("eager frame loaded {} bytes from {}", resp.body.len(), resp.url),
        Ok(None) => println!("eager frame did not load"),
        Err(e) => println!("eager frame failed: {e}"),
    }

    // Submitting a GET form through the frame
    let form = FormElement::new().with_action(&src).with_field("q", "frames");
    frame.form_submission_intercepted(&form, None);
    println!("form submission: {:?}", frame.loaded().await.map(|r| r.map(|r| r.status)));

    frame.disconnected_callback();

    drop(navigator);
    drop(frame);
    printer.abort();

    Ok(())
}
