//! Gosub frames: `<turbo-frame>` elements for the Gosub engine.
//!
//! A frame is a region of a document that loads and replaces its own content. This
//! crate contains the policy layer that decides when a frame navigates
//! ([`FrameElement`]), the seam to whatever performs the navigation
//! ([`FrameController`]), and a reference controller that fetches frames over HTTP
//! ([`FrameNavigator`]).
//!
//! ```rust
//! use gosub_frame::dom::{ElementLifecycle, Window};
//! use gosub_frame::{FrameControllerConfig, FrameElement, FrameNavigator};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! FrameElement::define()?;
//!
//! let navigator = FrameNavigator::new(FrameControllerConfig::default(), tokio::runtime::Handle::current())?;
//! let window = Window::new("https://example.com/".parse()?);
//!
//! let mut frame = FrameElement::new(&window.document(), Box::new(navigator.controller()));
//! frame.set_loading(Some(gosub_frame::FrameLoadingStyle::Lazy));
//! frame.connected_callback();
//!
//! // lazy frames do not load on their own
//! frame.set_src(Some("/messages"));
//! assert_eq!(frame.loaded().await, Ok(None));
//! # Ok(()) }
//! ```

pub mod config;
pub mod dom;
pub mod errors;
pub mod frame;
pub mod net;

pub use config::FrameControllerConfig;
pub use errors::{FrameError, NavigationError};
pub use frame::*;
