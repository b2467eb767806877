//! Frame system: [`FrameElement`], [`FrameController`] and [`Settled`].
//!
//! A `<turbo-frame>` element is a region of a document whose content is fetched
//! and replaced on its own. [`FrameElement`] is the policy layer: it watches the
//! element's lifecycle and its `src` attribute, decides when a navigation has to
//! happen, and hands the actual work to a [`FrameController`]. The most recent
//! navigation outcome is exposed through [`FrameElement::loaded`].
//!
//! [`FrameNavigator`] and [`FetchFrameController`] form a reference controller
//! that fetches frame content over HTTP on a tokio runtime.

mod controller;
mod element;
mod events;
mod loading;
mod navigator;
mod settled;

pub use controller::FrameController;
pub use element::{Frame, FrameElement, FrameId, Membership, FRAME_TAG_NAME};
pub use events::FrameEvent;
pub use loading::FrameLoadingStyle;
pub use navigator::{FetchFrameController, FrameNavigator};
pub use settled::{NavigationFuture, NavigationResult, Settled};
