//! Network boundary for frame navigations.
//!
//! The frame core never talks to the network itself; it only hands locations to a
//! [`FrameController`](crate::frame::FrameController). These types are what the
//! reference controller exchanges with the HTTP layer.

mod fetch;
mod request;
mod response;

pub use fetch::fetch;
pub use request::Request;
pub use response::Response;
