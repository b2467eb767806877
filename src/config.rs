//! Navigator configuration.
//!
//! `FrameControllerConfig` controls how the reference
//! [`FrameNavigator`](crate::frame::FrameNavigator) talks to the network on behalf
//! of frames: identity headers, whether the `Turbo-Frame` header is sent, and the
//! capacity of the frame event bus.
//!
//! ```rust
//! use gosub_frame::config::FrameControllerConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FrameControllerConfig::builder()
//!     .user_agent("Gosub/0.1")
//!     .event_capacity(64)
//!     .build()?;
//! assert_eq!(cfg.event_capacity, 64);
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! [`FrameControllerConfigBuilder::build`] returns a [`ConfigError`] when the user
//! agent or accept header is blank, or when the event capacity is zero.

const DEFAULT_USER_AGENT: &str = "Gosub/1.0 (X11; Linux x86_64) Gecko/20250802 GosubBrowser/1.0";
const DEFAULT_ACCEPT: &str = "text/html, application/xhtml+xml";
pub const DEFAULT_EVENT_CAPACITY: usize = 128;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameControllerConfig {
    /// User agent string for frame requests
    pub user_agent: String,
    /// Accept header sent with every frame request
    pub accept: String,
    /// Send a `Turbo-Frame` header carrying the element's id (when it has one)
    pub send_frame_header: bool,
    /// Capacity of the broadcast channel carrying frame events
    pub event_capacity: usize,
}

impl Default for FrameControllerConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            send_frame_header: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl FrameControllerConfig {
    pub fn builder() -> FrameControllerConfigBuilder {
        FrameControllerConfigBuilder::default()
    }

    /// Checks a config that was assembled without the builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }
}

/// Builder for [`FrameControllerConfig`].
#[derive(Debug, Clone, Default)]
pub struct FrameControllerConfigBuilder {
    inner: FrameControllerConfig,
}

impl FrameControllerConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FrameControllerConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }
    pub fn accept<S: Into<String>>(self, accept: S) -> Self { self.map(|c| c.accept = accept.into()) }
    pub fn send_frame_header(self, on: bool) -> Self { self.map(|c| c.send_frame_header = on) }
    pub fn event_capacity(self, n: usize) -> Self { self.map(|c| c.event_capacity = n) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut FrameControllerConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FrameControllerConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("user_agent must not be empty")]
    EmptyUserAgent,
    #[error("accept must not be empty")]
    EmptyAccept,
    #[error("event_capacity must be at least 1")]
    ZeroEventCapacity,
}

fn validate(c: &FrameControllerConfig) -> Result<(), ConfigError> {
    if c.user_agent.trim().is_empty() {
        return Err(ConfigError::EmptyUserAgent);
    }
    if c.accept.trim().is_empty() {
        return Err(ConfigError::EmptyAccept);
    }
    if c.event_capacity == 0 {
        return Err(ConfigError::ZeroEventCapacity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = FrameControllerConfig::builder().build().unwrap();
        assert_eq!(cfg, FrameControllerConfig::default());
        assert!(cfg.send_frame_header);
        assert_eq!(cfg.event_capacity, DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn builder_applies_changes() {
        let cfg = FrameControllerConfig::builder()
            .user_agent("Gosub/0.1")
            .accept("text/html")
            .send_frame_header(false)
            .with(|c| c.event_capacity = 8)
            .build()
            .unwrap();

        assert_eq!(cfg.user_agent, "Gosub/0.1");
        assert_eq!(cfg.accept, "text/html");
        assert!(!cfg.send_frame_header);
        assert_eq!(cfg.event_capacity, 8);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = FrameControllerConfig::builder().user_agent("  ").build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyUserAgent);

        let err = FrameControllerConfig::builder().accept("").build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyAccept);

        let err = FrameControllerConfig::builder().event_capacity(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroEventCapacity);
    }
}
