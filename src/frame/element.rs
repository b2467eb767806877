use crate::dom::{
    AttributeMap, CustomElementRegistry, Document, ElementDefinition, ElementLifecycle, FormElement, Submitter,
};
use crate::errors::{FrameError, NavigationError};
use crate::frame::{FrameController, FrameLoadingStyle, Settled};
use lazy_static::lazy_static;
use std::fmt::Display;
use uuid::Uuid;

/// Tag name frame elements are registered under.
pub const FRAME_TAG_NAME: &str = "turbo-frame";

/// Only `src` mutations trigger navigations; other attributes are read when needed.
const OBSERVED_ATTRIBUTES: &[&str] = &["src"];

lazy_static! {
    static ref FRAME_DEFINITION: Result<(), FrameError> = CustomElementRegistry::global()
        .define(ElementDefinition::new(FRAME_TAG_NAME, OBSERVED_ATTRIBUTES));
}

/// A unique identifier for a frame element.
///
/// Internally a `FrameId` wraps a [`Uuid`]; treat it as an opaque handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(Uuid);

impl FrameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the element is currently inserted in its document.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Membership {
    #[default]
    Detached,
    Attached,
}

/// Read-only view of a frame's state, handed to its [`FrameController`].
#[derive(Debug)]
pub struct Frame {
    id: FrameId,
    /// Document that owns the element
    document: Document,
    attributes: AttributeMap,
    membership: Membership,
}

impl Frame {
    fn new(document: Document) -> Self {
        Self {
            id: FrameId::new(),
            document,
            attributes: AttributeMap::new(),
            membership: Membership::Detached,
        }
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    pub fn is_connected(&self) -> bool {
        self.membership == Membership::Attached
    }

    /// The element's `id` attribute, which names the frame to the server.
    pub fn element_id(&self) -> Option<&str> {
        self.attributes.get("id").filter(|id| !id.is_empty())
    }

    pub fn src(&self) -> Option<&str> {
        self.attributes.get("src")
    }

    pub fn loading(&self) -> FrameLoadingStyle {
        FrameLoadingStyle::from_attribute(self.attributes.get("loading").unwrap_or_default())
    }

    pub fn disabled(&self) -> bool {
        self.attributes.contains("disabled")
    }

    pub fn autoscroll(&self) -> bool {
        self.attributes.contains("autoscroll")
    }

    pub fn is_preview(&self) -> bool {
        self.document.is_preview()
    }

    /// Owned by the live document, and that document is not a preview render.
    pub fn is_active(&self) -> bool {
        self.document.is_live() && !self.is_preview()
    }

    /// Should a `src` mutation load the frame right now?
    pub fn should_autoload(&self) -> bool {
        let has_location = self.src().is_some_and(|src| !src.is_empty());

        has_location && self.is_connected() && self.is_active() && self.loading() == FrameLoadingStyle::Eager
    }
}

/// A `<turbo-frame>` element: reacts to its lifecycle and `src` attribute by
/// starting navigations through its controller, and keeps the outcome of the most
/// recent one in [`FrameElement::loaded`].
pub struct FrameElement {
    frame: Frame,
    controller: Box<dyn FrameController>,
    loaded: Settled,
}

impl std::fmt::Debug for FrameElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameElement")
            .field("frame", &self.frame)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl FrameElement {
    /// Registers the `turbo-frame` tag with the global registry. Only the first call
    /// defines the tag; later calls return the outcome of that first call.
    pub fn define() -> Result<(), FrameError> {
        FRAME_DEFINITION.clone()
    }

    /// Creates a detached frame element owned by `owner`.
    pub fn new(owner: &Document, controller: Box<dyn FrameController>) -> Self {
        let frame = Frame::new(owner.clone());
        log::trace!("Frame {} created in document {}", frame.id, owner.id());

        Self {
            frame,
            controller,
            loaded: Settled::resolved(),
        }
    }

    pub fn id(&self) -> FrameId {
        self.frame.id
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    // ---------- Attributes ----------

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.frame.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.frame.attributes.contains(name)
    }

    /// Sets an attribute. Observed attributes react synchronously, even when the
    /// value did not change.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let old_value = self.frame.attributes.set(name, value);
        if self.observes(name) {
            self.attribute_changed_callback(name, old_value.as_deref(), Some(value));
        }
    }

    /// Removes an attribute. Removing an attribute that is not present does nothing.
    pub fn remove_attribute(&mut self, name: &str) {
        if let Some(old_value) = self.frame.attributes.remove(name) {
            if self.observes(name) {
                self.attribute_changed_callback(name, Some(&old_value), None);
            }
        }
    }

    fn set_flag(&mut self, name: &str, on: bool) {
        if on {
            self.set_attribute(name, "");
        } else {
            self.remove_attribute(name);
        }
    }

    // ---------- Properties ----------

    pub fn src(&self) -> Option<&str> {
        self.frame.src()
    }

    /// A non-empty value sets `src`; `None` or an empty string removes it.
    pub fn set_src(&mut self, value: Option<&str>) {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.set_attribute("src", v),
            None => self.remove_attribute("src"),
        }
    }

    pub fn loading(&self) -> FrameLoadingStyle {
        self.frame.loading()
    }

    pub fn set_loading(&mut self, value: Option<FrameLoadingStyle>) {
        match value {
            Some(style) => self.set_attribute("loading", style.as_str()),
            None => self.remove_attribute("loading"),
        }
    }

    pub fn disabled(&self) -> bool {
        self.frame.disabled()
    }

    pub fn set_disabled(&mut self, value: bool) {
        self.set_flag("disabled", value);
    }

    pub fn autoscroll(&self) -> bool {
        self.frame.autoscroll()
    }

    pub fn set_autoscroll(&mut self, value: bool) {
        self.set_flag("autoscroll", value);
    }

    /// Outcome of the most recent navigation started by this frame. Resolves to
    /// `Ok(None)` right away when no navigation has been started yet.
    pub fn loaded(&self) -> Settled {
        self.loaded.clone()
    }

    pub fn is_active(&self) -> bool {
        self.frame.is_active()
    }

    pub fn is_preview(&self) -> bool {
        self.frame.is_preview()
    }

    pub fn is_connected(&self) -> bool {
        self.frame.is_connected()
    }

    // ---------- Navigation ----------

    /// Navigates the frame to `location` regardless of its loading style or
    /// membership. Returns the new settled value.
    pub fn visit(&mut self, location: &str) -> Settled {
        log::debug!("Frame {} visiting {}", self.frame.id, location);
        let future = self.controller.visit(&self.frame, location);
        self.loaded = Settled::new(location, future);
        self.loaded.clone()
    }

    /// Hands an intercepted form submission to the controller, scoped to this frame.
    pub fn form_submission_intercepted(&mut self, form: &FormElement, submitter: Option<&Submitter>) {
        let Some(future) = self.controller.form_submission_intercepted(&self.frame, form, submitter) else {
            return;
        };

        // Track the URL the submission targets, not the raw attribute
        let location = match form.submission(submitter, self.frame.document.url()) {
            Ok(request) => request.url.to_string(),
            Err(NavigationError::InvalidUrl { url, .. }) => url,
            Err(_) => self.frame.document.url().to_string(),
        };

        log::debug!("Frame {} tracking form submission to {}", self.frame.id, location);
        self.loaded = Settled::new(location, future);
    }
}

impl ElementLifecycle for FrameElement {
    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED_ATTRIBUTES
    }

    fn connected_callback(&mut self) {
        if self.frame.is_connected() {
            return;
        }

        self.frame.membership = Membership::Attached;
        log::trace!("Frame {} connected", self.frame.id);
        self.controller.connect(&self.frame);
    }

    fn disconnected_callback(&mut self) {
        self.frame.membership = Membership::Detached;
        log::trace!("Frame {} disconnected", self.frame.id);
        self.controller.disconnect(&self.frame);
    }

    fn attribute_changed_callback(&mut self, name: &str, _old_value: Option<&str>, _new_value: Option<&str>) {
        if !self.frame.should_autoload() {
            log::trace!("Frame {} not loading after {} change", self.frame.id, name);
            return;
        }

        if let Some(src) = self.frame.src().map(str::to_string) {
            self.visit(&src);
        }
    }
}
