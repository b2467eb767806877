use crate::dom::AttributeMap;
use parking_lot::RwLock;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// Attribute on the document's root element that marks a transient preview render.
pub const PREVIEW_ATTRIBUTE: &str = "data-turbo-preview";

/// A unique identifier for a [`Document`]. Treat it as an opaque handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct DocumentInner {
    id: DocumentId,
    url: Url,
    /// Attributes of the root (`<html>`) element
    root: RwLock<AttributeMap>,
    /// Set while this document is the one displayed by its window
    live: AtomicBool,
}

/// Shared handle to a document. Clones point at the same document.
///
/// A document created with [`Document::new`] is not live: it is a snapshot, a
/// template or a document that has not been committed to a [`Window`] yet. Frames
/// owned by a non-live document never load on their own.
#[derive(Clone)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.inner.id)
            .field("url", &self.inner.url.as_str())
            .field("live", &self.is_live())
            .finish()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Document {}

impl Document {
    pub fn new(url: Url) -> Self {
        Self {
            inner: Arc::new(DocumentInner {
                id: DocumentId::new(),
                url,
                root: RwLock::new(AttributeMap::new()),
                live: AtomicBool::new(false),
            }),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.inner.id
    }

    /// Document URL, used as the base for relative frame locations.
    pub fn url(&self) -> &Url {
        &self.inner.url
    }

    /// Is this the document currently displayed by its window?
    pub fn is_live(&self) -> bool {
        self.inner.live.load(Ordering::Acquire)
    }

    fn set_live(&self, live: bool) {
        self.inner.live.store(live, Ordering::Release);
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.inner.root.read().get(name).map(str::to_string)
    }

    pub fn has_root_attribute(&self, name: &str) -> bool {
        self.inner.root.read().contains(name)
    }

    pub fn set_root_attribute(&self, name: &str, value: &str) {
        self.inner.root.write().set(name, value);
    }

    pub fn remove_root_attribute(&self, name: &str) {
        self.inner.root.write().remove(name);
    }

    /// A preview is a transient snapshot shown while the real page is restored.
    pub fn is_preview(&self) -> bool {
        self.has_root_attribute(PREVIEW_ATTRIBUTE)
    }
}

/// Top-level browsing context. Exactly one of its documents is live at a time.
pub struct Window {
    current: RwLock<Document>,
}

impl Window {
    /// Creates a window displaying a fresh live document for `url`.
    pub fn new(url: Url) -> Self {
        let document = Document::new(url);
        document.set_live(true);
        Self {
            current: RwLock::new(document),
        }
    }

    /// The live document.
    pub fn document(&self) -> Document {
        self.current.read().clone()
    }

    /// Commits `document` as the live document and returns the one it replaced.
    /// The replaced document stays usable but is no longer live.
    pub fn replace_document(&self, document: Document) -> Document {
        let mut current = self.current.write();
        if *current == document {
            return document;
        }

        log::debug!("Window replacing document {} with {}", current.id(), document.id());
        current.set_live(false);
        document.set_live(true);
        std::mem::replace(&mut *current, document)
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.current.get_mut().set_live(false);
    }
}
