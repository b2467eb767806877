//! Host document model: the small slice of a DOM that frame elements need.
//!
//! - [`AttributeMap`]: ordered attribute list of an element.
//! - [`Document`] and [`Window`]: owner documents and which one is live.
//! - [`FormElement`] and [`Submitter`]: intercepted form submissions.
//! - [`ElementLifecycle`] and [`CustomElementRegistry`]: how the host delivers
//!   lifecycle reactions and where element tags are defined.

mod attributes;
mod document;
mod form;
mod lifecycle;
mod registry;

pub use attributes::AttributeMap;
pub use document::{Document, DocumentId, Window, PREVIEW_ATTRIBUTE};
pub use form::{FormElement, FormMethod, Submitter};
pub use lifecycle::{ElementLifecycle, LifecycleEvent};
pub use registry::{CustomElementRegistry, ElementDefinition};
