use crate::dom::AttributeMap;
use crate::errors::NavigationError;
use crate::net::Request;
use std::fmt::Display;
use url::Url;

/// Submission method of a form. Anything HTML does not recognize submits as GET.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

impl FormMethod {
    pub fn from_attribute(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("post") {
            FormMethod::Post
        } else {
            FormMethod::Get
        }
    }
}

impl Display for FormMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormMethod::Get => write!(f, "GET"),
            FormMethod::Post => write!(f, "POST"),
        }
    }
}

/// A form whose submission has been intercepted for a frame.
///
/// `fields` are the form's successful controls, in tree order.
#[derive(Debug, Clone, Default)]
pub struct FormElement {
    pub attributes: AttributeMap,
    pub fields: Vec<(String, String)>,
}

/// The button (or other control) that submitted the form.
#[derive(Debug, Clone, Default)]
pub struct Submitter {
    pub name: Option<String>,
    pub value: Option<String>,
    /// `formaction` override
    pub form_action: Option<String>,
    /// `formmethod` override
    pub form_method: Option<FormMethod>,
}

impl FormElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.attributes.set("action", action);
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.attributes.set("method", method);
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn action(&self) -> Option<&str> {
        self.attributes.get("action").filter(|a| !a.is_empty())
    }

    pub fn method(&self) -> FormMethod {
        self.attributes
            .get("method")
            .map(FormMethod::from_attribute)
            .unwrap_or_default()
    }

    /// Builds the request this form submits, resolving the action against `base`.
    ///
    /// The submitter's `formaction`/`formmethod` win over the form's own attributes,
    /// and a named submitter contributes its name/value pair after the form fields.
    /// A form without an action submits to `base` itself.
    pub fn submission(&self, submitter: Option<&Submitter>, base: &Url) -> Result<Request, NavigationError> {
        let method = submitter
            .and_then(|s| s.form_method)
            .unwrap_or_else(|| self.method());

        let action = submitter
            .and_then(|s| s.form_action.as_deref())
            .filter(|a| !a.is_empty())
            .or_else(|| self.action());

        let mut url = match action {
            Some(action) => base.join(action).map_err(|e| NavigationError::InvalidUrl {
                url: action.to_string(),
                reason: e.to_string(),
            })?,
            None => base.clone(),
        };

        let mut fields = self.fields.clone();
        if let Some(Submitter { name: Some(name), value, .. }) = submitter {
            fields.push((name.clone(), value.clone().unwrap_or_default()));
        }

        match method {
            FormMethod::Get => {
                // GET submissions replace the action's query with the form data
                url.set_query(None);
                if !fields.is_empty() {
                    url.query_pairs_mut().extend_pairs(fields.iter());
                }
                url.set_fragment(None);
                Ok(Request::get(url))
            }
            FormMethod::Post => Ok(Request::post_form(url, fields)),
        }
    }
}
