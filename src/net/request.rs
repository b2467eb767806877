use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

/// A single outgoing frame request.
///
/// `form` carries urlencoded fields for POST submissions; GET submissions encode
/// their fields into `url` instead.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub form: Option<Vec<(String, String)>>,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            form: None,
        }
    }

    pub fn post_form(url: Url, fields: Vec<(String, String)>) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: HeaderMap::new(),
            form: Some(fields),
        }
    }

    /// Sets a header, silently skipping values that are not valid header text.
    pub fn with_header(mut self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(v) => {
                self.headers.insert(name, v);
            }
            Err(e) => log::warn!("Skipping header {name}: {e}"),
        }
        self
    }
}
