use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderValue;
use http::Method;
use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value;

use crate::NameValue;
use crate::{Error, Result};

/// Ordered header mapping.
///
/// Keys are compared case-sensitively and stay in insertion order.
pub type Headers = IndexMap<String, String>;

/// Structured body fields for json and form bodies.
pub type Fields = Map<String, Value>;

/// How the body of a request is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyMode {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
    /// Sent byte-for-byte.
    Raw,
    /// No body at all.
    None,
}

impl BodyMode {
    /// The name used by the parameter surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyMode::Json => "json",
            BodyMode::Form => "form-urlencoded",
            BodyMode::Raw => "raw",
            BodyMode::None => "none",
        }
    }
}

impl fmt::Display for BodyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(BodyMode::Json),
            "form-urlencoded" | "form" => Ok(BodyMode::Form),
            "raw" => Ok(BodyMode::Raw),
            "none" => Ok(BodyMode::None),
            v => Err(Error::config_invalid(format!("unknown body mode: {v}"))),
        }
    }
}

/// Body of a request.
///
/// The variant decides the body mode, so a descriptor can never carry a body
/// that disagrees with its mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// No body.
    #[default]
    None,
    /// Fields serialized as a JSON object.
    Json(Fields),
    /// Fields encoded as `application/x-www-form-urlencoded`.
    Form(Fields),
    /// Raw text sent as is.
    Raw(String),
}

impl Body {
    /// Mode of this body.
    pub fn mode(&self) -> BodyMode {
        match self {
            Body::None => BodyMode::None,
            Body::Json(_) => BodyMode::Json,
            Body::Form(_) => BodyMode::Form,
            Body::Raw(_) => BodyMode::Raw,
        }
    }

    /// Structured fields of a json or form body.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Body::Json(fields) | Body::Form(fields) => Some(fields),
            _ => None,
        }
    }

    /// Encode the body into wire bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let bs = match self {
            Body::None => Bytes::new(),
            Body::Json(fields) => Bytes::from(serde_json::to_vec(fields)?),
            Body::Form(fields) => {
                let mut s = form_urlencoded::Serializer::new(String::new());
                for (k, v) in fields {
                    s.append_pair(k, &form_value(v));
                }
                Bytes::from(s.finish())
            }
            Body::Raw(text) => Bytes::from(text.clone()),
        };

        Ok(bs)
    }
}

/// Form values are strings on the wire, everything else is rendered as JSON text.
fn form_value(v: &Value) -> Cow<'_, str> {
    match v {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        v => Cow::Owned(v.to_string()),
    }
}

/// A fully resolved request, ready to be handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, not validated.
    pub url: String,
    /// Headers, first inserted key keeps its position.
    pub headers: Headers,
    /// Body.
    pub body: Body,
    /// Explicit body parameters overlaid on a json or form body.
    ///
    /// Kept apart so that signers can tell them from imported fields.
    pub body_parameters: Vec<NameValue>,
}

impl RequestDescriptor {
    /// Create a descriptor without headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: Body::None,
            body_parameters: Vec::new(),
        }
    }

    /// Mode of the carried body.
    #[inline]
    pub fn body_mode(&self) -> BodyMode {
        self.body.mode()
    }

    /// Get header value by exact name.
    #[inline]
    pub fn header_get(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Check whether a header with this name exists, ignoring ASCII case.
    pub fn header_contains_ignore_case(&self, key: &str) -> bool {
        self.headers.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    /// Set a header, overwriting any previous value with the same name.
    #[inline]
    pub fn header_insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Set a header only if no header with the same name exists yet.
    ///
    /// Returns `true` if the header was inserted.
    pub fn header_insert_if_absent(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let key = key.into();
        if self.headers.contains_key(&key) {
            return false;
        }
        self.headers.insert(key, value.into());
        true
    }

    /// Replace the header matching `key` ignoring ASCII case, or append it.
    ///
    /// The replaced entry keeps its position and its original spelling.
    pub fn header_replace_ignore_case(&mut self, key: &str, value: impl Into<String>) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, v)) => *v = value.into(),
            None => {
                self.headers.insert(key.to_string(), value.into());
            }
        }
    }

    /// Convert into an `http::Request` for the transport.
    pub fn into_http_request(self) -> Result<http::Request<Bytes>> {
        let body = self.body.to_bytes()?;

        let mut req = http::Request::builder()
            .method(self.method)
            .uri(self.url.as_str())
            .body(body)?;

        let headers = req.headers_mut();
        for (k, v) in &self.headers {
            headers.append(HeaderName::from_str(k)?, HeaderValue::from_str(v)?);
        }

        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(v: Value) -> Fields {
        match v {
            Value::Object(map) => map,
            _ => unreachable!("test fields must be an object"),
        }
    }

    #[test]
    fn test_body_mode_from_str() {
        assert_eq!(BodyMode::from_str("json").unwrap(), BodyMode::Json);
        assert_eq!(
            BodyMode::from_str("form-urlencoded").unwrap(),
            BodyMode::Form
        );
        assert_eq!(BodyMode::from_str("raw").unwrap(), BodyMode::Raw);
        assert_eq!(BodyMode::from_str("none").unwrap(), BodyMode::None);
        assert!(BodyMode::from_str("xml").is_err());
    }

    #[test]
    fn test_body_mode_follows_variant() {
        let mut req = RequestDescriptor::new(Method::POST, "https://h.co/x");
        assert_eq!(req.body_mode(), BodyMode::None);

        req.body = Body::Raw("hello".to_string());
        assert_eq!(req.body_mode(), BodyMode::Raw);

        req.body = Body::Form(Fields::new());
        assert_eq!(req.body_mode(), BodyMode::Form);
    }

    #[test]
    fn test_header_insert_if_absent_is_case_sensitive() {
        let mut req = RequestDescriptor::new(Method::GET, "https://h.co");
        assert!(req.header_insert_if_absent("X", "1"));
        assert!(!req.header_insert_if_absent("X", "2"));
        assert!(req.header_insert_if_absent("x", "3"));

        assert_eq!(req.header_get("X"), Some("1"));
        assert_eq!(req.header_get("x"), Some("3"));
        assert_eq!(req.headers.len(), 2);
    }

    #[test]
    fn test_header_replace_ignore_case_keeps_spelling() {
        let mut req = RequestDescriptor::new(Method::GET, "https://h.co");
        req.header_insert("content-type", "application/json");
        req.header_insert("Accept", "*/*");
        req.header_replace_ignore_case("Content-Type", "text/csv");

        assert_eq!(
            req.headers
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect::<Vec<_>>(),
            vec![("content-type", "text/csv"), ("Accept", "*/*")]
        );
    }

    #[test]
    fn test_form_body_encoding() {
        let body = Body::Form(fields(json!({"a": "x y", "n": 42, "b": true})));
        assert_eq!(body.to_bytes().unwrap(), Bytes::from("a=x+y&n=42&b=true"));
    }

    #[test]
    fn test_into_http_request() {
        let mut req = RequestDescriptor::new(Method::POST, "https://h.co/a/b");
        req.header_insert("Content-Type", "application/json");
        req.body = Body::Json(fields(json!({"k": "v"})));

        let http_req = req.into_http_request().unwrap();
        assert_eq!(http_req.method(), Method::POST);
        assert_eq!(http_req.uri().to_string(), "https://h.co/a/b");
        assert_eq!(
            http_req.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(http_req.body(), &Bytes::from(r#"{"k":"v"}"#));
    }

    #[test]
    fn test_into_http_request_rejects_malformed_url() {
        let req = RequestDescriptor::new(Method::GET, "not a url");
        assert!(req.into_http_request().is_err());
    }
}
