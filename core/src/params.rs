use http::Method;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::{BodyMode, Result};

/// Content type used for raw bodies when none is configured.
pub const DEFAULT_RAW_CONTENT_TYPE: &str = "text/plain";

/// A user-entered name/value pair, used for headers and body parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    /// Name of the entry.
    pub name: String,
    /// Value of the entry, always entered as text.
    pub value: String,
}

impl NameValue {
    /// Create a new pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Settings for importing a `curl` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurlImport {
    /// Import is switched on.
    pub enabled: bool,
    /// Apply the imported fields to this request.
    pub apply: bool,
    /// The command line to import.
    pub command: String,
}

impl CurlImport {
    /// The command to apply, if both switches are on and the command is not blank.
    pub fn applied_command(&self) -> Option<&str> {
        if !self.enabled || !self.apply {
            return None;
        }
        Some(self.command.trim()).filter(|c| !c.is_empty())
    }
}

/// Every value the host supplies to resolve one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParams {
    /// Method used unless an import overrides it.
    pub method: Method,
    /// Base URL with scheme.
    pub base_url: String,
    /// Path placed between base and endpoint.
    pub mid_path: String,
    /// Endpoint path.
    pub endpoint_path: String,
    /// Command import settings.
    pub import: CurlImport,
    /// Whether `headers` are applied.
    pub send_headers: bool,
    /// User-entered headers.
    pub headers: Vec<NameValue>,
    /// Whether a body is sent. An imported body turns this on as well.
    pub send_body: bool,
    /// Body encoding.
    pub body_mode: BodyMode,
    /// User-entered body parameters for json and form bodies.
    pub body_parameters: Vec<NameValue>,
    /// Text for raw bodies.
    pub raw_body: String,
    /// Content type for raw bodies.
    pub raw_content_type: String,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            method: Method::POST,
            base_url: String::new(),
            mid_path: String::new(),
            endpoint_path: String::new(),
            import: CurlImport::default(),
            send_headers: false,
            headers: Vec::new(),
            send_body: false,
            body_mode: BodyMode::Json,
            body_parameters: Vec::new(),
            raw_body: String::new(),
            raw_content_type: DEFAULT_RAW_CONTENT_TYPE.to_string(),
        }
    }
}

impl RequestParams {
    /// Create params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the three URL segments.
    pub fn with_url(
        mut self,
        base_url: impl Into<String>,
        mid_path: impl Into<String>,
        endpoint_path: impl Into<String>,
    ) -> Self {
        self.base_url = base_url.into();
        self.mid_path = mid_path.into();
        self.endpoint_path = endpoint_path.into();
        self
    }

    /// Enable import of the given command and apply it.
    pub fn with_curl(mut self, command: impl Into<String>) -> Self {
        self.import = CurlImport {
            enabled: true,
            apply: true,
            command: command.into(),
        };
        self
    }

    /// Add a header and switch header sending on.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.send_headers = true;
        self.headers.push(NameValue::new(name, value));
        self
    }

    /// Switch body sending on with the given mode.
    pub fn with_body_mode(mut self, mode: BodyMode) -> Self {
        self.send_body = true;
        self.body_mode = mode;
        self
    }

    /// Add a body parameter.
    pub fn with_body_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.body_parameters.push(NameValue::new(name, value));
        self
    }

    /// Set a raw body and its content type.
    pub fn with_raw_body(mut self, body: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.send_body = true;
        self.body_mode = BodyMode::Raw;
        self.raw_body = body.into();
        self.raw_content_type = content_type.into();
        self
    }
}

/// Supplies request parameters for each batch item.
///
/// The executor asks again for every item, so values that change between
/// items (or between calls) are always picked up.
pub trait ParamSource: Send + Sync {
    /// Parameters for the item at `index`.
    fn request_params(&self, index: usize, item: &Value) -> Result<RequestParams>;
}

impl ParamSource for RequestParams {
    fn request_params(&self, _: usize, _: &Value) -> Result<RequestParams> {
        Ok(self.clone())
    }
}

impl<F> ParamSource for F
where
    F: Fn(usize, &Value) -> Result<RequestParams> + Send + Sync,
{
    fn request_params(&self, index: usize, item: &Value) -> Result<RequestParams> {
        self(index, item)
    }
}
