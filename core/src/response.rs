use bytes::Bytes;
use serde_json::json;
use serde_json::Value;

/// Field holding the original text of a response that is not JSON.
pub const RAW_RESPONSE_FIELD: &str = "data";

/// A response as produced by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// Undecoded text.
    Text(String),
    /// Already decoded value.
    Structured(Value),
}

impl From<String> for RawResponse {
    fn from(value: String) -> Self {
        RawResponse::Text(value)
    }
}

impl From<&str> for RawResponse {
    fn from(value: &str) -> Self {
        RawResponse::Text(value.to_string())
    }
}

impl From<Bytes> for RawResponse {
    fn from(value: Bytes) -> Self {
        RawResponse::Text(String::from_utf8_lossy(&value).into_owned())
    }
}

impl From<Value> for RawResponse {
    fn from(value: Value) -> Self {
        RawResponse::Structured(value)
    }
}

/// Turn a raw response into a structured value.
///
/// Text that does not parse as JSON is returned as
/// `{"data": "<original text>"}`. This never fails.
pub fn normalize(raw: impl Into<RawResponse>) -> Value {
    match raw.into() {
        RawResponse::Structured(v) => v,
        RawResponse::Text(s) => match serde_json::from_str(&s) {
            Ok(v) => v,
            Err(_) => json!({ RAW_RESPONSE_FIELD: s }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_json_text() {
        assert_eq!(normalize("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(normalize("[1, 2]"), json!([1, 2]));
    }

    #[test]
    fn test_normalize_wraps_non_json() {
        assert_eq!(normalize("not json"), json!({"data": "not json"}));
        assert_eq!(normalize(""), json!({"data": ""}));
    }

    #[test]
    fn test_normalize_structured_unchanged() {
        let v = json!({"nested": {"ok": true}});
        assert_eq!(normalize(v.clone()), v);
    }

    #[test]
    fn test_normalize_bytes() {
        assert_eq!(
            normalize(Bytes::from_static(b"{\"status\":\"ok\"}")),
            json!({"status": "ok"})
        );
    }
}
