//! Request correlation ids.
//!
//! A caller-supplied `X-Request-ID` header is reused; otherwise a UUID v7
//! (time-sortable) is generated. The id is attached to handler logs and to the
//! `instance` field of problem responses.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract the request ID from headers or generate a new UUID v7.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_header_id_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("test-123"));
        assert_eq!(extract_or_generate_request_id(&headers).as_str(), "test-123");
    }

    #[test]
    fn test_empty_header_generates_new_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static(""));
        let id = extract_or_generate_request_id(&headers);
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }
}
