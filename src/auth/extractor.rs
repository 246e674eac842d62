//! Credential extraction
//!
//! Each extractor knows one place a client may put its key. The guard holds
//! them in priority order and uses the first one that yields a value.

use super::types::CredentialSource;
use actix_web::HttpRequest;
use actix_web::http::header::{AUTHORIZATION, HeaderName};

/// Authorization scheme carrying an API key
pub const API_KEY_SCHEME: &str = "ApiKey ";

/// Pulls a candidate credential out of a request
pub trait CredentialExtractor: Send + Sync {
    /// Source reported for credentials this extractor finds
    fn source(&self) -> CredentialSource;

    /// The credential, if this source carries a non-empty one
    fn extract(&self, req: &HttpRequest) -> Option<String>;
}

/// `Authorization: ApiKey <value>`
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationHeader;

impl CredentialExtractor for AuthorizationHeader {
    fn source(&self) -> CredentialSource {
        CredentialSource::AuthorizationHeader
    }

    fn extract(&self, req: &HttpRequest) -> Option<String> {
        req.headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(API_KEY_SCHEME))
            .and_then(non_empty)
    }
}

/// A custom header such as `x-api-key`
#[derive(Debug, Clone)]
pub struct NamedHeader {
    name: HeaderName,
}

impl NamedHeader {
    pub fn new(name: HeaderName) -> Self {
        Self { name }
    }
}

impl CredentialExtractor for NamedHeader {
    fn source(&self) -> CredentialSource {
        CredentialSource::NamedHeader
    }

    fn extract(&self, req: &HttpRequest) -> Option<String> {
        req.headers()
            .get(&self.name)
            .and_then(|value| value.to_str().ok())
            .and_then(non_empty)
    }
}

/// A query string parameter, `api_key` by default
#[derive(Debug, Clone)]
pub struct QueryParam {
    name: String,
}

impl QueryParam {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl CredentialExtractor for QueryParam {
    fn source(&self) -> CredentialSource {
        CredentialSource::QueryParam
    }

    fn extract(&self, req: &HttpRequest) -> Option<String> {
        url::form_urlencoded::parse(req.query_string().as_bytes())
            .find(|(key, _)| key == self.name.as_str())
            .and_then(|(_, value)| non_empty(&value))
    }
}

// Whitespace only decides presence; the value is compared exactly as sent
fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_authorization_header_with_api_key_scheme() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "ApiKey key123"))
            .to_http_request();
        assert_eq!(AuthorizationHeader.extract(&req).as_deref(), Some("key123"));
    }

    #[test]
    fn test_authorization_header_other_schemes_ignored() {
        for value in ["Bearer key123", "apikey key123", "ApiKey", "ApiKey   ", "key123"] {
            let req = TestRequest::default()
                .insert_header((AUTHORIZATION, value))
                .to_http_request();
            assert_eq!(AuthorizationHeader.extract(&req), None, "value {:?}", value);
        }
    }

    #[test]
    fn test_named_header() {
        let extractor = NamedHeader::new(HeaderName::from_static("x-api-key"));
        let req = TestRequest::default()
            .insert_header(("X-API-Key", "key123"))
            .to_http_request();
        assert_eq!(extractor.extract(&req).as_deref(), Some("key123"));

        let req = TestRequest::default()
            .insert_header(("x-api-key", " key123 "))
            .to_http_request();
        assert_eq!(extractor.extract(&req).as_deref(), Some(" key123 "));

        let req = TestRequest::default()
            .insert_header(("x-api-key", "   "))
            .to_http_request();
        assert_eq!(extractor.extract(&req), None);

        let req = TestRequest::default()
            .insert_header(("x-api-key", ""))
            .to_http_request();
        assert_eq!(extractor.extract(&req), None);
    }

    #[test]
    fn test_named_header_custom_name() {
        let extractor = NamedHeader::new(HeaderName::from_static("x-shop-key"));
        let req = TestRequest::default()
            .insert_header(("x-api-key", "key123"))
            .to_http_request();
        assert_eq!(extractor.extract(&req), None);
    }

    #[test]
    fn test_query_param_decodes_value() {
        let extractor = QueryParam::new("api_key");
        let req = TestRequest::with_uri("/api/session?page=2&api_key=ab%2Bc%3D")
            .to_http_request();
        assert_eq!(extractor.extract(&req).as_deref(), Some("ab+c="));
    }

    #[test]
    fn test_padding_is_kept_in_extracted_values() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "ApiKey    key123"))
            .to_http_request();
        assert_eq!(AuthorizationHeader.extract(&req).as_deref(), Some("   key123"));

        let req = TestRequest::with_uri("/api/session?api_key=%20key123%09").to_http_request();
        assert_eq!(
            QueryParam::new("api_key").extract(&req).as_deref(),
            Some(" key123\t")
        );
    }

    #[test]
    fn test_query_param_absent_or_empty() {
        let extractor = QueryParam::new("api_key");
        let req = TestRequest::with_uri("/api/session?key=abc").to_http_request();
        assert_eq!(extractor.extract(&req), None);

        let req = TestRequest::with_uri("/api/session?api_key=").to_http_request();
        assert_eq!(extractor.extract(&req), None);
    }

    #[test]
    fn test_sources() {
        assert_eq!(AuthorizationHeader.source(), CredentialSource::AuthorizationHeader);
        assert_eq!(QueryParam::new("k").source().to_string(), "query_param");
    }
}
