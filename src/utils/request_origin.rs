//! Scheme and host of the incoming request, used to build short URLs.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, Uri, header, request::Parts},
};
use std::convert::Infallible;

/// Header set by reverse proxies carrying the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Path prefix under which short identifiers are served.
pub const SHORT_URL_PREFIX: &str = "/api/url";

/// The `<scheme>://<host>` the client used to reach the service.
///
/// Short URLs are derived from it per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    /// Resolves the origin from request headers and URI.
    ///
    /// - Scheme: first value of `X-Forwarded-Proto`, else the URI scheme, else `http`
    /// - Host: the `Host` header (port kept), else the URI authority, else `localhost`
    pub fn from_request(headers: &HeaderMap, uri: &Uri) -> Self {
        let scheme = headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .or_else(|| uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());

        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .or_else(|| uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| "localhost".to_string());

        Self { scheme, host }
    }

    /// Builds the public short URL for an identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!(
            "{}://{}{}/{}",
            self.scheme, self.host, SHORT_URL_PREFIX, short_id
        )
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_request(&parts.headers, &parts.uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn origin(headers: &[(&'static str, &'static str)], uri: &str) -> RequestOrigin {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_static(value));
        }
        RequestOrigin::from_request(&map, &uri.parse().unwrap())
    }

    #[test]
    fn test_host_header_with_port() {
        let o = origin(&[("host", "localhost:5000")], "/api/url/shorten");
        assert_eq!(o.scheme, "http");
        assert_eq!(o.host, "localhost:5000");
        assert_eq!(o.short_url("abcd1234"), "http://localhost:5000/api/url/abcd1234");
    }

    #[test]
    fn test_forwarded_proto_wins() {
        let o = origin(
            &[("host", "sho.rt"), ("x-forwarded-proto", "HTTPS, http")],
            "/api/url/shorten",
        );
        assert_eq!(o.short_url("abcd1234"), "https://sho.rt/api/url/abcd1234");
    }

    #[test]
    fn test_absolute_uri_fallback() {
        let o = origin(&[], "https://example.com:8443/api/url/shorten");
        assert_eq!(o.scheme, "https");
        assert_eq!(o.host, "example.com:8443");
    }

    #[test]
    fn test_defaults_without_host() {
        let o = origin(&[], "/api/url/shorten");
        assert_eq!(o.short_url("x"), "http://localhost/api/url/x");
    }

    #[test]
    fn test_ipv6_host_is_kept_verbatim() {
        let o = origin(&[("host", "[::1]:8080")], "/");
        assert_eq!(o.host, "[::1]:8080");
    }
}
