//! HTTP request handlers.

pub(crate) mod pages;
pub(crate) mod registry;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};

/// Cache policy for registry payloads: static for a given deployment.
const CACHE_CONTROL: &str = "public, max-age=300";

/// Build a cacheable JSON response, answering 304 when the client's
/// `If-None-Match` already matches.
pub(crate) fn cached_json(version: &str, body: String, headers: &HeaderMap) -> Response {
    let etag = compute_etag(version, &body);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return (
            StatusCode::NOT_MODIFIED,
            [(header::ETAG, etag), (header::CACHE_CONTROL, CACHE_CONTROL.to_owned())],
        )
            .into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, CACHE_CONTROL.to_owned()),
        ],
        body,
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("0.1.0", "{}"), compute_etag("0.1.1", "{}"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("0.1.0", "{\"a\":1}"), compute_etag("0.1.0", "{\"a\":2}"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("0.1.0", "{}");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_cached_json_sets_headers() {
        let response = cached_json("0.1.0", "{}".to_owned(), &HeaderMap::new());

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=300");
        assert_eq!(headers[header::ETAG], compute_etag("0.1.0", "{}").as_str());
    }

    #[test]
    fn test_cached_json_not_modified() {
        let mut request_headers = HeaderMap::new();
        let etag = compute_etag("0.1.0", "{}");
        request_headers.insert(
            header::IF_NONE_MATCH,
            HeaderValue::from_str(&etag).unwrap(),
        );

        let response = cached_json("0.1.0", "{}".to_owned(), &request_headers);
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[test]
    fn test_cached_json_stale_etag() {
        let mut request_headers = HeaderMap::new();
        request_headers.insert(
            header::IF_NONE_MATCH,
            HeaderValue::from_static("\"0000000000000000\""),
        );

        let response = cached_json("0.1.0", "{}".to_owned(), &request_headers);
        assert_eq!(response.status(), StatusCode::OK);
    }
}
