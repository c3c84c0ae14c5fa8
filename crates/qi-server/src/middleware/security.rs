//! Security headers applied to every response.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy for catalog pages.
///
/// Preview fragments may carry inline styles and data-URI images; scripts
/// are limited to the bundled assets.
const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data:; \
                   frame-ancestors 'none'";

/// Header name and value pairs, in the order the layers are stacked.
pub(crate) const POLICY: [(&str, &str); 3] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

/// Layer that sets one policy header, replacing any value a handler set.
pub(crate) fn header_layer(
    (name, value): (&'static str, &'static str),
) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_allows_only_bundled_scripts() {
        assert!(CSP.contains("script-src 'self'"));
        assert!(!CSP.contains("unsafe-eval"));
        assert!(!CSP.contains("connect-src"));
    }

    #[test]
    fn test_policy_names_are_lowercase() {
        for (name, _) in POLICY {
            assert_eq!(name, name.to_ascii_lowercase());
        }
    }
}
