//! HTTP route labels.

const PRODUCT_ROUTE: &str = "/products/{id}";
const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the fixed set of routes the server exposes.
///
/// Metric series are keyed by this label, so it never carries client input.
pub(super) fn route_label(path: &str) -> &'static str {
    let mut segments = path.trim_matches('/').split('/');

    match (segments.next(), segments.next(), segments.next()) {
        (Some(""), None, None) => "/",
        (Some("healthcheck"), None, None) => "/healthcheck",
        (Some("metrics"), None, None) => "/metrics",
        (Some("products"), Some(id), None) if !id.is_empty() => PRODUCT_ROUTE,
        _ => UNMATCHED_ROUTE,
    }
}
