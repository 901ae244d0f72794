//! Caller identity extracted from request headers.

use crate::failure::ApiFailure;
use axum::http::HeaderMap;

const USER_ID_HEADER: &str = "x-user-id";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Returns the verified external user id, or `Unauthorized` when absent.
///
/// Authentication happens upstream; by the time a request reaches this
/// service the proxy has already verified the caller and stamped the id.
pub(crate) fn require_user_id(headers: &HeaderMap) -> Result<String, ApiFailure> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(ApiFailure::Unauthorized)
}

/// Best-effort client address for rate limiting and audit logs.
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn user_id_is_read_from_the_header() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("user_42"));
        assert_eq!(require_user_id(&headers).unwrap(), "user_42");
    }

    #[test]
    fn missing_user_id_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            require_user_id(&headers),
            Err(ApiFailure::Unauthorized)
        ));
    }

    #[test]
    fn blank_user_id_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("   "));
        assert!(matches!(
            require_user_id(&headers),
            Err(ApiFailure::Unauthorized)
        ));
    }

    #[test]
    fn first_forwarded_address_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED_FOR_HEADER,
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers), "203.0.113.9");
    }

    #[test]
    fn missing_forwarded_header_is_unknown() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), "unknown");
    }
}
