//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/bills/{bill_id}/preview', use [format_endpoint].

/// The root route which redirects to the bills page.
pub const ROOT: &str = "/";
/// The page listing the current user's bills.
pub const BILLS_VIEW: &str = "/bills";
/// The page for creating a new bill.
pub const NEW_BILL_VIEW: &str = "/bills/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route hit by the "new bill" button.
pub const NEW_BILL_API: &str = "/api/bills/new";
/// The route for the receipt preview of a single bill.
pub const BILL_PREVIEW: &str = "/api/bills/{bill_id}/preview";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/bills/{bill_id}', '{bill_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_static` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::BILLS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_BILL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_BILL_API);
        assert_endpoint_is_valid_uri(endpoints::BILL_PREVIEW);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", "abc123");

        assert_eq!(formatted_path, "/hello/abc123");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "1");

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::BILL_PREVIEW, "47qAXb6fIm2zOKkLzMro");

        assert_eq!(formatted_path, "/api/bills/47qAXb6fIm2zOKkLzMro/preview");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
