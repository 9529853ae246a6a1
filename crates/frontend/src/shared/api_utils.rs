//! Helpers for building request URLs and bodies sent to the ticket server.

use serde::Serialize;

/// Append query parameters to a path, keeping any query it already has.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::url_with_query;
/// assert_eq!(
///     url_with_query("/get_subcategories/", &[("category_id", "3")]),
///     "/get_subcategories/?category_id=3"
/// );
/// ```
pub fn url_with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, sep, query)
}

/// Encode a flat struct as an `application/x-www-form-urlencoded` body
pub fn form_body<T: Serialize>(value: &T) -> Result<String, String> {
    serde_qs::to_string(value).map_err(|e| format!("Failed to encode form: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_query() {
        assert_eq!(
            url_with_query("/get_subcategories/", &[("category_id", "3")]),
            "/get_subcategories/?category_id=3"
        );
        assert_eq!(
            url_with_query("/list/?page=2", &[("q", "a b")]),
            "/list/?page=2&q=a%20b"
        );
        assert_eq!(url_with_query("/x/", &[]), "/x/");
    }

    #[test]
    fn test_form_body_field_order() {
        #[derive(Serialize)]
        struct Body {
            first: String,
            second: u32,
        }
        let body = form_body(&Body {
            first: "one".into(),
            second: 2,
        })
        .unwrap();
        assert_eq!(body, "first=one&second=2");
    }
}
