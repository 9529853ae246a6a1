//! Page-level configuration of the UI.
//!
//! Read once at start-up from `data-*` attributes on `<body>` and the CSRF
//! cookie, then handed to every island explicitly.

use crate::shared::dom;

pub const DEFAULT_SUBCATEGORIES_URL: &str = "/get_subcategories/";
pub const DEFAULT_CREATE_TICKET_URL: &str = "/create_ticket/";
pub const DEFAULT_DASHBOARD_URL: &str = "/";
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// JSON endpoint listing the subcategories of a category
    pub subcategories_url: String,
    /// Form endpoint accepting new tickets
    pub create_ticket_url: String,
    /// Where to go after a ticket was created
    pub dashboard_url: String,
    pub csrf_token: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            subcategories_url: DEFAULT_SUBCATEGORIES_URL.to_string(),
            create_ticket_url: DEFAULT_CREATE_TICKET_URL.to_string(),
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            csrf_token: None,
        }
    }
}

impl UiConfig {
    /// Build the config from an attribute lookup and the raw `document.cookie` string.
    ///
    /// Blank attributes fall back to the defaults. An explicit
    /// `data-csrf-token` wins over the cookie.
    pub fn from_attributes<F>(attr: F, cookies: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| attr(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            subcategories_url: non_blank("data-subcategories-url")
                .unwrap_or(defaults.subcategories_url),
            create_ticket_url: non_blank("data-create-ticket-url")
                .unwrap_or(defaults.create_ticket_url),
            dashboard_url: non_blank("data-dashboard-url").unwrap_or(defaults.dashboard_url),
            csrf_token: non_blank("data-csrf-token")
                .or_else(|| cookie_value(cookies, CSRF_COOKIE_NAME)),
        }
    }

    pub fn from_document() -> Self {
        let Some(body) = dom::document().and_then(|d| d.body()) else {
            log::warn!("No <body> available, using default UI config");
            return Self::default();
        };
        let config = Self::from_attributes(|name| body.get_attribute(name), &dom::cookies());
        if config.csrf_token.is_none() {
            log::warn!("No CSRF token found; ticket submission will be rejected by the server");
        }
        config
    }
}

/// Find a cookie by name in a `document.cookie` style string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attributes() {
        let config = UiConfig::from_attributes(lookup(&[]), "");
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.subcategories_url, "/get_subcategories/");
    }

    #[test]
    fn test_attributes_override_defaults() {
        let config = UiConfig::from_attributes(
            lookup(&[
                ("data-dashboard-url", "/user_dashboard/"),
                ("data-create-ticket-url", ""),
            ]),
            "",
        );
        assert_eq!(config.dashboard_url, "/user_dashboard/");
        assert_eq!(config.create_ticket_url, "/create_ticket/");
    }

    #[test]
    fn test_csrf_from_cookie_and_attribute() {
        let cookies = "sessionid=abc; csrftoken=tok%2B1; theme=dark";
        let from_cookie = UiConfig::from_attributes(lookup(&[]), cookies);
        assert_eq!(from_cookie.csrf_token.as_deref(), Some("tok+1"));

        let from_attr =
            UiConfig::from_attributes(lookup(&[("data-csrf-token", "explicit")]), cookies);
        assert_eq!(from_attr.csrf_token.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_cookie_value_lookup() {
        assert_eq!(cookie_value("a=1;b=2", "b").as_deref(), Some("2"));
        assert_eq!(cookie_value("a=1", "csrftoken"), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
