//! URL construction for the MobCash REST API.

use crate::shared::config::config;

/// Base URL for API requests.
///
/// The configured `api.base_url` wins; when it is empty the API is assumed to
/// be served from the same origin as the dashboard.
pub fn api_base() -> String {
    let configured = &config().api.base_url;
    if !configured.is_empty() {
        return configured.clone();
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Full URL of an API path such as `recharge-requests/12/approve/`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), &config().api.prefix, path)
}

/// Joins base, prefix and path with exactly one `/` between the parts and
/// keeps the path's trailing slash (the API requires it).
pub fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in [prefix, path] {
        let part = part.trim_start_matches('/');
        if part.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(part);
    }
    url
}

/// Appends encoded query parameters to `url`.
pub fn with_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let map: std::collections::BTreeMap<&str, &str> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    match serde_qs::to_string(&map) {
        Ok(query) => format!("{}?{}", url, query),
        Err(e) => {
            log::warn!("Could not encode query parameters: {}", e);
            url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.mobcash.io/", "/api", "recharge-requests/"),
            "https://api.mobcash.io/api/recharge-requests/"
        );
        assert_eq!(join_url("", "/api", "/auth/me/"), "/api/auth/me/");
        assert_eq!(join_url("http://localhost:8000", "", "users/3/wallet/"), "http://localhost:8000/users/3/wallet/");
    }

    #[test]
    fn test_with_query() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("search".to_string(), "jean dupont".to_string()),
        ];
        let url = with_query("/api/users/", &params);
        assert!(url.starts_with("/api/users/?page=2&search=jean"));
        assert!(!url.contains(' '));
        assert_eq!(with_query("/api/users/", &[]), "/api/users/");
    }
}
