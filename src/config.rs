//! Backend Configuration
//!
//! Resolves the backend base URL and builds endpoint URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Used when `IELTS_BACKEND_URL` is unset at build time
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Characters left as-is by `URLSearchParams` (besides alphanumerics)
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BACKEND_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Base URL baked in at build time
    pub fn from_env() -> Self {
        Self::new(option_env!("IELTS_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Endpoint URL with query parameters; empty values are omitted.
    pub fn endpoint_with_query(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = self.endpoint(path);
        let pairs: Vec<String> = query
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", encode_form_value(key), encode_form_value(value)))
            .collect();
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// `application/x-www-form-urlencoded` value encoding
fn encode_form_value(value: &str) -> String {
    utf8_percent_encode(value, FORM_VALUE)
        .to_string()
        .replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = BackendConfig::new("https://coach.example.com/");
        assert_eq!(config.base_url(), "https://coach.example.com");
        assert_eq!(config.endpoint("/api/ideas"), "https://coach.example.com/api/ideas");
    }

    #[test]
    fn test_blank_base_falls_back_to_default() {
        assert_eq!(BackendConfig::new("  ").base_url(), DEFAULT_BACKEND_URL);
        assert_eq!(BackendConfig::default().endpoint("/"), "http://localhost:8000/");
    }

    #[test]
    fn test_empty_query_values_are_omitted() {
        let config = BackendConfig::default();
        let url = config.endpoint_with_query("/api/weaknesses", &[("user_id", "")]);
        assert_eq!(url, "http://localhost:8000/api/weaknesses");
    }

    #[test]
    fn test_query_values_are_form_encoded() {
        let config = BackendConfig::default();
        let url = config.endpoint_with_query("/api/reminders", &[("user_id", "anna k&co/1")]);
        assert_eq!(url, "http://localhost:8000/api/reminders?user_id=anna+k%26co%2F1");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_form_value("a-b_c.d*e"), "a-b_c.d*e");
        assert_eq!(encode_form_value("é"), "%C3%A9");
    }
}
