//! Application Context
//!
//! Backend client shared with all panels via the Leptos Context API.

use leptos::prelude::*;

use crate::api::{BrowserClient, HttpTransport};
use crate::config::BackendConfig;

/// Provide a browser client built from the build-time backend URL
pub fn provide_backend() {
    let config = BackendConfig::from_env();
    log::info!("[APP] Backend at {}", config.base_url());
    provide_context(BrowserClient::new(config, HttpTransport));
}

/// Get the backend client from context
pub fn use_backend() -> BrowserClient {
    expect_context::<BrowserClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_backend_returns_provided_client() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(BrowserClient::new(BackendConfig::new("http://coach.test"), HttpTransport));
            assert_eq!(use_backend().config().base_url(), "http://coach.test");
        });
    }
}
