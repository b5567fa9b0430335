//! Greeting and Info Endpoints

use super::{BackendClient, Transport};
use crate::error::ApiError;
use crate::models::{Greeting, InfoMap};

impl<T: Transport> BackendClient<T> {
    /// `GET /`; any failure or empty message yields `None`.
    pub async fn greeting(&self) -> Option<String> {
        match self.get::<Greeting>(self.config().endpoint("/")).await {
            Ok(greeting) => greeting.message.filter(|m| !m.is_empty()),
            Err(e) => {
                log::debug!("[API] Greeting unavailable: {}", e);
                None
            }
        }
    }

    /// `GET /api/info`
    pub async fn info(&self) -> Result<InfoMap, ApiError> {
        self.get(self.config().endpoint("/api/info")).await
    }
}
