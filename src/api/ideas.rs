//! Essay Idea Endpoints

use super::{BackendClient, Transport};
use crate::error::ApiError;
use crate::models::{IdeasRequest, IdeasResponse};

/// Ideas requested per generation
const IDEA_COUNT: u32 = 5;

impl<T: Transport> BackendClient<T> {
    /// `POST /api/ideas`
    pub async fn generate_ideas(&self, topic: &str) -> Result<Vec<String>, ApiError> {
        let response: IdeasResponse = self
            .post("/api/ideas", &IdeasRequest { topic, count: IDEA_COUNT })
            .await?;
        Ok(response.ideas)
    }
}
