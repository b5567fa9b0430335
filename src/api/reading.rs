//! Reading Passage Endpoints

use super::{BackendClient, Transport};
use crate::error::ApiError;
use crate::models::{PassageRequest, ReadingPassage};

const PASSAGE_LEVEL: &str = "moderate";
const PASSAGE_PARAGRAPHS: u32 = 3;

impl<T: Transport> BackendClient<T> {
    /// `POST /api/reading/passages` with the fixed sample parameters
    pub async fn create_passage(&self) -> Result<ReadingPassage, ApiError> {
        let body = PassageRequest { level: PASSAGE_LEVEL, paragraphs: PASSAGE_PARAGRAPHS };
        self.post("/api/reading/passages", &body).await
    }
}
