//! Writing Evaluation Endpoints

use super::{BackendClient, Transport};
use crate::error::ApiError;
use crate::models::{Evaluation, WritingDraft};

impl<T: Transport> BackendClient<T> {
    /// `POST /api/writing/evaluate`
    pub async fn evaluate_writing(&self, draft: &WritingDraft) -> Result<Evaluation, ApiError> {
        self.post("/api/writing/evaluate", draft).await
    }
}
