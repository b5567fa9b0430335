//! Score Endpoints
//!
//! Recording scores and analyzing weak modules.

use super::{BackendClient, Transport};
use crate::error::ApiError;
use crate::format::parse_score;
use crate::models::{Created, SaveScoreRequest, ScoreDraft, WeaknessReport};

impl<T: Transport> BackendClient<T> {
    /// `POST /api/scores`
    pub async fn save_score(&self, draft: &ScoreDraft) -> Result<Created, ApiError> {
        let body = SaveScoreRequest {
            user_id: &draft.user_id,
            module: draft.module,
            score: parse_score(&draft.score),
            note: &draft.note,
        };
        self.post("/api/scores", &body).await
    }

    /// `GET /api/weaknesses`, scoped to `user_id` when one is given
    pub async fn weaknesses(&self, user_id: &str) -> Result<WeaknessReport, ApiError> {
        let url = self.config().endpoint_with_query("/api/weaknesses", &[("user_id", user_id)]);
        self.get(url).await
    }
}
