//! Reminder Endpoints
//!
//! Creating and listing study reminders.

use super::{BackendClient, Transport};
use crate::error::ApiError;
use crate::models::{Created, Reminder, ReminderDraft, ReminderList};

impl<T: Transport> BackendClient<T> {
    /// `POST /api/reminders`
    pub async fn add_reminder(&self, draft: &ReminderDraft) -> Result<Created, ApiError> {
        self.post("/api/reminders", draft).await
    }

    /// `GET /api/reminders`, scoped to `user_id` when one is given
    pub async fn list_reminders(&self, user_id: &str) -> Result<Vec<Reminder>, ApiError> {
        let url = self.config().endpoint_with_query("/api/reminders", &[("user_id", user_id)]);
        let list: ReminderList = self.get(url).await?;
        Ok(list.items)
    }

    /// Create a reminder, then reload the list once the create has completed.
    pub async fn add_reminder_and_reload(
        &self,
        draft: &ReminderDraft,
    ) -> Result<(Created, Vec<Reminder>), ApiError> {
        let created = self.add_reminder(draft).await?;
        let items = self.list_reminders(&draft.user_id).await?;
        log::info!("[REMINDERS] Added reminder, {} in list", items.len());
        Ok((created, items))
    }
}
