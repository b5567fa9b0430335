//! Coach View-Model Store
//!
//! All form state and backend results, held in a Leptos `reactive_stores`
//! store for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::format::{info_message, passage_summary, reminder_added_message, score_saved_message};
use crate::models::{
    Created, Evaluation, InfoMap, ReadingPassage, Reminder, ReminderDraft, ScoreDraft, WeaknessReport,
    WritingDraft,
};

pub const DEFAULT_IDEA_TOPIC: &str = "technology in education";

/// View state for the whole page
#[derive(Clone, Debug, Default, Store)]
pub struct CoachState {
    /// Backend greeting; `None` when the root fetch failed
    pub greeting: Option<String>,
    pub score: ScoreDraft,
    pub weaknesses: WeaknessReport,
    pub idea_topic: String,
    pub ideas: Vec<String>,
    pub writing: WritingDraft,
    pub evaluation: Option<Evaluation>,
    pub passage: Option<ReadingPassage>,
    pub reminder: ReminderDraft,
    pub reminders: Vec<Reminder>,
    /// Last failed action, shown in the error toast
    pub error: Option<String>,
    /// Bumped on every reported error so a stale toast timer can tell it lost
    pub error_seq: u64,
}

impl CoachState {
    pub fn new() -> Self {
        Self {
            idea_topic: DEFAULT_IDEA_TOPIC.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CoachStore = Store<CoachState>;

/// Get the coach store from context
pub fn use_coach_store() -> CoachStore {
    expect_context::<CoachStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a failed action for the toast
pub fn store_report_error(store: &CoachStore, action: &str, error: &ApiError) {
    log::warn!("[APP] {} failed: {}", action, error);
    store.error_seq().update(|seq| *seq += 1);
    store.error().set(Some(format!("{} failed: {}", action, error)));
}

pub fn store_dismiss_error(store: &CoachStore) {
    store.error().set(None);
}

/// Dismiss only if no error was reported after `seq`
pub fn store_expire_error(store: &CoachStore, seq: u64) -> bool {
    if store.error_seq().get_untracked() != seq {
        return false;
    }
    store_dismiss_error(store);
    true
}

pub fn store_set_greeting(store: &CoachStore, greeting: Option<String>) {
    store.greeting().set(greeting);
}

pub fn store_set_weaknesses(store: &CoachStore, report: WeaknessReport) {
    store.weaknesses().set(report);
}

pub fn store_set_ideas(store: &CoachStore, ideas: Vec<String>) {
    store.ideas().set(ideas);
}

pub fn store_set_evaluation(store: &CoachStore, evaluation: Evaluation) {
    store.evaluation().set(Some(evaluation));
}

pub fn store_set_passage(store: &CoachStore, passage: ReadingPassage) {
    store.passage().set(Some(passage));
}

/// Replace the reminder list with a fresh listing
pub fn store_set_reminders(store: &CoachStore, reminders: Vec<Reminder>) {
    log::debug!("[REMINDERS] Loaded {} reminders", reminders.len());
    store.reminders().set(reminders);
}

// ========================
// Action Outcomes
// ========================
//
// Each returns the alert text to show on success; failures go to the toast.

pub fn store_finish_save_score(store: &CoachStore, result: Result<Created, ApiError>) -> Option<String> {
    match result {
        Ok(created) => Some(score_saved_message(&created.id)),
        Err(e) => {
            store_report_error(store, "Save score", &e);
            None
        }
    }
}

pub fn store_finish_weaknesses(store: &CoachStore, result: Result<WeaknessReport, ApiError>) {
    match result {
        Ok(report) => store_set_weaknesses(store, report),
        Err(e) => store_report_error(store, "Analyze weaknesses", &e),
    }
}

pub fn store_finish_ideas(store: &CoachStore, result: Result<Vec<String>, ApiError>) {
    match result {
        Ok(ideas) => store_set_ideas(store, ideas),
        Err(e) => store_report_error(store, "Generate ideas", &e),
    }
}

pub fn store_finish_evaluation(store: &CoachStore, result: Result<Evaluation, ApiError>) {
    match result {
        Ok(evaluation) => store_set_evaluation(store, evaluation),
        Err(e) => store_report_error(store, "Evaluate writing", &e),
    }
}

pub fn store_finish_reminders(store: &CoachStore, result: Result<Vec<Reminder>, ApiError>) {
    match result {
        Ok(items) => store_set_reminders(store, items),
        Err(e) => store_report_error(store, "Load reminders", &e),
    }
}

/// The list is replaced before the alert, matching add-then-reload order
pub fn store_finish_add_reminder(
    store: &CoachStore,
    result: Result<(Created, Vec<Reminder>), ApiError>,
) -> Option<String> {
    match result {
        Ok((created, items)) => {
            store_set_reminders(store, items);
            Some(reminder_added_message(&created.id))
        }
        Err(e) => {
            store_report_error(store, "Add reminder", &e);
            None
        }
    }
}

pub fn store_finish_passage(store: &CoachStore, result: Result<ReadingPassage, ApiError>) -> Option<String> {
    match result {
        Ok(passage) => {
            let summary = passage_summary(&passage);
            store_set_passage(store, passage);
            Some(summary)
        }
        Err(e) => {
            store_report_error(store, "Create sample", &e);
            None
        }
    }
}

pub fn store_finish_info(store: &CoachStore, result: Result<InfoMap, ApiError>) -> Option<String> {
    match result {
        Ok(info) => Some(info_message(&info)),
        Err(e) => {
            store_report_error(store, "Load IELTS info", &e);
            None
        }
    }
}
