//! Frontend Models
//!
//! Form drafts, request bodies, and response schemas for the coach backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ========================
// Enums
// ========================

/// IELTS skill module (or the aggregate Overall band)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Module {
    Listening,
    #[default]
    Reading,
    Writing,
    Speaking,
    Overall,
}

impl Module {
    pub const ALL: [Module; 5] = [
        Module::Listening,
        Module::Reading,
        Module::Writing,
        Module::Speaking,
        Module::Overall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Listening => "Listening",
            Module::Reading => "Reading",
            Module::Writing => "Writing",
            Module::Speaking => "Speaking",
            Module::Overall => "Overall",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskType {
    #[default]
    Task1,
    Task2,
}

impl TaskType {
    pub const ALL: [TaskType; 2] = [TaskType::Task1, TaskType::Task2];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Task1 => "Task1",
            TaskType::Task2 => "Task2",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCategory {
    #[default]
    General,
    Reading,
    Listening,
    Writing,
    Speaking,
}

impl ReminderCategory {
    pub const ALL: [ReminderCategory; 5] = [
        ReminderCategory::General,
        ReminderCategory::Reading,
        ReminderCategory::Listening,
        ReminderCategory::Writing,
        ReminderCategory::Speaking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReminderCategory::General => "general",
            ReminderCategory::Reading => "reading",
            ReminderCategory::Listening => "listening",
            ReminderCategory::Writing => "writing",
            ReminderCategory::Speaking => "speaking",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

// ========================
// Form Drafts
// ========================

/// Score form; `score` stays raw text until submission
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDraft {
    pub user_id: String,
    pub module: Module,
    pub score: String,
    pub note: String,
}

impl Default for ScoreDraft {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            module: Module::Reading,
            score: "6.5".to_string(),
            note: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritingDraft {
    pub user_id: String,
    pub task_type: TaskType,
    pub prompt: String,
    pub content: String,
}

/// Reminder form; `due_date` holds the `datetime-local` input value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReminderDraft {
    pub user_id: String,
    pub title: String,
    pub due_date: String,
    pub category: ReminderCategory,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct SaveScoreRequest<'a> {
    pub user_id: &'a str,
    pub module: Module,
    /// `None` serializes as `null` when the text is not a number
    pub score: Option<f64>,
    pub note: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IdeasRequest<'a> {
    pub topic: &'a str,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct PassageRequest<'a> {
    pub level: &'a str,
    pub paragraphs: u32,
}

// ========================
// Responses
// ========================

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Greeting {
    #[serde(default)]
    pub message: Option<String>,
}

/// Id returned by create endpoints (number or string)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Created {
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeaknessReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub weak_modules: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdeasResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ideas: Vec<String>,
}

/// Band estimate, rendered exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Band {
    Number(f64),
    Text(String),
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Number(n) => write!(f, "{}", n),
            Band::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Evaluation {
    pub estimated_band: Band,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reminder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReminderList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Reminder>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadingPassage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paragraphs: Vec<Value>,
}

/// `/api/info` payload, in backend key order
pub type InfoMap = Map<String, Value>;
