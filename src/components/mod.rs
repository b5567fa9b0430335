//! UI Components
//!
//! The panel wrapper and one component per page section.

mod panel;
mod notify;
mod score_panel;
mod ideas_panel;
mod writing_panel;
mod reading_panel;
mod reminders_panel;
mod info_panel;

pub use panel::Panel;
pub use notify::{show_alert, GreetingBanner, ErrorToast};
pub use score_panel::ScorePanel;
pub use ideas_panel::IdeasPanel;
pub use writing_panel::WritingPanel;
pub use reading_panel::ReadingPanel;
pub use reminders_panel::{load_reminders, RemindersPanel};
pub use info_panel::InfoPanel;
