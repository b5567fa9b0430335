//! Render Helpers
//!
//! Pure text formatting for alerts and list rows.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::models::{InfoMap, ReadingPassage, Reminder, WeaknessReport};

const DUE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Naive layouts accepted for due dates, `datetime-local` first
const NAIVE_DUE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse score text the way the browser's `parseFloat` does.
///
/// Takes the longest numeric prefix after leading whitespace. Returns `None`
/// for anything that would be `NaN` or infinite, both of which go over the
/// wire as `null`.
pub fn parse_score(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return None;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// String conversion with browser semantics, for values rendered verbatim
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Offset layout without seconds, e.g. `2026-10-20T18:30+02:00`
const ZONED_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Render a due date as `YYYY-MM-DD HH:MM` in the browser's local time
pub fn format_due(due_date: &str) -> String {
    format_due_in(due_date, &Local)
}

/// Render a due date in `tz`, or verbatim if unparseable.
///
/// Values with an offset are converted. Naive date-times are already wall
/// clock time in `tz`. A bare date is midnight UTC.
pub fn format_due_in<Tz>(due_date: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = due_date.trim();
    let zoned = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, ZONED_MINUTE_FORMAT))
        .ok();
    if let Some(dt) = zoned {
        return dt.with_timezone(tz).format(DUE_DISPLAY_FORMAT).to_string();
    }
    if let Some(dt) = NAIVE_DUE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return dt.format(DUE_DISPLAY_FORMAT).to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Utc
            .from_utc_datetime(&date.and_time(Default::default()))
            .with_timezone(tz)
            .format(DUE_DISPLAY_FORMAT)
            .to_string(),
        Err(_) => due_date.to_string(),
    }
}

pub fn score_saved_message(id: &Value) -> String {
    format!("Score saved! ID: {}", display_value(id))
}

pub fn reminder_added_message(id: &Value) -> String {
    format!("Reminder added: {}", display_value(id))
}

pub fn passage_summary(passage: &ReadingPassage) -> String {
    format!("Sample: {} with {} paragraphs", passage.title, passage.paragraphs.len())
}

/// One `key: value` line per entry
pub fn info_message(info: &InfoMap) -> String {
    info.iter()
        .map(|(key, value)| format!("{}: {}", key, display_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn weak_modules_line(report: &WeaknessReport) -> String {
    format!("Weak modules: {}", report.weak_modules.join(", "))
}

/// Trailing part of a reminder row (the title is rendered separately)
pub fn reminder_details(reminder: &Reminder) -> String {
    format!(" • {} • due {}", reminder.category, format_due(&reminder.due_date))
}
