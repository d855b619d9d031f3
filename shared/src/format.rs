//! Display helpers for the task table and the audit log.

use crate::model::AuditAction;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// Shown in place of an absent changed-content map.
pub const EMPTY_CONTENT: &str = "–";

const TIMESTAMP_FALLBACK: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn action_class(action: &str) -> &'static str {
    AuditAction::classify(action).css_class()
}

/// Renders `{"title": "A", "description": "B"}` as `title: "A", description: "B"`.
pub fn format_updated_content(content: Option<&Map<String, Value>>) -> String {
    let Some(content) = content else {
        return EMPTY_CONTENT.to_string();
    };

    content
        .iter()
        .map(|(key, value)| format!("{}: \"{}\"", key, display_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Locale-independent rendering used where no browser locale is available.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FALLBACK).to_string()
}

/// "Page 2 of 7 (31 tasks)"; "No tasks" when the list is empty.
pub fn page_summary(current_page: u32, total_pages: u32, total_items: u64) -> String {
    if total_items == 0 {
        return "No tasks".to_string();
    }
    let noun = if total_items == 1 { "task" } else { "tasks" };
    format!(
        "Page {} of {} ({} {})",
        current_page + 1,
        total_pages.max(1),
        total_items,
        noun
    )
}
