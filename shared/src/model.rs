use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for both create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub current_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    /// Kept as sent; see [`AuditLog::recorded_at`].
    pub timestamp: String,
    pub action: String,
    pub task_id: String,
    #[serde(default)]
    pub updated_content: Option<Map<String, Value>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AuditLog {
    pub fn kind(&self) -> AuditAction {
        AuditAction::classify(&self.action)
    }

    /// Reads zone-less ISO-8601 as well as RFC 3339 with an offset, in which
    /// case the wall-clock time at that offset is returned.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        self.timestamp
            .parse::<NaiveDateTime>()
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(&self.timestamp)
                    .ok()
                    .map(|at| at.naive_local())
            })
    }
}

/// Body the server sends along with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Other,
}

impl AuditAction {
    /// Classifies a free-text action label by substring, first match wins.
    pub fn classify(label: &str) -> Self {
        if label.contains("Create") {
            AuditAction::Create
        } else if label.contains("Update") {
            AuditAction::Update
        } else if label.contains("Delete") {
            AuditAction::Delete
        } else {
            AuditAction::Other
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AuditAction::Create => "action-create",
            AuditAction::Update => "action-update",
            AuditAction::Delete => "action-delete",
            AuditAction::Other => "",
        }
    }
}
