use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Alert,
    Reminder,
    Update,
    Incident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
    pub target_roles: Vec<Role>,
}

impl Notification {
    pub fn targets(&self, role: Role) -> bool {
        self.target_roles.contains(&role)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    All,
    Unread,
    High,
    Critical,
}

impl FilterMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(FilterMode::All),
            "unread" => Some(FilterMode::Unread),
            "high" => Some(FilterMode::High),
            "critical" => Some(FilterMode::Critical),
            _ => None,
        }
    }

    pub fn keeps(&self, notification: &Notification) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Unread => !notification.read,
            FilterMode::High => notification.priority == Priority::High,
            FilterMode::Critical => notification.priority == Priority::Critical,
        }
    }
}
