use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "low" | "l" => Some(Self::Low),
            "medium" | "med" | "m" => Some(Self::Medium),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    pub const ALL: &'static [Priority] = &[Priority::Low, Priority::Medium, Priority::High];
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// A user-entered to-do item with completion state and priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub priority: Priority,
}

impl Task {
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: chrono::Local::now().naive_local(),
            priority,
        }
    }
}
