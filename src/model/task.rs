use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// One step around the fixed cycle: low → medium → high → low
    pub fn cycle(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Parse a priority name into a priority
    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// The character shown next to the checkbox in list output
    pub fn marker_char(self) -> char {
        match self {
            Priority::Low => '.',
            Priority::Medium => '-',
            Priority::High => '!',
        }
    }
}

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, derived from the creation timestamp (see `TodoStore::add`)
    pub id: i64,
    /// Display text, never empty
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
    pub priority: Priority,
    /// Creation time, immutable after creation
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new incomplete task stamped with the current time
    pub fn new(id: i64, text: String, priority: Priority) -> Self {
        Task {
            id,
            text,
            completed: false,
            priority,
            created_at: Utc::now(),
        }
    }
}
