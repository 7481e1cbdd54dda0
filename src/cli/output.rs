use serde::Serialize;

use crate::model::task::Task;
use crate::ops::stats::TaskStats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub priority: String,
    pub created_at: String,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            priority: task.priority.as_str().to_string(),
            created_at: task.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
    pub stats: StatsJson,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
}

impl From<&TaskStats> for StatsJson {
    fn from(stats: &TaskStats) -> Self {
        StatsJson {
            total: stats.total,
            completed: stats.completed,
            pending: stats.pending,
            high_priority: stats.high_priority,
        }
    }
}

#[derive(Serialize)]
pub struct AddedJson {
    pub id: i64,
    pub text: String,
    pub priority: String,
}

#[derive(Serialize)]
pub struct PriorityJson {
    pub id: i64,
    pub priority: String,
}

#[derive(Serialize)]
pub struct ChangedJson {
    pub id: i64,
    pub changed: bool,
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// One task as a list line: `[x] ! 1714000000000  Call bank`
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.completed { 'x' } else { ' ' };
    format!(
        "[{}] {} {}  {}",
        checkbox,
        task.priority.marker_char(),
        task.id,
        task.text
    )
}

/// The one-line summary printed under a listing
pub fn stats_line(stats: &TaskStats) -> String {
    format!(
        "{} total | {} pending | {} completed | {} high priority",
        stats.total, stats.pending, stats.completed, stats.high_priority
    )
}

pub fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}
