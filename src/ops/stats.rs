use crate::model::task::{Priority, Task};

/// Aggregate counts over the full snapshot, ignoring any active filters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
}

pub fn task_counts(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats::default();
    for task in tasks {
        stats.total += 1;
        if task.completed {
            stats.completed += 1;
        }
        if task.priority == Priority::High {
            stats.high_priority += 1;
        }
    }
    stats.pending = stats.total - stats.completed;
    stats
}
