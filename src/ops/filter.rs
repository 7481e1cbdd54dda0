use crate::model::task::{Priority, Task};

/// Completion-status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Not yet completed
    Active,
    Completed,
}

impl StatusFilter {
    /// Parse a status name into a filter
    pub fn parse(s: &str) -> Option<StatusFilter> {
        match s {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Active),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

/// Priority filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn parse(s: &str) -> Option<PriorityFilter> {
        if s == "all" {
            return Some(PriorityFilter::All);
        }
        Priority::parse(s).map(PriorityFilter::Only)
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority == p,
        }
    }
}

/// The three independent view controls. All predicates are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Case-insensitive substring match against task text; empty matches all
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl Query {
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_match = needle.is_empty() || task.text.to_lowercase().contains(&needle);
        text_match && self.status.matches(task) && self.priority.matches(task)
    }
}

/// The subset of the snapshot to display, relative order preserved.
/// Display reversal for newest-first is the caller's concern.
pub fn visible_tasks<'a>(tasks: &'a [Task], query: &Query) -> Vec<&'a Task> {
    tasks.iter().filter(|t| query.matches(t)).collect()
}

/// Which empty-state message to show when nothing is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself is empty
    NoTasks,
    /// A search query or priority filter matched nothing
    NoMatches,
    /// Only the status filter excluded everything
    NoneInStatus,
}

/// Classify an empty result, or None when something is visible.
pub fn classify_empty(tasks: &[Task], visible: &[&Task], query: &Query) -> Option<EmptyState> {
    if tasks.is_empty() {
        return Some(EmptyState::NoTasks);
    }
    if !visible.is_empty() {
        return None;
    }
    if !query.search.trim().is_empty() || query.priority != PriorityFilter::All {
        Some(EmptyState::NoMatches)
    } else if query.status != StatusFilter::All {
        Some(EmptyState::NoneInStatus)
    } else {
        None
    }
}
