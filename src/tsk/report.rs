//! Report assembly.
//!
//! Everything here is pure data production: the CLI decides how counts,
//! listings, and messages end up on the terminal. The one mutation is the
//! walkthrough status move, which [`TaskReport::build`] performs on the
//! regular manager and reports as a message.

use crate::manager::{PriorityTaskManager, RecurringTaskManager, RegularTaskManager};
use crate::model::{PriorityLevel, PriorityTask, Task, TaskStatus};
use crate::query::{filter_tasks, sort_tasks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct ReportMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl ReportMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub urgent: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Default)]
pub struct TaskReport {
    pub regular_count: usize,
    pub priority_count: usize,
    pub recurring_count: usize,
    pub status: StatusBreakdown,
    pub priorities: PriorityBreakdown,
    /// High-priority tasks to surface with their descriptions.
    pub attention: Vec<PriorityTask>,
    /// Regular and priority base records merged and sorted by title.
    pub sorted_tasks: Vec<Task>,
    pub keyword: String,
    pub keyword_matches: Vec<Task>,
    pub messages: Vec<ReportMessage>,
}

impl TaskReport {
    /// Assemble the full report.
    ///
    /// The status breakdown is taken first; the walkthrough then moves the
    /// first pending regular task to in-progress, so the merged listings
    /// reflect the moved task while the breakdown shows the loaded state.
    pub fn build(
        regular: &mut RegularTaskManager,
        priority: &PriorityTaskManager,
        recurring: &RecurringTaskManager,
        keyword: &str,
    ) -> Self {
        let mut messages = Vec::new();

        let status = StatusBreakdown {
            pending: regular.filter_by_status(TaskStatus::Pending).len(),
            in_progress: regular.filter_by_status(TaskStatus::InProgress).len(),
            completed: regular.filter_by_status(TaskStatus::Completed).len(),
        };

        let priorities = PriorityBreakdown {
            urgent: priority.urgent_tasks().len(),
            high: priority.filter_by_priority(PriorityLevel::High).len(),
            medium: priority.filter_by_priority(PriorityLevel::Medium).len(),
            low: priority.filter_by_priority(PriorityLevel::Low).len(),
        };

        // Walkthrough: pick up the first pending task and start it.
        if let Some(first) = regular.filter_by_status(TaskStatus::Pending).first() {
            messages.push(ReportMessage::success(format!(
                "Moving task {} to in-progress",
                first.id
            )));
            regular.update_task_status(&first.id, TaskStatus::InProgress);
        }

        let attention = priority.filter_by_priority(PriorityLevel::High);

        let combined: Vec<Task> = regular
            .all_tasks()
            .into_iter()
            .chain(priority.all_tasks().into_iter().map(|t| t.task))
            .collect();

        let sorted_tasks = sort_tasks(&combined, |a, b| a.title.cmp(&b.title));

        let needle = keyword.to_lowercase();
        let keyword_matches = filter_tasks(&combined, |t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        });

        Self {
            regular_count: regular.len(),
            priority_count: priority.len(),
            recurring_count: recurring.len(),
            status,
            priorities,
            attention,
            sorted_tasks,
            keyword: keyword.to_string(),
            keyword_matches,
            messages,
        }
    }
}
