use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
            PriorityLevel::Urgent => "urgent",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for TaskFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskFrequency::Daily => "daily",
            TaskFrequency::Weekly => "weekly",
            TaskFrequency::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

/// The base record shape. `id` is caller-assigned and never regenerated.
///
/// `completed` mirrors `status`: it is true exactly when the status is
/// [`TaskStatus::Completed`], and every status-mutating operation keeps the
/// two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub completed: bool,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status,
            completed: status == TaskStatus::Completed,
        }
    }
}

/// Base shape plus a priority level. Serialized flat, so the wire shape is
/// the base fields with `priority` alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority: PriorityLevel,
}

impl PriorityTask {
    pub fn new(task: Task, priority: PriorityLevel) -> Self {
        Self { task, priority }
    }
}

/// Base shape plus a recurrence frequency. Serialized flat like
/// [`PriorityTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTask {
    #[serde(flatten)]
    pub task: Task,
    pub frequency: TaskFrequency,
}

impl RecurringTask {
    pub fn new(task: Task, frequency: TaskFrequency) -> Self {
        Self { task, frequency }
    }
}

/// Common-fields accessor for the three record shapes.
///
/// The shapes are structurally independent, not a hierarchy; this trait is
/// the seam that lets the manager and the free utilities work over any of
/// them without runtime type inspection.
pub trait TaskRecord: Clone {
    fn base(&self) -> &Task;
    fn base_mut(&mut self) -> &mut Task;
}

impl TaskRecord for Task {
    fn base(&self) -> &Task {
        self
    }

    fn base_mut(&mut self) -> &mut Task {
        self
    }
}

impl TaskRecord for PriorityTask {
    fn base(&self) -> &Task {
        &self.task
    }

    fn base_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}

impl TaskRecord for RecurringTask {
    fn base(&self) -> &Task {
        &self.task
    }

    fn base_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}
