//! The collection manager.
//!
//! [`TaskManager`] holds an ordered list of records of one shape. Insertion
//! order is preserved and is the order of every snapshot handed out. Read
//! operations copy out; mutating a returned `Vec` never touches the
//! manager's own list.
//!
//! Operations on ids that are not present are defined as silent no-ops, not
//! failures. The manager's contract is total: every input produces a defined
//! outcome, with no error channel and no panics.

use crate::model::{PriorityLevel, PriorityTask, RecurringTask, Task, TaskRecord, TaskStatus};

pub struct TaskManager<T: TaskRecord> {
    tasks: Vec<T>,
}

impl<T: TaskRecord> Default for TaskManager<T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<T: TaskRecord> TaskManager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicate ids are accepted as-is.
    pub fn add_task(&mut self, task: T) {
        self.tasks.push(task);
    }

    /// Remove every record with the given id.
    pub fn remove_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.base().id != id);
    }

    /// Set the status of the first record with the given id, keeping the
    /// `completed` flag in sync with it.
    pub fn update_task_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.base().id == id) {
            let base = task.base_mut();
            base.status = status;
            base.completed = status == TaskStatus::Completed;
        }
    }

    /// Copy out the records with the given status, in insertion order.
    pub fn filter_by_status(&self, status: TaskStatus) -> Vec<T> {
        self.tasks
            .iter()
            .filter(|t| t.base().status == status)
            .cloned()
            .collect()
    }

    /// Snapshot of the whole collection in insertion order.
    pub fn all_tasks(&self) -> Vec<T> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Manager pinned to the base shape. Adds nothing over the generic manager.
pub type RegularTaskManager = TaskManager<Task>;

/// Manager pinned to the priority shape; gains the priority filters below.
pub type PriorityTaskManager = TaskManager<PriorityTask>;

/// Manager pinned to the recurring shape.
pub type RecurringTaskManager = TaskManager<RecurringTask>;

impl TaskManager<PriorityTask> {
    /// Copy out the records at the given priority, in insertion order.
    pub fn filter_by_priority(&self, priority: PriorityLevel) -> Vec<PriorityTask> {
        self.tasks
            .iter()
            .filter(|t| t.priority == priority)
            .cloned()
            .collect()
    }

    pub fn urgent_tasks(&self) -> Vec<PriorityTask> {
        self.filter_by_priority(PriorityLevel::Urgent)
    }
}
