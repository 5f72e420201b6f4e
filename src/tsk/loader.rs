use crate::error::Result;
use crate::model::{PriorityTask, RecurringTask, Task};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Wire shape of a tasks document:
///
/// ```json
/// { "regularTasks": [...], "priorityTasks": [...], "recurringTasks": [...] }
/// ```
///
/// Lists missing from the document deserialize as empty, so a partial
/// document still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksFile {
    #[serde(default)]
    pub regular_tasks: Vec<Task>,

    #[serde(default)]
    pub priority_tasks: Vec<PriorityTask>,

    #[serde(default)]
    pub recurring_tasks: Vec<RecurringTask>,
}

impl TasksFile {
    /// Read and parse a tasks document.
    ///
    /// Callers that can carry on without data are expected to fall back to
    /// [`TasksFile::default`] on error; the manager layer never sees a
    /// failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let file = serde_json::from_str(&contents)?;
        Ok(file)
    }
}
