//! Free filter and sort utilities.
//!
//! These work over a plain slice of any record shape, independently of the
//! manager. Both return fresh `Vec`s; the input is never mutated.

use crate::model::TaskRecord;
use std::cmp::Ordering;

/// Copy out, in input order, every record the predicate accepts.
pub fn filter_tasks<T, P>(tasks: &[T], predicate: P) -> Vec<T>
where
    T: TaskRecord,
    P: Fn(&T) -> bool,
{
    tasks
        .iter()
        .filter(|&t| predicate(t))
        .cloned()
        .collect()
}

/// Return a sorted copy of the input.
///
/// The sort is stable: records the comparator considers equal keep their
/// input order.
pub fn sort_tasks<T, F>(tasks: &[T], comparator: F) -> Vec<T>
where
    T: TaskRecord,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = tasks.to_vec();
    sorted.sort_by(comparator);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Task, TaskStatus};

    fn sample() -> Vec<Task> {
        vec![
            Task::new("1", "Write report", "Quarterly report", TaskStatus::Pending),
            Task::new("2", "Archive inbox", "Inbox zero", TaskStatus::Completed),
            Task::new("3", "Review report", "Draft review", TaskStatus::InProgress),
        ]
    }

    #[test]
    fn filter_keeps_matching_records_in_order() {
        let tasks = sample();
        let matches = filter_tasks(&tasks, |t| t.title.contains("report"));

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[1].id, "3");
    }

    #[test]
    fn filter_with_always_true_is_the_identity() {
        let tasks = sample();
        assert_eq!(filter_tasks(&tasks, |_| true), tasks);
    }

    #[test]
    fn filter_with_always_false_is_empty() {
        let tasks = sample();
        assert!(filter_tasks(&tasks, |_| false).is_empty());
    }

    #[test]
    fn sort_returns_a_permutation_and_leaves_input_alone() {
        let tasks = sample();
        let sorted = sort_tasks(&tasks, |a, b| a.title.cmp(&b.title));

        assert_eq!(sorted.len(), tasks.len());
        assert_eq!(sorted[0].title, "Archive inbox");
        assert_eq!(sorted[1].title, "Review report");
        assert_eq!(sorted[2].title, "Write report");
        // Input untouched.
        assert_eq!(tasks[0].title, "Write report");
    }

    #[test]
    fn sorting_a_sorted_sequence_changes_nothing() {
        let tasks = sample();
        let once = sort_tasks(&tasks, |a, b| a.title.cmp(&b.title));
        let twice = sort_tasks(&once, |a, b| a.title.cmp(&b.title));

        assert_eq!(once, twice);
    }

    #[test]
    fn comparator_ties_keep_input_order() {
        let tasks = vec![
            Task::new("a", "Same", "first", TaskStatus::Pending),
            Task::new("b", "Same", "second", TaskStatus::Pending),
            Task::new("c", "Aardvark", "", TaskStatus::Pending),
        ];

        let sorted = sort_tasks(&tasks, |a, b| a.title.cmp(&b.title));
        assert_eq!(sorted[0].id, "c");
        assert_eq!(sorted[1].id, "a");
        assert_eq!(sorted[2].id, "b");
    }
}
