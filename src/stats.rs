// Derived statistics over a task snapshot

use crate::task::Task;

/// Counts and completion rate derived from a snapshot.
///
/// These belong to the consumers of a snapshot (home header, stats view);
/// the store keeps no aggregates of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percent of tasks completed, 0.0 for an empty snapshot.
    pub completion_rate: f64,
}

impl TaskStats {
    /// Compute statistics for the given snapshot.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let pending = total - completed;
        let completion_rate = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            completed,
            pending,
            completion_rate,
        }
    }
}
