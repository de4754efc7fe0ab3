//! Abortable background tasks tied to screen lifetime.
//!
//! A screen that spawns work keeps the handles in a `TaskTracker` and calls
//! `abort_all` from `on_exit`, so nothing outlives the screen it belongs to.

use tokio::task::AbortHandle;

/// A handle to a spawned task that can be aborted.
#[derive(Debug)]
pub struct TaskHandle {
    abort_handle: AbortHandle,
}

impl TaskHandle {
    pub fn new(abort_handle: AbortHandle) -> Self {
        Self { abort_handle }
    }

    /// Cancel the task at its next await point.
    pub fn abort(&self) {
        self.abort_handle.abort();
    }

    /// Whether the task has completed or been aborted.
    pub fn is_finished(&self) -> bool {
        self.abort_handle.is_finished()
    }
}

/// A collection of task handles that are cancelled together.
///
/// Dropping the tracker aborts everything still running.
#[derive(Debug, Default)]
pub struct TaskTracker {
    handles: Vec<TaskHandle>,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a handle; finished tasks are pruned as new ones arrive.
    pub fn track(&mut self, handle: TaskHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Abort all tracked tasks.
    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    /// Number of tracked tasks that are still running.
    pub fn active_count(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TaskTracker {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn sleepy() -> tokio::task::JoinHandle<()> {
        tokio::spawn(async {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        })
    }

    #[tokio::test]
    async fn abort_finishes_the_task() {
        let join = sleepy().await;
        let handle = TaskHandle::new(join.abort_handle());
        assert!(!handle.is_finished());

        handle.abort();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn tracker_aborts_everything() {
        let mut tracker = TaskTracker::new();
        tracker.track(TaskHandle::new(sleepy().await.abort_handle()));
        tracker.track(TaskHandle::new(sleepy().await.abort_handle()));
        assert_eq!(tracker.active_count(), 2);

        tracker.abort_all();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(tracker.active_count(), 0);
    }
}
