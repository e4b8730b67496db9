//! Background task orchestration.
//!
//! Slow, fallible operations (network calls into the model backend) run on
//! spawned tokio tasks. Their results come back to the UI loop as [`Action`]
//! values over an unbounded channel, so UI state is only ever mutated by the
//! loop that owns it. For every submitted operation exactly one action is
//! delivered: the success mapping applied to the result, or the error
//! mapping applied to the failure message.

use super::actions::Action;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// The kinds of background operation the UI can have in flight.
///
/// At most one task per kind runs at a time; the UI checks its busy flags
/// before submitting. Different kinds may run concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CheckConnection,
    LoadModels,
    Summarize,
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub kind: OperationKind,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Submit an operation for background execution.
    ///
    /// `operation` runs on a spawned task and must not touch UI state; it
    /// only owns what was moved into it. On completion, `on_success` or
    /// `on_error` maps the outcome to the single action posted back to the
    /// UI loop. Returns immediately with the task id.
    pub fn submit<T, F, Fut, S, E>(
        &mut self,
        kind: OperationKind,
        description: String,
        operation: F,
        on_success: S,
        on_error: E,
    ) -> TaskId
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
        S: FnOnce(T) -> Action + Send + 'static,
        E: FnOnce(String) -> Action + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match operation().await {
                Ok(value) => on_success(value),
                Err(e) => on_error(e.to_string()),
            };
            // Receiver gone means the UI is shutting down
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            id: task_id,
            kind,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check whether a task of the given kind is still running
    pub fn is_running(&self, kind: OperationKind) -> bool {
        self.tasks
            .values()
            .any(|task| task.kind == kind && !task.handle.is_finished())
    }

    /// Remove finished tasks, returning their ids and descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| {
                self.tasks
                    .remove(&task_id)
                    .map(|task| (task_id, task.description))
            })
            .collect()
    }

    /// Abort all running tasks; only used when the UI shuts down
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
