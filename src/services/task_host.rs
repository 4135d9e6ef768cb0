//! One-shot isolated execution of a single [`Operation`].
//!
//! A [`TaskHost`] is consumed by [`TaskHost::run`], so it can carry at most
//! one invocation and cannot be reused afterwards. The work runs on tokio's
//! blocking pool under a deadline; the caller's task only awaits.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use cielab_ops::{Operation, OperationOutput, PixelBuffer};

use crate::error::TaskError;

/// Default deadline for one invocation
pub const DEFAULT_TASK_TIMEOUT: Duration = Duration::from_secs(60);

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Executes an operation on a buffer. Called from a blocking-pool thread.
pub trait OperationRunner: Send + Sync + 'static {
    fn run(&self, operation: Operation, buffer: PixelBuffer) -> OperationOutput;
}

/// Runs operations with the cielab-ops implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreRunner;

impl OperationRunner for CoreRunner {
    fn run(&self, operation: Operation, buffer: PixelBuffer) -> OperationOutput {
        operation.apply(buffer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Created,
    Running,
    Succeeded,
    Failed,
    TimedOut,
}

impl TaskState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskState::Succeeded | TaskState::Failed | TaskState::TimedOut
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Created => "created",
            TaskState::Running => "running",
            TaskState::Succeeded => "succeeded",
            TaskState::Failed => "failed",
            TaskState::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct TaskHost {
    id: u64,
    state: TaskState,
    deadline: Duration,
    runner: Arc<dyn OperationRunner>,
}

impl TaskHost {
    pub fn new(runner: Arc<dyn OperationRunner>, deadline: Duration) -> Self {
        let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(task_id = id, deadline_ms = deadline.as_millis() as u64, "Task created");
        Self {
            id,
            state: TaskState::Created,
            deadline,
            runner,
        }
    }

    /// Host backed by [`CoreRunner`] with the default 60s deadline
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(CoreRunner), DEFAULT_TASK_TIMEOUT)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Move to `next`. Once a terminal state is reached every further
    /// transition is ignored and `false` is returned.
    fn transition(&mut self, next: TaskState) -> bool {
        if self.state.is_terminal() {
            tracing::debug!(
                task_id = self.id,
                state = %self.state,
                ignored = %next,
                "Ignoring transition after terminal state"
            );
            return false;
        }

        tracing::debug!(task_id = self.id, from = %self.state, to = %next, "Task state transition");
        self.state = next;
        true
    }

    /// Run `operation` on `buffer` and produce exactly one outcome.
    ///
    /// On timeout the in-flight computation is detached: its result and the
    /// buffer it owns are dropped when it finishes.
    pub async fn run(
        mut self,
        operation: Operation,
        buffer: PixelBuffer,
    ) -> Result<OperationOutput, TaskError> {
        let name = operation.name();
        let (width, height) = (buffer.width(), buffer.height());
        self.transition(TaskState::Running);

        let started = Instant::now();
        let runner = self.runner.clone();
        let handle = tokio::task::spawn_blocking(move || runner.run(operation, buffer));

        let outcome = match tokio::time::timeout(self.deadline, handle).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(TaskError::Failed(format!("{name} task aborted: {e}"))),
            Err(_) => Err(TaskError::TimedOut(self.deadline)),
        };

        let terminal = match &outcome {
            Ok(_) => TaskState::Succeeded,
            Err(TaskError::Failed(_)) => TaskState::Failed,
            Err(TaskError::TimedOut(_)) => TaskState::TimedOut,
        };
        self.transition(terminal);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &outcome {
            Ok(_) => tracing::info!(
                task_id = self.id,
                operation = name,
                width,
                height,
                elapsed_ms,
                state = %self.state,
                "Task finished"
            ),
            Err(e) => tracing::warn!(
                task_id = self.id,
                operation = name,
                width,
                height,
                elapsed_ms,
                state = %self.state,
                error = %e,
                "Task did not succeed"
            ),
        }

        outcome
    }
}

impl fmt::Debug for TaskHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHost")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}
