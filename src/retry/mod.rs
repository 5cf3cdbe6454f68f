//! Retry coordinator
//!
//! Decides, after each task execution outcome, whether to schedule a
//! recurring retry job, leave an existing schedule untouched, or cancel an
//! active schedule, and emits the corresponding scheduling command through
//! the event relay.

use crate::event::{keys, subjects, ExecutionParameters, TaskEvent};
use crate::relay::EventRelay;
use crate::task::Task;
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// RetryCoordinator - retry scheduling decisions for task executions
///
/// Stateless and reentrant: every decision input comes from the call
/// arguments, so concurrent executions of different tasks can share one
/// coordinator. For a single task, the caller is responsible for the
/// retry-attempt flag reflecting the scheduling state at call time; the
/// coordinator trusts the flag instead of keeping its own tracking table.
pub struct RetryCoordinator {
    relay: Arc<dyn EventRelay>,
}

impl RetryCoordinator {
    /// Create a new coordinator dispatching through the given relay
    pub fn new(relay: Arc<dyn EventRelay>) -> Self {
        Self { relay }
    }

    /// Handle the outcome of one task execution
    ///
    /// Sends at most one scheduling command:
    /// - success on a retry attempt cancels the recurring retry job;
    /// - failure on an original attempt with retries enabled schedules one;
    /// - everything else is a no-op (a failed retry attempt already has a
    ///   schedule, and a task with zero retries never gets one).
    ///
    /// Relay errors propagate to the caller; the coordinator does not retry
    /// its own output events, which would recurse.
    pub async fn handle_outcome(
        &self,
        task: &Task,
        parameters: &ExecutionParameters,
        succeeded: bool,
    ) -> Result<()> {
        if succeeded {
            if parameters.is_retry_attempt() {
                tracing::debug!("{} succeeded on retry, unscheduling retry job", task.description());
                return self.relay.send(self.unschedule_event(task)).await;
            }
            return Ok(());
        }

        if parameters.is_retry_attempt() {
            // A retry job already exists for this task; scheduling again
            // would double up the job.
            tracing::debug!("{} failed on retry attempt, schedule left in place", task.description());
            return Ok(());
        }

        if !task.retries_enabled() {
            tracing::debug!("{} failed, retries disabled", task.description());
            return Ok(());
        }

        tracing::debug!(
            "{} failed, scheduling {} retries every {}ms",
            task.description(),
            task.number_of_retries,
            task.retry_interval_ms
        );
        self.relay.send(self.schedule_event(task)).await
    }

    /// Build the schedule command for a task's retry job
    fn schedule_event(&self, task: &Task) -> TaskEvent {
        // The scheduler takes the repeat interval in seconds; the
        // millisecond configuration truncates toward zero.
        let repeat_interval_secs = task.retry_interval_ms / 1000;
        if repeat_interval_secs == 0 && task.retry_interval_ms > 0 {
            tracing::warn!(
                "{} retry interval {}ms truncates to a zero-second repeat interval",
                task.description(),
                task.retry_interval_ms
            );
        }

        let mut parameters = HashMap::new();
        parameters.insert(
            keys::REPEAT_COUNT.to_string(),
            Value::from(task.number_of_retries),
        );
        parameters.insert(
            keys::REPEAT_INTERVAL_TIME.to_string(),
            Value::from(repeat_interval_secs),
        );
        parameters.insert(keys::TASK_ID.to_string(), Value::from(task.id));
        parameters.insert(
            keys::JOB_SUBJECT.to_string(),
            Value::from(task.trigger.effective_listener_retry_subject()),
        );

        TaskEvent::new(subjects::SCHEDULE_REPEATING_JOB, parameters)
    }

    /// Build the unschedule command for a task's retry job
    fn unschedule_event(&self, task: &Task) -> TaskEvent {
        let mut parameters = HashMap::new();
        parameters.insert(
            keys::JOB_SUBJECT.to_string(),
            Value::from(task.trigger.effective_listener_retry_subject()),
        );

        TaskEvent::new(subjects::UNSCHEDULE_REPEATING_JOB, parameters)
    }
}
