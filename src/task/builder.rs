//! Task builder
//!
//! Provides fluent API for building task definitions.

use super::{Task, TaskActionInformation, Trigger};
use crate::{config, Error, Result};
use std::time::Duration;

/// Task builder
///
/// # Examples
///
/// ```rust
/// use taskrelay::Task;
/// use std::time::Duration;
///
/// # fn example() -> taskrelay::Result<()> {
/// let task = Task::builder("send reminder")
///     .id(5)
///     .trigger_subject("org.example.patient.created")
///     .number_of_retries(5)
///     .retry_interval(Duration::from_millis(5000))
///     .action("send", "SmsService", "send")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TaskBuilder {
    id: u64,
    name: String,
    enabled: bool,
    trigger: Option<Trigger>,
    actions: Vec<TaskActionInformation>,
    number_of_retries: Option<u32>,
    retry_interval_ms: Option<u64>,
}

impl TaskBuilder {
    /// Create a new task builder
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            enabled: true,
            trigger: None,
            actions: Vec::new(),
            number_of_retries: None,
            retry_interval_ms: None,
        }
    }

    /// Set task id
    #[must_use]
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Set whether the task is active
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the trigger subject
    #[must_use]
    pub fn trigger_subject(mut self, subject: impl Into<String>) -> Self {
        self.trigger = Some(Trigger::new(subject));
        self
    }

    /// Set the full trigger, including an explicit retry-job subject
    #[must_use]
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Add an action to the task
    #[must_use]
    pub fn action(
        mut self,
        name: impl Into<String>,
        service_interface: impl Into<String>,
        service_method: impl Into<String>,
    ) -> Self {
        self.actions
            .push(TaskActionInformation::new(name, service_interface, service_method));
        self
    }

    /// Set the number of retry attempts (0 disables retries)
    #[must_use]
    pub fn number_of_retries(mut self, retries: u32) -> Self {
        self.number_of_retries = Some(retries);
        self
    }

    /// Set the interval between retry attempts
    ///
    /// Stored in milliseconds; the scheduler wire contract carries whole
    /// seconds, so sub-second intervals truncate to zero when scheduled.
    #[must_use]
    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval_ms = Some(interval.as_millis() as u64);
        self
    }

    /// Set the interval between retry attempts, in milliseconds
    #[must_use]
    pub fn retry_interval_ms(mut self, interval_ms: u64) -> Self {
        self.retry_interval_ms = Some(interval_ms);
        self
    }

    /// Build the task
    pub fn build(self) -> Result<Task> {
        let trigger = self
            .trigger
            .ok_or_else(|| Error::Validation("task must have a trigger".into()))?;

        // Fall back to global defaults for unset retry settings
        let number_of_retries = self
            .number_of_retries
            .unwrap_or_else(config::get_default_number_of_retries);
        let retry_interval_ms = self
            .retry_interval_ms
            .unwrap_or_else(config::get_default_retry_interval_ms);

        let task = Task {
            id: self.id,
            name: self.name,
            enabled: self.enabled,
            trigger,
            actions: self.actions,
            number_of_retries,
            retry_interval_ms,
        };

        task.validate()?;

        Ok(task)
    }
}
