//! Task type definitions
//!
//! Provides Task, Trigger, and action types plus TaskBuilder for building
//! validated task definitions.

use serde::{Deserialize, Serialize};

pub mod builder;

pub use builder::TaskBuilder;

/// Trigger - the event pattern that starts a task
///
/// Carries the subject used as the identity of the task's retry job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    /// Subject of the triggering event
    pub subject: String,
    /// Explicit retry-job subject, overriding the derived default
    pub retry_subject: Option<String>,
}

impl Trigger {
    /// Create a new trigger for the given subject
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            retry_subject: None,
        }
    }

    /// The subject identifying this trigger's retry job
    ///
    /// Returns the explicit retry subject when one was configured, otherwise
    /// the trigger subject with a `.retry` suffix.
    pub fn effective_listener_retry_subject(&self) -> String {
        match &self.retry_subject {
            Some(subject) => subject.clone(),
            None => format!("{}.retry", self.subject),
        }
    }
}

/// Names one action of a task, as referenced by the action-resolution service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskActionInformation {
    /// Display name of the action
    pub name: String,
    /// Service interface implementing the action
    pub service_interface: String,
    /// Service method implementing the action
    pub service_method: String,
    /// Event subject the action listens on, if event-driven
    pub subject: Option<String>,
}

impl TaskActionInformation {
    /// Create a new action reference
    pub fn new(
        name: impl Into<String>,
        service_interface: impl Into<String>,
        service_method: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            service_interface: service_interface.into(),
            service_method: service_method.into(),
            subject: None,
        }
    }
}

/// Resolved action event - the concrete service endpoint for one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Service interface to invoke
    pub service_interface: String,
    /// Service method to invoke
    pub service_method: String,
    /// Event subject of the action
    pub subject: Option<String>,
}

/// Task - a configured unit of work triggered by an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task ID (opaque numeric)
    pub id: u64,
    /// Task name
    pub name: String,
    /// Whether the task is active
    pub enabled: bool,
    /// The trigger that starts this task
    pub trigger: Trigger,
    /// Actions executed when the trigger fires
    pub actions: Vec<TaskActionInformation>,
    /// Number of allowed retry attempts (0 disables retries)
    pub number_of_retries: u32,
    /// Interval between retry attempts, in milliseconds
    pub retry_interval_ms: u64,
}

impl Task {
    /// Create a new task builder
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(name)
    }

    /// Validate if the task definition is valid
    pub fn validate(&self) -> crate::Result<()> {
        use crate::{config, Error};

        if self.name.is_empty() {
            return Err(Error::Validation("task name cannot be empty".into()));
        }

        if self.trigger.subject.is_empty() {
            return Err(Error::Validation("trigger subject cannot be empty".into()));
        }

        // Validate retry count against global config
        let config = config::get_config();
        config
            .validate_number_of_retries(self.number_of_retries)
            .map_err(Error::Validation)?;

        Ok(())
    }

    /// Check whether retries are enabled for this task
    pub fn retries_enabled(&self) -> bool {
        self.number_of_retries > 0
    }

    /// Get task description
    pub fn description(&self) -> String {
        format!(
            "Task[name={}, id={}, trigger={}]",
            self.name, self.id, self.trigger.subject
        )
    }
}
