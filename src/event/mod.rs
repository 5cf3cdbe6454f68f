//! Event envelope and wire contract
//!
//! Provides the TaskEvent envelope sent through the event relay, the
//! scheduling wire contract (subjects and parameter keys), and the typed
//! ExecutionParameters carried through a task execution.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Outbound event subjects (wire contract, matched exactly by the scheduler)
pub mod subjects {
    /// Schedule a recurring retry job for a task
    pub const SCHEDULE_REPEATING_JOB: &str = "SCHEDULE_REPEATING_JOB";

    /// Cancel a previously scheduled recurring retry job
    pub const UNSCHEDULE_REPEATING_JOB: &str = "UNSCHEDULE_REPEATING_JOB";
}

/// Event parameter keys (wire contract)
pub mod keys {
    /// Number of times the repeating job fires
    pub const REPEAT_COUNT: &str = "REPEAT_COUNT";

    /// Interval between job firings, in seconds
    pub const REPEAT_INTERVAL_TIME: &str = "REPEAT_INTERVAL_TIME";

    /// Numeric id of the task the job belongs to
    pub const TASK_ID: &str = "TASK_ID";

    /// Subject identifying the retry job
    pub const JOB_SUBJECT: &str = "JOB_SUBJECT";

    /// Inbound flag marking an execution as a scheduled retry attempt
    pub const TASK_RETRY: &str = "TASK_RETRY";
}

/// Event envelope dispatched through the relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvent {
    /// Event ID (UUID)
    pub id: String,
    /// Event subject (routing key)
    pub subject: String,
    /// Event parameters
    pub parameters: HashMap<String, Value>,
    /// Creation time (Unix timestamp, seconds)
    pub created_at: i64,
}

impl TaskEvent {
    /// Create a new event with the given subject and parameters
    pub fn new(subject: impl Into<String>, parameters: HashMap<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject: subject.into(),
            parameters,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Get a parameter value by key
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Get event description
    pub fn description(&self) -> String {
        format!("Event[subject={}, id={}]", self.subject, self.id)
    }
}

/// Execution context carried from the triggering event into the retry decision
///
/// Replaces a shared mutable parameter map keyed by magic strings with an
/// explicit retry-attempt flag plus an untyped value bag. The flag marks the
/// current execution as a scheduled retry rather than the original attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionParameters {
    retry_attempt: bool,
    values: HashMap<String, Value>,
}

impl ExecutionParameters {
    /// Create empty execution parameters (not a retry attempt)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build execution parameters from an inbound event parameter map
    ///
    /// Reads the `TASK_RETRY` key; a missing key or a non-boolean value is
    /// treated as false. The source map is only borrowed, never mutated.
    pub fn from_event(parameters: &HashMap<String, Value>) -> Self {
        let retry_attempt = parameters
            .get(keys::TASK_RETRY)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let values = parameters
            .iter()
            .filter(|(key, _)| key.as_str() != keys::TASK_RETRY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            retry_attempt,
            values,
        }
    }

    /// Set the retry-attempt flag
    #[must_use]
    pub fn with_retry_attempt(mut self, retry_attempt: bool) -> Self {
        self.retry_attempt = retry_attempt;
        self
    }

    /// Add a value to the parameter bag
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Check whether the current execution is a scheduled retry attempt
    pub fn is_retry_attempt(&self) -> bool {
        self.retry_attempt
    }

    /// Get a value from the parameter bag
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Access the parameter bag
    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    /// Render back into an event parameter map
    ///
    /// The `TASK_RETRY` key is included only when the flag is set, matching
    /// the inbound wire format.
    pub fn to_event_parameters(&self) -> HashMap<String, Value> {
        let mut parameters = self.values.clone();
        if self.retry_attempt {
            parameters.insert(keys::TASK_RETRY.to_string(), Value::Bool(true));
        }
        parameters
    }
}
