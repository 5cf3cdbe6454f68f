//! Common test utilities
//!
//! Shared relay doubles, lookup doubles, and task fixtures for
//! integration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taskrelay::event::TaskEvent;
use taskrelay::lookup::TaskLookup;
use taskrelay::relay::EventRelay;
use taskrelay::task::{ActionEvent, TaskActionInformation, Trigger};
use taskrelay::{Error, Result, Task};

/// Relay double that records every dispatched event
pub struct CapturingRelay {
    events: Mutex<Vec<TaskEvent>>,
}

impl CapturingRelay {
    /// Create a new capturing relay
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
        })
    }

    /// Snapshot of the captured events
    pub fn events(&self) -> Vec<TaskEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of captured events
    pub fn sent_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl EventRelay for CapturingRelay {
    async fn send(&self, event: TaskEvent) -> Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Relay double that fails every dispatch
pub struct FailingRelay {
    pub attempts: AtomicUsize,
}

impl FailingRelay {
    /// Create a new failing relay
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl EventRelay for FailingRelay {
    async fn send(&self, _event: TaskEvent) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        Err(Error::Relay("event bus unavailable".to_string()))
    }
}

/// In-memory task store implementing the lookup port
pub struct InMemoryLookup {
    tasks: HashMap<u64, Task>,
    resolvable_actions: Vec<TaskActionInformation>,
}

impl InMemoryLookup {
    /// Create a lookup over the given tasks
    ///
    /// Actions listed in `resolvable_actions` resolve successfully; any
    /// other action fails resolution.
    pub fn new(tasks: Vec<Task>, resolvable_actions: Vec<TaskActionInformation>) -> Self {
        Self {
            tasks: tasks.into_iter().map(|t| (t.id, t)).collect(),
            resolvable_actions,
        }
    }
}

#[async_trait]
impl TaskLookup for InMemoryLookup {
    async fn find_active_tasks_for_trigger_subject(&self, subject: &str) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .values()
            .filter(|t| t.enabled && t.trigger.subject == subject)
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: u64) -> Result<Task> {
        self.tasks.get(&id).cloned().ok_or(Error::TaskNotFound(id))
    }

    async fn action_event_for(&self, action: &TaskActionInformation) -> Result<ActionEvent> {
        if self.resolvable_actions.contains(action) {
            Ok(ActionEvent {
                service_interface: action.service_interface.clone(),
                service_method: action.service_method.clone(),
                subject: action.subject.clone(),
            })
        } else {
            Err(Error::Resolution(format!(
                "{}.{}",
                action.service_interface, action.service_method
            )))
        }
    }
}

/// Create a test task with the given retry settings
pub fn create_test_task(id: u64, number_of_retries: u32, retry_interval_ms: u64) -> Task {
    Task::builder("test task")
        .id(id)
        .trigger_subject("org.test.trigger")
        .number_of_retries(number_of_retries)
        .retry_interval_ms(retry_interval_ms)
        .action("abc", "TestService", "abc")
        .build()
        .expect("Failed to build task")
}

/// Create a test task with an explicit retry-job subject
pub fn create_test_task_with_retry_subject(
    id: u64,
    number_of_retries: u32,
    retry_interval_ms: u64,
    retry_subject: &str,
) -> Task {
    Task::builder("test task")
        .id(id)
        .trigger(Trigger {
            subject: "org.test.trigger".to_string(),
            retry_subject: Some(retry_subject.to_string()),
        })
        .number_of_retries(number_of_retries)
        .retry_interval_ms(retry_interval_ms)
        .build()
        .expect("Failed to build task")
}
