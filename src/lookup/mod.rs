//! Task lookup port
//!
//! Seam to the external task definition store and action-resolution service.

use crate::task::{ActionEvent, Task, TaskActionInformation};
use crate::Result;
use async_trait::async_trait;

/// TaskLookup trait - access to task definitions and action resolution
///
/// Implemented by the task storage service; the retry decision itself only
/// consumes `Task` values, but the surrounding handling flow resolves tasks
/// and action events through this port.
#[async_trait]
pub trait TaskLookup: Send + Sync {
    /// Find active tasks listening on the given trigger subject
    async fn find_active_tasks_for_trigger_subject(&self, subject: &str) -> Result<Vec<Task>>;

    /// Fetch a task definition by id
    ///
    /// Returns `Error::TaskNotFound` when no task with the id exists.
    async fn get_task(&self, id: u64) -> Result<Task>;

    /// Resolve the concrete action event for one action of a task
    ///
    /// Returns `Error::Resolution` when the action cannot be resolved; the
    /// caller treats that as a failed execution of the action.
    async fn action_event_for(&self, action: &TaskActionInformation) -> Result<ActionEvent>;
}
