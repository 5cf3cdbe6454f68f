//! Task lookup port tests
//!
//! Exercises the lookup seam the way the surrounding handling flow uses it:
//! resolve the task for a trigger, resolve its action event, and feed a
//! resolution failure into the retry decision as a failed outcome.

mod common;

use common::{create_test_task, CapturingRelay, InMemoryLookup};
use taskrelay::event::{subjects, ExecutionParameters};
use taskrelay::lookup::TaskLookup;
use taskrelay::{Error, RetryCoordinator};

#[tokio::test]
async fn test_find_active_tasks_for_trigger_subject() {
    let task = create_test_task(5, 5, 5000);
    let lookup = InMemoryLookup::new(vec![task], vec![]);

    let tasks = lookup
        .find_active_tasks_for_trigger_subject("org.test.trigger")
        .await
        .unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 5);

    let tasks = lookup
        .find_active_tasks_for_trigger_subject("org.other.trigger")
        .await
        .unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_get_task_not_found() {
    let lookup = InMemoryLookup::new(vec![], vec![]);

    let result = lookup.get_task(42).await;

    assert!(matches!(result, Err(Error::TaskNotFound(42))));
}

#[tokio::test]
async fn test_resolution_failure_feeds_retry_scheduling() {
    let task = create_test_task(5, 5, 5000);
    let action = task.actions[0].clone();

    // No resolvable actions: resolution fails for everything
    let lookup = InMemoryLookup::new(vec![task.clone()], vec![]);
    let relay = CapturingRelay::new();
    let coordinator = RetryCoordinator::new(relay.clone());

    let resolution = lookup.action_event_for(&action).await;
    let err = resolution.unwrap_err();
    assert!(err.is_execution_failure());

    // The handling flow reports the resolution failure as a failed execution
    coordinator
        .handle_outcome(&task, &ExecutionParameters::new(), false)
        .await
        .unwrap();

    let events = relay.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subject, subjects::SCHEDULE_REPEATING_JOB);
}

#[tokio::test]
async fn test_action_event_resolves_for_known_action() {
    let task = create_test_task(5, 5, 5000);
    let action = task.actions[0].clone();
    let lookup = InMemoryLookup::new(vec![task], vec![action.clone()]);

    let action_event = lookup.action_event_for(&action).await.unwrap();

    assert_eq!(action_event.service_interface, "TestService");
    assert_eq!(action_event.service_method, "abc");
}
