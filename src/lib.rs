//! # Taskrelay
//!
//! Retry scheduling for event-driven task execution.
//!
//! After each execution of a task's action, the [`retry::RetryCoordinator`]
//! decides whether to schedule a recurring retry job, leave an existing
//! schedule untouched, or cancel an active schedule, and emits the matching
//! scheduling command through an [`relay::EventRelay`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskrelay::{RetryCoordinator, Task};
//! use taskrelay::event::ExecutionParameters;
//! use taskrelay::relay::ChannelRelay;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> taskrelay::Result<()> {
//!     let (relay, mut scheduling_commands) = ChannelRelay::unbounded();
//!     let coordinator = RetryCoordinator::new(Arc::new(relay));
//!
//!     let task = Task::builder("send reminder")
//!         .id(5)
//!         .trigger_subject("org.example.patient.created")
//!         .number_of_retries(5)
//!         .retry_interval(Duration::from_millis(5000))
//!         .build()?;
//!
//!     // Action execution failed on the original attempt: schedules retries.
//!     coordinator
//!         .handle_outcome(&task, &ExecutionParameters::new(), false)
//!         .await?;
//!
//!     let command = scheduling_commands.recv().await.unwrap();
//!     println!("{}", command.subject);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Public module exports
pub mod error;
pub mod task;

// Event envelope and wire contract
pub mod event;

// Ports to external collaborators
pub mod lookup;
pub mod relay;

// Retry decision
pub mod retry;

// Global configuration
pub mod config;

// Re-export common types
pub use error::{Error, Result};
pub use retry::RetryCoordinator;
pub use task::Task;
