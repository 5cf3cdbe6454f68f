//! Error type definitions
//!
//! Provides all possible error types in the taskrelay crate.

/// Result type alias for taskrelay
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the taskrelay crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Event relay dispatch errors
    #[error("Relay error: {0}")]
    Relay(String),

    /// Action event resolution errors
    #[error("Action resolution error: {0}")]
    Resolution(String),

    /// Task not found
    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    /// Task validation errors
    #[error("Task validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Check if the error counts as a failed action execution
    ///
    /// Failures of this kind feed back into the retry decision as a
    /// `succeeded = false` outcome rather than aborting the handling flow.
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, Error::Resolution(_))
    }
}
