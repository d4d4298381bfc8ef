use error_location::ErrorLocation;
use thiserror::Error;

/// Sleep-control errors with source location tracking.
#[derive(Error, Debug)]
pub enum PowerError {
    /// The privileged command could not be spawned.
    #[error("Failed to launch privileged command: {reason} {location}")]
    SpawnFailed {
        /// Description of the spawn failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The privileged command ran and exited with a failure status.
    #[error("Privileged command failed: {message} {location}")]
    CommandFailed {
        /// Message reported by the command, typically its stderr.
        message: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl PowerError {
    /// The bare failure message, without location decoration.
    ///
    /// This is what the UI shows in the failure alert.
    pub fn user_message(&self) -> &str {
        match self {
            PowerError::SpawnFailed { reason, .. } => reason,
            PowerError::CommandFailed { message, .. } => message,
        }
    }
}

/// Result type alias using [`PowerError`].
pub type Result<T> = std::result::Result<T, PowerError>;
