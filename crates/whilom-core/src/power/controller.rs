//! Privileged command execution behind a swappable process seam.

use crate::{
    PowerError,
    error::Result,
    power::{
        SleepState,
        command::{PrivilegedCommand, sleep_command},
    },
};

use std::{panic::Location, process::Command};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Outcome of a completed privileged command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Whether the process exited with a success status.
    pub success: bool,
    /// Captured stderr, used as the failure message.
    pub stderr: String,
}

/// Process seam for [`SleepController`].
///
/// Production uses [`OsaScriptRunner`]; tests substitute a mock so the engine
/// is exercised without an authorization prompt.
pub trait CommandRunner {
    /// Run the command to completion and capture its outcome.
    fn run(&self, command: &PrivilegedCommand) -> Result<RunOutput>;
}

/// Runs privileged commands by spawning `osascript` and waiting for it.
///
/// The spawn blocks until the authorization dialog is dismissed, so callers
/// on an async runtime should use the blocking pool.
#[derive(Debug, Default)]
pub struct OsaScriptRunner;

impl CommandRunner for OsaScriptRunner {
    #[track_caller]
    fn run(&self, command: &PrivilegedCommand) -> Result<RunOutput> {
        let output = Command::new(command.program)
            .args(&command.args)
            .output()
            .map_err(|e| PowerError::SpawnFailed {
                reason: format!("Failed to spawn {}: {}", command.program, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(RunOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Sleep-control engine: maps a target [`SleepState`] to its privileged
/// command and runs it through the configured [`CommandRunner`].
pub struct SleepController<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SleepController<R> {
    /// Create a controller over the given process seam.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Run the privileged command that moves the system into `target`.
    ///
    /// Returns only after the command, and any authorization prompt it
    /// raises, has completed. A non-zero exit is reported with the command's
    /// stderr; cancelling the prompt surfaces the same way.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn apply(&self, target: SleepState) -> Result<()> {
        let command = sleep_command(target);
        debug!(command = ?command.shell_command(), "Running privileged command");

        let outcome = self.runner.run(&command)?;

        if !outcome.success {
            return Err(PowerError::CommandFailed {
                message: if outcome.stderr.is_empty() {
                    "command exited with a failure status".to_string()
                } else {
                    outcome.stderr
                },
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(?target, "Sleep state applied");

        Ok(())
    }
}
