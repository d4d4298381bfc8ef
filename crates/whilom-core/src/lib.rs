//! Whilom Core Library
//!
//! Sleep-control engine for the whilom menu bar utility: the sleep state
//! machine and the privileged `pmset` commands that enact it.
//!
//! # Example
//!
//! ```no_run
//! use whilom_core::{CoreResult, OsaScriptRunner, SleepController, SleepState};
//!
//! fn main() -> CoreResult<()> {
//!     let controller = SleepController::new(OsaScriptRunner);
//!
//!     // Block system sleep, then restore it.
//!     controller.apply(SleepState::Disabled)?;
//!     controller.apply(SleepState::Enabled)?;
//!
//!     Ok(())
//! }
//! ```

mod error;
mod power;

pub use {
    error::PowerError,
    error::Result as CoreResult,
    power::{CommandRunner, OsaScriptRunner, PrivilegedCommand, RunOutput, SleepController, SleepState, sleep_command},
};

#[cfg(test)]
mod tests;
