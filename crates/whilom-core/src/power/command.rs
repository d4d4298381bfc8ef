//! Construction of the privileged `pmset` command lines.
//!
//! Toggling `disablesleep` requires root. The shell command is wrapped in an
//! AppleScript `do shell script … with administrator privileges` so macOS
//! presents its own authorization prompt rather than the process carrying
//! elevated rights itself.

use crate::power::SleepState;

/// Interpreter invoked to run the privileged shell command.
pub const OSASCRIPT: &str = "/usr/bin/osascript";

/// A fully-formed privileged command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegedCommand {
    /// Executable to spawn.
    pub program: &'static str,
    /// Arguments passed to the executable.
    pub args: Vec<String>,
}

impl PrivilegedCommand {
    /// The shell command embedded in the AppleScript wrapper.
    ///
    /// Useful for logging the effective command without the quoting noise.
    pub fn shell_command(&self) -> Option<&str> {
        let script = self.args.last()?;
        let start = script.find('"')? + 1;
        let end = script.rfind('"')?;
        script.get(start..end)
    }
}

/// Build the privileged command that moves the system into `target`.
pub fn sleep_command(target: SleepState) -> PrivilegedCommand {
    let script = format!(
        "do shell script \"sudo pmset -a disablesleep {}\" with administrator privileges",
        target.disablesleep_flag()
    );

    PrivilegedCommand {
        program: OSASCRIPT,
        args: vec!["-e".to_string(), script],
    }
}
