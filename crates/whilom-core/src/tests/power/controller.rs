use crate::{
    CommandRunner, PowerError, PrivilegedCommand, RunOutput, SleepController, SleepState,
    error::Result,
};

use std::{cell::RefCell, rc::Rc};

/// Runner that records the commands it was asked to run and returns a
/// scripted outcome.
struct ScriptedRunner {
    success: bool,
    stderr: String,
    seen: Rc<RefCell<Vec<PrivilegedCommand>>>,
}

impl ScriptedRunner {
    fn new(success: bool, stderr: &str) -> (Self, Rc<RefCell<Vec<PrivilegedCommand>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let runner = Self {
            success,
            stderr: stderr.to_string(),
            seen: Rc::clone(&seen),
        };
        (runner, seen)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &PrivilegedCommand) -> Result<RunOutput> {
        self.seen.borrow_mut().push(command.clone());
        Ok(RunOutput {
            success: self.success,
            stderr: self.stderr.clone(),
        })
    }
}

/// WHAT: A successful run applies the target state without error
/// WHY: The happy path must run exactly one privileged command
#[test]
fn given_succeeding_runner_when_applying_then_one_command_runs() {
    // Given: A controller over a runner that always succeeds
    let (runner, seen) = ScriptedRunner::new(true, "");
    let controller = SleepController::new(runner);

    // When: Applying the Disabled state
    let result = controller.apply(SleepState::Disabled);

    // Then: Success, and exactly the disablesleep 1 command ran
    assert!(result.is_ok());
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].shell_command(), Some("sudo pmset -a disablesleep 1"));
}

/// WHAT: A non-zero exit surfaces CommandFailed with the stderr text
/// WHY: The alert dialog shows this message to the user
#[test]
fn given_failing_runner_when_applying_then_command_failed_with_stderr() {
    // Given: A runner whose command exits non-zero with a message
    let (runner, _seen) = ScriptedRunner::new(false, "User canceled.");
    let controller = SleepController::new(runner);

    // When: Applying a state change
    let result = controller.apply(SleepState::Enabled);

    // Then: The stderr text is carried in the error
    assert!(matches!(
        &result,
        Err(PowerError::CommandFailed { message, .. }) if message == "User canceled."
    ));
}

/// WHAT: A failure with empty stderr still produces a usable message
/// WHY: The alert must never be blank
#[test]
fn given_silent_failure_when_applying_then_fallback_message() {
    let (runner, _seen) = ScriptedRunner::new(false, "");
    let controller = SleepController::new(runner);

    let result = controller.apply(SleepState::Disabled);

    assert!(matches!(
        &result,
        Err(PowerError::CommandFailed { message, .. }) if !message.is_empty()
    ));
}
