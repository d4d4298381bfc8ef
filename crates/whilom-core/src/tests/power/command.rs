use crate::{SleepState, sleep_command};

/// WHAT: Disabling sleep builds the disablesleep 1 command
/// WHY: The exact pmset line is the contract with the OS
#[test]
fn given_disabled_target_when_building_command_then_disablesleep_one() {
    // Given / When: The command for blocking sleep
    let command = sleep_command(SleepState::Disabled);

    // Then: osascript wraps the pmset line with the privilege clause
    assert!(command.program.ends_with("osascript"));
    assert_eq!(command.args[0], "-e");
    assert_eq!(
        command.args[1],
        "do shell script \"sudo pmset -a disablesleep 1\" with administrator privileges"
    );
}

/// WHAT: Enabling sleep builds the disablesleep 0 command
/// WHY: Restoring sleep must clear the flag, not re-set it
#[test]
fn given_enabled_target_when_building_command_then_disablesleep_zero() {
    let command = sleep_command(SleepState::Enabled);

    assert_eq!(
        command.args[1],
        "do shell script \"sudo pmset -a disablesleep 0\" with administrator privileges"
    );
}

/// WHAT: shell_command extracts the embedded pmset line
/// WHY: Logs should show the effective command without AppleScript quoting
#[test]
fn given_built_command_when_extracting_shell_line_then_bare_pmset() {
    let command = sleep_command(SleepState::Disabled);

    assert_eq!(
        command.shell_command(),
        Some("sudo pmset -a disablesleep 1")
    );
}
