mod command;
mod controller;
mod state;

pub use {
    command::{PrivilegedCommand, sleep_command},
    controller::{CommandRunner, OsaScriptRunner, RunOutput, SleepController},
    state::SleepState,
};
