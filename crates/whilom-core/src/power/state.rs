/// Sleep availability states for the host system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepState {
    /// System sleep works normally.
    Enabled,
    /// System sleep is blocked via `pmset disablesleep`.
    Disabled,
}

impl SleepState {
    /// The state a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            SleepState::Enabled => SleepState::Disabled,
            SleepState::Disabled => SleepState::Enabled,
        }
    }

    /// Value passed to `pmset -a disablesleep` to enter this state.
    ///
    /// The flag is inverted relative to the state name: entering `Disabled`
    /// means turning `disablesleep` on.
    pub fn disablesleep_flag(self) -> u8 {
        match self {
            SleepState::Enabled => 0,
            SleepState::Disabled => 1,
        }
    }
}
