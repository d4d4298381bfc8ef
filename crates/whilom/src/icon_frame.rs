use whilom_core::SleepState;

/// Icon animation frames corresponding to the four bundled assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFrame {
    /// Resting frame while sleep is enabled.
    Off,
    /// First wake-up frame.
    Wake1,
    /// Second wake-up frame.
    Wake2,
    /// Resting frame while sleep is disabled.
    Wake3,
}

impl IconFrame {
    /// The resting frame shown once a sleep state has settled.
    pub fn terminal_for(state: SleepState) -> Self {
        match state {
            SleepState::Enabled => IconFrame::Off,
            SleepState::Disabled => IconFrame::Wake3,
        }
    }
}
