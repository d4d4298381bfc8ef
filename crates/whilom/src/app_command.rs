use uuid::Uuid;

/// Commands sent from the click handler to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Toggle the system sleep state.
    ToggleSleep {
        /// Unique id for this toggle, for log correlation.
        session_id: Uuid,
    },
    /// Request application shutdown.
    Shutdown,
}
