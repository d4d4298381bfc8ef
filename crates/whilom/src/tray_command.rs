use crate::{Appearance, IconFrame};

use whilom_core::SleepState;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone, Copy)]
pub enum TrayCommand {
    /// Swap the status icon to an animation frame.
    SetFrame(IconFrame),
    /// Re-render the current frame after a dark/light change.
    SetAppearance(Appearance),
    /// Update the tooltip for a settled sleep state.
    SetTooltip(SleepState),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
