//! Status item click dispatch.
//!
//! Forwards tray click events from the UI library's channel and maps
//! left-click releases to toggle commands. Right clicks are not handled
//! here: the context menu is attached to the status item and shown by the
//! OS integration itself.

use crate::{AppCommand, AppError, AppResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};
use uuid::Uuid;

/// Click handler feeding toggle commands to the main application.
///
/// Deliberately stateless: the sleep state lives in [`crate::App`] and flips
/// only after the privileged command succeeds, so a failed toggle leaves the
/// next click targeting the same state.
pub struct ClickHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ClickHandler {
    /// Create a handler sending on the given command channel.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Run the click dispatch loop.
    ///
    /// This method blocks until a shutdown signal is received.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = TrayIconEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // Single persistent blocking task that forwards tray click events.
        // TrayIconEvent::receiver() returns a crossbeam_channel::Receiver
        // which has blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when event_rx is dropped (loop breaks), the next
        // event_tx.blocking_send() fails, breaking the blocking loop.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Click handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    // Toggle fires on mouse-up only; Down events and hover
                    // events (enter/move/leave) are ignored.
                    if let TrayIconEvent::Click {
                        button: MouseButton::Left,
                        button_state: MouseButtonState::Up,
                        ..
                    } = event
                    {
                        self.handle_left_click().await?;
                    }
                }
            }
        }

        // Drop event_rx to unblock the blocking task's next blocking_send().
        drop(event_rx);

        // Best-effort join: the blocking task may be stuck in recv() if no
        // click arrives after shutdown. Use a timeout to avoid hanging.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Click event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Click event forwarder task panicked"),
            Err(_) => debug!(
                "Click event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn handle_left_click(&self) -> AppResult<()> {
        let session_id = Uuid::new_v4();

        self.command_tx
            .send(AppCommand::ToggleSleep { session_id })
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send ToggleSleep: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(session_id = %session_id, "Left click dispatched");

        Ok(())
    }
}
