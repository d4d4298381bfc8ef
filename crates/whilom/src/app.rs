use crate::{
    AppCommand, AppResult, TrayCommand,
    animation::{self, AnimationDirection},
    config::Config,
    dialog,
};

use std::sync::Arc;

use tao::event_loop::EventLoopProxy;
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{debug, error, info, instrument};
use tray_icon::menu::MenuEvent;
use uuid::Uuid;
use whilom_core::{OsaScriptRunner, SleepController, SleepState};

/// Main application state.
///
/// Runs on the async runtime thread. Communicates tray icon updates
/// back to the main thread via `tray_proxy` because `TrayIcon` is `!Send`
/// and must remain on the UI thread.
pub struct App {
    pub(crate) controller: Arc<SleepController<OsaScriptRunner>>,
    pub(crate) sleep_state: SleepState,
    pub(crate) config: Arc<Mutex<Config>>,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) quit_menu_id: tray_icon::menu::MenuId,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Whilom starting");

        // Tray menu event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when menu_event_rx is dropped (main loop breaks),
        // menu_event_tx.blocking_send() fails, breaking the blocking loop.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                Some(event) = menu_event_rx.recv() => {
                    if let Err(e) = self.handle_menu_event(event).await {
                        error!(error = ?e, "Failed to handle menu event");
                    }
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::ToggleSleep { session_id } => {
                            if let Err(e) = self.toggle_sleep(session_id).await {
                                error!(session_id = %session_id, error = ?e, "Failed to toggle sleep");
                            }
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(menu_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), menu_handle).await {
            Ok(Ok(())) => info!("Menu event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Menu event forwarder task panicked"),
            Err(_) => info!(
                "Menu event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.shutdown_tx.send(true);
        info!("Whilom shut down successfully");

        Ok(())
    }

    /// Toggle the sleep state: run the privileged command, then flip the
    /// state and play the matching animation.
    ///
    /// On command failure the state is left untouched and the failure is
    /// shown in a blocking alert; the next click retries the same target.
    #[instrument(skip(self))]
    async fn toggle_sleep(&mut self, session_id: Uuid) -> AppResult<()> {
        let target = self.sleep_state.toggled();

        let dry_run = {
            let cfg = self.config.lock().await;
            cfg.behaviour.dry_run
        };

        if dry_run {
            debug!(session_id = %session_id, ?target, "Dry run, skipping privileged command");
        } else {
            let controller = Arc::clone(&self.controller);

            // The privileged command blocks on the authorization prompt, so
            // it runs on the blocking pool; the click that follows a
            // dismissed prompt is still a fresh toggle of the same target.
            let applied =
                match tokio::task::spawn_blocking(move || controller.apply(target)).await {
                    Ok(result) => result,
                    Err(e) => {
                        error!(session_id = %session_id, error = ?e, "Toggle task panicked");
                        return Ok(());
                    }
                };

            if let Err(e) = applied {
                error!(session_id = %session_id, error = %e, "Privileged command failed");
                dialog::show_error(e.user_message().to_string()).await;
                return Ok(());
            }
        }

        self.sleep_state = target;

        let _ = self.tray_proxy.send_event(TrayCommand::SetTooltip(target));
        let _ = animation::play(
            self.tray_proxy.clone(),
            AnimationDirection::for_target(target),
        );

        info!(session_id = %session_id, state = ?target, "Sleep toggled");

        Ok(())
    }

    /// Handle tray menu events.
    #[instrument(skip(self))]
    async fn handle_menu_event(&mut self, event: MenuEvent) -> AppResult<()> {
        let event_id = &event.id;

        if *event_id == self.quit_menu_id {
            info!("Quit requested from tray menu");
            let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
            if let Err(e) = self.command_tx.send(AppCommand::Shutdown).await {
                error!(error = ?e, "Failed to send shutdown command");
            }
        }

        Ok(())
    }
}
