//! Whilom: menu bar toggle for macOS system sleep.

mod animation;
mod app;
mod app_command;
mod appearance;
mod click_handler;
mod config;
mod dialog;
mod error;
mod icon_frame;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    appearance::{Appearance, AppearanceWatcher},
    click_handler::ClickHandler,
    error::{AppError, Result as AppResult},
    icon_frame::IconFrame,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::sync::Arc;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::{Mutex, mpsc, watch};
use tracing::error;
use whilom_core::{OsaScriptRunner, SleepController, SleepState};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("whilom=debug")
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    let initial_appearance = appearance::detect();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(initial_appearance) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetFrame(frame) => {
                        if let Err(e) = tray_manager.set_frame(frame) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                    TrayCommand::SetAppearance(appearance) => {
                        if let Err(e) = tray_manager.set_appearance(appearance) {
                            error!(error = ?e, "Failed to recolor tray icon");
                        }
                    }
                    TrayCommand::SetTooltip(state) => {
                        if let Err(e) = tray_manager.set_tooltip(state) {
                            error!(error = ?e, "Failed to update tooltip");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let controller = Arc::new(SleepController::new(OsaScriptRunner));

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let poll_interval = config.appearance.poll_interval();
                let config = Arc::new(Mutex::new(config));
                let (command_tx, command_rx) = mpsc::channel(32);
                let (shutdown_tx, shutdown_rx) = watch::channel(false);

                let tray_proxy = tray_proxy.clone();
                let quit_menu_id = tray_manager.quit_item_id().clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let click_handler = ClickHandler::new(command_tx.clone());
                        let appearance_watcher = AppearanceWatcher::new(
                            tray_proxy.clone(),
                            poll_interval,
                            initial_appearance,
                        );

                        let app = App {
                            controller,
                            sleep_state: SleepState::Enabled,
                            config,
                            tray_proxy,
                            command_tx,
                            command_rx,
                            shutdown_tx,
                            quit_menu_id,
                        };

                        tokio::join!(
                            async {
                                if let Err(e) = click_handler.run(shutdown_rx.clone()).await {
                                    error!(error = ?e, "Click handler error");
                                }
                            },
                            async {
                                if let Err(e) = appearance_watcher.run(shutdown_rx.clone()).await {
                                    error!(error = ?e, "Appearance watcher error");
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }
    });
}
