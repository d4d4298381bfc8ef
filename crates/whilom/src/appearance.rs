//! Dark/light appearance tracking and icon recoloring.
//!
//! The bundled icons are drawn for the light menu bar; in dark appearance
//! every frame is shown color-inverted. macOS exposes no appearance-change
//! callback to this tray stack, so the global setting is sampled on a timer
//! and a re-render is posted when it flips.

use crate::TrayCommand;

use std::time::Duration;

use tao::event_loop::EventLoopProxy;
use tokio::sync::watch;
use tracing::{info, instrument};

/// Menu bar appearance variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Default appearance; icons are drawn as bundled.
    Light,
    /// Dark appearance; icons are drawn color-inverted.
    Dark,
}

impl Appearance {
    /// Interpret the result of `defaults read -g AppleInterfaceStyle`.
    ///
    /// The global default only exists while dark mode is active, so a failed
    /// read means light.
    pub(crate) fn from_defaults_read(success: bool, stdout: &str) -> Self {
        if success && stdout.trim().eq_ignore_ascii_case("dark") {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }
}

/// Sample the current OS appearance.
///
/// Blocks on a `defaults` read; call from the blocking pool when on the
/// async runtime.
#[cfg(target_os = "macos")]
pub fn detect() -> Appearance {
    use std::process::Command;

    match Command::new("/usr/bin/defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => Appearance::from_defaults_read(
            output.status.success(),
            &String::from_utf8_lossy(&output.stdout),
        ),
        Err(_) => Appearance::Light,
    }
}

/// Sample the current OS appearance.
#[cfg(not(target_os = "macos"))]
pub fn detect() -> Appearance {
    Appearance::Light
}

/// Invert RGB channels in place, preserving alpha.
pub(crate) fn invert_rgba(image: &mut image::RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }
}

/// Polls the OS appearance and posts a re-render when it changes.
pub struct AppearanceWatcher {
    tray_proxy: EventLoopProxy<TrayCommand>,
    poll_interval: Duration,
    initial: Appearance,
}

impl AppearanceWatcher {
    /// Create a watcher posting to the given UI-thread proxy.
    ///
    /// `initial` is the appearance the tray was built with, so the first
    /// tick only posts on an actual change.
    pub fn new(
        tray_proxy: EventLoopProxy<TrayCommand>,
        poll_interval: Duration,
        initial: Appearance,
    ) -> Self {
        Self {
            tray_proxy,
            poll_interval,
            initial,
        }
    }

    /// Run the polling loop until a shutdown signal is received.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> crate::AppResult<()> {
        let mut current = self.initial;
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Appearance watcher shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    let sampled = tokio::task::spawn_blocking(detect)
                        .await
                        .unwrap_or(current);

                    if sampled != current {
                        info!(from = ?current, to = ?sampled, "Appearance changed");
                        current = sampled;
                        let _ = self.tray_proxy.send_event(TrayCommand::SetAppearance(sampled));
                    }
                }
            }
        }

        Ok(())
    }
}
