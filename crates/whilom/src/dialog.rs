//! Blocking modal alert for privileged command failures.

/// Title shown on the failure alert.
const ALERT_TITLE: &str = "whilom";

/// Escape a string for inclusion in a double-quoted AppleScript literal.
pub(crate) fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The AppleScript source for a critical alert with the given message.
pub(crate) fn alert_script(message: &str) -> String {
    format!(
        "display alert \"{}\" message \"{}\" as critical",
        applescript_escape(ALERT_TITLE),
        applescript_escape(message)
    )
}

/// Show a blocking modal alert with the given message.
///
/// Uses `osascript`'s `display alert`, matching the system dialog the
/// authorization prompt itself uses. Returns once the user dismisses it; the
/// wait happens on the blocking pool.
#[cfg(target_os = "macos")]
pub(crate) async fn show_error(message: String) {
    use tracing::warn;

    let script = alert_script(&message);

    let result = tokio::task::spawn_blocking(move || {
        std::process::Command::new("/usr/bin/osascript")
            .args(["-e", &script])
            .status()
    })
    .await;

    match result {
        Ok(Ok(status)) if status.success() => {}
        Ok(Ok(status)) => warn!(%status, "Alert dialog exited with failure"),
        Ok(Err(e)) => warn!(error = ?e, "Failed to show alert dialog"),
        Err(e) => warn!(error = ?e, "Alert dialog task panicked"),
    }
}

/// Show a blocking modal alert with the given message.
///
/// No dialog surface off macOS; the failure is only logged.
#[cfg(not(target_os = "macos"))]
pub(crate) async fn show_error(message: String) {
    tracing::error!(message = %message, "Privileged command failed");
}
