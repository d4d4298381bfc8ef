use crate::config::default_appearance_poll_secs;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Appearance tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Seconds between samples of the OS dark/light setting.
    #[serde(default = "default_appearance_poll_secs")]
    pub poll_interval_secs: u64,
}

impl AppearanceConfig {
    /// The poll cadence as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}
