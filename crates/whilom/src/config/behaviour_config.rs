use crate::config::default_dry_run;

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Skip the privileged command while keeping the toggle and animation.
    ///
    /// Debug facility: the UI behaves normally but the system's sleep
    /// setting is never touched.
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,
}
