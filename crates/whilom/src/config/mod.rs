mod appearance_config;
mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {
    appearance_config::AppearanceConfig, behaviour_config::BehaviourConfig, config::Config,
};

pub(crate) const DEFAULT_DRY_RUN: bool = false;
pub(crate) const DEFAULT_APPEARANCE_POLL_SECS: u64 = 2;

pub(crate) fn default_dry_run() -> bool {
    DEFAULT_DRY_RUN
}

pub(crate) fn default_appearance_poll_secs() -> u64 {
    DEFAULT_APPEARANCE_POLL_SECS
}
