use crate::config::Config;

use std::time::Duration;

/// WHAT: Empty sections parse with the documented defaults
/// WHY: A hand-trimmed config file must not break startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_sections_when_parsing_then_defaults_apply() {
    // Given: A config file with bare section headers
    let contents = "[behaviour]\n[appearance]\n";

    // When: Parsing it
    let config: Config = toml::from_str(contents).unwrap();

    // Then: Defaults fill in both sections
    assert!(!config.behaviour.dry_run);
    assert_eq!(config.appearance.poll_interval_secs, 2);
}

/// WHAT: Explicit values override the defaults
/// WHY: The config file is the only tuning surface
#[test]
#[allow(clippy::unwrap_used)]
fn given_explicit_values_when_parsing_then_overrides_apply() {
    let contents = "[behaviour]\ndry_run = true\n[appearance]\npoll_interval_secs = 10\n";

    let config: Config = toml::from_str(contents).unwrap();

    assert!(config.behaviour.dry_run);
    assert_eq!(config.appearance.poll_interval(), Duration::from_secs(10));
}

/// WHAT: A zero poll interval is clamped to one second
/// WHY: tokio::time::interval panics on a zero period
#[test]
#[allow(clippy::unwrap_used)]
fn given_zero_poll_interval_when_converted_then_clamped_to_one_second() {
    let contents = "[behaviour]\n[appearance]\npoll_interval_secs = 0\n";

    let config: Config = toml::from_str(contents).unwrap();

    assert_eq!(config.appearance.poll_interval(), Duration::from_secs(1));
}

/// WHAT: A saved config round-trips through TOML unchanged
/// WHY: Save-then-load must not drift settings
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_when_serialized_and_reparsed_then_identical_values() {
    let contents = "[behaviour]\ndry_run = true\n[appearance]\npoll_interval_secs = 7\n";
    let config: Config = toml::from_str(contents).unwrap();

    let serialized = toml::to_string_pretty(&config).unwrap();
    let reparsed: Config = toml::from_str(&serialized).unwrap();

    assert_eq!(reparsed.behaviour.dry_run, config.behaviour.dry_run);
    assert_eq!(
        reparsed.appearance.poll_interval_secs,
        config.appearance.poll_interval_secs
    );
}
