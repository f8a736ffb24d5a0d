#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn init_is_light_in_non_hydrate_tests() {
    assert_eq!(init(&ToggleConfig::default()).unwrap(), ThemeMode::Off);
}

#[test]
fn change_follows_checked_state() {
    let config = ToggleConfig::default();
    assert_eq!(change(&config, true).unwrap(), ThemeMode::On);
    assert_eq!(change(&config, false).unwrap(), ThemeMode::Off);
}

#[test]
fn bind_is_noop_but_callable() {
    assert_eq!(bind(ToggleConfig::default()).unwrap(), ThemeMode::Off);
}

#[test]
fn bind_rejects_invalid_config() {
    let config = ToggleConfig { checkbox_id: String::new(), ..ToggleConfig::default() };
    assert!(matches!(bind(config), Err(ThemeError::InvalidConfig(_))));
}

#[test]
fn init_rejects_invalid_config() {
    let config = ToggleConfig { dark_class: "dark mode".to_owned(), ..ToggleConfig::default() };
    assert!(matches!(init(&config), Err(ThemeError::InvalidConfig(_))));
}

#[test]
fn change_rejects_invalid_config() {
    let config = ToggleConfig { storage_key: " ".to_owned(), ..ToggleConfig::default() };
    assert!(matches!(change(&config, true), Err(ThemeError::InvalidConfig(_))));
}
