use super::*;

// =============================================================
// Stored value interpretation
// =============================================================

#[test]
fn from_stored_on_is_dark() {
    assert_eq!(ThemeMode::from_stored(Some("on")), ThemeMode::On);
}

#[test]
fn from_stored_absent_is_light() {
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::Off);
}

#[test]
fn from_stored_other_values_are_light() {
    for raw in ["off", "", "ON", "true", " on", "1"] {
        assert_eq!(ThemeMode::from_stored(Some(raw)), ThemeMode::Off, "raw={raw:?}");
    }
}

#[test]
fn as_str_matches_storage_values() {
    assert_eq!(ThemeMode::On.as_str(), "on");
    assert_eq!(ThemeMode::Off.as_str(), "off");
    assert_eq!(ThemeMode::On.to_string(), "on");
}

#[test]
fn default_is_off() {
    assert_eq!(ThemeMode::default(), ThemeMode::Off);
}

// =============================================================
// Conversions
// =============================================================

#[test]
fn from_bool_follows_checked_state() {
    assert_eq!(ThemeMode::from(true), ThemeMode::On);
    assert_eq!(ThemeMode::from(false), ThemeMode::Off);
}

#[test]
fn from_str_is_strict() {
    assert_eq!("on".parse::<ThemeMode>().unwrap(), ThemeMode::On);
    assert_eq!("off".parse::<ThemeMode>().unwrap(), ThemeMode::Off);
    let err = "dark".parse::<ThemeMode>().unwrap_err();
    assert!(matches!(err, ThemeError::InvalidMode(ref v) if v == "dark"));
}

#[test]
fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&ThemeMode::On).unwrap(), "\"on\"");
    let mode: ThemeMode = serde_json::from_str("\"off\"").unwrap();
    assert_eq!(mode, ThemeMode::Off);
}

// =============================================================
// apply_preference
// =============================================================

#[test]
fn apply_preference_on_checks_and_marks() {
    let state = apply_preference(ThemeMode::On);
    assert!(state.control_checked);
    assert!(state.class_present);
}

#[test]
fn apply_preference_off_clears_both() {
    assert_eq!(apply_preference(ThemeMode::Off), ThemeState::default());
}
