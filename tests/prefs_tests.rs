// Host-side tests for preference state and the audio start machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/prefs.rs"]
mod prefs;

use prefs::*;

#[test]
fn theme_string_round_trip() {
    assert_eq!(Theme::from_str("light"), Some(Theme::Light));
    assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_str(""), None);
    assert_eq!(Theme::from_str("DARK"), None);
    assert_eq!(Theme::from_str("solarized"), None);

    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_toggle_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn defaults_are_dark_and_silent() {
    let state = PreferenceState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.audio_enabled);
}

#[test]
fn start_confirms_only_on_started() {
    let mut machine = AudioMachine::default();
    let token = machine.begin_start();
    // Optimistically pending, not yet confirmed
    assert!(machine.is_pending());
    assert!(!machine.is_on());

    assert_eq!(machine.resolve_start(token, AudioStart::Started), Some(true));
    assert!(machine.is_on());
    assert!(!machine.is_pending());
}

#[test]
fn denied_start_rolls_back_to_off() {
    let mut machine = AudioMachine::default();
    let token = machine.begin_start();
    assert_eq!(machine.resolve_start(token, AudioStart::Denied), Some(false));
    assert!(!machine.is_on());
    assert!(!machine.is_pending());
}

#[test]
fn toggle_off_wins_when_outcome_arrives_late() {
    // on ... off ... Started resolution
    let mut machine = AudioMachine::default();
    let token = machine.begin_start();
    machine.stop();
    assert_eq!(machine.resolve_start(token, AudioStart::Started), None);
    assert!(!machine.is_on());
}

#[test]
fn toggle_off_wins_when_outcome_arrives_early() {
    // on ... Started resolution ... off
    let mut machine = AudioMachine::default();
    let token = machine.begin_start();
    assert_eq!(machine.resolve_start(token, AudioStart::Started), Some(true));
    machine.stop();
    assert!(!machine.is_on());
    // A second delivery of the old outcome is ignored too
    assert_eq!(machine.resolve_start(token, AudioStart::Started), None);
}

#[test]
fn superseded_request_cannot_resolve() {
    let mut machine = AudioMachine::default();
    let stale = machine.begin_start();
    let current = machine.begin_start();

    assert_eq!(machine.resolve_start(stale, AudioStart::Started), None);
    assert!(!machine.is_on());

    assert_eq!(
        machine.resolve_start(current, AudioStart::Started),
        Some(true)
    );
    assert!(machine.is_on());
}

#[test]
fn stop_is_idempotent() {
    let mut machine = AudioMachine::default();
    machine.stop();
    machine.stop();
    assert!(!machine.is_on());
    assert!(!machine.is_pending());
}
