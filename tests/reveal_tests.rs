// Host-side tests for the one-shot reveal gate and stagger timing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn gate_fires_exactly_once() {
    let mut gate = RevealGate::default();
    assert!(!gate.has_played());
    assert!(gate.fire());
    assert!(gate.has_played());

    // Re-entry, duplicate callbacks, anything: never again
    for _ in 0..10 {
        assert!(!gate.fire());
    }
    assert!(gate.has_played());
}

#[test]
fn stagger_spreads_delays_in_registration_order() {
    let timing = RevealTiming {
        duration_secs: 0.5,
        delay_secs: 0.2,
        stagger_secs: 0.1,
    };
    assert!((timing.delay_for(0) - 0.2).abs() < 1e-6);
    assert!((timing.delay_for(1) - 0.3).abs() < 1e-6);
    assert!((timing.delay_for(4) - 0.6).abs() < 1e-6);

    // Later siblings never start earlier
    for i in 1..16 {
        assert!(timing.delay_for(i) >= timing.delay_for(i - 1));
    }
}

#[test]
fn uniform_timing_has_no_delay_or_stagger() {
    let timing = RevealTiming::uniform(0.6);
    assert!((timing.duration_secs - 0.6).abs() < 1e-6);
    assert!(timing.delay_for(0).abs() < 1e-6);
    assert!(timing.delay_for(7).abs() < 1e-6);
}
