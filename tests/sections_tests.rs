// Host-side tests for the scroll-spy policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sections {
    include!("../src/core/sections.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::{PAST_SCROLL_PX, SECTION_ACTIVATION_PX};
use sections::*;

fn registry() -> SectionRegistry {
    SectionRegistry::new(vec![
        ("home".into(), "Home".into()),
        ("about".into(), "About".into()),
        ("skills".into(), "Skills".into()),
        ("projects".into(), "Projects".into()),
    ])
}

/// Viewport-relative tops for sections at the given absolute offsets, seen
/// from a page scrolled to `scroll_y`.
fn tops(boundaries: &[f64], scroll_y: f64) -> Vec<f64> {
    boundaries.iter().map(|b| b - scroll_y).collect()
}

const BOUNDARIES: [f64; 4] = [0.0, 800.0, 1600.0, 2400.0];

#[test]
fn scenario_from_known_layout() {
    let reg = registry();

    let at_850 = active_index(&tops(&BOUNDARIES, 850.0), SECTION_ACTIVATION_PX);
    assert_eq!(reg.id_at(at_850), Some("about"));

    let at_50 = active_index(&tops(&BOUNDARIES, 50.0), SECTION_ACTIVATION_PX);
    assert_eq!(reg.id_at(at_50), Some("home"));

    let at_2450 = active_index(&tops(&BOUNDARIES, 2450.0), SECTION_ACTIVATION_PX);
    assert_eq!(reg.id_at(at_2450), Some("projects"));
}

#[test]
fn scrolling_down_never_moves_active_backwards() {
    let mut last = 0;
    let mut y = 0.0;
    while y <= 3000.0 {
        let idx = active_index(&tops(&BOUNDARIES, y), SECTION_ACTIVATION_PX);
        assert!(
            idx >= last,
            "active order went from {} to {} at scroll {}",
            last,
            idx,
            y
        );
        last = idx;
        y += 37.0; // deliberately not aligned with the boundaries
    }
}

#[test]
fn defaults_to_first_section_when_none_qualify() {
    // Every top below the activation line (page scrolled above all content)
    let idx = active_index(&[300.0, 900.0, 1500.0], SECTION_ACTIVATION_PX);
    assert_eq!(idx, 0);

    // Degenerate: no sections at all
    assert_eq!(active_index(&[], SECTION_ACTIVATION_PX), 0);
}

#[test]
fn activation_line_is_inclusive() {
    // A section exactly on the line counts as entered
    let idx = active_index(&[-400.0, SECTION_ACTIVATION_PX], SECTION_ACTIVATION_PX);
    assert_eq!(idx, 1);
}

#[test]
fn past_threshold_is_strict() {
    assert!(!past_threshold(0.0, PAST_SCROLL_PX));
    assert!(!past_threshold(PAST_SCROLL_PX, PAST_SCROLL_PX));
    assert!(past_threshold(PAST_SCROLL_PX + 1.0, PAST_SCROLL_PX));
}

#[test]
fn unknown_id_resolves_to_none() {
    let reg = registry();
    assert_eq!(reg.order_of("nonexistent"), None);
    assert_eq!(reg.order_of("about"), Some(1));
}

#[test]
fn duplicate_ids_keep_first_registration_and_alignment() {
    let reg = SectionRegistry::new(vec![
        ("home".into(), "Home".into()),
        ("home".into(), "Home again".into()),
        ("about".into(), "About".into()),
    ]);
    // Every entry keeps its slot so tops stay aligned with the element list
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.order_of("home"), Some(0));
    assert_eq!(reg.order_of("about"), Some(2));
}

#[test]
fn registry_lookup_round_trips() {
    let reg = registry();
    assert_eq!(reg.len(), 4);
    assert!(!reg.is_empty());
    for order in 0..reg.len() {
        let id = reg.id_at(order).unwrap();
        assert_eq!(reg.order_of(id), Some(order));
        assert_eq!(reg.get(order).unwrap().order, order);
    }
    assert_eq!(reg.id_at(4), None);
}
