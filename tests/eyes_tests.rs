// Host-side tests for the pure eye-orientation math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod eyes {
    include!("../src/core/eyes.rs");
}

use eyes::*;
use glam::Vec2;

#[test]
fn rotation_is_always_normalized() {
    let center = Vec2::new(640.0, 360.0);
    // Sweep pointer positions across and beyond the viewport
    for x in (-200..=1600).step_by(80) {
        for y in (-200..=1000).step_by(80) {
            let deg = rotation_deg(Vec2::new(x as f32, y as f32), center);
            assert!(
                (0.0..360.0).contains(&deg),
                "angle {} out of range for pointer ({}, {})",
                deg,
                x,
                y
            );
        }
    }
}

#[test]
fn rotation_cardinal_directions() {
    let center = Vec2::new(100.0, 100.0);

    // Pointer straight above the eye is the zero pose
    let above = rotation_deg(Vec2::new(100.0, 0.0), center);
    assert!(above.abs() < 1e-3);

    // Straight below is the opposite pose
    let below = rotation_deg(Vec2::new(100.0, 200.0), center);
    assert!((below - 180.0).abs() < 1e-3);

    // To the right is a quarter turn
    let right = rotation_deg(Vec2::new(200.0, 100.0), center);
    assert!((right - 90.0).abs() < 1e-3);

    // To the left is three quarters
    let left = rotation_deg(Vec2::new(0.0, 100.0), center);
    assert!((left - 270.0).abs() < 1e-3);
}

#[test]
fn rotation_pointer_on_center_is_finite() {
    let center = Vec2::new(50.0, 50.0);
    let deg = rotation_deg(center, center);
    assert!(deg.is_finite());
    assert!((0.0..360.0).contains(&deg));
}

#[test]
fn translate_stays_inside_clamp_for_any_pointer() {
    let config = EyeConfig::translate();
    let viewport = Vec2::new(1280.0, 720.0);
    // Including pointer positions far outside the viewport
    for x in (-500..=2500).step_by(100) {
        for y in (-500..=2000).step_by(100) {
            let offset = translate_offset(Vec2::new(x as f32, y as f32), viewport, &config);
            assert!(
                offset.x >= -config.clamp.x && offset.x <= config.clamp.x,
                "x offset {} escapes clamp for pointer ({}, {})",
                offset.x,
                x,
                y
            );
            assert!(
                offset.y >= -config.clamp.y && offset.y <= config.clamp.y,
                "y offset {} escapes clamp for pointer ({}, {})",
                offset.y,
                x,
                y
            );
        }
    }
}

#[test]
fn translate_maps_viewport_extremes() {
    let config = EyeConfig::translate();
    let viewport = Vec2::new(1280.0, 720.0);

    // Top-left corner lands on the offset start, clamped
    let top_left = translate_offset(Vec2::ZERO, viewport, &config);
    assert!((top_left.x - (-8.0)).abs() < 1e-3);
    assert!((top_left.y - (-6.0)).abs() < 1e-3); // -8 clamped to -6

    // Bottom-right corner lands on start + range, clamped
    let bottom_right = translate_offset(viewport, viewport, &config);
    assert!((bottom_right.x - 8.0).abs() < 1e-3);
    assert!((bottom_right.y - 4.0).abs() < 1e-3); // -8 + 12, inside the clamp

    // Viewport center maps to the middle of the travel
    let center = translate_offset(viewport * 0.5, viewport, &config);
    assert!((center.x - 0.0).abs() < 1e-3);
    assert!((center.y - (-2.0)).abs() < 1e-3);
}

#[test]
fn translate_degenerate_viewport_is_safe() {
    let config = EyeConfig::translate();
    let offset = translate_offset(Vec2::new(10.0, 10.0), Vec2::ZERO, &config);
    assert!(offset.x.is_finite() && offset.y.is_finite());
    assert!(offset.x.abs() <= config.clamp.x);
    assert!(offset.y.abs() <= config.clamp.y);
}

#[test]
fn widgets_with_different_configs_compute_independently() {
    let viewport = Vec2::new(1000.0, 1000.0);
    let pointer = Vec2::new(1000.0, 1000.0);

    let wide = EyeConfig {
        clamp: Vec2::new(20.0, 20.0),
        ..EyeConfig::translate()
    };
    let narrow = EyeConfig {
        clamp: Vec2::new(2.0, 2.0),
        ..EyeConfig::translate()
    };

    let wide_offset = translate_offset(pointer, viewport, &wide);
    let narrow_offset = translate_offset(pointer, viewport, &narrow);

    // Same pointer source, per-widget clamp policy
    assert!((wide_offset.x - 8.0).abs() < 1e-3);
    assert!((narrow_offset.x - 2.0).abs() < 1e-3);
    assert!((narrow_offset.y - 2.0).abs() < 1e-3);
}
