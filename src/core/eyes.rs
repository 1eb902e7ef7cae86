use glam::Vec2;

// Canonical pupil travel for translate-mode widgets. The offset range maps
// the viewport fraction onto [start, start + range]; the clamp is a hard
// rectangular bound applied after the mapping.
pub const PUPIL_OFFSET_START: Vec2 = Vec2::new(-8.0, -8.0);
pub const PUPIL_OFFSET_RANGE: Vec2 = Vec2::new(16.0, 12.0);
pub const PUPIL_CLAMP: Vec2 = Vec2::new(8.0, 6.0);

// Rotation offset so a pointer directly below the eye reads as the resting
// pose (pupil pointing down) rather than 180 degrees away from it.
pub const ROTATE_REST_OFFSET_DEG: f32 = 180.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationStrategy {
    /// Rotate the pupil about the eye center toward the pointer.
    Rotate,
    /// Slide the pupil by a viewport-fraction-derived 2D offset.
    Translate,
}

/// Per-widget orientation configuration. Widgets share one pointer source
/// but each computes independently against its own config.
#[derive(Clone, Copy, Debug)]
pub struct EyeConfig {
    pub strategy: OrientationStrategy,
    pub offset_start: Vec2,
    pub offset_range: Vec2,
    pub clamp: Vec2,
}

impl EyeConfig {
    pub fn rotate() -> Self {
        Self {
            strategy: OrientationStrategy::Rotate,
            ..Self::translate()
        }
    }

    pub fn translate() -> Self {
        Self {
            strategy: OrientationStrategy::Translate,
            offset_start: PUPIL_OFFSET_START,
            offset_range: PUPIL_OFFSET_RANGE,
            clamp: PUPIL_CLAMP,
        }
    }
}

/// Pupil rotation in degrees for a pointer at `pointer` and an eye centered
/// at `center`. Always in `[0, 360)`.
#[inline]
pub fn rotation_deg(pointer: Vec2, center: Vec2) -> f32 {
    let rad = (pointer.x - center.x).atan2(pointer.y - center.y);
    (-rad.to_degrees() + ROTATE_REST_OFFSET_DEG).rem_euclid(360.0)
}

/// Pupil offset in pixels for a pointer at `pointer` within a viewport of
/// size `viewport`. The result is always inside the config's clamp bounds.
#[inline]
pub fn translate_offset(pointer: Vec2, viewport: Vec2, config: &EyeConfig) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    let frac = Vec2::new(
        (pointer.x / w).clamp(0.0, 1.0),
        (pointer.y / h).clamp(0.0, 1.0),
    );
    let raw = config.offset_start + frac * config.offset_range;
    raw.clamp(-config.clamp, config.clamp)
}
