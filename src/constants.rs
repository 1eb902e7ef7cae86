/// Interaction and reveal tuning constants.
///
/// These express intended behavior (storage keys, timings, transition
/// parameters) and keep magic numbers out of the wiring code.
// Persisted preference keys
pub const THEME_STORAGE_KEY: &str = "theme";
pub const AUDIO_STORAGE_KEY: &str = "audioEnabled";

// Ambient audio
pub const AMBIENT_VOLUME: f64 = 0.5;

// Loading overlay dwell before the page is revealed (ms)
pub const LOADING_DISMISS_MS: i32 = 2500;

// Navbar entrance (plays immediately at mount)
pub const NAVBAR_ENTER_SECS: f32 = 0.6;
pub const NAVBAR_SHIFT_PX: f32 = -20.0;

// Hero entrance (plays immediately at mount)
pub const HERO_ENTER_SECS: f32 = 0.8;
pub const HERO_ENTER_DELAY_SECS: f32 = 0.2;
pub const HERO_SHIFT_PX: f32 = 30.0;

// Below-fold section reveals
pub const SECTION_REVEAL_SECS: f32 = 0.6;
pub const SECTION_SHIFT_PX: f32 = 20.0;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.15;

// Project card reveal, staggered across siblings
pub const CARD_REVEAL_SECS: f32 = 0.5;
pub const CARD_SHIFT_PX: f32 = 30.0;
pub const CARD_STAGGER_SECS: f32 = 0.1;
pub const CARD_REVEAL_THRESHOLD: f64 = 0.3;

// Tech-stack icon reveal, staggered, scale-in instead of slide
pub const TECH_REVEAL_SECS: f32 = 0.4;
pub const TECH_ENTRY_SCALE: f32 = 0.8;
pub const TECH_STAGGER_SECS: f32 = 0.05;
pub const TECH_REVEAL_THRESHOLD: f64 = 0.25;
