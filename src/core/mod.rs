pub mod constants;
pub mod eyes;
pub mod pointer;
pub mod prefs;
pub mod reveal;
pub mod sections;

pub use constants::*;
pub use eyes::{EyeConfig, OrientationStrategy};
pub use pointer::{CursorVariant, HoverCounter, ViewportPointer};
pub use prefs::{AudioMachine, AudioStart, PreferenceState, Theme};
pub use reveal::{RevealGate, RevealTiming};
pub use sections::SectionRegistry;
