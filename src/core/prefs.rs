//! Persisted user preferences and the ambient-audio start machine.
//!
//! These types carry no platform dependencies. Storage access and the actual
//! playback request live on the web side; everything that decides *what* the
//! preference state becomes is here, so the toggle/rollback rules are
//! host-testable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferenceState {
    pub theme: Theme,
    pub audio_enabled: bool,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            audio_enabled: false,
        }
    }
}

/// Outcome of an asynchronous playback-start request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioStart {
    Started,
    /// The browser refused to start playback (autoplay policy).
    Denied,
}

/// State machine for the audio-enabled flag.
///
/// A start request is not confirmed until its outcome arrives; the flag only
/// becomes true on `Started`. Every `stop` bumps the generation, so an
/// outcome for a superseded request resolves to a no-op no matter which
/// order the browser delivers things in.
#[derive(Default, Clone, Copy, Debug)]
pub struct AudioMachine {
    enabled: bool,
    pending: bool,
    generation: u64,
}

impl AudioMachine {
    #[inline]
    pub fn is_on(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Begin a start request. Returns the token the eventual outcome must
    /// present to be applied.
    pub fn begin_start(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    /// Apply the outcome of a start request. Returns the settled flag value
    /// when the token is current, `None` when the request was superseded.
    pub fn resolve_start(&mut self, token: u64, outcome: AudioStart) -> Option<bool> {
        if token != self.generation || !self.pending {
            return None;
        }
        self.pending = false;
        self.enabled = matches!(outcome, AudioStart::Started);
        Some(self.enabled)
    }

    /// Stop synchronously. Always succeeds; any in-flight start request is
    /// invalidated.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.pending = false;
        self.enabled = false;
    }
}
