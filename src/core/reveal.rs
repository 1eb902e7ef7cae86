/// One-shot latch for a reveal group. The first `fire` wins; every later
/// trigger (viewport re-entry, duplicate observer callback) is ignored.
#[derive(Default, Clone, Copy, Debug)]
pub struct RevealGate {
    played: bool,
}

impl RevealGate {
    pub fn fire(&mut self) -> bool {
        if self.played {
            return false;
        }
        self.played = true;
        true
    }

    #[inline]
    pub fn has_played(&self) -> bool {
        self.played
    }
}

/// Transition parameters handed to the browser; the tweening itself is not
/// ours.
#[derive(Clone, Copy, Debug)]
pub struct RevealTiming {
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub stagger_secs: f32,
}

impl RevealTiming {
    pub const fn uniform(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            stagger_secs: 0.0,
        }
    }

    /// Delay for the `index`-th sibling target, in registration order.
    #[inline]
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay_secs + self.stagger_secs * index as f32
    }
}
