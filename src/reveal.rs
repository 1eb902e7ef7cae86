use crate::core::reveal::{RevealGate, RevealTiming};
use crate::listener::IntersectionGuard;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Visual entry state a target transitions out of when revealed.
#[derive(Clone, Copy, Debug)]
pub enum Entry {
    /// Faded out and shifted vertically by the given px.
    Slide(f32),
    /// Faded out and scaled by the given factor.
    Scale(f32),
}

impl Entry {
    fn transform(&self) -> String {
        match self {
            Entry::Slide(px) => format!("translateY({px:.0}px)"),
            Entry::Scale(factor) => format!("scale({factor})"),
        }
    }
}

/// One viewport-triggered reveal group, registered once per session.
pub struct RevealGroupConfig {
    pub name: &'static str,
    pub trigger: web::Element,
    pub targets: Vec<web::HtmlElement>,
    pub threshold: f64,
    pub entry: Entry,
    pub timing: RevealTiming,
}

/// Put a target into its entry state without animating.
fn prepare(target: &web::HtmlElement, entry: Entry) {
    let style = target.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("transform", &entry.transform());
}

/// Transition a target from its entry state to rest. The browser tweens;
/// we only hand it duration and delay.
fn play(target: &web::HtmlElement, timing: &RevealTiming, index: usize) {
    let style = target.style();
    let duration = timing.duration_secs;
    let delay = timing.delay_for(index);
    _ = style.set_property(
        "transition",
        &format!(
            "opacity {duration:.2}s ease {delay:.2}s, transform {duration:.2}s ease {delay:.2}s"
        ),
    );
    _ = style.set_property("opacity", "1");
    _ = style.set_property("transform", "none");
}

/// Snap a target straight to its resting state (reduced motion, or a group
/// that should not animate).
fn settle(target: &web::HtmlElement) {
    let style = target.style();
    _ = style.set_property("opacity", "1");
    _ = style.set_property("transform", "none");
}

/// Immediate entrance for above-the-fold content: entry state is committed,
/// then the transition to rest starts on the same mount pass.
pub fn play_entrance(target: &web::HtmlElement, entry: Entry, timing: &RevealTiming) {
    if crate::dom::prefers_reduced_motion() {
        settle(target);
        return;
    }
    prepare(target, entry);
    // Reading layout commits the entry state before the transition is set,
    // otherwise the browser coalesces both writes into one style pass.
    let _ = target.offset_height();
    play(target, timing, 0);
}

/// Observers for all below-fold groups. Dropping disconnects everything.
pub struct Reveals {
    _observers: Vec<IntersectionGuard>,
}

impl Reveals {
    pub fn mount(groups: Vec<RevealGroupConfig>) -> Self {
        let reduced_motion = crate::dom::prefers_reduced_motion();
        let mut observers = Vec::with_capacity(groups.len());
        for group in groups {
            if group.targets.is_empty() {
                continue;
            }
            if reduced_motion {
                for target in &group.targets {
                    settle(target);
                }
                continue;
            }
            for target in &group.targets {
                prepare(target, group.entry);
            }
            let mut gate = RevealGate::default();
            let targets = group.targets.clone();
            let timing = group.timing;
            let name = group.name;
            let guard = IntersectionGuard::new(group.threshold, {
                move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<web::IntersectionObserverEntry>()
                            .map(|e| e.is_intersecting())
                            .unwrap_or(false)
                    });
                    if !intersecting {
                        return;
                    }
                    // One-shot: repeat intersections after the first play
                    // are ignored, and the observer is dropped entirely.
                    if !gate.fire() {
                        return;
                    }
                    for (i, target) in targets.iter().enumerate() {
                        play(target, &timing, i);
                    }
                    observer.disconnect();
                    log::info!("[reveal] group '{name}' played");
                }
            });
            match guard {
                Some(guard) => {
                    guard.observe(&group.trigger);
                    observers.push(guard);
                }
                None => {
                    // No observer support: reveal immediately rather than
                    // leaving content hidden.
                    for target in &group.targets {
                        settle(target);
                    }
                }
            }
        }
        Self {
            _observers: observers,
        }
    }
}
