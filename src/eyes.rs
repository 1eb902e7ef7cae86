use crate::core::eyes::{self, EyeConfig, OrientationStrategy};
use crate::dom;
use glam::Vec2;
use smallvec::SmallVec;
use web_sys as web;

/// One eye-tracking widget: a set of pupil elements driven by a shared
/// pointer source through this widget's own orientation config.
pub struct EyeWidget {
    pupils: SmallVec<[web::HtmlElement; 2]>,
    config: EyeConfig,
}

impl EyeWidget {
    pub fn new(pupils: Vec<web::HtmlElement>, config: EyeConfig) -> Self {
        Self {
            pupils: SmallVec::from_vec(pupils),
            config,
        }
    }

    /// Recompute and apply the orientation for the current pointer position.
    pub fn apply(&self, pointer: Vec2) {
        match self.config.strategy {
            OrientationStrategy::Rotate => {
                // Each pupil rotates about its own center, re-measured so
                // layout changes between frames stay correct.
                for pupil in &self.pupils {
                    let center = dom::element_center(pupil);
                    let deg = eyes::rotation_deg(pointer, center);
                    _ = pupil
                        .style()
                        .set_property("transform", &format!("rotate({deg:.1}deg)"));
                }
            }
            OrientationStrategy::Translate => {
                let offset = eyes::translate_offset(pointer, dom::viewport_size(), &self.config);
                let transform = format!("translate({:.1}px, {:.1}px)", offset.x, offset.y);
                for pupil in &self.pupils {
                    _ = pupil.style().set_property("transform", &transform);
                }
            }
        }
    }
}
