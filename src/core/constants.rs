// Scroll-spy policy constants shared by the detector and its tests.

// A section is eligible while its viewport-relative top sits at or above
// this line (px from the top of the viewport).
pub const SECTION_ACTIVATION_PX: f64 = 200.0;

// Vertical scroll offset past which the back-to-top affordance shows.
pub const PAST_SCROLL_PX: f64 = 400.0;
