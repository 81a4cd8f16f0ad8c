/// DOM contract and browser-side timing for the mounted slider.
///
/// Class names and selectors are what the page markup is expected to use;
/// everything about motion itself lives in `slider_core::constants`.
// Markup hooks
pub const SLIDE_SELECTOR: &str = ".slider-slide";
pub const PROGRESS_SELECTOR: &str = ".slider-progress";
pub const ACTIVE_CLASS: &str = "is-active";
pub const ARIA_CURRENT: &str = "aria-current";

// Parallax layers inside a slide, background to foreground
pub const LAYER_SELECTORS: [&str; 3] = [
    "[data-depth=\"background\"]",
    "[data-depth=\"midground\"]",
    "[data-depth=\"foreground\"]",
];

// Event dispatched on the root element when the active slide changes
pub const SLIDE_CHANGE_EVENT: &str = "slidechange";

// Auto-play is polled on this interval; the engine decides when a step is due
pub const AUTO_PLAY_POLL_MS: i32 = 250;

// Share of the root that must be on screen to count as visible
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// WheelEvent.deltaMode units
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;
pub const LINE_HEIGHT_PX: f64 = 40.0; // one wheel notch in line mode

// Transforms below this many px/deg are written as zero
pub const CSS_EPSILON: f64 = 0.001;
