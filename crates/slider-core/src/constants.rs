// Default tuning shared by the web and native front ends.

// Construction contract defaults
pub const DEFAULT_ITEM_WIDTH: f64 = 100.0; // one slide, in the host's position unit
pub const DEFAULT_LERP_FACTOR: f64 = 0.1; // fraction of remaining distance closed per 60 Hz frame
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_SCROLL_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_SNAP_STRENGTH: f64 = 0.8; // 0 selects the fixed-threshold snap
pub const DEFAULT_SPEED_DECAY: f64 = 0.85; // EMA weight of the previous speed outside luxury mode
pub const DEFAULT_PERFORMANCE_TARGET: u32 = 60; // fps

// Frame budget per performance mode (seconds)
pub const HIGH_MAX_FRAME_DELTA: f64 = 1.0 / 60.0;
pub const BALANCED_MAX_FRAME_DELTA: f64 = 1.0 / 45.0;
pub const POWER_SAVE_MAX_FRAME_DELTA: f64 = 1.0 / 30.0;

// Below these distances the core settles instead of interpolating
pub const HIGH_MICRO_THRESHOLD: f64 = 0.001;
pub const REDUCED_MICRO_THRESHOLD: f64 = 0.005;

// Luxury easing
pub const LUXURY_SPEED_DECAY: f64 = 0.92;
pub const LUXURY_SPEED_WEIGHT: f64 = 0.4; // share of normalized speed in the blended factor
pub const LUXURY_GAIN_MIN: f64 = 0.7; // lerp multiplier when close and slow
pub const LUXURY_GAIN_MAX: f64 = 1.4; // lerp multiplier when far or fast
pub const LUXURY_SPEED_NORM: f64 = 4.0; // item widths per second that count as full speed
pub const MIN_LERP: f64 = 0.001;

// Proportional snap (snap_strength > 0)
pub const SNAP_DISTANCE_RATIO: f64 = 0.08; // threshold = item_width * snap_strength * ratio
pub const SNAP_EASE: f64 = 0.35; // extra fraction of the remainder closed inside the threshold
pub const SNAP_EXACT_RATIO: f64 = 0.1; // exact snap once within this share of the threshold
pub const SNAP_SLOW_SPEED_RATIO: f64 = 1.5; // item widths per second considered "slow"

// Fixed-threshold snap (snap_strength == 0)
pub const FIXED_SNAP_DISTANCE: f64 = 0.5;
pub const FIXED_SNAP_SPEED: f64 = 5.0;
pub const LOOSE_FIXED_SNAP_DISTANCE: f64 = 1.0;
pub const LOOSE_FIXED_SNAP_SPEED: f64 = 10.0;

// Performance-mode multipliers for lerp and snap threshold
pub const BALANCED_SCALE: f64 = 1.2;
pub const POWER_SAVE_SCALE: f64 = 1.5;

// Settling
pub const LUXURY_SETTLE_DECAY: f64 = 0.85;
pub const STANDARD_SETTLE_DECAY: f64 = 0.9;
pub const SPEED_EPSILON: f64 = 0.05;

// Bounds and wraparound
pub const TARGET_CLAMP_WIDTHS: f64 = 2.0; // target stays within +-N * total_width
pub const WRAP_SPEED_DAMPING: f64 = 0.95;
pub const WRAP_CENTER_OFFSET: f64 = 0.0;

// Frame statistics
pub const FRAME_HISTORY_LEN: usize = 10;
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const PROGRESS_CACHE_MS: f64 = 16.0;
pub const STUTTER_RATIO: f64 = 2.0; // a frame this many times the average counts as a stutter

// Performance mode thresholds relative to performance_target (60 fps -> 45 / 30 / 55)
pub const DOWNGRADE_TO_BALANCED_RATIO: f64 = 0.75;
pub const DOWNGRADE_TO_POWER_SAVE_RATIO: f64 = 0.5;
pub const RECOVER_TO_HIGH_RATIO: f64 = 55.0 / 60.0;

// Drag
pub const DRAG_DAMPING: f64 = 0.3 * 0.8;
pub const MIN_DRAG_DISTANCE: f64 = 50.0; // px
pub const MOMENTUM_THRESHOLD: f64 = 0.5; // px per ms
pub const MOMENTUM_MIN_DISTANCE: f64 = 10.0; // px, filters jittery taps
pub const MOMENTUM_SLIDES_PER_VELOCITY: f64 = 1.0; // slides per (px/ms)
pub const MAX_MOMENTUM_SLIDES: usize = 3;
pub const VELOCITY_HORIZON_MS: f64 = 100.0;
pub const VELOCITY_HISTORY_LEN: usize = 8;

// Wheel
pub const WHEEL_HORIZONTAL_WINDOW_MS: f64 = 150.0;
pub const WHEEL_VERTICAL_WINDOW_MS: f64 = 200.0;
pub const WHEEL_HORIZONTAL_THRESHOLD: f64 = 50.0;
pub const WHEEL_VERTICAL_THRESHOLD: f64 = 100.0;

// Auto-play
pub const AUTO_PLAY_DELAY_MS: f64 = 5000.0;
pub const AUTO_PLAY_RESUME_DELAY_MS: f64 = 1200.0;

// Presentation
pub const MIN_SLIDE_OPACITY: f64 = 0.35;
pub const MIN_SLIDE_SCALE: f64 = 0.88;
pub const LAYER_SPEEDS: [f64; 3] = [0.2, 0.5, 0.8]; // background, midground, foreground
pub const BLUR_PER_SLIDE_SPEED: f64 = 1.5; // px of blur per slide/second
pub const MAX_BLUR_PX: f64 = 8.0;
pub const SKEW_PER_SLIDE_SPEED: f64 = 1.2; // degrees per slide/second
pub const MAX_SKEW_DEG: f64 = 6.0;
pub const ROTATE_PER_SLIDE_SPEED: f64 = 0.4;
pub const MAX_ROTATE_DEG: f64 = 2.0;
pub const PROGRESS_LEAD_PER_SLIDE_SPEED: f64 = 0.01;
pub const MAX_PROGRESS_LEAD: f64 = 0.05;
pub const VISIBLE_SLIDE_SPAN: f64 = 1.5; // slides beyond this distance are hidden
