// Shared scroll/reveal tuning constants used by the web frontend.

// Scroll thresholds (px of vertical scroll)
pub const BACK_TO_TOP_SHOW_AFTER: f64 = 400.0; // back-to-top control appears past this
pub const NAVBAR_SCROLLED_AFTER: f64 = 80.0; // navbar gets its "scrolled" state past this
pub const SECTION_HEADER_OFFSET: f64 = 120.0; // sticky header height subtracted from section tops

// Parallax
pub const PARALLAX_SCALE: f64 = 1.2; // fixed zoom on the hero image
pub const PARALLAX_FACTOR: f64 = 0.2; // vertical translation per px of scroll

// Visibility thresholds (fraction of the target inside the viewport)
pub const FADE_THRESHOLD: f64 = 0.3;
pub const COUNTER_THRESHOLD: f64 = 0.4;
// Observers report ratios a hair under the configured threshold on crossing
pub const RATIO_EPSILON: f64 = 1e-3;
// Observer report points between 0 and the threshold
pub const OBSERVER_THRESHOLD_STEPS: usize = 10;

// Counter ramp: frames to reach the target (smaller = faster)
pub const COUNTER_SPEED: i64 = 200;

// Typewriter
pub const TYPEWRITER_DEFAULT_DURATION_MS: i64 = 2000;

// Presentation classes
pub const VISIBLE_CLASS: &str = "visible";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";

// Scroll-driven targets
pub const NAVBAR_SELECTOR: &str = ".nav";
pub const NAV_LINK_SELECTOR: &str = ".nav a";
pub const HERO_IMAGE_SELECTOR: &str = ".hero-portrait img";
pub const SECTION_SELECTOR: &str = "section";

// Per-element configuration attributes
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const TYPEWRITER_DURATION_ATTR: &str = "data-duration";
