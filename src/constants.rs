/// DOM-facing selectors, ids and inline styles for the page effects.
///
/// Numeric thresholds live in `core::constants`; this module keeps the
/// strings that only the browser glue needs.
// Effect targets
pub const FADE_SELECTOR: &str = ".fade-in";
pub const COUNTER_SELECTOR: &str = ".counter";
pub const TYPEWRITER_SELECTOR: &str = ".typewriter-text";
pub const RIPPLE_HOST_SELECTOR: &str = "button, .btn";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_SELECTOR: &str = ".ripple";

// Back-to-top control
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const BACK_TO_TOP_LABEL: &str = "↑";
pub const BACK_TO_TOP_CSS: &str = "position: fixed; bottom: 20px; right: 20px; \
    padding: 10px 14px; border-radius: 50%; \
    border: none; background: linear-gradient(135deg, #6ea8ff, #9b8cff); \
    color: #0b0b0d; font-size: 18px; cursor: pointer; \
    display: none; z-index: 1000;";

// Injected once so ripples animate (and clean up) without page CSS support
pub const RIPPLE_KEYFRAMES_ID: &str = "fx-ripple-keyframes";
pub const RIPPLE_KEYFRAMES_CSS: &str =
    "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

// Optional ScrollReveal library
pub const SCROLL_REVEAL_GLOBAL: &str = "ScrollReveal";
pub const SCROLL_REVEAL_DISTANCE: &str = "50px";
pub const SCROLL_REVEAL_DURATION_MS: f64 = 600.0;
pub const SCROLL_REVEAL_EASING: &str = "ease-out";
pub const SCROLL_REVEAL_ORIGIN: &str = "bottom";
pub const SCROLL_REVEAL_VIEW_FACTOR: f64 = 0.2;
// (selector, stagger interval in ms)
pub const SCROLL_REVEAL_GROUPS: [(&str, Option<f64>); 3] = [
    (".hero", None),
    (
        ".about, .skills, .projects, .contact, .education, .testimonials",
        Some(200.0),
    ),
    (".project-card, .testimonial-card, .edu-card", Some(150.0)),
];
