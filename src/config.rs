//! Page-level configuration constants.

// Shared navigation fragment
pub const NAVBAR_FRAGMENT_URL: &str = "navbar.html";

// Scroll thresholds (px)
pub const NAV_SHADOW_OFFSET: f64 = 50.0;
pub const NAV_HIDE_OFFSET: f64 = 100.0;
pub const REVEAL_MARGIN: f64 = 100.0;

// Portfolio fade replay delay after a filter change
pub const FILTER_FADE_MS: u32 = 50;

// Testimonial slider tuning
pub const SLIDER_AUTOPLAY_MS: u32 = 4_000;
pub const SLIDER_GAP_PX: u32 = 30;

// Default values for the placeholder-text form
pub const DEFAULT_LOREM_PARAGRAPHS: usize = 3;
pub const DEFAULT_LOREM_LINES: usize = 4;
