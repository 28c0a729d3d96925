//! Shared constants for the page crate.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root attribute that drives the stylesheet's theme selectors.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// How long the inline color transition stays on the page root.
pub const THEME_TRANSITION_MS: u64 = 300;

pub const THEME_TRANSITION_CSS: &str = "background-color 0.3s ease, color 0.3s ease";

// ── Contact form ────────────────────────────────────────────────

/// Simulated network latency before a valid submission completes.
pub const SUBMIT_DELAY_MS: u64 = 2000;

pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

pub const FIELD_ERROR_BORDER: &str = "#ff6b6b";

pub const FIELD_NEUTRAL_BORDER: &str = "#333";

// ── Modal ───────────────────────────────────────────────────────

/// Gap between `display: flex` and adding `active`, so the CSS transition engages.
pub const MODAL_ENTER_DELAY_MS: u64 = 10;

/// Matches the stylesheet's closing animation.
pub const MODAL_EXIT_DELAY_MS: u64 = 300;

pub const MODAL_ACTIVE_CLASS: &str = "active";

pub const TECH_TAG_CLASS: &str = "tech-tag";

// ── Scrolling ───────────────────────────────────────────────────

/// Offset past which scrolling down hides the header, in CSS pixels.
pub const HEADER_HIDE_THRESHOLD_PX: f64 = 100.0;

/// Offset past which the back-to-top control is shown, in CSS pixels.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

pub const BACK_TO_TOP_SHOW_CLASS: &str = "show";

/// Element id the call-to-action scrolls to.
pub const CONTACT_SECTION_ID: &str = "contact";

pub const CTA_PULSE_ANIMATION: &str = "pulse 1.5s infinite";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const SECTION_STAGGER_MS: u64 = 100;

pub const CARD_STAGGER_MS: u64 = 150;

// ── Typing ──────────────────────────────────────────────────────

/// Pause after load before the first title character appears.
pub const TYPING_START_DELAY_MS: u64 = 500;

pub const TITLE_CADENCE_MS: u64 = 100;

/// Pause between the finished title and the first tagline character.
pub const TAGLINE_PAUSE_MS: u64 = 500;

pub const TAGLINE_CADENCE_MS: u64 = 80;

// ── Logging ─────────────────────────────────────────────────────

pub const DEFAULT_LOG_LEVEL: &str = "info";
