//! Scroll-driven chrome and scroll requests.
//!
//! [`ScrollTracker`] owns the only cross-event state on the page, the last
//! seen scroll offset, and runs once per raw scroll event without throttling.
//! The free functions turn anchor and call-to-action activations into
//! smooth-scroll requests.

use crate::action::{Action, Target};
use crate::config::PageConfig;
use crate::consts::{BACK_TO_TOP_SHOW_CLASS, CONTACT_SECTION_ID, CTA_PULSE_ANIMATION};

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Hide the header while moving down past the threshold, show it
    /// otherwise, and toggle the back-to-top control.
    pub fn on_scroll(&mut self, offset: f64, config: &PageConfig) -> Vec<Action> {
        let scrolling_down = offset > self.last_offset && offset > config.header_hide_threshold_px;
        self.last_offset = offset;

        let header = if scrolling_down { "translateY(-100%)" } else { "translateY(0)" };
        let back_to_top = if offset > config.back_to_top_threshold_px {
            Action::AddClass { target: Target::BackToTop, class: BACK_TO_TOP_SHOW_CLASS }
        } else {
            Action::RemoveClass { target: Target::BackToTop, class: BACK_TO_TOP_SHOW_CLASS }
        };
        vec![Action::style(Target::Header, "transform", header), back_to_top]
    }
}

/// Element id referenced by a same-page link, e.g. `#about` → `about`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll to the section an in-page link points at.
#[must_use]
pub fn navigate(href: &str) -> Vec<Action> {
    match fragment_target(href) {
        Some(id) => vec![Action::ScrollIntoView { id: id.to_owned() }],
        None => {
            log::debug!("ignoring in-page link without target: {href:?}");
            Vec::new()
        }
    }
}

#[must_use]
pub fn back_to_top() -> Vec<Action> {
    vec![Action::ScrollToTop]
}

/// Pulse the call-to-action while hovered or touched.
#[must_use]
pub fn cta_pulse(engaged: bool) -> Vec<Action> {
    let animation = if engaged { CTA_PULSE_ANIMATION } else { "none" };
    vec![Action::style(Target::CallToAction, "animation", animation)]
}

#[must_use]
pub fn cta_activate() -> Vec<Action> {
    vec![Action::ScrollIntoView { id: CONTACT_SECTION_ID.to_owned() }]
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;
