//! Thin typed access to the window and document.
//!
//! Selectors for the page's fixed markup live here so every feature looks
//! elements up the same way.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use crate::error::DomError;

pub const THEME_TOGGLE: &str = "#themeToggle";
pub const HEADER: &str = "header";
pub const HERO_TITLE: &str = ".hero h1";
pub const HERO_TAGLINE: &str = ".hero .tagline";
pub const NAV_LINKS: &str = "nav a[href^=\"#\"]";
pub const CONTACT_FORM: &str = ".contact-form";
pub const SUBMIT_BUTTON: &str = ".contact-form .submit-button";
pub const MODAL: &str = "#projectModal";
pub const MODAL_TITLE: &str = "#modalProjectTitle";
pub const MODAL_DESCRIPTION: &str = "#modalProjectDescription";
pub const MODAL_IMAGE: &str = "#modalProjectImage";
pub const MODAL_LINK: &str = "#modalGitHubLink";
pub const MODAL_TECH_STACK: &str = "#modalTechStack";
pub const MODAL_CLOSE: &str = ".modal-close";
pub const MODAL_OVERLAY: &str = ".modal-overlay";
pub const PROJECT_CARD: &str = ".project-card";
pub const PROJECT_BUTTON: &str = ".project-button";
pub const CALL_TO_ACTION: &str = ".cta-button";
pub const BACK_TO_TOP: &str = "#backToTop";
pub const SECTIONS: &str = "section";
pub const PAGE_CONFIG: &str = "#page-config";

/// Selector for an element by id.
#[must_use]
pub fn by_id(id: &str) -> String {
    format!("#{id}")
}

#[derive(Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
}

impl Dom {
    pub fn current() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn body(&self) -> Result<HtmlElement, DomError> {
        self.document.body().ok_or_else(|| DomError::Missing("body".to_owned()))
    }

    /// A required element.
    pub fn one(&self, selector: &str) -> Result<HtmlElement, DomError> {
        self.optional(selector)?.ok_or_else(|| DomError::Missing(selector.to_owned()))
    }

    pub fn optional(&self, selector: &str) -> Result<Option<HtmlElement>, DomError> {
        let Some(element) = self
            .document
            .query_selector(selector)
            .map_err(|err| DomError::js("querySelector", &err))?
        else {
            return Ok(None);
        };
        element
            .dyn_into::<HtmlElement>()
            .map(Some)
            .map_err(|_| DomError::WrongType { selector: selector.to_owned(), expected: "HTMLElement" })
    }

    /// Every matching element, in document order. Non-HTML matches are skipped.
    pub fn all(&self, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|err| DomError::js("querySelectorAll", &err))?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    /// Like [`Self::all`], but an empty match is a missing element.
    pub fn some(&self, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
        let found = self.all(selector)?;
        if found.is_empty() {
            return Err(DomError::Missing(selector.to_owned()));
        }
        Ok(found)
    }

    /// Current vertical scroll offset in CSS pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// `document.readyState`, read reflectively.
    #[must_use]
    pub fn ready_state(&self) -> String {
        js_sys::Reflect::get(&self.document, &"readyState".into())
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }
}

/// Attach a listener that lives as long as the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| DomError::js("addEventListener", &err))?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod tests;
