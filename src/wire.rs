//! Per-feature startup wiring.
//!
//! Each feature resolves the elements it needs, registers them as action
//! targets, and attaches its listeners. A feature that cannot find a required
//! element returns the error before attaching anything, so it is skipped as a
//! whole while the rest of the page keeps working.

use std::fmt;
use std::rc::Rc;

use page::action::Target;
use page::consts::THEME_ATTRIBUTE;
use page::form::{Field, FormValues};
use page::modal::ProjectCard;
use page::reveal::RevealKind;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};

use crate::dom::{self, by_id, listen};
use crate::error::DomError;
use crate::host::Page;
use crate::observe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Theme,
    Navigation,
    ContactForm,
    ProjectModal,
    CallToAction,
    Header,
    BackToTop,
    RevealSections,
    RevealCards,
    Typing,
}

impl Feature {
    /// Startup order. Theme goes first so the stored preference is applied
    /// before anything animates.
    pub const ALL: [Self; 10] = [
        Self::Theme,
        Self::Navigation,
        Self::ContactForm,
        Self::ProjectModal,
        Self::CallToAction,
        Self::Header,
        Self::BackToTop,
        Self::RevealSections,
        Self::RevealCards,
        Self::Typing,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme toggle",
            Self::Navigation => "smooth navigation",
            Self::ContactForm => "contact form",
            Self::ProjectModal => "project modal",
            Self::CallToAction => "call to action",
            Self::Header => "scroll header",
            Self::BackToTop => "back to top",
            Self::RevealSections => "section reveal",
            Self::RevealCards => "card reveal",
            Self::Typing => "hero typing",
        }
    }

    pub fn wire(self, page: &Rc<Page>) -> Result<(), DomError> {
        match self {
            Self::Theme => theme(page),
            Self::Navigation => navigation(page),
            Self::ContactForm => contact_form(page),
            Self::ProjectModal => project_modal(page),
            Self::CallToAction => call_to_action(page),
            Self::Header => header(page),
            Self::BackToTop => back_to_top(page),
            Self::RevealSections => reveal(page, RevealKind::Section, dom::SECTIONS),
            Self::RevealCards => reveal(page, RevealKind::Card, dom::PROJECT_CARD),
            Self::Typing => typing(page),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// THEME
// =============================================================================

fn theme(page: &Rc<Page>) -> Result<(), DomError> {
    let root = page.dom.body()?;
    page.load_theme();
    let toggle = page.dom.one(dom::THEME_TOGGLE)?;

    let page = Rc::clone(page);
    listen(&toggle, "click", move |_| {
        let displayed = root.get_attribute(THEME_ATTRIBUTE);
        page.dispatch(|controller| controller.toggle_theme(displayed.as_deref()));
    })
}

// =============================================================================
// NAVIGATION
// =============================================================================

fn navigation(page: &Rc<Page>) -> Result<(), DomError> {
    for link in page.dom.some(dom::NAV_LINKS)? {
        let page = Rc::clone(page);
        let href = link.get_attribute("href").unwrap_or_default();
        listen(&link, "click", move |event: Event| {
            event.prevent_default();
            page.dispatch(|controller| controller.navigate(&href));
        })?;
    }
    Ok(())
}

// =============================================================================
// CONTACT FORM
// =============================================================================

fn contact_form(page: &Rc<Page>) -> Result<(), DomError> {
    let form = page
        .dom
        .one(dom::CONTACT_FORM)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| DomError::WrongType { selector: dom::CONTACT_FORM.to_owned(), expected: "HTMLFormElement" })?;
    let submit = page.dom.one(dom::SUBMIT_BUTTON)?;
    let mut fields = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let input = page.dom.one(&by_id(field.id()))?;
        let slot = page.dom.one(&by_id(field.error_id()))?;
        fields.push((field, input, slot));
    }

    page.register(Target::SubmitButton, submit.clone());
    page.set_form(form.clone());
    for (field, input, slot) in &fields {
        page.register(Target::Field(*field), input.clone());
        page.register(Target::FieldError(*field), slot.clone());
        let page = Rc::clone(page);
        let field = *field;
        listen(input, "input", move |_| page.dispatch(|controller| controller.edit_field(field)))?;
    }

    let page = Rc::clone(page);
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let values = read_values(&fields);
        let label = submit.text_content().unwrap_or_default();
        page.dispatch(|controller| controller.submit_form(values, &label));
    })
}

fn read_values(fields: &[(Field, HtmlElement, HtmlElement)]) -> FormValues {
    let mut values = FormValues::default();
    for (field, input, _) in fields {
        let value = field_value(input);
        match field {
            Field::Name => values.name = value,
            Field::Email => values.email = value,
            Field::Message => values.message = value,
        }
    }
    values
}

fn field_value(element: &HtmlElement) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}

// =============================================================================
// PROJECT MODAL
// =============================================================================

fn project_modal(page: &Rc<Page>) -> Result<(), DomError> {
    let slots = [
        (Target::Modal, dom::MODAL),
        (Target::ModalTitle, dom::MODAL_TITLE),
        (Target::ModalDescription, dom::MODAL_DESCRIPTION),
        (Target::ModalImage, dom::MODAL_IMAGE),
        (Target::ModalLink, dom::MODAL_LINK),
        (Target::ModalTechStack, dom::MODAL_TECH_STACK),
    ];
    let mut resolved = Vec::with_capacity(slots.len());
    for (target, selector) in slots {
        resolved.push((target, page.dom.one(selector)?));
    }
    let buttons = page.dom.some(dom::PROJECT_BUTTON)?;
    let closers: Vec<HtmlElement> = [dom::MODAL_CLOSE, dom::MODAL_OVERLAY]
        .into_iter()
        .map(|selector| page.dom.optional(selector))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    for (target, element) in resolved {
        page.register(target, element);
    }

    for button in buttons {
        let page = Rc::clone(page);
        listen(&button, "click", move |event: Event| {
            event.prevent_default();
            let Some(card) = enclosing_card(&event) else {
                log::debug!("project button outside a project card");
                return;
            };
            page.dispatch(|controller| controller.open_project(&card));
        })?;
    }

    for closer in closers {
        let page = Rc::clone(page);
        listen(&closer, "click", move |_| page.dispatch(|controller| controller.close_modal()))?;
    }

    let handler_page = Rc::clone(page);
    listen(&page.dom.document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        handler_page.dispatch(|controller| controller.key_down(&key));
    })
}

fn enclosing_card(event: &Event) -> Option<ProjectCard> {
    let source = event.current_target()?.dyn_into::<Element>().ok()?;
    let card = source.closest(dom::PROJECT_CARD).ok()??;
    let attr = |name: &str| card.get_attribute(name).unwrap_or_default();
    Some(ProjectCard {
        title: attr("data-title"),
        description: attr("data-description"),
        image: attr("data-image"),
        tech: attr("data-tech"),
        github: attr("data-github"),
    })
}

// =============================================================================
// CALL TO ACTION
// =============================================================================

fn call_to_action(page: &Rc<Page>) -> Result<(), DomError> {
    let button = page.dom.one(dom::CALL_TO_ACTION)?;
    page.register(Target::CallToAction, button.clone());

    for (event, engaged) in [("mouseenter", true), ("touchstart", true), ("mouseleave", false), ("touchend", false)] {
        let page = Rc::clone(page);
        listen(&button, event, move |_| page.dispatch(|controller| controller.cta_pulse(engaged)))?;
    }
    let page = Rc::clone(page);
    listen(&button, "click", move |_| page.dispatch(|controller| controller.cta_activate()))
}

// =============================================================================
// SCROLL
// =============================================================================

fn header(page: &Rc<Page>) -> Result<(), DomError> {
    let header = page.dom.one(dom::HEADER)?;
    page.register(Target::Header, header);
    listen_scroll(page)
}

fn back_to_top(page: &Rc<Page>) -> Result<(), DomError> {
    let button = page.dom.one(dom::BACK_TO_TOP)?;
    page.register(Target::BackToTop, button.clone());
    listen_scroll(page)?;

    let page = Rc::clone(page);
    listen(&button, "click", move |event: Event| {
        event.prevent_default();
        page.dispatch(|controller| controller.back_to_top());
    })
}

/// Header and back-to-top share one scroll listener; actions for whichever
/// element is absent are dropped at apply time.
fn listen_scroll(page: &Rc<Page>) -> Result<(), DomError> {
    if !page.claim_scroll_listener() {
        return Ok(());
    }
    let handler_page = Rc::clone(page);
    listen(&page.dom.window, "scroll", move |_| {
        let offset = handler_page.dom.scroll_offset();
        handler_page.dispatch(|controller| controller.scroll(offset));
    })
}

// =============================================================================
// REVEAL + TYPING
// =============================================================================

fn reveal(page: &Rc<Page>, kind: RevealKind, selector: &str) -> Result<(), DomError> {
    let elements = page.dom.some(selector)?;
    observe::observe(page, kind, elements)
}

fn typing(page: &Rc<Page>) -> Result<(), DomError> {
    let title = page.dom.one(dom::HERO_TITLE)?;
    let tagline = page.dom.optional(dom::HERO_TAGLINE)?;

    let title_text = title.text_content().unwrap_or_default();
    let tagline_text = tagline.as_ref().map(|el| el.text_content().unwrap_or_default());
    page.register(Target::HeroTitle, title);
    if let Some(tagline) = tagline {
        page.register(Target::HeroTagline, tagline);
    }
    page.dispatch(|controller| controller.start_typing(&title_text, tagline_text.as_deref()));
    Ok(())
}

/// Wire every feature, skipping the ones whose markup is missing.
pub fn wire_all(page: &Rc<Page>) {
    for feature in Feature::ALL {
        match feature.wire(page) {
            Ok(()) => log::debug!("{feature} ready"),
            Err(err) => log::warn!("{feature} disabled: {err}"),
        }
    }
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;
