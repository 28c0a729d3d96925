//! Effect vocabulary shared by the controller and its host.
//!
//! Handlers never mutate the DOM. They return [`Action`]s addressed to a
//! logical [`Target`]; the host resolves targets to elements once at startup.
//! Delayed work is expressed as [`Action::Defer`] carrying a [`Task`] that the
//! host hands back to the controller when its timer fires.

use std::time::Duration;

use crate::form::{Field, FormValues};
use crate::reveal::RevealKind;
use crate::typing::HeroLine;

/// A fixed page element, or one of the indexed sections/cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The element carrying the theme attribute and the scroll lock (`<body>`).
    Root,
    Header,
    HeroTitle,
    HeroTagline,
    Field(Field),
    FieldError(Field),
    SubmitButton,
    Modal,
    ModalTitle,
    ModalDescription,
    ModalImage,
    ModalLink,
    ModalTechStack,
    CallToAction,
    BackToTop,
    /// The n-th `<section>` in document order.
    Section(usize),
    /// The n-th project card in document order.
    Card(usize),
}

/// Actions returned from handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetAttribute { target: Target, name: &'static str, value: String },
    /// Set an inline style property. An empty value removes the property.
    SetStyle { target: Target, property: &'static str, value: String },
    SetText { target: Target, text: String },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetDisabled { target: Target, disabled: bool },
    /// Replace the children of `target` with one tag element per entry.
    ReplaceTags { target: Target, tags: Vec<String> },
    Persist { key: String, value: String },
    /// Smooth-scroll the element with this id to the top of the viewport.
    /// A missing element is a silent no-op.
    ScrollIntoView { id: String },
    ScrollToTop,
    ResetForm,
    Alert(String),
    LogSubmission(FormValues),
    /// Stop watching a revealed element for viewport entry.
    Unobserve(Target),
    Defer { delay: Duration, task: Task },
}

impl Action {
    pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    pub(crate) fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }

    pub(crate) fn defer_ms(ms: u64, task: Task) -> Self {
        Self::Defer { delay: Duration::from_millis(ms), task }
    }
}

/// Deferred work, run through [`crate::controller::PageController::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ClearThemeTransition,
    CompleteSubmission,
    ActivateModal,
    HideModal,
    Reveal { kind: RevealKind, index: usize },
    /// Write the first `next + 1` characters of `line`, or move on once
    /// `next` reaches the end.
    Type { line: HeroLine, next: usize },
}
