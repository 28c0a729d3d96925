//! Applies controller actions to the live document.
//!
//! ARCHITECTURE
//! ============
//! `Page` owns the controller and the elements each feature resolved at
//! startup, keyed by [`Target`]. Listeners call [`Page::dispatch`], which
//! borrows the controller only long enough to compute actions; the actions are
//! applied afterwards, so a blocking `alert` or a timer callback never runs
//! under a borrow. `Defer` actions become one-shot `gloo` timeouts that feed
//! their task back through `dispatch`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use page::action::{Action, Target, Task};
use page::config::PageConfig;
use page::consts::TECH_TAG_CLASS;
use page::controller::PageController;
use page::form::FormValues;
use page::reveal::RevealKind;
use page::theme::PreferenceStore;
use web_sys::{
    HtmlElement, HtmlFormElement, IntersectionObserver, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::dom::Dom;
use crate::error::DomError;
use crate::storage::LocalStore;

pub struct Page {
    pub dom: Dom,
    controller: RefCell<PageController>,
    store: RefCell<LocalStore>,
    targets: RefCell<HashMap<Target, HtmlElement>>,
    form: RefCell<Option<HtmlFormElement>>,
    observers: RefCell<HashMap<RevealKind, IntersectionObserver>>,
    scroll_listening: Cell<bool>,
}

impl Page {
    pub fn new(dom: Dom, config: PageConfig) -> Rc<Self> {
        let store = LocalStore::from_window(&dom.window);
        let page = Rc::new(Self {
            dom,
            controller: RefCell::new(PageController::new(config)),
            store: RefCell::new(store),
            targets: RefCell::new(HashMap::new()),
            form: RefCell::new(None),
            observers: RefCell::new(HashMap::new()),
            scroll_listening: Cell::new(false),
        });
        match page.dom.body() {
            Ok(body) => page.register(Target::Root, body),
            Err(err) => log::warn!("page root unavailable: {err}"),
        }
        page
    }

    /// Copy of the active configuration.
    pub fn config(&self) -> PageConfig {
        self.controller.borrow().config().clone()
    }

    pub fn register(&self, target: Target, element: HtmlElement) {
        self.targets.borrow_mut().insert(target, element);
    }

    pub fn set_form(&self, form: HtmlFormElement) {
        *self.form.borrow_mut() = Some(form);
    }

    pub fn set_observer(&self, kind: RevealKind, observer: IntersectionObserver) {
        self.observers.borrow_mut().insert(kind, observer);
    }

    /// Marks the shared scroll listener as installed; returns `false` if it already was.
    pub fn claim_scroll_listener(&self) -> bool {
        !self.scroll_listening.replace(true)
    }

    /// Run one controller handler and apply what it returns.
    pub fn dispatch(self: &Rc<Self>, handler: impl FnOnce(&mut PageController) -> Vec<Action>) {
        let actions = {
            let mut controller = self.controller.borrow_mut();
            handler(&mut controller)
        };
        self.apply(actions);
    }

    pub fn load_theme(self: &Rc<Self>) {
        let actions = {
            let store = self.store.borrow();
            self.controller.borrow_mut().load_theme(&*store)
        };
        self.apply(actions);
    }

    pub fn apply(self: &Rc<Self>, actions: Vec<Action>) {
        for action in actions {
            if let Err(err) = self.apply_one(action) {
                log::warn!("{err}");
            }
        }
    }

    fn element(&self, target: Target) -> Option<HtmlElement> {
        let element = self.targets.borrow().get(&target).cloned();
        if element.is_none() {
            log::debug!("no element registered for {target:?}");
        }
        element
    }

    fn apply_one(self: &Rc<Self>, action: Action) -> Result<(), DomError> {
        match action {
            Action::SetAttribute { target, name, value } => {
                if let Some(el) = self.element(target) {
                    el.set_attribute(name, &value).map_err(|err| DomError::js("setAttribute", &err))?;
                }
            }
            Action::SetStyle { target, property, value } => {
                if let Some(el) = self.element(target) {
                    let style = el.style();
                    if value.is_empty() {
                        style.remove_property(property).map_err(|err| DomError::js("removeProperty", &err))?;
                    } else {
                        style.set_property(property, &value).map_err(|err| DomError::js("setProperty", &err))?;
                    }
                }
            }
            Action::SetText { target, text } => {
                if let Some(el) = self.element(target) {
                    el.set_text_content(Some(&text));
                }
            }
            Action::AddClass { target, class } => {
                if let Some(el) = self.element(target) {
                    el.class_list().add_1(class).map_err(|err| DomError::js("classList.add", &err))?;
                }
            }
            Action::RemoveClass { target, class } => {
                if let Some(el) = self.element(target) {
                    el.class_list().remove_1(class).map_err(|err| DomError::js("classList.remove", &err))?;
                }
            }
            Action::SetDisabled { target, disabled } => {
                if let Some(el) = self.element(target) {
                    if disabled {
                        el.set_attribute("disabled", "").map_err(|err| DomError::js("setAttribute", &err))?;
                    } else {
                        el.remove_attribute("disabled").map_err(|err| DomError::js("removeAttribute", &err))?;
                    }
                }
            }
            Action::ReplaceTags { target, tags } => {
                if let Some(el) = self.element(target) {
                    self.replace_tags(&el, &tags)?;
                }
            }
            Action::Persist { key, value } => {
                if let Err(err) = self.store.borrow_mut().set(&key, &value) {
                    log::warn!("could not persist {key}: {err}");
                }
            }
            Action::ScrollIntoView { id } => match self.dom.document.get_element_by_id(&id) {
                Some(el) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => log::debug!("scroll target #{id} not found"),
            },
            Action::ScrollToTop => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.dom.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::ResetForm => {
                if let Some(form) = self.form.borrow().as_ref() {
                    form.reset();
                }
            }
            Action::Alert(message) => {
                self.dom
                    .window
                    .alert_with_message(&message)
                    .map_err(|err| DomError::js("alert", &err))?;
            }
            Action::LogSubmission(values) => {
                let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
                log::info!("form submitted: {}", submission_record(&values, &timestamp));
            }
            Action::Unobserve(target) => self.unobserve(target),
            Action::Defer { delay, task } => self.schedule(delay, task),
        }
        Ok(())
    }

    fn replace_tags(&self, container: &HtmlElement, tags: &[String]) -> Result<(), DomError> {
        container.set_inner_html("");
        for tag in tags {
            let span = self
                .dom
                .document
                .create_element("span")
                .map_err(|err| DomError::js("createElement", &err))?;
            span.set_class_name(TECH_TAG_CLASS);
            span.set_text_content(Some(tag));
            container
                .append_child(&span)
                .map_err(|err| DomError::js("appendChild", &err))?;
        }
        Ok(())
    }

    fn unobserve(&self, target: Target) {
        let kind = match target {
            Target::Section(_) => RevealKind::Section,
            Target::Card(_) => RevealKind::Card,
            other => {
                log::debug!("{other:?} is never observed");
                return;
            }
        };
        let Some(el) = self.element(target) else {
            return;
        };
        if let Some(observer) = self.observers.borrow().get(&kind) {
            observer.unobserve(&el);
        }
    }

    fn schedule(self: &Rc<Self>, delay: Duration, task: Task) {
        let page = Rc::clone(self);
        Timeout::new(timeout_millis(delay), move || page.dispatch(|controller| controller.run(task))).forget();
    }
}

/// Browser timeouts take `u32` milliseconds; longer delays saturate.
#[must_use]
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// JSON record logged for each simulated submission.
#[must_use]
pub fn submission_record(values: &FormValues, timestamp: &str) -> serde_json::Value {
    serde_json::json!({
        "name": values.name,
        "email": values.email,
        "message": values.message,
        "timestamp": timestamp,
    })
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;
