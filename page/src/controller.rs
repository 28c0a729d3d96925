use crate::action::{Action, Task};
use crate::config::PageConfig;
use crate::form::{ContactForm, Field, FormValues};
use crate::modal::{ModalPhase, ProjectCard, ProjectModal};
use crate::reveal::{Intersection, RevealKind, RevealTracker};
use crate::scroll::{self, ScrollTracker};
use crate::theme::{PreferenceStore, Theme, ThemeState};
use crate::typing::Typewriter;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Page behavior controller: one instance per loaded page.
///
/// Every handler is independent; the host forwards browser events here and
/// applies the returned actions. Deferred work comes back through [`Self::run`].
#[derive(Debug, Clone, Default)]
pub struct PageController {
    config: PageConfig,
    theme: ThemeState,
    form: ContactForm,
    modal: ProjectModal,
    scroll: ScrollTracker,
    reveal: RevealTracker,
    typing: Typewriter,
}

impl PageController {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn modal_phase(&self) -> ModalPhase {
        self.modal.phase()
    }

    #[must_use]
    pub fn submission_pending(&self) -> bool {
        self.form.is_pending()
    }

    // --- Theme ---

    pub fn load_theme(&mut self, store: &impl PreferenceStore) -> Vec<Action> {
        self.theme.load(store, &self.config)
    }

    pub fn toggle_theme(&mut self, displayed: Option<&str>) -> Vec<Action> {
        self.theme.toggle(displayed, &self.config)
    }

    // --- Navigation ---

    #[must_use]
    pub fn navigate(&self, href: &str) -> Vec<Action> {
        scroll::navigate(href)
    }

    #[must_use]
    pub fn back_to_top(&self) -> Vec<Action> {
        scroll::back_to_top()
    }

    #[must_use]
    pub fn cta_pulse(&self, engaged: bool) -> Vec<Action> {
        scroll::cta_pulse(engaged)
    }

    #[must_use]
    pub fn cta_activate(&self) -> Vec<Action> {
        scroll::cta_activate()
    }

    pub fn scroll(&mut self, offset: f64) -> Vec<Action> {
        self.scroll.on_scroll(offset, &self.config)
    }

    // --- Contact form ---

    pub fn submit_form(&mut self, values: FormValues, submit_label: &str) -> Vec<Action> {
        self.form.submit(values, submit_label, &self.config)
    }

    #[must_use]
    pub fn edit_field(&self, field: Field) -> Vec<Action> {
        self.form.edit(field)
    }

    // --- Modal ---

    pub fn open_project(&mut self, card: &ProjectCard) -> Vec<Action> {
        self.modal.open(card, &self.config)
    }

    pub fn close_modal(&mut self) -> Vec<Action> {
        self.modal.close(&self.config)
    }

    pub fn key_down(&mut self, key: &str) -> Vec<Action> {
        self.modal.key_down(key, &self.config)
    }

    // --- Animations ---

    #[must_use]
    pub fn prepare_reveal(&self, kind: RevealKind, count: usize) -> Vec<Action> {
        self.reveal.prepare(kind, count)
    }

    pub fn intersections(&mut self, kind: RevealKind, entries: &[Intersection]) -> Vec<Action> {
        self.reveal.observe_batch(kind, entries, &self.config)
    }

    pub fn start_typing(&mut self, title: &str, tagline: Option<&str>) -> Vec<Action> {
        self.typing.start(title, tagline, &self.config)
    }

    // --- Deferred work ---

    /// Run a task previously handed out in an [`Action::Defer`].
    pub fn run(&mut self, task: Task) -> Vec<Action> {
        match task {
            Task::ClearThemeTransition => self.theme.clear_transition(),
            Task::CompleteSubmission => self.form.complete(&self.config),
            Task::ActivateModal => self.modal.activate(),
            Task::HideModal => self.modal.hide(),
            Task::Reveal { kind, index } => self.reveal.reveal(kind, index),
            Task::Type { line, next } => self.typing.type_next(line, next, &self.config),
        }
    }
}
