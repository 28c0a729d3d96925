//! Project detail modal.
//!
//! Opening copies the clicked card's attributes into the modal slots and
//! overwrites whatever the previous opening left there. The phase is tracked
//! only so Escape is honored while the modal carries its `active` marker;
//! scheduled enter/exit steps always run once queued.

use crate::action::{Action, Target, Task};
use crate::config::PageConfig;
use crate::consts::MODAL_ACTIVE_CLASS;

/// Descriptive attributes of one project card (`data-title`, `data-tech`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Comma-separated technology names.
    pub tech: String,
    pub github: String,
}

/// Split a comma-separated technology list into trimmed, non-empty tags.
#[must_use]
pub fn tech_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Displayed, entrance transition not yet engaged.
    Opening,
    /// Displayed with the `active` marker.
    Open,
    /// `active` removed, waiting for the exit animation to finish.
    Closing,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectModal {
    phase: ModalPhase,
}

impl ProjectModal {
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn open(&mut self, card: &ProjectCard, config: &PageConfig) -> Vec<Action> {
        self.phase = ModalPhase::Opening;
        vec![
            Action::text(Target::ModalTitle, card.title.clone()),
            Action::text(Target::ModalDescription, card.description.clone()),
            Action::SetAttribute { target: Target::ModalImage, name: "src", value: card.image.clone() },
            Action::SetAttribute { target: Target::ModalImage, name: "alt", value: card.title.clone() },
            Action::SetAttribute { target: Target::ModalLink, name: "href", value: card.github.clone() },
            Action::ReplaceTags { target: Target::ModalTechStack, tags: tech_tags(&card.tech) },
            Action::style(Target::Modal, "display", "flex"),
            Action::defer_ms(config.modal_enter_delay_ms, Task::ActivateModal),
            Action::style(Target::Root, "overflow", "hidden"),
        ]
    }

    pub fn activate(&mut self) -> Vec<Action> {
        self.phase = ModalPhase::Open;
        vec![Action::AddClass { target: Target::Modal, class: MODAL_ACTIVE_CLASS }]
    }

    /// Close via the close control or the overlay. Ignored when already closed.
    pub fn close(&mut self, config: &PageConfig) -> Vec<Action> {
        if self.phase == ModalPhase::Closed {
            return Vec::new();
        }
        self.phase = ModalPhase::Closing;
        vec![
            Action::RemoveClass { target: Target::Modal, class: MODAL_ACTIVE_CLASS },
            Action::defer_ms(config.modal_exit_delay_ms, Task::HideModal),
        ]
    }

    pub fn hide(&mut self) -> Vec<Action> {
        self.phase = ModalPhase::Closed;
        vec![Action::style(Target::Modal, "display", "none"), Action::style(Target::Root, "overflow", "auto")]
    }

    /// Escape closes the modal only while it is fully open.
    pub fn key_down(&mut self, key: &str, config: &PageConfig) -> Vec<Action> {
        if key == "Escape" && self.phase == ModalPhase::Open {
            return self.close(config);
        }
        Vec::new()
    }
}

#[cfg(test)]
#[path = "modal_test.rs"]
mod tests;
