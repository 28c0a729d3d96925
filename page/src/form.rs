//! Contact form validation and simulated submission.
//!
//! DESIGN
//! ======
//! Every submit attempt re-validates all three fields and reports every
//! failure at once. A valid form enters a pending phase for a fixed delay,
//! then completes exactly once: alert, log, reset, restore the submit control.
//! Nothing leaves the page.

use std::fmt;

use serde::Serialize;

use crate::action::{Action, Target, Task};
use crate::config::PageConfig;
use crate::consts::{FIELD_ERROR_BORDER, FIELD_NEUTRAL_BORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error slot.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Message => "message-error",
        }
    }
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::MessageRequired => Field::Message,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required",
            Self::EmailRequired => "Email is required",
            Self::EmailInvalid => "Please enter a valid email address",
            Self::MessageRequired => "Message is required",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validate all fields; an empty result means the form may be sent.
#[must_use]
pub fn validate(values: &FormValues) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if is_blank(&values.name) {
        errors.push(FieldError::NameRequired);
    }
    if is_blank(&values.email) {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(&values.email) {
        errors.push(FieldError::EmailInvalid);
    }
    if is_blank(&values.message) {
        errors.push(FieldError::MessageRequired);
    }
    errors
}

/// Browser whitespace: Unicode `White_Space` plus the byte order mark.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(raw: &str) -> bool {
    raw.chars().all(is_space)
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a `.` in the
/// domain with at least one character on each side.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(is_space) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Pending {
        values: FormValues,
        original_label: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    phase: Phase,
}

impl ContactForm {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Handle a submit attempt. `submit_label` is the control's current label,
    /// restored when the simulated send completes.
    pub fn submit(&mut self, values: FormValues, submit_label: &str, config: &PageConfig) -> Vec<Action> {
        if self.is_pending() {
            log::debug!("submit ignored: previous submission still pending");
            return Vec::new();
        }

        let errors = validate(&values);
        if !errors.is_empty() {
            return error_actions(&errors);
        }

        self.phase = Phase::Pending { values, original_label: submit_label.to_owned() };
        vec![
            Action::SetDisabled { target: Target::SubmitButton, disabled: true },
            Action::text(Target::SubmitButton, config.submit_pending_label.clone()),
            Action::defer_ms(config.submit_delay_ms, Task::CompleteSubmission),
        ]
    }

    /// Clear one field's error as soon as it is edited.
    #[must_use]
    pub fn edit(&self, field: Field) -> Vec<Action> {
        vec![
            Action::text(Target::FieldError(field), ""),
            Action::style(Target::Field(field), "border-color", FIELD_NEUTRAL_BORDER),
        ]
    }

    /// Finish the simulated send. A no-op unless a submission is pending.
    pub fn complete(&mut self, config: &PageConfig) -> Vec<Action> {
        let Phase::Pending { values, original_label } = std::mem::take(&mut self.phase) else {
            return Vec::new();
        };
        vec![
            Action::Alert(config.submit_success_message.clone()),
            Action::LogSubmission(values),
            Action::ResetForm,
            Action::text(Target::SubmitButton, original_label),
            Action::SetDisabled { target: Target::SubmitButton, disabled: false },
        ]
    }
}

fn error_actions(errors: &[FieldError]) -> Vec<Action> {
    let mut actions = Vec::new();
    for field in Field::ALL {
        match errors.iter().find(|err| err.field() == field) {
            Some(err) => {
                actions.push(Action::text(Target::FieldError(field), err.message()));
                actions.push(Action::style(Target::Field(field), "border-color", FIELD_ERROR_BORDER));
            }
            None => actions.push(Action::text(Target::FieldError(field), "")),
        }
    }
    actions
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
