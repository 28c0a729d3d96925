use super::*;

// =============================================================
// Helpers
// =============================================================

fn values(name: &str, email: &str, message: &str) -> FormValues {
    FormValues { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

fn valid() -> FormValues {
    values("Ada", "ada@example.com", "Hello there")
}

fn shown_errors(actions: &[Action]) -> Vec<(Field, String)> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::SetText { target: Target::FieldError(field), text } if !text.is_empty() => {
                Some((*field, text.clone()))
            }
            _ => None,
        })
        .collect()
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_plain_addresses() {
    for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@d.io", "a@b.c.d"] {
        assert!(is_valid_email(ok), "{ok}");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["abc", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co", " a@b.co"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_reports_every_missing_field() {
    assert_eq!(validate(&FormValues::default()), vec![
        FieldError::NameRequired,
        FieldError::EmailRequired,
        FieldError::MessageRequired
    ]);
}

#[test]
fn validate_treats_whitespace_as_empty() {
    assert_eq!(validate(&values("  ", "\t", "\n")).len(), 3);
}

#[test]
fn validate_treats_byte_order_mark_as_empty() {
    assert_eq!(validate(&values("\u{FEFF}", "\u{FEFF} ", "\u{FEFF}\u{FEFF}")), vec![
        FieldError::NameRequired,
        FieldError::EmailRequired,
        FieldError::MessageRequired
    ]);
    assert!(!is_valid_email("a\u{FEFF}b@c.co"));
}

#[test]
fn validate_reports_only_bad_email_format() {
    assert_eq!(validate(&values("Ada", "abc", "Hi")), vec![FieldError::EmailInvalid]);
}

#[test]
fn field_error_maps_to_field_and_message() {
    assert_eq!(FieldError::EmailInvalid.field(), Field::Email);
    assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
    assert_eq!(Field::Message.error_id(), "message-error");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn empty_submit_shows_three_errors_and_stays_idle() {
    let mut form = ContactForm::default();
    let actions = form.submit(FormValues::default(), "Send Message", &PageConfig::default());

    assert_eq!(shown_errors(&actions), vec![
        (Field::Name, "Name is required".to_owned()),
        (Field::Email, "Email is required".to_owned()),
        (Field::Message, "Message is required".to_owned()),
    ]);
    assert!(!form.is_pending());
    assert!(!actions.iter().any(|a| matches!(a, Action::ResetForm | Action::SetDisabled { .. } | Action::Defer { .. })));
}

#[test]
fn malformed_email_shows_single_error() {
    let mut form = ContactForm::default();
    let actions = form.submit(values("Ada", "abc", "Hi"), "Send", &PageConfig::default());

    assert_eq!(shown_errors(&actions), vec![(Field::Email, "Please enter a valid email address".to_owned())]);
    assert!(actions.contains(&Action::text(Target::FieldError(Field::Name), "")));
    assert!(actions.contains(&Action::text(Target::FieldError(Field::Message), "")));
    assert!(actions.contains(&Action::style(Target::Field(Field::Email), "border-color", "#ff6b6b")));
}

#[test]
fn valid_submit_disables_control_and_schedules_completion() {
    let mut form = ContactForm::default();
    let actions = form.submit(valid(), "Send Message", &PageConfig::default());

    assert_eq!(actions, vec![
        Action::SetDisabled { target: Target::SubmitButton, disabled: true },
        Action::text(Target::SubmitButton, "Sending..."),
        Action::defer_ms(2000, Task::CompleteSubmission),
    ]);
    assert!(form.is_pending());
}

#[test]
fn complete_restores_control_exactly_once() {
    let config = PageConfig::default();
    let mut form = ContactForm::default();
    form.submit(valid(), "Send Message", &config);

    let actions = form.complete(&config);
    assert_eq!(actions, vec![
        Action::Alert("Thank you! Your message has been sent.".to_owned()),
        Action::LogSubmission(valid()),
        Action::ResetForm,
        Action::text(Target::SubmitButton, "Send Message"),
        Action::SetDisabled { target: Target::SubmitButton, disabled: false },
    ]);
    assert!(!form.is_pending());
    assert!(form.complete(&config).is_empty());
}

#[test]
fn submit_while_pending_is_ignored() {
    let config = PageConfig::default();
    let mut form = ContactForm::default();
    form.submit(valid(), "Send Message", &config);

    assert!(form.submit(valid(), "Sending...", &config).is_empty());

    let restored = form.complete(&config);
    assert!(restored.contains(&Action::text(Target::SubmitButton, "Send Message")));
}

#[test]
fn edit_clears_only_that_field() {
    let form = ContactForm::default();
    assert_eq!(form.edit(Field::Email), vec![
        Action::text(Target::FieldError(Field::Email), ""),
        Action::style(Target::Field(Field::Email), "border-color", "#333"),
    ]);
}
