use super::*;

#[test]
fn missing_names_the_selector() {
    assert_eq!(DomError::Missing("#backToTop".to_owned()).to_string(), "missing element: #backToTop");
}

#[test]
fn wrong_type_names_expected_interface() {
    let err = DomError::WrongType { selector: ".contact-form".to_owned(), expected: "HTMLFormElement" };
    assert_eq!(err.to_string(), "element .contact-form is not a HTMLFormElement");
}

#[test]
fn js_error_carries_context() {
    let err = DomError::Js { context: "observe", message: "TypeError".to_owned() };
    assert_eq!(err.to_string(), "observe failed: TypeError");
}
